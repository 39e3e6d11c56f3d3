//! Per-user restaurant rollups

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived visit/spend summary for one (user, restaurant) pair
///
/// This is a materialized view of the user's transactions: the aggregator
/// recomputes every field from source data and overwrites the stored row
/// wholesale, so the record has no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRestaurantStats {
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub visit_count: i64,
    pub total_spent: Decimal,
    /// Most recent transaction date for this pair
    pub last_visit: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

impl UserRestaurantStats {
    /// Create an empty rollup anchored at the given date
    pub fn new(user_id: Uuid, restaurant_id: Uuid, last_visit: NaiveDate) -> Self {
        Self {
            user_id,
            restaurant_id,
            visit_count: 0,
            total_spent: Decimal::ZERO,
            last_visit,
            updated_at: Utc::now(),
        }
    }

    /// Fold one transaction into the rollup
    pub fn record_visit(&mut self, amount: Decimal, date: NaiveDate) {
        self.visit_count += 1;
        self.total_spent += amount;
        if date > self.last_visit {
            self.last_visit = date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_visit_accumulates() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 13).unwrap();
        let mut stats = UserRestaurantStats::new(Uuid::new_v4(), Uuid::new_v4(), date);

        stats.record_visit(Decimal::new(1275, 2), date);
        stats.record_visit(
            Decimal::new(2550, 2),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );

        assert_eq!(stats.visit_count, 2);
        assert_eq!(stats.total_spent, Decimal::new(3825, 2));
        assert_eq!(
            stats.last_visit,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_record_visit_keeps_latest_date() {
        let latest = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut stats = UserRestaurantStats::new(Uuid::new_v4(), Uuid::new_v4(), latest);

        stats.record_visit(Decimal::new(1000, 2), latest);
        // An older transaction must not move last_visit backwards
        stats.record_visit(
            Decimal::new(500, 2),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );

        assert_eq!(stats.last_visit, latest);
    }
}

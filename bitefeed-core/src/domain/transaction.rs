//! Transaction domain model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bank transaction imported for a user
///
/// The pair (user_id, external_id) is the idempotency identity: the store
/// enforces it as unique, so re-ingesting the same provider record is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Identifier assigned by the bank-aggregation source
    pub external_id: String,
    pub amount: Decimal,
    /// Merchant text as reported by the provider
    pub merchant: String,
    /// Calendar date, no time zone guarantee
    pub date: NaiveDate,
    pub category: String,
    /// Set by the restaurant matcher shortly after insert; stays null when
    /// no restaurant could be associated
    pub restaurant_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with required fields
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        external_id: impl Into<String>,
        amount: Decimal,
        merchant: impl Into<String>,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            external_id: external_id.into(),
            amount,
            merchant: merchant.into(),
            date,
            category: category.into(),
            restaurant_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction_starts_unmatched() {
        let tx = Transaction::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "txn-1",
            Decimal::new(2550, 2), // $25.50
            "Starbucks",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "Food and Drink",
        );

        assert!(tx.restaurant_id.is_none());
        assert_eq!(tx.external_id, "txn-1");
        assert_eq!(tx.amount, Decimal::new(2550, 2));
    }
}

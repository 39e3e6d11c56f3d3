//! Stats aggregator - per-user restaurant rollups
//!
//! Full recompute, not incremental: every run reads the user's matched
//! transactions and overwrites the stored rollups wholesale, so it is
//! idempotent and safe to re-run at any time. At scale this would become
//! an event-driven incremental updater; that is an optimization, not a
//! correctness requirement.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::UserRestaurantStats;
use crate::ports::Repository;

/// Result of one aggregator run
#[derive(Debug, Serialize)]
pub struct StatsResult {
    pub transactions_considered: i64,
    pub rollups_updated: i64,
    pub rollups_failed: i64,
}

/// Stats aggregation service
pub struct StatsService {
    repository: Arc<dyn Repository>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Recompute all rollups for a user from transaction history
    ///
    /// visit_count = row count, total_spent = sum of amounts, last_visit =
    /// max date, grouped by restaurant. One upsert per group on the
    /// (user_id, restaurant_id) key; a failed upsert is logged and the
    /// remaining groups still run.
    pub fn recompute(&self, user_id: Uuid) -> Result<StatsResult> {
        let transactions = self.repository.get_matched_transactions(user_id)?;

        let mut groups: HashMap<Uuid, UserRestaurantStats> = HashMap::new();
        for tx in &transactions {
            // get_matched_transactions only returns rows with an association
            let restaurant_id = match tx.restaurant_id {
                Some(id) => id,
                None => continue,
            };
            groups
                .entry(restaurant_id)
                .or_insert_with(|| UserRestaurantStats::new(user_id, restaurant_id, tx.date))
                .record_visit(tx.amount, tx.date);
        }

        let mut updated = 0i64;
        let mut failed = 0i64;
        for stats in groups.values() {
            match self.repository.upsert_stats(stats) {
                Ok(()) => updated += 1,
                Err(e) => {
                    eprintln!(
                        "[bitefeed] rollup upsert failed for restaurant {}: {}",
                        stats.restaurant_id, e
                    );
                    failed += 1;
                }
            }
        }

        Ok(StatsResult {
            transactions_considered: transactions.len() as i64,
            rollups_updated: updated,
            rollups_failed: failed,
        })
    }

    /// Read the stored rollups for a user
    pub fn get_stats(&self, user_id: Uuid) -> Result<Vec<UserRestaurantStats>> {
        self.repository.get_stats_for_user(user_id)
    }
}

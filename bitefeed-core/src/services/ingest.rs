//! Ingest service - pulls bank transactions into the store
//!
//! The pipeline per record: restaurant-like filter -> normalize -> dedup
//! by (user_id, external_id) -> insert with null restaurant -> matcher
//! backfill. Every failure is per-record; the batch never aborts because
//! one record was bad.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::{BankDataProvider, RawTransaction, Repository};
use crate::services::normalize::normalize_record;
use crate::services::restaurant::{MatchOutcome, RestaurantService};

/// Category the provider uses for dining transactions
const RESTAURANT_CATEGORY: &str = "Food and Drink";

/// Merchant keywords that mark a transaction as restaurant-like even when
/// the category says otherwise
const MERCHANT_KEYWORDS: &[&str] = &["restaurant", "cafe", "diner"];

/// Whether a raw record looks like a restaurant visit
fn is_restaurant_like(raw: &RawTransaction) -> bool {
    if raw.category.as_deref() == Some(RESTAURANT_CATEGORY) {
        return true;
    }
    match raw.merchant.as_deref() {
        Some(merchant) => {
            let lower = merchant.to_lowercase();
            MERCHANT_KEYWORDS.iter().any(|kw| lower.contains(kw))
        }
        None => false,
    }
}

/// What happened to one record during ingest
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordOutcome {
    /// Persisted, with the restaurant association if one resolved
    Ingested {
        external_id: String,
        restaurant_id: Option<Uuid>,
    },
    /// Already stored for this user - benign no-op
    Skipped { external_id: String },
    /// Failed validation; nothing was written
    Rejected { reason: String },
    /// The store refused the write; logged and passed over
    Failed {
        external_id: String,
        reason: String,
    },
}

/// Result of ingesting one batch
#[derive(Debug, Default, Serialize)]
pub struct IngestResult {
    /// Restaurant-like records found in the batch
    pub discovered: i64,
    pub ingested: i64,
    pub skipped: i64,
    pub rejected: i64,
    pub failed: i64,
    pub outcomes: Vec<RecordOutcome>,
}

/// Result of a full provider sync
#[derive(Debug, Serialize)]
pub struct SyncResult {
    pub provider: String,
    pub start_date: String,
    pub end_date: String,
    pub provider_warnings: Vec<String>,
    pub ingest: IngestResult,
}

/// Ingest service for bank transaction import
pub struct IngestService {
    repository: Arc<dyn Repository>,
    provider: Arc<dyn BankDataProvider>,
    restaurants: RestaurantService,
}

impl IngestService {
    pub fn new(repository: Arc<dyn Repository>, provider: Arc<dyn BankDataProvider>) -> Self {
        let restaurants = RestaurantService::new(Arc::clone(&repository));
        Self {
            repository,
            provider,
            restaurants,
        }
    }

    /// Fetch transactions from the linked provider and ingest them
    ///
    /// Provider failures propagate: without source data there is nothing
    /// to process.
    pub fn sync(&self, user: &User, start_date: NaiveDate, end_date: NaiveDate) -> Result<SyncResult> {
        let integration = self
            .repository
            .get_integration(user.id, self.provider.name())?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "no {} link for user {} - run link first",
                    self.provider.name(),
                    user.id
                ))
            })?;

        let access_token = integration
            .settings
            .get("accessToken")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Config("stored link is missing accessToken".to_string()))?
            .to_string();

        let fetched = self
            .provider
            .get_transactions(&access_token, start_date, end_date)?;

        let ingest = self.ingest(user, &fetched.transactions)?;

        Ok(SyncResult {
            provider: self.provider.name().to_string(),
            start_date: start_date.format("%Y-%m-%d").to_string(),
            end_date: end_date.format("%Y-%m-%d").to_string(),
            provider_warnings: fetched.warnings,
            ingest,
        })
    }

    /// Ingest a batch of raw records for a user
    ///
    /// The user row is created first so the transaction foreign key holds.
    pub fn ingest(&self, user: &User, records: &[RawTransaction]) -> Result<IngestResult> {
        self.repository.ensure_user(user)?;

        let mut result = IngestResult::default();

        for raw in records.iter().filter(|r| is_restaurant_like(r)) {
            result.discovered += 1;
            let outcome = self.ingest_one(user.id, raw);
            match &outcome {
                RecordOutcome::Ingested { .. } => result.ingested += 1,
                RecordOutcome::Skipped { .. } => result.skipped += 1,
                RecordOutcome::Rejected { .. } => result.rejected += 1,
                RecordOutcome::Failed { .. } => result.failed += 1,
            }
            result.outcomes.push(outcome);
        }

        Ok(result)
    }

    fn ingest_one(&self, user_id: Uuid, raw: &RawTransaction) -> RecordOutcome {
        let tx = match normalize_record(user_id, raw) {
            Ok(tx) => tx,
            Err(e) => {
                eprintln!("[bitefeed] invalid record, skipping: {}", e);
                return RecordOutcome::Rejected {
                    reason: e.to_string(),
                };
            }
        };

        match self.repository.transaction_exists(user_id, &tx.external_id) {
            Ok(true) => {
                return RecordOutcome::Skipped {
                    external_id: tx.external_id,
                }
            }
            Ok(false) => {}
            Err(e) => {
                eprintln!("[bitefeed] dedup check failed for {}: {}", tx.external_id, e);
                return RecordOutcome::Failed {
                    external_id: tx.external_id,
                    reason: e.to_string(),
                };
            }
        }

        if let Err(e) = self.repository.insert_transaction(&tx) {
            // A concurrent ingest may have won the race; the store's
            // uniqueness constraint makes that a benign duplicate.
            if e.is_unique_violation() {
                return RecordOutcome::Skipped {
                    external_id: tx.external_id,
                };
            }
            eprintln!("[bitefeed] insert failed for {}: {}", tx.external_id, e);
            return RecordOutcome::Failed {
                external_id: tx.external_id,
                reason: e.to_string(),
            };
        }

        // Associate a restaurant after the insert; a match failure leaves
        // the association null rather than undoing the write.
        let restaurant_id = match self.restaurants.resolve(&tx.merchant) {
            MatchOutcome::Matched { restaurant } | MatchOutcome::Created { restaurant } => {
                match self.repository.set_transaction_restaurant(tx.id, restaurant.id) {
                    Ok(()) => Some(restaurant.id),
                    Err(e) => {
                        eprintln!(
                            "[bitefeed] restaurant backfill failed for {}: {}",
                            tx.external_id, e
                        );
                        None
                    }
                }
            }
            MatchOutcome::Failed { .. } => None,
        };

        RecordOutcome::Ingested {
            external_id: tx.external_id,
            restaurant_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(merchant: &str, category: &str) -> RawTransaction {
        RawTransaction {
            id: Some("txn-1".to_string()),
            amount: Some(10.0),
            merchant: Some(merchant.to_string()),
            date: Some("2024-01-15".to_string()),
            category: Some(category.to_string()),
        }
    }

    #[test]
    fn test_restaurant_like_by_category() {
        assert!(is_restaurant_like(&raw("Starbucks", "Food and Drink")));
        assert!(!is_restaurant_like(&raw("Shell Oil", "Gas")));
    }

    #[test]
    fn test_restaurant_like_by_merchant_keyword() {
        assert!(is_restaurant_like(&raw("Joe's Diner", "Uncategorized")));
        assert!(is_restaurant_like(&raw("CAFE MILANO", "Shopping")));
        assert!(is_restaurant_like(&raw("The Restaurant at Meadowood", "Travel")));
    }

    #[test]
    fn test_missing_fields_are_not_restaurant_like() {
        let empty = RawTransaction::default();
        assert!(!is_restaurant_like(&empty));
    }
}

//! Repository port - persistence store abstraction
//!
//! The store owns Transaction, Restaurant and rollup records; the pipeline
//! only produces and consumes them through this trait. Methods are
//! synchronous: each pipeline invocation runs to completion sequentially
//! and store calls block the calling thread until the store responds.
//!
//! The store must enforce uniqueness of (user_id, external_id) on
//! transactions - that constraint is the external invariant the ingest
//! dedup relies on under concurrent ingestion.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{Restaurant, Transaction, User, UserRestaurantStats};

/// A stored provider link for one user
#[derive(Debug, Clone, Serialize)]
pub struct Integration {
    pub user_id: Uuid,
    pub provider: String,
    /// Provider-specific settings (e.g., access token)
    pub settings: JsonValue,
    pub created_at: DateTime<Utc>,
}

/// Earliest/latest transaction dates, as formatted strings
#[derive(Debug, Serialize)]
pub struct DateRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

/// Persistence store abstraction
///
/// Store failures surface as [`crate::domain::result::StoreError`] variants
/// wrapped in the core error type, so callers can distinguish benign
/// duplicate-key conflicts from integrity and permission errors.
pub trait Repository: Send + Sync {
    // === Users ===

    /// Insert the user row when absent; an existing row is left untouched
    fn ensure_user(&self, user: &User) -> Result<()>;

    /// Get all users
    fn get_users(&self) -> Result<Vec<User>>;

    /// Get user by ID
    fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>>;

    // === Transactions ===

    /// Insert a new transaction; fails with a unique violation when the
    /// (user_id, external_id) pair already exists
    fn insert_transaction(&self, tx: &Transaction) -> Result<()>;

    /// Whether a transaction with this (user_id, external_id) pair exists
    fn transaction_exists(&self, user_id: Uuid, external_id: &str) -> Result<bool>;

    /// Backfill the restaurant association on a stored transaction
    fn set_transaction_restaurant(&self, id: Uuid, restaurant_id: Uuid) -> Result<()>;

    /// Get all transactions for a user, newest first
    fn get_transactions_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>>;

    /// Get a user's transactions that have a restaurant association
    fn get_matched_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>>;

    /// Delete a transaction (test and cleanup paths only)
    fn delete_transaction(&self, id: Uuid) -> Result<()>;

    fn get_transaction_count(&self) -> Result<i64>;

    fn get_transaction_date_range(&self) -> Result<DateRange>;

    // === Restaurants ===

    /// Get all restaurants
    fn get_restaurants(&self) -> Result<Vec<Restaurant>>;

    /// Get restaurant by ID
    fn get_restaurant_by_id(&self, id: Uuid) -> Result<Option<Restaurant>>;

    /// Insert a new restaurant
    fn insert_restaurant(&self, restaurant: &Restaurant) -> Result<()>;

    fn get_restaurant_count(&self) -> Result<i64>;

    // === Rollups ===

    /// Insert or fully replace the rollup for (user_id, restaurant_id)
    fn upsert_stats(&self, stats: &UserRestaurantStats) -> Result<()>;

    /// Get all rollups for a user
    fn get_stats_for_user(&self, user_id: Uuid) -> Result<Vec<UserRestaurantStats>>;

    fn get_stats_count(&self) -> Result<i64>;

    // === Integrations ===

    /// Insert or update a provider link for a user
    fn upsert_integration(&self, user_id: Uuid, provider: &str, settings: &JsonValue)
        -> Result<()>;

    /// Get a user's link for a specific provider
    fn get_integration(&self, user_id: Uuid, provider: &str) -> Result<Option<Integration>>;

    /// Get all stored links
    fn get_integrations(&self) -> Result<Vec<Integration>>;

    /// Remove a user's link; returns false when none existed
    fn delete_integration(&self, user_id: Uuid, provider: &str) -> Result<bool>;

    // === Health checks ===

    /// Transactions whose restaurant_id references a missing restaurant,
    /// as "transaction_id:restaurant_id" strings
    fn check_orphaned_restaurant_refs(&self) -> Result<Vec<String>>;

    /// (user_id, external_id) pairs stored more than once - should be
    /// impossible while the uniqueness constraint holds
    fn check_duplicate_external_ids(&self) -> Result<Vec<String>>;

    /// Transactions with unreasonable dates (before 1970 or more than a
    /// year in the future), as "transaction_id|date|merchant|amount" strings
    fn check_date_sanity(&self) -> Result<Vec<String>>;

    /// Rollup rows whose (user, restaurant) pair no longer has any matched
    /// transactions, as "user_id:restaurant_id" strings
    fn check_stale_stats(&self) -> Result<Vec<String>>;
}

//! Integration tests for the bitefeed-core pipeline
//!
//! These tests verify the ingest/match/aggregate flow using a real DuckDB.
//! The bank provider is the in-process sandbox; all database operations
//! are real.
//!
//! Run with: cargo test --test pipeline_tests -- --nocapture

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use tempfile::TempDir;
use uuid::Uuid;

use bitefeed_core::adapters::duckdb::DuckDbRepository;
use bitefeed_core::adapters::sandbox::SandboxProvider;
use bitefeed_core::domain::result::{Result, StoreError};
use bitefeed_core::domain::{Restaurant, Transaction, User, UserRestaurantStats};
use bitefeed_core::ports::{
    BankDataProvider, DateRange, Integration, RawTransaction, Repository,
};
use bitefeed_core::services::{
    DoctorService, IngestService, LinkService, RecordOutcome, SeedService, StatsService,
    StatusService,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a test repository with schema initialized
fn create_test_repo(temp_dir: &TempDir) -> Arc<DuckDbRepository> {
    let db_path = temp_dir.path().join("test.duckdb");
    let repo = DuckDbRepository::new(&db_path).expect("Failed to create repository");
    repo.ensure_schema().expect("Failed to initialize schema");
    Arc::new(repo)
}

fn create_test_user() -> User {
    User::new(Uuid::new_v4(), "diner@example.com", "Test Diner")
}

fn ingest_service(repo: &Arc<DuckDbRepository>) -> IngestService {
    IngestService::new(repo.clone(), Arc::new(SandboxProvider::new()))
}

fn raw_record(id: &str, amount: f64, merchant: &str, date: &str) -> RawTransaction {
    RawTransaction {
        id: Some(id.to_string()),
        amount: Some(amount),
        merchant: Some(merchant.to_string()),
        date: Some(date.to_string()),
        category: Some("Food and Drink".to_string()),
    }
}

// ============================================================================
// Ingest Scenario Tests
// ============================================================================

/// The canonical scenario: one record creates a transaction, a restaurant,
/// the backfilled association, and a correct rollup.
#[test]
fn test_single_record_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();

    let records = vec![raw_record("t1", 25.50, "Starbucks", "2024-01-15")];
    let result = ingest_service(&repo).ingest(&user, &records).unwrap();

    assert_eq!(result.discovered, 1);
    assert_eq!(result.ingested, 1);
    assert_eq!(result.skipped, 0);

    // One transaction, associated to one restaurant named Starbucks
    let txs = repo.get_transactions_for_user(user.id).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].external_id, "t1");
    assert_eq!(txs[0].amount, Decimal::new(2550, 2));

    let restaurants = repo.get_restaurants().unwrap();
    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].name, "Starbucks");
    assert_eq!(txs[0].restaurant_id, Some(restaurants[0].id));

    // Rollup matches the single visit
    let stats_service = StatsService::new(repo.clone() as Arc<dyn Repository>);
    stats_service.recompute(user.id).unwrap();
    let stats = stats_service.get_stats(user.id).unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].restaurant_id, restaurants[0].id);
    assert_eq!(stats[0].visit_count, 1);
    assert_eq!(stats[0].total_spent, Decimal::new(2550, 2));
    assert_eq!(
        stats[0].last_visit,
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    );
}

/// Re-ingesting the same batch twice yields exactly the same stored set.
#[test]
fn test_reingest_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();
    let service = ingest_service(&repo);

    let records = vec![
        raw_record("t1", 25.50, "Starbucks", "2024-01-15"),
        raw_record("t2", 45.00, "McDonald's", "2024-01-14"),
    ];

    let first = service.ingest(&user, &records).unwrap();
    assert_eq!(first.ingested, 2);

    let second = service.ingest(&user, &records).unwrap();
    assert_eq!(second.ingested, 0);
    assert_eq!(second.skipped, 2);

    assert_eq!(repo.get_transaction_count().unwrap(), 2);
    assert_eq!(repo.get_restaurant_count().unwrap(), 2);

    // Rollups are unchanged by the second run
    let stats_service = StatsService::new(repo.clone() as Arc<dyn Repository>);
    stats_service.recompute(user.id).unwrap();
    let before = stats_service.get_stats(user.id).unwrap();
    stats_service.recompute(user.id).unwrap();
    let after = stats_service.get_stats(user.id).unwrap();

    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.visit_count, a.visit_count);
        assert_eq!(b.total_spent, a.total_spent);
        assert_eq!(b.last_visit, a.last_visit);
    }
}

/// A record missing its merchant is rejected without touching the rest of
/// the batch.
#[test]
fn test_invalid_record_does_not_poison_batch() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();

    let mut bad = raw_record("t-bad", 10.00, "ignored", "2024-01-10");
    bad.merchant = None;
    // Missing merchant but restaurant category, so the filter still admits it
    let records = vec![
        raw_record("t1", 25.50, "Starbucks", "2024-01-15"),
        bad,
        raw_record("t2", 12.75, "Chipotle", "2024-01-13"),
    ];

    let result = ingest_service(&repo).ingest(&user, &records).unwrap();

    assert_eq!(result.ingested, 2);
    assert_eq!(result.rejected, 1);
    assert_eq!(repo.get_transaction_count().unwrap(), 2);
    assert!(result.outcomes.iter().any(|o| matches!(
        o,
        RecordOutcome::Rejected { reason } if reason.contains("merchant")
    )));
}

/// Only restaurant-like records enter the pipeline.
#[test]
fn test_non_restaurant_records_are_filtered() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();

    let mut gas = raw_record("t-gas", 55.00, "Shell Oil", "2024-01-12");
    gas.category = Some("Gas".to_string());
    let mut keyword = raw_record("t-diner", 18.00, "Mel's Diner", "2024-01-11");
    keyword.category = Some("Uncategorized".to_string());

    let records = vec![gas, keyword];
    let result = ingest_service(&repo).ingest(&user, &records).unwrap();

    // Only the keyword match was considered at all
    assert_eq!(result.discovered, 1);
    assert_eq!(result.ingested, 1);

    let txs = repo.get_transactions_for_user(user.id).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].merchant, "Mel's Diner");
}

// ============================================================================
// Matcher Tests
// ============================================================================

/// Substring-equal merchant text resolves to one restaurant after the
/// first creation.
#[test]
fn test_matcher_reuses_restaurant_across_merchant_variants() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();
    let service = ingest_service(&repo);

    let records = vec![
        raw_record("t1", 25.50, "Starbucks", "2024-01-15"),
        raw_record("t2", 5.65, "STARBUCKS #1234", "2024-01-16"),
        raw_record("t3", 4.50, "starbucks", "2024-01-17"),
    ];
    service.ingest(&user, &records).unwrap();

    assert_eq!(repo.get_restaurant_count().unwrap(), 1);

    let txs = repo.get_matched_transactions(user.id).unwrap();
    assert_eq!(txs.len(), 3);
    let first_id = txs[0].restaurant_id;
    assert!(txs.iter().all(|tx| tx.restaurant_id == first_id));
}

/// Different merchants get different restaurants.
#[test]
fn test_matcher_separates_unrelated_merchants() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();

    let records = vec![
        raw_record("t1", 25.50, "Starbucks", "2024-01-15"),
        raw_record("t2", 45.00, "McDonald's", "2024-01-14"),
        raw_record("t3", 12.75, "Chipotle", "2024-01-13"),
    ];
    ingest_service(&repo).ingest(&user, &records).unwrap();

    assert_eq!(repo.get_restaurant_count().unwrap(), 3);
}

/// Created restaurants carry the placeholder address.
#[test]
fn test_created_restaurant_has_placeholder_address() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();

    let records = vec![raw_record("t1", 25.50, "Starbucks", "2024-01-15")];
    ingest_service(&repo).ingest(&user, &records).unwrap();

    let restaurants = repo.get_restaurants().unwrap();
    assert_eq!(restaurants[0].address, "Unknown Address");
    assert!(restaurants[0].coordinates.is_none());
}

// ============================================================================
// Aggregator Tests
// ============================================================================

/// visit_count / total_spent / last_visit match the matched transactions.
#[test]
fn test_rollups_match_transaction_history() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();

    let records = vec![
        raw_record("t1", 25.50, "Starbucks", "2024-01-15"),
        raw_record("t2", 5.65, "Starbucks", "2024-01-10"),
        raw_record("t3", 12.75, "Chipotle", "2024-01-13"),
    ];
    ingest_service(&repo).ingest(&user, &records).unwrap();

    let stats_service = StatsService::new(repo.clone() as Arc<dyn Repository>);
    let result = stats_service.recompute(user.id).unwrap();
    assert_eq!(result.transactions_considered, 3);
    assert_eq!(result.rollups_updated, 2);
    assert_eq!(result.rollups_failed, 0);

    let restaurants = repo.get_restaurants().unwrap();
    let starbucks = restaurants.iter().find(|r| r.name == "Starbucks").unwrap();
    let chipotle = restaurants.iter().find(|r| r.name == "Chipotle").unwrap();

    let stats = stats_service.get_stats(user.id).unwrap();
    let sb = stats
        .iter()
        .find(|s| s.restaurant_id == starbucks.id)
        .unwrap();
    assert_eq!(sb.visit_count, 2);
    assert_eq!(sb.total_spent, Decimal::new(3115, 2)); // 25.50 + 5.65
    assert_eq!(sb.last_visit, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

    let ch = stats
        .iter()
        .find(|s| s.restaurant_id == chipotle.id)
        .unwrap();
    assert_eq!(ch.visit_count, 1);
    assert_eq!(ch.total_spent, Decimal::new(1275, 2));
}

/// The aggregator fully replaces prior rollups on each run.
#[test]
fn test_recompute_overwrites_prior_rollups() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();
    let service = ingest_service(&repo);
    let stats_service = StatsService::new(repo.clone() as Arc<dyn Repository>);

    service
        .ingest(&user, &[raw_record("t1", 25.50, "Starbucks", "2024-01-15")])
        .unwrap();
    stats_service.recompute(user.id).unwrap();

    // A later visit changes count, total and last_visit on the same row
    service
        .ingest(&user, &[raw_record("t2", 10.00, "Starbucks", "2024-02-01")])
        .unwrap();
    stats_service.recompute(user.id).unwrap();

    let stats = stats_service.get_stats(user.id).unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].visit_count, 2);
    assert_eq!(stats[0].total_spent, Decimal::new(3550, 2));
    assert_eq!(
        stats[0].last_visit,
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    );
}

/// Rollups are scoped per user.
#[test]
fn test_rollups_are_per_user() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let alice = create_test_user();
    let bob = User::new(Uuid::new_v4(), "bob@example.com", "Bob");
    let service = ingest_service(&repo);
    let stats_service = StatsService::new(repo.clone() as Arc<dyn Repository>);

    service
        .ingest(&alice, &[raw_record("t1", 25.50, "Starbucks", "2024-01-15")])
        .unwrap();
    service
        .ingest(
            &bob,
            &[
                raw_record("t1", 5.65, "Starbucks", "2024-01-16"),
                raw_record("t2", 12.75, "Chipotle", "2024-01-17"),
            ],
        )
        .unwrap();

    stats_service.recompute(alice.id).unwrap();
    stats_service.recompute(bob.id).unwrap();

    // Same external_id under different users is two distinct transactions
    assert_eq!(repo.get_transaction_count().unwrap(), 3);
    assert_eq!(stats_service.get_stats(alice.id).unwrap().len(), 1);
    assert_eq!(stats_service.get_stats(bob.id).unwrap().len(), 2);
}

// ============================================================================
// Store Failure Tests
// ============================================================================

/// Wrapper store that refuses restaurant writes, for soft-fail coverage
struct NoRestaurantWrites {
    inner: Arc<DuckDbRepository>,
}

impl Repository for NoRestaurantWrites {
    fn ensure_user(&self, user: &User) -> Result<()> {
        self.inner.ensure_user(user)
    }
    fn get_users(&self) -> Result<Vec<User>> {
        self.inner.get_users()
    }
    fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.inner.get_user_by_id(id)
    }
    fn insert_transaction(&self, tx: &Transaction) -> Result<()> {
        self.inner.insert_transaction(tx)
    }
    fn transaction_exists(&self, user_id: Uuid, external_id: &str) -> Result<bool> {
        self.inner.transaction_exists(user_id, external_id)
    }
    fn set_transaction_restaurant(&self, id: Uuid, restaurant_id: Uuid) -> Result<()> {
        self.inner.set_transaction_restaurant(id, restaurant_id)
    }
    fn get_transactions_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        self.inner.get_transactions_for_user(user_id)
    }
    fn get_matched_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        self.inner.get_matched_transactions(user_id)
    }
    fn delete_transaction(&self, id: Uuid) -> Result<()> {
        self.inner.delete_transaction(id)
    }
    fn get_transaction_count(&self) -> Result<i64> {
        self.inner.get_transaction_count()
    }
    fn get_transaction_date_range(&self) -> Result<DateRange> {
        self.inner.get_transaction_date_range()
    }
    fn get_restaurants(&self) -> Result<Vec<Restaurant>> {
        self.inner.get_restaurants()
    }
    fn get_restaurant_by_id(&self, id: Uuid) -> Result<Option<Restaurant>> {
        self.inner.get_restaurant_by_id(id)
    }
    fn insert_restaurant(&self, _restaurant: &Restaurant) -> Result<()> {
        Err(StoreError::PermissionDenied("restaurant writes blocked".to_string()).into())
    }
    fn get_restaurant_count(&self) -> Result<i64> {
        self.inner.get_restaurant_count()
    }
    fn upsert_stats(&self, stats: &UserRestaurantStats) -> Result<()> {
        self.inner.upsert_stats(stats)
    }
    fn get_stats_for_user(&self, user_id: Uuid) -> Result<Vec<UserRestaurantStats>> {
        self.inner.get_stats_for_user(user_id)
    }
    fn get_stats_count(&self) -> Result<i64> {
        self.inner.get_stats_count()
    }
    fn upsert_integration(
        &self,
        user_id: Uuid,
        provider: &str,
        settings: &JsonValue,
    ) -> Result<()> {
        self.inner.upsert_integration(user_id, provider, settings)
    }
    fn get_integration(&self, user_id: Uuid, provider: &str) -> Result<Option<Integration>> {
        self.inner.get_integration(user_id, provider)
    }
    fn get_integrations(&self) -> Result<Vec<Integration>> {
        self.inner.get_integrations()
    }
    fn delete_integration(&self, user_id: Uuid, provider: &str) -> Result<bool> {
        self.inner.delete_integration(user_id, provider)
    }
    fn check_orphaned_restaurant_refs(&self) -> Result<Vec<String>> {
        self.inner.check_orphaned_restaurant_refs()
    }
    fn check_duplicate_external_ids(&self) -> Result<Vec<String>> {
        self.inner.check_duplicate_external_ids()
    }
    fn check_date_sanity(&self) -> Result<Vec<String>> {
        self.inner.check_date_sanity()
    }
    fn check_stale_stats(&self) -> Result<Vec<String>> {
        self.inner.check_stale_stats()
    }
}

/// A failing restaurant creation leaves the transaction stored with a null
/// association instead of failing the record.
#[test]
fn test_matcher_failure_is_soft() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let store: Arc<dyn Repository> = Arc::new(NoRestaurantWrites { inner: repo.clone() });
    let service = IngestService::new(store, Arc::new(SandboxProvider::new()));
    let user = create_test_user();

    let result = service
        .ingest(&user, &[raw_record("t1", 25.50, "Starbucks", "2024-01-15")])
        .unwrap();

    assert_eq!(result.ingested, 1);
    assert_eq!(result.failed, 0);
    assert!(matches!(
        result.outcomes[0],
        RecordOutcome::Ingested {
            restaurant_id: None,
            ..
        }
    ));

    let txs = repo.get_transactions_for_user(user.id).unwrap();
    assert_eq!(txs.len(), 1);
    assert!(txs[0].restaurant_id.is_none());
    assert_eq!(repo.get_restaurant_count().unwrap(), 0);
}

// ============================================================================
// Link + Sync Tests
// ============================================================================

/// Full flow through the sandbox provider: link, sync, aggregate.
#[test]
fn test_link_then_sync_from_sandbox() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let provider: Arc<dyn BankDataProvider> = Arc::new(SandboxProvider::new());
    let store: Arc<dyn Repository> = repo.clone();
    let link_service = LinkService::new(Arc::clone(&store), Arc::clone(&provider));
    let ingest = IngestService::new(Arc::clone(&store), Arc::clone(&provider));
    let user = create_test_user();

    let link = link_service
        .link(&user, "public-sandbox-token", &serde_json::json!({}))
        .unwrap();
    assert_eq!(link.provider, "sandbox");

    let result = ingest
        .sync(
            &user,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();

    // The sandbox serves three dining transactions
    assert_eq!(result.ingest.discovered, 3);
    assert_eq!(result.ingest.ingested, 3);
    assert_eq!(repo.get_restaurant_count().unwrap(), 3);

    // Second sync is a complete no-op
    let again = ingest
        .sync(
            &user,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();
    assert_eq!(again.ingest.ingested, 0);
    assert_eq!(again.ingest.skipped, 3);
}

/// Syncing without a stored link fails up front.
#[test]
fn test_sync_without_link_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();

    let err = ingest_service(&repo)
        .sync(
            &user,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("link"));
}

/// Unlink removes the stored integration.
#[test]
fn test_unlink_removes_integration() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let provider: Arc<dyn BankDataProvider> = Arc::new(SandboxProvider::new());
    let link_service = LinkService::new(repo.clone() as Arc<dyn Repository>, provider);
    let user = create_test_user();

    link_service
        .link(&user, "public-sandbox-token", &serde_json::json!({}))
        .unwrap();
    assert_eq!(link_service.list().unwrap().len(), 1);

    assert!(link_service.unlink(user.id).unwrap());
    assert!(link_service.list().unwrap().is_empty());
    assert!(!link_service.unlink(user.id).unwrap());
}

// ============================================================================
// Seed + Doctor + Status Tests
// ============================================================================

/// Seeding is duplicate-safe and produces rollups.
#[test]
fn test_seed_twice_creates_once() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let seed = SeedService::new(
        repo.clone() as Arc<dyn Repository>,
        Arc::new(SandboxProvider::new()),
    );
    let user = create_test_user();

    let first = seed.seed(&user).unwrap();
    assert_eq!(first.restaurants_created, 5);
    assert_eq!(first.transactions_ingested, 5);
    assert_eq!(first.rollups_updated, 5);

    let second = seed.seed(&user).unwrap();
    assert_eq!(second.restaurants_created, 0);
    assert_eq!(second.transactions_ingested, 0);
    assert_eq!(second.transactions_skipped, 5);

    assert_eq!(repo.get_restaurant_count().unwrap(), 5);
    assert_eq!(repo.get_transaction_count().unwrap(), 5);
}

/// Seeded transactions reuse the seeded restaurants by name.
#[test]
fn test_seed_matches_existing_restaurants() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let seed = SeedService::new(
        repo.clone() as Arc<dyn Repository>,
        Arc::new(SandboxProvider::new()),
    );
    let user = create_test_user();

    seed.seed(&user).unwrap();

    // Every transaction got an association and no extra restaurant appeared
    let matched = repo.get_matched_transactions(user.id).unwrap();
    assert_eq!(matched.len(), 5);
    assert_eq!(repo.get_restaurant_count().unwrap(), 5);

    // The seeded Starbucks has real address data, not the placeholder
    let restaurants = repo.get_restaurants().unwrap();
    let starbucks = restaurants.iter().find(|r| r.name == "Starbucks").unwrap();
    assert!(starbucks.address.contains("San Francisco"));
    assert!(starbucks.coordinates.is_some());
}

/// Doctor passes on a healthy store and runs its write probe cleanly.
#[test]
fn test_doctor_on_healthy_store() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();

    ingest_service(&repo)
        .ingest(&user, &[raw_record("t1", 25.50, "Starbucks", "2024-01-15")])
        .unwrap();
    StatsService::new(repo.clone() as Arc<dyn Repository>)
        .recompute(user.id)
        .unwrap();

    let doctor = DoctorService::new(repo.clone() as Arc<dyn Repository>);
    let result = doctor.run_checks().unwrap();

    assert_eq!(result.summary.errors, 0);
    assert_eq!(result.summary.warnings, 0);
    assert!(result.checks["store_write_path"].status == "pass");

    // The probe transaction was cleaned up
    assert_eq!(repo.get_transaction_count().unwrap(), 1);
}

/// Status reflects the stored counts.
#[test]
fn test_status_summary_counts() {
    let temp_dir = TempDir::new().unwrap();
    let repo = create_test_repo(&temp_dir);
    let user = create_test_user();

    ingest_service(&repo)
        .ingest(
            &user,
            &[
                raw_record("t1", 25.50, "Starbucks", "2024-01-15"),
                raw_record("t2", 12.75, "Chipotle", "2024-01-13"),
            ],
        )
        .unwrap();
    StatsService::new(repo.clone() as Arc<dyn Repository>)
        .recompute(user.id)
        .unwrap();

    let status = StatusService::new(repo.clone() as Arc<dyn Repository>)
        .get_status()
        .unwrap();

    assert_eq!(status.total_users, 1);
    assert_eq!(status.total_transactions, 2);
    assert_eq!(status.total_restaurants, 2);
    assert_eq!(status.total_rollups, 2);
    assert_eq!(status.date_range.earliest.as_deref(), Some("2024-01-13"));
    assert_eq!(status.date_range.latest.as_deref(), Some("2024-01-15"));
}

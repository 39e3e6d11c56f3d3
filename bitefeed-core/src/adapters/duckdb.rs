//! DuckDB repository implementation

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use duckdb::{params, Connection};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::{Error, Result, StoreError};
use crate::domain::{Coordinates, Restaurant, Transaction, User, UserRestaurantStats};
use crate::ports::{DateRange, Integration, Repository};
use crate::services::MigrationService;

/// Maximum number of retries when the database file is locked
const MAX_RETRIES: u32 = 5;

/// Initial retry delay in milliseconds (doubles each retry: 50, 100, 200, 400, 800ms)
const INITIAL_RETRY_DELAY_MS: u64 = 50;

/// Check if an error message indicates a file locking issue that should be retried
fn is_retryable_error(err_msg: &str) -> bool {
    let lower = err_msg.to_lowercase();
    // Windows error messages
    lower.contains("being used by another process")
        || lower.contains("cannot access the file")
        // Unix/macOS error messages
        || lower.contains("resource temporarily unavailable")
        || lower.contains("database is locked")
        || lower.contains("file is already open")
}

/// Map a DuckDB error onto the store error taxonomy
///
/// duckdb-rs surfaces constraint failures as opaque strings, so this is
/// message inspection. Unknown messages fall through to `Other`.
fn map_store_error(err: duckdb::Error) -> Error {
    let msg = err.to_string();
    let lower = msg.to_lowercase();
    let store = if lower.contains("duplicate key") || lower.contains("unique constraint") {
        StoreError::UniqueViolation(msg)
    } else if lower.contains("foreign key") {
        StoreError::ForeignKeyViolation(msg)
    } else if lower.contains("not null") || lower.contains("null value") {
        StoreError::NotNullViolation(msg)
    } else if lower.contains("permission denied") || lower.contains("read-only") {
        StoreError::PermissionDenied(msg)
    } else if is_retryable_error(&msg) {
        StoreError::Unavailable(msg)
    } else {
        StoreError::Other(msg)
    };
    Error::Store(store)
}

/// DuckDB repository implementation
pub struct DuckDbRepository {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl DuckDbRepository {
    /// Open (or create) the database at the given path
    ///
    /// Includes retry logic with exponential backoff for file locking errors,
    /// which can occur when multiple operations try to access the database
    /// simultaneously.
    pub fn new(db_path: &Path) -> Result<Self> {
        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            match Self::try_open_connection(db_path) {
                Ok(conn) => {
                    return Ok(Self {
                        conn: Mutex::new(conn),
                        db_path: db_path.to_path_buf(),
                    });
                }
                Err(e) => {
                    let err_msg = e.to_string();
                    if is_retryable_error(&err_msg) && attempt < MAX_RETRIES - 1 {
                        let delay =
                            Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt));
                        eprintln!(
                            "[bitefeed] Database busy, retrying in {}ms (attempt {}/{}): {}",
                            delay.as_millis(),
                            attempt + 1,
                            MAX_RETRIES,
                            err_msg
                        );
                        thread::sleep(delay);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            StoreError::Unavailable(format!("failed to open database after {} retries", MAX_RETRIES))
                .into()
        }))
    }

    /// Attempt to open a database connection (called by new() with retry logic)
    fn try_open_connection(db_path: &Path) -> Result<Connection> {
        // Disable extension autoloading to avoid macOS code signing issues
        // (cached extensions in ~/.duckdb/extensions may have different Team IDs)
        let config = duckdb::Config::default()
            .enable_autoload_extension(false)
            .map_err(map_store_error)?;
        Connection::open_with_flags(db_path, config).map_err(map_store_error)
    }

    /// Run database migrations
    pub fn run_migrations(&self) -> Result<crate::services::MigrationResult> {
        let conn = self.lock_conn()?;
        let migration_service = MigrationService::new(&conn);
        migration_service.run_pending()
    }

    /// Ensure the database schema exists (runs pending migrations)
    pub fn ensure_schema(&self) -> Result<()> {
        self.run_migrations()?;
        Ok(())
    }

    /// Path to the database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()).into())
    }

    // === Row mapping ===

    fn row_to_user(row: &duckdb::Row) -> User {
        // Columns: 0: user_id, 1: email, 2: name, 3: avatar, 4: created_at
        let id_str: String = row.get(0).unwrap_or_default();
        let created_str: String = row.get(4).unwrap_or_default();

        User {
            id: parse_uuid(&id_str),
            email: row.get(1).unwrap_or_default(),
            name: row.get(2).unwrap_or_default(),
            avatar: row.get(3).ok(),
            created_at: parse_timestamp(&created_str),
        }
    }

    fn row_to_restaurant(row: &duckdb::Row) -> Restaurant {
        // Columns: 0: restaurant_id, 1: name, 2: address, 3: latitude,
        // 4: longitude, 5: hero_image, 6: created_at
        let id_str: String = row.get(0).unwrap_or_default();
        let lat: Option<f64> = row.get::<_, Option<f64>>(3).ok().flatten();
        let lng: Option<f64> = row.get::<_, Option<f64>>(4).ok().flatten();
        let created_str: String = row.get(6).unwrap_or_default();

        Restaurant {
            id: parse_uuid(&id_str),
            name: row.get(1).unwrap_or_default(),
            address: row.get(2).unwrap_or_default(),
            coordinates: match (lat, lng) {
                (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
                _ => None,
            },
            hero_image: row.get(5).ok(),
            created_at: parse_timestamp(&created_str),
        }
    }

    fn row_to_transaction(row: &duckdb::Row) -> Transaction {
        // Columns: 0: transaction_id, 1: user_id, 2: external_id, 3: amount,
        // 4: merchant, 5: transaction_date, 6: category, 7: restaurant_id,
        // 8: created_at, 9: updated_at
        let id_str: String = row.get(0).unwrap_or_default();
        let user_id_str: String = row.get(1).unwrap_or_default();
        let amount_str: String = row.get(3).unwrap_or_default();
        let date_str: String = row.get(5).unwrap_or_default();
        let restaurant_id_str: Option<String> = row.get(7).ok();
        let created_str: String = row.get(8).unwrap_or_default();
        let updated_str: String = row.get(9).unwrap_or_default();

        Transaction {
            id: parse_uuid(&id_str),
            user_id: parse_uuid(&user_id_str),
            external_id: row.get(2).unwrap_or_default(),
            amount: Decimal::from_str_exact(&amount_str).unwrap_or_default(),
            merchant: row.get(4).unwrap_or_default(),
            date: parse_date(&date_str),
            category: row.get(6).unwrap_or_default(),
            restaurant_id: restaurant_id_str.and_then(|s| Uuid::parse_str(&s).ok()),
            created_at: parse_timestamp(&created_str),
            updated_at: parse_timestamp(&updated_str),
        }
    }

    fn row_to_stats(row: &duckdb::Row) -> UserRestaurantStats {
        // Columns: 0: user_id, 1: restaurant_id, 2: visit_count,
        // 3: total_spent, 4: last_visit, 5: updated_at
        let user_id_str: String = row.get(0).unwrap_or_default();
        let restaurant_id_str: String = row.get(1).unwrap_or_default();
        let total_str: String = row.get(3).unwrap_or_default();
        let last_visit_str: String = row.get(4).unwrap_or_default();
        let updated_str: String = row.get(5).unwrap_or_default();

        UserRestaurantStats {
            user_id: parse_uuid(&user_id_str),
            restaurant_id: parse_uuid(&restaurant_id_str),
            visit_count: row.get(2).unwrap_or(0),
            total_spent: Decimal::from_str_exact(&total_str).unwrap_or_default(),
            last_visit: parse_date(&last_visit_str),
            updated_at: parse_timestamp(&updated_str),
        }
    }
}

const TRANSACTION_COLUMNS: &str = "transaction_id, user_id, external_id, amount::VARCHAR, \
     merchant, transaction_date::VARCHAR, category, restaurant_id, \
     created_at::VARCHAR, updated_at::VARCHAR";

impl Repository for DuckDbRepository {
    // === Users ===

    fn ensure_user(&self, user: &User) -> Result<()> {
        let conn = self.lock_conn()?;
        // DO NOTHING rather than DO UPDATE: the row may be referenced by
        // transactions, and DuckDB rejects updates to referenced rows.
        conn.execute(
            "INSERT INTO sys_users (user_id, email, name, avatar, created_at)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT (user_id) DO NOTHING",
            params![
                user.id.to_string(),
                user.email,
                user.name,
                user.avatar,
                user.created_at.to_rfc3339(),
            ],
        )
        .map_err(map_store_error)?;
        Ok(())
    }

    fn get_users(&self) -> Result<Vec<User>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT user_id, email, name, avatar, created_at::VARCHAR
                 FROM sys_users ORDER BY created_at",
            )
            .map_err(map_store_error)?;

        let users = stmt
            .query_map([], |row| Ok(Self::row_to_user(row)))
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(users)
    }

    fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT user_id, email, name, avatar, created_at::VARCHAR
                 FROM sys_users WHERE user_id = ?",
            )
            .map_err(map_store_error)?;

        let user = stmt
            .query_row([id.to_string()], |row| Ok(Self::row_to_user(row)))
            .ok();

        Ok(user)
    }

    // === Transactions ===

    fn insert_transaction(&self, tx: &Transaction) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO sys_transactions (transaction_id, user_id, external_id, amount,
                                           merchant, transaction_date, category, restaurant_id,
                                           created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                tx.id.to_string(),
                tx.user_id.to_string(),
                tx.external_id,
                decimal_to_sql(tx.amount),
                tx.merchant,
                tx.date.to_string(),
                tx.category,
                tx.restaurant_id.map(|id| id.to_string()),
                tx.created_at.to_rfc3339(),
                tx.updated_at.to_rfc3339(),
            ],
        )
        .map_err(map_store_error)?;
        Ok(())
    }

    fn transaction_exists(&self, user_id: Uuid, external_id: &str) -> Result<bool> {
        let conn = self.lock_conn()?;
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sys_transactions WHERE user_id = ? AND external_id = ?",
                params![user_id.to_string(), external_id],
                |row| row.get(0),
            )
            .map_err(map_store_error)?;
        Ok(count > 0)
    }

    fn set_transaction_restaurant(&self, id: Uuid, restaurant_id: Uuid) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "UPDATE sys_transactions SET restaurant_id = ?, updated_at = ?
             WHERE transaction_id = ?",
            params![
                restaurant_id.to_string(),
                Utc::now().to_rfc3339(),
                id.to_string(),
            ],
        )
        .map_err(map_store_error)?;
        Ok(())
    }

    fn get_transactions_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM sys_transactions
                 WHERE user_id = ? ORDER BY transaction_date DESC"
            ))
            .map_err(map_store_error)?;

        let transactions = stmt
            .query_map([user_id.to_string()], |row| Ok(Self::row_to_transaction(row)))
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(transactions)
    }

    fn get_matched_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM sys_transactions
                 WHERE user_id = ? AND restaurant_id IS NOT NULL
                 ORDER BY transaction_date DESC"
            ))
            .map_err(map_store_error)?;

        let transactions = stmt
            .query_map([user_id.to_string()], |row| Ok(Self::row_to_transaction(row)))
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(transactions)
    }

    fn delete_transaction(&self, id: Uuid) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "DELETE FROM sys_transactions WHERE transaction_id = ?",
            params![id.to_string()],
        )
        .map_err(map_store_error)?;
        Ok(())
    }

    fn get_transaction_count(&self) -> Result<i64> {
        let conn = self.lock_conn()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sys_transactions", [], |row| row.get(0))
            .map_err(map_store_error)?;
        Ok(count)
    }

    fn get_transaction_date_range(&self) -> Result<DateRange> {
        let conn = self.lock_conn()?;
        let result: (Option<String>, Option<String>) = conn
            .query_row(
                "SELECT MIN(transaction_date)::VARCHAR, MAX(transaction_date)::VARCHAR
                 FROM sys_transactions",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(map_store_error)?;
        Ok(DateRange {
            earliest: result.0,
            latest: result.1,
        })
    }

    // === Restaurants ===

    fn get_restaurants(&self) -> Result<Vec<Restaurant>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT restaurant_id, name, address, latitude, longitude, hero_image,
                        created_at::VARCHAR
                 FROM sys_restaurants ORDER BY name",
            )
            .map_err(map_store_error)?;

        let restaurants = stmt
            .query_map([], |row| Ok(Self::row_to_restaurant(row)))
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(restaurants)
    }

    fn get_restaurant_by_id(&self, id: Uuid) -> Result<Option<Restaurant>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT restaurant_id, name, address, latitude, longitude, hero_image,
                        created_at::VARCHAR
                 FROM sys_restaurants WHERE restaurant_id = ?",
            )
            .map_err(map_store_error)?;

        let restaurant = stmt
            .query_row([id.to_string()], |row| Ok(Self::row_to_restaurant(row)))
            .ok();

        Ok(restaurant)
    }

    fn insert_restaurant(&self, restaurant: &Restaurant) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO sys_restaurants (restaurant_id, name, address, latitude, longitude,
                                          hero_image, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                restaurant.id.to_string(),
                restaurant.name,
                restaurant.address,
                restaurant.coordinates.map(|c| c.lat),
                restaurant.coordinates.map(|c| c.lng),
                restaurant.hero_image,
                restaurant.created_at.to_rfc3339(),
            ],
        )
        .map_err(map_store_error)?;
        Ok(())
    }

    fn get_restaurant_count(&self) -> Result<i64> {
        let conn = self.lock_conn()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sys_restaurants", [], |row| row.get(0))
            .map_err(map_store_error)?;
        Ok(count)
    }

    // === Rollups ===

    fn upsert_stats(&self, stats: &UserRestaurantStats) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO sys_user_restaurant_stats (user_id, restaurant_id, visit_count,
                                                    total_spent, last_visit, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT (user_id, restaurant_id) DO UPDATE SET
                visit_count = EXCLUDED.visit_count,
                total_spent = EXCLUDED.total_spent,
                last_visit = EXCLUDED.last_visit,
                updated_at = EXCLUDED.updated_at",
            params![
                stats.user_id.to_string(),
                stats.restaurant_id.to_string(),
                stats.visit_count,
                decimal_to_sql(stats.total_spent),
                stats.last_visit.to_string(),
                stats.updated_at.to_rfc3339(),
            ],
        )
        .map_err(map_store_error)?;
        Ok(())
    }

    fn get_stats_for_user(&self, user_id: Uuid) -> Result<Vec<UserRestaurantStats>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT user_id, restaurant_id, visit_count, total_spent::VARCHAR,
                        last_visit::VARCHAR, updated_at::VARCHAR
                 FROM sys_user_restaurant_stats
                 WHERE user_id = ? ORDER BY last_visit DESC",
            )
            .map_err(map_store_error)?;

        let stats = stmt
            .query_map([user_id.to_string()], |row| Ok(Self::row_to_stats(row)))
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(stats)
    }

    fn get_stats_count(&self) -> Result<i64> {
        let conn = self.lock_conn()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sys_user_restaurant_stats", [], |row| {
                row.get(0)
            })
            .map_err(map_store_error)?;
        Ok(count)
    }

    // === Integrations ===

    fn upsert_integration(
        &self,
        user_id: Uuid,
        provider: &str,
        settings: &serde_json::Value,
    ) -> Result<()> {
        let conn = self.lock_conn()?;
        let settings_json = serde_json::to_string(settings)?;
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO sys_integrations (user_id, provider, integration_settings,
                                           created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT (user_id, provider) DO UPDATE SET
                integration_settings = EXCLUDED.integration_settings,
                updated_at = EXCLUDED.updated_at",
            params![user_id.to_string(), provider, settings_json, now, now],
        )
        .map_err(map_store_error)?;
        Ok(())
    }

    fn get_integration(&self, user_id: Uuid, provider: &str) -> Result<Option<Integration>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT user_id, provider, integration_settings, created_at::VARCHAR
                 FROM sys_integrations WHERE user_id = ? AND provider = ?",
            )
            .map_err(map_store_error)?;

        let integration = stmt
            .query_row(params![user_id.to_string(), provider], |row| {
                Ok(row_to_integration(row))
            })
            .ok();

        Ok(integration)
    }

    fn get_integrations(&self) -> Result<Vec<Integration>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT user_id, provider, integration_settings, created_at::VARCHAR
                 FROM sys_integrations ORDER BY created_at",
            )
            .map_err(map_store_error)?;

        let integrations = stmt
            .query_map([], |row| Ok(row_to_integration(row)))
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(integrations)
    }

    fn delete_integration(&self, user_id: Uuid, provider: &str) -> Result<bool> {
        let conn = self.lock_conn()?;
        let rows = conn
            .execute(
                "DELETE FROM sys_integrations WHERE user_id = ? AND provider = ?",
                params![user_id.to_string(), provider],
            )
            .map_err(map_store_error)?;
        Ok(rows > 0)
    }

    // === Health checks ===

    fn check_orphaned_restaurant_refs(&self) -> Result<Vec<String>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT t.transaction_id, t.restaurant_id FROM sys_transactions t
                 LEFT JOIN sys_restaurants r ON t.restaurant_id = r.restaurant_id
                 WHERE t.restaurant_id IS NOT NULL AND r.restaurant_id IS NULL",
            )
            .map_err(map_store_error)?;

        let orphans: Vec<String> = stmt
            .query_map([], |row| {
                let tx_id: String = row.get(0)?;
                let restaurant_id: String = row.get(1)?;
                Ok(format!("{}:{}", tx_id, restaurant_id))
            })
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(orphans)
    }

    fn check_duplicate_external_ids(&self) -> Result<Vec<String>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT user_id, external_id FROM sys_transactions
                 GROUP BY user_id, external_id HAVING COUNT(*) > 1",
            )
            .map_err(map_store_error)?;

        let duplicates: Vec<String> = stmt
            .query_map([], |row| {
                let user_id: String = row.get(0)?;
                let external_id: String = row.get(1)?;
                Ok(format!("{}:{}", user_id, external_id))
            })
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(duplicates)
    }

    fn check_date_sanity(&self) -> Result<Vec<String>> {
        let conn = self.lock_conn()?;
        // Use a Rust-computed date to avoid the ICU extension dependency
        let one_year_future = (Utc::now() + chrono::Duration::days(365))
            .format("%Y-%m-%d")
            .to_string();
        let mut stmt = conn
            .prepare(
                "SELECT transaction_id, transaction_date::VARCHAR, merchant, amount::VARCHAR
                 FROM sys_transactions
                 WHERE transaction_date > ? OR transaction_date < '1970-01-01'
                 LIMIT 100",
            )
            .map_err(map_store_error)?;

        let results: Vec<String> = stmt
            .query_map(params![one_year_future], |row| {
                let tx_id: String = row.get(0)?;
                let date: String = row.get(1)?;
                let merchant: String = row.get(2)?;
                let amount: String = row.get(3)?;
                Ok(format!("{}|{}|{}|{}", tx_id, date, merchant, amount))
            })
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(results)
    }

    fn check_stale_stats(&self) -> Result<Vec<String>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT s.user_id, s.restaurant_id FROM sys_user_restaurant_stats s
                 LEFT JOIN sys_transactions t
                   ON s.user_id = t.user_id AND s.restaurant_id = t.restaurant_id
                 WHERE t.transaction_id IS NULL",
            )
            .map_err(map_store_error)?;

        let stale: Vec<String> = stmt
            .query_map([], |row| {
                let user_id: String = row.get(0)?;
                let restaurant_id: String = row.get(1)?;
                Ok(format!("{}:{}", user_id, restaurant_id))
            })
            .map_err(map_store_error)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(stale)
    }
}

fn row_to_integration(row: &duckdb::Row) -> Integration {
    let user_id_str: String = row.get(0).unwrap_or_default();
    let settings_json: String = row.get(2).unwrap_or_default();
    let created_str: String = row.get(3).unwrap_or_default();

    Integration {
        user_id: parse_uuid(&user_id_str),
        provider: row.get(1).unwrap_or_default(),
        settings: serde_json::from_str(&settings_json).unwrap_or(serde_json::json!({})),
        created_at: parse_timestamp(&created_str),
    }
}

// Helper functions

fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap_or_else(|_| Uuid::nil())
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|_| Utc::now().date_naive())
}

/// DuckDB's Rust binding has no Decimal param type, so amounts are bound
/// as f64 and the DECIMAL(18,2) column rounds them back to cents.
fn decimal_to_sql(d: Decimal) -> f64 {
    d.to_string().parse::<f64>().unwrap_or(0.0)
}

//! Logging service - structured event logging to DuckDB
//!
//! Stores events in logs.duckdb, separate from user data. No user data
//! (merchants, amounts, emails) is ever logged; only event names, the
//! provider, the command, and error context.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use duckdb::Connection;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Result, StoreError};
use crate::log_migrations::LOG_MIGRATIONS;

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique ID based on timestamp + counter
fn generate_id() -> u64 {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    // Lower 48 bits for timestamp, upper 16 bits for a per-millisecond counter
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    (timestamp << 16) | counter
}

/// Current unix timestamp in milliseconds
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

fn log_err(e: duckdb::Error) -> crate::domain::result::Error {
    StoreError::Other(e.to_string()).into()
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            provider: None,
            command: None,
            error_message: None,
            error_details: None,
        }
    }

    /// Set the provider context
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Set the command context (for CLI events)
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Set error details (additional context)
    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }
}

/// A log entry as stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: i64,
    pub app_version: String,
    pub platform: String,
    pub event: String,
    pub provider: Option<String>,
    pub command: Option<String>,
    pub error_message: Option<String>,
    pub error_details: Option<String>,
}

/// Service for structured event logging
pub struct LoggingService {
    conn: Mutex<Connection>,
    db_path: PathBuf,
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    /// Open or create logs.duckdb in the bitefeed directory and run any
    /// pending migrations
    pub fn new(bitefeed_dir: &Path, app_version: impl Into<String>) -> Result<Self> {
        let db_path = bitefeed_dir.join("logs.duckdb");
        let conn = Connection::open(&db_path).map_err(log_err)?;

        let service = Self {
            conn: Mutex::new(conn),
            db_path,
            app_version: app_version.into(),
            platform: detect_platform(),
        };

        service.run_migrations()?;

        Ok(service)
    }

    /// Run any pending migrations on the log database
    fn run_migrations(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Unavailable("log connection lock poisoned".to_string()))?;

        let table_exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM information_schema.tables WHERE table_name = 'sys_migrations'",
                [],
                |row| row.get(0),
            )
            .unwrap_or(false);

        if !table_exists {
            if let Some((name, sql)) =
                LOG_MIGRATIONS.iter().find(|(n, _)| *n == "000_migrations.sql")
            {
                conn.execute_batch(sql).map_err(log_err)?;
                conn.execute(
                    "INSERT INTO sys_migrations (migration_name) VALUES (?)",
                    [name],
                )
                .map_err(log_err)?;
            }
        }

        let mut stmt = conn
            .prepare("SELECT migration_name FROM sys_migrations")
            .map_err(log_err)?;
        let applied: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .map_err(log_err)?
            .filter_map(|r| r.ok())
            .collect();

        for (name, sql) in LOG_MIGRATIONS.iter() {
            if *name == "000_migrations.sql" {
                continue;
            }
            if !applied.contains(&name.to_string()) {
                conn.execute_batch(sql).map_err(log_err)?;
                conn.execute(
                    "INSERT INTO sys_migrations (migration_name) VALUES (?)",
                    [name],
                )
                .map_err(log_err)?;
            }
        }

        Ok(())
    }

    /// Log an event
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Unavailable("log connection lock poisoned".to_string()))?;

        conn.execute(
            r#"
            INSERT INTO sys_logs (
                id, timestamp, app_version, platform,
                event, provider, command, error_message, error_details
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            duckdb::params![
                generate_id(),
                now_ms(),
                &self.app_version,
                self.platform,
                &event.event,
                &event.provider,
                &event.command,
                &event.error_message,
                &event.error_details,
            ],
        )
        .map_err(log_err)?;

        Ok(())
    }

    /// Log a simple event with just a name
    pub fn log_event(&self, event: &str) -> Result<()> {
        self.log(LogEvent::new(event))
    }

    /// Log a CLI command execution
    pub fn log_command(&self, command: &str) -> Result<()> {
        self.log(LogEvent::new("command_executed").with_command(command))
    }

    /// Log an error
    pub fn log_error(&self, event: &str, message: &str, details: Option<&str>) -> Result<()> {
        let mut log_event = LogEvent::new(event).with_error(message);
        if let Some(d) = details {
            log_event = log_event.with_error_details(d);
        }
        self.log(log_event)
    }

    /// Query recent log entries, newest first
    pub fn get_recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        self.query_entries(
            "SELECT id, timestamp, app_version, platform,
                    event, provider, command, error_message, error_details
             FROM sys_logs
             ORDER BY timestamp DESC
             LIMIT ?",
            limit,
        )
    }

    /// Query log entries with errors, newest first
    pub fn get_errors(&self, limit: usize) -> Result<Vec<LogEntry>> {
        self.query_entries(
            "SELECT id, timestamp, app_version, platform,
                    event, provider, command, error_message, error_details
             FROM sys_logs
             WHERE error_message IS NOT NULL
             ORDER BY timestamp DESC
             LIMIT ?",
            limit,
        )
    }

    fn query_entries(&self, sql: &str, limit: usize) -> Result<Vec<LogEntry>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Unavailable("log connection lock poisoned".to_string()))?;

        let mut stmt = conn.prepare(sql).map_err(log_err)?;
        let entries = stmt
            .query_map([limit as i64], |row| {
                Ok(LogEntry {
                    id: row.get(0)?,
                    timestamp: row.get(1)?,
                    app_version: row.get(2)?,
                    platform: row.get(3)?,
                    event: row.get(4)?,
                    provider: row.get(5)?,
                    command: row.get(6)?,
                    error_message: row.get(7)?,
                    error_details: row.get(8)?,
                })
            })
            .map_err(log_err)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(entries)
    }

    /// Get the total number of log entries
    pub fn count(&self) -> Result<u64> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Unavailable("log connection lock poisoned".to_string()))?;
        let count: u64 = conn
            .query_row("SELECT COUNT(*) FROM sys_logs", [], |row| row.get(0))
            .map_err(log_err)?;
        Ok(count)
    }

    /// Delete logs older than the specified timestamp (unix ms)
    pub fn delete_before(&self, timestamp_ms: i64) -> Result<u64> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Unavailable("log connection lock poisoned".to_string()))?;
        let deleted = conn
            .execute("DELETE FROM sys_logs WHERE timestamp < ?", [timestamp_ms])
            .map_err(log_err)?;
        Ok(deleted as u64)
    }

    /// Path to the logs database
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

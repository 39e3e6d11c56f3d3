//! Event log migrations - embedded SQL files for logs.duckdb
//!
//! Kept separate from the main database migrations so the log store can be
//! exported or deleted without touching user data.

/// All log database migrations, embedded at compile time.
/// Format: (filename, sql_content)
pub const LOG_MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    ("001_event_log.sql", include_str!("001_event_log.sql")),
];

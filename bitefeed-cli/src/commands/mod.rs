//! CLI command implementations

pub mod doctor;
pub mod link;
pub mod logs;
pub mod seed;
pub mod stats;
pub mod status;
pub mod sync;
pub mod unlink;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bitefeed_core::services::{LogEvent, LoggingService};
use bitefeed_core::{BitefeedContext, User};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (logging should never block
/// operations)
pub fn get_logger() -> Option<LoggingService> {
    let bitefeed_dir = get_bitefeed_dir();
    std::fs::create_dir_all(&bitefeed_dir).ok()?;
    LoggingService::new(&bitefeed_dir, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the bitefeed directory from environment or default
pub fn get_bitefeed_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BITEFEED_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bitefeed")
    }
}

/// Get or create the bitefeed context
pub fn get_context() -> Result<BitefeedContext> {
    let bitefeed_dir = get_bitefeed_dir();

    std::fs::create_dir_all(&bitefeed_dir)
        .with_context(|| format!("Failed to create bitefeed directory: {:?}", bitefeed_dir))?;

    BitefeedContext::new(&bitefeed_dir).context("Failed to initialize bitefeed context")
}

/// Resolve the remembered user from config
pub fn current_user(ctx: &BitefeedContext) -> Result<User> {
    let settings = ctx
        .config
        .default_user
        .as_ref()
        .context("No user configured. Run 'bite link' first.")?;
    Ok(User::new(
        settings.id,
        settings.email.clone(),
        settings.name.clone(),
    ))
}

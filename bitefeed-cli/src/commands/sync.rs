//! Sync command - fetch and ingest bank transactions

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use colored::Colorize;

use bitefeed_core::services::LogEvent;

use super::{current_user, get_context, get_logger, log_event};

pub fn run(start: Option<&str>, end: Option<&str>, skip_stats: bool, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let user = current_user(&ctx)?;

    let end_date = match end {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };
    let start_date = match start {
        Some(s) => parse_date(s)?,
        None => end_date - Duration::days(90),
    };

    let result = ctx.ingest_service.sync(&user, start_date, end_date);

    let result = match result {
        Ok(r) => r,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("sync_failed")
                    .with_command("sync")
                    .with_error(e.to_string()),
            );
            return Err(e).context("Sync failed");
        }
    };

    let stats_result = if skip_stats {
        None
    } else {
        Some(ctx.stats_service.recompute(user.id)?)
    };

    log_event(
        &logger,
        LogEvent::new("sync_completed")
            .with_provider(&result.provider)
            .with_command("sync"),
    );

    if json {
        let mut payload = serde_json::to_value(&result)?;
        if let Some(stats) = &stats_result {
            payload["stats"] = serde_json::to_value(stats)?;
        }
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{} {}", "Synced:".green(), result.provider);
    println!("  Date range: {} to {}", result.start_date, result.end_date);
    println!("  Transaction breakdown:");
    println!("    Discovered: {}", result.ingest.discovered);
    println!("    Ingested: {}", result.ingest.ingested);
    println!("    Skipped: {} (already exists)", result.ingest.skipped);
    if result.ingest.rejected > 0 {
        println!("    Rejected: {} (invalid records)", result.ingest.rejected);
    }
    if result.ingest.failed > 0 {
        println!(
            "    {}",
            format!("Failed: {} (see logs)", result.ingest.failed).red()
        );
    }
    for warning in &result.provider_warnings {
        println!("  {} {}", "Warning:".yellow(), warning);
    }
    if let Some(stats) = &stats_result {
        println!("  Rollups updated: {}", stats.rollups_updated);
    }

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

//! Seed command - load sample restaurants and transactions

use anyhow::Result;
use colored::Colorize;

use bitefeed_core::services::LogEvent;

use super::{current_user, get_context, get_logger, log_event};

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let user = current_user(&ctx)?;

    let result = ctx.seed_service.seed(&user)?;

    log_event(&logger, LogEvent::new("seed_completed").with_command("seed"));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", "Sample data loaded".green());
    println!("  Restaurants created: {}", result.restaurants_created);
    println!("  Transactions ingested: {}", result.transactions_ingested);
    if result.transactions_skipped > 0 {
        println!(
            "  Transactions skipped: {} (already present)",
            result.transactions_skipped
        );
    }
    println!("  Rollups updated: {}", result.rollups_updated);

    Ok(())
}

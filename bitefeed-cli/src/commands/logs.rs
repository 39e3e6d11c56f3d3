//! Logs command - show recent log events

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};

use crate::output::create_table;

use super::get_logger;

pub fn run(errors: bool, limit: usize, json: bool) -> Result<()> {
    let logger = get_logger().context("Failed to open the log database")?;

    let entries = if errors {
        logger.get_errors(limit)?
    } else {
        logger.get_recent(limit)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No log entries");
        return Ok(());
    }

    let mut table = create_table();
    table.set_header(vec!["Time", "Event", "Command", "Error"]);

    for entry in &entries {
        let time = Utc
            .timestamp_millis_opt(entry.timestamp)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| entry.timestamp.to_string());
        table.add_row(vec![
            time,
            entry.event.clone(),
            entry.command.clone().unwrap_or_default(),
            entry.error_message.clone().unwrap_or_default(),
        ]);
    }

    println!("{}", table);

    Ok(())
}

//! Status command - show store status and summary

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::get_context;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let status = ctx.status_service.get_status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Bitefeed Status".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec!["Users", &status.total_users.to_string()]);
    table.add_row(vec!["Transactions", &status.total_transactions.to_string()]);
    table.add_row(vec!["Restaurants", &status.total_restaurants.to_string()]);
    table.add_row(vec!["Rollups", &status.total_rollups.to_string()]);
    table.add_row(vec!["Bank links", &status.total_links.to_string()]);

    println!("{}", table);
    println!();

    if let (Some(earliest), Some(latest)) = (&status.date_range.earliest, &status.date_range.latest)
    {
        println!("Date range: {} to {}", earliest, latest);
        println!();
    }

    if !status.linked_providers.is_empty() {
        println!("{}", "Linked Providers".bold());
        for name in &status.linked_providers {
            println!("  - {}", name);
        }
    }

    Ok(())
}

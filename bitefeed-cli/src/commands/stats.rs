//! Stats command - recompute and show per-restaurant rollups

use anyhow::Result;
use bitefeed_core::ports::Repository;
use colored::Colorize;

use crate::output::create_table;

use super::{current_user, get_context};

pub fn run(no_recompute: bool, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = current_user(&ctx)?;

    if !no_recompute {
        ctx.stats_service.recompute(user.id)?;
    }

    let stats = ctx.stats_service.get_stats(user.id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if stats.is_empty() {
        println!(
            "{}",
            "No rollups yet. Run 'bite sync' to import transactions.".yellow()
        );
        return Ok(());
    }

    println!("{}", format!("Restaurant spending for {}", user.name).bold());
    println!();

    let mut table = create_table();
    table.set_header(vec!["Restaurant", "Visits", "Total Spent", "Last Visit"]);

    for entry in &stats {
        let name = ctx
            .repository
            .get_restaurant_by_id(entry.restaurant_id)?
            .map(|r| r.name)
            .unwrap_or_else(|| entry.restaurant_id.to_string());
        table.add_row(vec![
            name,
            entry.visit_count.to_string(),
            format!("${:.2}", entry.total_spent),
            entry.last_visit.to_string(),
        ]);
    }

    println!("{}", table);

    Ok(())
}

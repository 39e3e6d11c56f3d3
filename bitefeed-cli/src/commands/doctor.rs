//! Doctor command - run store health checks

use anyhow::Result;
use colored::Colorize;

use super::get_context;

pub fn run(verbose: bool, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let result = ctx.doctor_service.run_checks()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", "Store Health Checks".bold());
    println!();

    let mut names: Vec<&String> = result.checks.keys().collect();
    names.sort();

    for name in names {
        let check = &result.checks[name];
        let marker = match check.status.as_str() {
            "pass" => "ok".green(),
            "warning" => "warn".yellow(),
            _ => "fail".red(),
        };
        println!("  [{}] {}: {}", marker, name, check.message);

        if verbose {
            if let Some(details) = &check.details {
                for detail in details {
                    println!("        {}", detail);
                }
            }
        }
    }

    println!();
    println!(
        "{} passed, {} warnings, {} errors",
        result.summary.passed, result.summary.warnings, result.summary.errors
    );

    if result.summary.errors > 0 {
        anyhow::bail!("Health checks found errors");
    }

    Ok(())
}

//! Bitefeed CLI - restaurant spending in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{doctor, link, logs, seed, stats, status, sync, unlink};

/// Bitefeed - restaurant spending from your bank transactions
#[derive(Parser)]
#[command(name = "bite", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Link a bank account and remember the user
    Link {
        /// Email for the local user profile
        #[arg(long)]
        email: String,
        /// Display name for the local user profile
        #[arg(long)]
        name: String,
        /// Public token from the link flow (sandbox accepts anything non-empty)
        #[arg(long, default_value = "public-sandbox-token")]
        public_token: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch transactions from the linked provider and ingest them
    Sync {
        /// Start of the date range (YYYY-MM-DD, default 90 days ago)
        #[arg(long)]
        start: Option<String>,
        /// End of the date range (YYYY-MM-DD, default today)
        #[arg(long)]
        end: Option<String>,
        /// Skip the rollup recompute after ingest
        #[arg(long)]
        skip_stats: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recompute and show per-restaurant rollups
    Stats {
        /// Only show stored rollups, skip the recompute
        #[arg(long)]
        no_recompute: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show store status and summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run store health checks
    Doctor {
        /// Show verbose output
        #[arg(long, short)]
        verbose: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Seed sample restaurants and transactions
    Seed {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove the stored bank link
    Unlink {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Show recent log events
    Logs {
        /// Only show entries with errors
        #[arg(long)]
        errors: bool,
        /// Maximum entries to show
        #[arg(long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Link {
            email,
            name,
            public_token,
            json,
        } => link::run(&email, &name, &public_token, json),
        Commands::Sync {
            start,
            end,
            skip_stats,
            json,
        } => sync::run(start.as_deref(), end.as_deref(), skip_stats, json),
        Commands::Stats { no_recompute, json } => stats::run(no_recompute, json),
        Commands::Status { json } => status::run(json),
        Commands::Doctor { verbose, json } => doctor::run(verbose, json),
        Commands::Seed { json } => seed::run(json),
        Commands::Unlink { force } => unlink::run(force),
        Commands::Logs {
            errors,
            limit,
            json,
        } => logs::run(errors, limit, json),
    }
}

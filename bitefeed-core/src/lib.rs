//! Bitefeed Core - restaurant spending from linked bank transactions
//!
//! This crate implements the reconciliation pipeline following hexagonal
//! architecture:
//!
//! - **domain**: Core business entities (Transaction, Restaurant, rollups)
//! - **ports**: Trait definitions for external dependencies (Repository, BankDataProvider)
//! - **services**: Business logic orchestration (ingest, match, stats)
//! - **adapters**: Concrete implementations (DuckDB, sandbox provider)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use adapters::duckdb::DuckDbRepository;
use adapters::sandbox::SandboxProvider;
use config::Config;
use domain::result::Result;
use ports::{BankDataProvider, Repository};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, StoreError};
pub use domain::{Restaurant, Transaction, User, UserRestaurantStats};

/// Main context for Bitefeed operations
///
/// This is the primary entry point for all business logic. It holds the
/// database connection, configuration, and all services.
pub struct BitefeedContext {
    pub config: Config,
    pub repository: Arc<DuckDbRepository>,
    pub link_service: LinkService,
    pub ingest_service: IngestService,
    pub stats_service: StatsService,
    pub status_service: StatusService,
    pub doctor_service: DoctorService,
    pub seed_service: SeedService,
}

impl BitefeedContext {
    /// Create a new Bitefeed context rooted at the given directory
    pub fn new(bitefeed_dir: &Path) -> Result<Self> {
        let config = Config::load(bitefeed_dir)?;

        // Sandbox mode keeps its own database file
        let db_filename = if config.sandbox_mode {
            "sandbox.duckdb"
        } else {
            "bitefeed.duckdb"
        };

        let db_path = bitefeed_dir.join(db_filename);
        let repository = Arc::new(DuckDbRepository::new(&db_path)?);

        // Initialize schema
        repository.ensure_schema()?;

        let store: Arc<dyn Repository> = repository.clone();
        let provider: Arc<dyn BankDataProvider> = Arc::new(SandboxProvider::new());

        let link_service = LinkService::new(Arc::clone(&store), Arc::clone(&provider));
        let ingest_service = IngestService::new(Arc::clone(&store), Arc::clone(&provider));
        let stats_service = StatsService::new(Arc::clone(&store));
        let status_service = StatusService::new(Arc::clone(&store));
        let doctor_service = DoctorService::new(Arc::clone(&store));
        let seed_service = SeedService::new(Arc::clone(&store), Arc::clone(&provider));

        Ok(Self {
            config,
            repository,
            link_service,
            ingest_service,
            stats_service,
            status_service,
            doctor_service,
            seed_service,
        })
    }
}

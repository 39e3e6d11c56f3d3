//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod doctor;
mod ingest;
mod link;
pub mod logging;
pub mod migration;
pub mod normalize;
mod restaurant;
mod seed;
mod stats;
mod status;

pub use doctor::{CheckResult, DoctorResult, DoctorService, DoctorSummary};
pub use ingest::{IngestResult, IngestService, RecordOutcome, SyncResult};
pub use link::{LinkResult, LinkService};
pub use logging::{LogEntry, LogEvent, LoggingService};
pub use migration::{MigrationResult, MigrationService};
pub use restaurant::{MatchOutcome, RestaurantService};
pub use seed::{SeedResult, SeedService};
pub use stats::{StatsResult, StatsService};
pub use status::{StatusService, StatusSummary};

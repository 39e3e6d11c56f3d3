//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

pub mod restaurant;
mod stats;
mod transaction;
mod user;
pub mod result;

pub use restaurant::{Coordinates, Restaurant};
pub use stats::UserRestaurantStats;
pub use transaction::Transaction;
pub use user::User;

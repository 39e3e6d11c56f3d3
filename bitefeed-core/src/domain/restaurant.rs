//! Restaurant domain model

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder used when a restaurant is created from merchant text alone
pub const UNKNOWN_ADDRESS: &str = "Unknown Address";

/// Geographic coordinates for a restaurant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A restaurant resolved from merchant text
///
/// Names are not guaranteed unique: matching is fuzzy, so near-duplicate
/// names may coexist. Created lazily by the matcher on first unmatched
/// merchant and never updated afterwards by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub hero_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Create a new restaurant from merchant text, with placeholder address
    pub fn from_merchant(id: Uuid, merchant: impl Into<String>) -> Self {
        Self {
            id,
            name: merchant.into(),
            address: UNKNOWN_ADDRESS.to_string(),
            coordinates: None,
            hero_image: None,
            created_at: Utc::now(),
        }
    }

    /// The normalized form of this restaurant's name (see [`normalize_name`])
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalize a name for matching: case-fold and strip everything that is
/// not alphanumeric, so "Joe's Cafe" and "JOES CAFE #12" compare as
/// "joescafe" / "joescafe12".
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let special_re = Regex::new(r"[^a-z0-9]+").unwrap();
    special_re.replace_all(&lowered, "").to_string()
}

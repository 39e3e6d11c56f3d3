//! Restaurant matcher - resolves merchant text to restaurant entities
//!
//! Matching is deliberately deterministic: store row order is never
//! trusted. Normalized-exact matches win; substring matches in either
//! direction are the fallback, tie-broken by shortest normalized name and
//! then raw name. When nothing matches, a restaurant is created from the
//! merchant text with a placeholder address.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::restaurant::normalize_name;
use crate::domain::Restaurant;
use crate::ports::Repository;

/// Outcome of resolving a merchant name
///
/// `Failed` is a soft condition: callers treat it as "no restaurant
/// association", never as fatal. Keeping it distinct from the matched and
/// created cases lets callers and tests tell "no restaurant" apart from
/// "restaurant creation failed".
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// An existing restaurant matched the merchant text
    Matched { restaurant: Restaurant },
    /// No match; a new restaurant was created
    Created { restaurant: Restaurant },
    /// The store failed while matching or creating
    Failed { reason: String },
}

impl MatchOutcome {
    /// The resolved restaurant id, if any
    pub fn restaurant_id(&self) -> Option<Uuid> {
        match self {
            Self::Matched { restaurant } | Self::Created { restaurant } => Some(restaurant.id),
            Self::Failed { .. } => None,
        }
    }
}

/// Restaurant matching service
pub struct RestaurantService {
    repository: Arc<dyn Repository>,
}

impl RestaurantService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Resolve merchant text to a restaurant, creating one when absent
    pub fn resolve(&self, merchant: &str) -> MatchOutcome {
        if merchant.trim().is_empty() {
            return MatchOutcome::Failed {
                reason: "empty merchant text".to_string(),
            };
        }

        let restaurants = match self.repository.get_restaurants() {
            Ok(restaurants) => restaurants,
            Err(e) => {
                eprintln!("[bitefeed] restaurant lookup failed: {}", e);
                return MatchOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        if let Some(existing) = find_match(&restaurants, merchant) {
            return MatchOutcome::Matched {
                restaurant: existing.clone(),
            };
        }

        let restaurant = Restaurant::from_merchant(Uuid::new_v4(), merchant.trim());
        match self.repository.insert_restaurant(&restaurant) {
            Ok(()) => MatchOutcome::Created { restaurant },
            Err(e) => {
                eprintln!("[bitefeed] restaurant creation failed for merchant: {}", e);
                MatchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Pick the restaurant the merchant text plausibly refers to
///
/// Exact match on the normalized name first; substring containment in
/// either direction second ("STARBUCKS #1234" should reuse "Starbucks").
/// Ties go to the shortest normalized name, then lexicographic raw name,
/// so the result never depends on store ordering.
fn find_match<'a>(restaurants: &'a [Restaurant], merchant: &str) -> Option<&'a Restaurant> {
    let needle = normalize_name(merchant);
    if needle.is_empty() {
        return None;
    }

    let mut candidates: Vec<&Restaurant> = restaurants
        .iter()
        .filter(|r| r.normalized_name() == needle)
        .collect();

    if candidates.is_empty() {
        candidates = restaurants
            .iter()
            .filter(|r| {
                let name = r.normalized_name();
                !name.is_empty() && (name.contains(&needle) || needle.contains(&name))
            })
            .collect();
    }

    candidates.sort_by(|a, b| {
        a.normalized_name()
            .len()
            .cmp(&b.normalized_name().len())
            .then_with(|| a.name.cmp(&b.name))
    });
    candidates.first().copied()
}

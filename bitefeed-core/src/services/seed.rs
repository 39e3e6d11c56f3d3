//! Seed service - sample data for development and demos
//!
//! Seeds a handful of San Francisco restaurants and matching transactions
//! for a user, then recomputes rollups. Safe to run repeatedly: existing
//! restaurants (by name) and transactions (by external id) are skipped.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{Coordinates, Restaurant, User};
use crate::ports::{BankDataProvider, RawTransaction, Repository};
use crate::services::ingest::IngestService;
use crate::services::stats::StatsService;

/// Result of a seed run
#[derive(Debug, Serialize)]
pub struct SeedResult {
    pub restaurants_created: i64,
    pub transactions_ingested: i64,
    pub transactions_skipped: i64,
    pub rollups_updated: i64,
}

/// Sample data service
pub struct SeedService {
    repository: Arc<dyn Repository>,
    ingest: IngestService,
    stats: StatsService,
}

impl SeedService {
    pub fn new(repository: Arc<dyn Repository>, provider: Arc<dyn BankDataProvider>) -> Self {
        let ingest = IngestService::new(Arc::clone(&repository), provider);
        let stats = StatsService::new(Arc::clone(&repository));
        Self {
            repository,
            ingest,
            stats,
        }
    }

    /// Seed restaurants and transactions for a user, then recompute rollups
    pub fn seed(&self, user: &User) -> Result<SeedResult> {
        let restaurants_created = self.seed_restaurants()?;

        let ingest_result = self.ingest.ingest(user, &sample_transactions())?;
        let stats_result = self.stats.recompute(user.id)?;

        Ok(SeedResult {
            restaurants_created,
            transactions_ingested: ingest_result.ingested,
            transactions_skipped: ingest_result.skipped,
            rollups_updated: stats_result.rollups_updated,
        })
    }

    /// Insert the sample restaurants that don't exist yet (by exact name)
    fn seed_restaurants(&self) -> Result<i64> {
        let existing = self.repository.get_restaurants()?;
        let mut created = 0i64;

        for sample in sample_restaurants() {
            if existing.iter().any(|r| r.name == sample.name) {
                continue;
            }
            match self.repository.insert_restaurant(&sample) {
                Ok(()) => created += 1,
                Err(e) => {
                    eprintln!("[bitefeed] seeding restaurant {} failed: {}", sample.name, e);
                }
            }
        }

        Ok(created)
    }
}

fn sample_restaurants() -> Vec<Restaurant> {
    let samples = [
        (
            "Starbucks",
            "123 Main St, San Francisco, CA",
            37.7749,
            -122.4194,
            "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=400",
        ),
        (
            "McDonald's",
            "456 Market St, San Francisco, CA",
            37.7849,
            -122.4094,
            "https://images.unsplash.com/photo-1571091718767-18b5b1457add?w=400",
        ),
        (
            "Chipotle",
            "789 Mission St, San Francisco, CA",
            37.7849,
            -122.4094,
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400",
        ),
        (
            "Blue Bottle Coffee",
            "321 Valencia St, San Francisco, CA",
            37.7549,
            -122.4294,
            "https://images.unsplash.com/photo-1509042239860-f550ce710b93?w=400",
        ),
        (
            "In-N-Out Burger",
            "654 Castro St, San Francisco, CA",
            37.7649,
            -122.4194,
            "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=400",
        ),
    ];

    samples
        .into_iter()
        .map(|(name, address, lat, lng, hero)| {
            let mut restaurant = Restaurant::from_merchant(Uuid::new_v4(), name);
            restaurant.address = address.to_string();
            restaurant.coordinates = Some(Coordinates { lat, lng });
            restaurant.hero_image = Some(hero.to_string());
            restaurant
        })
        .collect()
}

fn sample_transactions() -> Vec<RawTransaction> {
    let samples = [
        ("sample-txn-1", 25.50, "Starbucks", "2024-01-15"),
        ("sample-txn-2", 45.00, "McDonald's", "2024-01-14"),
        ("sample-txn-3", 12.75, "Chipotle", "2024-01-13"),
        ("sample-txn-4", 8.50, "Blue Bottle Coffee", "2024-01-12"),
        ("sample-txn-5", 15.25, "In-N-Out Burger", "2024-01-11"),
    ];

    samples
        .into_iter()
        .map(|(id, amount, merchant, date)| RawTransaction {
            id: Some(id.to_string()),
            amount: Some(amount),
            merchant: Some(merchant.to_string()),
            date: Some(date.to_string()),
            category: Some("Food and Drink".to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_restaurant_shaped() {
        let restaurants = sample_restaurants();
        assert_eq!(restaurants.len(), 5);
        assert!(restaurants.iter().all(|r| r.coordinates.is_some()));
        assert!(restaurants.iter().all(|r| r.hero_image.is_some()));

        let transactions = sample_transactions();
        assert_eq!(transactions.len(), 5);
        assert!(transactions
            .iter()
            .all(|t| t.category.as_deref() == Some("Food and Drink")));
    }
}

//! Status service - store summaries

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::ports::{DateRange, Repository};

/// Status service for store summaries
pub struct StatusService {
    repository: Arc<dyn Repository>,
}

impl StatusService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Get overall status summary
    pub fn get_status(&self) -> Result<StatusSummary> {
        let users = self.repository.get_users()?;
        let transaction_count = self.repository.get_transaction_count()?;
        let restaurant_count = self.repository.get_restaurant_count()?;
        let stats_count = self.repository.get_stats_count()?;
        let integrations = self.repository.get_integrations()?;
        let date_range = self.repository.get_transaction_date_range()?;

        Ok(StatusSummary {
            total_users: users.len() as i64,
            total_transactions: transaction_count,
            total_restaurants: restaurant_count,
            total_rollups: stats_count,
            total_links: integrations.len() as i64,
            linked_providers: integrations.iter().map(|i| i.provider.clone()).collect(),
            date_range,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub total_users: i64,
    pub total_transactions: i64,
    pub total_restaurants: i64,
    pub total_rollups: i64,
    pub total_links: i64,
    pub linked_providers: Vec<String>,
    pub date_range: DateRange,
}

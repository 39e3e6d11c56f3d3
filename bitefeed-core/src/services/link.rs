//! Link service - connects a user to the bank data provider
//!
//! Exchanges the public token from a completed link flow for an access
//! token and stores it per user, so later syncs can fetch transactions
//! without re-linking.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::User;
use crate::ports::{BankDataProvider, Integration, Repository};

/// Result of linking a user to a provider
#[derive(Debug, Serialize)]
pub struct LinkResult {
    pub user_id: Uuid,
    pub provider: String,
}

/// Link management service
pub struct LinkService {
    repository: Arc<dyn Repository>,
    provider: Arc<dyn BankDataProvider>,
}

impl LinkService {
    pub fn new(repository: Arc<dyn Repository>, provider: Arc<dyn BankDataProvider>) -> Self {
        Self {
            repository,
            provider,
        }
    }

    /// Start a link flow for a user
    pub fn create_link_token(&self, user_id: Uuid) -> Result<String> {
        self.provider.create_link_token(user_id)
    }

    /// Complete a link flow: exchange the public token and store the link
    ///
    /// The user row is created first so the link always references a
    /// stored user.
    pub fn link(&self, user: &User, public_token: &str, metadata: &JsonValue) -> Result<LinkResult> {
        self.repository.ensure_user(user)?;

        let access_token = self.provider.exchange_public_token(public_token, metadata)?;

        let settings = json!({
            "accessToken": access_token,
            "metadata": metadata,
        });
        self.repository
            .upsert_integration(user.id, self.provider.name(), &settings)?;

        Ok(LinkResult {
            user_id: user.id,
            provider: self.provider.name().to_string(),
        })
    }

    /// Remove a user's provider link; returns false when none existed
    pub fn unlink(&self, user_id: Uuid) -> Result<bool> {
        self.repository
            .delete_integration(user_id, self.provider.name())
    }

    /// List all stored links
    pub fn list(&self) -> Result<Vec<Integration>> {
        self.repository.get_integrations()
    }
}

//! Bank aggregation provider port
//!
//! Defines the interface for fetching account and transaction data from an
//! external financial-data aggregator. The shipped implementation is the
//! sandbox provider with fixed sample data; a production implementation
//! would delegate to a real aggregator and is out of core scope - the
//! pipeline only depends on the shape of the returned records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::result::Result;

/// A transaction record as returned by the provider, before validation
///
/// Every field is optional: the normalizer rejects records with missing or
/// empty fields rather than trusting the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub merchant: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A bank account record as returned by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAccount {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub subtype: String,
    pub balance: f64,
}

/// Result of fetching accounts from a provider
#[derive(Debug, Default)]
pub struct FetchAccountsResult {
    pub accounts: Vec<RawAccount>,
    pub warnings: Vec<String>,
}

/// Result of fetching transactions from a provider
#[derive(Debug, Default)]
pub struct FetchTransactionsResult {
    pub transactions: Vec<RawTransaction>,
    pub warnings: Vec<String>,
}

/// Bank data aggregation provider trait
///
/// Provider failures propagate to the caller of the whole ingestion:
/// without source data there is nothing to process.
pub trait BankDataProvider: Send + Sync {
    /// Provider name (e.g., "sandbox")
    fn name(&self) -> &str;

    /// Create a link token to start the account-linking flow for a user
    fn create_link_token(&self, user_id: Uuid) -> Result<String>;

    /// Exchange the public token from a completed link flow for an access token
    ///
    /// # Arguments
    /// * `public_token` - Token produced by the link flow
    /// * `metadata` - Institution/account metadata from the link flow
    fn exchange_public_token(&self, public_token: &str, metadata: &JsonValue) -> Result<String>;

    /// Fetch accounts visible to the given access token
    fn get_accounts(&self, access_token: &str) -> Result<FetchAccountsResult>;

    /// Fetch transactions in the given date range (inclusive)
    fn get_transactions(
        &self,
        access_token: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<FetchTransactionsResult>;
}

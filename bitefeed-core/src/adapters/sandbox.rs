//! Sandbox bank data provider
//!
//! Serves the fixed sample data a real aggregator would return, so the
//! whole pipeline can run without bank credentials. Token handling mimics
//! the real flow shape (link token -> public token -> access token) but
//! nothing is verified.

use chrono::{NaiveDate, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::ports::{
    BankDataProvider, FetchAccountsResult, FetchTransactionsResult, RawAccount, RawTransaction,
};

/// Fixed link token handed out for every link flow
const SANDBOX_LINK_TOKEN: &str = "link-sandbox-mock-token-for-development";

/// Sandbox provider with fixed sample data
pub struct SandboxProvider;

impl SandboxProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SandboxProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_transactions() -> Vec<RawTransaction> {
    vec![
        RawTransaction {
            id: Some("txn-1".to_string()),
            amount: Some(25.50),
            merchant: Some("Starbucks".to_string()),
            date: Some("2024-01-15".to_string()),
            category: Some("Food and Drink".to_string()),
        },
        RawTransaction {
            id: Some("txn-2".to_string()),
            amount: Some(45.00),
            merchant: Some("McDonald's".to_string()),
            date: Some("2024-01-14".to_string()),
            category: Some("Food and Drink".to_string()),
        },
        RawTransaction {
            id: Some("txn-3".to_string()),
            amount: Some(12.75),
            merchant: Some("Chipotle".to_string()),
            date: Some("2024-01-13".to_string()),
            category: Some("Food and Drink".to_string()),
        },
    ]
}

impl BankDataProvider for SandboxProvider {
    fn name(&self) -> &str {
        "sandbox"
    }

    fn create_link_token(&self, _user_id: Uuid) -> Result<String> {
        Ok(SANDBOX_LINK_TOKEN.to_string())
    }

    fn exchange_public_token(&self, public_token: &str, _metadata: &JsonValue) -> Result<String> {
        if public_token.trim().is_empty() {
            return Err(Error::provider("empty public token"));
        }
        Ok(format!("access-sandbox-{}", Utc::now().timestamp_millis()))
    }

    fn get_accounts(&self, access_token: &str) -> Result<FetchAccountsResult> {
        validate_access_token(access_token)?;
        Ok(FetchAccountsResult {
            accounts: vec![RawAccount {
                id: "acc-1".to_string(),
                name: "Checking Account".to_string(),
                account_type: "depository".to_string(),
                subtype: "checking".to_string(),
                balance: 1250.75,
            }],
            warnings: Vec::new(),
        })
    }

    fn get_transactions(
        &self,
        access_token: &str,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> Result<FetchTransactionsResult> {
        validate_access_token(access_token)?;

        // Fixed sample data; the requested range is accepted but ignored
        Ok(FetchTransactionsResult {
            transactions: sample_transactions(),
            warnings: Vec::new(),
        })
    }
}

fn validate_access_token(access_token: &str) -> Result<()> {
    if !access_token.starts_with("access-sandbox-") {
        return Err(Error::provider(format!(
            "invalid access token: {}",
            access_token
        )));
    }
    Ok(())
}

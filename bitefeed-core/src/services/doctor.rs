//! Doctor service - store health checks

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::Transaction;
use crate::ports::Repository;

/// Doctor service for health checks
pub struct DoctorService {
    repository: Arc<dyn Repository>,
}

impl DoctorService {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// Run all health checks
    pub fn run_checks(&self) -> Result<DoctorResult> {
        let mut checks = HashMap::new();

        // Write path: insert a probe transaction and clean it up
        checks.insert("store_write_path".to_string(), self.check_write_path()?);

        // Orphaned restaurant references
        let orphans = self.repository.check_orphaned_restaurant_refs()?;
        let orphan_details: Vec<serde_json::Value> = orphans
            .iter()
            .map(|s| {
                let parts: Vec<&str> = s.split(':').collect();
                if parts.len() >= 2 {
                    json!({"transaction_id": parts[0], "restaurant_id": parts[1]})
                } else {
                    json!({"transaction_id": s})
                }
            })
            .collect();
        checks.insert(
            "orphaned_restaurant_refs".to_string(),
            CheckResult {
                status: if orphans.is_empty() { "pass" } else { "error" }.to_string(),
                message: if orphans.is_empty() {
                    "No orphaned restaurant references found".to_string()
                } else {
                    format!("{} transaction(s) reference missing restaurants", orphans.len())
                },
                details: if orphans.is_empty() {
                    None
                } else {
                    Some(orphan_details)
                },
            },
        );

        // Duplicate external ids - impossible while the store constraint holds
        let duplicates = self.repository.check_duplicate_external_ids()?;
        let dup_details: Vec<serde_json::Value> = duplicates
            .iter()
            .map(|d| {
                let parts: Vec<&str> = d.split(':').collect();
                if parts.len() >= 2 {
                    json!({"user_id": parts[0], "external_id": parts[1]})
                } else {
                    json!({"pair": d})
                }
            })
            .collect();
        checks.insert(
            "duplicate_external_ids".to_string(),
            CheckResult {
                status: if duplicates.is_empty() { "pass" } else { "error" }.to_string(),
                message: if duplicates.is_empty() {
                    "No duplicate (user, external id) pairs found".to_string()
                } else {
                    format!(
                        "{} duplicated (user, external id) pair(s) - uniqueness constraint missing?",
                        duplicates.len()
                    )
                },
                details: if duplicates.is_empty() {
                    None
                } else {
                    Some(dup_details)
                },
            },
        );

        // Date sanity: before 1970 or more than a year ahead
        let insane_dates = self.repository.check_date_sanity()?;
        let date_details: Vec<serde_json::Value> = insane_dates
            .iter()
            .map(|d| {
                let parts: Vec<&str> = d.split('|').collect();
                if parts.len() >= 4 {
                    json!({
                        "transaction_id": parts[0],
                        "date": parts[1],
                        "merchant": parts[2],
                        "amount": parts[3].parse::<f64>().ok()
                    })
                } else {
                    json!({"info": d})
                }
            })
            .collect();
        checks.insert(
            "date_sanity".to_string(),
            CheckResult {
                status: if insane_dates.is_empty() { "pass" } else { "error" }.to_string(),
                message: if insane_dates.is_empty() {
                    "All transaction dates are valid".to_string()
                } else {
                    format!("{} transaction(s) have unreasonable dates", insane_dates.len())
                },
                details: if insane_dates.is_empty() {
                    None
                } else {
                    Some(date_details)
                },
            },
        );

        // Stale rollups: stats rows with no surviving transactions
        let stale = self.repository.check_stale_stats()?;
        let stale_details: Vec<serde_json::Value> = stale
            .iter()
            .map(|s| {
                let parts: Vec<&str> = s.split(':').collect();
                if parts.len() >= 2 {
                    json!({"user_id": parts[0], "restaurant_id": parts[1]})
                } else {
                    json!({"pair": s})
                }
            })
            .collect();
        checks.insert(
            "stale_rollups".to_string(),
            CheckResult {
                status: if stale.is_empty() { "pass" } else { "warning" }.to_string(),
                message: if stale.is_empty() {
                    "All rollups are backed by transactions".to_string()
                } else {
                    format!(
                        "{} rollup(s) have no backing transactions - re-run stats",
                        stale.len()
                    )
                },
                details: if stale.is_empty() { None } else { Some(stale_details) },
            },
        );

        let passed = checks.values().filter(|c| c.status == "pass").count() as i64;
        let warnings = checks.values().filter(|c| c.status == "warning").count() as i64;
        let errors = checks.values().filter(|c| c.status == "error").count() as i64;

        Ok(DoctorResult {
            checks,
            summary: DoctorSummary {
                passed,
                warnings,
                errors,
            },
        })
    }

    /// Insert a probe transaction for an existing user and delete it again
    ///
    /// Exercises the full insert/delete path including constraints, so
    /// permission and schema problems surface here instead of mid-ingest.
    fn check_write_path(&self) -> Result<CheckResult> {
        let users = self.repository.get_users()?;
        let user = match users.first() {
            Some(user) => user,
            None => {
                return Ok(CheckResult {
                    status: "pass".to_string(),
                    message: "No users to probe with - store is reachable".to_string(),
                    details: None,
                })
            }
        };

        let probe = Transaction::new(
            Uuid::new_v4(),
            user.id,
            format!("probe-{}", Utc::now().timestamp_millis()),
            Decimal::new(100, 2), // $1.00
            "Test Merchant",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            "Test",
        );

        if let Err(e) = self.repository.insert_transaction(&probe) {
            return Ok(CheckResult {
                status: "error".to_string(),
                message: format!("Probe insert failed: {}", e),
                details: None,
            });
        }

        if let Err(e) = self.repository.delete_transaction(probe.id) {
            return Ok(CheckResult {
                status: "warning".to_string(),
                message: format!("Probe inserted but cleanup failed: {}", e),
                details: Some(vec![json!({"transaction_id": probe.id.to_string()})]),
            });
        }

        Ok(CheckResult {
            status: "pass".to_string(),
            message: "Probe transaction inserted and cleaned up".to_string(),
            details: None,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DoctorResult {
    pub checks: HashMap<String, CheckResult>,
    pub summary: DoctorSummary,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
pub struct DoctorSummary {
    pub passed: i64,
    pub warnings: i64,
    pub errors: i64,
}

//! Transaction normalizer - shapes raw provider records into the stored schema
//!
//! Pure validation and coercion: no side effects. A record fails as a whole
//! when any required field is missing or empty; the caller decides what to
//! do with the rejection (the ingestor skips just that record).

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::Transaction;
use crate::ports::RawTransaction;

/// Validate and shape one raw record into a canonical transaction
///
/// The produced transaction has `restaurant_id = None`; the matcher fills
/// it in after the record is persisted.
pub fn normalize_record(user_id: Uuid, raw: &RawTransaction) -> Result<Transaction> {
    let external_id = required_text(raw.id.as_deref(), "id")?;
    let merchant = required_text(raw.merchant.as_deref(), "merchant")?;
    let category = required_text(raw.category.as_deref(), "category")?;
    let date_text = required_text(raw.date.as_deref(), "date")?;

    let amount = raw
        .amount
        .ok_or_else(|| Error::validation("missing or empty field `amount`"))?;
    if !amount.is_finite() {
        return Err(Error::validation(format!("non-finite amount: {}", amount)));
    }
    let amount = Decimal::from_f64(amount)
        .ok_or_else(|| Error::validation(format!("unrepresentable amount: {}", amount)))?
        .round_dp(2);

    let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d")
        .map_err(|_| Error::validation(format!("unparseable date: {}", date_text)))?;

    Ok(Transaction::new(
        Uuid::new_v4(),
        user_id,
        external_id,
        amount,
        merchant,
        date,
        category,
    ))
}

fn required_text(value: Option<&str>, field: &str) -> Result<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(Error::validation(format!(
            "missing or empty field `{}`",
            field
        ))),
    }
}

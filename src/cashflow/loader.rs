//! Build transactions from labelled period series and CSV files
//!
//! Reporting grids label periods with month-year captions such as `Jan 2008`.
//! Each label maps to the first day of its month.

use super::Transaction;
use crate::error::{Result, XirrError};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw row as it arrives from CSV or JSON: `when` is still a label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub when: String,
    pub amount: f64,
}

impl TransactionRecord {
    pub fn to_transaction(&self) -> Result<Transaction> {
        if !self.amount.is_finite() {
            return Err(XirrError::invalid_input(format!(
                "amount for '{}' is not finite",
                self.when
            )));
        }
        Ok(Transaction::new(self.amount, parse_period_label(&self.when)?))
    }
}

/// Parse a `MMM yyyy` period label (or an ISO `yyyy-mm-dd` date)
pub fn parse_period_label(label: &str) -> Result<NaiveDate> {
    let label = label.trim();

    NaiveDate::parse_from_str(&format!("1 {label}"), "%d %b %Y")
        .or_else(|_| NaiveDate::parse_from_str(label, "%Y-%m-%d"))
        .map_err(|_| XirrError::InvalidPeriod {
            label: label.to_string(),
        })
}

/// Pair a row of amounts with its header of period labels
pub fn transactions_from_series<S: AsRef<str>>(
    amounts: &[f64],
    labels: &[S],
) -> Result<Vec<Transaction>> {
    if amounts.len() != labels.len() {
        return Err(XirrError::invalid_input(format!(
            "{} amounts but {} period labels",
            amounts.len(),
            labels.len()
        )));
    }

    amounts
        .iter()
        .zip(labels)
        .map(|(&amount, label)| {
            TransactionRecord {
                when: label.as_ref().to_string(),
                amount,
            }
            .to_transaction()
        })
        .collect()
}

/// Load transactions from a CSV file with a `when,amount` header
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path)?;
    load_transactions_from_reader(file)
}

/// Load transactions from any reader (e.g., stdin, string buffer)
pub fn load_transactions_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut transactions = Vec::new();

    for result in csv_reader.deserialize() {
        let record: TransactionRecord = result?;
        transactions.push(record.to_transaction()?);
    }

    log::debug!("loaded {} transactions", transactions.len());
    Ok(transactions)
}

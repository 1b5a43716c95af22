//! Dated cash flows and their normalization to day offsets

pub mod loader;

pub use loader::{
    load_transactions, load_transactions_from_reader, parse_period_label,
    transactions_from_series, TransactionRecord,
};

use crate::error::{Result, XirrError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated cash flow (negative = outflow, positive = inflow)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub when: NaiveDate,
}

impl Transaction {
    pub fn new(amount: f64, when: NaiveDate) -> Self {
        Self { amount, when }
    }
}

/// A cash flow positioned by whole days from the first transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedFlow {
    pub amount: f64,
    pub day_offset: i64,
}

/// Convert transactions to day offsets relative to the first transaction's date.
///
/// Input order is preserved. Offsets are negative for transactions dated
/// before the first one.
pub fn normalize(transactions: &[Transaction]) -> Result<Vec<NormalizedFlow>> {
    let origin = transactions
        .first()
        .ok_or_else(|| XirrError::invalid_input("transaction list is empty"))?
        .when;

    Ok(transactions
        .iter()
        .map(|t| NormalizedFlow {
            amount: t.amount,
            day_offset: (t.when - origin).num_days(),
        })
        .collect())
}

/// True when the amounts contain at least one inflow and one outflow
pub fn has_sign_change(flows: &[NormalizedFlow]) -> bool {
    let has_positive = flows.iter().any(|f| f.amount > 0.0);
    let has_negative = flows.iter().any(|f| f.amount < 0.0);
    has_positive && has_negative
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offsets_relative_to_first() {
        let transactions = vec![
            Transaction::new(-10000.0, date(2008, 1, 1)),
            Transaction::new(2750.0, date(2008, 3, 1)),
            Transaction::new(4250.0, date(2008, 10, 30)),
            Transaction::new(3250.0, date(2009, 2, 15)),
        ];

        let flows = normalize(&transactions).unwrap();
        let offsets: Vec<i64> = flows.iter().map(|f| f.day_offset).collect();
        // 2008 is a leap year
        assert_eq!(offsets, vec![0, 60, 303, 411]);
        assert_eq!(flows[2].amount, 4250.0);
    }

    #[test]
    fn test_unsorted_input_gives_negative_offsets() {
        let transactions = vec![
            Transaction::new(500.0, date(2020, 6, 1)),
            Transaction::new(-400.0, date(2020, 5, 1)),
        ];

        let flows = normalize(&transactions).unwrap();
        assert_eq!(flows[0].day_offset, 0);
        assert_eq!(flows[1].day_offset, -31);
        assert_eq!(flows[1].amount, -400.0);
    }

    #[test]
    fn test_empty_is_invalid_input() {
        match normalize(&[]) {
            Err(XirrError::InvalidInput { .. }) => {}
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_sign_change() {
        let mixed = [
            NormalizedFlow { amount: -1.0, day_offset: 0 },
            NormalizedFlow { amount: 2.0, day_offset: 10 },
        ];
        let positive = [
            NormalizedFlow { amount: 100.0, day_offset: 0 },
            NormalizedFlow { amount: 50.0, day_offset: 30 },
        ];
        assert!(has_sign_change(&mixed));
        assert!(!has_sign_change(&positive));
        assert!(!has_sign_change(&[]));
    }
}

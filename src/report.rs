//! Serializable XIRR result for display layers
//!
//! A failed computation is rendered as an absent value with the error text
//! attached, never as a number.

use crate::error::Result;
use crate::xirr::XirrSolution;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XirrReport {
    pub rate: Option<f64>,
    pub rate_pct: Option<f64>,
    pub iterations: Option<usize>,
    pub flow_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl XirrReport {
    /// Build from a calculator outcome; `flow_count` is the input length
    pub fn from_outcome(outcome: &Result<XirrSolution>, flow_count: usize) -> Self {
        match outcome {
            Ok(solution) => Self {
                rate: Some(solution.rate),
                rate_pct: Some(solution.rate * 100.0),
                iterations: Some(solution.iterations),
                flow_count: solution.flow_count,
                error: None,
            },
            Err(e) => {
                log::warn!("XIRR not computable for {} flows: {}", flow_count, e);
                Self {
                    rate: None,
                    rate_pct: None,
                    iterations: None,
                    flow_count,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Headline text: the rate as a percentage, or empty when absent
    pub fn headline(&self) -> String {
        self.rate_pct
            .map(|pct| format!("{:.2}%", pct))
            .unwrap_or_default()
    }

    pub fn is_computed(&self) -> bool {
        self.rate.is_some()
    }
}

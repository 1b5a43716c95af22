//! XIRR Engine - annualized internal rate of return for dated cash flows
//!
//! This library provides:
//! - Normalization of dated transactions to day offsets (actual/365)
//! - The NPV objective and its analytic derivative
//! - A bounded Newton-Raphson solver with configurable tolerance
//! - Loading transactions from month-year labelled series and CSV
//! - A serializable report for CLI and Lambda front ends

pub mod cashflow;
pub mod config;
pub mod error;
pub mod report;
pub mod xirr;

// Re-export commonly used types
pub use cashflow::{NormalizedFlow, Transaction};
pub use config::SolverConfig;
pub use error::{Result, XirrError};
pub use report::XirrReport;
pub use xirr::{calculate_xirr, XirrCalculator, XirrSolution};

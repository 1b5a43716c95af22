//! AWS Lambda handler for XIRR
//!
//! Accepts dated cash flows as JSON and returns an XIRR report. A rate that
//! cannot be computed comes back as `rate: null` with an `error` message
//! rather than as a Lambda failure.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Deserialize;
use xirr_engine::cashflow::TransactionRecord;
use xirr_engine::config::{DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use xirr_engine::{Result, SolverConfig, Transaction, XirrCalculator, XirrReport};

/// Input payload
#[derive(Debug, Deserialize)]
pub struct XirrRequest {
    /// Cash flows; `when` is `MMM yyyy` or `yyyy-mm-dd`
    pub transactions: Vec<TransactionRecord>,

    #[serde(default = "default_guess")]
    pub guess: f64,

    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_guess() -> f64 { DEFAULT_INITIAL_GUESS }
fn default_tolerance() -> f64 { DEFAULT_TOLERANCE }
fn default_max_iterations() -> usize { DEFAULT_MAX_ITERATIONS }

async fn handler(event: LambdaEvent<XirrRequest>) -> std::result::Result<XirrReport, Error> {
    let request = event.payload;
    let flow_count = request.transactions.len();

    let config = SolverConfig::default()
        .with_tolerance(request.tolerance)
        .with_max_iterations(request.max_iterations)
        .with_initial_guess(request.guess);

    let transactions: Result<Vec<Transaction>> = request
        .transactions
        .iter()
        .map(TransactionRecord::to_transaction)
        .collect();

    let outcome = transactions.and_then(|transactions| {
        XirrCalculator::new(config).solve(&transactions, config.initial_guess)
    });

    Ok(XirrReport::from_outcome(&outcome, flow_count))
}

#[tokio::main]
async fn main() -> std::result::Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

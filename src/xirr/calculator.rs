//! XIRR orchestration: normalize, bind the NPV objective, run Newton-Raphson

use super::objective::NpvObjective;
use super::solver::newton_raphson;
use crate::cashflow::{has_sign_change, normalize, Transaction};
use crate::config::SolverConfig;
use crate::error::{Result, XirrError};
use rayon::prelude::*;

/// Converged rate together with the work it took
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XirrSolution {
    /// Annual rate as a decimal (0.0823 = 8.23%)
    pub rate: f64,
    pub iterations: usize,
    pub flow_count: usize,
}

/// Stateless XIRR calculator; calls never share state
#[derive(Debug, Clone, Copy, Default)]
pub struct XirrCalculator {
    config: SolverConfig,
}

impl XirrCalculator {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Annual rate that zeroes the NPV of `transactions`, starting from `guess`
    pub fn compute(&self, transactions: &[Transaction], guess: f64) -> Result<f64> {
        self.solve(transactions, guess).map(|s| s.rate)
    }

    /// [`compute`](Self::compute) with the configured initial guess
    pub fn compute_default(&self, transactions: &[Transaction]) -> Result<f64> {
        self.compute(transactions, self.config.initial_guess)
    }

    /// Full solve, reporting iterations alongside the rate
    pub fn solve(&self, transactions: &[Transaction], guess: f64) -> Result<XirrSolution> {
        let flows = normalize(transactions)?;

        if flows.len() < 2 {
            return Err(XirrError::invalid_input(format!(
                "need at least two cash flows, got {}",
                flows.len()
            )));
        }
        if let Some(bad) = flows.iter().position(|f| !f.amount.is_finite()) {
            return Err(XirrError::invalid_input(format!(
                "amount at position {bad} is not finite"
            )));
        }
        if flows.iter().all(|f| f.day_offset == flows[0].day_offset) {
            return Err(XirrError::invalid_input(
                "all cash flows fall on the same date",
            ));
        }
        // Without both an inflow and an outflow the NPV has no real root
        if !has_sign_change(&flows) {
            return Err(XirrError::ConvergenceError {
                message: "cash flows never change sign, no rate can zero the NPV".to_string(),
                iterations: 0,
            });
        }

        let objective = NpvObjective::new(&flows);
        log::debug!(
            "solving XIRR for {} flows over {} days from guess {}",
            flows.len(),
            flows.iter().map(|f| f.day_offset).max().unwrap_or(0),
            guess
        );

        let solution = newton_raphson(
            |r| objective.npv(r),
            |r| objective.derivative(r),
            guess,
            &self.config,
        )?;

        log::debug!(
            "XIRR converged to {:.6} in {} iterations",
            solution.root,
            solution.iterations
        );

        Ok(XirrSolution {
            rate: solution.root,
            iterations: solution.iterations,
            flow_count: flows.len(),
        })
    }

    /// Solve independent portfolios in parallel, preserving input order
    pub fn compute_batch(&self, portfolios: &[Vec<Transaction>], guess: f64) -> Vec<Result<f64>> {
        portfolios
            .par_iter()
            .map(|transactions| self.compute(transactions, guess))
            .collect()
    }
}

/// XIRR with default settings and the 10% starting guess
pub fn calculate_xirr(transactions: &[Transaction]) -> Result<f64> {
    XirrCalculator::default().compute_default(transactions)
}

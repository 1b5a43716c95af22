//! Solver settings
//!
//! Defaults reproduce the fixed policy of four decimal digits on successive
//! guesses, a 100 iteration cap and a 10% starting guess. Callers needing
//! tighter precision override them directly or through the environment:
//!   XIRR_TOLERANCE, XIRR_MAX_ITERATIONS, XIRR_INITIAL_GUESS

use crate::error::{Result, XirrError};
use serde::{Deserialize, Serialize};
use std::env;

/// Absolute tolerance on the distance between successive guesses
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Maximum number of Newton-Raphson iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Starting guess for the annual rate (10%)
pub const DEFAULT_INITIAL_GUESS: f64 = 0.1;

/// Newton-Raphson settings used by the XIRR calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    #[serde(default = "default_initial_guess")]
    pub initial_guess: f64,
}

fn default_tolerance() -> f64 { DEFAULT_TOLERANCE }
fn default_max_iterations() -> usize { DEFAULT_MAX_ITERATIONS }
fn default_initial_guess() -> f64 { DEFAULT_INITIAL_GUESS }

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }
}

impl SolverConfig {
    /// Read overrides from the environment, falling back to the defaults
    /// for anything unset or unparseable
    pub fn from_env() -> Self {
        let tolerance: f64 = env::var("XIRR_TOLERANCE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TOLERANCE);

        let max_iterations: usize = env::var("XIRR_MAX_ITERATIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_ITERATIONS);

        let initial_guess: f64 = env::var("XIRR_INITIAL_GUESS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_INITIAL_GUESS);

        Self {
            tolerance,
            max_iterations,
            initial_guess,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Check that the settings describe a bounded, meaningful iteration
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(XirrError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(XirrError::invalid_input("max_iterations must be at least 1"));
        }
        if !self.initial_guess.is_finite() {
            return Err(XirrError::invalid_input(format!(
                "initial guess must be finite, got {}",
                self.initial_guess
            )));
        }
        Ok(())
    }
}

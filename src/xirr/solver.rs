//! Bounded Newton-Raphson root finder for a scalar function
//!
//! Pure undamped iteration: no bracketing and no bisection fallback. The
//! convergence test is on the distance between successive guesses, and at
//! least one step is always taken.

use crate::config::SolverConfig;
use crate::error::{Result, XirrError};

/// Root found by [`newton_raphson`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSolution {
    pub root: f64,
    /// Number of Newton steps taken (at least 1)
    pub iterations: usize,
}

/// Find `x` with `f(x) ≈ 0` starting from `guess`.
///
/// Stops when `|x_next - x| <= config.tolerance`. Fails with
/// `NumericalError` as soon as the value, the derivative or the next guess
/// is not finite, or the derivative is zero, and with `ConvergenceError`
/// once `config.max_iterations` steps have been taken without converging.
pub fn newton_raphson<F, DF>(f: F, df: DF, guess: f64, config: &SolverConfig) -> Result<NewtonSolution>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;

    let mut x = guess;
    let mut step = f64::NAN;

    for iteration in 1..=config.max_iterations {
        let fx = f(x);
        let dfx = df(x);

        if !fx.is_finite() || !dfx.is_finite() {
            return Err(XirrError::NumericalError {
                message: format!("non-finite objective at x = {x}: f = {fx}, f' = {dfx}"),
                iteration,
            });
        }
        if dfx == 0.0 {
            return Err(XirrError::NumericalError {
                message: format!("zero derivative at x = {x}"),
                iteration,
            });
        }

        let next = x - fx / dfx;
        if !next.is_finite() {
            return Err(XirrError::NumericalError {
                message: format!("step from x = {x} left the finite range (f = {fx}, f' = {dfx})"),
                iteration,
            });
        }

        step = (next - x).abs();
        log::trace!("newton iteration {iteration}: x = {next}, step = {step:e}");

        if step <= config.tolerance {
            return Ok(NewtonSolution {
                root: next,
                iterations: iteration,
            });
        }
        x = next;
    }

    Err(XirrError::ConvergenceError {
        message: format!("last guess {x}, last step {step:e} above tolerance {:e}", config.tolerance),
        iterations: config.max_iterations,
    })
}

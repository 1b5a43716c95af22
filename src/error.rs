//! Error types for XIRR calculation
//!
//! Every failure is returned to the caller as an explicit `XirrError`;
//! the calculator never reports a partially converged rate as success.

use thiserror::Error;

/// Convenience alias for results in this crate
pub type Result<T> = std::result::Result<T, XirrError>;

/// Errors raised while loading cash flows or solving for a rate
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XirrError {
    /// Cash flows or solver settings fail a precondition
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The iteration bound was reached without meeting the tolerance
    #[error("failed to converge after {iterations} iterations: {message}")]
    ConvergenceError { message: String, iterations: usize },

    /// An intermediate value became NaN or infinite
    #[error("numerical error at iteration {iteration}: {message}")]
    NumericalError { message: String, iteration: usize },

    /// A period label could not be parsed as a date
    #[error("unrecognised period label '{label}' (expected 'MMM yyyy' or 'yyyy-mm-dd')")]
    InvalidPeriod { label: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl XirrError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        XirrError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_details() {
        let err = XirrError::ConvergenceError {
            message: "step still 0.5".into(),
            iterations: 100,
        };
        let display = err.to_string();
        assert!(display.contains("100 iterations"));
        assert!(display.contains("step still 0.5"));

        let err = XirrError::NumericalError {
            message: "derivative is zero".into(),
            iteration: 3,
        };
        assert!(err.to_string().contains("iteration 3"));

        let err = XirrError::InvalidPeriod {
            label: "Smarch 2020".into(),
        };
        assert!(err.to_string().contains("Smarch 2020"));
    }

    #[test]
    fn test_invalid_input_helper() {
        match XirrError::invalid_input("empty") {
            XirrError::InvalidInput { message } => assert_eq!(message, "empty"),
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<XirrError>();
    }
}

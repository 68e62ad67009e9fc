//! Error types for solver operations.

use thiserror::Error;
use zf_core::error::ZfError;

/// Errors that can occur during a Z-factor or derivative solve.
///
/// Running out of iterations is not one of them: that is reported through
/// [`crate::BisectionOutcome::converged`] unless the caller asks for a hard
/// failure with [`crate::BisectionOutcome::into_converged`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid bracket [{low}, {high}]: lower bound must be below upper bound")]
    InvalidBracket { low: f64, high: f64 },

    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Domain error: {what}")]
    Domain { what: String },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: String },

    #[error("Residual is not finite at x = {at} (value {value})")]
    NonFiniteResidual { at: f64, value: f64 },

    #[error("Convergence failed: {what} after {iterations} iterations")]
    NotConverged { what: String, iterations: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for ZfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidBracket { .. } => ZfError::InvalidArg { what: "bracket" },
            SolverError::InvalidConfig { .. } => ZfError::InvalidArg {
                what: "solver configuration",
            },
            SolverError::Domain { .. } => ZfError::InvalidArg {
                what: "operating point",
            },
            SolverError::DivisionByZero { .. } => ZfError::Invariant {
                what: "division by zero",
            },
            SolverError::NonFiniteResidual { value, .. } => ZfError::NonFinite {
                what: "residual",
                value,
            },
            SolverError::NotConverged { .. } => ZfError::NotConverged { what: "bisection" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_error_names_bounds() {
        let err = SolverError::InvalidBracket {
            low: 1.1,
            high: 0.7,
        };
        let msg = err.to_string();
        assert!(msg.contains("1.1") && msg.contains("0.7"));
    }

    #[test]
    fn converts_to_core_error() {
        let err: ZfError = SolverError::NonFiniteResidual {
            at: 0.5,
            value: f64::NAN,
        }
        .into();
        assert!(matches!(err, ZfError::NonFinite { what: "residual", .. }));
    }
}

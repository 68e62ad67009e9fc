//! Gas property errors.

use crate::units::UnitError;
use thiserror::Error;
use zf_core::ZfError;

/// Result type for gas property operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors raised by the correlation layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Value outside the range the correlation was fitted on.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Unit-tagged input could not be parsed.
    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),
}

impl From<GasError> for ZfError {
    fn from(err: GasError) -> Self {
        match err {
            GasError::OutOfRange { what, .. } => ZfError::InvalidArg { what },
            GasError::InvalidArg { what } => ZfError::InvalidArg { what },
            GasError::Unit(_) => ZfError::InvalidArg {
                what: "unit-tagged input",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GasError::OutOfRange {
            what: "specific gravity",
            value: 2.0,
        };
        assert!(err.to_string().contains("specific gravity"));
    }

    #[test]
    fn error_to_zf_error() {
        let gas_err = GasError::InvalidArg { what: "sg" };
        let zf_err: ZfError = gas_err.into();
        assert!(matches!(zf_err, ZfError::InvalidArg { what: "sg" }));
    }
}

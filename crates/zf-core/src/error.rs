use thiserror::Error;

pub type ZfResult<T> = Result<T, ZfError>;

#[derive(Error, Debug)]
pub enum ZfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Did not converge: {what}")]
    NotConverged { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

use thiserror::Error;

pub type SweepResult<T> = Result<T, SweepError>;

/// Error in sweep definition or execution.
#[derive(Error, Debug)]
pub enum SweepError {
    /// Invalid sweep configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Unit-tagged bound could not be parsed
    #[error("Unit error in {what}: {source}")]
    Unit {
        what: &'static str,
        #[source]
        source: zf_gas::UnitError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

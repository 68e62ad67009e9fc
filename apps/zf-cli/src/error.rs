use std::path::PathBuf;
use thiserror::Error;
use zf_core::ZfError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Study error: {0}")]
    Study(String),

    #[error("Solver error: {message}")]
    Solver { message: String, source: ZfError },

    #[error("Input error: {message}")]
    Input { message: String, source: ZfError },

    #[error("Sweep error: {0}")]
    Sweep(String),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type CliResult<T> = Result<T, CliError>;

impl From<zf_study::StudyError> for CliError {
    fn from(err: zf_study::StudyError) -> Self {
        CliError::Study(err.to_string())
    }
}

impl From<zf_solver::SolverError> for CliError {
    fn from(err: zf_solver::SolverError) -> Self {
        CliError::Solver {
            message: err.to_string(),
            source: err.into(),
        }
    }
}

impl From<zf_gas::GasError> for CliError {
    fn from(err: zf_gas::GasError) -> Self {
        CliError::Input {
            message: err.to_string(),
            source: err.into(),
        }
    }
}

impl From<zf_gas::UnitError> for CliError {
    fn from(err: zf_gas::UnitError) -> Self {
        zf_gas::GasError::from(err).into()
    }
}

impl From<zf_sweeps::SweepError> for CliError {
    fn from(err: zf_sweeps::SweepError) -> Self {
        CliError::Sweep(err.to_string())
    }
}

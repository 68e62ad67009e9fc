//! zf-study: study file format and validation.
//!
//! A study describes one curve-family computation: the gas, the solver
//! settings, the brackets and the pressure/temperature sweeps.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_study};

pub type StudyResult<T> = Result<T, StudyError>;

#[derive(thiserror::Error, Debug)]
pub enum StudyError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Sweep error: {0}")]
    Sweep(#[from] zf_sweeps::SweepError),

    #[error("Gas error: {0}")]
    Gas(#[from] zf_gas::GasError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> StudyResult<Study> {
    let mut study: Study = serde_yaml::from_str(content)?;
    study = migrate_to_latest(study)?;
    validate_study(&study)?;
    Ok(study)
}

pub fn load_yaml(path: &std::path::Path) -> StudyResult<Study> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &std::path::Path, study: &Study) -> StudyResult<()> {
    validate_study(study)?;
    let content = serde_yaml::to_string(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> StudyResult<Study> {
    let content = std::fs::read_to_string(path)?;
    let mut study: Study = serde_json::from_str(&content)?;
    study = migrate_to_latest(study)?;
    validate_study(&study)?;
    Ok(study)
}

pub fn save_json(path: &std::path::Path, study: &Study) -> StudyResult<()> {
    validate_study(study)?;
    let content = serde_json::to_string_pretty(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

//! Study validation logic.

use crate::schema::{BracketDef, Study, SweepDef};
use zf_gas::GasSample;
use zf_sweeps::Output;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing field: {field} ({reason})")]
    Missing { field: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    if study.name.trim().is_empty() {
        return Err(invalid("name", "", "must not be empty"));
    }

    let sg = study.gas.specific_gravity;
    let (lo, hi) = GasSample::SG_RANGE;
    if !sg.is_finite() || !(lo..=hi).contains(&sg) {
        return Err(invalid(
            "gas.specific_gravity",
            sg,
            "outside the 0.57..1.68 range of the correlations",
        ));
    }

    if !study.solver.tolerance.is_finite() || study.solver.tolerance < 0.0 {
        return Err(invalid(
            "solver.tolerance",
            study.solver.tolerance,
            "must be finite and >= 0",
        ));
    }
    if study.solver.max_iterations == 0 {
        return Err(invalid("solver.max_iterations", 0, "must be at least 1"));
    }

    if let Some(b) = &study.z_bracket {
        validate_bracket("z_bracket", b)?;
        if b.low <= 0.0 {
            return Err(invalid("z_bracket.low", b.low, "must be > 0"));
        }
    }

    match (study.quantity, &study.derivative_bracket) {
        (Output::Z, _) => {}
        (_, None) => {
            return Err(ValidationError::Missing {
                field: "derivative_bracket".to_string(),
                reason: format!("required for {} output", study.quantity),
            });
        }
        (_, Some(b)) => validate_bracket("derivative_bracket", b)?,
    }

    validate_sweep("pressure", &study.pressure)?;
    validate_sweep("temperature", &study.temperature)?;

    Ok(())
}

fn validate_bracket(field: &str, bracket: &BracketDef) -> Result<(), ValidationError> {
    if !bracket.low.is_finite() || !bracket.high.is_finite() || bracket.low >= bracket.high {
        return Err(invalid(
            field,
            format!("[{}, {}]", bracket.low, bracket.high),
            "low must be below high",
        ));
    }
    Ok(())
}

fn validate_sweep(field: &str, sweep: &SweepDef) -> Result<(), ValidationError> {
    if sweep.points == 0 {
        return Err(invalid(&format!("{field}.points"), 0, "must be at least 1"));
    }
    if sweep.points > 1 && sweep.end.is_none() {
        return Err(ValidationError::Missing {
            field: format!("{field}.end"),
            reason: "a sweep with several points needs an end value".to_string(),
        });
    }
    Ok(())
}

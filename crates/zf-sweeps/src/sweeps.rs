//! Parametric sweeps over pressure or temperature.
//!
//! Bounds are given as unit-tagged text (`"1 atm"`, `"213 F"`) and stored
//! both raw, for re-editing, and in canonical SI for computation.

use crate::error::{SweepError, SweepResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use zf_core::linspace;
use zf_gas::{Quantity, parse_quantity};

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    /// Quantity being swept (Temperature or Pressure)
    pub quantity: Quantity,
    /// Start value in canonical SI units
    pub start_si: f64,
    /// User input for start (preserved for re-editing)
    pub start_raw: String,
    /// End value in canonical SI units
    pub end_si: f64,
    /// User input for end (preserved for re-editing)
    pub end_raw: String,
    /// Number of points to generate
    pub num_points: usize,
    /// Spacing type
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a sweep from user text inputs.
    pub fn from_text(
        start_raw: impl Into<String>,
        end_raw: impl Into<String>,
        quantity: Quantity,
        num_points: usize,
        sweep_type: SweepType,
    ) -> SweepResult<Self> {
        let start_text = start_raw.into();
        let end_text = end_raw.into();

        let start_si = parse_quantity(&start_text, quantity).map_err(|source| SweepError::Unit {
            what: "sweep start",
            source,
        })?;
        let end_si = parse_quantity(&end_text, quantity).map_err(|source| SweepError::Unit {
            what: "sweep end",
            source,
        })?;

        if num_points == 0 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 1 point".to_string(),
            ));
        }

        if num_points > 1 && (start_si - end_si).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        Ok(SweepDefinition {
            quantity,
            start_si,
            start_raw: start_text,
            end_si,
            end_raw: end_text,
            num_points,
            sweep_type,
        })
    }

    /// A sweep holding a single value, used for the fixed axis of a one-curve family.
    pub fn single(raw: impl Into<String>, quantity: Quantity) -> SweepResult<Self> {
        let raw = raw.into();
        Self::from_text(raw.clone(), raw, quantity, 1, SweepType::Linear)
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        linspace(self.start_si, self.end_si, self.num_points)
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start_si];
        }

        // For logarithmic sweep, both start and end must be positive
        if self.start_si <= 0.0 || self.end_si <= 0.0 {
            return self.generate_linear();
        }

        let mut points: Vec<f64> = linspace(self.start_si.ln(), self.end_si.ln(), self.num_points)
            .into_iter()
            .map(f64::exp)
            .collect();

        // Ensure exact endpoints
        points[0] = self.start_si;
        points[self.num_points - 1] = self.end_si;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.quantity, self.start_raw, self.end_raw, self.num_points, self.sweep_type
        )
    }
}

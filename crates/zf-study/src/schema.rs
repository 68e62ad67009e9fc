//! Study schema definitions.

use crate::{StudyError, StudyResult};
use serde::{Deserialize, Serialize};
use zf_core::Bracket;
use zf_gas::{GasSample, Quantity};
use zf_solver::BisectionConfig;
use zf_sweeps::{FamilyRequest, Output, SweepDefinition, SweepType, VaryAxis};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    pub version: u32,
    pub name: String,
    pub gas: GasDef,
    #[serde(default)]
    pub solver: SolverDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_bracket: Option<BracketDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derivative_bracket: Option<BracketDef>,
    #[serde(default)]
    pub quantity: Output,
    #[serde(default)]
    pub vary: VaryAxis,
    pub pressure: SweepDef,
    pub temperature: SweepDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasDef {
    pub specific_gravity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_tolerance() -> f64 {
    BisectionConfig::DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    BisectionConfig::DEFAULT_MAX_ITERATIONS
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl From<&SolverDef> for BisectionConfig {
    fn from(def: &SolverDef) -> Self {
        BisectionConfig {
            tolerance: def.tolerance,
            max_iterations: def.max_iterations,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BracketDef {
    pub low: f64,
    pub high: f64,
}

impl From<BracketDef> for Bracket {
    fn from(def: BracketDef) -> Self {
        Bracket::new(def.low, def.high)
    }
}

/// Z bracket used when a study does not name one. Wide enough for the
/// whole DAK range, at the cost of a few more iterations.
pub const WIDE_Z_BRACKET: BracketDef = BracketDef {
    low: 2.5e-4,
    high: 16.0,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub start: String,
    /// Defaults to `start` for a single value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default)]
    pub spacing: SweepType,
}

fn default_points() -> usize {
    1
}

impl SweepDef {
    pub fn to_definition(&self, quantity: Quantity) -> StudyResult<SweepDefinition> {
        let end = self.end.clone().unwrap_or_else(|| self.start.clone());
        Ok(SweepDefinition::from_text(
            self.start.clone(),
            end,
            quantity,
            self.points,
            self.spacing,
        )?)
    }
}

impl Study {
    pub fn z_bracket(&self) -> Bracket {
        self.z_bracket.unwrap_or(WIDE_Z_BRACKET).into()
    }

    /// Build the curve-family request this study describes.
    pub fn to_family_request(&self) -> StudyResult<FamilyRequest> {
        let request = FamilyRequest {
            gas: GasSample::new(self.gas.specific_gravity)?,
            output: self.quantity,
            vary: self.vary,
            pressures: self.pressure.to_definition(Quantity::Pressure)?,
            temperatures: self.temperature.to_definition(Quantity::Temperature)?,
            z_bracket: self.z_bracket(),
            derivative_bracket: self.derivative_bracket.map(Bracket::from),
            config: BisectionConfig::from(&self.solver),
        };
        request.validate().map_err(StudyError::from)?;
        Ok(request)
    }

    /// Small isotherm study of a 0.9 gravity gas.
    pub fn example() -> Self {
        Study {
            version: crate::LATEST_VERSION,
            name: "Isotherms sg 0.9".to_string(),
            gas: GasDef {
                specific_gravity: 0.9,
            },
            solver: SolverDef::default(),
            z_bracket: Some(BracketDef {
                low: 0.2,
                high: 2.0,
            }),
            derivative_bracket: None,
            quantity: Output::Z,
            vary: VaryAxis::Pressure,
            pressure: SweepDef {
                start: "1 atm".to_string(),
                end: Some("500 atm".to_string()),
                points: 50,
                spacing: SweepType::Linear,
            },
            temperature: SweepDef {
                start: "0 C".to_string(),
                end: Some("100 C".to_string()),
                points: 5,
                spacing: SweepType::Linear,
            },
        }
    }
}

//! Curve-family execution.

use crate::error::{SweepError, SweepResult};
use crate::sweeps::SweepDefinition;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use zf_core::units::{constants::ATM_PA, k, pa, to_celsius};
use zf_core::{Bracket, OperatingPoint};
use zf_gas::{GasSample, Quantity, operating_point};
use zf_solver::{BisectionConfig, Sensitivity, Termination, solve_derivative, solve_z};

/// Quantity plotted on the curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    #[default]
    Z,
    DzDtpr,
    DzDppr,
}

impl Output {
    fn sensitivity(self) -> Option<Sensitivity> {
        match self {
            Self::Z => None,
            Self::DzDtpr => Some(Sensitivity::Tpr),
            Self::DzDppr => Some(Sensitivity::Ppr),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Z => write!(f, "Z"),
            Self::DzDtpr => write!(f, "dZ/dTpr"),
            Self::DzDppr => write!(f, "dZ/dPpr"),
        }
    }
}

/// Variable that changes along each curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VaryAxis {
    /// Isotherms: one curve per temperature, pressure along the curve
    #[default]
    Pressure,
    /// Isobars: one curve per pressure, temperature along the curve
    Temperature,
}

/// Everything needed to compute one curve family.
#[derive(Debug, Clone)]
pub struct FamilyRequest {
    pub gas: GasSample,
    pub output: Output,
    pub vary: VaryAxis,
    pub pressures: SweepDefinition,
    pub temperatures: SweepDefinition,
    pub z_bracket: Bracket,
    /// Required for derivative outputs
    pub derivative_bracket: Option<Bracket>,
    pub config: BisectionConfig,
}

impl FamilyRequest {
    pub fn validate(&self) -> SweepResult<()> {
        if self.pressures.quantity != Quantity::Pressure {
            return Err(SweepError::InvalidConfiguration(
                "Pressure sweep must be for Pressure quantity".to_string(),
            ));
        }
        if self.temperatures.quantity != Quantity::Temperature {
            return Err(SweepError::InvalidConfiguration(
                "Temperature sweep must be for Temperature quantity".to_string(),
            ));
        }
        if !self.z_bracket.is_ordered() || self.z_bracket.low <= 0.0 {
            return Err(SweepError::InvalidConfiguration(format!(
                "Z bracket {} must be ordered and strictly positive",
                self.z_bracket
            )));
        }
        match (self.output.sensitivity(), self.derivative_bracket) {
            (Some(_), None) => Err(SweepError::InvalidConfiguration(format!(
                "{} output needs a derivative bracket",
                self.output
            ))),
            (Some(_), Some(b)) if !b.is_ordered() => Err(SweepError::InvalidConfiguration(
                format!("Derivative bracket {b} must be ordered"),
            )),
            _ => Ok(()),
        }
    }
}

/// One solved grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub pressure_atm: f64,
    pub temperature_c: f64,
    pub point: OperatingPoint,
    /// None when the solver rejected the point
    pub value: Option<f64>,
    pub converged: bool,
    pub iterations: usize,
    /// For derivative outputs, the Z stage when it did not converge
    pub status: Option<Termination>,
    pub error: Option<String>,
}

/// Points sharing one value of the fixed variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Fixed pressure (atm) or temperature (°C)
    pub fixed_value: f64,
    pub points: Vec<CurvePoint>,
}

impl Curve {
    /// Independent values of the points that produced a value
    pub fn x_values(&self, vary: VaryAxis) -> Vec<f64> {
        self.points
            .iter()
            .filter(|p| p.value.is_some())
            .map(|p| match vary {
                VaryAxis::Pressure => p.pressure_atm,
                VaryAxis::Temperature => p.temperature_c,
            })
            .collect()
    }

    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().filter_map(|p| p.value).collect()
    }
}

/// Result of a curve-family computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFamily {
    pub specific_gravity: f64,
    pub output: Output,
    pub vary: VaryAxis,
    pub curves: Vec<Curve>,
}

impl CurveFamily {
    pub fn num_points(&self) -> usize {
        self.curves.iter().map(|c| c.points.len()).sum()
    }

    pub fn num_converged(&self) -> usize {
        self.points().filter(|p| p.converged).count()
    }

    /// Points where the solver returned an error
    pub fn num_failed(&self) -> usize {
        self.points().filter(|p| p.value.is_none()).count()
    }

    pub fn points(&self) -> impl Iterator<Item = &CurvePoint> {
        self.curves.iter().flat_map(|c| c.points.iter())
    }
}

/// Compute every curve of `request`, in parallel across curves.
pub fn compute_family(request: &FamilyRequest) -> SweepResult<CurveFamily> {
    request.validate()?;

    let pressures = request.pressures.generate_points();
    let temperatures = request.temperatures.generate_points();
    let (fixed, varying) = match request.vary {
        VaryAxis::Pressure => (&temperatures, &pressures),
        VaryAxis::Temperature => (&pressures, &temperatures),
    };

    tracing::info!(
        output = %request.output,
        curves = fixed.len(),
        points_per_curve = varying.len(),
        sg = request.gas.specific_gravity(),
        "computing curve family"
    );

    let curves: Vec<Curve> = fixed
        .par_iter()
        .map(|&fixed_si| {
            let points = varying
                .iter()
                .map(|&varying_si| {
                    let (p_pa, t_k) = match request.vary {
                        VaryAxis::Pressure => (varying_si, fixed_si),
                        VaryAxis::Temperature => (fixed_si, varying_si),
                    };
                    solve_point(request, p_pa, t_k)
                })
                .collect();
            let fixed_value = match request.vary {
                VaryAxis::Pressure => to_celsius(k(fixed_si)),
                VaryAxis::Temperature => fixed_si / ATM_PA,
            };
            Curve {
                fixed_value,
                points,
            }
        })
        .collect();

    let family = CurveFamily {
        specific_gravity: request.gas.specific_gravity(),
        output: request.output,
        vary: request.vary,
        curves,
    };

    let unconverged = family.num_points() - family.num_converged();
    if unconverged > 0 {
        tracing::warn!(
            unconverged,
            failed = family.num_failed(),
            total = family.num_points(),
            "curve family has unconverged points"
        );
    }

    Ok(family)
}

fn solve_point(request: &FamilyRequest, p_pa: f64, t_k: f64) -> CurvePoint {
    let point = operating_point(pa(p_pa), k(t_k), &request.gas);
    let mut out = CurvePoint {
        pressure_atm: p_pa / ATM_PA,
        temperature_c: to_celsius(k(t_k)),
        point,
        value: None,
        converged: false,
        iterations: 0,
        status: None,
        error: None,
    };

    // Convergence data comes from the first stage that did not converge
    let solved = match (request.output.sensitivity(), request.derivative_bracket) {
        (Some(wrt), Some(bracket)) => {
            solve_derivative(wrt, point, bracket, request.z_bracket, &request.config).map(|sol| {
                let stage = if sol.z.converged { sol.derivative } else { sol.z };
                (sol.value(), stage)
            })
        }
        _ => solve_z(point, request.z_bracket, &request.config).map(|z| (z.value, z)),
    };

    match solved {
        Ok((value, outcome)) => {
            out.value = Some(value);
            out.converged = outcome.converged;
            out.iterations = outcome.iterations;
            out.status = Some(outcome.status);
        }
        Err(e) => {
            tracing::debug!(ppr = point.ppr, tpr = point.tpr, error = %e, "grid point failed");
            out.error = Some(e.to_string());
        }
    }
    out
}

//! Derivatives of Z with respect to the pseudo-reduced coordinates.
//!
//! Both derivatives are solved as a second bisection whose residual is built
//! from Z at the operating point and the reduced-density sensitivity:
//!
//! - `dZ/dTpr`: `g(d) = d + 0.27·Ppr / (Tpr²·z)`
//! - `dZ/dPpr`: `g(d) = d − 0.27 / (Tpr·z)`
//!
//! The `_at_z` functions take Z from the caller; [`solve_dz_dtpr`] and
//! [`solve_dz_dppr`] solve Z first and then chain into them.

use crate::bisection::{BisectionConfig, BisectionOutcome, bisect};
use crate::error::{SolverError, SolverResult};
use crate::z_factor::{check_operating_point, solve_z};
use std::fmt;
use zf_core::{Bracket, OperatingPoint, Real};

/// Independent variable of a derivative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sensitivity {
    /// dZ/dTpr
    Tpr,
    /// dZ/dPpr
    Ppr,
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tpr => write!(f, "dZ/dTpr"),
            Self::Ppr => write!(f, "dZ/dPpr"),
        }
    }
}

/// Z solve and derivative solve of one derivative call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivativeSolution {
    pub z: BisectionOutcome,
    pub derivative: BisectionOutcome,
}

impl DerivativeSolution {
    pub fn value(&self) -> Real {
        self.derivative.value
    }

    /// Both stages converged.
    pub fn converged(&self) -> bool {
        self.z.converged && self.derivative.converged
    }
}

/// `dρr/dTpr` magnitude, `0.27·Ppr / (Tpr²·z)`.
fn reduced_density_slope_tpr(point: OperatingPoint, z: Real) -> SolverResult<Real> {
    check_z(z)?;
    Ok(0.27 * point.ppr / (point.tpr * point.tpr * z))
}

/// `dρr/dPpr` magnitude, `0.27 / (Tpr·z)`.
fn reduced_density_slope_ppr(point: OperatingPoint, z: Real) -> SolverResult<Real> {
    check_z(z)?;
    Ok(0.27 / (point.tpr * z))
}

fn check_z(z: Real) -> SolverResult<()> {
    if z == 0.0 {
        return Err(SolverError::DivisionByZero {
            what: "Z is zero in the reduced-density sensitivity".to_string(),
        });
    }
    if !z.is_finite() {
        return Err(SolverError::Domain {
            what: format!("Z must be finite, got {z}"),
        });
    }
    Ok(())
}

fn check_bracket(bracket: Bracket) -> SolverResult<()> {
    if bracket.is_ordered() {
        Ok(())
    } else {
        Err(SolverError::InvalidBracket {
            low: bracket.low,
            high: bracket.high,
        })
    }
}

/// dZ/dTpr for a known `z`, searched inside `bracket`.
pub fn dz_dtpr_at_z(
    point: OperatingPoint,
    z: Real,
    bracket: Bracket,
    config: &BisectionConfig,
) -> SolverResult<BisectionOutcome> {
    check_operating_point(point)?;
    check_bracket(bracket)?;
    let slope = reduced_density_slope_tpr(point, z)?;
    let residual = move |d: Real| d + slope;
    let outcome = bisect(&residual, bracket, config)?;
    warn_if_unconverged(Sensitivity::Tpr, point, &outcome);
    Ok(outcome)
}

/// dZ/dPpr for a known `z`, searched inside `bracket`.
pub fn dz_dppr_at_z(
    point: OperatingPoint,
    z: Real,
    bracket: Bracket,
    config: &BisectionConfig,
) -> SolverResult<BisectionOutcome> {
    check_operating_point(point)?;
    check_bracket(bracket)?;
    let slope = reduced_density_slope_ppr(point, z)?;
    let residual = move |d: Real| d - slope;
    let outcome = bisect(&residual, bracket, config)?;
    warn_if_unconverged(Sensitivity::Ppr, point, &outcome);
    Ok(outcome)
}

/// Solve Z in `z_bracket`, then dZ/dTpr in `derivative_bracket`.
pub fn solve_dz_dtpr(
    point: OperatingPoint,
    derivative_bracket: Bracket,
    z_bracket: Bracket,
    config: &BisectionConfig,
) -> SolverResult<DerivativeSolution> {
    solve_derivative(Sensitivity::Tpr, point, derivative_bracket, z_bracket, config)
}

/// Solve Z in `z_bracket`, then dZ/dPpr in `derivative_bracket`.
pub fn solve_dz_dppr(
    point: OperatingPoint,
    derivative_bracket: Bracket,
    z_bracket: Bracket,
    config: &BisectionConfig,
) -> SolverResult<DerivativeSolution> {
    solve_derivative(Sensitivity::Ppr, point, derivative_bracket, z_bracket, config)
}

pub fn solve_derivative(
    wrt: Sensitivity,
    point: OperatingPoint,
    derivative_bracket: Bracket,
    z_bracket: Bracket,
    config: &BisectionConfig,
) -> SolverResult<DerivativeSolution> {
    // Both brackets are rejected before any iteration
    check_bracket(derivative_bracket)?;
    let z = solve_z(point, z_bracket, config)?;
    let derivative = match wrt {
        Sensitivity::Tpr => dz_dtpr_at_z(point, z.value, derivative_bracket, config)?,
        Sensitivity::Ppr => dz_dppr_at_z(point, z.value, derivative_bracket, config)?,
    };
    Ok(DerivativeSolution { z, derivative })
}

fn warn_if_unconverged(wrt: Sensitivity, point: OperatingPoint, outcome: &BisectionOutcome) {
    if !outcome.converged {
        tracing::warn!(
            derivative = %wrt,
            ppr = point.ppr,
            tpr = point.tpr,
            iterations = outcome.iterations,
            status = %outcome.status,
            "derivative solve did not converge"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bisection::Termination;

    const POINT: OperatingPoint = OperatingPoint { ppr: 2.0, tpr: 1.5 };

    #[test]
    fn dtpr_at_given_z() {
        let z = 0.8;
        let out = dz_dtpr_at_z(POINT, z, Bracket::new(-5.0, 0.0), &BisectionConfig::default())
            .unwrap();
        let expected = -0.27 * 2.0 / (1.5 * 1.5 * z);
        assert!(out.converged);
        assert!((out.value - expected).abs() < 2e-6);
    }

    #[test]
    fn dppr_at_given_z() {
        let z = 0.8;
        let out = dz_dppr_at_z(POINT, z, Bracket::new(0.0, 5.0), &BisectionConfig::default())
            .unwrap();
        let expected = 0.27 / (1.5 * z);
        assert!(out.converged);
        assert!((out.value - expected).abs() < 2e-6);
    }

    #[test]
    fn zero_z_is_division_by_zero() {
        let config = BisectionConfig::default();
        let err = dz_dtpr_at_z(POINT, 0.0, Bracket::new(-5.0, 0.0), &config).unwrap_err();
        assert!(matches!(err, SolverError::DivisionByZero { .. }));
        let err = dz_dppr_at_z(POINT, 0.0, Bracket::new(0.0, 5.0), &config).unwrap_err();
        assert!(matches!(err, SolverError::DivisionByZero { .. }));
    }

    #[test]
    fn non_finite_z_is_rejected() {
        let err = dz_dppr_at_z(
            POINT,
            f64::NAN,
            Bracket::new(0.0, 5.0),
            &BisectionConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::Domain { .. }));
    }

    #[test]
    fn derivative_bracket_checked_before_z_solve() {
        // Z bracket is also invalid, but the derivative bracket is reported
        let err = solve_dz_dtpr(
            POINT,
            Bracket::new(1.0, -1.0),
            Bracket::new(1.1, 0.7),
            &BisectionConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, SolverError::InvalidBracket { low: 1.0, high: -1.0 });
    }

    #[test]
    fn wrong_sign_bracket_is_not_bracketed() {
        // dZ/dTpr is negative here
        let out = solve_dz_dtpr(
            POINT,
            Bracket::new(0.0, 5.0),
            Bracket::Z_DEFAULT,
            &BisectionConfig::default(),
        )
        .unwrap();
        assert!(out.z.converged);
        assert_eq!(out.derivative.status, Termination::NotBracketed);
        assert!(!out.converged());
    }
}

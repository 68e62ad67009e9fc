//! Compressibility factor at a pseudo-reduced operating point.

use crate::bisection::{BisectionConfig, BisectionOutcome, BisectionStep, bisect_with_observer};
use crate::dak::DakCoefficients;
use crate::error::{SolverError, SolverResult};
use zf_core::{Bracket, OperatingPoint};

/// Solve the DAK equation for Z inside `bracket`.
///
/// The bracket is a caller decision: `[0.7, 1.1]` covers moderate pressures,
/// low reduced temperatures or high pressures need a wider one. A bracket
/// that misses the root comes back with `converged == false`.
pub fn solve_z(
    point: OperatingPoint,
    bracket: Bracket,
    config: &BisectionConfig,
) -> SolverResult<BisectionOutcome> {
    solve_z_with_observer(point, bracket, config, None)
}

/// [`solve_z`] with the default bracket and configuration.
pub fn solve_z_default(point: OperatingPoint) -> SolverResult<BisectionOutcome> {
    solve_z(point, Bracket::Z_DEFAULT, &BisectionConfig::default())
}

pub fn solve_z_with_observer(
    point: OperatingPoint,
    bracket: Bracket,
    config: &BisectionConfig,
    observer: Option<&mut dyn FnMut(&BisectionStep)>,
) -> SolverResult<BisectionOutcome> {
    check_operating_point(point)?;
    if !bracket.is_ordered() {
        return Err(SolverError::InvalidBracket {
            low: bracket.low,
            high: bracket.high,
        });
    }
    if bracket.low <= 0.0 {
        return Err(SolverError::Domain {
            what: format!("Z bracket {bracket} must be strictly positive"),
        });
    }

    let coefficients = DakCoefficients::new(point);
    let outcome = bisect_with_observer(&coefficients, bracket, config, observer)?;

    if !outcome.converged {
        tracing::warn!(
            ppr = point.ppr,
            tpr = point.tpr,
            low = bracket.low,
            high = bracket.high,
            iterations = outcome.iterations,
            status = %outcome.status,
            "Z-factor solve did not converge"
        );
    }

    Ok(outcome)
}

pub(crate) fn check_operating_point(point: OperatingPoint) -> SolverResult<()> {
    if !point.tpr.is_finite() || point.tpr <= 0.0 {
        return Err(SolverError::Domain {
            what: format!("Tpr must be positive and finite, got {}", point.tpr),
        });
    }
    if !point.ppr.is_finite() || point.ppr < 0.0 {
        return Err(SolverError::Domain {
            what: format!("Ppr must be non-negative and finite, got {}", point.ppr),
        });
    }
    Ok(())
}

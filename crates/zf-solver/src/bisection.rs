//! Bracket bisection with a fixed absolute tolerance and iteration cap.
//!
//! Each iteration takes the midpoint `m` of `[a, b]`, stops if `|b - a|` is
//! already within tolerance, otherwise evaluates the residual at `m` and keeps
//! the half that still contains the sign change: `f(m) > 0` keeps `[a, m]`,
//! `f(m) < 0` keeps `[m, b]`, `f(m) == 0` stops on the spot. The residual is
//! therefore expected to increase through the root.
//!
//! Running out of iterations is not an error. The last midpoint is returned
//! with `converged == false` and [`Termination::MaxIterations`].

use crate::error::{SolverError, SolverResult};
use std::fmt;
use zf_core::{Bracket, Real};

/// Scalar residual whose root is sought.
pub trait Residual {
    fn evaluate(&self, x: Real) -> Real;
}

impl<F> Residual for F
where
    F: Fn(Real) -> Real,
{
    fn evaluate(&self, x: Real) -> Real {
        self(x)
    }
}

/// Bisection configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BisectionConfig {
    /// Absolute bracket width at which the search stops
    pub tolerance: Real,
    /// Maximum number of midpoint evaluations
    pub max_iterations: usize,
}

impl BisectionConfig {
    pub const DEFAULT_TOLERANCE: Real = 2.0e-6;
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;

    fn validate(&self) -> SolverResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(SolverError::InvalidConfig {
                what: format!("tolerance must be finite and >= 0, got {}", self.tolerance),
            });
        }
        Ok(())
    }
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Why a bisection run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Bracket width reached the tolerance
    WidthTolerance,
    /// Residual evaluated to exactly zero at a midpoint
    ExactRoot,
    /// Iteration cap reached before the tolerance
    MaxIterations,
    /// Residual has the same sign at both ends of the initial bracket
    NotBracketed,
}

impl Termination {
    pub fn is_converged(self) -> bool {
        matches!(self, Self::WidthTolerance | Self::ExactRoot)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthTolerance => write!(f, "width tolerance reached"),
            Self::ExactRoot => write!(f, "exact root"),
            Self::MaxIterations => write!(f, "iteration cap reached"),
            Self::NotBracketed => write!(f, "root not bracketed"),
        }
    }
}

/// Result of a bisection run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BisectionOutcome {
    /// Last computed midpoint
    pub value: Real,
    /// Converged flag
    pub converged: bool,
    /// Number of residual evaluations at midpoints
    pub iterations: usize,
    /// Width of the bracket when the run stopped
    pub bracket_width: Real,
    pub status: Termination,
}

impl BisectionOutcome {
    /// Value of a converged run, or [`SolverError::NotConverged`].
    pub fn into_converged(self, what: &str) -> SolverResult<Real> {
        if self.converged {
            Ok(self.value)
        } else {
            Err(SolverError::NotConverged {
                what: format!("{what} ({})", self.status),
                iterations: self.iterations,
            })
        }
    }
}

/// One evaluated midpoint, as seen by an observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BisectionStep {
    pub iteration: usize,
    /// Bracket before the update
    pub lower: Real,
    pub upper: Real,
    pub midpoint: Real,
    pub residual: Real,
}

/// Find a root of `residual` inside `bracket`.
pub fn bisect<R>(
    residual: &R,
    bracket: Bracket,
    config: &BisectionConfig,
) -> SolverResult<BisectionOutcome>
where
    R: Residual + ?Sized,
{
    bisect_with_observer(residual, bracket, config, None)
}

/// [`bisect`], reporting every evaluated midpoint to `observer`.
pub fn bisect_with_observer<R>(
    residual: &R,
    bracket: Bracket,
    config: &BisectionConfig,
    mut observer: Option<&mut dyn FnMut(&BisectionStep)>,
) -> SolverResult<BisectionOutcome>
where
    R: Residual + ?Sized,
{
    config.validate()?;
    if !bracket.is_ordered() {
        return Err(SolverError::InvalidBracket {
            low: bracket.low,
            high: bracket.high,
        });
    }

    let mut a = bracket.low;
    let mut b = bracket.high;
    let mut zn = bracket.midpoint();

    // Ends are checked even when the bracket is already narrow enough
    let f_low = evaluate_finite(residual, a)?;
    let f_high = evaluate_finite(residual, b)?;
    let bracketed = !((f_low > 0.0 && f_high > 0.0) || (f_low < 0.0 && f_high < 0.0));

    if (b - a).abs() <= config.tolerance {
        let status = if bracketed {
            Termination::WidthTolerance
        } else {
            Termination::NotBracketed
        };
        return Ok(BisectionOutcome {
            value: zn,
            converged: status.is_converged(),
            iterations: 0,
            bracket_width: (b - a).abs(),
            status,
        });
    }

    let mut status = Termination::MaxIterations;
    let mut iterations = config.max_iterations;
    let mut width = (b - a).abs();

    for i in 0..config.max_iterations {
        zn = (a + b) * 0.5;
        width = (b - a).abs();
        if width <= config.tolerance {
            status = Termination::WidthTolerance;
            iterations = i;
            break;
        }

        let fz = evaluate_finite(residual, zn)?;
        if let Some(obs) = observer.as_mut() {
            obs(&BisectionStep {
                iteration: i,
                lower: a,
                upper: b,
                midpoint: zn,
                residual: fz,
            });
        }

        if fz > 0.0 {
            b = zn;
        } else if fz < 0.0 {
            a = zn;
        } else {
            status = Termination::ExactRoot;
            iterations = i + 1;
            break;
        }
    }

    if status == Termination::MaxIterations {
        width = (b - a).abs();
    }
    if !bracketed && status != Termination::ExactRoot {
        status = Termination::NotBracketed;
    }

    tracing::debug!(
        value = zn,
        iterations,
        width,
        status = %status,
        "bisection finished"
    );

    Ok(BisectionOutcome {
        value: zn,
        converged: status.is_converged(),
        iterations,
        bracket_width: width,
        status,
    })
}

fn evaluate_finite<R>(residual: &R, x: Real) -> SolverResult<Real>
where
    R: Residual + ?Sized,
{
    let value = residual.evaluate(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::NonFiniteResidual { at: x, value })
    }
}

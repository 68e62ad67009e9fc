//! zf-sweeps: curve families of Z and its derivatives.
//!
//! A family is a set of curves over a pressure/temperature grid: one curve
//! per value of the fixed variable, each curve sweeping the other one. Every
//! grid point is an independent solver call, so curves are computed in
//! parallel with rayon and collected in order.

pub mod error;
pub mod export;
pub mod family;
pub mod sweeps;

pub use error::{SweepError, SweepResult};
pub use family::{Curve, CurveFamily, CurvePoint, FamilyRequest, Output, VaryAxis, compute_family};
pub use sweeps::{SweepDefinition, SweepType};

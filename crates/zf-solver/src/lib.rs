//! Z-factor solver for natural gas using the Dranchuk–Abbou-Kassem equation.
//!
//! Every solve in this crate is a bisection on a one-dimensional bracket:
//! the compressibility factor itself, and the two derivatives dZ/dTpr and
//! dZ/dPpr which are defined implicitly through Z. The iteration and
//! convergence rules live in [`bisection`]; the other modules only build
//! residuals.

pub mod bisection;
pub mod dak;
pub mod derivatives;
pub mod error;
pub mod z_factor;

pub use bisection::{
    BisectionConfig, BisectionOutcome, BisectionStep, Residual, Termination, bisect,
    bisect_with_observer,
};
pub use dak::{DakCoefficients, dak_residual};
pub use derivatives::{
    DerivativeSolution, Sensitivity, dz_dppr_at_z, dz_dtpr_at_z, solve_derivative,
    solve_dz_dppr, solve_dz_dtpr,
};
pub use error::{SolverError, SolverResult};
pub use z_factor::{solve_z, solve_z_default, solve_z_with_observer};

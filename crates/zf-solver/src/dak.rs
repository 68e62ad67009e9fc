//! Dranchuk–Abbou-Kassem residual.
//!
//! With reduced density `ρr = 0.27·Ppr / (z·Tpr)` the DAK equation is written
//! as `f(z) = 0` with
//!
//! ```text
//! f(z) = z − 1 − C1/z − C2/z² + C3/z⁵ − C4/z²·(1 + C5/z²)·exp(−C5/z²)
//! ```
//!
//! where `C1..C5` only depend on `(Ppr, Tpr)`.

use crate::bisection::Residual;
use zf_core::{OperatingPoint, Real};

/// Coefficients of the DAK residual at one operating point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DakCoefficients {
    pub c1: Real,
    pub c2: Real,
    pub c3: Real,
    pub c4: Real,
    pub c5: Real,
}

impl DakCoefficients {
    pub fn new(point: OperatingPoint) -> Self {
        let inv_tpr = 1.0 / point.tpr;
        let inv_tpr2 = inv_tpr * inv_tpr;
        let inv_tpr3 = inv_tpr2 * inv_tpr;

        // ρr·z
        let rr_z = 0.27 * point.ppr * inv_tpr;
        let rr_z2 = rr_z * rr_z;

        let c1 = (0.3265 - 1.07 * inv_tpr - 0.5339 * inv_tpr3 + 0.01569 * inv_tpr2 * inv_tpr2
            - 0.05165 * inv_tpr2 * inv_tpr3)
            * rr_z;
        let tmp = -0.7361 * inv_tpr + 0.1844 * inv_tpr2;
        let c2 = (0.5475 + tmp) * rr_z2;
        let c3 = 0.1056 * tmp * rr_z2 * rr_z2 * rr_z;
        let c4 = 0.6134 * rr_z2 * inv_tpr3;
        let c5 = 0.7210 * rr_z2;

        Self { c1, c2, c3, c4, c5 }
    }

    /// `f(z)`; undefined at `z == 0`.
    pub fn residual(&self, z: Real) -> Real {
        let z2 = z * z;
        let e = self.c5 / z2;
        z - 1.0 - self.c1 / z - self.c2 / z2 + self.c3 / (z2 * z2 * z)
            - self.c4 / z2 * (1.0 + e) * (-e).exp()
    }
}

impl Residual for DakCoefficients {
    fn evaluate(&self, x: Real) -> Real {
        self.residual(x)
    }
}

/// DAK residual at `z` for a single evaluation.
pub fn dak_residual(point: OperatingPoint, z: Real) -> Real {
    DakCoefficients::new(point).residual(z)
}

//! Gas sample definition.

use crate::error::{GasError, GasResult};
use std::fmt;
use zf_core::Real;

/// A natural gas characterised by its specific gravity (air = 1).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasSample {
    specific_gravity: Real,
}

impl GasSample {
    /// Range of specific gravity covered by Sutton's correlations.
    pub const SG_RANGE: (Real, Real) = (0.57, 1.68);

    /// Create a sample, rejecting gravities outside [`Self::SG_RANGE`].
    pub fn new(specific_gravity: Real) -> GasResult<Self> {
        if !specific_gravity.is_finite() {
            return Err(GasError::InvalidArg {
                what: "specific gravity must be finite",
            });
        }
        let (lo, hi) = Self::SG_RANGE;
        if !(lo..=hi).contains(&specific_gravity) {
            return Err(GasError::OutOfRange {
                what: "specific gravity",
                value: specific_gravity,
            });
        }
        Ok(Self { specific_gravity })
    }

    /// Create a sample without range validation.
    pub fn unchecked(specific_gravity: Real) -> Self {
        Self { specific_gravity }
    }

    pub fn specific_gravity(&self) -> Real {
        self.specific_gravity
    }

    /// Pseudo-critical pressure, psia.
    pub fn ppc(&self) -> Real {
        crate::pseudo_critical_pressure(self.specific_gravity)
    }

    /// Pseudo-critical temperature, K.
    pub fn tpc(&self) -> Real {
        crate::pseudo_critical_temperature(self.specific_gravity)
    }
}

impl fmt::Display for GasSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gas sg = {}", self.specific_gravity)
    }
}

//! Value types shared by the correlation layer and the solvers.

use crate::Real;
use std::fmt;

/// Pseudo-reduced operating point of a gas.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatingPoint {
    /// Pseudo-reduced pressure
    pub ppr: Real,
    /// Pseudo-reduced temperature
    pub tpr: Real,
}

impl OperatingPoint {
    pub const DAK_PPR_RANGE: (Real, Real) = (0.2, 30.0);
    pub const DAK_TPR_RANGE: (Real, Real) = (1.0, 3.0);

    pub fn new(ppr: Real, tpr: Real) -> Self {
        Self { ppr, tpr }
    }

    /// Whether the point lies inside the range the DAK correlation was fitted on.
    ///
    /// The solvers do not call this; it is for callers that want to warn.
    pub fn within_dak_range(&self) -> bool {
        let (p_lo, p_hi) = Self::DAK_PPR_RANGE;
        let (t_lo, t_hi) = Self::DAK_TPR_RANGE;
        (p_lo..=p_hi).contains(&self.ppr) && (t_lo..=t_hi).contains(&self.tpr)
    }
}

impl fmt::Display for OperatingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ppr = {:.6}, Tpr = {:.6}", self.ppr, self.tpr)
    }
}

/// Ordered search interval `[low, high]` for a bisection solve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bracket {
    pub low: Real,
    pub high: Real,
}

impl Bracket {
    /// Default Z-factor bracket.
    pub const Z_DEFAULT: Bracket = Bracket {
        low: 0.7,
        high: 1.1,
    };

    pub fn new(low: Real, high: Real) -> Self {
        Self { low, high }
    }

    pub fn width(&self) -> Real {
        (self.high - self.low).abs()
    }

    pub fn midpoint(&self) -> Real {
        (self.low + self.high) * 0.5
    }

    pub fn contains(&self, x: Real) -> bool {
        self.low <= x && x <= self.high
    }

    /// `low < high` with both ends finite.
    pub fn is_ordered(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low < self.high
    }
}

impl Default for Bracket {
    fn default() -> Self {
        Self::Z_DEFAULT
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bracket_is_dak_default() {
        let b = Bracket::default();
        assert_eq!(b.low, 0.7);
        assert_eq!(b.high, 1.1);
        assert!(b.is_ordered());
        assert!(b.contains(0.9));
        assert!(!b.contains(1.2));
    }

    #[test]
    fn degenerate_brackets_are_not_ordered() {
        assert!(!Bracket::new(1.0, 1.0).is_ordered());
        assert!(!Bracket::new(2.0, 1.0).is_ordered());
        assert!(!Bracket::new(Real::NAN, 1.0).is_ordered());
    }

    #[test]
    fn dak_range_check() {
        assert!(OperatingPoint::new(4.87, 1.82).within_dak_range());
        assert!(!OperatingPoint::new(4.87, 0.9).within_dak_range());
        assert!(!OperatingPoint::new(31.0, 1.5).within_dak_range());
    }
}

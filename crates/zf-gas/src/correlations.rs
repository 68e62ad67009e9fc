//! Sutton's pseudo-critical correlations (B.C. Craft and M.F. Hawkins).
//!
//! Pressures enter in atm and leave the pseudo-critical pressure in psia;
//! temperatures enter in °C and the pseudo-critical temperature is in K.
//! The arithmetic order below is fixed: solver brackets are tuned against
//! these exact values.

use crate::sample::GasSample;
use zf_core::units::{Pressure, Temperature, to_atm, to_celsius};
use zf_core::{OperatingPoint, Real};

/// atm -> psia
const ATM_TO_PSIA_NUM: Real = 101_325.0;
const ATM_TO_PSIA_DEN: Real = 6_894.757_293_168;
/// °C -> K
const CELSIUS_TO_KELVIN: Real = 273.15;

/// Pseudo-critical pressure, psia.
pub fn pseudo_critical_pressure(sg: Real) -> Real {
    756.8 - 131.0 * sg - 3.60 * sg * sg
}

/// Pseudo-critical temperature, K (°R · 5/9).
pub fn pseudo_critical_temperature(sg: Real) -> Real {
    (169.2 + 349.5 * sg - 74.0 * sg * sg) * 5.0 / 9.0
}

/// Pseudo-reduced pressure from an absolute pressure in atm.
pub fn pseudo_reduced_pressure(p_atm: Real, sg: Real) -> Real {
    p_atm * ATM_TO_PSIA_NUM / ATM_TO_PSIA_DEN / pseudo_critical_pressure(sg)
}

/// Pseudo-reduced temperature from a temperature in °C.
pub fn pseudo_reduced_temperature(t_celsius: Real, sg: Real) -> Real {
    (t_celsius + CELSIUS_TO_KELVIN) / pseudo_critical_temperature(sg)
}

pub fn reduced_pressure_of(p: Pressure, gas: &GasSample) -> Real {
    pseudo_reduced_pressure(to_atm(p), gas.specific_gravity())
}

pub fn reduced_temperature_of(t: Temperature, gas: &GasSample) -> Real {
    pseudo_reduced_temperature(to_celsius(t), gas.specific_gravity())
}

/// Pseudo-reduced operating point of `gas` at absolute pressure `p` and temperature `t`.
pub fn operating_point(p: Pressure, t: Temperature, gas: &GasSample) -> OperatingPoint {
    OperatingPoint::new(reduced_pressure_of(p, gas), reduced_temperature_of(t, gas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zf_core::units::{atm, degc};

    #[test]
    fn pseudo_critical_values() {
        let sg = 0.666;
        assert!((pseudo_critical_pressure(sg) - 667.957_198_4).abs() < 1e-6);
        assert!((pseudo_critical_temperature(sg) - 205.079_92).abs() < 1e-6);
    }

    #[test]
    fn raw_arithmetic_order_is_preserved() {
        let (p, t, sg) = (221.15, 100.5, 0.9);
        let ppc = 756.8 - 131.0 * sg - 3.60 * sg * sg;
        let tpc = (169.2 + 349.5 * sg - 74.0 * sg * sg) * 5.0 / 9.0;
        assert_eq!(
            pseudo_reduced_pressure(p, sg),
            p * 101325.0 / 6894.757293168 / ppc
        );
        assert_eq!(pseudo_reduced_temperature(t, sg), (t + 273.15) / tpc);
    }

    #[test]
    fn zero_pressure_gives_zero_ppr() {
        assert_eq!(pseudo_reduced_pressure(0.0, 0.9), 0.0);
    }

    #[test]
    fn typed_wrappers_match_raw() {
        let gas = GasSample::new(0.9).unwrap();
        let point = operating_point(atm(250.0), degc(0.0), &gas);
        assert!((point.ppr - pseudo_reduced_pressure(250.0, 0.9)).abs() < 1e-12);
        assert!((point.tpr - pseudo_reduced_temperature(0.0, 0.9)).abs() < 1e-12);
    }
}

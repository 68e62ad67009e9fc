//! zf-gas: natural gas pseudo-critical correlations for zfactor.
//!
//! Provides:
//! - Sutton's pseudo-critical pressure/temperature correlations (Craft & Hawkins)
//! - Conversion of field pressure/temperature to a pseudo-reduced operating point
//! - Gas sample definition (specific gravity)
//! - Unit-tagged text input parsing for pressures and temperatures
//!
//! # Example
//!
//! ```
//! use zf_gas::{GasSample, operating_point};
//! use zf_core::units::{degf, psia};
//!
//! let gas = GasSample::new(0.666).unwrap();
//! let point = operating_point(psia(3250.0), degf(213.0), &gas);
//! assert!((point.ppr - 4.866).abs() < 1e-3);
//! ```

pub mod correlations;
pub mod error;
pub mod sample;
pub mod units;

// Re-exports for ergonomics
pub use correlations::{
    operating_point, pseudo_critical_pressure, pseudo_critical_temperature,
    pseudo_reduced_pressure, pseudo_reduced_temperature, reduced_pressure_of,
    reduced_temperature_of,
};
pub use error::{GasError, GasResult};
pub use sample::GasSample;
pub use units::{Quantity, UnitError, parse_pressure, parse_quantity, parse_temperature};

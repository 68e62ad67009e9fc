//! zf-core: shared foundation for zfactor.
//!
//! Contains:
//! - units (uom SI types + field-unit constructors)
//! - numeric (Real + grid helpers)
//! - point (operating point and bracket value types)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod point;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ZfError, ZfResult};
pub use numeric::*;
pub use point::{Bracket, OperatingPoint};
pub use units::*;

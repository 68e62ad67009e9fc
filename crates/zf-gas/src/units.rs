//! Unit-tagged numeric input.
//!
//! Parses user text such as `"3250 psia"`, `"213 F"` or `"15 atm"` into
//! canonical SI values. Plain numbers default to the field units of the
//! correlation layer: atm for pressure and °C for temperature.

use std::fmt;
use thiserror::Error;
use zf_core::units::constants::{ATM_PA, CELSIUS_OFFSET_K, PSI_PA};
use zf_core::units::{Pressure, Temperature, k, pa};

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: Kelvin)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: String },
    /// Unit not allowed for this quantity (e.g., plain "psi" requires "psia" or "psig")
    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: String },
    /// Value out of physical range (e.g., negative absolute temperature)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: String },
}

/// Parse a quantity value from user input text, returning canonical SI.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_kelvin(trimmed),
        Quantity::Pressure => parse_pascal(trimmed),
    }
}

/// Parse an absolute pressure (`"3250 psia"`, `"15 atm"`, `"2 MPa"`).
pub fn parse_pressure(raw_text: &str) -> Result<Pressure, UnitError> {
    parse_pascal(raw_text.trim()).map(pa)
}

/// Parse a temperature (`"213 F"`, `"100 C"`, `"373.15 K"`).
pub fn parse_temperature(raw_text: &str) -> Result<Temperature, UnitError> {
    parse_kelvin(raw_text.trim()).map(k)
}

fn parse_kelvin(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "k" | "kelvin" => value,
        // Default to Celsius if no unit specified
        "" | "c" | "°c" | "degc" | "celsius" => value + CELSIUS_OFFSET_K,
        "f" | "°f" | "degf" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "degr" | "rankine" => value * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: Quantity::Temperature.to_string(),
            });
        }
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(kelvin)
}

fn parse_pascal(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pascal = match unit.to_lowercase().as_str() {
        "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" => value * 1e5,
        // Default to atm if no unit specified
        "" | "atm" => value * ATM_PA,
        "psia" => value * PSI_PA,
        "psig" => (value + ATM_PA / PSI_PA) * PSI_PA,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia' (absolute) or 'psig' (gauge)".to_string(),
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: Quantity::Pressure.to_string(),
            });
        }
    };

    if pascal < 0.0 {
        return Err(UnitError::OutOfRange {
            value: pascal,
            reason: "Absolute pressure cannot be negative".to_string(),
        });
    }

    Ok(pascal)
}

fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let num_part = num_part.trim();
    let unit_part = unit_part.trim();

    let value: f64 = num_part.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.to_string()))
}

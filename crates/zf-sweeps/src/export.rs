//! Tabular and JSON export of curve families.

use crate::error::SweepResult;
use crate::family::CurveFamily;
use std::fmt::Write as _;

const CSV_HEADER: &str =
    "curve,fixed_value,pressure_atm,temperature_c,ppr,tpr,value,converged,iterations,status";

impl CurveFamily {
    /// One row per grid point; failed points leave `value` empty.
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(64 * (self.num_points() + 1));
        out.push_str(CSV_HEADER);
        out.push('\n');

        for (idx, curve) in self.curves.iter().enumerate() {
            for p in &curve.points {
                let value = p.value.map(|v| v.to_string()).unwrap_or_default();
                let status = match (&p.status, &p.error) {
                    (Some(s), _) => format!("{s:?}"),
                    (None, Some(_)) => "Error".to_string(),
                    (None, None) => String::new(),
                };
                // Writing into a String cannot fail
                let _ = writeln!(
                    out,
                    "{},{},{},{},{},{},{},{},{},{}",
                    idx,
                    curve.fixed_value,
                    p.pressure_atm,
                    p.temperature_c,
                    p.point.ppr,
                    p.point.tpr,
                    value,
                    p.converged,
                    p.iterations,
                    status
                );
            }
        }
        out
    }

    pub fn to_json(&self) -> SweepResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> SweepResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

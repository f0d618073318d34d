//! User-supplied simulation parameters.

use serde::{Deserialize, Deserializer, Serialize};

/// Mass and drop height for one simulation run.
///
/// Immutable once accepted by the validator. A field missing from the
/// wire (or sent as `null`) decodes as NaN so that the validator, not the
/// decoder, reports it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Body mass (kg).
    #[serde(default = "missing", deserialize_with = "nan_if_null")]
    pub mass: f64,
    /// Initial height above ground (m).
    #[serde(default = "missing", deserialize_with = "nan_if_null")]
    pub height: f64,
}

impl SimulationParameters {
    /// Create parameters from mass (kg) and height (m).
    pub const fn new(mass: f64, height: f64) -> Self {
        Self { mass, height }
    }
}

fn missing() -> f64 {
    f64::NAN
}

fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_numbers() {
        let p: SimulationParameters =
            serde_json::from_str(r#"{"mass": 70, "height": 10.5}"#).unwrap();
        assert_eq!(p, SimulationParameters::new(70.0, 10.5));
    }

    #[test]
    fn missing_and_null_fields_become_nan() {
        let p: SimulationParameters = serde_json::from_str(r#"{"height": null}"#).unwrap();
        assert!(p.mass.is_nan());
        assert!(p.height.is_nan());
    }
}

//! Error types shared across the Plummet workspace.
//!
//! Organized by the stage that raises them: parameter validation,
//! constant validation, trajectory decoding and numerical stepping.
//! Engine-level errors that wrap these live in `plummet-engine`.

use thiserror::Error;

use crate::state::ModelVariant;

/// A single violated rule on [`SimulationParameters`](crate::SimulationParameters).
///
/// The `Display` text is the human-readable message delivered to the
/// presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Mass is missing, NaN, zero, or negative.
    #[error("mass must be greater than 0")]
    MassNotPositive,
    /// Mass exceeds 1000 kg.
    #[error("mass must be ≤ 1000 kg")]
    MassTooLarge,
    /// Height is missing, NaN, or negative.
    #[error("height must be ≥ 0")]
    HeightNegative,
    /// Height exceeds 1000 m.
    #[error("height must be ≤ 1000 m")]
    HeightTooLarge,
}

/// A decoded [`Trajectory`](crate::Trajectory) that breaks its shape rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    /// The three columns do not have the same length.
    #[error("column lengths differ: time {time}, height {height}, velocity {velocity}")]
    ColumnLengthMismatch {
        /// Length of the time column.
        time: usize,
        /// Length of the height column.
        height: usize,
        /// Length of the velocity column.
        velocity: usize,
    },
}

/// A physical constant outside its domain.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConstantsError {
    /// The constant is NaN or infinite.
    #[error("constant `{name}` must be finite, got {value}")]
    NotFinite {
        /// Constant name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The constant is finite but physically meaningless.
    #[error("constant `{name}` {reason}, got {value}")]
    OutOfDomain {
        /// Constant name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Description of the domain.
        reason: &'static str,
    },
}

/// An arithmetic anomaly detected while stepping a model.
///
/// Raised by the simulation driver; the run is abandoned and no partial
/// result is produced.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ComputationFault {
    /// Stepping produced a NaN or infinite height or velocity.
    #[error("{variant} model produced non-finite {quantity} ({value}) at tick {tick}")]
    NonFinite {
        /// Model that faulted.
        variant: ModelVariant,
        /// Tick whose update produced the value.
        tick: u64,
        /// `"height"` or `"velocity"`.
        quantity: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A panic inside the run was contained at the engine boundary.
    #[error("run aborted: {reason}")]
    Aborted {
        /// Panic payload, if it was a string.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_exact() {
        assert_eq!(
            ValidationIssue::MassNotPositive.to_string(),
            "mass must be greater than 0"
        );
        assert_eq!(ValidationIssue::MassTooLarge.to_string(), "mass must be ≤ 1000 kg");
        assert_eq!(ValidationIssue::HeightNegative.to_string(), "height must be ≥ 0");
        assert_eq!(
            ValidationIssue::HeightTooLarge.to_string(),
            "height must be ≤ 1000 m"
        );
    }

    #[test]
    fn computation_fault_names_model_and_tick() {
        let e = ComputationFault::NonFinite {
            variant: ModelVariant::Drag,
            tick: 17,
            quantity: "velocity",
            value: f64::NAN,
        };
        let msg = e.to_string();
        assert!(msg.contains("drag"));
        assert!(msg.contains("velocity"));
        assert!(msg.contains("17"));
    }
}

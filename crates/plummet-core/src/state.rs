//! Per-model kinematic state and the model selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Height and signed velocity of a body.
///
/// `y` is measured from the ground (m); `v` is positive upward (m/s).
/// Downward motion therefore has negative `v` and decreasing `y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Height above ground (m). Not clamped: an integrator sample may dip
    /// below zero before the collision resolver corrects it.
    pub y: f64,
    /// Signed velocity (m/s), positive up.
    pub v: f64,
}

impl BodyState {
    /// Create a state from height and velocity.
    pub const fn new(y: f64, v: f64) -> Self {
        Self { y, v }
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.y.is_finite() && self.v.is_finite()
    }
}

/// Which physical model a state machine follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelVariant {
    /// Gravity only.
    FreeFall,
    /// Gravity plus linear drag `-k v / m`.
    Drag,
}

impl ModelVariant {
    /// Every variant, in the order the driver advances them.
    pub const ALL: [ModelVariant; 2] = [ModelVariant::FreeFall, ModelVariant::Drag];

    /// Whether the drag term applies.
    #[inline]
    pub fn has_drag(self) -> bool {
        matches!(self, ModelVariant::Drag)
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::FreeFall => "free-fall",
            Self::Drag => "drag",
        })
    }
}

/// Lifecycle of one model inside a run.
///
/// `Running → AtRest` is the only transition. An `AtRest` model is no
/// longer advanced, but its frozen state keeps being recorded so both
/// trajectories stay the same length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelPhase {
    /// Advanced every tick.
    #[default]
    Running,
    /// Frozen after the rest detector fired.
    AtRest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_order_is_free_fall_then_drag() {
        assert_eq!(ModelVariant::ALL, [ModelVariant::FreeFall, ModelVariant::Drag]);
        assert!(!ModelVariant::FreeFall.has_drag());
        assert!(ModelVariant::Drag.has_drag());
    }

    #[test]
    fn non_finite_state_detected() {
        assert!(BodyState::new(1.0, -2.0).is_finite());
        assert!(!BodyState::new(f64::NAN, 0.0).is_finite());
        assert!(!BodyState::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn phase_defaults_to_running() {
        assert_eq!(ModelPhase::default(), ModelPhase::Running);
    }
}

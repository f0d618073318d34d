//! Acceleration laws for the two physical models.

use plummet_core::{ModelVariant, PhysicalConstants};

/// Acceleration as a function of velocity, mass and model.
///
/// Holds only `g` and `k`; everything else about a run lives elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicsModel {
    /// Gravitational acceleration (m/s²).
    pub g: f64,
    /// Linear drag coefficient (kg/s).
    pub k: f64,
}

impl DynamicsModel {
    /// Model with explicit gravity and drag coefficient.
    pub const fn new(g: f64, k: f64) -> Self {
        Self { g, k }
    }

    /// Model using the `g` and `k` of a constant set.
    pub fn from_constants(constants: &PhysicalConstants) -> Self {
        Self::new(constants.g, constants.k)
    }

    /// Acceleration (m/s², positive up) for a body moving at `v`.
    ///
    /// Free fall ignores both `v` and `mass`. Drag opposes motion with
    /// force `k·v`, so the term vanishes at rest and flips sign with `v`.
    ///
    /// ```
    /// use plummet_core::ModelVariant;
    /// use plummet_dynamics::DynamicsModel;
    ///
    /// let m = DynamicsModel::new(9.8, 1.2);
    /// assert_eq!(m.acceleration(-5.0, 70.0, ModelVariant::FreeFall), -9.8);
    /// let a = m.acceleration(-5.0, 70.0, ModelVariant::Drag);
    /// assert!((a - (-9.8 + 6.0 / 70.0)).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn acceleration(&self, v: f64, mass: f64, variant: ModelVariant) -> f64 {
        if variant.has_drag() {
            -self.g - (self.k * v) / mass
        } else {
            -self.g
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_fall_is_constant() {
        let m = DynamicsModel::from_constants(&PhysicalConstants::default());
        for v in [-20.0, 0.0, 15.0] {
            assert_eq!(m.acceleration(v, 70.0, ModelVariant::FreeFall), -9.8);
        }
    }

    #[test]
    fn drag_opposes_motion() {
        let m = DynamicsModel::new(9.8, 1.2);
        assert_eq!(m.acceleration(0.0, 70.0, ModelVariant::Drag), -9.8);
        // Falling: drag pushes up, magnitude below g.
        assert!(m.acceleration(-10.0, 70.0, ModelVariant::Drag) > -9.8);
        // Rising: drag pushes down, magnitude above g.
        assert!(m.acceleration(10.0, 70.0, ModelVariant::Drag) < -9.8);
    }

    #[test]
    fn drag_balances_gravity_at_terminal_speed() {
        let m = DynamicsModel::new(9.8, 1.2);
        let vt = -70.0 * 9.8 / 1.2;
        assert!(m.acceleration(vt, 70.0, ModelVariant::Drag).abs() < 1e-12);
    }

    #[test]
    fn zero_drag_matches_free_fall() {
        let m = DynamicsModel::new(9.8, 0.0);
        assert_eq!(m.acceleration(-30.0, 1.0, ModelVariant::Drag), -9.8);
    }
}

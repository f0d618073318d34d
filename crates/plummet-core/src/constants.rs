//! Fixed physical constants and the time grid they define.
//!
//! [`PhysicalConstants`] is an explicit, immutable configuration value. The
//! engine receives one at construction and never mutates it, so alternate
//! constant sets can be exercised in tests without touching global state.

use serde::{Deserialize, Serialize};

use crate::error::ConstantsError;

/// Height below which a body counts as resting on the ground (m).
pub const REST_HEIGHT_EPSILON: f64 = 1e-6;

/// Process-wide physical configuration for a simulation run.
///
/// Serialized with camelCase keys (`tMax`, `vStop`) to match the wire
/// protocol consumed by presentation collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalConstants {
    /// Gravitational acceleration (m/s²). Default: 9.8.
    pub g: f64,
    /// Restitution coefficient applied at each ground impact. Default: 0.7.
    pub e: f64,
    /// Linear drag coefficient (kg/s). Default: 1.2.
    pub k: f64,
    /// Initial velocity (m/s, positive up). Default: 0.
    pub v0: f64,
    /// Fixed integration step (s). Default: 0.01.
    pub dt: f64,
    /// Maximum simulated time (s). Default: 60.
    pub t_max: f64,
    /// Speed below which a grounded body is considered stopped (m/s). Default: 0.05.
    pub v_stop: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            g: 9.8,
            e: 0.7,
            k: 1.2,
            v0: 0.0,
            dt: 0.01,
            t_max: 60.0,
            v_stop: 0.05,
        }
    }
}

impl PhysicalConstants {
    /// Number of integration steps needed to cover `t_max`: `ceil(t_max / dt)`.
    ///
    /// ```
    /// use plummet_core::PhysicalConstants;
    ///
    /// let c = PhysicalConstants::default();
    /// assert_eq!(c.steps(), 6000);
    /// assert_eq!(c.tick_budget(), 6001);
    /// ```
    pub fn steps(&self) -> u64 {
        (self.t_max / self.dt).ceil() as u64
    }

    /// Total number of recorded ticks, including tick 0: `steps() + 1`.
    pub fn tick_budget(&self) -> u64 {
        self.steps() + 1
    }

    /// Simulated time at tick `i`.
    #[inline]
    pub fn time_at(&self, tick: u64) -> f64 {
        tick as f64 * self.dt
    }

    /// Check every constant against its physical domain.
    ///
    /// Returns the first violation found, in declaration order.
    pub fn validate(&self) -> Result<(), ConstantsError> {
        let checks: [(&'static str, f64, bool, &'static str); 7] = [
            ("g", self.g, self.g > 0.0, "must be positive"),
            ("e", self.e, (0.0..=1.0).contains(&self.e), "must lie in [0, 1]"),
            ("k", self.k, self.k >= 0.0, "must be non-negative"),
            ("v0", self.v0, true, "must be finite"),
            ("dt", self.dt, self.dt > 0.0, "must be positive"),
            (
                "t_max",
                self.t_max,
                self.t_max >= self.dt,
                "must be at least one time step",
            ),
            ("v_stop", self.v_stop, self.v_stop > 0.0, "must be positive"),
        ];
        for (name, value, in_domain, reason) in checks {
            if !value.is_finite() {
                return Err(ConstantsError::NotFinite { name, value });
            }
            if !in_domain {
                return Err(ConstantsError::OutOfDomain {
                    name,
                    value,
                    reason,
                });
            }
        }
        Ok(())
    }
}

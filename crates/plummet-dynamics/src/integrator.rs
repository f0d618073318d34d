//! Fixed-step integrators for `dy/dt = v`, `dv/dt = a(v)`.
//!
//! The acceleration depends on velocity only, so every stage slope for
//! velocity comes from the dynamics model and every stage slope for
//! position is the stage velocity itself.

use plummet_core::{BodyState, ModelVariant};

use crate::dynamics::DynamicsModel;

/// One fixed-step advance of a body state.
///
/// # Contract
///
/// - `step()` MUST be deterministic: same inputs produce bit-identical
///   outputs.
/// - `&self`: integrators are stateless; the driver owns all state.
/// - No ground handling. The returned candidate may have `y < 0`; the
///   collision resolver deals with it.
///
/// This trait is object-safe; the engine stores one as
/// `Arc<dyn Integrator>`.
pub trait Integrator: Send + Sync {
    /// Human-readable name for logging and run metrics.
    fn name(&self) -> &str;

    /// Advance `state` by `dt` under `model` for a body of `mass`.
    fn step(
        &self,
        model: &DynamicsModel,
        state: BodyState,
        dt: f64,
        mass: f64,
        variant: ModelVariant,
    ) -> BodyState;
}

// ── RK4 ──────────────────────────────────────────────────────────────

/// Classical fourth-order Runge–Kutta.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn name(&self) -> &str {
        "rk4"
    }

    fn step(
        &self,
        model: &DynamicsModel,
        state: BodyState,
        dt: f64,
        mass: f64,
        variant: ModelVariant,
    ) -> BodyState {
        rk4_step(model, state.y, state.v, dt, mass, variant)
    }
}

/// One RK4 step from `(y, v)`, returning the candidate state.
///
/// Four stages each pair a velocity slope `a(v_s)` with a position slope
/// `v_s`, where `v_s` is the stage velocity. The state advances by the
/// weighted mean `(k1 + 2·k2 + 2·k3 + k4) / 6` of each.
///
/// ```
/// use plummet_core::ModelVariant;
/// use plummet_dynamics::{rk4_step, DynamicsModel};
///
/// let model = DynamicsModel::new(9.8, 1.2);
/// let next = rk4_step(&model, 10.0, 0.0, 0.01, 70.0, ModelVariant::FreeFall);
/// assert!((next.v - (-0.098)).abs() < 1e-12);
/// assert!((next.y - (10.0 - 0.5 * 9.8 * 0.0001)).abs() < 1e-12);
/// ```
pub fn rk4_step(
    model: &DynamicsModel,
    y: f64,
    v: f64,
    dt: f64,
    mass: f64,
    variant: ModelVariant,
) -> BodyState {
    let a = |vel: f64| model.acceleration(vel, mass, variant);

    let k1v = a(v);
    let k1y = v;

    let v2 = v + 0.5 * dt * k1v;
    let k2v = a(v2);
    let k2y = v2;

    let v3 = v + 0.5 * dt * k2v;
    let k3v = a(v3);
    let k3y = v3;

    let v4 = v + dt * k3v;
    let k4v = a(v4);
    let k4y = v4;

    BodyState {
        y: y + (dt / 6.0) * (k1y + 2.0 * k2y + 2.0 * k3y + k4y),
        v: v + (dt / 6.0) * (k1v + 2.0 * k2v + 2.0 * k3v + k4v),
    }
}

// ── Semi-implicit Euler ──────────────────────────────────────────────

/// First-order symplectic Euler: velocity first, then position with the
/// updated velocity.
#[derive(Clone, Copy, Debug, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn name(&self) -> &str {
        "semi-implicit-euler"
    }

    fn step(
        &self,
        model: &DynamicsModel,
        state: BodyState,
        dt: f64,
        mass: f64,
        variant: ModelVariant,
    ) -> BodyState {
        let v = state.v + model.acceleration(state.v, mass, variant) * dt;
        BodyState { y: state.y + v * dt, v }
    }
}

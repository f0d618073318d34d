//! Reusable integrator test fixtures.
//!
//! Three integrators wrapping [`Rk4`] for fault and timing tests:
//!
//! - [`NonFiniteIntegrator`]: returns NaN velocity after N calls.
//! - [`PanickingIntegrator`]: panics after N calls.
//! - [`SlowIntegrator`]: sleeps on every call.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use plummet_core::{BodyState, ModelVariant};
use plummet_dynamics::{DynamicsModel, Integrator, Rk4};

/// Steps correctly for `succeed_count` calls, then yields a NaN velocity.
///
/// Uses an atomic counter so it satisfies `Sync` (required by the
/// `Integrator` trait bound).
#[derive(Debug)]
pub struct NonFiniteIntegrator {
    pub succeed_count: usize,
    calls: AtomicUsize,
}

impl NonFiniteIntegrator {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Integrator for NonFiniteIntegrator {
    fn name(&self) -> &str {
        "non-finite"
    }

    fn step(
        &self,
        model: &DynamicsModel,
        state: BodyState,
        dt: f64,
        mass: f64,
        variant: ModelVariant,
    ) -> BodyState {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        let next = Rk4.step(model, state, dt, mass, variant);
        if n >= self.succeed_count {
            BodyState { v: f64::NAN, ..next }
        } else {
            next
        }
    }
}

/// Steps correctly for `succeed_count` calls, then panics.
#[derive(Debug)]
pub struct PanickingIntegrator {
    pub succeed_count: usize,
    calls: AtomicUsize,
}

impl PanickingIntegrator {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Integrator for PanickingIntegrator {
    fn name(&self) -> &str {
        "panicking"
    }

    fn step(
        &self,
        model: &DynamicsModel,
        state: BodyState,
        dt: f64,
        mass: f64,
        variant: ModelVariant,
    ) -> BodyState {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            panic!("integrator exploded after {n} steps");
        }
        Rk4.step(model, state, dt, mass, variant)
    }
}

/// RK4 with a fixed sleep per call, for tests that must observe a run in
/// flight.
#[derive(Debug)]
pub struct SlowIntegrator {
    pub delay: Duration,
}

impl SlowIntegrator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Integrator for SlowIntegrator {
    fn name(&self) -> &str {
        "slow"
    }

    fn step(
        &self,
        model: &DynamicsModel,
        state: BodyState,
        dt: f64,
        mass: f64,
        variant: ModelVariant,
    ) -> BodyState {
        std::thread::sleep(self.delay);
        Rk4.step(model, state, dt, mass, variant)
    }
}

//! Test utilities for Plummet development.
//!
//! Provides reference inputs, reduced constant sets that keep tests fast,
//! a [`RecordingObserver`] for asserting on progress streams, and the
//! fault-injecting integrators in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use plummet_core::{PhysicalConstants, ProgressObserver, SimulationParameters};

pub use fixtures::{NonFiniteIntegrator, PanickingIntegrator, SlowIntegrator};

/// The reference scenario: a 70 kg body dropped from 10 m.
pub fn reference_params() -> SimulationParameters {
    SimulationParameters::new(70.0, 10.0)
}

/// Default constants with `t_max` shortened to `t_max` seconds.
pub fn quick_constants(t_max: f64) -> PhysicalConstants {
    PhysicalConstants {
        t_max,
        ..PhysicalConstants::default()
    }
}

/// Default constants with perfectly elastic bounces, so the free-fall
/// model never comes to rest.
pub fn elastic_constants() -> PhysicalConstants {
    PhysicalConstants {
        e: 1.0,
        ..PhysicalConstants::default()
    }
}

/// Observer that stores every `(percent, current_time)` pair it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<(f64, f64)>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reported simulated times, in call order.
    pub fn times(&self) -> Vec<f64> {
        self.events.iter().map(|&(_, t)| t).collect()
    }

    /// Whether both percent and time strictly increase across calls.
    pub fn is_strictly_increasing(&self) -> bool {
        self.events
            .windows(2)
            .all(|w| w[1].0 > w[0].0 && w[1].1 > w[0].1)
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(&mut self, percent: f64, current_time: f64) {
        self.events.push((percent, current_time));
    }
}

//! Per-run performance metrics.
//!
//! [`RunMetrics`] is produced alongside every completed
//! [`SimulationResult`](plummet_core::SimulationResult) and is never part
//! of the wire payload.

/// Timing and counting data collected during one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunMetrics {
    /// Ticks recorded, including tick 0 and the terminating tick.
    pub ticks: u64,
    /// Progress callbacks delivered.
    pub progress_events: u64,
    /// Wall-clock time for the whole run, in microseconds.
    pub wall_us: u64,
    /// Name of the integrator that advanced the models.
    pub integrator: String,
}

impl RunMetrics {
    /// Recorded ticks per wall-clock second, or 0 for an instantaneous run.
    pub fn ticks_per_second(&self) -> f64 {
        if self.wall_us == 0 {
            0.0
        } else {
            self.ticks as f64 * 1e6 / self.wall_us as f64
        }
    }
}

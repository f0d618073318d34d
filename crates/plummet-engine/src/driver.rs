//! The dual-model simulation loop.
//!
//! [`SimulationDriver`] advances one model track per
//! [`ModelVariant`] in lockstep over the fixed time grid defined by the
//! physical constants. Every tick runs the same pipeline for each model:
//!
//! 1. Record the current state (height clamped for recording only).
//! 2. Report progress every `progress_interval` ticks.
//! 3. Stop when both models rest, or when `t >= t_max`.
//! 4. For each running model: integrate, resolve ground contact, count
//!    the bounce, then check for rest.
//!
//! A model at rest is frozen but keeps being recorded, so both
//! trajectories always have the same length.

use std::time::Instant;

use plummet_core::{
    BodyState, ComputationFault, ModelPhase, ModelVariant, PhysicalConstants, ProgressObserver,
    RunMetadata, SimulationParameters, SimulationResult, Trajectory, TrajectorySample,
};
use plummet_dynamics::{is_at_rest, resolve_bounce, DynamicsModel, Integrator};
use thiserror::Error;

use crate::cancel::CancelToken;
use crate::metrics::RunMetrics;

/// Trajectory buffers are pre-sized up to this many samples.
const MAX_PREALLOCATED_SAMPLES: u64 = 1 << 16;

// ── DriverError ────────────────────────────────────────────────────

/// Why a run ended without a result.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DriverError {
    /// A model produced a non-finite state.
    #[error(transparent)]
    Fault(#[from] ComputationFault),
    /// The cancel token was set.
    #[error("run cancelled at t = {at_time} s")]
    Cancelled {
        /// Simulated time of the tick at which cancellation was observed.
        at_time: f64,
    },
}

// ── RunOutcome ─────────────────────────────────────────────────────

/// Result of a successful [`SimulationDriver::run`].
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Both trajectories plus metadata.
    pub result: SimulationResult,
    /// Timing and counters for this run.
    pub metrics: RunMetrics,
}

// ── ModelTrack ─────────────────────────────────────────────────────

/// Per-model state machine.
#[derive(Debug)]
struct ModelTrack {
    variant: ModelVariant,
    state: BodyState,
    phase: ModelPhase,
    bounces: u32,
    trajectory: Trajectory,
}

/// Inputs shared by every model within one tick.
struct StepInputs<'a> {
    integrator: &'a dyn Integrator,
    model: &'a DynamicsModel,
    constants: &'a PhysicalConstants,
    mass: f64,
    tick: u64,
}

impl ModelTrack {
    fn new(variant: ModelVariant, initial: BodyState, capacity: usize) -> Self {
        Self {
            variant,
            state: initial,
            phase: ModelPhase::Running,
            bounces: 0,
            trajectory: Trajectory::with_capacity(capacity),
        }
    }

    fn record(&mut self, t: f64) {
        self.trajectory.push(TrajectorySample {
            t,
            height: self.state.y.max(0.0),
            velocity: self.state.v,
        });
    }

    fn is_at_rest(&self) -> bool {
        self.phase == ModelPhase::AtRest
    }

    fn advance(&mut self, inputs: &StepInputs<'_>) -> Result<(), ComputationFault> {
        if self.is_at_rest() {
            return Ok(());
        }
        let c = inputs.constants;
        let candidate =
            inputs
                .integrator
                .step(inputs.model, self.state, c.dt, inputs.mass, self.variant);
        let resolution = resolve_bounce(self.state, candidate, c.dt, c.e);
        self.check_finite(resolution.state, inputs.tick)?;

        self.state = resolution.state;
        if resolution.bounced {
            self.bounces += 1;
            tracing::trace!(
                variant = %self.variant,
                tick = inputs.tick,
                impact_time = resolution.impact_time,
                rebound = self.state.v,
                "bounce"
            );
        }
        if is_at_rest(self.state.y, self.state.v, c.v_stop) {
            self.phase = ModelPhase::AtRest;
        }
        Ok(())
    }

    fn check_finite(&self, state: BodyState, tick: u64) -> Result<(), ComputationFault> {
        if state.is_finite() {
            return Ok(());
        }
        let (quantity, value) = if state.y.is_finite() {
            ("velocity", state.v)
        } else {
            ("height", state.y)
        };
        Err(ComputationFault::NonFinite {
            variant: self.variant,
            tick,
            quantity,
            value,
        })
    }
}

// ── SimulationDriver ───────────────────────────────────────────────

/// Runs both models from validated parameters to a [`SimulationResult`].
///
/// Borrowed configuration only; a driver is cheap to build per run.
pub struct SimulationDriver<'a> {
    constants: &'a PhysicalConstants,
    integrator: &'a dyn Integrator,
    progress_interval: u64,
    model: DynamicsModel,
}

impl<'a> SimulationDriver<'a> {
    /// Build a driver over `constants` using `integrator`.
    ///
    /// `progress_interval` of zero is treated as one.
    pub fn new(
        constants: &'a PhysicalConstants,
        integrator: &'a dyn Integrator,
        progress_interval: u64,
    ) -> Self {
        Self {
            constants,
            integrator,
            progress_interval: progress_interval.max(1),
            model: DynamicsModel::from_constants(constants),
        }
    }

    /// Run to joint rest or `t_max`.
    ///
    /// `params` must already have passed validation. `cancel` is polled
    /// once per tick before recording.
    pub fn run(
        &self,
        params: &SimulationParameters,
        cancel: &CancelToken,
        observer: &mut dyn ProgressObserver,
    ) -> Result<RunOutcome, DriverError> {
        let started = Instant::now();
        let c = self.constants;
        let steps = c.steps();
        let capacity = c.tick_budget().min(MAX_PREALLOCATED_SAMPLES) as usize;
        let initial = BodyState::new(params.height, c.v0);
        let mut tracks = ModelVariant::ALL.map(|v| ModelTrack::new(v, initial, capacity));

        let mut end_time = c.t_max;
        let mut ticks = 0u64;
        let mut progress_events = 0u64;

        for tick in 0..=steps {
            let t = c.time_at(tick);
            if cancel.is_cancelled() {
                return Err(DriverError::Cancelled { at_time: t });
            }

            for track in &mut tracks {
                track.record(t);
            }
            ticks += 1;

            if tick % self.progress_interval == 0 {
                observer.on_progress(tick as f64 / steps as f64 * 100.0, t);
                progress_events += 1;
            }

            if tracks.iter().all(ModelTrack::is_at_rest) {
                end_time = t;
                break;
            }
            if t >= c.t_max {
                end_time = c.t_max;
                break;
            }

            let inputs = StepInputs {
                integrator: self.integrator,
                model: &self.model,
                constants: c,
                mass: params.mass,
                tick,
            };
            for track in &mut tracks {
                track.advance(&inputs)?;
            }
        }

        let [free_fall, drag] = tracks;
        let metadata = RunMetadata {
            total_points: free_fall.trajectory.len(),
            end_time,
            free_fall_bounces: free_fall.bounces,
            drag_bounces: drag.bounces,
            free_fall_stopped: free_fall.is_at_rest(),
            drag_stopped: drag.is_at_rest(),
        };
        let metrics = RunMetrics {
            ticks,
            progress_events,
            wall_us: started.elapsed().as_micros() as u64,
            integrator: self.integrator.name().to_owned(),
        };
        Ok(RunOutcome {
            result: SimulationResult {
                free_fall: free_fall.trajectory,
                with_drag: drag.trajectory,
                metadata,
            },
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plummet_core::NoProgress;
    use plummet_dynamics::Rk4;

    fn run(constants: &PhysicalConstants, mass: f64, height: f64) -> RunOutcome {
        SimulationDriver::new(constants, &Rk4, 100)
            .run(
                &SimulationParameters::new(mass, height),
                &CancelToken::new(),
                &mut NoProgress,
            )
            .unwrap()
    }

    #[test]
    fn zero_height_rests_after_one_step() {
        let c = PhysicalConstants::default();
        let out = run(&c, 70.0, 0.0);
        let meta = &out.result.metadata;
        assert_eq!(meta.total_points, 2);
        assert_eq!(meta.end_time, 0.01);
        assert!(meta.free_fall_stopped && meta.drag_stopped);
        assert_eq!(out.metrics.ticks, 2);
    }

    #[test]
    fn reference_drop_comes_to_rest() {
        let c = PhysicalConstants::default();
        let out = run(&c, 70.0, 10.0);
        let meta = &out.result.metadata;
        assert!(meta.free_fall_stopped);
        assert!(meta.drag_stopped);
        assert!(meta.end_time < c.t_max);
        assert!(meta.free_fall_bounces > 1);
        assert!(meta.drag_bounces > 1);
        assert_eq!(out.result.free_fall.len(), meta.total_points);
        assert_eq!(out.result.with_drag.len(), meta.total_points);
    }

    #[test]
    fn first_contact_recorded_at_tick_143() {
        let out = run(&PhysicalConstants::default(), 70.0, 10.0);
        let ff = &out.result.free_fall;
        let i = ff.first_contact_index().unwrap();
        assert_eq!(i, 143);
        let s = ff.sample(i).unwrap();
        assert_eq!(s.height, 0.0);
        assert!((s.velocity - 9.8).abs() < 1e-3);
    }

    #[test]
    fn progress_every_interval_with_increasing_time() {
        let c = PhysicalConstants::default();
        let mut seen = Vec::new();
        let mut observer = |p: f64, t: f64| seen.push((p, t));
        let out = SimulationDriver::new(&c, &Rk4, 100)
            .run(
                &SimulationParameters::new(70.0, 10.0),
                &CancelToken::new(),
                &mut observer,
            )
            .unwrap();
        assert_eq!(seen.first(), Some(&(0.0, 0.0)));
        assert!(seen.windows(2).all(|w| w[1].1 > w[0].1 && w[1].0 > w[0].0));
        assert!(seen.iter().all(|&(p, _)| (0.0..=100.0).contains(&p)));
        assert_eq!(out.metrics.progress_events, seen.len() as u64);
        let expected = (out.metrics.ticks - 1) / 100 + 1;
        assert_eq!(seen.len() as u64, expected);
    }

    #[test]
    fn pre_cancelled_token_aborts_before_recording() {
        let c = PhysicalConstants::default();
        let token = CancelToken::new();
        token.cancel();
        let err = SimulationDriver::new(&c, &Rk4, 100)
            .run(&SimulationParameters::new(70.0, 10.0), &token, &mut NoProgress)
            .unwrap_err();
        assert_eq!(err, DriverError::Cancelled { at_time: 0.0 });
    }

    #[test]
    fn zero_progress_interval_is_clamped() {
        let c = PhysicalConstants {
            t_max: 0.05,
            ..PhysicalConstants::default()
        };
        let mut calls = 0;
        let mut observer = |_: f64, _: f64| calls += 1;
        SimulationDriver::new(&c, &Rk4, 0)
            .run(
                &SimulationParameters::new(1.0, 100.0),
                &CancelToken::new(),
                &mut observer,
            )
            .unwrap();
        assert_eq!(calls, 6);
    }
}

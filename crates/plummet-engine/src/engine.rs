//! Synchronous engine façade.
//!
//! [`Engine`] is the primary user-facing API. It owns an immutable
//! [`EngineConfig`] and an [`Integrator`], validates requests, runs the
//! [`SimulationDriver`], and turns the outcome into protocol
//! notifications.
//!
//! # Ownership model
//!
//! `Engine` is `Send + Sync` and holds no per-run state; every call to
//! [`run()`](Engine::run) builds a fresh driver. The returned
//! [`SimulationResult`] is owned by the caller.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use plummet_core::{
    validate, ComputationFault, NoProgress, ProgressObserver, SimulationParameters,
    SimulationResult,
};
use plummet_dynamics::{Integrator, Rk4};

use crate::cancel::CancelToken;
use crate::config::{ConfigError, EngineConfig};
use crate::driver::{RunOutcome, SimulationDriver};
use crate::error::EngineError;
use crate::protocol::{Notification, Request};

/// Text of the optional start-of-run status notification.
pub const START_STATUS: &str = "시뮬레이션 시작...";

// Compile-time assertion: Engine can be moved to and shared between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Engine>();
    }
};

// ── Engine ──────────────────────────────────────────────────────────

/// Validates requests and runs both models to completion.
///
/// # Examples
///
/// ```
/// use plummet_core::SimulationParameters;
/// use plummet_engine::{Engine, EngineConfig};
///
/// let engine = Engine::new(EngineConfig::default()).unwrap();
/// let result = engine.simulate(&SimulationParameters::new(70.0, 10.0)).unwrap();
/// assert!(result.metadata.free_fall_stopped);
/// assert_eq!(result.free_fall.len(), result.metadata.total_points);
/// ```
#[derive(Clone)]
pub struct Engine {
    config: EngineConfig,
    integrator: Arc<dyn Integrator>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("integrator", &self.integrator.name())
            .finish()
    }
}

impl Engine {
    /// Validate `config` and build an engine using [`Rk4`].
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            integrator: Arc::new(Rk4),
        })
    }

    /// Replace the integrator.
    pub fn with_integrator(mut self, integrator: impl Integrator + 'static) -> Self {
        self.integrator = Arc::new(integrator);
        self
    }

    /// The validated configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Name of the active integrator.
    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    /// Validate `params` and run both models, reporting progress to `observer`.
    pub fn run(
        &self,
        params: &SimulationParameters,
        cancel: &CancelToken,
        observer: &mut dyn ProgressObserver,
    ) -> Result<SimulationResult, EngineError> {
        self.run_with_metrics(params, cancel, observer)
            .map(|outcome| outcome.result)
    }

    /// Like [`run()`](Engine::run), also returning run metrics.
    pub fn run_with_metrics(
        &self,
        params: &SimulationParameters,
        cancel: &CancelToken,
        observer: &mut dyn ProgressObserver,
    ) -> Result<RunOutcome, EngineError> {
        if let Err(issues) = validate(params).into_result() {
            let err = EngineError::Validation(issues);
            tracing::warn!(mass = params.mass, height = params.height, "{err}");
            return Err(err);
        }

        tracing::debug!(
            mass = params.mass,
            height = params.height,
            integrator = self.integrator.name(),
            "simulation started"
        );
        let driver = SimulationDriver::new(
            &self.config.constants,
            self.integrator.as_ref(),
            self.config.progress_interval,
        );
        match driver.run(params, cancel, observer) {
            Ok(outcome) => {
                let meta = &outcome.result.metadata;
                tracing::info!(
                    points = meta.total_points,
                    end_time = meta.end_time,
                    free_fall_bounces = meta.free_fall_bounces,
                    drag_bounces = meta.drag_bounces,
                    wall_us = outcome.metrics.wall_us,
                    "simulation complete"
                );
                Ok(outcome)
            }
            Err(e) => {
                let err = EngineError::from(e);
                match &err {
                    EngineError::Cancelled { .. } => tracing::info!("{err}"),
                    _ => tracing::error!("{err}"),
                }
                Err(err)
            }
        }
    }

    /// Run without progress reporting or cancellation.
    pub fn simulate(&self, params: &SimulationParameters) -> Result<SimulationResult, EngineError> {
        self.run(params, &CancelToken::new(), &mut NoProgress)
    }

    /// Answer one request, emitting every notification through `emit`.
    ///
    /// Emits zero or more `Progress` followed by exactly one `Complete` or
    /// `Error`. With `announce_start` set, a simulate request is preceded
    /// by a `Status`. A panic inside the run is caught here and reported
    /// as a computation error.
    pub fn handle(
        &self,
        request: &Request,
        cancel: &CancelToken,
        emit: &mut dyn FnMut(Notification),
    ) {
        let terminal = match self.answer(request, cancel, emit) {
            Ok(results) => Notification::Complete { results },
            Err(err) => Notification::Error {
                message: err.to_string(),
            },
        };
        emit(terminal);
    }

    /// Decode `text` as a request and [`handle()`](Engine::handle) it.
    ///
    /// Undecodable text yields a single `Error` notification.
    pub fn handle_json(
        &self,
        text: &str,
        cancel: &CancelToken,
        emit: &mut dyn FnMut(Notification),
    ) {
        match Request::from_json(text) {
            Ok(request) => self.handle(&request, cancel, emit),
            Err(e) => {
                let err = EngineError::from(e);
                tracing::warn!("{err}");
                emit(Notification::Error {
                    message: err.to_string(),
                });
            }
        }
    }

    fn answer(
        &self,
        request: &Request,
        cancel: &CancelToken,
        emit: &mut dyn FnMut(Notification),
    ) -> Result<SimulationResult, EngineError> {
        let params = match request {
            Request::Simulate { params } => params,
            Request::Unknown(kind) => {
                let err = EngineError::UnknownRequest(kind.clone());
                tracing::warn!("{err}");
                return Err(err);
            }
        };
        if self.config.announce_start {
            emit(Notification::Status {
                message: START_STATUS.to_owned(),
            });
        }

        let mut observer = |progress: f64, current_time: f64| {
            emit(Notification::Progress {
                progress,
                current_time,
            })
        };
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| self.run(params, cancel, &mut observer)));
        match outcome {
            Ok(result) => result,
            Err(payload) => {
                let fault = ComputationFault::Aborted {
                    reason: panic_reason(payload.as_ref()),
                };
                tracing::error!("contained panic: {fault}");
                Err(fault.into())
            }
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

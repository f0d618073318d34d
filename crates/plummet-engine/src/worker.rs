//! Background worker owning an [`Engine`] on its own thread.
//!
//! Requests arrive on a single-slot crossbeam channel; notifications leave
//! on an unbounded one. The worker sends `Ready` once when its thread
//! starts, then answers requests one at a time.
//!
//! # Admission
//!
//! At most one request is in flight. [`EngineWorker::submit`] refuses a
//! second request with [`SubmitError::Busy`] until the first one's
//! terminal notification has been queued. The busy flag is cleared before
//! that notification is sent, so a caller that has just received it may
//! resubmit immediately.
//!
//! Every admitted request carries its own [`CancelToken`], so
//! [`EngineWorker::cancel`] only ever reaches the most recently admitted
//! run.
//!
//! # Shutdown
//!
//! [`EngineWorker::shutdown`] cancels any in-flight run, closes the
//! request channel and joins the thread. Dropping the worker does the same.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use thiserror::Error;

use crate::cancel::CancelToken;
use crate::config::{ConfigError, EngineConfig};
use crate::engine::Engine;
use crate::protocol::{Notification, Request};

// ── SubmitError ────────────────────────────────────────────────────

/// Why a request was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A run is already in flight.
    #[error("시뮬레이션 실행 중: a run is already in progress")]
    Busy,
    /// The worker has shut down.
    #[error("worker has shut down")]
    Shutdown,
}

// ── ShutdownReport ─────────────────────────────────────────────────

/// Report from [`EngineWorker::shutdown`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Total time spent in the shutdown sequence.
    pub total_ms: u64,
    /// Whether the worker thread was joined successfully.
    pub thread_joined: bool,
    /// Requests the worker answered over its lifetime.
    pub requests_handled: u64,
}

// ── Job ────────────────────────────────────────────────────────────

enum Payload {
    Request(Request),
    Json(String),
}

struct Job {
    payload: Payload,
    cancel: CancelToken,
}

// ── EngineWorker ───────────────────────────────────────────────────

/// Handle to a background engine thread.
pub struct EngineWorker {
    requests: Option<Sender<Job>>,
    notifications: Receiver<Notification>,
    busy: Arc<AtomicBool>,
    /// Token of the most recently admitted run.
    current: Mutex<CancelToken>,
    thread: Option<JoinHandle<u64>>,
}

impl EngineWorker {
    /// Validate `config` and start a worker running the default integrator.
    pub fn spawn(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_engine(Engine::new(config)?)
    }

    /// Start a worker around an already-built engine.
    pub fn with_engine(engine: Engine) -> Result<Self, ConfigError> {
        let (req_tx, req_rx) = crossbeam_channel::bounded(1);
        let (note_tx, note_rx) = crossbeam_channel::unbounded();
        let busy = Arc::new(AtomicBool::new(false));

        let thread_busy = Arc::clone(&busy);
        let thread = thread::Builder::new()
            .name("plummet-engine".into())
            .spawn(move || worker_loop(engine, req_rx, note_tx, thread_busy))
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            requests: Some(req_tx),
            notifications: note_rx,
            busy,
            current: Mutex::new(CancelToken::new()),
            thread: Some(thread),
        })
    }

    /// Submit a decoded request.
    pub fn submit(&self, request: Request) -> Result<(), SubmitError> {
        self.admit(Payload::Request(request))
    }

    /// Submit raw JSON; decoding happens on the worker thread so that
    /// malformed text is answered with an `error` notification.
    pub fn submit_json(&self, text: impl Into<String>) -> Result<(), SubmitError> {
        self.admit(Payload::Json(text.into()))
    }

    /// Ask the most recently admitted run to stop.
    ///
    /// The run ends with an `error` notification. Has no effect once that
    /// run has finished, nor on requests submitted afterwards.
    pub fn cancel(&self) {
        self.current_token().cancel();
    }

    /// Whether a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Outbound notification stream.
    pub fn notifications(&self) -> &Receiver<Notification> {
        &self.notifications
    }

    /// Cancel any in-flight run, close the request channel and join the thread.
    pub fn shutdown(&mut self) -> ShutdownReport {
        let start = Instant::now();
        self.current_token().cancel();
        self.requests.take();

        let (thread_joined, requests_handled) = match self.thread.take() {
            Some(handle) => match handle.join() {
                Ok(handled) => (true, handled),
                Err(_) => {
                    tracing::error!("engine worker thread panicked");
                    (false, 0)
                }
            },
            None => (true, 0),
        };

        let report = ShutdownReport {
            total_ms: start.elapsed().as_millis() as u64,
            thread_joined,
            requests_handled,
        };
        tracing::debug!(?report, "engine worker shut down");
        report
    }

    fn current_token(&self) -> MutexGuard<'_, CancelToken> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn admit(&self, payload: Payload) -> Result<(), SubmitError> {
        let tx = self.requests.as_ref().ok_or(SubmitError::Shutdown)?;
        // Held until the new token is installed so a concurrent cancel()
        // lands on exactly one run.
        let mut current = self.current_token();
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("request refused: a run is already in progress");
            return Err(SubmitError::Busy);
        }
        let cancel = CancelToken::new();
        let job = Job {
            payload,
            cancel: cancel.clone(),
        };
        match tx.try_send(job) {
            Ok(()) => {
                *current = cancel;
                Ok(())
            }
            Err(e) => {
                self.busy.store(false, Ordering::Release);
                Err(match e {
                    // The slot still holds a job the worker has not taken.
                    TrySendError::Full(_) => SubmitError::Busy,
                    TrySendError::Disconnected(_) => SubmitError::Shutdown,
                })
            }
        }
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.shutdown();
        }
    }
}

/// Worker thread body. Returns the number of requests answered.
fn worker_loop(
    engine: Engine,
    requests: Receiver<Job>,
    notifications: Sender<Notification>,
    busy: Arc<AtomicBool>,
) -> u64 {
    // Send failures mean the handle is gone; the loop ends when the
    // request channel closes.
    let _ = notifications.send(Notification::Ready);
    let mut handled = 0u64;

    while let Ok(job) = requests.recv() {
        let mut terminal = None;
        let mut emit = |n: Notification| {
            if n.is_terminal() {
                terminal = Some(n);
            } else {
                let _ = notifications.send(n);
            }
        };
        match &job.payload {
            Payload::Request(request) => engine.handle(request, &job.cancel, &mut emit),
            Payload::Json(text) => engine.handle_json(text, &job.cancel, &mut emit),
        }

        busy.store(false, Ordering::Release);
        if let Some(n) = terminal {
            let _ = notifications.send(n);
        }
        handled += 1;
    }
    handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn next(worker: &EngineWorker) -> Notification {
        worker.notifications().recv_timeout(TIMEOUT).unwrap()
    }

    #[test]
    fn sends_ready_on_start() {
        let worker = EngineWorker::spawn(EngineConfig::default()).unwrap();
        assert_eq!(next(&worker), Notification::Ready);
    }

    #[test]
    fn spawn_rejects_invalid_config() {
        let config = EngineConfig {
            progress_interval: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            EngineWorker::spawn(config),
            Err(ConfigError::ProgressIntervalZero)
        ));
    }

    #[test]
    fn each_admitted_run_gets_a_fresh_token() {
        let worker = EngineWorker::spawn(EngineConfig::default()).unwrap();
        assert_eq!(next(&worker), Notification::Ready);

        worker.submit(Request::simulate(70.0, 0.0)).unwrap();
        let first = worker.current_token().clone();
        while !next(&worker).is_terminal() {}

        // A late cancel lands on the finished run only.
        worker.cancel();
        assert!(first.is_cancelled());

        worker.submit(Request::simulate(70.0, 0.0)).unwrap();
        assert!(!worker.current_token().is_cancelled());
        let last = loop {
            let n = next(&worker);
            if n.is_terminal() {
                break n;
            }
        };
        assert!(matches!(last, Notification::Complete { .. }));
    }

    #[test]
    fn submit_after_shutdown_is_refused() {
        let mut worker = EngineWorker::spawn(EngineConfig::default()).unwrap();
        let report = worker.shutdown();
        assert!(report.thread_joined);
        assert_eq!(report.requests_handled, 0);
        assert_eq!(
            worker.submit(Request::simulate(70.0, 1.0)),
            Err(SubmitError::Shutdown)
        );
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut worker = EngineWorker::spawn(EngineConfig::default()).unwrap();
        worker.shutdown();
        let second = worker.shutdown();
        assert!(second.thread_joined);
        assert_eq!(second.requests_handled, 0);
    }

    #[test]
    fn counts_handled_requests() {
        let mut worker = EngineWorker::spawn(EngineConfig::default()).unwrap();
        assert_eq!(next(&worker), Notification::Ready);
        for _ in 0..2 {
            worker.submit(Request::simulate(70.0, 0.0)).unwrap();
            loop {
                if next(&worker).is_terminal() {
                    break;
                }
            }
        }
        assert_eq!(worker.shutdown().requests_handled, 2);
    }
}

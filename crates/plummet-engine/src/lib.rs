//! Simulation engine for the Plummet drop simulator.
//!
//! Runs the free-fall and drag models side by side over a fixed time grid
//! and reports the outcome through a small message protocol. Two entry
//! points are provided:
//!
//! - [`Engine`]: synchronous façade. Call [`Engine::run`] or
//!   [`Engine::handle`] on the current thread.
//! - [`EngineWorker`]: owns an `Engine` on a background thread and talks
//!   to the caller over crossbeam channels.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod protocol;
pub mod worker;

pub use cancel::CancelToken;
pub use config::{ConfigError, EngineConfig};
pub use driver::{DriverError, RunOutcome, SimulationDriver};
pub use engine::Engine;
pub use error::EngineError;
pub use metrics::RunMetrics;
pub use protocol::{Notification, ProtocolError, Request};
pub use worker::{EngineWorker, ShutdownReport, SubmitError};

//! Plummet: a falling-body simulator comparing free fall with linear drag.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Plummet sub-crates. For most users, adding `plummet` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use plummet::prelude::*;
//!
//! let engine = Engine::new(EngineConfig::default()).unwrap();
//! let params = SimulationParameters::new(70.0, 10.0);
//!
//! let mut last_percent = 0.0;
//! let result = engine
//!     .run(&params, &CancelToken::new(), &mut |p: f64, _t: f64| last_percent = p)
//!     .unwrap();
//!
//! // Both models bounce and settle well before the 60 s horizon.
//! assert!(result.metadata.free_fall_stopped && result.metadata.drag_stopped);
//! assert!(result.metadata.end_time < 60.0);
//! assert!(last_percent > 0.0);
//!
//! // The first ground contact of the free-fall model sits near 1.43 s.
//! let ff = result.trajectory(ModelVariant::FreeFall);
//! let contact = ff.sample(ff.first_contact_index().unwrap()).unwrap();
//! assert!((contact.t - 1.43).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plummet-core` | Parameters, constants, trajectories, results, validation, errors |
//! | [`dynamics`] | `plummet-dynamics` | Acceleration laws, integrators, collision and rest detection |
//! | [`engine`] | `plummet-engine` | Driver, engine façade, wire protocol, background worker |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model, validation and errors (`plummet-core`).
///
/// Contains [`types::SimulationParameters`], [`types::PhysicalConstants`],
/// [`types::SimulationResult`] and the [`types::validate`] function.
pub use plummet_core as types;

/// Numerical building blocks (`plummet-dynamics`).
///
/// The [`dynamics::Integrator`] trait is the extension point for
/// alternative stepping schemes.
pub use plummet_dynamics as dynamics;

/// Simulation engine (`plummet-engine`).
///
/// [`engine::Engine`] for synchronous runs, [`engine::EngineWorker`] for
/// a background thread speaking the JSON protocol.
pub use plummet_engine as engine;

/// Common imports for typical Plummet usage.
///
/// ```rust
/// use plummet::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use plummet_core::{
        validate, BodyState, ModelVariant, PhysicalConstants, ProgressObserver, RunMetadata,
        SimulationParameters, SimulationResult, Trajectory, TrajectorySample,
    };

    // Errors
    pub use plummet_core::{ComputationFault, ValidationIssue};

    // Dynamics
    pub use plummet_dynamics::{DynamicsModel, Integrator, Rk4};

    // Engine
    pub use plummet_engine::{
        CancelToken, ConfigError, Engine, EngineConfig, EngineError, EngineWorker, Notification,
        Request, SubmitError,
    };
}

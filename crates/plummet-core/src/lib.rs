//! Core types, constants, and validation for the Plummet drop simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data model shared by every other Plummet crate: simulation parameters,
//! physical constants, body state, trajectories, run results, the
//! parameter validator, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod digest;
pub mod error;
pub mod params;
pub mod result;
pub mod state;
pub mod traits;
pub mod trajectory;
pub mod validation;

pub use constants::{PhysicalConstants, REST_HEIGHT_EPSILON};
pub use error::{ComputationFault, ConstantsError, TrajectoryError, ValidationIssue};
pub use params::SimulationParameters;
pub use result::{RunMetadata, SimulationResult};
pub use state::{BodyState, ModelPhase, ModelVariant};
pub use traits::{NoProgress, ProgressObserver};
pub use trajectory::{Trajectory, TrajectorySample};
pub use validation::{validate, ValidationReport};

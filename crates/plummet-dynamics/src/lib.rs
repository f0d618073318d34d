//! Numerical building blocks for the Plummet drop simulator.
//!
//! Each piece is a pure function of its inputs:
//!
//! 1. [`DynamicsModel`] gives the acceleration for a velocity, mass and model.
//! 2. An [`Integrator`] ([`Rk4`] by default) advances `(y, v)` by one step.
//! 3. [`resolve_bounce`] turns a ground-penetrating candidate into a bounce.
//! 4. [`is_at_rest`] decides whether a grounded body has stopped.
//!
//! The simulation driver in `plummet-engine` composes them once per tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collision;
pub mod dynamics;
pub mod integrator;
pub mod rest;

pub use collision::{resolve_bounce, BounceResolution};
pub use dynamics::DynamicsModel;
pub use integrator::{rk4_step, Integrator, Rk4, SemiImplicitEuler};
pub use rest::is_at_rest;

//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the explicit, immutable input to
//! [`Engine::new`](crate::Engine::new) and
//! [`EngineWorker::spawn`](crate::EngineWorker::spawn). There is no
//! global configuration.

use plummet_core::{ConstantsError, PhysicalConstants};
use thiserror::Error;

/// Largest `dt` (s) for which one ground crossing per tick is a safe
/// assumption at the reference drop heights.
pub const COARSE_DT_THRESHOLD: f64 = 0.05;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`] or worker startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A physical constant is outside its domain.
    #[error("constants: {0}")]
    Constants(#[from] ConstantsError),
    /// `progress_interval` is zero.
    #[error("progress_interval must be at least 1")]
    ProgressIntervalZero,
    /// The background worker thread could not be spawned.
    #[error("thread spawn failed: {reason}")]
    ThreadSpawnFailed {
        /// OS error description.
        reason: String,
    },
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for an engine.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Physical constants for every run.
    pub constants: PhysicalConstants,
    /// Emit progress every this many ticks. Default: 100.
    pub progress_interval: u64,
    /// Emit a `Status` notification before each simulate request. Default: false.
    pub announce_start: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            constants: PhysicalConstants::default(),
            progress_interval: 100,
            announce_start: false,
        }
    }
}

impl EngineConfig {
    /// Validate all invariants.
    ///
    /// A `dt` above [`COARSE_DT_THRESHOLD`] is accepted but logged at
    /// `warn`, since fast rebounds may then cross the ground twice in one
    /// tick and only the first crossing is resolved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constants.validate()?;
        if self.progress_interval == 0 {
            return Err(ConfigError::ProgressIntervalZero);
        }
        if self.constants.dt > COARSE_DT_THRESHOLD {
            tracing::warn!(
                dt = self.constants.dt,
                threshold = COARSE_DT_THRESHOLD,
                "coarse time step; bounce interpolation may miss crossings"
            );
        }
        Ok(())
    }
}

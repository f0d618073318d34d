//! Benchmark profiles for the Plummet drop simulator.
//!
//! Each profile pairs an [`EngineConfig`] with the parameters to run:
//!
//! - [`reference_profile`]: 70 kg from 10 m; both models rest at about 8 s.
//! - [`full_horizon_profile`]: perfectly elastic bounces; every run walks
//!   the whole 6001-tick grid.
//! - [`fine_step_profile`]: reference drop at a tenth of the step size.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plummet_core::{PhysicalConstants, SimulationParameters};
use plummet_engine::EngineConfig;

/// A configuration plus the request to benchmark under it.
#[derive(Clone, Debug)]
pub struct Profile {
    /// Engine configuration.
    pub config: EngineConfig,
    /// Parameters for each run.
    pub params: SimulationParameters,
}

/// The reference drop with default constants.
pub fn reference_profile() -> Profile {
    Profile {
        config: EngineConfig::default(),
        params: SimulationParameters::new(70.0, 10.0),
    }
}

/// Elastic bounces from 10 m: neither model rests, so the run is truncated
/// at `t_max` after the full tick budget.
pub fn full_horizon_profile() -> Profile {
    Profile {
        config: EngineConfig {
            constants: PhysicalConstants {
                e: 1.0,
                k: 0.0,
                ..PhysicalConstants::default()
            },
            ..EngineConfig::default()
        },
        params: SimulationParameters::new(70.0, 10.0),
    }
}

/// The reference drop with `dt = 0.001`.
pub fn fine_step_profile() -> Profile {
    Profile {
        config: EngineConfig {
            constants: PhysicalConstants {
                dt: 0.001,
                ..PhysicalConstants::default()
            },
            progress_interval: 1000,
            ..EngineConfig::default()
        },
        params: SimulationParameters::new(70.0, 10.0),
    }
}

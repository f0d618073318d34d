//! The output artifact of a completed run.

use serde::{Deserialize, Serialize};

use crate::digest;
use crate::state::ModelVariant;
use crate::trajectory::Trajectory;

/// Summary of a completed run, computed once when the driver stops.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    /// Samples recorded per trajectory.
    pub total_points: usize,
    /// Simulated time at which the run stopped (s).
    pub end_time: f64,
    /// Ground impacts resolved for the free-fall model.
    pub free_fall_bounces: u32,
    /// Ground impacts resolved for the drag model.
    pub drag_bounces: u32,
    /// Whether the free-fall model reached rest.
    pub free_fall_stopped: bool,
    /// Whether the drag model reached rest.
    pub drag_stopped: bool,
}

impl RunMetadata {
    /// Bounce count for one model.
    pub fn bounces(&self, variant: ModelVariant) -> u32 {
        match variant {
            ModelVariant::FreeFall => self.free_fall_bounces,
            ModelVariant::Drag => self.drag_bounces,
        }
    }

    /// Stopped flag for one model.
    pub fn stopped(&self, variant: ModelVariant) -> bool {
        match variant {
            ModelVariant::FreeFall => self.free_fall_stopped,
            ModelVariant::Drag => self.drag_stopped,
        }
    }
}

/// Both trajectories of a run plus their metadata.
///
/// Owned by the caller once returned; nothing in the engine keeps a
/// reference to it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Trajectory of the gravity-only model.
    pub free_fall: Trajectory,
    /// Trajectory of the gravity-plus-drag model.
    pub with_drag: Trajectory,
    /// Run summary.
    pub metadata: RunMetadata,
}

impl SimulationResult {
    /// Trajectory recorded for `variant`.
    pub fn trajectory(&self, variant: ModelVariant) -> &Trajectory {
        match variant {
            ModelVariant::FreeFall => &self.free_fall,
            ModelVariant::Drag => &self.with_drag,
        }
    }

    /// Latest recorded time across both trajectories (0 when empty).
    pub fn max_time(&self) -> f64 {
        [&self.free_fall, &self.with_drag]
            .iter()
            .filter_map(|t| t.last())
            .map(|s| s.t)
            .fold(0.0, f64::max)
    }

    /// Highest recorded height across both trajectories (0 when empty).
    pub fn max_height(&self) -> f64 {
        [&self.free_fall, &self.with_drag]
            .iter()
            .filter_map(|t| t.peak_height())
            .fold(0.0, f64::max)
    }

    /// FNV-1a digest over every recorded value and metadata field.
    ///
    /// Equal digests mean bit-identical results; used to check that two
    /// runs with the same inputs agree exactly.
    pub fn digest(&self) -> u64 {
        let mut hash = digest::FNV_OFFSET;
        for traj in [&self.free_fall, &self.with_drag] {
            hash = digest::fnv1a_u64(hash, traj.len() as u64);
            for column in [traj.time(), traj.height(), traj.velocity()] {
                for &value in column {
                    hash = digest::fnv1a_f64(hash, value);
                }
            }
        }
        let m = &self.metadata;
        hash = digest::fnv1a_u64(hash, m.total_points as u64);
        hash = digest::fnv1a_f64(hash, m.end_time);
        hash = digest::fnv1a_u64(hash, u64::from(m.free_fall_bounces));
        hash = digest::fnv1a_u64(hash, u64::from(m.drag_bounces));
        hash = digest::fnv1a_byte(hash, u8::from(m.free_fall_stopped));
        digest::fnv1a_byte(hash, u8::from(m.drag_stopped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::TrajectorySample;

    fn two_point_result() -> SimulationResult {
        let mut free_fall = Trajectory::new();
        let mut with_drag = Trajectory::new();
        for (t, h_ff, h_d) in [(0.0, 10.0, 10.0), (0.01, 9.9995, 9.9996)] {
            free_fall.push(TrajectorySample {
                t,
                height: h_ff,
                velocity: -0.098 * t * 100.0,
            });
            with_drag.push(TrajectorySample {
                t,
                height: h_d,
                velocity: -0.097 * t * 100.0,
            });
        }
        SimulationResult {
            free_fall,
            with_drag,
            metadata: RunMetadata {
                total_points: 2,
                end_time: 0.01,
                ..RunMetadata::default()
            },
        }
    }

    #[test]
    fn trajectory_selects_by_variant() {
        let r = two_point_result();
        assert_eq!(r.trajectory(ModelVariant::FreeFall), &r.free_fall);
        assert_eq!(r.trajectory(ModelVariant::Drag), &r.with_drag);
    }

    #[test]
    fn extents_span_both_trajectories() {
        let r = two_point_result();
        assert_eq!(r.max_time(), 0.01);
        assert_eq!(r.max_height(), 10.0);
        assert_eq!(SimulationResult::default().max_height(), 0.0);
    }

    #[test]
    fn digest_is_stable_and_sensitive() {
        let a = two_point_result();
        let b = two_point_result();
        assert_eq!(a.digest(), b.digest());

        let mut c = two_point_result();
        c.metadata.drag_stopped = true;
        assert_ne!(a.digest(), c.digest());
    }

    #[test]
    fn metadata_accessors_follow_variant() {
        let m = RunMetadata {
            free_fall_bounces: 3,
            drag_bounces: 5,
            free_fall_stopped: true,
            ..RunMetadata::default()
        };
        assert_eq!(m.bounces(ModelVariant::FreeFall), 3);
        assert_eq!(m.bounces(ModelVariant::Drag), 5);
        assert!(m.stopped(ModelVariant::FreeFall));
        assert!(!m.stopped(ModelVariant::Drag));
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let json = serde_json::to_value(two_point_result()).unwrap();
        assert!(json.get("freeFall").is_some());
        assert!(json.get("withDrag").is_some());
        let meta = &json["metadata"];
        for key in [
            "totalPoints",
            "endTime",
            "freeFallBounces",
            "dragBounces",
            "freeFallStopped",
            "dragStopped",
        ] {
            assert!(meta.get(key).is_some(), "missing metadata key {key}");
        }
    }
}

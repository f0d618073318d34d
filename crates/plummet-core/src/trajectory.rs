//! Append-only time series recorded for one model.
//!
//! Stored column-wise (`time`, `height`, `velocity`) because that is the
//! shape chart collaborators consume. The three columns always have the
//! same length; [`Trajectory::push`] is the only way to grow them, and
//! decoding rejects columns of unequal length.

use serde::{Deserialize, Serialize};

use crate::error::TrajectoryError;

/// One recorded point of a trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Simulated time (s).
    pub t: f64,
    /// Height above ground (m), clamped to be non-negative.
    pub height: f64,
    /// Signed velocity (m/s).
    pub velocity: f64,
}

/// Time-ordered samples for one model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Columns")]
pub struct Trajectory {
    time: Vec<f64>,
    height: Vec<f64>,
    velocity: Vec<f64>,
}

/// Unchecked wire shape of a [`Trajectory`].
#[derive(Deserialize)]
struct Columns {
    time: Vec<f64>,
    height: Vec<f64>,
    velocity: Vec<f64>,
}

impl TryFrom<Columns> for Trajectory {
    type Error = TrajectoryError;

    fn try_from(c: Columns) -> Result<Self, Self::Error> {
        let len = c.time.len();
        if c.height.len() != len || c.velocity.len() != len {
            return Err(TrajectoryError::ColumnLengthMismatch {
                time: len,
                height: c.height.len(),
                velocity: c.velocity.len(),
            });
        }
        Ok(Self {
            time: c.time,
            height: c.height,
            velocity: c.velocity,
        })
    }
}

impl Trajectory {
    /// An empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty trajectory with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            height: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample. Height is clamped to `>= 0` on the way in.
    pub fn push(&mut self, sample: TrajectorySample) {
        self.time.push(sample.t);
        self.height.push(sample.height.max(0.0));
        self.velocity.push(sample.velocity);
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Time column.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Height column.
    pub fn height(&self) -> &[f64] {
        &self.height
    }

    /// Velocity column.
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Sample at `index`, if recorded.
    pub fn sample(&self, index: usize) -> Option<TrajectorySample> {
        Some(TrajectorySample {
            t: *self.time.get(index)?,
            height: *self.height.get(index)?,
            velocity: *self.velocity.get(index)?,
        })
    }

    /// Most recent sample.
    pub fn last(&self) -> Option<TrajectorySample> {
        self.len().checked_sub(1).and_then(|i| self.sample(i))
    }

    /// Iterate samples in time order.
    pub fn iter(&self) -> impl Iterator<Item = TrajectorySample> + '_ {
        self.time
            .iter()
            .zip(&self.height)
            .zip(&self.velocity)
            .map(|((&t, &height), &velocity)| TrajectorySample {
                t,
                height,
                velocity,
            })
    }

    /// Largest recorded height, or `None` when empty.
    pub fn peak_height(&self) -> Option<f64> {
        self.height.iter().copied().reduce(f64::max)
    }

    /// Index of the first sample after the start that touches the ground.
    ///
    /// Index 0 is skipped so a drop from zero height does not report the
    /// initial condition as a contact.
    pub fn first_contact_index(&self) -> Option<usize> {
        self.height
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, &h)| h == 0.0)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(t: f64, height: f64, velocity: f64) -> TrajectorySample {
        TrajectorySample {
            t,
            height,
            velocity,
        }
    }

    #[test]
    fn push_keeps_columns_aligned() {
        let mut traj = Trajectory::new();
        traj.push(sample(0.0, 2.0, 0.0));
        traj.push(sample(0.1, 1.9, -0.98));
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.time(), &[0.0, 0.1]);
        assert_eq!(traj.height(), &[2.0, 1.9]);
        assert_eq!(traj.velocity(), &[0.0, -0.98]);
    }

    #[test]
    fn push_clamps_negative_height() {
        let mut traj = Trajectory::new();
        traj.push(sample(0.0, -0.25, -3.0));
        assert_eq!(traj.height(), &[0.0]);
        assert_eq!(traj.velocity(), &[-3.0]);
    }

    #[test]
    fn sample_and_last_lookup() {
        let mut traj = Trajectory::with_capacity(4);
        assert!(traj.is_empty());
        assert_eq!(traj.last(), None);
        traj.push(sample(0.0, 1.0, 0.0));
        traj.push(sample(0.5, 0.0, 2.0));
        assert_eq!(traj.sample(1), Some(sample(0.5, 0.0, 2.0)));
        assert_eq!(traj.sample(2), None);
        assert_eq!(traj.last(), Some(sample(0.5, 0.0, 2.0)));
    }

    #[test]
    fn iter_yields_samples_in_order() {
        let mut traj = Trajectory::new();
        for i in 0..5 {
            traj.push(sample(i as f64, 5.0 - i as f64, -1.0));
        }
        let times: Vec<f64> = traj.iter().map(|s| s.t).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn peak_and_first_contact() {
        let mut traj = Trajectory::new();
        for (t, h) in [(0.0, 0.0), (0.1, 0.4), (0.2, 0.6), (0.3, 0.0), (0.4, 0.2)] {
            traj.push(sample(t, h, 0.0));
        }
        assert_eq!(traj.peak_height(), Some(0.6));
        assert_eq!(traj.first_contact_index(), Some(3));
        assert_eq!(Trajectory::new().peak_height(), None);
    }

    #[test]
    fn serializes_column_wise() {
        let mut traj = Trajectory::new();
        traj.push(sample(0.0, 1.0, 0.0));
        let json = serde_json::to_value(&traj).unwrap();
        assert_eq!(json["time"], serde_json::json!([0.0]));
        assert_eq!(json["height"], serde_json::json!([1.0]));
        assert_eq!(json["velocity"], serde_json::json!([0.0]));
    }

    #[test]
    fn decoding_rejects_ragged_columns() {
        let err = serde_json::from_str::<Trajectory>(
            r#"{"time":[0.0,0.01],"height":[1.0],"velocity":[0.0,-0.1]}"#,
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("column lengths differ: time 2, height 1, velocity 2"));

        let traj: Trajectory =
            serde_json::from_str(r#"{"time":[0.0],"height":[1.0],"velocity":[0.0]}"#).unwrap();
        assert_eq!(traj.len(), 1);
    }
}

//! Ground-contact resolution between two consecutive samples.
//!
//! Impact is located by linear interpolation inside the step, which
//! assumes the body crosses the ground at most once per tick. With a
//! large `dt` a fast rebound can leave and re-enter the ground within a
//! single step and the second crossing goes unseen.

use plummet_core::BodyState;

/// Outcome of [`resolve_bounce`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceResolution {
    /// State to adopt for the next tick.
    pub state: BodyState,
    /// Whether a ground impact was resolved.
    pub bounced: bool,
    /// Time from the start of the step to impact (s); 0 when no bounce.
    pub impact_time: f64,
}

/// Resolve ground penetration between `prev` and the candidate `next`.
///
/// Triggers when `next.y <= 0` and `next.v < 0`. The impact fraction
/// `f = -prev.y / (next.y - prev.y)` places the crossing inside the step
/// (0 when the two heights coincide), the impact velocity is interpolated
/// at `f`, and the body leaves the ground at height 0 with velocity
/// `-e · v_impact`.
///
/// A body sitting on the ground but moving upward (`next.v >= 0`) is
/// passed through unchanged.
///
/// ```
/// use plummet_core::BodyState;
/// use plummet_dynamics::resolve_bounce;
///
/// let prev = BodyState::new(0.1, -9.0);
/// let r = resolve_bounce(prev, BodyState::new(-0.1, -11.0), 0.01, 0.7);
/// assert!(r.bounced);
/// assert_eq!(r.state.y, 0.0);
/// assert!((r.state.v - 7.0).abs() < 1e-12);
/// assert!((r.impact_time - 0.005).abs() < 1e-12);
/// ```
pub fn resolve_bounce(prev: BodyState, next: BodyState, dt: f64, e: f64) -> BounceResolution {
    let penetrating = next.y <= 0.0 && next.v < 0.0;
    if !penetrating {
        return BounceResolution {
            state: next,
            bounced: false,
            impact_time: 0.0,
        };
    }

    let dy = next.y - prev.y;
    let fraction = if dy == 0.0 { 0.0 } else { -prev.y / dy };
    let v_impact = prev.v + fraction * (next.v - prev.v);

    BounceResolution {
        state: BodyState::new(0.0, -e * v_impact),
        bounced: true,
        impact_time: fraction * dt,
    }
}

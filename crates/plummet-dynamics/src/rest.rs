//! Rest detection.

use plummet_core::REST_HEIGHT_EPSILON;

/// Whether a body at height `y` moving at `v` has stopped.
///
/// True iff `|y| < 1e-6` and `|v| < v_stop`. Both bounds are strict.
#[inline]
pub fn is_at_rest(y: f64, v: f64, v_stop: f64) -> bool {
    y.abs() < REST_HEIGHT_EPSILON && v.abs() < v_stop
}

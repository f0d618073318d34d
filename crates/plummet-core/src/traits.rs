//! Observer trait for progress reporting during a run.

/// Receives progress updates from the simulation driver.
///
/// Called on the driver's thread between ticks, so implementations should
/// return quickly. `percent` lies in `[0, 100]`; `current_time` is the
/// simulated time (s) of the tick being reported and strictly increases
/// across calls within one run.
///
/// Any `FnMut(f64, f64)` closure is an observer:
///
/// ```
/// use plummet_core::ProgressObserver;
///
/// let mut seen = Vec::new();
/// let mut observer = |percent: f64, t: f64| seen.push((percent, t));
/// observer.on_progress(50.0, 30.0);
/// assert_eq!(seen, vec![(50.0, 30.0)]);
/// ```
pub trait ProgressObserver {
    /// Called every progress interval with completion percent and simulated time.
    fn on_progress(&mut self, percent: f64, current_time: f64);
}

impl<F> ProgressObserver for F
where
    F: FnMut(f64, f64),
{
    fn on_progress(&mut self, percent: f64, current_time: f64) {
        self(percent, current_time)
    }
}

/// Observer that discards every update.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _percent: f64, _current_time: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(observer: &mut dyn ProgressObserver) {
        for i in 0..3 {
            observer.on_progress(i as f64 * 50.0, i as f64);
        }
    }

    #[test]
    fn closure_observer_receives_updates() {
        let mut count = 0;
        let mut last = (0.0, 0.0);
        let mut obs = |p: f64, t: f64| {
            count += 1;
            last = (p, t);
        };
        drive(&mut obs);
        assert_eq!(count, 3);
        assert_eq!(last, (100.0, 2.0));
    }

    #[test]
    fn no_progress_is_inert() {
        drive(&mut NoProgress);
    }
}

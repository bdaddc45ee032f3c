use std::time::Duration;

/// Trailing-edge throttle.
///
/// The first offered value opens a window of `window` length; later values
/// inside the window replace the pending one. When the window closes,
/// [`Throttle::flush`] hands out exactly one value (the latest). Nothing is
/// queued, so the accepted rate never exceeds one value per window.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    window: Duration,
    pending: Option<(T, Duration)>,
}

impl<T> Throttle<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Offer a raw value at `now`. Returns the deadline of the window that now
    /// holds it.
    pub fn offer(&mut self, now: Duration, value: T) -> Duration {
        let deadline = self.deadline().unwrap_or(now + self.window);
        self.pending = Some((value, deadline));
        deadline
    }

    /// Deadline of the open window, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(_, d)| *d)
    }

    /// Take the pending value if its window has closed by `now`. Returns the
    /// value together with the window deadline, which is the acceptance time.
    pub fn flush(&mut self, now: Duration) -> Option<(T, Duration)> {
        if self.deadline().is_some_and(|d| d <= now) {
            self.pending.take()
        } else {
            None
        }
    }
}

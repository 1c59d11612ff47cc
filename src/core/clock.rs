use std::cell::Cell;

/// Millisecond time source handed to the wheel by its callers.
///
/// The wheel itself never reads the time; gesture handlers pass `now_ms()`
/// in so that tests can drive it deterministically.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// `performance.now()` in the browser, a monotonic clock on the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantClock;

impl Clock for InstantClock {
    #[inline]
    fn now_ms(&self) -> f64 {
        instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

use crate::utils::Float;
use std::time::Instant;

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed whole seconds.
    pub fn elapsed_secs(&self) -> u64 {
        (Instant::now() - self.start).as_secs()
    }

    /// Returns elapsed seconds with fraction.
    pub fn elapsed_secs_as_float(&self) -> Float {
        (Instant::now() - self.start).as_secs_f64()
    }
}

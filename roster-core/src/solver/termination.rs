#[cfg(test)]
#[path = "../../tests/unit/solver/termination_test.rs"]
mod termination_test;

use crate::utils::{Float, compare_floats};

/// Describes a progress of an annealing run.
#[derive(Clone, Debug, Default)]
pub struct SearchProgress {
    /// Amount of iterations done.
    pub iteration: usize,
    /// Current temperature.
    pub temperature: Float,
    /// Amount of iterations since the best solution was improved.
    pub iterations_since_improvement: usize,
    /// Elapsed time since the run start.
    pub elapsed_secs: Float,
}

/// A trait which specifies criteria when the annealing run should stop.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, progress: &SearchProgress) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, progress: &SearchProgress) -> Float;
}

/// A termination criteria which is in terminated state when maximum amount of iterations is exceeded.
pub struct MaxIterations {
    limit: usize,
}

impl MaxIterations {
    /// Creates a new instance of `MaxIterations`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxIterations {
    fn is_termination(&self, progress: &SearchProgress) -> bool {
        progress.iteration >= self.limit
    }

    fn estimate(&self, progress: &SearchProgress) -> Float {
        if self.limit == 0 { 1. } else { (progress.iteration as Float / self.limit as Float).min(1.) }
    }
}

/// A termination criteria which is in terminated state when max time elapsed.
pub struct MaxTime {
    limit_in_secs: Float,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, progress: &SearchProgress) -> bool {
        progress.elapsed_secs > self.limit_in_secs
    }

    fn estimate(&self, progress: &SearchProgress) -> Float {
        if self.limit_in_secs <= 0. { 1. } else { (progress.elapsed_secs / self.limit_in_secs).min(1.) }
    }
}

/// A termination criteria which is in terminated state when temperature drops below the threshold.
pub struct MinTemperature {
    threshold: Float,
}

impl MinTemperature {
    /// Creates a new instance of `MinTemperature`.
    pub fn new(threshold: Float) -> Self {
        Self { threshold }
    }
}

impl Termination for MinTemperature {
    fn is_termination(&self, progress: &SearchProgress) -> bool {
        progress.temperature < self.threshold
    }

    fn estimate(&self, progress: &SearchProgress) -> Float {
        if progress.temperature <= self.threshold { 1. } else { (self.threshold / progress.temperature).clamp(0., 1.) }
    }
}

/// A termination criteria which is in terminated state when the best solution is not improved
/// within given amount of iterations.
pub struct StallIterations {
    limit: usize,
}

impl StallIterations {
    /// Creates a new instance of `StallIterations`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for StallIterations {
    fn is_termination(&self, progress: &SearchProgress) -> bool {
        progress.iterations_since_improvement >= self.limit
    }

    fn estimate(&self, progress: &SearchProgress) -> Float {
        if self.limit == 0 { 1. } else { (progress.iterations_since_improvement as Float / self.limit as Float).min(1.) }
    }
}

/// A termination which encapsulates multiple termination criteria: any of them stops the run.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, progress: &SearchProgress) -> bool {
        self.terminations.iter().any(|t| t.is_termination(progress))
    }

    fn estimate(&self, progress: &SearchProgress) -> Float {
        self.terminations.iter().map(|t| t.estimate(progress)).max_by(|a, b| compare_floats(*a, *b)).unwrap_or(0.)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{DefaultRandom, Random, Timer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A logger type which is called with various information regarding the work done by the planner.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies a computational quota for an annealing run. Once reached, the run stops issuing
/// new iterations after the current one completes.
pub trait Quota {
    /// Returns true when the computation quota is reached.
    fn is_reached(&self) -> bool;
}

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: f64,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// A quota which is reached when an external caller raises the shared interruption flag.
pub struct InterruptionQuota {
    should_interrupt: Arc<AtomicBool>,
}

impl InterruptionQuota {
    /// Creates a new instance of `InterruptionQuota` observing the given flag.
    pub fn new(should_interrupt: Arc<AtomicBool>) -> Self {
        Self { should_interrupt }
    }
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.should_interrupt.load(Ordering::Relaxed)
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// An amount of independent annealing runs executed in parallel.
    pub parallelism: usize,

    /// A base seed for repeatable runs, each run uses `seed + run_index`.
    pub seed: Option<u64>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        parallelism: usize,
        seed: Option<u64>,
        logger: InfoLogger,
    ) -> Self {
        Self { random, quota, parallelism: parallelism.max(1), seed, logger }
    }

    /// Creates a random generator for the run with given index. Must be called on the thread which
    /// executes the run: repeatable generators reseed the thread local rng.
    pub fn create_run_random(&self, run_idx: usize) -> Arc<dyn Random + Send + Sync> {
        match self.seed {
            Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed.wrapping_add(run_idx as u64))),
            None => self.random.clone(),
        }
    }

    /// Checks whether the quota, if any, is reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), None, 1, None, Arc::new(|msg: &str| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}

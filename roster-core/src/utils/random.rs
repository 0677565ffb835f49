#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the half-open interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Flips a coin and returns true if it is "heads", false otherwise.
    fn is_head_not_tails(&self) -> bool;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Returns an index from collection with probability weight.
    fn weighted(&self, weights: &[Float]) -> usize;

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation which uses a thread local small rng.
#[derive(Default)]
pub struct DefaultRandom {}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` which reseeds the rng of the current thread, so that
    /// a sequential run on this thread produces the same sequence of values.
    pub fn new_repeatable(seed: u64) -> Self {
        DEFAULT_RNG.with(|rng| *rng.borrow_mut() = SmallRng::seed_from_u64(seed));
        Self {}
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max + 1)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    fn is_head_not_tails(&self) -> bool {
        self.get_rng().gen_bool(0.5)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.get_rng().gen_bool(probability.clamp(0., 1.))
    }

    fn weighted(&self, weights: &[Float]) -> usize {
        let total: Float = weights.iter().sum();
        if total <= 0. {
            return 0;
        }

        let mut target = self.uniform_real(0., total);
        weights
            .iter()
            .position(|&weight| {
                target -= weight;
                target < 0.
            })
            .unwrap_or(weights.len() - 1)
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen { rng: DEFAULT_RNG.with(|rng| rng.clone()) }
    }
}

thread_local! {
    static DEFAULT_RNG: Rc<RefCell<SmallRng>> = Rc::new(RefCell::new(SmallRng::from_entropy()));
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Rc<RefCell<SmallRng>>,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` with fixed seed which is useful for tests.
    pub fn new_repeatable() -> Self {
        Self { rng: Rc::new(RefCell::new(SmallRng::seed_from_u64(0))) }
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.borrow_mut().next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.borrow_mut().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.borrow_mut().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.borrow_mut().try_fill_bytes(dest)
    }
}

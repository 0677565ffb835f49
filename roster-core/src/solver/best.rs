#[cfg(test)]
#[path = "../../tests/unit/solver/best_test.rs"]
mod best_test;

use crate::models::solution::{RunState, Solution};
use crate::models::{PenaltyInfo, TotalInfo};
use crate::utils::{DIFF_TOLERANCE, Float};

const BUCKET_COUNT: usize = 101;

/// Keeps the best solution by cost together with the best penalty free solution per satisfaction
/// percentage.
pub struct BestSolutions {
    best: Solution,
    buckets: Vec<Option<Solution>>,
}

impl BestSolutions {
    /// Creates a new instance of `BestSolutions` starting with the given state.
    pub fn new(state: &RunState) -> Self {
        let mut best_solutions = Self { best: state.solution(), buckets: vec![None; BUCKET_COUNT] };
        best_solutions.try_add_penalty_free(state);

        best_solutions
    }

    /// Tries to improve known solutions with the current state. Returns true if the best solution by
    /// cost is improved.
    pub fn try_improve(&mut self, state: &RunState) -> bool {
        let is_improvement = state.total().stats.cost + DIFF_TOLERANCE < self.best.total.stats.cost;
        if is_improvement {
            self.best = state.solution();
        }

        self.try_add_penalty_free(state);

        is_improvement
    }

    /// Returns the best solution by cost.
    pub fn best(&self) -> &Solution {
        &self.best
    }

    /// Returns penalty free solutions which are not dominated by cost and satisfaction, ordered by
    /// satisfaction descending.
    pub fn pareto_front(&self) -> Vec<&Solution> {
        self.buckets
            .iter()
            .rev()
            .flatten()
            .fold((Vec::new(), Float::MAX), |(mut front, min_cost), solution| {
                let cost = solution.total.stats.cost;
                if cost < min_cost {
                    front.push(solution);
                    (front, cost)
                } else {
                    (front, min_cost)
                }
            })
            .0
    }

    /// Consumes instance and returns the best solution and the pareto front.
    pub fn into_parts(self) -> (Solution, Vec<Solution>) {
        let front = self.pareto_front().into_iter().cloned().collect();
        (self.best, front)
    }

    fn try_add_penalty_free(&mut self, state: &RunState) {
        let total = state.total();
        if !is_penalty_free(total) {
            return;
        }

        let bucket = total
            .stats
            .satisfaction_score
            .map_or(BUCKET_COUNT - 1, |score| ((score.clamp(0., 1.) * 100.).floor() as usize).min(BUCKET_COUNT - 1));

        let is_better = self.buckets[bucket]
            .as_ref()
            .is_none_or(|existing| total.stats.cost + DIFF_TOLERANCE < existing.total.stats.cost);

        if is_better {
            self.buckets[bucket] = Some(state.solution());
        }
    }
}

/// Checks whether the total has no soft constraint violations.
pub fn is_penalty_free(total: &TotalInfo) -> bool {
    total.penalty == PenaltyInfo::default() && total.external_shift_count_violation == 0
}

#[cfg(test)]
#[path = "../../tests/unit/operations/sampler_test.rs"]
mod sampler_test;

use super::*;
use crate::utils::{Float, Random};
use serde::{Deserialize, Serialize};

const KINDS: [OperationKind; 4] =
    [OperationKind::AssignInternal, OperationKind::AssignExternal, OperationKind::Swap, OperationKind::ToggleHotel];

/// Specifies relative probabilities of operation kinds.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationWeights {
    /// A weight of moving an activity to an internal driver.
    pub assign_internal: Float,
    /// A weight of moving an activity to an external driver.
    pub assign_external: Float,
    /// A weight of swapping drivers of two activities.
    pub swap: Float,
    /// A weight of toggling a hotel stay.
    pub toggle_hotel: Float,
}

impl Default for OperationWeights {
    fn default() -> Self {
        Self { assign_internal: 0.5, assign_external: 0.1, swap: 0.3, toggle_hotel: 0.1 }
    }
}

/// Samples random operations which are feasible in the current state.
pub struct OperationSampler {
    weights: [Float; 4],
    max_attempts: usize,
}

impl OperationSampler {
    /// Creates a new instance of `OperationSampler`.
    pub fn new(weights: &OperationWeights, max_attempts: usize) -> Self {
        Self {
            weights: [weights.assign_internal, weights.assign_external, weights.swap, weights.toggle_hotel],
            max_attempts: max_attempts.max(1),
        }
    }

    /// Samples and evaluates operations until a feasible one is found. Returns `None` when all attempts
    /// are exhausted.
    pub fn sample(&self, state: &RunState, random: &(dyn Random + Send + Sync)) -> Option<(Box<dyn Operation>, StateDelta)> {
        (0..self.max_attempts).find_map(|_| {
            let kind = KINDS[random.weighted(&self.weights)];
            let operation = self.sample_candidate(kind, state, random)?;

            match operation.evaluate(state) {
                Feasibility::Feasible(delta) => Some((operation, delta)),
                Feasibility::Infeasible(_) => None,
            }
        })
    }

    /// Samples a non degenerate candidate of the given kind without evaluating it.
    pub fn sample_candidate(
        &self,
        kind: OperationKind,
        state: &RunState,
        random: &(dyn Random + Send + Sync),
    ) -> Option<Box<dyn Operation>> {
        if state.problem().activities.is_empty() {
            return None;
        }

        match kind {
            OperationKind::AssignInternal => {
                self.sample_assign_internal_candidate(state, random).map(|op| Box::new(op) as Box<dyn Operation>)
            }
            OperationKind::AssignExternal => {
                self.sample_assign_external_candidate(state, random).map(|op| Box::new(op) as Box<dyn Operation>)
            }
            OperationKind::Swap => self.sample_swap_candidate(state, random).map(|op| Box::new(op) as Box<dyn Operation>),
            OperationKind::ToggleHotel => {
                let activity = random_index(random, state.problem().activities.len());
                Some(Box::new(ToggleHotelOperation::new(state, activity)))
            }
        }
    }

    /// Samples an activity and an internal driver different from the current one.
    pub fn sample_assign_internal_candidate(
        &self,
        state: &RunState,
        random: &(dyn Random + Send + Sync),
    ) -> Option<AssignOperation> {
        let problem = state.problem();
        let internal_drivers = problem.internal_drivers();
        if internal_drivers.is_empty() {
            return None;
        }

        (0..self.max_attempts).find_map(|_| {
            let activity = random_index(random, problem.activities.len());
            let slot = internal_drivers[random_index(random, internal_drivers.len())];

            (state.driver_of(activity) != slot).then(|| AssignOperation::internal(activity, slot))
        })
    }

    /// Samples an activity and an external driver different from the current one. Members of a type are
    /// interchangeable, so only members which already work and a single idle member are considered.
    pub fn sample_assign_external_candidate(
        &self,
        state: &RunState,
        random: &(dyn Random + Send + Sync),
    ) -> Option<AssignOperation> {
        let problem = state.problem();
        let types = problem.external_types.iter().filter(|external_type| !external_type.drivers.is_empty()).collect::<Vec<_>>();
        if types.is_empty() {
            return None;
        }

        (0..self.max_attempts).find_map(|_| {
            let activity = random_index(random, problem.activities.len());
            let external_type = types[random_index(random, types.len())];

            let working = external_type.drivers.iter().filter(|&&slot| !state.driver_path(slot).is_empty());
            let idle = external_type.drivers.iter().find(|&&slot| state.driver_path(slot).is_empty());
            let candidates = working.chain(idle).copied().collect::<Vec<_>>();

            let slot = candidates[random_index(random, candidates.len())];

            (state.driver_of(activity) != slot).then(|| AssignOperation::external(activity, slot))
        })
    }

    /// Samples two activities which are assigned to different drivers.
    pub fn sample_swap_candidate(&self, state: &RunState, random: &(dyn Random + Send + Sync)) -> Option<SwapOperation> {
        let activity_count = state.problem().activities.len();
        if activity_count < 2 {
            return None;
        }

        (0..self.max_attempts).find_map(|_| {
            let first = random_index(random, activity_count);
            let second = random_index(random, activity_count);

            (state.driver_of(first) != state.driver_of(second)).then(|| SwapOperation::new(first, second))
        })
    }
}

fn random_index(random: &(dyn Random + Send + Sync), length: usize) -> usize {
    random.uniform_int(0, length as i32 - 1) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/solver/initial_test.rs"]
mod initial_test;

use crate::models::Problem;
use crate::models::solution::RunState;
use crate::utils::{GenericResult, Random};
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Creates an initial run state assigning activities one by one in start time order: internal drivers
/// in random order are tried first, then external drivers in type order. An activity which nobody can
/// take without an overlap goes to a random external driver, or to a random driver when there are no
/// external ones. No hotel stays are planned.
pub fn create_greedy_state(problem: Arc<Problem>, random: &(dyn Random + Send + Sync)) -> GenericResult<RunState> {
    let mut internal_drivers = problem.internal_drivers().to_vec();
    internal_drivers.shuffle(&mut random.get_rng());

    let external_drivers = problem
        .external_types
        .iter()
        .flat_map(|external_type| external_type.drivers.iter().copied())
        .collect::<Vec<_>>();

    let mut last_activities: Vec<Option<usize>> = vec![None; problem.drivers.len()];
    let mut assignment = Vec::with_capacity(problem.activities.len());

    for (idx, activity) in problem.activities.iter().enumerate() {
        let can_take = |slot: usize| {
            problem.drivers[slot].is_qualified(activity)
                && last_activities[slot]
                    .is_none_or(|last| problem.is_valid_succession(&problem.activities[last], activity))
        };

        let slot = internal_drivers
            .iter()
            .chain(external_drivers.iter())
            .copied()
            .find(|&slot| can_take(slot))
            .unwrap_or_else(|| {
                if external_drivers.is_empty() {
                    random.uniform_int(0, problem.drivers.len() as i32 - 1) as usize
                } else {
                    external_drivers[random.uniform_int(0, external_drivers.len() as i32 - 1) as usize]
                }
            });

        last_activities[slot] = Some(idx);
        assignment.push(slot);
    }

    let hotel_flags = vec![false; problem.activities.len()];

    RunState::new(problem, assignment, hotel_flags)
}

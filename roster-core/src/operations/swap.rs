#[cfg(test)]
#[path = "../../tests/unit/operations/swap_test.rs"]
mod swap_test;

use super::*;
use crate::costs::{PathEdit, create_state_delta, driver_delta};
use crate::models::solution::DriverDeltas;

/// Exchanges drivers of two activities in one atomic move.
#[derive(Clone, Debug)]
pub struct SwapOperation {
    first: usize,
    second: usize,
}

impl SwapOperation {
    /// Creates a new instance of `SwapOperation`.
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Returns swapped activities.
    pub fn activities(&self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl Operation for SwapOperation {
    fn kind(&self) -> OperationKind {
        OperationKind::Swap
    }

    fn evaluate(&self, state: &RunState) -> Feasibility {
        let (first, second) = (self.first, self.second);
        let (first_slot, second_slot) = (state.driver_of(first), state.driver_of(second));

        if first_slot == second_slot {
            return Feasibility::Infeasible(Infeasibility::Degenerate);
        }

        let insertions = check_insertion(state, first, second_slot, Some(second))
            .and_then(|_| check_insertion(state, second, first_slot, Some(first)));
        if let Err(infeasibility) = insertions {
            return Feasibility::Infeasible(infeasibility);
        }

        let mut drivers = DriverDeltas::default();
        drivers.push((first_slot, driver_delta(state, first_slot, &[PathEdit::Remove(first), PathEdit::Insert(second)])));
        drivers
            .push((second_slot, driver_delta(state, second_slot, &[PathEdit::Remove(second), PathEdit::Insert(first)])));

        Feasibility::Feasible(create_state_delta(state, drivers))
    }

    fn commit(&self, state: &mut RunState, delta: &StateDelta) {
        let (first_slot, second_slot) = (state.driver_of(self.first), state.driver_of(self.second));

        state.reassign(self.first, second_slot);
        state.reassign(self.second, first_slot);
        state.apply_delta(delta);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/operations/assign_test.rs"]
mod assign_test;

use super::*;
use crate::costs::{PathEdit, create_state_delta, driver_delta};
use crate::models::solution::DriverDeltas;

/// Moves a single activity from its current driver to another one.
#[derive(Clone, Debug)]
pub struct AssignOperation {
    activity: usize,
    new_slot: usize,
    kind: OperationKind,
}

impl AssignOperation {
    /// Creates an operation which moves the activity to an internal driver.
    pub fn internal(activity: usize, new_slot: usize) -> Self {
        Self { activity, new_slot, kind: OperationKind::AssignInternal }
    }

    /// Creates an operation which moves the activity to an external driver.
    pub fn external(activity: usize, new_slot: usize) -> Self {
        Self { activity, new_slot, kind: OperationKind::AssignExternal }
    }

    /// Returns the moved activity.
    pub fn activity(&self) -> usize {
        self.activity
    }

    /// Returns the new driver slot.
    pub fn new_slot(&self) -> usize {
        self.new_slot
    }
}

impl Operation for AssignOperation {
    fn kind(&self) -> OperationKind {
        self.kind
    }

    fn evaluate(&self, state: &RunState) -> Feasibility {
        let old_slot = state.driver_of(self.activity);
        if old_slot == self.new_slot {
            return Feasibility::Infeasible(Infeasibility::Degenerate);
        }

        if let Err(infeasibility) = check_insertion(state, self.activity, self.new_slot, None) {
            return Feasibility::Infeasible(infeasibility);
        }

        let mut drivers = DriverDeltas::default();
        drivers.push((old_slot, driver_delta(state, old_slot, &[PathEdit::Remove(self.activity)])));
        drivers.push((self.new_slot, driver_delta(state, self.new_slot, &[PathEdit::Insert(self.activity)])));

        Feasibility::Feasible(create_state_delta(state, drivers))
    }

    fn commit(&self, state: &mut RunState, delta: &StateDelta) {
        state.reassign(self.activity, self.new_slot);
        state.apply_delta(delta);
    }
}

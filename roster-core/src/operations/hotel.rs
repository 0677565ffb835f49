#[cfg(test)]
#[path = "../../tests/unit/operations/hotel_test.rs"]
mod hotel_test;

use super::*;
use crate::costs::{PathEdit, create_state_delta, driver_delta};
use crate::models::solution::DriverDeltas;

/// Adds or removes a hotel stay after an activity. A hotel stay always ends the shift, so the
/// operation may split one shift into two or merge two shifts into one.
#[derive(Clone, Debug)]
pub struct ToggleHotelOperation {
    activity: usize,
    is_addition: bool,
}

impl ToggleHotelOperation {
    /// Creates an operation which flips the current hotel stay flag of the activity.
    pub fn new(state: &RunState, activity: usize) -> Self {
        Self { activity, is_addition: !state.is_hotel_after(activity) }
    }

    /// Returns true if the operation adds a hotel stay.
    pub fn is_addition(&self) -> bool {
        self.is_addition
    }
}

impl Operation for ToggleHotelOperation {
    fn kind(&self) -> OperationKind {
        OperationKind::ToggleHotel
    }

    fn evaluate(&self, state: &RunState) -> Feasibility {
        if state.is_hotel_after(self.activity) == self.is_addition {
            return Feasibility::Infeasible(Infeasibility::Degenerate);
        }

        let slot = state.driver_of(self.activity);

        let mut drivers = DriverDeltas::default();
        drivers.push((slot, driver_delta(state, slot, &[PathEdit::ToggleHotel(self.activity)])));

        Feasibility::Feasible(create_state_delta(state, drivers))
    }

    fn commit(&self, state: &mut RunState, delta: &StateDelta) {
        state.set_hotel_after(self.activity, self.is_addition);
        state.apply_delta(delta);
    }
}

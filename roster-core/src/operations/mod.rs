//! Operations which change a run state.
//!
//! Every operation is evaluated against the current state without mutating it and produces a complete
//! state change. The change is committed only when the annealing loop accepts it.

use crate::models::solution::{RunState, StateDelta};

mod assign;
pub use self::assign::AssignOperation;

mod swap;
pub use self::swap::SwapOperation;

mod hotel;
pub use self::hotel::ToggleHotelOperation;

mod sampler;
pub use self::sampler::{OperationSampler, OperationWeights};

/// Specifies operation kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    /// Moves an activity to an internal driver.
    AssignInternal,
    /// Moves an activity to an external driver.
    AssignExternal,
    /// Exchanges drivers of two activities.
    Swap,
    /// Adds or removes a hotel stay after an activity.
    ToggleHotel,
}

/// Specifies why an operation cannot be applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Infeasibility {
    /// The operation changes nothing, e.g. the new driver equals the current one.
    Degenerate,
    /// The driver lacks a qualification required by the activity.
    MissingQualification,
    /// The activity time window overlaps another activity of the driver. A succession which only
    /// lacks travel time is allowed and penalized as an overlap.
    TimeOverlap,
}

/// A result of operation evaluation.
#[derive(Debug)]
pub enum Feasibility {
    /// The operation can be applied with the given state change.
    Feasible(StateDelta),
    /// The operation cannot be applied.
    Infeasible(Infeasibility),
}

/// A change of a run state which is evaluated before it is committed.
pub trait Operation {
    /// Returns operation kind.
    fn kind(&self) -> OperationKind;

    /// Evaluates a state change caused by the operation. Must not mutate the state.
    fn evaluate(&self, state: &RunState) -> Feasibility;

    /// Applies the operation and folds the previously evaluated change into accumulators.
    fn commit(&self, state: &mut RunState, delta: &StateDelta);
}

/// Checks that the activity can be worked by the driver given its current path, ignoring the activity
/// which leaves the path within the same operation.
pub(crate) fn check_insertion(
    state: &RunState,
    activity: usize,
    slot: usize,
    leaving: Option<usize>,
) -> Result<(), Infeasibility> {
    let problem = state.problem();
    let target = &problem.activities[activity];

    if !problem.drivers[slot].is_qualified(target) {
        return Err(Infeasibility::MissingQualification);
    }

    let path = state.driver_path(slot);
    let position = state.paths().insert_position(slot, activity);
    let is_kept = |other: &&usize| Some(**other) != leaving;

    let previous = path[..position].iter().rev().find(is_kept).map(|&idx| &problem.activities[idx]);
    let next = path[position..].iter().find(is_kept).map(|&idx| &problem.activities[idx]);

    let is_overlapping = previous.into_iter().chain(next).any(|other| other.overlaps(target));

    if is_overlapping { Err(Infeasibility::TimeOverlap) } else { Ok(()) }
}

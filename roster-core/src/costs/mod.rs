//! Cost-delta calculators.
//!
//! A change of the assignment is localized to one or two driver paths: only shifts around edited
//! positions are re-evaluated, and the difference between their new and old versions is the delta.
//! The same shift walk is used by the full recomputation, so both ways agree by construction.

mod shift;
pub use self::shift::*;

mod range;
pub use self::range::*;

mod external;
pub use self::external::*;

mod satisfaction;
pub use self::satisfaction::*;

mod full;
pub use self::full::*;

use crate::models::TotalInfo;
use crate::models::solution::{DriverDeltas, RunState, StateDelta};
use crate::utils::Float;

/// Creates a complete state change from driver changes: external types and the global total
/// including satisfaction score are derived from them.
pub fn create_state_delta(state: &RunState, drivers: DriverDeltas) -> StateDelta {
    let externals = external_deltas(state, &drivers);

    let mut total = TotalInfo::zero_with_score();
    drivers.iter().for_each(|(_, delta)| total.add_driver_info(delta));
    externals.iter().for_each(|(_, delta)| total.add_external_info(delta));
    total.stats.satisfaction_score = satisfaction_score_delta(state, &drivers);

    StateDelta { total, drivers, externals }
}

/// Returns a change of the global satisfaction score. The score is not linear in driver infos, so it is
/// computed twice: with the current driver satisfactions and with changed ones.
pub fn satisfaction_score_delta(state: &RunState, drivers: &DriverDeltas) -> Option<Float> {
    let problem = state.problem();
    let current = |slot: usize| state.driver_info(slot).stats.driver_satisfaction;
    let changed = |slot: usize| {
        drivers
            .iter()
            .filter(|(other, _)| *other == slot)
            .fold(current(slot), |acc, (_, delta)| acc + delta.stats.driver_satisfaction)
    };

    let old_score = satisfaction_score(problem, current)?;
    let new_score = satisfaction_score(problem, changed)?;

    Some(new_score - old_score)
}

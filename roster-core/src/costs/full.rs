#[cfg(test)]
#[path = "../../tests/unit/costs/full_test.rs"]
mod full_test;

use super::*;
use crate::models::problem::Problem;
use crate::models::solution::DriverPaths;
use crate::models::{DriverInfo, ExternalTypeInfo, TotalInfo};

/// Accumulators computed from scratch.
pub struct FullInfo {
    /// Per driver infos indexed by slot.
    pub driver_infos: Vec<DriverInfo>,
    /// Per external type infos indexed by type.
    pub external_infos: Vec<ExternalTypeInfo>,
    /// Global info.
    pub total: TotalInfo,
}

/// Computes all accumulators from the assignment and hotel stays alone.
pub fn compute_full_info(problem: &Problem, paths: &DriverPaths, hotel_flags: &[bool]) -> FullInfo {
    let driver_infos = (0..problem.drivers.len())
        .map(|slot| compute_driver_info(problem, slot, paths.path(slot), hotel_flags))
        .collect::<Vec<_>>();

    let external_infos = problem
        .external_types
        .iter()
        .map(|external_type| {
            let shift_count = external_type.drivers.iter().map(|&slot| driver_infos[slot].shift_count).sum();
            ExternalTypeInfo::with_shift_count(external_type, shift_count)
        })
        .collect::<Vec<_>>();

    let mut total = TotalInfo::zero_with_score();
    driver_infos.iter().for_each(|info| total.add_driver_info(info));
    external_infos.iter().for_each(|info| total.add_external_info(info));
    total.stats.satisfaction_score =
        satisfaction_score(problem, |slot| driver_infos[slot].stats.driver_satisfaction);

    FullInfo { driver_infos, external_infos, total }
}

/// Computes info of a single driver path from scratch.
pub fn compute_driver_info(problem: &Problem, slot: usize, path: &[usize], hotel_flags: &[bool]) -> DriverInfo {
    let raw = evaluate_window(
        problem,
        &problem.drivers[slot],
        path,
        |activity| hotel_flags[activity],
        WindowContext::default(),
    );

    finish_full_info(problem, slot, raw)
}

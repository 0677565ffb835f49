#[cfg(test)]
#[path = "../../../tests/unit/models/solution/state_test.rs"]
mod state_test;

use super::{DriverPaths, StateDelta};
use crate::costs::{CriterionSatisfaction, FullInfo, compute_full_info, satisfaction_breakdown};
use crate::models::{DriverInfo, ExternalTypeInfo, Problem, TotalInfo};
use crate::utils::{GenericError, GenericResult};
use serde::Serialize;
use std::sync::Arc;

/// A snapshot of a run state which is handed over to an exporter.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Maps activity index to driver slot.
    pub assignment: Vec<usize>,
    /// Hotel stay flags per activity.
    pub hotel_flags: Vec<bool>,
    /// Global accumulated info.
    pub total: TotalInfo,
    /// Per driver accumulated info.
    pub driver_infos: Vec<DriverInfo>,
    /// Per external type accumulated info.
    pub external_infos: Vec<ExternalTypeInfo>,
}

/// Keeps the mutable state of a single annealing run. The only writer is an operation commit
/// or a full resynchronisation.
pub struct RunState {
    problem: Arc<Problem>,
    assignment: Vec<usize>,
    hotel_flags: Vec<bool>,
    paths: DriverPaths,
    driver_infos: Vec<DriverInfo>,
    external_infos: Vec<ExternalTypeInfo>,
    total: TotalInfo,
}

impl RunState {
    /// Creates a new run state from an initial assignment and hotel stays, accumulators are
    /// computed from scratch.
    pub fn new(problem: Arc<Problem>, assignment: Vec<usize>, hotel_flags: Vec<bool>) -> GenericResult<Self> {
        let activity_count = problem.activities.len();
        if assignment.len() != activity_count || hotel_flags.len() != activity_count {
            return Err(format!(
                "expected assignment and hotel flags for {activity_count} activities, got {} and {}",
                assignment.len(),
                hotel_flags.len()
            )
            .into());
        }

        if let Some(activity) = assignment.iter().position(|&slot| slot >= problem.drivers.len()) {
            return Err(format!("activity {activity} is assigned to unknown driver").into());
        }

        let paths = DriverPaths::new(problem.drivers.len(), assignment.as_slice());
        let FullInfo { driver_infos, external_infos, total } = compute_full_info(&problem, &paths, &hotel_flags);

        Ok(Self { problem, assignment, hotel_flags, paths, driver_infos, external_infos, total })
    }

    /// Creates a new run state from the solution snapshot.
    pub fn from_solution(problem: Arc<Problem>, solution: &Solution) -> GenericResult<Self> {
        Self::new(problem, solution.assignment.clone(), solution.hotel_flags.clone())
    }

    /// Returns problem definition.
    pub fn problem(&self) -> &Problem {
        self.problem.as_ref()
    }

    /// Returns a shared reference to problem definition.
    pub fn problem_ref(&self) -> Arc<Problem> {
        self.problem.clone()
    }

    /// Returns assignment which maps activity index to driver slot.
    pub fn assignment(&self) -> &[usize] {
        self.assignment.as_slice()
    }

    /// Returns driver slot assigned to the activity.
    pub fn driver_of(&self, activity: usize) -> usize {
        self.assignment[activity]
    }

    /// Returns true if the driver stays in a hotel after the activity.
    pub fn is_hotel_after(&self, activity: usize) -> bool {
        self.hotel_flags[activity]
    }

    /// Returns hotel stay flags.
    pub fn hotel_flags(&self) -> &[bool] {
        self.hotel_flags.as_slice()
    }

    /// Returns driver paths.
    pub fn paths(&self) -> &DriverPaths {
        &self.paths
    }

    /// Returns activities of the driver ordered by start time.
    pub fn driver_path(&self, slot: usize) -> &[usize] {
        self.paths.path(slot)
    }

    /// Returns accumulated info of the driver.
    pub fn driver_info(&self, slot: usize) -> &DriverInfo {
        &self.driver_infos[slot]
    }

    /// Returns per criterion satisfaction of the driver.
    pub fn satisfaction_breakdown(&self, slot: usize) -> Vec<CriterionSatisfaction> {
        satisfaction_breakdown(&self.problem, &self.problem.drivers[slot], &self.driver_infos[slot])
    }

    /// Returns accumulated infos of all drivers.
    pub fn driver_infos(&self) -> &[DriverInfo] {
        self.driver_infos.as_slice()
    }

    /// Returns accumulated info of the external type.
    pub fn external_info(&self, type_index: usize) -> &ExternalTypeInfo {
        &self.external_infos[type_index]
    }

    /// Returns accumulated info of all external types.
    pub fn external_infos(&self) -> &[ExternalTypeInfo] {
        self.external_infos.as_slice()
    }

    /// Returns global accumulated info.
    pub fn total(&self) -> &TotalInfo {
        &self.total
    }

    /// Moves activity to another driver without touching accumulators.
    pub(crate) fn reassign(&mut self, activity: usize, new_slot: usize) {
        let old_slot = self.assignment[activity];
        self.paths.reassign(activity, old_slot, new_slot);
        self.assignment[activity] = new_slot;
    }

    /// Sets hotel stay flag without touching accumulators.
    pub(crate) fn set_hotel_after(&mut self, activity: usize, is_hotel: bool) {
        self.hotel_flags[activity] = is_hotel;
    }

    /// Folds the delta into accumulators.
    pub(crate) fn apply_delta(&mut self, delta: &StateDelta) {
        self.total += delta.total;
        delta.drivers.iter().for_each(|(slot, diff)| self.driver_infos[*slot] += diff);
        delta.externals.iter().for_each(|(type_index, diff)| self.external_infos[*type_index] += *diff);
    }

    /// Replaces accumulators with values computed from scratch, removing floating point drift.
    pub fn recompute(&mut self) {
        let FullInfo { driver_infos, external_infos, total } =
            compute_full_info(&self.problem, &self.paths, &self.hotel_flags);

        self.driver_infos = driver_infos;
        self.external_infos = external_infos;
        self.total = total;
    }

    /// Checks that accumulators agree with a from scratch computation within tolerance.
    pub fn check_consistency(&self) -> GenericResult<()> {
        let full = compute_full_info(&self.problem, &self.paths, &self.hotel_flags);

        let mut errors = Vec::<GenericError>::new();

        self.driver_infos.iter().zip(full.driver_infos.iter()).enumerate().for_each(|(slot, (actual, expected))| {
            if !actual.approx_eq(expected) {
                errors.push(format!("driver {slot}: accumulated {actual:?}, expected {expected:?}").into());
            }
        });

        self.external_infos.iter().zip(full.external_infos.iter()).enumerate().for_each(
            |(type_index, (actual, expected))| {
                if !actual.approx_eq(expected) {
                    errors.push(format!("external type {type_index}: accumulated {actual:?}, expected {expected:?}").into());
                }
            },
        );

        if !self.total.approx_eq(&full.total) {
            errors.push(format!("total: accumulated {:?}, expected {:?}", self.total, full.total).into());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(format!("accumulated state drifted from full recomputation: {}", GenericError::join_many(&errors, "; ")).into())
        }
    }

    /// Creates a snapshot of the current state.
    pub fn solution(&self) -> Solution {
        Solution {
            assignment: self.assignment.clone(),
            hotel_flags: self.hotel_flags.clone(),
            total: self.total,
            driver_infos: self.driver_infos.clone(),
            external_infos: self.external_infos.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/models/problem/rules_test.rs"]
mod rules_test;

use super::salary::{SalarySettings, default_salaries};
use crate::utils::{Float, Minutes};
use serde::{Deserialize, Serialize};

/// Cost, penalty and labour rule coefficients of a problem.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesConfig {
    /// Shift and rest constraints.
    pub shift: ShiftRules,
    /// Miscellaneous costs.
    pub costs: CostRules,
    /// Soft constraint penalty rates.
    pub penalties: PenaltyRates,
    /// Disruption cost estimation.
    pub robustness: RobustnessPolicy,
    /// Satisfaction specific thresholds.
    pub satisfaction: SatisfactionRules,
    /// Salary settings referenced by drivers.
    pub salaries: Vec<SalarySettings>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            shift: ShiftRules::default(),
            costs: CostRules::default(),
            penalties: PenaltyRates::default(),
            robustness: RobustnessPolicy::default(),
            satisfaction: SatisfactionRules::default(),
            salaries: default_salaries(),
        }
    }
}

/// Shift and rest constraints, all times are in minutes.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftRules {
    /// Two path adjacent activities belong to the same shift when the waiting time between them
    /// does not exceed this threshold and there is no hotel stay in between.
    pub max_waiting_time: Minutes,
    /// Maximum amount of shifts per driver.
    pub max_shift_count: i64,
    /// Maximum length of a day shift including travel.
    pub max_day_shift_length: Minutes,
    /// Maximum length of a night shift including travel.
    pub max_night_shift_length: Minutes,
    /// Minimum rest after a day shift.
    pub min_rest_after_day_shift: Minutes,
    /// Minimum rest after a night shift.
    pub min_rest_after_night_shift: Minutes,
    /// Maximum rest time during a hotel stay.
    pub hotel_max_rest_time: Minutes,
    /// Extra travel time via hotel, split equally between the shifts before and after.
    pub hotel_extra_travel_time: Minutes,
    /// Extra travel distance via hotel, split equally between the shifts before and after.
    pub hotel_extra_travel_distance: Float,
    /// Minimum rest between two shifts to count as a single free day.
    pub single_free_day_min_rest: Minutes,
    /// Minimum rest between two shifts to count as two consecutive free days.
    pub double_free_day_min_rest: Minutes,
    /// Start of the nightly window as minute of the day.
    pub night_start: Minutes,
    /// End of the nightly window as minute of the day.
    pub night_end: Minutes,
    /// Minimum amount of minutes inside the nightly window for a shift to be a night shift.
    pub night_shift_min_minutes: Minutes,
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            max_waiting_time: 240,
            max_shift_count: 5,
            max_day_shift_length: 720,
            max_night_shift_length: 600,
            min_rest_after_day_shift: 660,
            min_rest_after_night_shift: 840,
            hotel_max_rest_time: 720,
            hotel_extra_travel_time: 60,
            hotel_extra_travel_distance: 40.,
            single_free_day_min_rest: 1920,
            double_free_day_min_rest: 3360,
            night_start: 0,
            night_end: 360,
            night_shift_min_minutes: 60,
        }
    }
}

/// Miscellaneous costs.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostRules {
    /// Cost of a hotel stay.
    pub hotel_cost: Float,
    /// Cost of a kilometer travelled by a shared car.
    pub shared_car_cost_per_km: Float,
}

impl Default for CostRules {
    fn default() -> Self {
        Self { hotel_cost: 150., shared_car_cost_per_km: 0.25 }
    }
}

/// Penalty rates for soft constraint violations.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PenaltyRates {
    /// Penalty per time overlap between two activities of the same shift.
    pub overlap: Float,
    /// Penalty per too long shift.
    pub shift_length: Float,
    /// Penalty per minute of excess shift length.
    pub shift_length_per_minute: Float,
    /// Penalty per too short rest.
    pub rest_time: Float,
    /// Penalty per minute of missing rest.
    pub rest_time_per_minute: Float,
    /// Penalty per shift above the max shift count.
    pub shift_count: Float,
    /// Penalty per invalid hotel stay.
    pub invalid_hotel: Float,
    /// Penalty per shift worked while the driver is unavailable.
    pub unavailability: Float,
}

impl Default for PenaltyRates {
    fn default() -> Self {
        Self {
            overlap: 10000.,
            shift_length: 2000.,
            shift_length_per_minute: 20.,
            rest_time: 2000.,
            rest_time_per_minute: 20.,
            shift_count: 5000.,
            invalid_hotel: 5000.,
            unavailability: 10000.,
        }
    }
}

/// Estimates the expected cost of delays propagating between two successive activities of a shift.
///
/// An activity is delayed with a configured probability, the delay length is exponentially distributed
/// with a mean which is a quadratic function of the planned duration. A conflict happens when the delay
/// exceeds the waiting time before the next activity, its cost depends on how closely both activities
/// are related.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RobustnessPolicy {
    /// Delay probability of a driving activity.
    pub driving_delay_probability: Float,
    /// Delay probability of a non driving activity.
    pub non_driving_delay_probability: Float,
    /// Quadratic coefficient of mean delay by planned duration.
    pub mean_delay_quadratic: Float,
    /// Linear coefficient of mean delay by planned duration.
    pub mean_delay_linear: Float,
    /// Constant coefficient of mean delay by planned duration.
    pub mean_delay_constant: Float,
    /// Conflict cost when both activities belong to the same duty.
    pub same_duty_conflict_cost: Float,
    /// Conflict cost when both activities belong to the same project.
    pub same_project_conflict_cost: Float,
    /// Conflict cost otherwise.
    pub different_project_conflict_cost: Float,
}

impl Default for RobustnessPolicy {
    fn default() -> Self {
        Self {
            driving_delay_probability: 0.25,
            non_driving_delay_probability: 0.1,
            mean_delay_quadratic: 0.,
            mean_delay_linear: 0.02,
            mean_delay_constant: 2.,
            same_duty_conflict_cost: 50.,
            same_project_conflict_cost: 100.,
            different_project_conflict_cost: 200.,
        }
    }
}

impl RobustnessPolicy {
    /// Returns expected conflict cost when an activity with given planned duration is followed
    /// by another one after the given waiting time.
    pub fn conflict_cost(&self, planned_duration: Minutes, waiting_time: Minutes, is_driving: bool, relation: Relation) -> Float {
        let delay_probability =
            if is_driving { self.driving_delay_probability } else { self.non_driving_delay_probability };

        let duration = planned_duration as Float;
        let mean_delay =
            self.mean_delay_quadratic * duration * duration + self.mean_delay_linear * duration + self.mean_delay_constant;

        let conflict_probability = match (waiting_time, mean_delay) {
            (waiting_time, _) if waiting_time <= 0 => delay_probability,
            (_, mean_delay) if mean_delay <= 0. => 0.,
            (waiting_time, mean_delay) => delay_probability * (-(waiting_time as Float) / mean_delay).exp(),
        };

        let factor = match relation {
            Relation::SameDuty => self.same_duty_conflict_cost,
            Relation::SameProject => self.same_project_conflict_cost,
            Relation::Different => self.different_project_conflict_cost,
        };

        conflict_probability * factor
    }
}

/// Specifies how two successive activities are related.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Relation {
    /// Both belong to the same duty.
    SameDuty,
    /// Both belong to the same project.
    SameProject,
    /// Not related.
    Different,
}

/// Thresholds used by satisfaction criteria.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SatisfactionRules {
    /// Shift lengths above this threshold lower satisfaction.
    pub ideal_shift_length: Minutes,
    /// Rest times below this threshold lower satisfaction.
    pub ideal_rest_time: Minutes,
    /// When set, driver satisfaction blends the weighted criteria sum with the worst criterion.
    pub blend_worst_criterion: bool,
}

impl Default for SatisfactionRules {
    fn default() -> Self {
        Self { ideal_shift_length: 480, ideal_rest_time: 960, blend_worst_criterion: false }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/models/problem/problem_test.rs"]
mod problem_test;

use super::*;
use crate::utils::{Float, GenericResult, Minutes};

pub(crate) const MINUTES_PER_DAY: Minutes = 24 * 60;
const SATURDAY: Minutes = 5;

/// Defines a rostering problem. Built once by a loader and never mutated by the planner.
pub struct Problem {
    /// Activities sorted by start time, an activity index equals its position.
    pub activities: Vec<Activity>,
    /// All drivers, a driver slot equals its position.
    pub drivers: Vec<Driver>,
    /// External driver types with their members.
    pub external_types: Vec<ExternalDriverType>,
    /// Travel information between locations.
    pub travel: TravelMatrix,
    /// Cost and labour rules.
    pub rules: RulesConfig,
    /// Satisfaction criteria applied to internal drivers.
    pub criteria: Vec<SatisfactionCriterion>,

    internal_drivers: Vec<usize>,
    shared_route_count: usize,
    required_internal_count: usize,
    criteria_weight_sum: Float,
    criteria_max_weight: Float,
}

impl Problem {
    /// Creates a new instance of `Problem` checking that input data is internally consistent.
    pub fn new(
        activities: Vec<Activity>,
        drivers: Vec<Driver>,
        mut external_types: Vec<ExternalDriverType>,
        travel: TravelMatrix,
        rules: RulesConfig,
        criteria: Vec<SatisfactionCriterion>,
    ) -> GenericResult<Self> {
        let is_valid_location = |location: usize| location < travel.size();

        for (idx, activity) in activities.iter().enumerate() {
            if activity.index != idx {
                return Err(format!("activity at position {idx} has index {}", activity.index).into());
            }
            if activity.start_time > activity.end_time {
                return Err(format!("activity {idx} ends before it starts").into());
            }
            if !is_valid_location(activity.start_location) || !is_valid_location(activity.end_location) {
                return Err(format!("activity {idx} refers to unknown location").into());
            }
        }

        if activities.windows(2).any(|pair| pair[0].start_time > pair[1].start_time) {
            return Err("activities must be sorted by start time".into());
        }

        for (idx, salary) in rules.salaries.iter().enumerate() {
            salary.validate().map_err(|err| err.with_context(format!("salary settings {idx}").as_str()))?;
        }

        if drivers.is_empty() {
            return Err("at least one driver is required".into());
        }

        for (idx, driver) in drivers.iter().enumerate() {
            if driver.slot != idx {
                return Err(format!("driver at position {idx} has slot {}", driver.slot).into());
            }
            if driver.home_location.is_some_and(|location| !is_valid_location(location)) {
                return Err(format!("driver '{}' has unknown home location", driver.name).into());
            }
            if driver.salary >= rules.salaries.len() {
                return Err(format!("driver '{}' refers to unknown salary settings", driver.name).into());
            }
            match &driver.kind {
                DriverKind::Internal { contract_time, .. } if *contract_time <= 0 => {
                    return Err(format!("internal driver '{}' must have positive contract time", driver.name).into());
                }
                DriverKind::Internal { unavailabilities, .. } if unavailabilities.iter().any(|range| range.start > range.end) => {
                    return Err(format!("internal driver '{}' has invalid unavailability", driver.name).into());
                }
                DriverKind::External { type_index } => {
                    let external_type = external_types
                        .get_mut(*type_index)
                        .ok_or_else(|| format!("driver '{}' refers to unknown external type", driver.name))?;
                    external_type.drivers.push(idx);
                }
                _ => {}
            }
        }

        for (idx, external_type) in external_types.iter().enumerate() {
            if external_type.index != idx {
                return Err(format!("external type at position {idx} has index {}", external_type.index).into());
            }
            if external_type.min_shift_count > external_type.max_shift_count {
                return Err(format!("external type '{}' has invalid shift count bounds", external_type.name).into());
            }
        }

        if criteria.iter().any(|criterion| criterion.weight < 0.) {
            return Err("satisfaction criterion weight cannot be negative".into());
        }

        for criterion in criteria.iter() {
            match criterion.shape {
                CriterionShape::RangeLinear { worst, best } if worst == best => {
                    return Err(format!("criterion '{}' has equal worst and best values", criterion.name).into());
                }
                CriterionShape::ContractSymmetric { worst_deviation_fraction }
                | CriterionShape::ContractExcessOnly { worst_deviation_fraction }
                    if worst_deviation_fraction <= 0. =>
                {
                    return Err(format!("criterion '{}' must have positive deviation fraction", criterion.name).into());
                }
                _ => {}
            }
        }

        let internal_drivers = drivers.iter().filter(|driver| driver.is_internal()).map(|driver| driver.slot).collect();
        let required_internal_count = drivers.iter().filter(|driver| driver.is_required_internal()).count();
        let shared_route_count =
            activities.iter().filter_map(|activity| activity.shared_route).max().map_or(0, |max| max + 1);
        let criteria_weight_sum = criteria.iter().map(|criterion| criterion.weight).sum();
        let criteria_max_weight = criteria.iter().map(|criterion| criterion.weight).fold(0., Float::max);

        Ok(Self {
            activities,
            drivers,
            external_types,
            travel,
            rules,
            criteria,
            internal_drivers,
            shared_route_count,
            required_internal_count,
            criteria_weight_sum,
            criteria_max_weight,
        })
    }

    /// Returns slots of internal drivers.
    pub fn internal_drivers(&self) -> &[usize] {
        self.internal_drivers.as_slice()
    }

    /// Returns amount of internal drivers which are not optional.
    pub fn required_internal_count(&self) -> usize {
        self.required_internal_count
    }

    /// Returns amount of distinct shared routes.
    pub fn shared_route_count(&self) -> usize {
        self.shared_route_count
    }

    /// Returns sum of satisfaction criteria weights.
    pub fn criteria_weight_sum(&self) -> Float {
        self.criteria_weight_sum
    }

    /// Returns max satisfaction criterion weight.
    pub fn criteria_max_weight(&self) -> Float {
        self.criteria_max_weight
    }

    /// Returns travel time from the end of the first activity to the start of the second one.
    pub fn travel_time(&self, from: &Activity, to: &Activity) -> Minutes {
        self.travel.duration(from.end_location, to.start_location)
    }

    /// Returns travel distance from the end of the first activity to the start of the second one.
    pub fn travel_distance(&self, from: &Activity, to: &Activity) -> Float {
        self.travel.distance(from.end_location, to.start_location)
    }

    /// Returns time between two activities which is left after travelling, can be negative.
    pub fn waiting_time(&self, from: &Activity, to: &Activity) -> Minutes {
        to.start_time - from.end_time - self.travel_time(from, to)
    }

    /// Checks whether the driver can reach the second activity in time after finishing the first one.
    pub fn is_valid_succession(&self, from: &Activity, to: &Activity) -> bool {
        self.waiting_time(from, to) >= 0
    }

    /// Returns salary settings of the driver.
    pub fn salary(&self, driver: &Driver) -> &SalarySettings {
        &self.rules.salaries[driver.salary]
    }

    /// Returns a salary of the main shift worked by the driver within the given time range.
    pub fn main_shift_cost(&self, driver: &Driver, start: Minutes, end: Minutes) -> Float {
        self.salary(driver).main_shift_cost(start, end, is_weekend_day)
    }

    /// Checks whether two path adjacent activities belong to the same shift.
    pub fn are_same_shift(&self, from: &Activity, to: &Activity, is_hotel_after_from: bool) -> bool {
        !is_hotel_after_from && self.waiting_time(from, to) <= self.rules.shift.max_waiting_time
    }

    /// Returns expected disruption cost when two activities are worked in succession within one shift.
    pub fn succession_robustness(&self, from: &Activity, to: &Activity) -> Float {
        let relation = if from.duty_id == to.duty_id {
            Relation::SameDuty
        } else if from.project.is_some() && from.project == to.project {
            Relation::SameProject
        } else {
            Relation::Different
        };

        self.rules.robustness.conflict_cost(from.duration(), self.waiting_time(from, to), from.is_driving, relation)
    }

    /// Returns own car travel time and distance from driver's home to the given location.
    pub fn home_travel_to(&self, driver: &Driver, location: usize) -> (Minutes, Float) {
        driver.home_location.map_or((0, 0.), |home| (self.travel.duration(home, location), self.travel.distance(home, location)))
    }

    /// Returns own car travel time and distance from the given location to driver's home.
    pub fn home_travel_from(&self, driver: &Driver, location: usize) -> (Minutes, Float) {
        driver.home_location.map_or((0, 0.), |home| (self.travel.duration(location, home), self.travel.distance(location, home)))
    }

    /// Checks whether a shift working within the given time range is a night shift.
    pub fn is_night_shift(&self, start: Minutes, end: Minutes) -> bool {
        let rules = &self.rules.shift;
        if rules.night_end <= rules.night_start || end <= start {
            return false;
        }

        let first_day = start.div_euclid(MINUTES_PER_DAY);
        let last_day = end.div_euclid(MINUTES_PER_DAY);

        let night_minutes: Minutes = (first_day..=last_day)
            .map(|day| {
                let window_start = day * MINUTES_PER_DAY + rules.night_start;
                let window_end = day * MINUTES_PER_DAY + rules.night_end;
                (end.min(window_end) - start.max(window_start)).max(0)
            })
            .sum();

        night_minutes >= rules.night_shift_min_minutes
    }

    /// Checks whether a shift starting at the given time is a weekend shift.
    pub fn is_weekend_shift(&self, start: Minutes) -> bool {
        is_weekend_day(start.div_euclid(MINUTES_PER_DAY))
    }
}

/// Checks whether the day with given index since the start of the horizon is Saturday or Sunday.
fn is_weekend_day(day: Minutes) -> bool {
    day.rem_euclid(7) >= SATURDAY
}

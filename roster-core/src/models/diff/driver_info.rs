#[cfg(test)]
#[path = "../../../tests/unit/models/diff/driver_info_test.rs"]
mod driver_info_test;

use super::{PenaltyInfo, Stats};
use crate::utils::Minutes;
use serde::Serialize;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Accumulated statistics of a single driver, or a change to them.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverInfo {
    /// Cost related measurements.
    pub stats: Stats,
    /// Soft constraint violations.
    pub penalty: PenaltyInfo,
    /// Time spent on activities, from first activity start to last activity end of each shift.
    pub worked_time: Minutes,
    /// Amount of shifts.
    pub shift_count: i64,
    /// Amount of hotel stays.
    pub hotel_count: i64,
    /// Amount of night shifts.
    pub night_shift_count: i64,
    /// Amount of weekend shifts.
    pub weekend_shift_count: i64,
    /// Own car travel time.
    pub travel_time: Minutes,
    /// Amount of rests long enough for a single free day.
    pub single_free_day_count: i64,
    /// Amount of rests long enough for two consecutive free days.
    pub double_free_day_count: i64,
    /// Accumulated shift length above the ideal one.
    pub ideal_shift_length_score: Minutes,
    /// Accumulated squared rest deficit below the ideal rest time.
    pub ideal_rest_time_score: i64,
    /// Amount of activities per shared route.
    pub shared_route_counts: Vec<i64>,
}

impl DriverInfo {
    /// Creates an empty driver info with shared route counters.
    pub fn new(shared_route_count: usize) -> Self {
        Self { shared_route_counts: vec![0; shared_route_count], ..Self::default() }
    }

    /// Checks equality with another driver info: floating point fields within tolerance, counters exactly.
    pub fn approx_eq(&self, other: &DriverInfo) -> bool {
        let routes_len = self.shared_route_counts.len().max(other.shared_route_counts.len());
        let route_count = |info: &DriverInfo, idx: usize| info.shared_route_counts.get(idx).copied().unwrap_or(0);

        self.stats.approx_eq(&other.stats)
            && self.penalty == other.penalty
            && self.worked_time == other.worked_time
            && self.shift_count == other.shift_count
            && self.hotel_count == other.hotel_count
            && self.night_shift_count == other.night_shift_count
            && self.weekend_shift_count == other.weekend_shift_count
            && self.travel_time == other.travel_time
            && self.single_free_day_count == other.single_free_day_count
            && self.double_free_day_count == other.double_free_day_count
            && self.ideal_shift_length_score == other.ideal_shift_length_score
            && self.ideal_rest_time_score == other.ideal_rest_time_score
            && (0..routes_len).all(|idx| route_count(self, idx) == route_count(other, idx))
    }

    /// Returns amount of activities on already visited shared routes.
    pub fn duplicate_route_count(&self) -> i64 {
        self.shared_route_counts.iter().filter(|&&count| count > 1).map(|count| count - 1).sum()
    }

    fn zip_routes(&self, other: &DriverInfo, op: impl Fn(i64, i64) -> i64) -> Vec<i64> {
        let len = self.shared_route_counts.len().max(other.shared_route_counts.len());
        (0..len)
            .map(|idx| {
                op(
                    self.shared_route_counts.get(idx).copied().unwrap_or(0),
                    other.shared_route_counts.get(idx).copied().unwrap_or(0),
                )
            })
            .collect()
    }
}

impl Add<&DriverInfo> for &DriverInfo {
    type Output = DriverInfo;

    fn add(self, other: &DriverInfo) -> DriverInfo {
        DriverInfo {
            stats: self.stats + other.stats,
            penalty: self.penalty + other.penalty,
            worked_time: self.worked_time + other.worked_time,
            shift_count: self.shift_count + other.shift_count,
            hotel_count: self.hotel_count + other.hotel_count,
            night_shift_count: self.night_shift_count + other.night_shift_count,
            weekend_shift_count: self.weekend_shift_count + other.weekend_shift_count,
            travel_time: self.travel_time + other.travel_time,
            single_free_day_count: self.single_free_day_count + other.single_free_day_count,
            double_free_day_count: self.double_free_day_count + other.double_free_day_count,
            ideal_shift_length_score: self.ideal_shift_length_score + other.ideal_shift_length_score,
            ideal_rest_time_score: self.ideal_rest_time_score + other.ideal_rest_time_score,
            shared_route_counts: self.zip_routes(other, |a, b| a + b),
        }
    }
}

impl Neg for &DriverInfo {
    type Output = DriverInfo;

    fn neg(self) -> DriverInfo {
        DriverInfo {
            stats: -self.stats,
            penalty: -self.penalty,
            worked_time: -self.worked_time,
            shift_count: -self.shift_count,
            hotel_count: -self.hotel_count,
            night_shift_count: -self.night_shift_count,
            weekend_shift_count: -self.weekend_shift_count,
            travel_time: -self.travel_time,
            single_free_day_count: -self.single_free_day_count,
            double_free_day_count: -self.double_free_day_count,
            ideal_shift_length_score: -self.ideal_shift_length_score,
            ideal_rest_time_score: -self.ideal_rest_time_score,
            shared_route_counts: self.shared_route_counts.iter().map(|count| -count).collect(),
        }
    }
}

impl Sub<&DriverInfo> for &DriverInfo {
    type Output = DriverInfo;

    fn sub(self, other: &DriverInfo) -> DriverInfo {
        self + &(-other)
    }
}

impl AddAssign<&DriverInfo> for DriverInfo {
    fn add_assign(&mut self, other: &DriverInfo) {
        *self = &*self + other;
    }
}

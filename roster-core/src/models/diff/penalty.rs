use crate::models::problem::{Driver, PenaltyRates};
use crate::utils::{Float, Minutes};
use serde::Serialize;
use std::ops::{Add, Neg};

/// Counters of soft constraint violations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyInfo {
    /// Amount of overlapping successive activities.
    pub overlap_count: i64,
    /// Amount of too long shifts.
    pub shift_length_violation_count: i64,
    /// Total excess shift length.
    pub shift_length_violation: Minutes,
    /// Amount of too short rests.
    pub rest_time_violation_count: i64,
    /// Total missing rest time.
    pub rest_time_violation: Minutes,
    /// Amount of shifts above the max shift count.
    pub shift_count_violation: i64,
    /// Amount of invalid hotel stays.
    pub invalid_hotel_count: i64,
    /// Amount of shifts worked while the driver is unavailable.
    pub availability_violation_count: i64,
}

impl PenaltyInfo {
    /// Registers an overlap between successive activities.
    pub fn add_overlap(&mut self) {
        self.overlap_count += 1;
    }

    /// Registers a shift length violation if the shift is too long.
    pub fn add_possible_shift_length_violation(&mut self, shift_length: Minutes, max_shift_length: Minutes) {
        if shift_length > max_shift_length {
            self.shift_length_violation_count += 1;
            self.shift_length_violation += shift_length - max_shift_length;
        }
    }

    /// Registers a rest time violation if the rest is too short.
    pub fn add_possible_rest_time_violation(&mut self, rest_time: Minutes, min_rest_time: Minutes) {
        if rest_time < min_rest_time {
            self.rest_time_violation_count += 1;
            self.rest_time_violation += min_rest_time - rest_time;
        }
    }

    /// Registers an invalid hotel stay.
    pub fn add_invalid_hotel(&mut self) {
        self.invalid_hotel_count += 1;
    }

    /// Registers an availability violation if the driver cannot work the whole shift.
    pub fn add_possible_availability_violation(&mut self, driver: &Driver, shift_start: Minutes, shift_end: Minutes) {
        if !driver.is_available(shift_start, shift_end) {
            self.availability_violation_count += 1;
        }
    }

    /// Returns a penalty of all violations. The function is linear, so a penalty of a diff equals
    /// a diff of penalties.
    pub fn penalty(&self, rates: &PenaltyRates) -> Float {
        self.overlap_count as Float * rates.overlap
            + self.shift_length_violation_count as Float * rates.shift_length
            + self.shift_length_violation as Float * rates.shift_length_per_minute
            + self.rest_time_violation_count as Float * rates.rest_time
            + self.rest_time_violation as Float * rates.rest_time_per_minute
            + self.shift_count_violation as Float * rates.shift_count
            + self.invalid_hotel_count as Float * rates.invalid_hotel
            + self.availability_violation_count as Float * rates.unavailability
    }
}

impl Add for PenaltyInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            overlap_count: self.overlap_count + other.overlap_count,
            shift_length_violation_count: self.shift_length_violation_count + other.shift_length_violation_count,
            shift_length_violation: self.shift_length_violation + other.shift_length_violation,
            rest_time_violation_count: self.rest_time_violation_count + other.rest_time_violation_count,
            rest_time_violation: self.rest_time_violation + other.rest_time_violation,
            shift_count_violation: self.shift_count_violation + other.shift_count_violation,
            invalid_hotel_count: self.invalid_hotel_count + other.invalid_hotel_count,
            availability_violation_count: self.availability_violation_count + other.availability_violation_count,
        }
    }
}

impl Neg for PenaltyInfo {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            overlap_count: -self.overlap_count,
            shift_length_violation_count: -self.shift_length_violation_count,
            shift_length_violation: -self.shift_length_violation,
            rest_time_violation_count: -self.rest_time_violation_count,
            rest_time_violation: -self.rest_time_violation,
            shift_count_violation: -self.shift_count_violation,
            invalid_hotel_count: -self.invalid_hotel_count,
            availability_violation_count: -self.availability_violation_count,
        }
    }
}

impl_copy_group_ops!(PenaltyInfo);

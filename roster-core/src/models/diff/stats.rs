#[cfg(test)]
#[path = "../../../tests/unit/models/diff/stats_test.rs"]
mod stats_test;

use crate::utils::{Float, is_approx_eq, is_approx_eq_option};
use serde::Serialize;
use std::ops::{Add, Neg};

/// Cost related measurements.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// A total cost: raw cost, robustness and penalty.
    pub cost: Float,
    /// A cost of shifts, travel and hotel stays.
    pub raw_cost: Float,
    /// An expected cost of disruptions.
    pub robustness: Float,
    /// A penalty of soft constraint violations.
    pub penalty: Float,
    /// A sum of driver satisfactions.
    pub driver_satisfaction: Float,
    /// An aggregate satisfaction score, absent when not applicable.
    pub satisfaction_score: Option<Float>,
}

impl Stats {
    /// Returns zero stats with zero satisfaction score.
    pub fn zero_with_score() -> Self {
        Self { satisfaction_score: Some(0.), ..Self::default() }
    }

    /// Checks equality with another stats within tolerance.
    pub fn approx_eq(&self, other: &Stats) -> bool {
        is_approx_eq(self.cost, other.cost)
            && is_approx_eq(self.raw_cost, other.raw_cost)
            && is_approx_eq(self.robustness, other.robustness)
            && is_approx_eq(self.penalty, other.penalty)
            && is_approx_eq(self.driver_satisfaction, other.driver_satisfaction)
            && is_approx_eq_option(self.satisfaction_score, other.satisfaction_score)
    }
}

impl Add for Stats {
    type Output = Self;

    /// Adds field-wise, satisfaction score is present only when present on both sides.
    fn add(self, other: Self) -> Self {
        Self {
            cost: self.cost + other.cost,
            raw_cost: self.raw_cost + other.raw_cost,
            robustness: self.robustness + other.robustness,
            penalty: self.penalty + other.penalty,
            driver_satisfaction: self.driver_satisfaction + other.driver_satisfaction,
            satisfaction_score: self.satisfaction_score.zip(other.satisfaction_score).map(|(a, b)| a + b),
        }
    }
}

impl Neg for Stats {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            cost: -self.cost,
            raw_cost: -self.raw_cost,
            robustness: -self.robustness,
            penalty: -self.penalty,
            driver_satisfaction: -self.driver_satisfaction,
            satisfaction_score: self.satisfaction_score.map(|score| -score),
        }
    }
}

impl_copy_group_ops!(Stats);

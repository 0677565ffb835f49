use crate::models::problem::ExternalDriverType;
use crate::utils::{Float, is_approx_eq};
use serde::Serialize;
use std::ops::{Add, Neg};

/// Accumulated statistics of an external driver type, or a change to them.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalTypeInfo {
    /// A cost contribution, equals to penalty.
    pub cost: Float,
    /// A penalty of shift count bounds violation.
    pub penalty: Float,
    /// Amount of shifts worked by all members of the type.
    pub shift_count: i64,
    /// Amount of shifts outside of `[min, max]` shift count bounds.
    pub shift_count_violation: i64,
}

impl ExternalTypeInfo {
    /// Creates info of an external type which members have given amount of shifts in total.
    pub fn with_shift_count(external_type: &ExternalDriverType, shift_count: i64) -> Self {
        let shift_count_violation = (external_type.min_shift_count - shift_count).max(0)
            + (shift_count - external_type.max_shift_count).max(0);
        let penalty = shift_count_violation as Float * external_type.penalty_per_shift;

        Self { cost: penalty, penalty, shift_count, shift_count_violation }
    }

    /// Checks equality with another info within tolerance.
    pub fn approx_eq(&self, other: &ExternalTypeInfo) -> bool {
        is_approx_eq(self.cost, other.cost)
            && is_approx_eq(self.penalty, other.penalty)
            && self.shift_count == other.shift_count
            && self.shift_count_violation == other.shift_count_violation
    }
}

impl Add for ExternalTypeInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            cost: self.cost + other.cost,
            penalty: self.penalty + other.penalty,
            shift_count: self.shift_count + other.shift_count,
            shift_count_violation: self.shift_count_violation + other.shift_count_violation,
        }
    }
}

impl Neg for ExternalTypeInfo {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            cost: -self.cost,
            penalty: -self.penalty,
            shift_count: -self.shift_count,
            shift_count_violation: -self.shift_count_violation,
        }
    }
}

impl_copy_group_ops!(ExternalTypeInfo);

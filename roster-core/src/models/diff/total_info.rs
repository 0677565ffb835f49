use super::{DriverInfo, ExternalTypeInfo, PenaltyInfo, Stats};
use serde::Serialize;
use std::ops::{Add, Neg};

/// Global accumulated statistics, or a change to them.
///
/// Between committed operations it equals to the sum of all driver infos and all external type
/// contributions, with the satisfaction score maintained separately.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalInfo {
    /// Cost related measurements.
    pub stats: Stats,
    /// Soft constraint violations of all drivers.
    pub penalty: PenaltyInfo,
    /// Amount of external shifts outside of type bounds.
    pub external_shift_count_violation: i64,
}

impl TotalInfo {
    /// Creates a total info with zero satisfaction score.
    pub fn zero_with_score() -> Self {
        Self { stats: Stats::zero_with_score(), ..Self::default() }
    }

    /// Adds driver info.
    pub fn add_driver_info(&mut self, driver_info: &DriverInfo) {
        let satisfaction_score = self.stats.satisfaction_score;
        self.stats = self.stats + driver_info.stats;
        self.stats.satisfaction_score = satisfaction_score;
        self.penalty += driver_info.penalty;
    }

    /// Adds external type info.
    pub fn add_external_info(&mut self, external_info: &ExternalTypeInfo) {
        self.stats.cost += external_info.cost;
        self.stats.penalty += external_info.penalty;
        self.external_shift_count_violation += external_info.shift_count_violation;
    }

    /// Checks equality with another total info within tolerance.
    pub fn approx_eq(&self, other: &TotalInfo) -> bool {
        self.stats.approx_eq(&other.stats)
            && self.penalty == other.penalty
            && self.external_shift_count_violation == other.external_shift_count_violation
    }
}

impl Add for TotalInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            stats: self.stats + other.stats,
            penalty: self.penalty + other.penalty,
            external_shift_count_violation: self.external_shift_count_violation + other.external_shift_count_violation,
        }
    }
}

impl Neg for TotalInfo {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            stats: -self.stats,
            penalty: -self.penalty,
            external_shift_count_violation: -self.external_shift_count_violation,
        }
    }
}

impl_copy_group_ops!(TotalInfo);

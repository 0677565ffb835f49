use crate::utils::Float;
use serde::{Deserialize, Serialize};

/// Specifies which driver statistic a satisfaction criterion observes.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum CriterionSource {
    /// Total worked time.
    WorkedTime,
    /// Own car travel time.
    TravelTime,
    /// Accumulated shift length above the ideal one.
    ShiftLengthScore,
    /// Expected disruption cost.
    Robustness,
    /// Amount of night shifts.
    NightShifts,
    /// Amount of weekend shifts.
    WeekendShifts,
    /// Amount of hotel stays.
    HotelStays,
    /// Amount of repeated shared routes.
    DuplicateRoutes,
    /// A score of consecutive free days: one with a double free day, a quarter per single free day.
    ConsecutiveFreeDays,
    /// Accumulated squared rest deficit below the ideal rest time.
    RestTimeScore,
}

/// Specifies how an observed value is mapped into `[0, 1]` range.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum CriterionShape {
    /// A linear ramp between worst and best thresholds.
    #[serde(rename_all = "camelCase")]
    RangeLinear {
        /// A value which gives zero satisfaction.
        worst: Float,
        /// A value which gives full satisfaction.
        best: Float,
    },
    /// Penalizes deviation from contract time in both directions.
    #[serde(rename_all = "camelCase")]
    ContractSymmetric {
        /// A relative deviation which gives zero satisfaction.
        worst_deviation_fraction: Float,
    },
    /// Penalizes only exceeding contract time.
    #[serde(rename_all = "camelCase")]
    ContractExcessOnly {
        /// A relative excess which gives zero satisfaction.
        worst_deviation_fraction: Float,
    },
}

/// A weighted satisfaction criterion applied to every internal driver.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionCriterion {
    /// A criterion name.
    pub name: String,
    /// An observed statistic.
    pub source: CriterionSource,
    /// A mapping into `[0, 1]` range.
    pub shape: CriterionShape,
    /// A relative weight.
    pub weight: Float,
}

#[cfg(test)]
#[path = "../../tests/unit/costs/satisfaction_test.rs"]
mod satisfaction_test;

use crate::models::DriverInfo;
use crate::models::problem::{CriterionShape, CriterionSource, Driver, Problem, SatisfactionCriterion};
use crate::utils::{Float, Minutes};
use serde::Serialize;

/// Satisfaction of a single criterion for a single driver.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionSatisfaction {
    /// A criterion name.
    pub name: String,
    /// An observed value.
    pub value: Float,
    /// An unweighted satisfaction in `[0, 1]`.
    pub satisfaction: Float,
    /// A satisfaction share after weight normalization.
    pub weighted: Float,
}

/// Returns a value of the driver statistic observed by the criterion source.
pub fn criterion_value(info: &DriverInfo, source: CriterionSource) -> Float {
    match source {
        CriterionSource::WorkedTime => info.worked_time as Float,
        CriterionSource::TravelTime => info.travel_time as Float,
        CriterionSource::ShiftLengthScore => info.ideal_shift_length_score as Float,
        CriterionSource::Robustness => info.stats.robustness,
        CriterionSource::NightShifts => info.night_shift_count as Float,
        CriterionSource::WeekendShifts => info.weekend_shift_count as Float,
        CriterionSource::HotelStays => info.hotel_count as Float,
        CriterionSource::DuplicateRoutes => info.duplicate_route_count() as Float,
        CriterionSource::ConsecutiveFreeDays => {
            info.double_free_day_count as Float + 0.25 * info.single_free_day_count as Float
        }
        CriterionSource::RestTimeScore => info.ideal_rest_time_score as Float,
    }
}

/// Maps an observed value into `[0, 1]` range.
pub fn unweighted_satisfaction(shape: &CriterionShape, value: Float, contract_time: Option<Minutes>) -> Float {
    let contract_ratio = || contract_time.filter(|&time| time > 0).map(|time| value / time as Float);

    let satisfaction = match *shape {
        CriterionShape::RangeLinear { worst, best } => (value - worst) / (best - worst),
        CriterionShape::ContractSymmetric { worst_deviation_fraction } => contract_ratio()
            .map_or(1., |ratio| 1. - (ratio - 1.).abs() / worst_deviation_fraction),
        CriterionShape::ContractExcessOnly { worst_deviation_fraction } => contract_ratio()
            .map_or(1., |ratio| 1. - (ratio - 1.).max(0.) / worst_deviation_fraction),
    };

    satisfaction.clamp(0., 1.)
}

/// Returns a criterion satisfaction scaled by its weight relatively to the max weight and centered
/// around `0.5`, so that low weight criteria affect the worst criterion selection less.
pub fn satisfaction_for_minimum(satisfaction: Float, weight: Float, max_weight: Float) -> Float {
    if max_weight > 0. { 0.5 + (satisfaction - 0.5) * weight / max_weight } else { 0.5 }
}

/// Returns satisfaction of the driver in `[0, 1]` range. Only required internal drivers are satisfied.
pub fn driver_satisfaction(problem: &Problem, driver: &Driver, info: &DriverInfo) -> Float {
    if !driver.is_required_internal() {
        return 0.;
    }

    let weight_sum = problem.criteria_weight_sum();
    if problem.criteria.is_empty() || weight_sum <= 0. {
        return 1.;
    }

    let contract_time = driver.contract_time();
    let satisfactions = problem
        .criteria
        .iter()
        .map(|criterion| (criterion, get_unweighted(criterion, info, contract_time)));

    let weighted = satisfactions.clone().map(|(criterion, satisfaction)| criterion.weight * satisfaction).sum::<Float>()
        / weight_sum;

    if problem.rules.satisfaction.blend_worst_criterion {
        let max_weight = problem.criteria_max_weight();
        let worst = satisfactions
            .map(|(criterion, satisfaction)| satisfaction_for_minimum(satisfaction, criterion.weight, max_weight))
            .fold(1., Float::min);

        (weighted + worst) / 2.
    } else {
        weighted
    }
}

/// Returns per criterion satisfaction of the driver.
pub fn satisfaction_breakdown(problem: &Problem, driver: &Driver, info: &DriverInfo) -> Vec<CriterionSatisfaction> {
    let weight_sum = problem.criteria_weight_sum();

    problem
        .criteria
        .iter()
        .map(|criterion| {
            let satisfaction = get_unweighted(criterion, info, driver.contract_time());
            let weighted = if weight_sum > 0. { criterion.weight * satisfaction / weight_sum } else { 0. };

            CriterionSatisfaction {
                name: criterion.name.clone(),
                value: criterion_value(info, criterion.source),
                satisfaction,
                weighted,
            }
        })
        .collect()
}

/// Returns a global satisfaction score: an average of the mean and the minimum satisfaction over
/// required internal drivers, or `None` when there are no such drivers.
pub fn satisfaction_score<F>(problem: &Problem, driver_satisfaction: F) -> Option<Float>
where
    F: Fn(usize) -> Float,
{
    let required_count = problem.required_internal_count();
    if required_count == 0 {
        return None;
    }

    let (sum, min) = problem
        .internal_drivers()
        .iter()
        .filter(|&&slot| problem.drivers[slot].is_required_internal())
        .map(|&slot| driver_satisfaction(slot))
        .fold((0., Float::MAX), |(sum, min), satisfaction| (sum + satisfaction, min.min(satisfaction)));

    Some((sum / required_count as Float + min) / 2.)
}

fn get_unweighted(criterion: &SatisfactionCriterion, info: &DriverInfo, contract_time: Option<Minutes>) -> Float {
    unweighted_satisfaction(&criterion.shape, criterion_value(info, criterion.source), contract_time)
}

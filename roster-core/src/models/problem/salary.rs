#[cfg(test)]
#[path = "../../../tests/unit/models/problem/salary_test.rs"]
mod salary_test;

use super::problem::MINUTES_PER_DAY;
use crate::utils::{Float, GenericResult, Minutes};
use serde::{Deserialize, Serialize};

/// A part of a weekday with its own salary rate.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRateBlock {
    /// A minute of the day when the block starts, the block lasts until the next one starts.
    pub start_time: Minutes,
    /// A salary per minute.
    pub rate: Float,
    /// A shift starting in this block is paid at least this rate until it ends.
    #[serde(default)]
    pub continuing_rate: Float,
}

/// Specifies how own car travel is compensated.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum TravelCompensation {
    /// Travel time above the unpaid allowance is paid per minute.
    #[serde(rename_all = "camelCase")]
    ByTime {
        /// A compensation per minute.
        rate: Float,
        /// Travel time per shift which is not paid.
        unpaid_time: Minutes,
    },
    /// Travel distance above the unpaid allowance is paid per kilometer.
    #[serde(rename_all = "camelCase")]
    ByDistance {
        /// A compensation per kilometer.
        rate: Float,
        /// Travel distance per shift which is not paid.
        unpaid_distance: Float,
    },
}

impl TravelCompensation {
    /// Returns a compensation of own car travel done within one shift.
    pub fn paid_cost(&self, travel_time: Minutes, travel_distance: Float) -> Float {
        match self {
            Self::ByTime { rate, unpaid_time } => (travel_time - unpaid_time).max(0) as Float * rate,
            Self::ByDistance { rate, unpaid_distance } => (travel_distance - unpaid_distance).max(0.) * rate,
        }
    }
}

/// Salary rules shared by drivers of one kind, e.g. internal national drivers.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalarySettings {
    /// Weekday rate blocks sorted by start time. Time before the first block is paid by the last one.
    pub weekday_rates: Vec<SalaryRateBlock>,
    /// A salary per minute on Saturday and Sunday.
    pub weekend_rate: Float,
    /// Shorter main shifts are paid as if they lasted this long.
    #[serde(default)]
    pub min_paid_shift_time: Minutes,
    /// Own car travel compensation.
    pub travel: TravelCompensation,
}

impl SalarySettings {
    /// Creates settings with the same rate at any time and fully paid travel time.
    pub fn flat(rate: Float) -> Self {
        Self {
            weekday_rates: vec![SalaryRateBlock { start_time: 0, rate, continuing_rate: 0. }],
            weekend_rate: rate,
            min_paid_shift_time: 0,
            travel: TravelCompensation::ByTime { rate, unpaid_time: 0 },
        }
    }

    /// Returns a salary of the main shift worked within the given time range.
    ///
    /// Each minute is paid by the rate of its weekday block, or by the weekend rate, but never less
    /// than the continuing rate of the block where the shift starts.
    pub fn main_shift_cost<F>(&self, start: Minutes, end: Minutes, is_weekend_day: F) -> Float
    where
        F: Fn(Minutes) -> bool,
    {
        let paid_end = start + (end - start).max(self.min_paid_shift_time);
        let continuing_rate = self.block_at(start.rem_euclid(MINUTES_PER_DAY)).map_or(0., |(block, _)| block.continuing_rate);

        let mut time = start;
        let mut cost = 0.;

        while time < paid_end {
            let day = time.div_euclid(MINUTES_PER_DAY);
            let (rate, block_end) = self
                .block_at(time.rem_euclid(MINUTES_PER_DAY))
                .map_or((0., MINUTES_PER_DAY), |(block, block_end)| (block.rate, block_end));

            let segment_end = (day * MINUTES_PER_DAY + block_end).min(paid_end);
            let rate = if is_weekend_day(day) { self.weekend_rate } else { rate };

            cost += (segment_end - time) as Float * rate.max(continuing_rate);
            time = segment_end;
        }

        cost
    }

    /// Checks that rate blocks are sorted within a day and rates are not negative.
    pub fn validate(&self) -> GenericResult<()> {
        let rates = &self.weekday_rates;

        if rates.iter().any(|block| !(0..MINUTES_PER_DAY).contains(&block.start_time)) {
            return Err("salary rate block must start within a day".into());
        }
        if rates.windows(2).any(|pair| pair[0].start_time >= pair[1].start_time) {
            return Err("salary rate blocks must be sorted by start time".into());
        }

        let travel_rate = match self.travel {
            TravelCompensation::ByTime { rate, .. } | TravelCompensation::ByDistance { rate, .. } => rate,
        };
        let has_negative_rate = rates.iter().any(|block| block.rate < 0. || block.continuing_rate < 0.)
            || self.weekend_rate < 0.
            || travel_rate < 0.;

        if has_negative_rate { Err("salary rates cannot be negative".into()) } else { Ok(()) }
    }

    /// Returns the block which covers the given minute of a day and the minute when it ends.
    fn block_at(&self, minute: Minutes) -> Option<(&SalaryRateBlock, Minutes)> {
        let rates = &self.weekday_rates;
        let first = rates.first()?;

        if minute < first.start_time {
            return rates.last().map(|last| (last, first.start_time));
        }

        let idx = rates.partition_point(|block| block.start_time <= minute) - 1;
        let block_end = rates.get(idx + 1).map_or(MINUTES_PER_DAY, |next| next.start_time);

        Some((&rates[idx], block_end))
    }
}

/// Returns default salary settings: internal drivers first, external ones second.
pub(crate) fn default_salaries() -> Vec<SalarySettings> {
    vec![
        SalarySettings {
            weekday_rates: vec![
                SalaryRateBlock { start_time: 0, rate: 0.5, continuing_rate: 0.5 },
                SalaryRateBlock { start_time: 360, rate: 0.4, continuing_rate: 0. },
                SalaryRateBlock { start_time: 1080, rate: 0.45, continuing_rate: 0. },
            ],
            weekend_rate: 0.6,
            min_paid_shift_time: 180,
            travel: TravelCompensation::ByTime { rate: 0.4, unpaid_time: 30 },
        },
        SalarySettings {
            weekday_rates: vec![
                SalaryRateBlock { start_time: 0, rate: 0.75, continuing_rate: 0. },
                SalaryRateBlock { start_time: 360, rate: 0.65, continuing_rate: 0. },
                SalaryRateBlock { start_time: 1080, rate: 0.7, continuing_rate: 0. },
            ],
            weekend_rate: 0.8,
            min_paid_shift_time: 240,
            travel: TravelCompensation::ByDistance { rate: 0.3, unpaid_distance: 50. },
        },
    ]
}

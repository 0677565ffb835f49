#[cfg(test)]
#[path = "../../tests/unit/costs/shift_test.rs"]
mod shift_test;

use crate::models::DriverInfo;
use crate::models::problem::{Activity, Driver, Problem};
use crate::utils::{Float, Minutes};

/// Specifies activities adjacent to an evaluated window in the driver path.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowContext {
    /// An activity right before the window.
    pub before: Option<usize>,
    /// An activity right after the window.
    pub after: Option<usize>,
}

/// Evaluates a sequence of path adjacent activities of the driver and returns shift level measurements.
///
/// Path level terms (shift count violation, penalty amount, satisfaction and total cost) are not set:
/// they depend on the whole path and are finished separately.
pub fn evaluate_window<F>(
    problem: &Problem,
    driver: &Driver,
    window: &[usize],
    is_hotel_after: F,
    context: WindowContext,
) -> DriverInfo
where
    F: Fn(usize) -> bool,
{
    let mut info = DriverInfo::new(problem.shared_route_count());
    let activity = |idx: usize| &problem.activities[idx];

    let mut first_idx = 0;
    for (idx, &current) in window.iter().enumerate() {
        if let Some(route) = activity(current).shared_route {
            info.shared_route_counts[route] += 1;
        }

        let next = window.get(idx + 1).copied();
        match next {
            Some(next) if problem.are_same_shift(activity(current), activity(next), is_hotel_after(current)) => {
                add_succession(problem, &mut info, activity(current), activity(next));
            }
            _ => {
                let previous = if first_idx > 0 { Some(window[first_idx - 1]) } else { context.before };
                let shift = ShiftBounds {
                    previous: previous.filter(|&previous| is_hotel_after(previous)).map(activity),
                    first: activity(window[first_idx]),
                    last: activity(current),
                    next: next.or(context.after).map(activity),
                    is_hotel_after: is_hotel_after(current),
                };

                add_shift(problem, driver, &mut info, shift);
                first_idx = idx + 1;
            }
        }
    }

    info
}

/// Returns index of the first activity of the shift which contains activity at the given path position.
pub fn find_shift_start<F>(problem: &Problem, path: &[usize], position: usize, is_hotel_after: F) -> usize
where
    F: Fn(usize) -> bool,
{
    let activity = |idx: usize| &problem.activities[path[idx]];

    (1..=position)
        .rev()
        .find(|&idx| !problem.are_same_shift(activity(idx - 1), activity(idx), is_hotel_after(path[idx - 1])))
        .unwrap_or(0)
}

/// Returns index of the last activity of the shift which contains activity at the given path position.
pub fn find_shift_end<F>(problem: &Problem, path: &[usize], position: usize, is_hotel_after: F) -> usize
where
    F: Fn(usize) -> bool,
{
    let activity = |idx: usize| &problem.activities[path[idx]];

    (position..path.len().saturating_sub(1))
        .find(|&idx| !problem.are_same_shift(activity(idx), activity(idx + 1), is_hotel_after(path[idx])))
        .unwrap_or(path.len().saturating_sub(1).max(position))
}

struct ShiftBounds<'a> {
    /// The last activity of the previous shift, only when it is followed by a hotel stay.
    previous: Option<&'a Activity>,
    first: &'a Activity,
    last: &'a Activity,
    /// The first activity of the next shift.
    next: Option<&'a Activity>,
    is_hotel_after: bool,
}

/// Travel split into a part shared with colleagues and a part done by own car.
#[derive(Default)]
struct Travel {
    shared_time: Minutes,
    shared_distance: Float,
    own_time: Minutes,
    own_distance: Float,
}

fn add_succession(problem: &Problem, info: &mut DriverInfo, from: &Activity, to: &Activity) {
    if !problem.is_valid_succession(from, to) {
        info.penalty.add_overlap();
    }

    info.stats.robustness += problem.succession_robustness(from, to);
    info.stats.raw_cost += problem.travel_distance(from, to) * problem.rules.costs.shared_car_cost_per_km;
}

fn add_shift(problem: &Problem, driver: &Driver, info: &mut DriverInfo, shift: ShiftBounds) {
    let ShiftBounds { previous, first, last, next, is_hotel_after } = shift;
    let shift_rules = &problem.rules.shift;

    let travel_before = match previous {
        Some(previous) => hotel_travel(problem, previous, first),
        None => {
            let (own_time, own_distance) = problem.home_travel_to(driver, first.start_location);
            Travel { own_time, own_distance, ..Travel::default() }
        }
    };

    let hotel_next = next.filter(|_| is_hotel_after);
    let travel_after = match hotel_next {
        Some(next) => hotel_travel(problem, last, next),
        None => {
            let (own_time, own_distance) = problem.home_travel_from(driver, last.end_location);
            Travel { own_time, own_distance, ..Travel::default() }
        }
    };

    let main_start = first.start_time - travel_before.shared_time;
    let main_end = last.end_time + travel_after.shared_time;
    let own_travel = travel_before.own_time + travel_after.own_time;
    let own_distance = travel_before.own_distance + travel_after.own_distance;
    let span = last.end_time - first.start_time;
    let full_length = main_end - main_start + own_travel;

    let is_night = problem.is_night_shift(main_start, main_end);

    info.shift_count += 1;
    info.worked_time += span;
    info.travel_time += own_travel;
    info.night_shift_count += is_night as i64;
    info.weekend_shift_count += problem.is_weekend_shift(main_start) as i64;

    info.stats.raw_cost += problem.main_shift_cost(driver, main_start, main_end)
        + problem.salary(driver).travel.paid_cost(own_travel, own_distance)
        + (travel_before.shared_distance + travel_after.shared_distance) * problem.rules.costs.shared_car_cost_per_km;

    let full_start = main_start - travel_before.own_time;
    let full_end = main_end + travel_after.own_time;
    info.penalty.add_possible_availability_violation(driver, full_start, full_end);

    let max_length = if is_night { shift_rules.max_night_shift_length } else { shift_rules.max_day_shift_length };
    info.penalty.add_possible_shift_length_violation(full_length, max_length);
    info.ideal_shift_length_score += (span - problem.rules.satisfaction.ideal_shift_length).max(0);

    let Some(next) = next else {
        if is_hotel_after {
            info.penalty.add_invalid_hotel();
        }
        return;
    };

    let rest_time = if is_hotel_after {
        info.hotel_count += 1;
        info.stats.raw_cost += problem.rules.costs.hotel_cost;

        let rest_time =
            next.start_time - last.end_time - problem.travel_time(last, next) - shift_rules.hotel_extra_travel_time;
        if !driver.is_hotel_allowed || rest_time > shift_rules.hotel_max_rest_time {
            info.penalty.add_invalid_hotel();
        }

        rest_time
    } else {
        let to_next = problem.home_travel_to(driver, next.start_location).0;
        let rest_time = next.start_time - last.end_time - travel_after.own_time - to_next;

        if rest_time >= shift_rules.double_free_day_min_rest {
            info.double_free_day_count += 1;
        } else if rest_time >= shift_rules.single_free_day_min_rest {
            info.single_free_day_count += 1;
        }

        rest_time
    };

    let min_rest = if is_night { shift_rules.min_rest_after_night_shift } else { shift_rules.min_rest_after_day_shift };
    info.penalty.add_possible_rest_time_violation(rest_time, min_rest);

    let rest_deficit = (problem.rules.satisfaction.ideal_rest_time - rest_time).max(0);
    info.ideal_rest_time_score += rest_deficit * rest_deficit;
}

/// Returns a half of the travel via hotel: the other half belongs to the adjacent shift.
fn hotel_travel(problem: &Problem, from: &Activity, to: &Activity) -> Travel {
    let shift_rules = &problem.rules.shift;

    Travel {
        shared_time: (problem.travel_time(from, to) + shift_rules.hotel_extra_travel_time) / 2,
        shared_distance: (problem.travel_distance(from, to) + shift_rules.hotel_extra_travel_distance) / 2.,
        own_time: 0,
        own_distance: 0.,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/costs/range_test.rs"]
mod range_test;

use super::*;
use crate::models::problem::Problem;
use crate::models::solution::RunState;
use crate::models::DriverInfo;
use tinyvec::TinyVec;

/// A single change of a driver path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathEdit {
    /// An activity leaves the path.
    Remove(usize),
    /// An activity joins the path.
    Insert(usize),
    /// A hotel stay flag after the activity is flipped.
    ToggleHotel(usize),
}

type Window = TinyVec<[usize; 16]>;

/// A half open range of path positions which contains every shift affected by the edits.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct PathRange {
    start: usize,
    end: usize,
}

/// Returns a change of the driver info caused by applying edits to the driver path.
///
/// Only shifts around edited positions are evaluated: the old and new versions of each relevant range
/// are walked and their difference is finished with path level terms.
pub fn driver_delta(state: &RunState, slot: usize, edits: &[PathEdit]) -> DriverInfo {
    let problem = state.problem();
    let driver = &problem.drivers[slot];
    let path = state.driver_path(slot);

    let old_hotel = |activity: usize| state.is_hotel_after(activity);
    let new_hotel = |activity: usize| {
        let is_toggled = edits.iter().any(|edit| *edit == PathEdit::ToggleHotel(activity));
        state.is_hotel_after(activity) != is_toggled
    };

    let raw = get_relevant_ranges(state, slot, edits).into_iter().fold(DriverInfo::default(), |acc, range| {
        let old_window = &path[range.start..range.end];
        let new_window = apply_edits(state, slot, range, edits);

        let context = WindowContext {
            before: range.start.checked_sub(1).map(|idx| path[idx]),
            after: path.get(range.end).copied(),
        };

        let old_info = evaluate_window(problem, driver, old_window, old_hotel, context);
        let new_info = evaluate_window(problem, driver, new_window.as_slice(), new_hotel, context);

        &acc + &(&new_info - &old_info)
    });

    finish_driver_delta(problem, slot, state.driver_info(slot), raw)
}

/// Finishes a raw change with path level terms which are not additive over shifts.
pub(crate) fn finish_driver_delta(problem: &Problem, slot: usize, old_info: &DriverInfo, raw: DriverInfo) -> DriverInfo {
    let driver = &problem.drivers[slot];
    let mut delta = raw;

    let new_shift_count = old_info.shift_count + delta.shift_count;
    delta.penalty.shift_count_violation =
        shift_count_violation(problem, slot, new_shift_count) - shift_count_violation(problem, slot, old_info.shift_count);
    delta.stats.penalty = delta.penalty.penalty(&problem.rules.penalties);

    let new_info = old_info + &delta;
    delta.stats.driver_satisfaction =
        driver_satisfaction(problem, driver, &new_info) - driver_satisfaction(problem, driver, old_info);
    delta.stats.cost = delta.stats.raw_cost + delta.stats.robustness + delta.stats.penalty;

    delta
}

/// Finishes a raw info of the whole path with path level terms.
pub(crate) fn finish_full_info(problem: &Problem, slot: usize, raw: DriverInfo) -> DriverInfo {
    let mut info = raw;

    info.penalty.shift_count_violation = shift_count_violation(problem, slot, info.shift_count);
    info.stats.penalty = info.penalty.penalty(&problem.rules.penalties);
    info.stats.driver_satisfaction = driver_satisfaction(problem, &problem.drivers[slot], &info);
    info.stats.cost = info.stats.raw_cost + info.stats.robustness + info.stats.penalty;

    info
}

/// Returns amount of shifts above the max shift count, external drivers are bound by their type instead.
fn shift_count_violation(problem: &Problem, slot: usize, shift_count: i64) -> i64 {
    if problem.drivers[slot].is_internal() { (shift_count - problem.rules.shift.max_shift_count).max(0) } else { 0 }
}

fn get_relevant_ranges(state: &RunState, slot: usize, edits: &[PathEdit]) -> TinyVec<[PathRange; 2]> {
    let problem = state.problem();
    let path = state.driver_path(slot);
    let is_hotel_after = |activity: usize| state.is_hotel_after(activity);

    let mut ranges = edits
        .iter()
        .map(|edit| {
            let (left, right) = match *edit {
                PathEdit::Remove(activity) => {
                    let position = state.paths().position(activity);
                    (position.checked_sub(1), position + 1)
                }
                PathEdit::Insert(activity) => {
                    let position = state.paths().insert_position(slot, activity);
                    (position.checked_sub(1), position)
                }
                PathEdit::ToggleHotel(activity) => {
                    let position = state.paths().position(activity);
                    (Some(position), position + 1)
                }
            };

            let start = left.map_or(0, |left| find_shift_start(problem, path, left, is_hotel_after));
            let end = if right < path.len() { find_shift_end(problem, path, right, is_hotel_after) + 1 } else { path.len() };

            PathRange { start, end }
        })
        .collect::<TinyVec<[PathRange; 2]>>();

    ranges.sort_by_key(|range| range.start);

    ranges.into_iter().fold(TinyVec::default(), |mut acc: TinyVec<[PathRange; 2]>, range| {
        match acc.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => acc.push(range),
        }
        acc
    })
}

/// Returns activities of the range after edits which belong to it are applied.
fn apply_edits(state: &RunState, slot: usize, range: PathRange, edits: &[PathEdit]) -> Window {
    let path = state.driver_path(slot);

    let mut window = path[range.start..range.end]
        .iter()
        .filter(|&&activity| !edits.contains(&PathEdit::Remove(activity)))
        .copied()
        .collect::<Window>();

    edits
        .iter()
        .filter_map(|edit| match *edit {
            PathEdit::Insert(activity) => Some(activity),
            _ => None,
        })
        .filter(|&activity| {
            let position = state.paths().insert_position(slot, activity);
            range.start <= position && position <= range.end
        })
        .for_each(|activity| {
            let position = window.partition_point(|&other| other < activity);
            window.insert(position, activity);
        });

    window
}

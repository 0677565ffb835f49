use super::*;
use crate::helpers::models::*;
use crate::models::problem::Driver;
use crate::utils::Minutes;
use std::sync::Arc;

const MORNING: Minutes = 480;

fn create_week_problem() -> Arc<Problem> {
    create_week_problem_with_drivers(vec![test_internal_driver(0), test_internal_driver(1)])
}

fn create_week_problem_with_drivers(internal_drivers: Vec<Driver>) -> Arc<Problem> {
    let times = (0..5)
        .flat_map(|day| {
            let start = day * DAY + MORNING;
            vec![(start, start + 60), (start + 120, start + 240), (start + 400, start + 460)]
        })
        .collect::<Vec<_>>();

    internal_drivers
        .into_iter()
        .fold(ProblemBuilder::default().with_activity_times(times.as_slice()), |builder, driver| builder.with_driver(driver))
        .with_external_type(1, 4, 100., 2)
        .with_criteria(create_default_criteria())
        .build()
}

fn apply_edits_fully(state: &RunState, slot: usize, edits: &[PathEdit]) -> (Vec<usize>, Vec<bool>) {
    let mut path = state.driver_path(slot).to_vec();
    let mut hotel_flags = state.hotel_flags().to_vec();

    edits.iter().for_each(|edit| match *edit {
        PathEdit::Remove(activity) => path.retain(|&other| other != activity),
        PathEdit::Insert(activity) => {
            let position = path.partition_point(|&other| other < activity);
            path.insert(position, activity);
        }
        PathEdit::ToggleHotel(activity) => hotel_flags[activity] = !hotel_flags[activity],
    });

    (path, hotel_flags)
}

fn assert_agreement(state: &RunState, slot: usize, edits: &[PathEdit]) {
    let problem = state.problem();
    let (path, hotel_flags) = apply_edits_fully(state, slot, edits);
    let expected = compute_driver_info(problem, slot, path.as_slice(), hotel_flags.as_slice());

    let delta = driver_delta(state, slot, edits);
    let actual = state.driver_info(slot) + &delta;

    assert!(actual.approx_eq(&expected), "edits {edits:?} of driver {slot}:\nactual {actual:?}\nexpected {expected:?}");
}

parameterized_test! {can_calculate_delta_equal_to_full_recomputation, (assignment, hotels, slot, edits), {
    can_calculate_delta_equal_to_full_recomputation_impl(assignment, hotels, slot, edits);
}}

can_calculate_delta_equal_to_full_recomputation! {
    case01_remove_first: (vec![0; 15], vec![], 0, vec![PathEdit::Remove(0)]),
    case02_remove_middle_of_shift: (vec![0; 15], vec![], 0, vec![PathEdit::Remove(4)]),
    case03_remove_last: (vec![0; 15], vec![], 0, vec![PathEdit::Remove(14)]),
    case04_insert_into_empty: (vec![0; 15], vec![], 1, vec![PathEdit::Insert(7)]),
    case05_insert_between_shifts: (vec![0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0], vec![], 0,
                                   vec![PathEdit::Insert(4)]),
    case06_insert_merging_shifts: (vec![0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], vec![], 1,
                                   vec![PathEdit::Insert(0)]),
    case07_toggle_hotel_on: (vec![0; 15], vec![], 0, vec![PathEdit::ToggleHotel(1)]),
    case08_toggle_hotel_off: (vec![0; 15], vec![1, 2], 0, vec![PathEdit::ToggleHotel(1)]),
    case09_remove_and_insert: (vec![0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0], vec![5], 0,
                               vec![PathEdit::Remove(4), PathEdit::Insert(5)]),
    case10_remove_after_hotel: (vec![0; 15], vec![2], 0, vec![PathEdit::Remove(3)]),
    case11_remove_before_hotel: (vec![0; 15], vec![2, 5], 0, vec![PathEdit::Remove(2)]),
    case12_external_insert: (vec![0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0], vec![], 2,
                             vec![PathEdit::Insert(8)]),
    case13_over_max_shift_count: (vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1], vec![], 0,
                                  vec![PathEdit::Insert(14)]),
}

fn can_calculate_delta_equal_to_full_recomputation_impl(
    assignment: Vec<usize>,
    hotels: Vec<usize>,
    slot: usize,
    edits: Vec<PathEdit>,
) {
    let problem = create_week_problem();
    let hotel_flags = (0..assignment.len()).map(|activity| hotels.contains(&activity)).collect();
    let state = create_test_state_with_hotels(problem, assignment, hotel_flags);

    assert_agreement(&state, slot, edits.as_slice());
}

#[test]
fn can_add_shift_count_violation_when_hotel_splits_shift() {
    let problem = create_week_problem();
    let mut assignment = vec![0; 15];
    assignment[14] = 1;
    let state = create_test_state(problem, assignment);

    let delta = driver_delta(&state, 0, &[PathEdit::ToggleHotel(1)]);

    assert_eq!(state.driver_info(0).shift_count, 5);
    assert_eq!(delta.shift_count, 1);
    assert_eq!(delta.penalty.shift_count_violation, 1);
    assert_eq!(delta.stats.cost, delta.stats.raw_cost + delta.stats.robustness + delta.stats.penalty);
}

#[test]
fn can_calculate_delta_for_every_edit_of_random_state() {
    let state = create_random_state(17, 4);
    let problem = state.problem();

    (0..problem.activities.len()).for_each(|activity| {
        let old_slot = state.driver_of(activity);
        assert_agreement(&state, old_slot, &[PathEdit::Remove(activity)]);
        assert_agreement(&state, old_slot, &[PathEdit::ToggleHotel(activity)]);

        (0..problem.drivers.len()).filter(|&slot| slot != old_slot).for_each(|slot| {
            assert_agreement(&state, slot, &[PathEdit::Insert(activity)]);
        });
    });
}

#[test]
fn can_calculate_delta_for_swap_edits_of_random_state() {
    let state = create_random_state(23, 5);
    let activity_count = state.problem().activities.len();

    (0..activity_count).step_by(3).for_each(|first| {
        (0..activity_count).filter(|&second| state.driver_of(first) != state.driver_of(second)).for_each(|second| {
            let slot = state.driver_of(first);
            assert_agreement(&state, slot, &[PathEdit::Remove(first), PathEdit::Insert(second)]);
        });
    });
}

#[test]
fn can_calculate_delta_for_unavailable_driver() {
    let unavailable = with_unavailabilities(test_internal_driver(1), &[(2 * DAY + MORNING + 150, 2 * DAY + MORNING + 160)]);
    let problem = create_week_problem_with_drivers(vec![test_internal_driver(0), unavailable]);
    let mut assignment = vec![0; 15];
    assignment[6] = 1;
    let state = create_test_state(problem, assignment);

    let joins_shift = driver_delta(&state, 1, &[PathEdit::Insert(7)]);
    let separate_shift = driver_delta(&state, 1, &[PathEdit::Insert(8)]);

    assert_eq!(state.driver_info(1).penalty.availability_violation_count, 0);
    assert_eq!(joins_shift.penalty.availability_violation_count, 1);
    assert_eq!(separate_shift.penalty.availability_violation_count, 0);
    [PathEdit::Insert(7), PathEdit::Insert(8), PathEdit::Remove(6)]
        .iter()
        .for_each(|edit| assert_agreement(&state, 1, std::slice::from_ref(edit)));
}

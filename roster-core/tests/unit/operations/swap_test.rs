use super::*;
use crate::helpers::models::*;
use crate::models::Problem;
use crate::utils::Minutes;
use std::sync::Arc;

const MORNING: Minutes = 480;

fn create_state() -> RunState {
    let problem: Arc<Problem> = ProblemBuilder::default()
        .with_activity_times(&[
            (MORNING, MORNING + 120),
            (MORNING + 20, MORNING + 140),
            (DAY + MORNING, DAY + MORNING + 60),
            (DAY + MORNING + 40, DAY + MORNING + 100),
            (DAY + MORNING + 120, DAY + MORNING + 180),
        ])
        .with_internal_drivers(2)
        .with_external_type(0, 5, 100., 1)
        .with_criteria(create_default_criteria())
        .build();

    create_test_state(problem, vec![0, 1, 0, 1, 1])
}

#[test]
fn can_swap_activities_of_different_drivers() {
    let mut state = create_state();
    let original_total = *state.total();
    let operation = SwapOperation::new(0, 1);

    let delta = match operation.evaluate(&state) {
        Feasibility::Feasible(delta) => delta,
        Feasibility::Infeasible(infeasibility) => panic!("unexpected infeasibility: {infeasibility:?}"),
    };
    operation.commit(&mut state, &delta);

    assert_eq!(operation.kind(), OperationKind::Swap);
    assert_eq!(operation.activities(), (0, 1));
    assert_eq!(state.driver_of(0), 1);
    assert_eq!(state.driver_of(1), 0);
    assert_eq!(state.driver_path(0), &[1, 2]);
    assert_eq!(state.driver_path(1), &[0, 3, 4]);
    assert!(state.check_consistency().is_ok());

    let inverse = SwapOperation::new(1, 0);
    match inverse.evaluate(&state) {
        Feasibility::Feasible(inverse_delta) => {
            assert!(inverse_delta.total.approx_eq(&(-delta.total)));
            inverse.commit(&mut state, &inverse_delta);
        }
        Feasibility::Infeasible(infeasibility) => panic!("unexpected infeasibility: {infeasibility:?}"),
    }

    assert_eq!(state.assignment(), &[0, 1, 0, 1, 1]);
    assert!(state.total().approx_eq(&original_total));
    assert!(state.check_consistency().is_ok());
}

#[test]
fn can_swap_with_external_driver() {
    let mut state = create_state();
    let operation = AssignOperation::external(4, 2);
    if let Feasibility::Feasible(delta) = operation.evaluate(&state) {
        operation.commit(&mut state, &delta);
    }
    assert_eq!(state.driver_of(4), 2);

    let swap = SwapOperation::new(0, 4);
    let Feasibility::Feasible(delta) = swap.evaluate(&state) else { panic!("swap is not feasible") };
    swap.commit(&mut state, &delta);

    assert!(delta.externals.is_empty());
    assert_eq!(state.driver_of(0), 2);
    assert_eq!(state.driver_of(4), 0);
    assert!(state.check_consistency().is_ok());
}

parameterized_test! {can_detect_infeasible_swap, (first, second, expected), {
    let state = create_state();

    let result = SwapOperation::new(first, second).evaluate(&state);

    assert!(matches!(result, Feasibility::Infeasible(infeasibility) if infeasibility == expected));
}}

can_detect_infeasible_swap! {
    case01_same_driver: (0, 2, Infeasibility::Degenerate),
    case02_same_driver_reversed: (4, 1, Infeasibility::Degenerate),
    case03_same_activity: (3, 3, Infeasibility::Degenerate),
    case04_overlap_after_swap: (2, 4, Infeasibility::TimeOverlap),
}

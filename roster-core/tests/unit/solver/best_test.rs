use super::*;
use crate::helpers::models::*;
use crate::models::Problem;
use crate::utils::Minutes;
use std::sync::Arc;

const MORNING: Minutes = 480;

fn create_problem() -> Arc<Problem> {
    let times = (0..6).map(|day| (day * DAY + MORNING, day * DAY + MORNING + 240)).collect::<Vec<_>>();

    ProblemBuilder::default()
        .with_activity_times(times.as_slice())
        .with_internal_drivers(2)
        .with_external_type(0, 6, 0., 1)
        .with_criteria(create_default_criteria())
        .build()
}

#[test]
fn can_keep_best_solution_by_cost() {
    let problem = create_problem();
    let expensive = create_test_state(problem.clone(), vec![2; 6]);
    let cheap = create_test_state(problem.clone(), vec![0, 1, 0, 1, 0, 1]);
    assert!(cheap.total().stats.cost < expensive.total().stats.cost);

    let mut best_solutions = BestSolutions::new(&expensive);

    assert!(best_solutions.try_improve(&cheap));
    assert!(!best_solutions.try_improve(&expensive));
    assert!(!best_solutions.try_improve(&cheap));
    assert_eq!(best_solutions.best().assignment, cheap.assignment());
}

#[test]
fn can_build_pareto_front_of_penalty_free_solutions() {
    let problem = create_problem();
    let assignments = [
        vec![2, 2, 2, 2, 2, 2],
        vec![0, 1, 0, 1, 0, 1],
        vec![0, 0, 0, 1, 1, 1],
        vec![0, 0, 0, 0, 1, 2],
        vec![0, 2, 1, 2, 0, 2],
        vec![0, 0, 0, 0, 0, 1],
    ];
    let states = assignments.into_iter().map(|assignment| create_test_state(problem.clone(), assignment)).collect::<Vec<_>>();

    let mut best_solutions = BestSolutions::new(&states[0]);
    states.iter().skip(1).for_each(|state| {
        best_solutions.try_improve(state);
    });

    let front = best_solutions.pareto_front();

    assert!(!front.is_empty());
    assert!(front.iter().all(|solution| is_penalty_free(&solution.total)));
    front.windows(2).for_each(|pair| {
        let (better, worse) = (pair[0].total.stats, pair[1].total.stats);
        assert!(better.satisfaction_score >= worse.satisfaction_score);
        assert!(better.cost > worse.cost);
    });
}

#[test]
fn can_skip_solutions_with_penalties_in_pareto_front() {
    let problem = create_problem();
    // max shift count is exceeded by the first driver
    let state = create_test_state(problem, vec![0; 6]);
    assert!(!is_penalty_free(state.total()));

    let best_solutions = BestSolutions::new(&state);
    let (best, front) = best_solutions.into_parts();

    assert_eq!(best.assignment, vec![0; 6]);
    assert!(front.is_empty());
}

#[test]
fn can_detect_penalty_free_total() {
    let mut total = TotalInfo::default();
    assert!(is_penalty_free(&total));

    total.external_shift_count_violation = 1;
    assert!(!is_penalty_free(&total));

    total.external_shift_count_violation = 0;
    total.penalty.rest_time_violation_count = 1;
    assert!(!is_penalty_free(&total));
}

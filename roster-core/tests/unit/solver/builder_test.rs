use super::*;
use crate::helpers::models::*;
use crate::utils::DefaultRandom;
use std::sync::Mutex;

fn create_logging_environment(parallelism: usize, seed: Option<u64>) -> (Arc<Environment>, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (Arc::new(Environment::new(Arc::new(DefaultRandom::default()), None, parallelism, seed, logger)), messages)
}

fn create_progress(iteration: usize, temperature: Float, iterations_since_improvement: usize) -> SearchProgress {
    SearchProgress { iteration, temperature, iterations_since_improvement, elapsed_secs: 0. }
}

#[test]
fn can_use_default_termination() {
    let (environment, messages) = create_logging_environment(1, None);

    let solver = SolverBuilder::new(create_random_problem(0, 2), environment).build().expect("cannot build solver");

    assert!(messages.lock().unwrap().iter().any(|msg| msg == "configured to use default max-iterations (100000) and max-time (300secs)"));
    assert!(!solver.termination.is_termination(&create_progress(99_999, 1., 0)));
    assert!(solver.termination.is_termination(&create_progress(100_000, 1., 0)));
    assert!(solver.environment.quota.is_none());
}

#[test]
fn can_combine_termination_criteria() {
    let (environment, messages) = create_logging_environment(1, None);

    let solver = SolverBuilder::new(create_random_problem(0, 2), environment)
        .with_max_iterations(Some(500))
        .with_min_temperature(Some(0.5))
        .with_stall_iterations(Some(100))
        .build()
        .expect("cannot build solver");

    assert!(!solver.termination.is_termination(&create_progress(10, 1., 10)));
    assert!(solver.termination.is_termination(&create_progress(500, 1., 0)));
    assert!(solver.termination.is_termination(&create_progress(10, 0.1, 0)));
    assert!(solver.termination.is_termination(&create_progress(200, 1., 100)));

    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg == "configured to use max-iterations 500"));
    assert!(messages.iter().any(|msg| msg == "configured to use min-temperature 0.5"));
    assert!(messages.iter().any(|msg| msg == "configured to use stall-iterations 100"));
    assert!(!messages.iter().any(|msg| msg.contains("default max-iterations")));
}

#[test]
fn can_add_time_quota_with_max_time() {
    let (environment, _) = create_logging_environment(1, None);

    let solver = SolverBuilder::new(create_random_problem(0, 2), environment)
        .with_max_time(Some(10))
        .build()
        .expect("cannot build solver");

    assert!(solver.environment.quota.is_some());
    assert!(!solver.environment.is_quota_reached());
}

#[test]
fn can_keep_annealing_parameters() {
    let (environment, _) = create_logging_environment(3, Some(1));

    let solver = SolverBuilder::new(create_random_problem(0, 2), environment)
        .with_initial_temperature(50.)
        .with_temperature_reduction(0.9, 200)
        .with_satisfaction_factor(0.5)
        .with_max_sample_attempts(20)
        .with_consistency_check(true)
        .build()
        .expect("cannot build solver");

    assert_eq!(solver.config.initial_temperature, 50.);
    assert_eq!(solver.config.reduction_factor, 0.9);
    assert_eq!(solver.config.reduction_frequency, 200);
    assert_eq!(solver.config.satisfaction_factor, 0.5);
    assert_eq!(solver.config.max_sample_attempts, 20);
    assert!(solver.config.check_consistency);
    assert_eq!(solver.environment.parallelism, 3);
}

parameterized_test! {can_validate_parameters, (modify, expected), {
    let (environment, _) = create_logging_environment(1, None);
    let modify: fn(SolverBuilder) -> SolverBuilder = modify;

    let result = modify(SolverBuilder::new(create_random_problem(0, 2), environment)).build();

    assert_eq!(result.err().map(|err| err.to_string()), Some(expected.to_string()));
}}

can_validate_parameters! {
    case01_negative_weight: (|builder: SolverBuilder| builder.with_operation_weights(OperationWeights { swap: -1., ..OperationWeights::default() }),
                             "operation weights must be non-negative with positive sum"),
    case02_zero_weights: (|builder: SolverBuilder| builder.with_operation_weights(OperationWeights { assign_internal: 0., assign_external: 0., swap: 0., toggle_hotel: 0. }),
                          "operation weights must be non-negative with positive sum"),
    case03_zero_temperature: (|builder: SolverBuilder| builder.with_initial_temperature(0.),
                              "initial temperature must be positive"),
    case04_big_reduction_factor: (|builder: SolverBuilder| builder.with_temperature_reduction(1.5, 100),
                                  "temperature reduction factor must be in (0, 1] range"),
    case05_zero_reduction_frequency: (|builder: SolverBuilder| builder.with_temperature_reduction(0.9, 0),
                                      "temperature reduction frequency must be positive"),
    case06_invalid_cycle_range: (|builder: SolverBuilder| builder.with_cycle(Some(CycleConfig {
                                     end_temperature: 1.,
                                     early_end_temperature: 1.,
                                     full_reset_probability: 0.1,
                                     temperature_range: (100., 10.),
                                     satisfaction_factor_range: (0., 1.),
                                 })),
                                 "cycle ranges must be non-negative with min not greater than max"),
    case07_invalid_reset_probability: (|builder: SolverBuilder| builder.with_cycle(Some(CycleConfig {
                                           end_temperature: 1.,
                                           early_end_temperature: 1.,
                                           full_reset_probability: 1.5,
                                           temperature_range: (10., 100.),
                                           satisfaction_factor_range: (0., 1.),
                                       })),
                                       "cycle full reset probability must be in [0, 1] range"),
    case08_initial_solution_mismatch: (|builder: SolverBuilder| builder.with_initial_solution(Some(create_random_state(1, 1).solution())),
                                       "initial solution does not match the problem"),
}

#[test]
fn can_solve_problem_with_multiple_runs() {
    let problem = create_random_problem(7, 2);
    let (environment, _) = create_logging_environment(2, Some(7));

    let result = SolverBuilder::new(problem.clone(), environment)
        .with_max_iterations(Some(500))
        .with_temperature_reduction(0.9, 50)
        .with_consistency_check(true)
        .with_telemetry(TelemetryMode::None)
        .build()
        .and_then(|solver| solver.solve())
        .expect("cannot solve problem");

    assert_eq!(result.iterations, 1000);
    assert!(result.best.total.stats.cost > 0.);
    assert!(result.pareto_front.iter().all(|solution| is_penalty_free(&solution.total)));

    let state = RunState::from_solution(problem, &result.best).expect("cannot restore best solution");
    state.check_consistency().expect("best solution is not consistent");
}

#[test]
fn can_solve_problem_starting_from_initial_solution() {
    let state = create_random_state(9, 2);
    let problem = state.problem_ref();
    let solution = state.solution();
    let (environment, messages) = create_logging_environment(1, Some(9));

    let result = SolverBuilder::new(problem, environment)
        .with_max_iterations(Some(300))
        .with_initial_solution(Some(solution.clone()))
        .with_telemetry(TelemetryMode::None)
        .build()
        .and_then(|solver| solver.solve())
        .expect("cannot solve problem");

    assert_eq!(result.iterations, 300);
    assert!(result.best.total.stats.cost <= solution.total.stats.cost);
    assert!(messages.lock().unwrap().iter().any(|msg| msg == "provided initial solution to start with"));
}

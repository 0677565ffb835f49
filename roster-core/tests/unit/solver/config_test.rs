use super::*;
use crate::helpers::models::create_random_problem;

fn create_solver_from_json(json: &str) -> Solver {
    create_builder_from_config_file(create_random_problem(0, 1), BufReader::new(json.as_bytes()))
        .and_then(|builder| builder.build())
        .expect("cannot create solver from config")
}

#[test]
fn can_read_full_config() {
    let json = r#"
    {
      "annealing": {
        "operations": { "assignInternal": 1.0, "swap": 0.0 },
        "initialTemperature": 200.0,
        "reductionFactor": 0.9,
        "reductionFrequency": 250,
        "satisfactionFactor": 2.0,
        "maxSampleAttempts": 10
      },
      "termination": { "maxIterations": 1000, "minTemperature": 0.1 },
      "environment": { "parallelism": 2, "seed": 42, "checkConsistency": true },
      "telemetry": { "logging": { "enabled": true, "logEvery": 500, "logBest": true } }
    }
    "#;

    let solver = create_solver_from_json(json);

    let config = &solver.config;
    assert_eq!(config.weights.assign_internal, 1.);
    assert_eq!(config.weights.swap, 0.);
    assert_eq!(config.weights.assign_external, OperationWeights::default().assign_external);
    assert_eq!(config.initial_temperature, 200.);
    assert_eq!(config.reduction_factor, 0.9);
    assert_eq!(config.reduction_frequency, 250);
    assert_eq!(config.satisfaction_factor, 2.);
    assert_eq!(config.max_sample_attempts, 10);
    assert!(config.cycle.is_none());
    assert!(config.check_consistency);

    assert_eq!(solver.environment.parallelism, 2);
    assert_eq!(solver.environment.seed, Some(42));
    assert!(solver.termination.is_termination(&SearchProgress { iteration: 1000, ..SearchProgress::default() }));
    assert!(solver.termination.is_termination(&SearchProgress { iteration: 1, temperature: 0.01, ..SearchProgress::default() }));
    assert!(matches!(solver.telemetry_mode, TelemetryMode::OnlyLogging { log_every: 500, log_best: true, .. }));
}

#[test]
fn can_use_cycle_defaults() {
    let json = r#"
    {
      "annealing": {
        "initialTemperature": 500.0,
        "satisfactionFactor": 0.5,
        "cycle": { "endTemperature": 1.0 }
      }
    }
    "#;

    let solver = create_solver_from_json(json);

    let cycle = solver.config.cycle.expect("no cycle config");
    assert_eq!(cycle.end_temperature, 1.);
    assert_eq!(cycle.early_end_temperature, 1.);
    assert_eq!(cycle.full_reset_probability, 0.1);
    assert_eq!(cycle.temperature_range, (50., 500.));
    assert_eq!(cycle.satisfaction_factor_range, (0., 0.5));
}

#[test]
fn can_override_cycle_ranges() {
    let json = r#"
    {
      "annealing": {
        "cycle": {
          "endTemperature": 2.0,
          "earlyEndTemperature": 20.0,
          "fullResetProbability": 0.5,
          "temperature": { "min": 10.0, "max": 100.0 },
          "satisfactionFactor": { "min": 0.2, "max": 0.8 }
        }
      }
    }
    "#;

    let solver = create_solver_from_json(json);

    let cycle = solver.config.cycle.expect("no cycle config");
    assert_eq!(cycle.early_end_temperature, 20.);
    assert_eq!(cycle.full_reset_probability, 0.5);
    assert_eq!(cycle.temperature_range, (10., 100.));
    assert_eq!(cycle.satisfaction_factor_range, (0.2, 0.8));
}

#[test]
fn can_disable_logging() {
    let solver = create_solver_from_json(r#"{ "telemetry": { "logging": { "enabled": false } } }"#);

    assert!(matches!(solver.telemetry_mode, TelemetryMode::None));
}

#[test]
fn can_use_defaults_for_empty_config() {
    let solver = create_solver_from_json("{}");

    assert_eq!(solver.config.initial_temperature, AnnealingConfig::default().initial_temperature);
    assert!(!solver.config.check_consistency);
    assert!(solver.environment.parallelism >= 1);
    assert!(solver.environment.seed.is_none());
    assert!(matches!(solver.telemetry_mode, TelemetryMode::OnlyLogging { log_every: 10_000, log_best: false, .. }));
}

#[test]
fn can_report_invalid_config() {
    let result = read_config(BufReader::new("{ \"annealing\": 42 }".as_bytes()));

    assert!(result.err().is_some_and(|err| err.to_string().starts_with("cannot deserialize config")));
}

#[test]
fn can_report_invalid_parameters_on_build() {
    let json = r#"{ "annealing": { "reductionFactor": 2.0 } }"#;

    let result = create_builder_from_config_file(create_random_problem(0, 1), BufReader::new(json.as_bytes()))
        .and_then(|builder| builder.build());

    assert_eq!(
        result.err().map(|err| err.to_string()),
        Some("temperature reduction factor must be in (0, 1] range".to_string())
    );
}

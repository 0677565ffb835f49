//! Solver configuration.

#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use super::*;
use crate::operations::OperationWeights;
use crate::utils::{DefaultRandom, Float, GenericError, get_cpus};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A solver configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies annealing configuration.
    pub annealing: Option<AnnealingSection>,
    /// Specifies termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// An annealing configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnealingSection {
    /// Operation kind probabilities.
    pub operations: Option<OperationWeights>,
    /// Initial temperature. Default is 1000.
    pub initial_temperature: Option<Float>,
    /// Temperature reduction factor. Default is 0.95.
    pub reduction_factor: Option<Float>,
    /// Iterations between temperature reductions. Default is 1000.
    pub reduction_frequency: Option<usize>,
    /// Satisfaction factor. Default is 1.
    pub satisfaction_factor: Option<Float>,
    /// Attempts to sample a feasible operation. Default is 100.
    pub max_sample_attempts: Option<usize>,
    /// Temperature schedule restarts. Default is none.
    pub cycle: Option<CycleSection>,
}

/// A cycle configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSection {
    /// A temperature which ends a cycle.
    pub end_temperature: Float,
    /// A temperature which ends a cycle without penalty free states. Default is end temperature.
    pub early_end_temperature: Option<Float>,
    /// A probability to restart from the best solution. Default is 0.1.
    pub full_reset_probability: Option<Float>,
    /// A range of new cycle temperatures. Default is from a tenth of initial temperature to initial one.
    pub temperature: Option<RangeConfig>,
    /// A range of new cycle satisfaction factors. Default is from zero to configured factor.
    pub satisfaction_factor: Option<RangeConfig>,
}

/// A range configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct RangeConfig {
    /// Min value.
    pub min: Float,
    /// Max value.
    pub max: Float,
}

/// A termination configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max iterations of each run.
    pub max_iterations: Option<usize>,
    /// Max time in seconds.
    pub max_time: Option<usize>,
    /// Min temperature.
    pub min_temperature: Option<Float>,
    /// Max iterations without improvement.
    pub stall_iterations: Option<usize>,
}

/// An environment configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Amount of independent runs. Default is amount of CPUs.
    pub parallelism: Option<usize>,
    /// A seed for repeatable runs. Default is none.
    pub seed: Option<u64>,
    /// Checks accumulated values against full recomputation. Default is false.
    pub check_consistency: Option<bool>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies logging.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enables logging.
    pub enabled: bool,
    /// How often, in iterations, progress is logged. Default is 10000.
    pub log_every: Option<usize>,
    /// Logs each new best solution. Default is false.
    pub log_best: Option<bool>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| GenericError::from(err).with_context("cannot deserialize config"))
}

/// Creates a solver builder from config file.
pub fn create_builder_from_config_file<R: Read>(problem: Arc<Problem>, reader: BufReader<R>) -> GenericResult<SolverBuilder> {
    read_config(reader).and_then(|config| create_builder_from_config(problem, &config))
}

/// Creates a solver builder from config.
pub fn create_builder_from_config(problem: Arc<Problem>, config: &Config) -> GenericResult<SolverBuilder> {
    let environment = create_environment(&config.environment);
    let mut builder = SolverBuilder::new(problem, environment);

    builder = configure_from_telemetry(builder, &config.telemetry)?;
    builder = configure_from_annealing(builder, &config.annealing)?;
    builder = configure_from_termination(builder, &config.termination)?;

    if let Some(check_consistency) = config.environment.as_ref().and_then(|environment| environment.check_consistency) {
        builder = builder.with_consistency_check(check_consistency);
    }

    Ok(builder)
}

fn create_environment(environment_config: &Option<EnvironmentConfig>) -> Arc<Environment> {
    let (parallelism, seed) = environment_config
        .as_ref()
        .map_or((None, None), |config| (config.parallelism, config.seed));

    Arc::new(Environment::new(
        Arc::new(DefaultRandom::default()),
        None,
        parallelism.unwrap_or_else(get_cpus),
        seed,
        Arc::new(|msg: &str| println!("{msg}")),
    ))
}

fn configure_from_annealing(
    mut builder: SolverBuilder,
    annealing_config: &Option<AnnealingSection>,
) -> GenericResult<SolverBuilder> {
    let Some(config) = annealing_config else { return Ok(builder) };
    let defaults = AnnealingConfig::default();

    if let Some(weights) = config.operations.clone() {
        builder = builder.with_operation_weights(weights);
    }

    if let Some(temperature) = config.initial_temperature {
        builder = builder.with_initial_temperature(temperature);
    }

    if config.reduction_factor.is_some() || config.reduction_frequency.is_some() {
        builder = builder.with_temperature_reduction(
            config.reduction_factor.unwrap_or(defaults.reduction_factor),
            config.reduction_frequency.unwrap_or(defaults.reduction_frequency),
        );
    }

    if let Some(factor) = config.satisfaction_factor {
        builder = builder.with_satisfaction_factor(factor);
    }

    if let Some(attempts) = config.max_sample_attempts {
        builder = builder.with_max_sample_attempts(attempts);
    }

    if let Some(cycle) = config.cycle.as_ref() {
        let initial_temperature = config.initial_temperature.unwrap_or(defaults.initial_temperature);
        let satisfaction_factor = config.satisfaction_factor.unwrap_or(defaults.satisfaction_factor);
        let to_range = |range: &Option<RangeConfig>, default: (Float, Float)| {
            range.as_ref().map_or(default, |range| (range.min, range.max))
        };

        builder = builder.with_cycle(Some(CycleConfig {
            end_temperature: cycle.end_temperature,
            early_end_temperature: cycle.early_end_temperature.unwrap_or(cycle.end_temperature),
            full_reset_probability: cycle.full_reset_probability.unwrap_or(0.1),
            temperature_range: to_range(&cycle.temperature, (initial_temperature / 10., initial_temperature)),
            satisfaction_factor_range: to_range(&cycle.satisfaction_factor, (0., satisfaction_factor)),
        }));
    }

    Ok(builder)
}

fn configure_from_termination(
    mut builder: SolverBuilder,
    termination_config: &Option<TerminationConfig>,
) -> GenericResult<SolverBuilder> {
    if let Some(config) = termination_config {
        builder = builder.with_max_iterations(config.max_iterations);
        builder = builder.with_max_time(config.max_time);
        builder = builder.with_min_temperature(config.min_temperature);
        builder = builder.with_stall_iterations(config.stall_iterations);
    }

    Ok(builder)
}

fn configure_from_telemetry(
    builder: SolverBuilder,
    telemetry_config: &Option<TelemetryConfig>,
) -> GenericResult<SolverBuilder> {
    const LOG_EVERY: usize = 10_000;

    let telemetry_mode = match telemetry_config.as_ref().and_then(|config| config.logging.as_ref()) {
        Some(LoggingConfig { enabled: true, log_every, log_best }) => TelemetryMode::OnlyLogging {
            logger: Arc::new(|msg: &str| println!("{msg}")),
            log_every: log_every.unwrap_or(LOG_EVERY),
            log_best: log_best.unwrap_or(false),
        },
        Some(_) => TelemetryMode::None,
        None => return Ok(builder),
    };

    Ok(builder.with_telemetry(telemetry_mode))
}

#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use super::*;
use crate::models::Problem;
use crate::models::solution::Solution;
use crate::operations::OperationWeights;
use crate::utils::{Environment, Float, GenericResult, TimeQuota};
use std::sync::Arc;

/// Provides configurable way to build a solver.
pub struct SolverBuilder {
    problem: Arc<Problem>,
    environment: Arc<Environment>,
    max_iterations: Option<usize>,
    max_time: Option<usize>,
    min_temperature: Option<Float>,
    stall_iterations: Option<usize>,
    config: AnnealingConfig,
    initial_solution: Option<Solution>,
    telemetry_mode: TelemetryMode,
}

impl SolverBuilder {
    /// Creates a new instance of `SolverBuilder`.
    pub fn new(problem: Arc<Problem>, environment: Arc<Environment>) -> Self {
        let telemetry_mode = TelemetryMode::OnlyLogging {
            logger: environment.logger.clone(),
            log_every: 10_000,
            log_best: false,
        };

        Self {
            problem,
            environment,
            max_iterations: None,
            max_time: None,
            min_temperature: None,
            stall_iterations: None,
            config: AnnealingConfig::default(),
            initial_solution: None,
            telemetry_mode,
        }
    }

    /// Sets max iterations to be run by each annealing run.
    /// Default is 100000.
    pub fn with_max_iterations(mut self, limit: Option<usize>) -> Self {
        self.max_iterations = limit;
        self
    }

    /// Sets max running time limit in seconds.
    /// Default is 300 seconds.
    pub fn with_max_time(mut self, limit: Option<usize>) -> Self {
        self.max_time = limit;
        self
    }

    /// Sets a temperature threshold below which runs stop.
    /// Default is None.
    pub fn with_min_temperature(mut self, threshold: Option<Float>) -> Self {
        self.min_temperature = threshold;
        self
    }

    /// Sets amount of iterations without improvement after which runs stop.
    /// Default is None.
    pub fn with_stall_iterations(mut self, limit: Option<usize>) -> Self {
        self.stall_iterations = limit;
        self
    }

    /// Sets operation kind probabilities.
    pub fn with_operation_weights(mut self, weights: OperationWeights) -> Self {
        self.log(format!("configured to use operation weights {weights:?}").as_str());
        self.config.weights = weights;
        self
    }

    /// Sets initial temperature.
    /// Default is 1000.
    pub fn with_initial_temperature(mut self, temperature: Float) -> Self {
        self.log(format!("configured to use initial temperature {temperature}").as_str());
        self.config.initial_temperature = temperature;
        self
    }

    /// Sets temperature reduction factor and frequency in iterations.
    /// Default is 0.95 every 1000 iterations.
    pub fn with_temperature_reduction(mut self, factor: Float, frequency: usize) -> Self {
        self.log(format!("configured to use temperature reduction {factor} every {frequency} iterations").as_str());
        self.config.reduction_factor = factor;
        self.config.reduction_frequency = frequency;
        self
    }

    /// Sets satisfaction factor.
    /// Default is 1.
    pub fn with_satisfaction_factor(mut self, factor: Float) -> Self {
        self.log(format!("configured to use satisfaction factor {factor}").as_str());
        self.config.satisfaction_factor = factor;
        self
    }

    /// Sets maximum amount of attempts to sample a feasible operation.
    /// Default is 100.
    pub fn with_max_sample_attempts(mut self, attempts: usize) -> Self {
        self.config.max_sample_attempts = attempts;
        self
    }

    /// Sets annealing cycles.
    /// Default is None.
    pub fn with_cycle(mut self, cycle: Option<CycleConfig>) -> Self {
        if let Some(cycle) = cycle.as_ref() {
            self.log(format!("configured to use annealing cycles {cycle:?}").as_str());
        }
        self.config.cycle = cycle;
        self
    }

    /// Enables consistency checks of accumulated values.
    /// Default is false.
    pub fn with_consistency_check(mut self, is_enabled: bool) -> Self {
        self.config.check_consistency = is_enabled;
        self
    }

    /// Sets initial solution, e.g. derived from historical data.
    /// Default is a greedy assignment.
    pub fn with_initial_solution(mut self, solution: Option<Solution>) -> Self {
        if solution.is_some() {
            self.log("provided initial solution to start with");
        }
        self.initial_solution = solution;
        self
    }

    /// Sets telemetry mode.
    /// Default is logging every 10000 iterations.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = mode;
        self
    }

    /// Builds solver with parameters specified.
    pub fn build(self) -> GenericResult<Solver> {
        self.validate()?;

        let mut environment = self.environment.as_ref().clone();

        let terminations: Vec<Box<dyn Termination + Send + Sync>> =
            match (self.max_iterations, self.max_time, self.min_temperature, self.stall_iterations) {
                (None, None, None, None) => {
                    self.log("configured to use default max-iterations (100000) and max-time (300secs)");
                    vec![Box::new(MaxIterations::new(100_000)), Box::new(MaxTime::new(300.))]
                }
                (max_iterations, max_time, min_temperature, stall_iterations) => {
                    let mut terminations: Vec<Box<dyn Termination + Send + Sync>> = vec![];

                    if let Some(limit) = max_iterations {
                        self.log(format!("configured to use max-iterations {limit}").as_str());
                        terminations.push(Box::new(MaxIterations::new(limit)));
                    }

                    if let Some(limit) = max_time {
                        self.log(format!("configured to use max-time {limit}s").as_str());
                        terminations.push(Box::new(MaxTime::new(limit as Float)));
                        if environment.quota.is_none() {
                            environment.quota = Some(Arc::new(TimeQuota::new(limit as Float)));
                        }
                    }

                    if let Some(threshold) = min_temperature {
                        self.log(format!("configured to use min-temperature {threshold}").as_str());
                        terminations.push(Box::new(MinTemperature::new(threshold)));
                    }

                    if let Some(limit) = stall_iterations {
                        self.log(format!("configured to use stall-iterations {limit}").as_str());
                        terminations.push(Box::new(StallIterations::new(limit)));
                    }

                    terminations
                }
            };

        self.log(format!("configured to use {} independent run(s)", environment.parallelism).as_str());

        Ok(Solver {
            problem: self.problem,
            environment: Arc::new(environment),
            config: self.config,
            termination: Arc::new(CompositeTermination::new(terminations)),
            initial_solution: self.initial_solution,
            telemetry_mode: self.telemetry_mode,
        })
    }

    fn validate(&self) -> GenericResult<()> {
        let config = &self.config;
        let weights = &config.weights;
        let weight_values = [weights.assign_internal, weights.assign_external, weights.swap, weights.toggle_hotel];

        if weight_values.iter().any(|&weight| weight < 0.) || weight_values.iter().sum::<Float>() <= 0. {
            return Err("operation weights must be non-negative with positive sum".into());
        }

        if config.initial_temperature <= 0. {
            return Err("initial temperature must be positive".into());
        }

        if config.reduction_factor <= 0. || config.reduction_factor > 1. {
            return Err("temperature reduction factor must be in (0, 1] range".into());
        }

        if config.reduction_frequency == 0 {
            return Err("temperature reduction frequency must be positive".into());
        }

        if let Some(cycle) = config.cycle.as_ref() {
            let is_valid_range = |(min, max): (Float, Float)| min <= max && min >= 0.;
            if !is_valid_range(cycle.temperature_range) || !is_valid_range(cycle.satisfaction_factor_range) {
                return Err("cycle ranges must be non-negative with min not greater than max".into());
            }

            if !(0. ..=1.).contains(&cycle.full_reset_probability) {
                return Err("cycle full reset probability must be in [0, 1] range".into());
            }
        }

        if let Some(solution) = self.initial_solution.as_ref() {
            let activity_count = self.problem.activities.len();
            if solution.assignment.len() != activity_count || solution.hotel_flags.len() != activity_count {
                return Err("initial solution does not match the problem".into());
            }
        }

        Ok(())
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/solver/annealing_test.rs"]
mod annealing_test;

use super::*;
use crate::models::Stats;
use crate::models::solution::{RunState, Solution};
use crate::operations::{OperationSampler, OperationWeights};
use crate::utils::{Environment, Float, GenericResult, Random, Timer};

/// Specifies annealing parameters.
#[derive(Clone, Debug)]
pub struct AnnealingConfig {
    /// Relative probabilities of operation kinds.
    pub weights: OperationWeights,
    /// A temperature at the run start.
    pub initial_temperature: Float,
    /// A factor applied to the temperature on each reduction.
    pub reduction_factor: Float,
    /// Amount of iterations between temperature reductions.
    pub reduction_frequency: usize,
    /// Specifies how strongly low satisfaction increases the effective cost.
    pub satisfaction_factor: Float,
    /// Maximum amount of attempts to sample a feasible operation.
    pub max_sample_attempts: usize,
    /// Optional restarts of the temperature schedule.
    pub cycle: Option<CycleConfig>,
    /// When set, accumulators are checked against full recomputation on each temperature reduction
    /// and any drift stops the run with an error.
    pub check_consistency: bool,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            weights: OperationWeights::default(),
            initial_temperature: 1000.,
            reduction_factor: 0.95,
            reduction_frequency: 1000,
            satisfaction_factor: 1.,
            max_sample_attempts: 100,
            cycle: None,
            check_consistency: false,
        }
    }
}

/// Specifies how the temperature schedule is restarted.
#[derive(Clone, Debug)]
pub struct CycleConfig {
    /// A cycle ends when temperature drops below this value.
    pub end_temperature: Float,
    /// A cycle ends when temperature drops below this value and no penalty free state was seen in it.
    pub early_end_temperature: Float,
    /// A probability to restart from the best solution with the initial parameters.
    pub full_reset_probability: Float,
    /// A range to sample a new temperature from when the current state is kept.
    pub temperature_range: (Float, Float),
    /// A range to sample a new satisfaction factor from when the current state is kept.
    pub satisfaction_factor_range: (Float, Float),
}

/// A result of a single annealing run.
pub struct AnnealingResult {
    /// The best solution by cost.
    pub best: Solution,
    /// Penalty free solutions which are not dominated by cost and satisfaction.
    pub pareto_front: Vec<Solution>,
    /// Amount of iterations done.
    pub iterations: usize,
}

/// Returns a cost adjusted by satisfaction: the lower the satisfaction score, the higher the cost.
pub fn adjusted_cost(stats: &Stats, satisfaction_factor: Float) -> Float {
    stats.cost * (1. + (1. - stats.satisfaction_score.unwrap_or(1.)) * satisfaction_factor)
}

/// Checks whether a change of adjusted cost is accepted at the given temperature.
pub fn is_accepted(cost_delta: Float, temperature: Float, random: &(dyn Random + Send + Sync)) -> bool {
    cost_delta <= 0. || (temperature > 0. && random.uniform_real(0., 1.) < (-cost_delta / temperature).exp())
}

/// Runs simulated annealing starting from the given state.
pub fn run_annealing(
    mut state: RunState,
    config: &AnnealingConfig,
    termination: &(dyn Termination + Send + Sync),
    environment: &Environment,
    random: &(dyn Random + Send + Sync),
    telemetry: &mut Telemetry,
) -> GenericResult<AnnealingResult> {
    let sampler = OperationSampler::new(&config.weights, config.max_sample_attempts);
    let reduction_frequency = config.reduction_frequency.max(1);

    let mut best_solutions = BestSolutions::new(&state);
    let mut satisfaction_factor = config.satisfaction_factor;
    let mut is_cycle_penalty_free = is_penalty_free(state.total());
    let mut progress = SearchProgress { temperature: config.initial_temperature, ..SearchProgress::default() };

    let timer = Timer::start();
    telemetry.on_start(state.total(), progress.temperature);

    loop {
        progress.elapsed_secs = timer.elapsed_secs_as_float();
        if termination.is_termination(&progress) || environment.is_quota_reached() {
            break;
        }

        progress.iteration += 1;
        progress.iterations_since_improvement += 1;

        if let Some((operation, delta)) = sampler.sample(&state, random) {
            let old_stats = state.total().stats;
            let new_stats = old_stats + delta.total.stats;
            let cost_delta =
                adjusted_cost(&new_stats, satisfaction_factor) - adjusted_cost(&old_stats, satisfaction_factor);

            if is_accepted(cost_delta, progress.temperature, random) {
                operation.commit(&mut state, &delta);

                if best_solutions.try_improve(&state) {
                    progress.iterations_since_improvement = 0;
                    telemetry.on_best(&progress, state.total());
                }

                is_cycle_penalty_free |= is_penalty_free(state.total());
            }
        }

        telemetry.on_progress(&progress, state.total(), || termination.estimate(&progress));

        if progress.iteration % reduction_frequency != 0 {
            continue;
        }

        progress.temperature *= config.reduction_factor;

        if config.check_consistency {
            state.check_consistency()?;
        }
        state.recompute();

        if let Some(cycle) = config.cycle.as_ref() {
            let end_temperature = if is_cycle_penalty_free { cycle.end_temperature } else { cycle.early_end_temperature };

            if progress.temperature < end_temperature {
                let is_full_reset = random.is_hit(cycle.full_reset_probability);

                if is_full_reset {
                    state = RunState::from_solution(state.problem_ref(), best_solutions.best())?;
                    progress.temperature = config.initial_temperature;
                    satisfaction_factor = config.satisfaction_factor;
                } else {
                    progress.temperature = sample_range(random, cycle.temperature_range);
                    satisfaction_factor = sample_range(random, cycle.satisfaction_factor_range);
                }

                is_cycle_penalty_free = is_penalty_free(state.total());
                telemetry.on_cycle(&progress, is_full_reset, satisfaction_factor);
            }
        }
    }

    let (best, pareto_front) = best_solutions.into_parts();
    telemetry.on_finish(&progress, &best.total);

    Ok(AnnealingResult { best, pareto_front, iterations: progress.iteration })
}

fn sample_range(random: &(dyn Random + Send + Sync), (min, max): (Float, Float)) -> Float {
    if min < max { random.uniform_real(min, max) } else { min }
}

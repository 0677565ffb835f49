//! The solver module contains the simulated annealing search and its configuration.
//!
//! Each run owns its state and mutates it only by committing accepted operations. Several runs may
//! be executed in parallel: they share nothing mutable and the best result is returned.

use crate::models::Problem;
use crate::models::solution::{RunState, Solution};
use crate::utils::{Environment, GenericResult, compare_floats, parallel_into_collect};
use std::sync::Arc;

mod annealing;
pub use self::annealing::*;

mod best;
pub use self::best::*;

mod builder;
pub use self::builder::SolverBuilder;

mod config;
pub use self::config::*;

mod initial;
pub use self::initial::create_greedy_state;

mod telemetry;
pub use self::telemetry::*;

mod termination;
pub use self::termination::*;

/// A result of the solver.
pub struct SolverResult {
    /// The best solution by cost among all runs.
    pub best: Solution,
    /// Penalty free solutions of the best run which are not dominated by cost and satisfaction.
    pub pareto_front: Vec<Solution>,
    /// Amount of iterations done by all runs.
    pub iterations: usize,
}

/// Runs independent annealing searches on a rostering problem.
pub struct Solver {
    problem: Arc<Problem>,
    environment: Arc<Environment>,
    config: AnnealingConfig,
    termination: Arc<dyn Termination + Send + Sync>,
    initial_solution: Option<Solution>,
    telemetry_mode: TelemetryMode,
}

impl Solver {
    /// Solves the problem and returns the best found solution.
    pub fn solve(self) -> GenericResult<SolverResult> {
        let Self { problem, environment, config, termination, initial_solution, telemetry_mode } = self;

        let runs = (0..environment.parallelism).collect::<Vec<_>>();
        let results = parallel_into_collect(runs, |run_idx| {
            let random = environment.create_run_random(run_idx);

            let state = match initial_solution.as_ref() {
                Some(solution) => RunState::from_solution(problem.clone(), solution)?,
                None => create_greedy_state(problem.clone(), random.as_ref())?,
            };

            let mut telemetry = Telemetry::new(telemetry_mode.clone(), run_idx);

            run_annealing(state, &config, termination.as_ref(), environment.as_ref(), random.as_ref(), &mut telemetry)
                .map_err(|err| err.with_context(format!("run {run_idx}").as_str()))
        })
        .into_iter()
        .collect::<GenericResult<Vec<_>>>()?;

        let iterations = results.iter().map(|result| result.iterations).sum();
        let best_run = results
            .into_iter()
            .min_by(|a, b| compare_floats(a.best.total.stats.cost, b.best.total.stats.cost))
            .ok_or_else(|| "no annealing run was executed".to_string())?;

        Ok(SolverResult { best: best_run.best, pareto_front: best_run.pareto_front, iterations })
    }
}

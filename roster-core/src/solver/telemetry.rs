//! A module which provides simple logging of annealing run progress.

use crate::models::TotalInfo;
use crate::solver::SearchProgress;
use crate::utils::{Float, InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often, in iterations, run progress is logged.
        log_every: usize,
        /// Specifies whether each new best solution is logged.
        log_best: bool,
    },
}

/// Writes information about a single annealing run into log.
pub struct Telemetry {
    mode: TelemetryMode,
    run_idx: usize,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry` for the run with given index.
    pub fn new(mode: TelemetryMode, run_idx: usize) -> Self {
        Self { mode, run_idx, time: Timer::start() }
    }

    /// Starts telemetry reporting.
    pub fn on_start(&mut self, total: &TotalInfo, temperature: Float) {
        self.time = Timer::start();
        self.log(format!("run {} started at temperature {temperature:.2}: {}", self.run_idx, format_total(total)).as_str());
    }

    /// Reports run progress when it is time to do so.
    pub fn on_progress<F>(&self, progress: &SearchProgress, total: &TotalInfo, estimate: F)
    where
        F: FnOnce() -> Float,
    {
        let TelemetryMode::OnlyLogging { log_every, .. } = &self.mode else { return };
        if *log_every == 0 || progress.iteration % *log_every != 0 {
            return;
        }

        self.log(
            format!(
                "[{}s] run {} iteration {} ({:.0}%): temperature {:.3}, {}",
                self.time.elapsed_secs(),
                self.run_idx,
                progress.iteration,
                estimate() * 100.,
                progress.temperature,
                format_total(total)
            )
            .as_str(),
        );
    }

    /// Reports a new best solution.
    pub fn on_best(&self, progress: &SearchProgress, total: &TotalInfo) {
        if let TelemetryMode::OnlyLogging { log_best: true, .. } = &self.mode {
            self.log(
                format!(
                    "[{}s] run {} iteration {}: new best {}",
                    self.time.elapsed_secs(),
                    self.run_idx,
                    progress.iteration,
                    format_total(total)
                )
                .as_str(),
            );
        }
    }

    /// Reports a start of the new annealing cycle.
    pub fn on_cycle(&self, progress: &SearchProgress, is_full_reset: bool, satisfaction_factor: Float) {
        self.log(
            format!(
                "[{}s] run {} iteration {}: new cycle from {} solution, temperature {:.3}, satisfaction factor {:.3}",
                self.time.elapsed_secs(),
                self.run_idx,
                progress.iteration,
                if is_full_reset { "best" } else { "current" },
                progress.temperature,
                satisfaction_factor
            )
            .as_str(),
        );
    }

    /// Reports final statistics.
    pub fn on_finish(&self, progress: &SearchProgress, best: &TotalInfo) {
        let elapsed = self.time.elapsed_secs_as_float();
        let speed = if elapsed > 0. { progress.iteration as Float / elapsed } else { 0. };

        self.log(
            format!(
                "[{}s] run {} finished after {} iterations ({:.0} iterations/sec), best {}",
                self.time.elapsed_secs(),
                self.run_idx,
                progress.iteration,
                speed,
                format_total(best)
            )
            .as_str(),
        );
    }

    fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message);
        }
    }
}

fn format_total(total: &TotalInfo) -> String {
    let satisfaction = total.stats.satisfaction_score.map_or("n/a".to_string(), |score| format!("{score:.3}"));

    format!(
        "cost {:.2}, raw cost {:.2}, robustness {:.2}, penalty {:.2}, satisfaction {}",
        total.stats.cost, total.stats.raw_cost, total.stats.robustness, total.stats.penalty, satisfaction
    )
}

//! A module which provides simple logging of the allocation process.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use super::balancing::{BalancedProblem, Dummy};
use crate::models::{AllocationStep, Solution};
use crate::utils::{InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone, Default)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies whether every allocation step is logged.
        log_steps: bool,
    },
}

/// Writes information about the solver's progress into the log.
pub struct Telemetry {
    mode: TelemetryMode,
    timer: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, timer: Timer::start() }
    }

    /// Reports that the problem has nothing to ship.
    pub fn on_degenerate(&self) {
        self.log("total supply and demand are zero, nothing to allocate");
    }

    /// Reports balancing decision.
    pub fn on_balanced(&self, problem: &BalancedProblem) {
        match problem.dummy {
            Some(Dummy::Source) => self.log(
                format!("demand exceeds supply, added dummy source with {} units", problem.dummy_quantity()).as_str(),
            ),
            Some(Dummy::Destination) => self.log(
                format!("supply exceeds demand, added dummy destination with {} units", problem.dummy_quantity())
                    .as_str(),
            ),
            None => self.log("problem is balanced"),
        }
    }

    /// Reports allocation step.
    pub fn on_step(&self, index: usize, step: &AllocationStep) {
        if let TelemetryMode::OnlyLogging { log_steps: true, .. } = &self.mode {
            self.log(
                format!(
                    "step {}: {} with penalty {}, allocate {} to cell ({}, {})",
                    index + 1,
                    step.line,
                    step.penalty,
                    step.quantity,
                    step.cell.0,
                    step.cell.1
                )
                .as_str(),
            );
        }
    }

    /// Reports final solution.
    pub fn on_result(&self, solution: &Solution) {
        self.log(
            format!(
                "[{}ms] allocated {} units in {} steps, total cost: {}",
                self.timer.elapsed_millis(),
                solution.total_shipped(),
                solution.steps.len(),
                solution.cost
            )
            .as_str(),
        );
    }

    fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}

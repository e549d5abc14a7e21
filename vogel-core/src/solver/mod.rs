//! This module contains the solver which builds a transportation plan using Vogel's
//! approximation method.
//!
//! The solver works in three phases:
//! - balancing: a zero cost dummy source or destination is added when total supply differs
//!   from total demand
//! - allocation: lines with the biggest penalty are filled starting from their cheapest cells
//!   until all capacities are exhausted
//! - projection: the dummy line is stripped from the plan and reported as slack, cost is
//!   calculated over original sources and destinations only

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod balancing;
pub use self::balancing::{BalancedProblem, Dummy};

mod penalty;
pub use self::penalty::get_penalty;

mod telemetry;
pub use self::telemetry::{Telemetry, TelemetryMode};

mod vogel;

use crate::models::{Matrix, Problem, Solution};
use crate::utils::{Environment, Float, GenericResult, parallel_collect};
use std::sync::Arc;

/// Solves transportation problems with Vogel's approximation method.
#[derive(Clone)]
pub struct Solver {
    environment: Arc<Environment>,
    telemetry_mode: TelemetryMode,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(environment: Arc<Environment>, telemetry_mode: TelemetryMode) -> Self {
        Self { environment, telemetry_mode }
    }

    /// Builds a transportation plan for the problem.
    pub fn solve(&self, problem: &Problem) -> Solution {
        let telemetry = Telemetry::new(self.telemetry_mode.clone());

        if problem.total_supply() == 0. && problem.total_demand() == 0. {
            telemetry.on_degenerate();
            return Solution::empty(problem);
        }

        let balanced = BalancedProblem::new(problem);
        telemetry.on_balanced(&balanced);

        let (allocation, steps) = vogel::allocate(&balanced, &telemetry);
        let solution = balanced.project(problem, allocation, steps);

        telemetry.on_result(&solution);

        solution
    }

    /// Solves independent problems in parallel, results keep the order of problems.
    pub fn solve_many(&self, problems: &[Problem]) -> Vec<Solution> {
        if let Some(num_threads) = self.environment.parallelism.num_threads() {
            let message = format!("solving {} problems using {num_threads} threads", problems.len());
            (self.environment.logger)(message.as_str());
        }

        self.environment.parallelism.execute(|| parallel_collect(problems, |problem| self.solve(problem)))
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(Arc::new(Environment::new_silent()), TelemetryMode::None)
    }
}

/// Builds a transportation plan from raw data and returns allocation of the original shape with
/// its total cost.
pub fn solve(costs: Vec<Vec<Float>>, supply: Vec<Float>, demand: Vec<Float>) -> GenericResult<(Matrix, Float)> {
    let problem = Problem::from_rows(costs, supply, demand)?;
    let solution = Solver::default().solve(&problem);

    Ok((solution.allocation, solution.cost))
}

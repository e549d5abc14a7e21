//! Solve command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/solve_test.rs"]
mod solve_test;

pub mod config;

use self::config::{Config, create_solver_from_config, create_writer_options};
use std::io::{BufReader, BufWriter, Read, Write};
use vogel_core::prelude::GenericError;
use vogel_pragmatic::checker::CheckerContext;
use vogel_pragmatic::format::problem::{PragmaticProblem, Problem, deserialize_problem};
use vogel_pragmatic::format::solution::{Solution, create_solution, serialize_solution};

/// Specifies how solutions are post processed.
#[derive(Clone, Debug, Default)]
pub struct SolveOptions {
    /// Solver configuration.
    pub config: Config,
    /// Run feasibility check on every produced solution.
    pub check: bool,
}

/// Solves problems in pragmatic format and writes their solutions.
///
/// A single problem produces a single solution object, several problems are solved in parallel
/// and written as a json array in the order of their readers.
pub fn solve_pragmatic<R: Read, W: Write>(
    readers: Vec<BufReader<R>>,
    options: &SolveOptions,
    writer: BufWriter<W>,
) -> Result<(), GenericError> {
    let solutions = solve_pragmatic_problems(readers, options)?;

    if solutions.len() == 1 {
        serialize_solution(&solutions[0], writer)
    } else {
        serialize_solution(&solutions, writer)
    }
}

/// Solves problems in pragmatic format and returns their solutions.
pub fn solve_pragmatic_problems<R: Read>(
    readers: Vec<BufReader<R>>,
    options: &SolveOptions,
) -> Result<Vec<Solution>, GenericError> {
    if readers.is_empty() {
        return Err("no problem specified".into());
    }

    let problems = readers
        .into_iter()
        .enumerate()
        .map(|(idx, reader)| {
            deserialize_problem(reader)
                .map_err(|errors| GenericError::from(format!("cannot read problem #{idx}:\n{errors}")))
        })
        .collect::<Result<Vec<Problem>, GenericError>>()?;

    let core_problems = problems
        .iter()
        .enumerate()
        .map(|(idx, problem)| {
            problem
                .clone()
                .read_pragmatic()
                .map_err(|errors| GenericError::from(format!("invalid problem #{idx}:\n{errors}")))
        })
        .collect::<Result<Vec<_>, GenericError>>()?;

    let solver = create_solver_from_config(&options.config)?;
    let writer_options = create_writer_options(&options.config);

    let core_solutions = if core_problems.len() == 1 {
        vec![solver.solve(&core_problems[0])]
    } else {
        solver.solve_many(core_problems.as_slice())
    };

    let solutions = problems
        .iter()
        .zip(core_solutions.iter())
        .map(|(problem, solution)| create_solution(problem, solution, &writer_options))
        .collect::<Vec<_>>();

    if options.check {
        problems.into_iter().zip(solutions.iter()).enumerate().try_for_each(|(idx, (problem, solution))| {
            CheckerContext::new(problem, solution.clone()).check().map_err(|errors| {
                let details = errors.join("\n");
                GenericError::from(format!("checker found {} errors in solution #{idx}:\n{details}", errors.len()))
            })
        })?;
    }

    Ok(solutions)
}

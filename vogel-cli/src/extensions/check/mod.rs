//! A helper module which contains functionality to run feasibility checks on solution.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use std::io::{BufReader, Read};
use vogel_pragmatic::checker::CheckerContext;
use vogel_pragmatic::format::problem::deserialize_problem;
use vogel_pragmatic::format::solution::deserialize_solution;
use vogel_pragmatic::validation::ValidationContext;

/// Checks pragmatic solution feasibility.
pub fn check_pragmatic_solution<R1: Read, R2: Read>(
    problem_reader: BufReader<R1>,
    solution_reader: BufReader<R2>,
) -> Result<(), Vec<String>> {
    let problem = deserialize_problem(problem_reader).map_err(|errors| vec![format!("cannot read problem: {errors}")])?;

    ValidationContext::new(&problem)
        .validate()
        .map_err(|errors| errors.iter().map(|err| err.to_string()).collect::<Vec<_>>())?;

    let solution =
        deserialize_solution(solution_reader).map_err(|errors| vec![format!("cannot read solution: {errors}")])?;

    CheckerContext::new(problem, solution).check()
}

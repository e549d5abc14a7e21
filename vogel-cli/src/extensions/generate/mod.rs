//! A helper module which generates random transportation problems.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use vogel_core::models::examples::{ProblemPrototype, generate_problem as generate_core_problem};
use vogel_core::prelude::{DefaultRandom, GenericError};
use vogel_pragmatic::format::problem::{Destination, Problem, Source};
use vogel_pragmatic::validation::ValidationContext;

/// Generates a random problem in pragmatic format.
///
/// The same seed produces the same problem.
pub fn generate_problem(prototype: &ProblemPrototype, seed: Option<u64>) -> Result<Problem, GenericError> {
    let random = seed.map_or_else(DefaultRandom::default, DefaultRandom::new_with_seed);
    let problem = generate_core_problem(&random, prototype)?;

    let problem = Problem {
        sources: problem
            .supply()
            .iter()
            .enumerate()
            .map(|(idx, &supply)| Source { id: format!("source{}", idx + 1), supply })
            .collect(),
        destinations: problem
            .demand()
            .iter()
            .enumerate()
            .map(|(idx, &demand)| Destination { id: format!("destination{}", idx + 1), demand })
            .collect(),
        costs: problem.costs().to_rows(),
        currency: None,
    };

    ValidationContext::new(&problem)
        .validate()
        .map_err(|errors| format!("generated problem has some validation errors:\n{errors}"))?;

    Ok(problem)
}

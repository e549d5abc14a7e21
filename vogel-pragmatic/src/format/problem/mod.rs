//! Specifies logic to read problem from json input.

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use crate::format::{FormatError, MultiFormatError};
use crate::validation::ValidationContext;
use std::io::{BufReader, Read};
use vogel_core::models::Problem as CoreProblem;

mod model;
pub use self::model::*;

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem {
    /// Reads problem defined in pragmatic format.
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        deserialize_problem(self)?.read_pragmatic()
    }
}

impl PragmaticProblem for String {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_pragmatic()
    }
}

impl PragmaticProblem for Problem {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        ValidationContext::new(&self).validate()?;

        map_to_problem(self)
    }
}

fn map_to_problem(problem: Problem) -> Result<CoreProblem, MultiFormatError> {
    let supply = problem.sources.iter().map(|source| source.supply).collect();
    let demand = problem.destinations.iter().map(|destination| destination.demand).collect();

    CoreProblem::from_rows(problem.costs, supply, demand).map_err(|err| {
        FormatError::new_with_details(
            "E0002".to_string(),
            "cannot create transportation problem".to_string(),
            "check problem definition".to_string(),
            err.to_string(),
        )
        .into()
    })
}

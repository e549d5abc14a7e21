//! This module provides functionality to automatically check that given solution is feasible
//! which means that there is no constraint violations.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::problem::*;
use crate::format::solution::*;
use rustc_hash::{FxHashMap, FxHashSet};
use vogel_core::prelude::Float;
use vogel_core::utils::is_close;

mod allocation;
use self::allocation::check_allocation;

mod cost;
use self::cost::check_cost;

/// A relative tolerance used to compare quantities and costs read from json.
const TOLERANCE: Float = 1E-6;

/// Stores problem and solution together and provides some helper methods.
pub struct CheckerContext {
    /// An original problem definition.
    pub problem: Problem,
    /// Solution to be checked.
    pub solution: Solution,

    source_index: FxHashMap<String, usize>,
    destination_index: FxHashMap<String, usize>,
}

impl CheckerContext {
    /// Creates an instance of `CheckerContext`.
    pub fn new(problem: Problem, solution: Solution) -> Self {
        let source_index = problem.sources.iter().enumerate().map(|(idx, source)| (source.id.clone(), idx)).collect();
        let destination_index = problem
            .destinations
            .iter()
            .enumerate()
            .map(|(idx, destination)| (destination.id.clone(), idx))
            .collect();

        Self { problem, solution, source_index, destination_index }
    }

    /// Performs solution check.
    pub fn check(&self) -> Result<(), Vec<String>> {
        // avoid duplicates keeping original order
        let (_, errors) = check_allocation(self)
            .err()
            .into_iter()
            .chain(check_cost(self).err())
            .flatten()
            .fold((FxHashSet::default(), Vec::default()), |(mut used, mut errors), error| {
                if used.insert(error.clone()) {
                    errors.push(error);
                }

                (used, errors)
            });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Gets source index by its id.
    fn get_source_index(&self, id: &str) -> Result<usize, String> {
        self.source_index.get(id).copied().ok_or_else(|| format!("cannot find source with id '{id}'"))
    }

    /// Gets destination index by its id.
    fn get_destination_index(&self, id: &str) -> Result<usize, String> {
        self.destination_index.get(id).copied().ok_or_else(|| format!("cannot find destination with id '{id}'"))
    }

    /// Checks whether allocation has the shape of the problem.
    fn has_valid_shape(&self) -> bool {
        let allocation = &self.solution.allocation;

        allocation.len() == self.problem.sources.len()
            && allocation.iter().all(|row| row.len() == self.problem.destinations.len())
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, Float)> + '_ {
        self.solution
            .allocation
            .iter()
            .enumerate()
            .flat_map(|(row, values)| values.iter().enumerate().map(move |(col, value)| (row, col, *value)))
    }
}

fn is_close_enough(left: Float, right: Float) -> bool {
    is_close(left, right, TOLERANCE)
}

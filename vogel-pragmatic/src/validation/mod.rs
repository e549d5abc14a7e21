//! This module provides functionality to validate problem definition for logical correctness.

use crate::format::problem::*;
use crate::format::{FormatError, MultiFormatError};
use crate::utils::{combine_error_results, get_duplicates};
use vogel_core::prelude::Float;

/// Keeps a problem definition which is validated.
pub struct ValidationContext<'a> {
    /// A problem definition.
    pub problem: &'a Problem,
}

mod costs;
use self::costs::validate_costs;

mod sources;
use self::sources::validate_sources;

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Validates problem on set of rules and returns all found errors.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_sources(self)
            .err()
            .into_iter()
            .chain(validate_costs(self).err())
            .flatten()
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    fn sources(&self) -> impl Iterator<Item = &Source> {
        self.problem.sources.iter()
    }

    fn destinations(&self) -> impl Iterator<Item = &Destination> {
        self.problem.destinations.iter()
    }
}

fn is_valid_value(value: Float) -> bool {
    value.is_finite() && value >= 0.
}

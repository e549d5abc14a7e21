#[cfg(test)]
#[path = "../../tests/unit/validation/sources_test.rs"]
mod sources_test;

use super::*;

/// Checks that sources have unique ids.
fn check_e1000_no_sources_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.sources().map(|source| &source.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1000".to_string(),
            "duplicated source ids".to_string(),
            format!("remove duplicates of sources with the ids: '{}'", join_ids(ids)),
        ))
    })
}

/// Checks that destinations have unique ids.
fn check_e1001_no_destinations_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.destinations().map(|destination| &destination.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1001".to_string(),
            "duplicated destination ids".to_string(),
            format!("remove duplicates of destinations with the ids: '{}'", join_ids(ids)),
        ))
    })
}

/// Checks that at least one source is defined.
fn check_e1002_no_empty_sources(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.problem.sources.is_empty() {
        Err(FormatError::new(
            "E1002".to_string(),
            "empty source collection".to_string(),
            "specify at least one source".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that at least one destination is defined.
fn check_e1003_no_empty_destinations(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.problem.destinations.is_empty() {
        Err(FormatError::new(
            "E1003".to_string(),
            "empty destination collection".to_string(),
            "specify at least one destination".to_string(),
        ))
    } else {
        Ok(())
    }
}

fn join_ids(ids: Vec<&String>) -> String {
    ids.into_iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ")
}

/// Validates sources and destinations.
pub fn validate_sources(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1000_no_sources_with_duplicate_ids(ctx),
        check_e1001_no_destinations_with_duplicate_ids(ctx),
        check_e1002_no_empty_sources(ctx),
        check_e1003_no_empty_destinations(ctx),
    ])
}

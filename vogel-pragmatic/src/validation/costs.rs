#[cfg(test)]
#[path = "../../tests/unit/validation/costs_test.rs"]
mod costs_test;

use super::*;

/// Checks that cost matrix has one row per source.
fn check_e1100_cost_rows_match_sources(ctx: &ValidationContext) -> Result<(), FormatError> {
    let (rows, sources) = (ctx.problem.costs.len(), ctx.problem.sources.len());

    if rows != sources {
        Err(FormatError::new(
            "E1100".to_string(),
            "amount of cost matrix rows does not match amount of sources".to_string(),
            format!("specify one row per source: expected {sources}, got {rows}"),
        ))
    } else {
        Ok(())
    }
}

/// Checks that every cost matrix row has one value per destination.
fn check_e1101_cost_row_length_matches_destinations(ctx: &ValidationContext) -> Result<(), FormatError> {
    let destinations = ctx.problem.destinations.len();
    let rows = ctx
        .problem
        .costs
        .iter()
        .enumerate()
        .filter(|(_, row)| row.len() != destinations)
        .map(|(idx, _)| idx.to_string())
        .collect::<Vec<_>>();

    if rows.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1101".to_string(),
            "cost matrix row length does not match amount of destinations".to_string(),
            format!("specify {destinations} values in rows with indices: '{}'", rows.join(", ")),
        ))
    }
}

/// Checks that all costs are finite and non-negative.
fn check_e1102_valid_costs(ctx: &ValidationContext) -> Result<(), FormatError> {
    let cells = ctx
        .problem
        .costs
        .iter()
        .enumerate()
        .flat_map(|(row, values)| values.iter().enumerate().map(move |(col, value)| (row, col, *value)))
        .filter(|(_, _, value)| !is_valid_value(*value))
        .map(|(row, col, _)| format!("({row}, {col})"))
        .collect::<Vec<_>>();

    if cells.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1102".to_string(),
            "invalid cost values".to_string(),
            format!("use finite non-negative costs in cells: '{}'", cells.join(", ")),
        ))
    }
}

/// Checks that all supply values are finite and non-negative.
fn check_e1103_valid_supply(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx.sources().filter(|source| !is_valid_value(source.supply)).map(|source| source.id.as_str());

    check_capacities("E1103", "supply", "sources", ids.collect())
}

/// Checks that all demand values are finite and non-negative.
fn check_e1104_valid_demand(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .destinations()
        .filter(|destination| !is_valid_value(destination.demand))
        .map(|destination| destination.id.as_str());

    check_capacities("E1104", "demand", "destinations", ids.collect())
}

fn check_capacities(code: &str, name: &str, owner: &str, ids: Vec<&str>) -> Result<(), FormatError> {
    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            code.to_string(),
            format!("invalid {name} values"),
            format!("use finite non-negative {name} for {owner} with the ids: '{}'", ids.join(", ")),
        ))
    }
}

/// Validates cost matrix and capacities.
pub fn validate_costs(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1100_cost_rows_match_sources(ctx),
        check_e1101_cost_row_length_matches_destinations(ctx),
        check_e1102_valid_costs(ctx),
        check_e1103_valid_supply(ctx),
        check_e1104_valid_demand(ctx),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/checker/allocation_test.rs"]
mod allocation_test;

use super::*;

/// Checks that allocation matrix is consistent with capacities of the problem.
pub fn check_allocation(context: &CheckerContext) -> Result<(), Vec<String>> {
    check_shape(context).map_err(|err| vec![err])?;

    let errors = [check_non_negative(context), check_capacities(context), check_shipped_total(context)]
        .into_iter()
        .filter_map(Result::err)
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_shape(context: &CheckerContext) -> Result<(), String> {
    if context.has_valid_shape() {
        Ok(())
    } else {
        Err(format!(
            "allocation shape mismatch, expected: {}x{}, got: {} rows with lengths [{}]",
            context.problem.sources.len(),
            context.problem.destinations.len(),
            context.solution.allocation.len(),
            context.solution.allocation.iter().map(|row| row.len().to_string()).collect::<Vec<_>>().join(", ")
        ))
    }
}

fn check_non_negative(context: &CheckerContext) -> Result<(), String> {
    context.cells().find(|(_, _, quantity)| !quantity.is_finite() || *quantity < 0.).map_or(
        Ok(()),
        |(row, col, quantity)| {
            Err(format!("allocation has invalid quantity {quantity} in cell ({row}, {col})"))
        },
    )
}

/// Checks that every source ships not more than its supply and every destination receives
/// not more than its demand.
fn check_capacities(context: &CheckerContext) -> Result<(), String> {
    let allocation = &context.solution.allocation;

    context.problem.sources.iter().zip(allocation.iter()).try_for_each(|(source, row)| {
        let shipped: Float = row.iter().sum();
        if shipped > source.supply && !is_close_enough(shipped, source.supply) {
            Err(format!(
                "supply violation, expected: not more than {}, got: {}, source id '{}'",
                source.supply, shipped, source.id
            ))
        } else {
            Ok(())
        }
    })?;

    context.problem.destinations.iter().enumerate().try_for_each(|(col, destination)| {
        let received: Float = allocation.iter().map(|row| row[col]).sum();
        if received > destination.demand && !is_close_enough(received, destination.demand) {
            Err(format!(
                "demand violation, expected: not more than {}, got: {}, destination id '{}'",
                destination.demand, received, destination.id
            ))
        } else {
            Ok(())
        }
    })
}

/// Checks that shipped total equals to the smaller of total supply and total demand.
fn check_shipped_total(context: &CheckerContext) -> Result<(), String> {
    let total_supply: Float = context.problem.sources.iter().map(|source| source.supply).sum();
    let total_demand: Float = context.problem.destinations.iter().map(|destination| destination.demand).sum();
    let expected = total_supply.min(total_demand);

    let shipped: Float = context.cells().map(|(_, _, quantity)| quantity).sum();

    if !is_close_enough(shipped, expected) {
        return Err(format!("shipped total mismatch, expected: {expected}, got: {shipped}"));
    }

    if !is_close_enough(context.solution.statistic.shipped, shipped) {
        return Err(format!(
            "shipped statistic mismatch, expected: {shipped}, got: {}",
            context.solution.statistic.shipped
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/checker/cost_test.rs"]
mod cost_test;

use super::*;

/// Checks that reported cost and flows agree with the allocation matrix.
pub fn check_cost(context: &CheckerContext) -> Result<(), Vec<String>> {
    if !context.has_valid_shape() {
        // reported by the allocation check
        return Ok(());
    }

    let errors = [check_total_cost(context), check_flows(context), check_source_summary(context)]
        .into_iter()
        .filter_map(Result::err)
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_total_cost(context: &CheckerContext) -> Result<(), String> {
    let expected: Float = context.cells().map(|(row, col, quantity)| quantity * get_cost(context, row, col)).sum();
    let actual = context.solution.statistic.cost;

    if is_close_enough(expected, actual) {
        Ok(())
    } else {
        Err(format!("cost mismatch, expected: {expected}, got: {actual}"))
    }
}

/// Checks that every flow matches allocation cell and every non-zero cell has a flow.
fn check_flows(context: &CheckerContext) -> Result<(), String> {
    let mut visited = FxHashSet::default();

    context.solution.flows.iter().try_for_each(|flow| {
        let row = context.get_source_index(&flow.source)?;
        let col = context.get_destination_index(&flow.destination)?;

        if !visited.insert((row, col)) {
            return Err(format!("duplicated flow from '{}' to '{}'", flow.source, flow.destination));
        }

        let quantity = context.solution.allocation[row][col];
        if !is_close_enough(quantity, flow.quantity) {
            return Err(format!(
                "flow quantity mismatch from '{}' to '{}', expected: {}, got: {}",
                flow.source, flow.destination, quantity, flow.quantity
            ));
        }

        let cost = quantity * get_cost(context, row, col);
        if !is_close_enough(cost, flow.cost) {
            return Err(format!(
                "flow cost mismatch from '{}' to '{}', expected: {}, got: {}",
                flow.source, flow.destination, cost, flow.cost
            ));
        }

        Ok(())
    })?;

    context.cells().filter(|(_, _, quantity)| *quantity > 0.).try_for_each(|(row, col, quantity)| {
        if visited.contains(&(row, col)) {
            Ok(())
        } else {
            Err(format!(
                "missing flow from '{}' to '{}' with quantity {}",
                context.problem.sources[row].id, context.problem.destinations[col].id, quantity
            ))
        }
    })
}

fn check_source_summary(context: &CheckerContext) -> Result<(), String> {
    context.solution.sources.iter().try_for_each(|summary| {
        let row = context.get_source_index(&summary.id)?;
        let shipped: Float = context.solution.allocation[row].iter().sum();

        if !is_close_enough(shipped, summary.shipped) {
            return Err(format!(
                "source shipped mismatch, expected: {shipped}, got: {}, source id '{}'",
                summary.shipped, summary.id
            ));
        }

        let cost: Float = context.solution.allocation[row]
            .iter()
            .enumerate()
            .map(|(col, quantity)| quantity * get_cost(context, row, col))
            .sum();

        if !is_close_enough(cost, summary.cost) {
            return Err(format!(
                "source cost mismatch, expected: {cost}, got: {}, source id '{}'",
                summary.cost, summary.id
            ));
        }

        Ok(())
    })
}

fn get_cost(context: &CheckerContext, row: usize, col: usize) -> Float {
    context.problem.costs.get(row).and_then(|costs| costs.get(col)).copied().unwrap_or(0.)
}

#[cfg(test)]
#[path = "../../tests/unit/solver/vogel_test.rs"]
mod vogel_test;

use super::balancing::BalancedProblem;
use super::penalty::*;
use super::telemetry::Telemetry;
use crate::models::{AllocationStep, Line, Matrix};
use crate::utils::Float;

/// Runs the allocation loop on balanced problem and returns allocation of balanced shape
/// together with the steps made.
pub fn allocate(problem: &BalancedProblem, telemetry: &Telemetry) -> (Matrix, Vec<AllocationStep>) {
    let mut supply = problem.supply.clone();
    let mut demand = problem.demand.clone();
    let mut active = ActiveLines::new(supply.len(), demand.len());
    let mut allocation = Matrix::zeros(supply.len(), demand.len());
    let mut steps = Vec::with_capacity(supply.len() + demand.len());

    while has_capacity(&supply) && has_capacity(&demand) {
        let Some((line, penalty)) = select_line(&problem.costs, &active, &supply, &demand) else { break };
        let Some((row, col)) = select_cell(&problem.costs, &active, line, &supply, &demand) else { break };

        let quantity = supply[row].min(demand[col]);
        allocation.set(row, col, allocation.get(row, col) + quantity);
        supply[row] -= quantity;
        demand[col] -= quantity;

        if supply[row] <= 0. {
            active.exhaust(Line::Row(row));
        }

        if demand[col] <= 0. {
            active.exhaust(Line::Column(col));
        }

        let step = AllocationStep { line, penalty, cell: (row, col), quantity };
        telemetry.on_step(steps.len(), &step);
        steps.push(step);
    }

    (allocation, steps)
}

/// Selects a line with the largest penalty, a row wins when its penalty equals column's one.
fn select_line(costs: &Matrix, active: &ActiveLines, supply: &[Float], demand: &[Float]) -> Option<(Line, Float)> {
    let best_row = get_max_penalty(get_row_penalties(costs, active, supply).as_slice());
    let best_col = get_max_penalty(get_col_penalties(costs, active, demand).as_slice());

    match (best_row, best_col) {
        (Some((row, row_penalty)), Some((_, col_penalty))) if row_penalty >= col_penalty => {
            Some((Line::Row(row), row_penalty))
        }
        (_, Some((col, col_penalty))) => Some((Line::Column(col), col_penalty)),
        (Some((row, row_penalty)), None) => Some((Line::Row(row), row_penalty)),
        (None, None) => None,
    }
}

/// Selects the cheapest reachable cell within the line, the first one wins on ties. When the
/// line has no reachable cell, falls back to the first counterpart line with remaining capacity.
fn select_cell(
    costs: &Matrix,
    active: &ActiveLines,
    line: Line,
    supply: &[Float],
    demand: &[Float],
) -> Option<(usize, usize)> {
    let first_with_capacity = |capacities: &[Float]| capacities.iter().position(|&value| value > 0.);

    match line {
        Line::Row(row) => get_cheapest(active.cols().map(|col| (col, costs.get(row, col))))
            .or_else(|| first_with_capacity(demand))
            .map(|col| (row, col)),
        Line::Column(col) => get_cheapest(active.rows().map(|row| (row, costs.get(row, col))))
            .or_else(|| first_with_capacity(supply))
            .map(|row| (row, col)),
    }
}

fn has_capacity(capacities: &[Float]) -> bool {
    capacities.iter().any(|&value| value > 0.)
}

fn get_cheapest(cells: impl Iterator<Item = (usize, Float)>) -> Option<usize> {
    cells.reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best }).map(|(idx, _)| idx)
}

#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::{Matrix, Problem};
use crate::utils::Float;
use std::fmt;

/// Specifies a row (source) or a column (destination) of the cost matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row with given index.
    Row(usize),
    /// A column with given index.
    Column(usize),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(index) => write!(f, "row {index}"),
            Line::Column(index) => write!(f, "column {index}"),
        }
    }
}

/// Describes one iteration of the allocation loop.
///
/// Indices refer to the balanced problem, so a cell can point to the dummy row or column.
#[derive(Clone, Debug, PartialEq)]
pub struct AllocationStep {
    /// A line selected by the largest penalty.
    pub line: Line,
    /// A penalty of the selected line.
    pub penalty: Float,
    /// A selected cell as (row, column).
    pub cell: (usize, usize),
    /// An allocated quantity.
    pub quantity: Float,
}

/// Quantities assigned to the dummy line which was added to balance the problem.
#[derive(Clone, Debug, PartialEq)]
pub enum Slack {
    /// Supply exceeded demand: quantity left at every source.
    UnusedSupply(Vec<Float>),
    /// Demand exceeded supply: quantity not delivered to every destination.
    UnmetDemand(Vec<Float>),
}

impl Slack {
    /// Returns slack quantities.
    pub fn quantities(&self) -> &[Float] {
        match self {
            Slack::UnusedSupply(quantities) | Slack::UnmetDemand(quantities) => quantities.as_slice(),
        }
    }

    /// Returns total slack.
    pub fn total(&self) -> Float {
        self.quantities().iter().sum()
    }
}

/// Represents a transportation plan.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Shipped quantities of original problem shape: sources x destinations.
    pub allocation: Matrix,

    /// Total shipping cost over original sources and destinations.
    pub cost: Float,

    /// Quantities assigned to the dummy line, if the problem was not balanced.
    pub slack: Option<Slack>,

    /// Allocation steps in the order they were made.
    pub steps: Vec<AllocationStep>,
}

impl Solution {
    /// Creates an empty solution for the problem: nothing is shipped.
    pub fn empty(problem: &Problem) -> Self {
        let allocation = Matrix::zeros(problem.sources(), problem.destinations());

        Self { allocation, cost: 0., slack: None, steps: vec![] }
    }

    /// Returns non-zero flows as `(source, destination, quantity)`.
    pub fn flows(&self) -> impl Iterator<Item = (usize, usize, Float)> + '_ {
        self.allocation.cells().filter(|(_, _, quantity)| *quantity > 0.)
    }

    /// Returns total shipped quantity.
    pub fn total_shipped(&self) -> Float {
        self.allocation.cells().map(|(_, _, quantity)| quantity).sum()
    }

    /// Returns quantity shipped from every source.
    pub fn shipped_per_source(&self) -> Vec<Float> {
        (0..self.allocation.rows()).map(|row| self.allocation.row(row).iter().sum()).collect()
    }

    /// Returns quantity received by every destination.
    pub fn received_per_destination(&self) -> Vec<Float> {
        (0..self.allocation.cols()).map(|col| self.allocation.col(col).sum()).collect()
    }

    /// Returns shipping cost generated by every source.
    pub fn cost_per_source(&self, problem: &Problem) -> Vec<Float> {
        (0..self.allocation.rows())
            .map(|row| {
                self.allocation.row(row).iter().zip(problem.costs().row(row).iter()).map(|(qty, cost)| qty * cost).sum()
            })
            .collect()
    }
}

/// Calculates total cost of given allocation restricted to the shape of the problem.
pub fn get_allocation_cost(problem: &Problem, allocation: &Matrix) -> Float {
    let costs = problem.costs();

    allocation
        .cells()
        .filter(|&(row, col, _)| row < costs.rows() && col < costs.cols())
        .map(|(row, col, quantity)| quantity * costs.get(row, col))
        .sum()
}

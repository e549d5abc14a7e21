#[cfg(test)]
#[path = "../../tests/unit/solver/balancing_test.rs"]
mod balancing_test;

use crate::models::{AllocationStep, Matrix, Problem, Slack, Solution, get_allocation_cost};
use crate::utils::Float;

/// Specifies which synthetic line was added to balance supply and demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dummy {
    /// An extra row (source) which covers demand excess.
    Source,
    /// An extra column (destination) which absorbs supply excess.
    Destination,
}

/// A problem with equal total supply and total demand.
///
/// Keeps the working shape, which includes the dummy line if any, and the original one, so
/// results can be projected back.
pub struct BalancedProblem {
    /// Unit costs, dummy cells have zero cost.
    pub costs: Matrix,
    /// Supply per row.
    pub supply: Vec<Float>,
    /// Demand per column.
    pub demand: Vec<Float>,
    /// A dummy line, if it was added.
    pub dummy: Option<Dummy>,
}

impl BalancedProblem {
    /// Balances given problem by appending a zero cost row or column holding the difference.
    pub fn new(problem: &Problem) -> Self {
        let mut supply = problem.supply().to_vec();
        let mut demand = problem.demand().to_vec();
        let difference = problem.total_supply() - problem.total_demand();

        let (costs, dummy) = if difference > 0. {
            demand.push(difference);
            (problem.costs().extended(0, 1, 0.), Some(Dummy::Destination))
        } else if difference < 0. {
            supply.push(-difference);
            (problem.costs().extended(1, 0, 0.), Some(Dummy::Source))
        } else {
            (problem.costs().clone(), None)
        };

        Self { costs, supply, demand, dummy }
    }

    /// Returns quantity held by the dummy line.
    pub fn dummy_quantity(&self) -> Float {
        match self.dummy {
            Some(Dummy::Source) => self.supply.last().copied().unwrap_or_default(),
            Some(Dummy::Destination) => self.demand.last().copied().unwrap_or_default(),
            None => 0.,
        }
    }

    /// Projects allocation of balanced shape back to the original problem.
    pub fn project(&self, problem: &Problem, allocation: Matrix, steps: Vec<AllocationStep>) -> Solution {
        let (rows, cols) = (problem.sources(), problem.destinations());

        let slack = self.dummy.map(|dummy| match dummy {
            Dummy::Source => Slack::UnmetDemand(allocation.row(rows)[..cols].to_vec()),
            Dummy::Destination => Slack::UnusedSupply(allocation.col(cols).take(rows).collect()),
        });

        let allocation = allocation.truncated(rows, cols);
        let cost = get_allocation_cost(problem, &allocation);

        Solution { allocation, cost, slack, steps }
    }
}

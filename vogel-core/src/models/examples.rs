//! Provides a way to generate random problems, mostly used by tests, benchmarks and the
//! problem generator of command line interface.

use crate::models::{Matrix, Problem};
use crate::utils::{Float, GenericResult, Random};

/// Specifies parameters of a randomly generated problem.
#[derive(Clone, Debug)]
pub struct ProblemPrototype {
    /// Amount of sources.
    pub sources: usize,
    /// Amount of destinations.
    pub destinations: usize,
    /// Max unit cost, costs are integral values in `[1, max_cost]`.
    pub max_cost: i32,
    /// Max capacity of a single source or destination.
    pub max_capacity: i32,
    /// If true, total supply is equal to total demand.
    pub balanced: bool,
}

/// Generates a random problem using given prototype.
pub fn generate_problem(random: &dyn Random, prototype: &ProblemPrototype) -> GenericResult<Problem> {
    if prototype.max_cost < 1 || prototype.max_capacity < 1 {
        return Err("max cost and max capacity should be positive".into());
    }

    let costs = (0..prototype.sources)
        .map(|_| (0..prototype.destinations).map(|_| random.uniform_int(1, prototype.max_cost) as Float).collect())
        .collect::<Vec<Vec<_>>>();

    let supply = generate_capacities(random, prototype.sources, prototype.max_capacity);
    let mut demand = generate_capacities(random, prototype.destinations, prototype.max_capacity);

    if prototype.balanced {
        rebalance(&mut demand, supply.iter().sum());
    }

    Problem::new(Matrix::from_rows(costs)?, supply, demand)
}

fn generate_capacities(random: &dyn Random, size: usize, max_capacity: i32) -> Vec<Float> {
    (0..size).map(|_| random.uniform_int(1, max_capacity) as Float).collect()
}

/// Scales integral capacities to match total, the rounding remainder goes to the last one.
fn rebalance(capacities: &mut [Float], total: Float) {
    let current: Float = capacities.iter().sum();
    let size = capacities.len();

    if size == 0 || current == 0. {
        return;
    }

    capacities.iter_mut().for_each(|value| *value = (*value * total / current).floor());

    let assigned: Float = capacities[..size - 1].iter().sum();
    capacities[size - 1] = (total - assigned).max(0.);
}

#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::Matrix;
use crate::utils::{Float, GenericResult};

/// Defines a transportation problem: unit costs between every source and destination together
/// with source capacities (supply) and destination requirements (demand).
///
/// A problem can be created only from rectangular, finite and non-negative data, so the solver
/// never needs to validate its input again.
#[derive(Clone, Debug)]
pub struct Problem {
    costs: Matrix,
    supply: Vec<Float>,
    demand: Vec<Float>,
}

impl Problem {
    /// Creates a new instance of `Problem` checking that shapes are consistent and that all
    /// values are finite and non-negative.
    pub fn new(costs: Matrix, supply: Vec<Float>, demand: Vec<Float>) -> GenericResult<Self> {
        if supply.is_empty() || demand.is_empty() {
            return Err("problem should have at least one source and one destination".into());
        }

        if costs.rows() != supply.len() || costs.cols() != demand.len() {
            return Err(format!(
                "cost matrix shape {}x{} does not match {} sources and {} destinations",
                costs.rows(),
                costs.cols(),
                supply.len(),
                demand.len()
            )
            .into());
        }

        check_values("cost", costs.cells().map(|(_, _, value)| value))?;
        check_values("supply", supply.iter().copied())?;
        check_values("demand", demand.iter().copied())?;

        Ok(Self { costs, supply, demand })
    }

    /// Creates a new instance of `Problem` from cost matrix given as vector of rows.
    pub fn from_rows(costs: Vec<Vec<Float>>, supply: Vec<Float>, demand: Vec<Float>) -> GenericResult<Self> {
        Self::new(Matrix::from_rows(costs)?, supply, demand)
    }

    /// Returns unit costs.
    pub fn costs(&self) -> &Matrix {
        &self.costs
    }

    /// Returns capacity of every source.
    pub fn supply(&self) -> &[Float] {
        self.supply.as_slice()
    }

    /// Returns requirement of every destination.
    pub fn demand(&self) -> &[Float] {
        self.demand.as_slice()
    }

    /// Returns amount of sources.
    pub fn sources(&self) -> usize {
        self.supply.len()
    }

    /// Returns amount of destinations.
    pub fn destinations(&self) -> usize {
        self.demand.len()
    }

    /// Returns total supply.
    pub fn total_supply(&self) -> Float {
        self.supply.iter().sum()
    }

    /// Returns total demand.
    pub fn total_demand(&self) -> Float {
        self.demand.iter().sum()
    }

    /// Returns true if total supply equals total demand.
    pub fn is_balanced(&self) -> bool {
        self.total_supply() == self.total_demand()
    }
}

fn check_values(name: &str, mut values: impl Iterator<Item = Float>) -> GenericResult<()> {
    match values.find(|value| !value.is_finite() || *value < 0.) {
        Some(value) => Err(format!("{name} values should be finite and non-negative, got: {value}").into()),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::*;
use crate::format::problem::Problem;
use crate::format::{DUMMY_DESTINATION_ID, DUMMY_SOURCE_ID};
use std::io::{BufWriter, Write};
use vogel_core::models::{AllocationStep, Line, Slack, Solution as CoreSolution};
use vogel_core::prelude::{Float, GenericError};

/// Specifies which optional parts are written into the solution.
#[derive(Clone, Debug, Default)]
pub struct WriterOptions {
    /// Write quantities assigned to the dummy line.
    pub include_slack: bool,
    /// Write allocation steps.
    pub include_steps: bool,
}

/// A trait to serialize solution in pragmatic format.
pub trait PragmaticSolution<W: Write> {
    /// Serializes solution in pragmatic json format.
    fn write_pragmatic_json(
        &self,
        problem: &Problem,
        writer: BufWriter<W>,
        options: &WriterOptions,
    ) -> Result<(), GenericError>;
}

impl<W: Write> PragmaticSolution<W> for CoreSolution {
    fn write_pragmatic_json(
        &self,
        problem: &Problem,
        writer: BufWriter<W>,
        options: &WriterOptions,
    ) -> Result<(), GenericError> {
        let solution = create_solution(problem, self, options);

        serialize_solution(&solution, writer)
    }
}

/// Serializes solution (or any other serializable output, e.g. a list of solutions) into json.
pub fn serialize_solution<W: Write, S: serde::Serialize>(
    solution: &S,
    mut writer: BufWriter<W>,
) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(&mut writer, solution).map_err(|err| format!("cannot write solution: '{err}'"))?;

    writer.flush().map_err(GenericError::from)
}

/// Creates pragmatic solution from the core one.
pub fn create_solution(problem: &Problem, solution: &CoreSolution, options: &WriterOptions) -> Solution {
    let allocation = solution.allocation.to_rows();

    let flows = solution
        .flows()
        .map(|(row, col, quantity)| Flow {
            source: get_source_id(problem, row),
            destination: get_destination_id(problem, col),
            quantity,
            cost: quantity * get_cost(problem, row, col),
        })
        .collect();

    let sources = problem
        .sources
        .iter()
        .zip(allocation.iter())
        .enumerate()
        .map(|(row, (source, quantities))| SourceSummary {
            id: source.id.clone(),
            shipped: quantities.iter().sum(),
            cost: quantities.iter().enumerate().map(|(col, quantity)| quantity * get_cost(problem, row, col)).sum(),
        })
        .collect();

    let slack = if options.include_slack { solution.slack.as_ref().map(create_slack) } else { None };

    let steps = if options.include_steps {
        Some(solution.steps.iter().map(|step| create_step(problem, step)).collect())
    } else {
        None
    };

    Solution {
        statistic: Statistic { cost: solution.cost, shipped: solution.total_shipped(), steps: solution.steps.len() },
        currency: problem.currency.clone(),
        allocation,
        flows,
        sources,
        slack,
        steps,
    }
}

fn create_slack(slack: &Slack) -> SlackInfo {
    let kind = match slack {
        Slack::UnusedSupply(_) => SlackKind::UnusedSupply,
        Slack::UnmetDemand(_) => SlackKind::UnmetDemand,
    };

    SlackInfo { kind, quantities: slack.quantities().to_vec() }
}

fn create_step(problem: &Problem, step: &AllocationStep) -> Step {
    let (row, col) = step.cell;

    Step {
        line: match step.line {
            Line::Row(index) => LineIndex::Row(index),
            Line::Column(index) => LineIndex::Column(index),
        },
        penalty: step.penalty,
        source: get_source_id(problem, row),
        destination: get_destination_id(problem, col),
        quantity: step.quantity,
    }
}

fn get_source_id(problem: &Problem, row: usize) -> String {
    problem.sources.get(row).map_or(DUMMY_SOURCE_ID, |source| source.id.as_str()).to_string()
}

fn get_destination_id(problem: &Problem, col: usize) -> String {
    problem.destinations.get(col).map_or(DUMMY_DESTINATION_ID, |destination| destination.id.as_str()).to_string()
}

fn get_cost(problem: &Problem, row: usize, col: usize) -> Float {
    problem.costs.get(row).and_then(|costs| costs.get(col)).copied().unwrap_or(0.)
}

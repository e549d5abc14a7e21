use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};
use vogel_core::prelude::Float;

/// Represents overall solution statistic.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Statistic {
    /// Total shipping cost.
    pub cost: Float,
    /// Total shipped quantity.
    pub shipped: Float,
    /// Amount of allocation steps.
    pub steps: usize,
}

/// A non-zero shipment between a source and a destination.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Flow {
    /// A source id.
    pub source: String,
    /// A destination id.
    pub destination: String,
    /// A shipped quantity.
    pub quantity: Float,
    /// A cost of the shipment.
    pub cost: Float,
}

/// Aggregated shipments of one source.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SourceSummary {
    /// A source id.
    pub id: String,
    /// A quantity shipped from the source.
    pub shipped: Float,
    /// A cost of all shipments from the source.
    pub cost: Float,
}

/// Specifies which side had excess capacity.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SlackKind {
    /// Supply exceeded demand: quantities are given per source.
    UnusedSupply,
    /// Demand exceeded supply: quantities are given per destination.
    UnmetDemand,
}

/// Quantities which were assigned to the dummy line.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SlackInfo {
    /// A slack kind.
    pub kind: SlackKind,
    /// Slack quantities.
    pub quantities: Vec<Float>,
}

/// An index of the line selected on allocation step.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LineIndex {
    /// A source row.
    Row(usize),
    /// A destination column.
    Column(usize),
}

/// An allocation step.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Step {
    /// A selected line.
    pub line: LineIndex,
    /// A penalty of the selected line.
    pub penalty: Float,
    /// A source id of the selected cell.
    pub source: String,
    /// A destination id of the selected cell.
    pub destination: String,
    /// An allocated quantity.
    pub quantity: Float,
}

/// A transportation plan.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Solution {
    /// A total statistic.
    pub statistic: Statistic,

    /// A currency symbol copied from the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Shipped quantities: one row per source, one value per destination.
    pub allocation: Vec<Vec<Float>>,

    /// Non-zero shipments.
    pub flows: Vec<Flow>,

    /// Per source summary.
    pub sources: Vec<SourceSummary>,

    /// Excess capacity, if the problem was not balanced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackInfo>,

    /// Allocation steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0001".to_string(),
            "cannot deserialize solution".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

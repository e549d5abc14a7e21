#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use vogel_core::prelude::{Float, GenericError};

/// A source which ships goods.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Source {
    /// A unique source id.
    pub id: String,
    /// An amount available at the source.
    pub supply: Float,
}

/// A destination which receives goods.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Destination {
    /// A unique destination id.
    pub id: String,
    /// An amount required at the destination.
    pub demand: Float,
}

/// A transportation problem definition.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Sources in the order used by rows of the cost matrix.
    pub sources: Vec<Source>,
    /// Destinations in the order used by columns of the cost matrix.
    pub destinations: Vec<Destination>,
    /// Unit shipping costs: one row per source, one value per destination.
    pub costs: Vec<Vec<Float>>,
    /// A currency symbol, it is only echoed into the solution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

/// Serializes problem in json format into `BufWriter`.
pub fn serialize_problem<W: Write>(problem: &Problem, writer: &mut BufWriter<W>) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(&mut *writer, problem).map_err(|err| format!("cannot serialize problem: '{err}'"))?;
    writer.flush().map_err(GenericError::from)
}

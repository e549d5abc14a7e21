//! Import from a cost table in csv format.
//!
//! The table has a header with destination ids followed by `SUPPLY` column, one row per source
//! with its costs and supply, and the last row starting with `DEMAND`:
//!
//! ```text
//! ,client1,client2,SUPPLY
//! plant1,4,6,10
//! plant2,5,3,10
//! DEMAND,8,12,
//! ```

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::read_csv_problem;

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;

    use std::io::{BufReader, Read};
    use vogel_core::prelude::Float;
    use vogel_pragmatic::format::FormatError;
    use vogel_pragmatic::format::problem::*;

    const SUPPLY_COLUMN: &str = "SUPPLY";
    const DEMAND_ROW: &str = "DEMAND";

    fn create_format_error(entity: &str, details: String) -> FormatError {
        FormatError::new_with_details(
            "E0000".to_string(),
            format!("cannot read {entity}"),
            format!("check {entity} definition"),
            details,
        )
    }

    fn parse_value(value: &str, line: usize, column: usize) -> Result<Float, String> {
        value.parse::<Float>().map_err(|err| format!("cannot parse '{value}' at line {line}, column {column}: {err}"))
    }

    fn parse_values(record: &csv::StringRecord, size: usize, line: usize) -> Result<Vec<Float>, String> {
        (1..=size)
            .map(|column| {
                record
                    .get(column)
                    .ok_or_else(|| format!("missing value at line {line}, column {column}"))
                    .and_then(|value| parse_value(value, line, column))
            })
            .collect()
    }

    fn read_destination_ids(headers: &csv::StringRecord) -> Result<Vec<String>, String> {
        let size = headers.len();
        let has_supply =
            headers.get(size.saturating_sub(1)).is_some_and(|last| last.eq_ignore_ascii_case(SUPPLY_COLUMN));

        if size < 3 || !has_supply {
            return Err(format!("header should list destinations and end with '{SUPPLY_COLUMN}' column"));
        }

        Ok(headers.iter().skip(1).take(size - 2).map(|id| id.to_string()).collect())
    }

    fn read_table<R: Read>(reader: BufReader<R>) -> Result<Problem, String> {
        let mut reader =
            csv::ReaderBuilder::new().has_headers(true).flexible(true).trim(csv::Trim::All).from_reader(reader);

        let destination_ids = read_destination_ids(reader.headers().map_err(|err| err.to_string())?)?;
        let size = destination_ids.len();

        let mut sources = vec![];
        let mut costs = vec![];
        let mut demand = None;

        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|err| err.to_string())?;
            // header is the first line
            let line = idx + 2;
            let name = record.get(0).unwrap_or_default();

            if demand.is_some() {
                return Err(format!("unexpected row '{name}' at line {line} after '{DEMAND_ROW}' row"));
            }

            if name.eq_ignore_ascii_case(DEMAND_ROW) {
                demand = Some(parse_values(&record, size, line)?);
            } else {
                let supply = record
                    .get(size + 1)
                    .ok_or_else(|| format!("missing supply at line {line}"))
                    .and_then(|value| parse_value(value, line, size + 1))?;

                costs.push(parse_values(&record, size, line)?);
                sources.push(Source { id: name.to_string(), supply });
            }
        }

        let demand = demand.ok_or_else(|| format!("missing '{DEMAND_ROW}' row"))?;

        Ok(Problem {
            sources,
            destinations: destination_ids
                .into_iter()
                .zip(demand)
                .map(|(id, demand)| Destination { id, demand })
                .collect(),
            costs,
            currency: None,
        })
    }

    /// Reads problem from csv cost table.
    pub fn read_csv_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, FormatError> {
        read_table(reader).map_err(|err| create_format_error("cost table", err))
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use std::io::{BufReader, Read};
    use vogel_pragmatic::format::FormatError;
    use vogel_pragmatic::format::problem::Problem;

    /// A stub method for reading problem from csv format.
    pub fn read_csv_problem<R: Read>(_reader: BufReader<R>) -> Result<Problem, FormatError> {
        Err(FormatError::new(
            "E0000".to_string(),
            "csv format is not supported".to_string(),
            "build with csv-format feature".to_string(),
        ))
    }
}

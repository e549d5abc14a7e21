//! Import command helpers

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/import_test.rs"]
mod import_test;

mod csv;
pub use self::csv::*;

use std::io::{BufReader, Read};
use vogel_core::prelude::GenericError;
use vogel_pragmatic::format::problem::Problem;

/// Imports problem from specific format into pragmatic.
pub fn import_problem<R: Read>(
    input_format: &str,
    readers: Option<Vec<BufReader<R>>>,
) -> Result<Problem, GenericError> {
    match (input_format, readers) {
        ("csv", Some(mut readers)) if readers.len() == 1 => {
            read_csv_problem(readers.swap_remove(0)).map_err(|err| format!("cannot read csv: {err}").into())
        }
        ("csv", _) => Err("csv format expects one file with cost table as an input".into()),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}

//! Pragmatic crate allows users to specify transportation problems via simple **pragmatic** json
//! format with named sources and destinations, validates them and writes solutions back in the
//! same format.
//!
//! # Examples
//!
//! ```
//! use std::io::BufWriter;
//! use vogel_core::prelude::*;
//! use vogel_pragmatic::format::problem::{PragmaticProblem, deserialize_problem};
//! use vogel_pragmatic::format::solution::{PragmaticSolution, WriterOptions};
//!
//! let json = r#"{
//!   "sources": [ { "id": "plant1", "supply": 10 }, { "id": "plant2", "supply": 10 } ],
//!   "destinations": [ { "id": "client1", "demand": 8 }, { "id": "client2", "demand": 12 } ],
//!   "costs": [ [4, 6], [5, 3] ]
//! }"#;
//!
//! let problem = deserialize_problem(std::io::BufReader::new(json.as_bytes())).expect("cannot read problem");
//! let core_problem = problem.clone().read_pragmatic().expect("invalid problem");
//! let solution = Solver::default().solve(&core_problem);
//!
//! let mut buffer = Vec::new();
//! solution.write_pragmatic_json(&problem, BufWriter::new(&mut buffer), &WriterOptions::default())?;
//!
//! assert!(String::from_utf8_lossy(&buffer).contains("\"cost\": 74.0"));
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub use vogel_core as core;

pub mod checker;
pub mod format;
pub mod validation;

mod utils;

//! A crate which provides command line helpers to solve, check, import and generate
//! transportation problems in **pragmatic** format.
//!
//! The binary is a thin wrapper: all the logic lives in `extensions` so it can be reused and tested.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub use vogel_core as core;
pub use vogel_pragmatic as pragmatic;

pub mod extensions;

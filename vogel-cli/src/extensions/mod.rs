//! Module provides various helper functionality.

pub mod check;
pub mod generate;
pub mod import;
pub mod solve;

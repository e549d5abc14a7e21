//! A collection of models to represent transportation problem and its solution.

mod matrix;
pub use self::matrix::Matrix;

mod problem;
pub use self::problem::Problem;

mod solution;
pub use self::solution::*;

#[doc(hidden)]
pub mod examples;

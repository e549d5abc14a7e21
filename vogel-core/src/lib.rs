//! Core crate contains the building blocks to solve a classical ***Transportation Problem***
//! with Vogel's approximation method.
//!
//! The solver is a greedy heuristic: it balances supply and demand with a dummy source or
//! destination, then repeatedly picks the row or column with the largest penalty (difference
//! between its two cheapest reachable costs) and fills its cheapest cell as much as possible.
//!
//! # Examples
//!
//! ```
//! use vogel_core::prelude::*;
//!
//! let costs = vec![vec![4., 6.], vec![5., 3.]];
//! let (allocation, total_cost) = solve(costs, vec![10., 10.], vec![8., 12.])?;
//!
//! assert_eq!(allocation.rows(), 2);
//! assert_eq!(total_cost, 74.);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;

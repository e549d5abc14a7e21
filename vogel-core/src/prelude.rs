//! This module reimports a common used types.

pub use crate::models::Matrix;
pub use crate::models::Problem;
pub use crate::models::Solution;

pub use crate::solver::solve;
pub use crate::solver::Solver;
pub use crate::solver::TelemetryMode;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;

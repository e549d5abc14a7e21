#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// A default tolerance used to compare quantities and costs.
pub const DEFAULT_TOLERANCE: Float = 1E-9;

/// Compares floating point numbers, NaN is considered as the biggest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Checks whether two values are equal within a tolerance relative to their magnitude.
pub fn is_close(a: Float, b: Float, tolerance: Float) -> bool {
    let scale = a.abs().max(b.abs()).max(1.);

    (a - b).abs() <= tolerance * scale
}

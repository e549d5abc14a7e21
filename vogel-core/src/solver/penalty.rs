#[cfg(test)]
#[path = "../../tests/unit/solver/penalty_test.rs"]
mod penalty_test;

use crate::models::{Line, Matrix};
use crate::utils::Float;

/// A penalty of a line without remaining capacity or reachable cells: it is never selected.
pub const NO_PENALTY: Float = -1.;

/// Tracks which rows and columns can still receive an allocation. A line is exhausted only after
/// an allocation drains it, so lines with zero initial capacity stay reachable until touched.
pub struct ActiveLines {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl ActiveLines {
    /// Creates lines where every row and column is active.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows: vec![true; rows], cols: vec![true; cols] }
    }

    /// Returns indices of active rows.
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().enumerate().filter(|(_, active)| **active).map(|(idx, _)| idx)
    }

    /// Returns indices of active columns.
    pub fn cols(&self) -> impl Iterator<Item = usize> + '_ {
        self.cols.iter().enumerate().filter(|(_, active)| **active).map(|(idx, _)| idx)
    }

    /// Checks whether given line is still active.
    pub fn is_active(&self, line: Line) -> bool {
        match line {
            Line::Row(idx) => self.rows[idx],
            Line::Column(idx) => self.cols[idx],
        }
    }

    /// Marks line as exhausted.
    pub fn exhaust(&mut self, line: Line) {
        match line {
            Line::Row(idx) => self.rows[idx] = false,
            Line::Column(idx) => self.cols[idx] = false,
        }
    }
}

/// Calculates penalty from reachable costs of a line: difference between the two smallest
/// costs, the cost itself when only one is left, or `NO_PENALTY` when there is none.
pub fn get_penalty(costs: impl Iterator<Item = Float>) -> Float {
    let (count, first, second) = costs.fold((0, Float::MAX, Float::MAX), |(count, first, second), cost| {
        if cost < first {
            (count + 1, cost, first)
        } else if cost < second {
            (count + 1, first, cost)
        } else {
            (count + 1, first, second)
        }
    });

    match count {
        0 => NO_PENALTY,
        1 => first,
        _ => second - first,
    }
}

/// Returns penalty of every row, rows without remaining supply get `NO_PENALTY`.
pub fn get_row_penalties(costs: &Matrix, active: &ActiveLines, supply: &[Float]) -> Vec<Float> {
    (0..costs.rows())
        .map(|row| {
            if supply[row] > 0. && active.is_active(Line::Row(row)) {
                get_penalty(active.cols().map(|col| costs.get(row, col)))
            } else {
                NO_PENALTY
            }
        })
        .collect()
}

/// Returns penalty of every column, columns without remaining demand get `NO_PENALTY`.
pub fn get_col_penalties(costs: &Matrix, active: &ActiveLines, demand: &[Float]) -> Vec<Float> {
    (0..costs.cols())
        .map(|col| {
            if demand[col] > 0. && active.is_active(Line::Column(col)) {
                get_penalty(active.rows().map(|row| costs.get(row, col)))
            } else {
                NO_PENALTY
            }
        })
        .collect()
}

/// Returns index and value of the largest penalty, the first one wins on ties.
pub fn get_max_penalty(penalties: &[Float]) -> Option<(usize, Float)> {
    penalties
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, penalty)| *penalty > NO_PENALTY)
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
}

#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::{Float, GenericResult};
use std::fmt;

/// A dense, rectangular matrix of floating values stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<Float>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix of given shape filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { data: vec![0.; rows * cols], rows, cols }
    }

    /// Creates a matrix from vector of rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Float>>) -> GenericResult<Self> {
        let cols = rows.first().map_or(0, |row| row.len());

        if let Some(idx) = rows.iter().position(|row| row.len() != cols) {
            return Err(format!("matrix is not rectangular: row {idx} has {} values, expected {cols}", rows[idx].len())
                .into());
        }

        let num_rows = rows.len();
        let data = rows.into_iter().flatten().collect();

        Ok(Self { data, rows: num_rows, cols })
    }

    /// Returns amount of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns amount of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a value at given cell.
    pub fn get(&self, row: usize, col: usize) -> Float {
        self.data[self.index(row, col)]
    }

    /// Sets a value at given cell.
    pub fn set(&mut self, row: usize, col: usize, value: Float) {
        let index = self.index(row, col);
        self.data[index] = value;
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> &[Float] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns an iterator over values of a column.
    pub fn col(&self, col: usize) -> impl Iterator<Item = Float> + '_ {
        (0..self.rows).map(move |row| self.get(row, col))
    }

    /// Returns an iterator over all cells as `(row, col, value)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Float)> + '_ {
        self.data.iter().enumerate().map(move |(index, &value)| (index / self.cols, index % self.cols, value))
    }

    /// Returns a copy with one extra row or column filled with given value.
    pub fn extended(&self, extra_rows: usize, extra_cols: usize, value: Float) -> Self {
        let (rows, cols) = (self.rows + extra_rows, self.cols + extra_cols);
        let data = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| if row < self.rows && col < self.cols { self.get(row, col) } else { value })
            .collect();

        Self { data, rows, cols }
    }

    /// Returns a top-left sub matrix of given shape.
    pub fn truncated(&self, rows: usize, cols: usize) -> Self {
        assert!(rows <= self.rows && cols <= self.cols);

        let data = (0..rows).flat_map(|row| self.row(row)[..cols].iter().copied()).collect();

        Self { data, rows, cols }
    }

    /// Converts matrix to vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<Float>> {
        (0..self.rows).map(|row| self.row(row).to_vec()).collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) is out of {}x{}", self.rows, self.cols);
        row * self.cols + col
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let values = self.row(row).iter().map(|value| value.to_string()).collect::<Vec<_>>();
            writeln!(f, "[{}]", values.join(", "))?;
        }

        Ok(())
    }
}

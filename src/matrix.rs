//! Dense gene-by-cell matrix type.
//!
//! All assays produced by this crate share one representation: a dense 2-D
//! array of `f64` values in column-major order, matching the layout of the
//! binary stream it is decoded from. Dimensions are fixed at construction and
//! never change.

use serde::Serialize;

/// A dense 2-D matrix of 64-bit floats, stored column-major.
///
/// Rows index genes, columns index cells. The matrix itself carries no
/// labels; axis identifiers live in the surrounding container so that every
/// assay shares one label pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    #[serde(rename = "values")]
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from a column-major value buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_column_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "column-major buffer length does not match {}x{} extents",
            rows,
            cols
        );
        Self { rows, cols, data }
    }

    /// Number of rows (genes).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (cells).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows, "row {} out of bounds ({})", row, self.rows);
        assert!(col < self.cols, "col {} out of bounds ({})", col, self.cols);
        self.data[col * self.rows + row]
    }

    /// Contiguous slice holding column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> &[f64] {
        assert!(col < self.cols, "col {} out of bounds ({})", col, self.cols);
        &self.data[col * self.rows..(col + 1) * self.rows]
    }

    /// The full column-major value buffer.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Apply `f` element-wise, producing a new matrix of identical shape.
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_indexing() {
        // 2x3: columns [1,2], [3,4], [5,6]
        let m = Matrix::from_column_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 0), 2.0);
        assert_eq!(m.get(0, 2), 5.0);
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m.column(1), &[3.0, 4.0]);
    }

    #[test]
    fn empty_matrix() {
        let m = Matrix::from_column_major(0, 0, Vec::new());
        assert_eq!(m.shape(), (0, 0));
        assert!(m.values().is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn length_mismatch_panics() {
        Matrix::from_column_major(2, 2, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn map_preserves_shape() {
        let m = Matrix::from_column_major(2, 2, vec![0.0, 1.0, 2.0, 3.0]);
        let doubled = m.map(|v| v * 2.0);
        assert_eq!(doubled.shape(), m.shape());
        assert_eq!(doubled.values(), &[0.0, 2.0, 4.0, 6.0]);
    }
}

//! Dense matrix value type
//!
//! The data lives in a single contiguous buffer in column-major order:
//! the value at (row, col) sits at linear index `row + rows * col`. Every
//! seek-offset formula in the readers and the file layout itself assume
//! this invariant.

use dmat_core::{DenseMatrix, DmatError, MatrixSlices};

/// Dense two-dimensional f64 matrix with column-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix of the given shape with all values zero
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create the identity matrix of the given order
    pub fn identity(order: usize) -> Self {
        let mut m = Self::zeros(order, order);
        for i in 0..order {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Build a matrix from row slices
    ///
    /// The column count is the longest row; shorter rows are zero-padded.
    /// Mainly a convenience for tests and examples.
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        let cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut m = Self::zeros(rows.len(), cols);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                m.set(i, j, value);
            }
        }
        m
    }

    /// Wrap an existing column-major buffer
    ///
    /// Fails with [`DmatError::ShapeMismatch`] when the buffer length does
    /// not equal `rows * cols`.
    pub fn from_column_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, DmatError> {
        if data.len() != rows * cols {
            return Err(DmatError::ShapeMismatch {
                rows,
                cols,
                other_rows: data.len(),
                other_cols: 1,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "position ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        row + self.rows * col
    }

    /// Value at (row, col); panics when the position is out of range
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.index(row, col)]
    }

    /// Set the value at (row, col); panics when the position is out of range
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let i = self.index(row, col);
        self.data[i] = value;
    }

    /// The column-major backing buffer
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable view of the column-major backing buffer
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Calculate `self - other`
    ///
    /// `other` may be smaller than `self`; the result keeps the shape of
    /// `self`, with values outside `other` copied through unchanged. An
    /// `other` larger on either axis fails with
    /// [`DmatError::ShapeMismatch`].
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, DmatError> {
        if other.rows > self.rows || other.cols > self.cols {
            return Err(DmatError::ShapeMismatch {
                rows: self.rows,
                cols: self.cols,
                other_rows: other.rows,
                other_cols: other.cols,
            });
        }
        let mut result = self.clone();
        for col in 0..other.cols {
            for row in 0..other.rows {
                result.set(row, col, self.get(row, col) - other.get(row, col));
            }
        }
        Ok(result)
    }

    /// Scale each column `i` by `factors[i]`
    ///
    /// Columns beyond the factor vector are left unchanged.
    pub fn scale_columns(&self, factors: &[f64]) -> Matrix {
        let mut scaled = self.clone();
        for (col, &factor) in factors.iter().take(self.cols).enumerate() {
            for row in 0..self.rows {
                let i = row + self.rows * col;
                scaled.data[i] *= factor;
            }
        }
        scaled
    }

    /// Row-wise sums of the column-scaled matrix
    ///
    /// Returns one value per row: `sum(factors[c] * self[r, c])` over the
    /// columns covered by the factor vector.
    pub fn scaled_column_sums(&self, factors: &[f64]) -> Vec<f64> {
        let mut sums = vec![0.0; self.rows];
        for (col, &factor) in factors.iter().take(self.cols).enumerate() {
            for (row, sum) in sums.iter_mut().enumerate() {
                *sum += factor * self.data[row + self.rows * col];
            }
        }
        sums
    }
}

impl DenseMatrix for Matrix {
    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row + self.rows * col])
        } else {
            None
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl MatrixSlices for Matrix {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() <= 1e-10,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zeros_and_set_get() {
        let mut m = Matrix::zeros(4, 5);
        for row in 0..4 {
            for col in 0..5 {
                assert_eq!(m.get(row, col), 0.0);
                m.set(row, col, 42.2);
                assert_eq!(m.get(row, col), 42.2);
            }
        }
    }

    #[test]
    fn test_column_major_buffer_layout() {
        let mut m = Matrix::zeros(2, 3);
        m.set(0, 0, 1.0);
        m.set(1, 0, 4.0);
        m.set(0, 1, 2.0);
        m.set(1, 1, 5.0);
        m.set(0, 2, 3.0);
        m.set(1, 2, 6.0);
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0]]);
        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 1), 0.0);
    }

    #[test]
    fn test_identity() {
        let eye = Matrix::identity(3);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(eye.get(row, col), if row == col { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        Matrix::zeros(2, 2).get(2, 0);
    }

    #[test]
    fn test_get_element_bounds() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.get_element(1, 2), Some(0.0));
        assert_eq!(m.get_element(2, 0), None);
        assert_eq!(m.get_element(0, 3), None);
    }

    #[test]
    fn test_subtract_smaller_operand() {
        // A = [1 2 3; 4 5 6], column-major buffer
        let a = Matrix::from_column_major(2, 3, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
        let b = Matrix::identity(2);
        let c = a.subtract(&b).unwrap();
        assert_eq!(c.as_slice(), &[0.0, 4.0, 2.0, 4.0, 3.0, 6.0]);
    }

    #[test]
    fn test_subtract_larger_operand_fails() {
        let a = Matrix::zeros(2, 2);
        let b = Matrix::zeros(3, 2);
        assert_eq!(
            a.subtract(&b),
            Err(DmatError::ShapeMismatch {
                rows: 2,
                cols: 2,
                other_rows: 3,
                other_cols: 2
            })
        );
    }

    #[test]
    fn test_scale_columns() {
        let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]]);
        let b = a.scale_columns(&[2.0, 1.0, 0.5]);
        assert_eq!(b.as_slice(), &[2.0, 4.0, 2.0, 4.0, 1.5, 3.0]);
        // original untouched
        assert_eq!(a.get(0, 0), 1.0);
    }

    #[test]
    fn test_scaled_column_sums() {
        let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]]);
        let sums = a.scaled_column_sums(&[2.0, 1.0, 0.5]);
        assert_eq!(sums.len(), 2);
        assert_close(5.5, sums[0]);
        assert_close(11.0, sums[1]);
    }

    #[test]
    fn test_trait_row_and_column() {
        let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        assert_eq!(m.column(1), vec![2.0, 4.0, 6.0]);
        assert_eq!(m.row(2), vec![5.0, 6.0]);
    }

    #[test]
    fn test_empty_shapes() {
        let m = Matrix::zeros(0, 0);
        assert!(m.is_empty());
        let m = Matrix::zeros(0, 5);
        assert_eq!(m.len(), 0);
        assert_eq!(m.dimensions(), (0, 5));
    }
}

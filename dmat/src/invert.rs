//! Call contract for the external matrix-inversion capability
//!
//! Inversion itself is not implemented here: it is an external routine
//! (typically a native LAPACK binding) invoked through [`InvertBackend`].
//! The backend value is constructed and torn down explicitly by the
//! caller and injected into the call site, never reached through ambient
//! global state. This layer owns exactly two responsibilities: rejecting
//! non-square input before the backend is ever invoked, and passing the
//! backend's outcome through without reinterpreting it beyond the
//! `Singular` / `InvalidInput` categories.

use crate::Matrix;
use dmat_core::DmatError;

/// An external routine that inverts a square matrix in place.
///
/// `data` is the column-major buffer of an `order` x `order` matrix.
/// Implementations must report exactly two failure categories:
/// [`DmatError::Singular`] when no inverse exists and
/// [`DmatError::InvalidInput`] when the routine rejects the buffer as
/// malformed. On success the buffer holds the inverse.
pub trait InvertBackend {
    fn invert(&self, order: usize, data: &mut [f64]) -> Result<(), DmatError>;
}

impl Matrix {
    /// Invert this matrix in place using the given backend.
    ///
    /// Non-square matrices are rejected with [`DmatError::NotSquare`]
    /// before the backend is invoked.
    pub fn invert_in_place<B: InvertBackend>(&mut self, backend: &B) -> Result<(), DmatError> {
        let (rows, cols) = (self.rows(), self.cols());
        if rows != cols {
            return Err(DmatError::NotSquare { rows, cols });
        }
        backend.invert(rows, self.as_mut_slice())
    }

    /// Calculate the inverse of this matrix, leaving it unchanged.
    pub fn inverted<B: InvertBackend>(&self, backend: &B) -> Result<Matrix, DmatError> {
        let mut inverse = self.clone();
        inverse.invert_in_place(backend)?;
        Ok(inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference backend for exercising the call contract. The production
    /// routine is an external capability; this partial-pivot Gauss-Jordan
    /// stands in for it in tests only.
    struct GaussJordan;

    impl InvertBackend for GaussJordan {
        fn invert(&self, order: usize, data: &mut [f64]) -> Result<(), DmatError> {
            let n = order;
            if data.len() != n * n || data.iter().any(|v| !v.is_finite()) {
                return Err(DmatError::InvalidInput);
            }

            let mut a = data.to_vec();
            let mut inv = vec![0.0; n * n];
            for i in 0..n {
                inv[i + n * i] = 1.0;
            }

            for col in 0..n {
                let mut pivot = col;
                for row in col + 1..n {
                    if a[row + n * col].abs() > a[pivot + n * col].abs() {
                        pivot = row;
                    }
                }
                if a[pivot + n * col] == 0.0 {
                    return Err(DmatError::Singular);
                }
                if pivot != col {
                    for c in 0..n {
                        a.swap(col + n * c, pivot + n * c);
                        inv.swap(col + n * c, pivot + n * c);
                    }
                }

                let p = a[col + n * col];
                for c in 0..n {
                    a[col + n * c] /= p;
                    inv[col + n * c] /= p;
                }
                for row in 0..n {
                    if row == col {
                        continue;
                    }
                    let factor = a[row + n * col];
                    if factor == 0.0 {
                        continue;
                    }
                    for c in 0..n {
                        a[row + n * c] -= factor * a[col + n * c];
                        inv[row + n * c] -= factor * inv[col + n * c];
                    }
                }
            }

            data.copy_from_slice(&inv);
            Ok(())
        }
    }

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() <= 1e-10,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_invert_2x2() {
        let m = Matrix::from_rows(&[&[4.0, 7.0], &[2.0, 6.0]]);
        let inverse = m.inverted(&GaussJordan).unwrap();
        assert_close(0.6, inverse.get(0, 0));
        assert_close(-0.7, inverse.get(0, 1));
        assert_close(-0.2, inverse.get(1, 0));
        assert_close(0.4, inverse.get(1, 1));
        // the source matrix is untouched
        assert_eq!(m.get(0, 0), 4.0);
    }

    #[test]
    fn test_inverse_times_original_is_identity() {
        let m = Matrix::from_rows(&[
            &[2.0, 0.0, 1.0],
            &[1.0, 3.0, 2.0],
            &[0.0, 1.0, 1.0],
        ]);
        let inv = m.inverted(&GaussJordan).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += m.get(row, k) * inv.get(k, col);
                }
                assert_close(if row == col { 1.0 } else { 0.0 }, sum);
            }
        }
    }

    #[test]
    fn test_non_square_rejected_before_backend() {
        struct Unreachable;
        impl InvertBackend for Unreachable {
            fn invert(&self, _: usize, _: &mut [f64]) -> Result<(), DmatError> {
                panic!("backend must not be invoked for non-square input");
            }
        }

        let mut m = Matrix::zeros(2, 3);
        assert_eq!(
            m.invert_in_place(&Unreachable),
            Err(DmatError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_singular_matrix() {
        let m = Matrix::from_rows(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(m.inverted(&GaussJordan), Err(DmatError::Singular));
    }

    #[test]
    fn test_invalid_input() {
        let m = Matrix::from_rows(&[&[f64::NAN, 0.0], &[0.0, 1.0]]);
        assert_eq!(m.inverted(&GaussJordan), Err(DmatError::InvalidInput));
    }
}

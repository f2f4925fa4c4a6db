#![no_std]

//! DMAT Core - Dense Matrix Binary Format Definitions
//!
//! This crate provides the format definitions, binary codec, and validation
//! utilities for dense column-major matrix files. It performs no I/O.

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

pub mod codec;
pub mod error;
pub mod format;
pub mod range;
pub mod validation;

pub use codec::*;
pub use error::*;
pub use format::*;
pub use range::*;
pub use validation::*;

/// Core dense matrix trait for storage-agnostic access
pub trait DenseMatrix {
    /// Get the value at the specified position, or `None` when the
    /// position is out of range
    fn get_element(&self, row: usize, col: usize) -> Option<f64>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the total number of stored elements
    fn len(&self) -> usize {
        let (rows, cols) = self.dimensions();
        rows * cols
    }

    /// Whether the matrix holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extension trait for whole row/column extraction (requires alloc)
#[cfg(feature = "alloc")]
pub trait MatrixSlices: DenseMatrix {
    /// Collect all elements of a column, top to bottom
    fn column(&self, col: usize) -> Vec<f64> {
        let (rows, _) = self.dimensions();
        (0..rows).filter_map(|row| self.get_element(row, col)).collect()
    }

    /// Collect all elements of a row, left to right
    fn row(&self, row: usize) -> Vec<f64> {
        let (_, cols) = self.dimensions();
        (0..cols).filter_map(|col| self.get_element(row, col)).collect()
    }
}

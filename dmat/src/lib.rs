//! DMAT - Dense Matrix Binary Persistence
//!
//! This library stores dense f64 matrices in a compact binary file format
//! and reads them back whole, by slice, or through a zero-copy memory
//! mapping.
//!
//! ## Architecture
//!
//! DMAT separates format definitions from I/O:
//!
//! - **dmat-core**: Pure format definitions, codec, and validation (no I/O)
//! - **dmat**: Concrete matrix type, persistence, and mapped loading
//!
//! ## File format
//!
//! An 8-byte header (u32 row count, u32 column count, little-endian)
//! followed by `rows * cols` little-endian f64 values in column-major
//! order. The layout is chosen so that reading one column is a single
//! seek plus a contiguous run, while reading one row is strided.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use dmat::{io, select, Matrix};
//!
//! fn example() -> dmat::Result<()> {
//!     let mut m = Matrix::zeros(100, 10);
//!     m.set(3, 7, 42.0);
//!     io::save(&m, "values.dmat")?;
//!
//!     // read back a single column without touching the rest of the file
//!     let column = select::load_column("values.dmat", 7)?;
//!     assert_eq!(column[3], 42.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! All operations are synchronous and release their file handle or
//! mapping on every exit path. Writes truncate and are not coordinated
//! with concurrent readers; callers needing multi-process consistency
//! must serialize access externally. In particular, rewriting a file
//! while a [`MmapMatrix`] over it is alive may expose torn data.

// Re-export core format definitions and validation
pub use dmat_core::{
    // Core traits
    DenseMatrix, MatrixSlices,
    // Format definitions
    codec, MatrixHeader, RangeSelector,
    // Error kinds
    DmatError,
    // Validation utilities
    cast_values, validate_alignment, validate_array_bounds,
};

// Implementation modules
pub mod error;
pub mod invert;
pub mod io;
mod matrix;
#[cfg(feature = "mmap")]
pub mod mmap;
pub mod select;

// Public exports
pub use error::{Error, Result};
pub use invert::InvertBackend;
pub use matrix::Matrix;

// Memory mapping features
#[cfg(feature = "mmap")]
pub use mmap::MmapMatrix;

//! DMAT format definitions
//!
//! This module contains the file header structure and the offset
//! arithmetic of the column-major layout.

pub mod header;

pub use header::*;

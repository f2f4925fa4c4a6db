//! DMAT file header and layout arithmetic
//!
//! A matrix file starts with a fixed 8-byte header (row count, column
//! count, both u32 little-endian) followed by `rows * cols` little-endian
//! f64 values in column-major order. There is no magic number, version
//! field, or checksum: any file matching the expected length is accepted,
//! so format errors surface only as length or shape mismatches.

use crate::codec::{self, FIELD_SIZE, VALUE_SIZE};
use crate::DmatError;

/// Fixed header of a .dmat file
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub cols: u32,
}

impl MatrixHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = 2 * FIELD_SIZE;

    /// Create a header for the given shape
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Parse a header from the first [`Self::SIZE`] bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DmatError> {
        if bytes.len() < Self::SIZE {
            return Err(DmatError::ShortRead {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let rows = codec::decode_u32(&bytes[..FIELD_SIZE])?;
        let cols = codec::decode_u32(&bytes[FIELD_SIZE..Self::SIZE])?;
        Ok(Self { rows, cols })
    }

    /// Encode the header as bytes
    pub const fn to_bytes_array(&self) -> [u8; Self::SIZE] {
        let rows = codec::encode_u32(self.rows);
        let cols = codec::encode_u32(self.cols);
        [
            rows[0], rows[1], rows[2], rows[3], cols[0], cols[1], cols[2], cols[3],
        ]
    }

    /// Number of values in the data region
    pub fn element_count(&self) -> Result<u64, DmatError> {
        (self.rows as u64)
            .checked_mul(self.cols as u64)
            .ok_or(DmatError::SizeOverflow)
    }

    /// Size of the data region in bytes
    pub fn data_size(&self) -> Result<u64, DmatError> {
        self.element_count()?
            .checked_mul(VALUE_SIZE as u64)
            .ok_or(DmatError::SizeOverflow)
    }

    /// Exact length of a well-formed file with this header
    pub fn file_size(&self) -> Result<u64, DmatError> {
        self.data_size()?
            .checked_add(Self::SIZE as u64)
            .ok_or(DmatError::SizeOverflow)
    }

    /// Byte offset of the value at (row, col)
    ///
    /// Derived from the column-major invariant: the value lives at linear
    /// index `row + rows * col`.
    pub fn value_offset(&self, row: usize, col: usize) -> u64 {
        let index = row as u64 + self.rows as u64 * col as u64;
        Self::SIZE as u64 + VALUE_SIZE as u64 * index
    }

    /// Byte offset of the first value of a column
    ///
    /// Columns are contiguous, so a column read is a single seek followed
    /// by `rows` sequential values.
    pub fn column_offset(&self, col: usize) -> u64 {
        self.value_offset(0, col)
    }

    /// Byte distance between two consecutive values of one row
    ///
    /// Rows are strided by the column height, which is why row reads need
    /// one seek per column.
    pub const fn row_stride(&self) -> u64 {
        VALUE_SIZE as u64 * self.rows as u64
    }
}

//! Memory-mapped matrix loader
//!
//! Maps a matrix file read-only and, where the platform allows it,
//! reinterprets the data region in place as f64 values with no per-value
//! decode loop. The resulting [`MmapMatrix`] owns the mapping; the value
//! slice is reachable only through bounds-checked accessors and never
//! outlives the struct.
//!
//! The in-place reinterpretation is only correct when the host is
//! little-endian (the file byte order) and the mapped region is 8-byte
//! aligned. When either assumption fails the loader falls back to the
//! decode loop of the full reader rather than producing wrong values.

use crate::io::read_f64;
use crate::{Matrix, Result};
use dmat_core::{cast_values, codec::VALUE_SIZE, DenseMatrix, DmatError, MatrixHeader, MatrixSlices};
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;

/// Matrix view backed by a memory-mapped file
///
/// Reads through this type observe the file as it was mapped; mutating
/// the same file on disk while a view is alive is unsafe to combine with
/// it (the mapping may see a torn write). Drop the view before rewriting
/// the file.
pub struct MmapMatrix {
    // Keeps the mapping alive for as long as `values` may point into it
    _mmap: Mmap,
    header: MatrixHeader,
    values: *const f64,
    values_len: usize,
    // Populated only when the platform cannot reinterpret the mapping in
    // place; `values` then points into this buffer instead
    _decoded: Option<Vec<f64>>,
}

// SAFETY: the raw pointer targets either the read-only mapping owned by
// `_mmap` or the heap buffer owned by `_decoded`; both live exactly as
// long as the struct, neither is ever written through, and no interior
// mutability exists.
unsafe impl Send for MmapMatrix {}
unsafe impl Sync for MmapMatrix {}

impl MmapMatrix {
    /// Map a matrix file and validate its header against the mapped length.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;

        // SAFETY: read-only mapping; concurrent mutation of the file is
        // documented as unsupported for this type
        let mmap = unsafe { MmapOptions::new().map(&file)? };

        if mmap.len() < MatrixHeader::SIZE {
            return Err(DmatError::ShortRead {
                expected: MatrixHeader::SIZE,
                actual: mmap.len(),
            }
            .into());
        }
        let header = MatrixHeader::from_bytes(&mmap[..MatrixHeader::SIZE])?;

        let data_size = header.data_size()?;
        let available = (mmap.len() - MatrixHeader::SIZE) as u64;
        if available < data_size {
            return Err(DmatError::TruncatedData {
                expected: data_size,
                actual: available,
            }
            .into());
        }
        let data_end = MatrixHeader::SIZE + data_size as usize;

        let zero_copy: Option<(*const f64, usize)> = if cfg!(target_endian = "little") {
            cast_values(&mmap[MatrixHeader::SIZE..data_end])
                .ok()
                .map(|values| (values.as_ptr(), values.len()))
        } else {
            None
        };

        let mut decoded = None;
        let (values, values_len) = match zero_copy {
            Some(view) => view,
            None => {
                // big-endian host or misaligned mapping: decode each value
                let mut owned = Vec::with_capacity(header.element_count()? as usize);
                let mut rest = &mmap[MatrixHeader::SIZE..data_end];
                while !rest.is_empty() {
                    owned.push(read_f64(&mut rest)?);
                }
                let view = (owned.as_ptr(), owned.len());
                decoded = Some(owned);
                view
            }
        };

        // SAFETY of the stored pointer: both the mapped region and a
        // Vec's heap buffer keep their addresses when the owning handle
        // moves into the struct below.
        Ok(Self {
            _mmap: mmap,
            header,
            values,
            values_len,
            _decoded: decoded,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.header.rows as usize
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.header.cols as usize
    }

    /// The parsed file header
    pub fn header(&self) -> MatrixHeader {
        self.header
    }

    /// The column-major values, in file order
    pub fn values(&self) -> &[f64] {
        // SAFETY: pointer and length validated during construction; the
        // backing storage is owned by self and outlives this borrow
        unsafe { std::slice::from_raw_parts(self.values, self.values_len) }
    }

    /// Value at (row, col), or `None` when the position is out of range
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows() && col < self.cols() {
            Some(self.values()[row + self.rows() * col])
        } else {
            None
        }
    }

    /// Copy the view into an owned [`Matrix`], detached from the mapping
    pub fn to_matrix(&self) -> Matrix {
        let mut matrix = Matrix::zeros(self.rows(), self.cols());
        matrix.as_mut_slice().copy_from_slice(self.values());
        matrix
    }

    /// Whether the view reads the mapping in place (no decode copy)
    pub fn is_zero_copy(&self) -> bool {
        self._decoded.is_none()
    }
}

impl DenseMatrix for MmapMatrix {
    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
}

impl MatrixSlices for MmapMatrix {}

impl std::fmt::Debug for MmapMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MmapMatrix")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("zero_copy", &self.is_zero_copy())
            .finish()
    }
}

const _: () = assert!(VALUE_SIZE == std::mem::size_of::<f64>());

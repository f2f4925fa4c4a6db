//! Full-matrix persistence
//!
//! Writes and reads an entire matrix file sequentially, column by column,
//! which is exactly the column-major storage order of both the in-memory
//! buffer and the on-disk data region.

use crate::{Matrix, Result};
use dmat_core::{codec, DmatError, MatrixHeader};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read exactly `N` bytes, failing with a structured `ShortRead` when the
/// stream ends mid-field instead of surfacing an unexpected-EOF I/O error.
pub(crate) fn read_exact_or_short<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    let mut filled = 0;
    while filled < N {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            return Err(DmatError::ShortRead {
                expected: N,
                actual: filled,
            }
            .into());
        }
        filled += n;
    }
    Ok(buf)
}

/// Read one little-endian u32 field
pub(crate) fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let bytes = read_exact_or_short::<R, { codec::FIELD_SIZE }>(reader)?;
    Ok(codec::decode_u32(&bytes)?)
}

/// Read one little-endian f64 value
pub(crate) fn read_f64<R: Read>(reader: &mut R) -> Result<f64> {
    let bytes = read_exact_or_short::<R, { codec::VALUE_SIZE }>(reader)?;
    Ok(codec::decode_f64(&bytes)?)
}

/// Read the 8-byte header from the current stream position
pub(crate) fn read_header<R: Read>(reader: &mut R) -> Result<MatrixHeader> {
    let rows = read_u32(reader)?;
    let cols = read_u32(reader)?;
    Ok(MatrixHeader::new(rows, cols))
}

fn header_for(matrix: &Matrix) -> Result<MatrixHeader> {
    let rows = u32::try_from(matrix.rows()).map_err(|_| DmatError::SizeOverflow)?;
    let cols = u32::try_from(matrix.cols()).map_err(|_| DmatError::SizeOverflow)?;
    Ok(MatrixHeader::new(rows, cols))
}

/// Write the matrix to the given file, creating or truncating it.
///
/// Layout: the 8-byte header, then one encoded value per (column, row)
/// pair with columns as the outer loop. A write failure leaves the
/// destination in an undefined state; no atomic-rename guarantee is made.
pub fn save<P: AsRef<Path>>(matrix: &Matrix, path: P) -> Result<()> {
    let header = header_for(matrix)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&header.to_bytes_array())?;
    for col in 0..matrix.cols() {
        for row in 0..matrix.rows() {
            writer.write_all(&codec::encode_f64(matrix.get(row, col)))?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Read a complete matrix from the given file.
///
/// Fails with `ShortRead` when the header or the data region is truncated
/// relative to the declared shape; a failed load never yields a partially
/// filled matrix.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let header = read_header(&mut reader)?;
    let mut matrix = Matrix::zeros(header.rows as usize, header.cols as usize);
    for col in 0..header.cols as usize {
        for row in 0..header.rows as usize {
            let value = read_f64(&mut reader)?;
            matrix.set(row, col, value);
        }
    }
    Ok(matrix)
}

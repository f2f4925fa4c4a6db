//! Selective readers: single column, single row, main diagonal
//!
//! All three resolve the 8-byte header first and then seek straight to
//! the bytes they need; unrelated parts of the file are never decoded or
//! buffered. The column-major layout makes the cost asymmetric on
//! purpose: a column is one seek plus a contiguous run of values, while a
//! row needs one discrete seek per column with a `8 * (rows - 1)` skip
//! between values. Do not "fix" the row path by slurping the whole file;
//! selective access is the point of this module.

use crate::io::{read_f64, read_header};
use crate::Result;
use dmat_core::{codec::VALUE_SIZE, DmatError};
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;

/// Read one column of a stored matrix.
///
/// Validates `col` against the declared column count, seeks to the
/// column's first value, and reads `rows` consecutive values through a
/// buffered reader. Nothing outside the column is touched.
pub fn load_column<P: AsRef<Path>>(path: P, col: usize) -> Result<Vec<f64>> {
    let mut file = File::open(path)?;
    let header = read_header(&mut file)?;

    let cols = header.cols as usize;
    if col >= cols {
        return Err(DmatError::ColumnOutOfRange { col, cols }.into());
    }

    file.seek(SeekFrom::Start(header.column_offset(col)))?;
    let mut reader = BufReader::new(file);
    let rows = header.rows as usize;
    let mut values = Vec::with_capacity(rows);
    for _ in 0..rows {
        values.push(read_f64(&mut reader)?);
    }
    Ok(values)
}

/// Read one row of a stored matrix.
///
/// Validates `row` against the declared row count, seeks to the row's
/// first value, then alternates one-value reads with relative skips over
/// the rest of each column. This performs `cols` discrete reads and is
/// intrinsically more expensive than a column read.
pub fn load_row<P: AsRef<Path>>(path: P, row: usize) -> Result<Vec<f64>> {
    let mut file = File::open(path)?;
    let header = read_header(&mut file)?;

    let rows = header.rows as usize;
    if row >= rows {
        return Err(DmatError::RowOutOfRange { row, rows }.into());
    }

    file.seek(SeekFrom::Start(header.value_offset(row, 0)))?;
    let cols = header.cols as usize;
    let skip = (header.row_stride() - VALUE_SIZE as u64) as i64;
    let mut values = Vec::with_capacity(cols);
    for col in 0..cols {
        values.push(read_f64(&mut file)?);
        if col + 1 < cols {
            file.seek(SeekFrom::Current(skip))?;
        }
    }
    Ok(values)
}

/// Read the main diagonal of a stored matrix.
///
/// Walks the flat linear index: after the value at index 0, consecutive
/// diagonal values are `rows + 1` positions apart. The running position
/// starts at 1 (the (1, 0) element, skipped to land on the (1, 1) stride
/// boundary) and the walk stops once it reaches `rows * cols - 2`. That
/// stopping rule is part of the format's compatibility surface and must
/// stay exactly as written, consequences included: the returned length
/// can differ from
/// `min(rows, cols)` for non-square shapes, and a stride that lands past
/// the data region fails with `ShortRead`.
pub fn load_diagonal<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let mut file = File::open(path)?;
    let header = read_header(&mut file)?;

    let rows = header.rows as u64;
    let count = header.element_count()?;
    let mut values = Vec::new();
    if count == 0 {
        return Ok(values);
    }

    values.push(read_f64(&mut file)?);
    let mut pos: u64 = 1;
    // pos < count - 2, written without underflow for tiny matrices
    while pos + 2 < count {
        file.seek(SeekFrom::Current((VALUE_SIZE as u64 * rows) as i64))?;
        values.push(read_f64(&mut file)?);
        pos += rows + 1;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::tests::temp_path;
    use crate::io::{load, save};
    use crate::Matrix;
    use dmat_core::MatrixSlices;
    use std::path::PathBuf;

    fn saved_matrix(name: &str, rows: usize, cols: usize) -> (Matrix, PathBuf) {
        let mut m = Matrix::zeros(rows, cols);
        for col in 0..cols {
            for row in 0..rows {
                m.set(row, col, (1 + row * cols + col) as f64);
            }
        }
        let path = temp_path(name);
        save(&m, &path).unwrap();
        (m, path)
    }

    #[test]
    fn test_column_matches_full_load() {
        let (m, path) = saved_matrix("col_agree", 7, 5);
        let full = load(&path).unwrap();
        for col in 0..5 {
            assert_eq!(load_column(&path, col).unwrap(), full.column(col));
            assert_eq!(load_column(&path, col).unwrap(), m.column(col));
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_row_matches_full_load() {
        let (m, path) = saved_matrix("row_agree", 6, 9);
        let full = load(&path).unwrap();
        for row in 0..6 {
            assert_eq!(load_row(&path, row).unwrap(), full.row(row));
            assert_eq!(load_row(&path, row).unwrap(), m.row(row));
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_scenario_column_of_4x3() {
        let m = Matrix::from_column_major(
            4,
            3,
            vec![1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0],
        )
        .unwrap();
        let path = temp_path("scenario_4x3");
        save(&m, &path).unwrap();

        assert_eq!(load_column(&path, 1).unwrap(), vec![2.0, 2.0, 2.0, 2.0]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_column_out_of_range() {
        let (_, path) = saved_matrix("col_oob", 3, 4);
        let err = load_column(&path, 4).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            err.format_kind(),
            Some(DmatError::ColumnOutOfRange { col: 4, cols: 4 })
        );
    }

    #[test]
    fn test_row_out_of_range() {
        let (_, path) = saved_matrix("row_oob", 3, 4);
        let err = load_row(&path, 3).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            err.format_kind(),
            Some(DmatError::RowOutOfRange { row: 3, rows: 3 })
        );
    }

    #[test]
    fn test_diagonal_of_5x5() {
        // rows filled 1..=25 row-major: diagonal is 1, 7, 13, 19, 25
        let m = Matrix::from_rows(&[
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            &[6.0, 7.0, 8.0, 9.0, 10.0],
            &[11.0, 12.0, 13.0, 14.0, 15.0],
            &[16.0, 17.0, 18.0, 19.0, 20.0],
            &[21.0, 22.0, 23.0, 24.0, 25.0],
        ]);
        let path = temp_path("diag_5x5");
        save(&m, &path).unwrap();

        let diagonal = load_diagonal(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(diagonal, vec![1.0, 7.0, 13.0, 19.0, 25.0]);
    }

    #[test]
    fn test_diagonal_element_counts() {
        // The stopping rule is pinned here on purpose; see load_diagonal.
        for (rows, cols, expected) in [
            (1usize, 1usize, 1usize),
            (2, 2, 2),
            (3, 3, 3),
            (4, 4, 4),
            (2, 3, 2),
            (4, 2, 2),
            (3, 2, 2),
        ] {
            let (_, path) = saved_matrix(&format!("diag_{rows}x{cols}"), rows, cols);
            let diagonal = load_diagonal(&path).unwrap();
            std::fs::remove_file(&path).unwrap();
            assert_eq!(diagonal.len(), expected, "shape {rows}x{cols}");
        }
    }

    #[test]
    fn test_diagonal_of_empty_matrix() {
        let (_, path) = saved_matrix("diag_empty", 0, 0);
        assert_eq!(load_diagonal(&path).unwrap(), Vec::<f64>::new());
        std::fs::remove_file(&path).unwrap();

        let (_, path) = saved_matrix("diag_zero_rows", 0, 6);
        assert_eq!(load_diagonal(&path).unwrap(), Vec::<f64>::new());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_diagonal_stride_past_data_fails_short_read() {
        // 3x4: the walk attempts linear index 12 of 12, one past the region
        let (_, path) = saved_matrix("diag_3x4", 3, 4);
        let err = load_diagonal(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            err.format_kind(),
            Some(DmatError::ShortRead {
                expected: 8,
                actual: 0
            })
        );
    }

    #[test]
    fn test_selective_reads_on_truncated_file() {
        let (_, path) = saved_matrix("trunc_select", 4, 4);
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..8 + 8 * 9]).unwrap();

        // column 3 starts past the surviving bytes
        assert!(load_column(&path, 3).unwrap_err().format_kind().is_some());
        // row 3 needs the last column's value
        assert!(load_row(&path, 3).unwrap_err().format_kind().is_some());
        // diagonal needs index 15
        assert!(load_diagonal(&path).unwrap_err().format_kind().is_some());
        std::fs::remove_file(&path).unwrap();
    }
}

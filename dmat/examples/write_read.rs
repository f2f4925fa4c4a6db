//! Walk-through: save a matrix, load it back fully, selectively, and mapped

use dmat::{io, select, Matrix, MmapMatrix};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = "example_matrix.dmat";

    let rows = 2_000;
    let cols = 500;
    println!("Building a {rows}x{cols} matrix...");
    let mut m = Matrix::zeros(rows, cols);
    for col in 0..cols {
        for row in 0..rows {
            m.set(row, col, (row * cols + col) as f64 * 0.25);
        }
    }

    let start = Instant::now();
    io::save(&m, filename)?;
    println!("Saved in {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);
    let file_size = std::fs::metadata(filename)?.len();
    println!("File size: {:.1} MB", file_size as f64 / (1024.0 * 1024.0));

    let start = Instant::now();
    let full = io::load(filename)?;
    println!("Full load: {:.3}ms", start.elapsed().as_secs_f64() * 1000.0);

    let start = Instant::now();
    let column = select::load_column(filename, cols / 2)?;
    println!(
        "Column {} read ({} values): {:.3}ms",
        cols / 2,
        column.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let start = Instant::now();
    let row = select::load_row(filename, rows / 2)?;
    println!(
        "Row {} read ({} values, one seek per column): {:.3}ms",
        rows / 2,
        row.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let start = Instant::now();
    let mapped = MmapMatrix::open(filename)?;
    println!(
        "Memory map: {:.3}ms (zero-copy: {})",
        start.elapsed().as_secs_f64() * 1000.0,
        mapped.is_zero_copy()
    );

    // the three access paths agree
    assert_eq!(full.get(rows / 2, cols / 2), column[rows / 2]);
    assert_eq!(full.get(rows / 2, cols / 2), row[cols / 2]);
    assert_eq!(mapped.get(rows / 2, cols / 2), Some(column[rows / 2]));
    println!("All access paths agree");

    drop(mapped);
    std::fs::remove_file(filename)?;
    Ok(())
}

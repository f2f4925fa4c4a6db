//! DMAT CLI - inspect and slice dense matrix files
//!
//! Build with `--features cli`.

use clap::{Parser, Subcommand};
use dmat::{io, select, MmapMatrix, RangeSelector};

#[derive(Parser)]
#[command(author, version, about = "Inspect and slice .dmat dense matrix files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show matrix shape and file info
    Info {
        /// Path to a .dmat file
        file: String,
    },
    /// Print one column (contiguous read)
    Column {
        file: String,
        /// Zero-based column index
        index: usize,
    },
    /// Print one row (strided read, one seek per column)
    Row {
        file: String,
        /// Zero-based row index
        index: usize,
    },
    /// Print the main diagonal
    Diagonal { file: String },
    /// Print a sub-range, e.g. --range "[1:3, :]"
    Slice {
        file: String,
        /// Range selector in [startRow:endRow, startCol:endCol] form,
        /// bounds inclusive, empty side = unbounded
        #[arg(long)]
        range: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Info { file } => {
            let mapped = MmapMatrix::open(file)?;
            let header = mapped.header();
            println!("File: {file}");
            println!("  Dimensions: {} x {}", header.rows, header.cols);
            println!("  Data region: {} bytes", header.data_size()?);
            println!("  Zero-copy mapping: {}", mapped.is_zero_copy());
        }
        Commands::Column { file, index } => {
            print_values(&select::load_column(file, *index)?);
        }
        Commands::Row { file, index } => {
            print_values(&select::load_row(file, *index)?);
        }
        Commands::Diagonal { file } => {
            print_values(&select::load_diagonal(file)?);
        }
        Commands::Slice { file, range } => {
            let selector = RangeSelector::parse(range)?;
            let matrix = io::load(file)?;
            let rows = selector.resolve_rows(matrix.rows());
            let cols = selector.resolve_cols(matrix.cols());
            println!("{selector} of {} x {}:", matrix.rows(), matrix.cols());
            for row in rows {
                let line: Vec<String> = cols
                    .clone()
                    .map(|col| format!("{}", matrix.get(row, col)))
                    .collect();
                println!("  {}", line.join(" "));
            }
        }
    }
    Ok(())
}

fn print_values(values: &[f64]) {
    let line: Vec<String> = values.iter().map(|v| format!("{v}")).collect();
    println!("{}", line.join(" "));
}

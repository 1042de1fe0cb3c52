// Engine module - pure computation over caller-supplied inputs
// (schedule generation, column aggregation, ranking, CSV export).
// Nothing here reads the clock or logs.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod numeric;
pub mod schedule;
pub mod table;

pub use aggregate::{AggregatedRow, AggregatedTable, aggregate, raw_rows, select_vector};
pub use error::{Error, Result};
pub use numeric::{TOLERANCE, approx_eq, normalize, ranked, top_n};
pub use schedule::generate;
pub use table::{CategoryTable, Column, ColumnData, read_table};

use std::path::Path;

// Façade API - Stable public interface for the CLI layer

/// Load a table from a CSV file on disk.
pub fn load_table(path: &Path, key_column: &str, separator: char) -> Result<CategoryTable> {
    let file = std::fs::File::open(path)?;
    Ok(read_table(file, key_column)?.with_separator(separator))
}

/// Select one row and optionally rescale it to sum to 1.0.
pub fn distribution_for(
    table: &CategoryTable,
    row_key: &str,
    granularity: studykit_types::Granularity,
    normalized: bool,
) -> Result<studykit_types::CategoryVector> {
    let vector = select_vector(table, row_key, granularity)?;
    Ok(if normalized {
        normalize(&vector)
    } else {
        vector
    })
}

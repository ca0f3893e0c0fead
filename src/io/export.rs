//! CSV export for flow, ENA and grouped ENA tables.

use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{self, Write};
use std::path::Path;

use crate::table::Frame;

/// Header of the date column.
const DATE_HEADER: &str = "data";

/// Exports a table to a CSV file at the given path.
///
/// Writes a `data` header followed by one header per column key, then one
/// row per date. Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv<K>(frame: &Frame<K>, path: &Path) -> io::Result<()>
where
    K: Clone + Eq + Hash + Display,
{
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(frame, buf)
}

/// Writes a table as CSV to any writer. Values are formatted with four
/// decimals and dates as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv<K>(frame: &Frame<K>, writer: impl Write) -> io::Result<()>
where
    K: Clone + Eq + Hash + Display,
{
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    let header =
        std::iter::once(DATE_HEADER.to_string()).chain(frame.keys().iter().map(ToString::to_string));
    wtr.write_record(header)?;

    let columns: Vec<&[f64]> = frame.columns().map(|(_, values)| values).collect();
    for (row, date) in frame.dates().iter().enumerate() {
        let record = std::iter::once(date.format("%Y-%m-%d").to_string())
            .chain(columns.iter().map(|column| format!("{:.4}", column[row])));
        wtr.write_record(record)?;
    }

    wtr.flush()?;
    Ok(())
}

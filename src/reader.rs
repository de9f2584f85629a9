//! Row acquisition from CSV input.
//!
//! The reader is the only fallible surface of the crate: it either hands
//! the aggregation pipeline a well-typed record sequence or reports why
//! it cannot. The aggregators are never invoked with partial input.
//!
//! Input is header-driven: recognized columns are matched by name,
//! anything else is ignored, and empty cells deserialize to `None`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::record::VehicleRecord;

/// Read all vehicle records from a CSV source with a header row.
///
/// Cell whitespace is trimmed before typing, so a cell of spaces counts
/// as absent.
///
/// # Errors
///
/// Returns [`Error::Csv`](crate::Error::Csv) on malformed input, such as
/// a non-numeric `Model Year` cell.
pub fn read_records<R: Read>(source: R) -> Result<Vec<VehicleRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Read all vehicle records from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened
/// and [`Error::Csv`](crate::Error::Csv) on malformed content.
pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleRecord>> {
    let file = File::open(path)?;
    read_records(file)
}

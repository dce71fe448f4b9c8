//! CSV inventory loader.
//!
//! # CSV format
//!
//! Two header lines precede the data.  The first names the columns and is
//! ignored.  The second labels the yearly score columns; its field in
//! column 13 is the most recent year (`start_year`).
//!
//! ```csv
//! ID,STRUCTURE,HWY,LAT,LONG,YEAR BUILT,LAST MAJOR REHAB,LAST MINOR REHAB,NO. OF SPAN,SPAN DETAILS,DECK LENGTH,LAST INSPECTION DATE,CURRENT BCI,HISTORICAL BCI,,
//! ,,,,,,,,,,,,,2013,2012,2011
//! 1 -  32/,Highway 24 Underpass at Highway 403,403,43.167233,-80.275567,1965,2014,2009,4,Total=64  (1)=12;(2)=19;(3)=21;(4)=12;,65,04/13/2012,72.3,,72.3,
//! ```
//!
//! Rows may have different lengths; the score tail is as long as the row
//! makes it.  Every data row goes through [`clean_data`](crate::clean_data).

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use bridge_core::Bridge;

use crate::record::COLUMN_FIRST_SCORE;
use crate::{CleanError, CleanResult, clean_data};

/// Number of header lines before the first data row.
const HEADER_LINES: usize = 2;

/// Load and clean every bridge in the CSV file at `path`.
pub fn load_bridges_csv(path: &Path) -> CleanResult<Vec<Bridge>> {
    let file = std::fs::File::open(path).map_err(CleanError::Io)?;
    load_bridges_reader(file)
}

/// Like [`load_bridges_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for data that does not
/// live on disk.
pub fn load_bridges_reader<R: Read>(reader: R) -> CleanResult<Vec<Bridge>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let records: Vec<StringRecord> = csv_reader.records().collect::<Result<_, _>>()?;

    let start_year = records
        .get(HEADER_LINES - 1)
        .and_then(|years| years.get(COLUMN_FIRST_SCORE))
        .and_then(|year| year.trim().parse::<i32>().ok())
        .ok_or(CleanError::MissingStartYear { column: COLUMN_FIRST_SCORE })?;

    let rows: Vec<Vec<&str>> = records
        .iter()
        .skip(HEADER_LINES)
        .map(|r| r.iter().collect())
        .collect();

    let bridges = clean_data(&rows, start_year)?;
    info!(bridges = bridges.len(), start_year, "loaded bridge inventory");
    Ok(bridges)
}

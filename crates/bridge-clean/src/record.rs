//! Raw row → [`Bridge`] conversion.
//!
//! # Row layout
//!
//! | Column | Field                  | Cleaned as                         |
//! |--------|------------------------|------------------------------------|
//! | 0      | id text                | replaced by the sequential id      |
//! | 1      | name                   | text                               |
//! | 2      | highway                | text                               |
//! | 3, 4   | latitude, longitude    | `f64`                              |
//! | 5      | year built             | `Option<i32>`                      |
//! | 6, 7   | last major/minor rehab | `Option<i32>`                      |
//! | 8      | span count             | `u32`                              |
//! | 9      | span details           | [`clean_span_data`]                |
//! | 10     | deck length            | [`clean_length_data`]              |
//! | 11     | last inspected         | text, `MM/DD/YYYY`                 |
//! | 12     | current BCI summary    | dropped (superseded by history)    |
//! | 13..   | yearly scores          | [`clean_bci_data`]                 |
//!
//! The flat score columns end up folded into [`Bridge::history`]; nothing
//! past the history survives cleaning.  A row whose columns are shifted
//! parses into nonsense or fails, so the layout must match exactly.

use tracing::warn;

use bridge_core::{Bridge, BridgeId, GeoPoint};

use crate::{CleanError, CleanResult, clean_bci_data, clean_span_data};

pub const COLUMN_ID: usize = 0;
pub const COLUMN_NAME: usize = 1;
pub const COLUMN_HIGHWAY: usize = 2;
pub const COLUMN_LAT: usize = 3;
pub const COLUMN_LON: usize = 4;
pub const COLUMN_YEAR_BUILT: usize = 5;
pub const COLUMN_LAST_MAJOR_REHAB: usize = 6;
pub const COLUMN_LAST_MINOR_REHAB: usize = 7;
pub const COLUMN_NUM_SPANS: usize = 8;
pub const COLUMN_SPAN_DETAILS: usize = 9;
pub const COLUMN_DECK_LENGTH: usize = 10;
pub const COLUMN_LAST_INSPECTED: usize = 11;
pub const COLUMN_BCI: usize = 12;
/// First yearly score column; belongs to the dataset's start year.
pub const COLUMN_FIRST_SCORE: usize = COLUMN_BCI + 1;

/// Deck length from its raw text; blank means unknown and maps to `0.0`.
///
/// ```
/// use bridge_clean::clean_length_data;
///
/// assert_eq!(clean_length_data("12").unwrap(), 12.0);
/// assert_eq!(clean_length_data("").unwrap(), 0.0);
/// ```
pub fn clean_length_data(raw: &str) -> CleanResult<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(0.0);
    }
    parse_finite(s, "deck length")
}

/// Clean one raw row into a bridge with identifier `id`.
///
/// `start_year` is the year of the first score column.
pub fn clean_record<S: AsRef<str>>(row: &[S], id: BridgeId, start_year: i32) -> CleanResult<Bridge> {
    if row.len() < COLUMN_FIRST_SCORE {
        return Err(CleanError::ShortRow {
            row:      id.0 as usize,
            found:    row.len(),
            expected: COLUMN_FIRST_SCORE,
        });
    }
    let col = move |i: usize| row[i].as_ref();

    let span_count: u32 = parse_num(col(COLUMN_NUM_SPANS), "span count")?;
    let span_lengths = clean_span_data(col(COLUMN_SPAN_DETAILS))?;
    if span_lengths.len() != span_count as usize {
        warn!(
            bridge = %id,
            declared = span_count,
            parsed = span_lengths.len(),
            "span count disagrees with span details"
        );
    }

    Ok(Bridge {
        id,
        name:             col(COLUMN_NAME).to_owned(),
        highway:          col(COLUMN_HIGHWAY).to_owned(),
        location:         GeoPoint::new(
            parse_finite(col(COLUMN_LAT), "latitude")?,
            parse_finite(col(COLUMN_LON), "longitude")?,
        ),
        year_built:       parse_year(col(COLUMN_YEAR_BUILT), "year built")?,
        last_major_rehab: parse_year(col(COLUMN_LAST_MAJOR_REHAB), "last major rehab")?,
        last_minor_rehab: parse_year(col(COLUMN_LAST_MINOR_REHAB), "last minor rehab")?,
        span_count,
        span_lengths,
        deck_length:      clean_length_data(col(COLUMN_DECK_LENGTH))?,
        last_inspected:   col(COLUMN_LAST_INSPECTED).to_owned(),
        history:          clean_bci_data(start_year, &row[COLUMN_FIRST_SCORE..])?,
    })
}

/// Clean every row, assigning ids `1, 2, 3, …` in row order.
///
/// Errors are tagged with the 1-based row number.
pub fn clean_data<S: AsRef<str>>(rows: &[Vec<S>], start_year: i32) -> CleanResult<Vec<Bridge>> {
    let mut bridges = Vec::with_capacity(rows.len());
    let mut next_id = BridgeId::FIRST;

    for (i, row) in rows.iter().enumerate() {
        let bridge = clean_record(row, next_id, start_year).map_err(|e| match e {
            CleanError::ShortRow { found, expected, .. } => CleanError::ShortRow {
                row: i + 1,
                found,
                expected,
            },
            other => CleanError::MalformedRecord {
                row:    i + 1,
                source: Box::new(other),
            },
        })?;
        bridges.push(bridge);
        next_id = next_id.next();
    }

    Ok(bridges)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_num<T>(raw: &str, field: &'static str) -> CleanResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| CleanError::field(field, raw, e.to_string()))
}

/// A finite `f64`; `NaN` and the infinities are malformed.
pub(crate) fn parse_finite(raw: &str, field: &'static str) -> CleanResult<f64> {
    let value: f64 = parse_num(raw, field)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CleanError::field(field, raw, "not a finite number"))
    }
}

/// Blank → `None`, otherwise an integer year.
fn parse_year(raw: &str, field: &'static str) -> CleanResult<Option<i32>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_num(raw, field).map(Some)
    }
}

//! Span-geometry micro-parser.
//!
//! # Format
//!
//! ```text
//! Total=64  (1)=12;(2)=19;(3)=21;(4)=12;
//! ```
//!
//! `Total=<n>` is informational and ignored.  Every later `=` introduces one
//! span length, read as the run of digits and `.` that follows it.  Lengths
//! are emitted in textual order, which is the physical order of the spans.
//!
//! The scanner has two states:
//!
//! | State     | On `=`                          | On length char | Otherwise          |
//! |-----------|---------------------------------|----------------|--------------------|
//! | `Seeking` | start `Reading` unless in prefix | stay           | stay               |
//! | `Reading` | emit, re-examine as `Seeking`   | extend run     | emit, `Seeking`    |
//!
//! An `=` inside the first [`TOTAL_PREFIX`]`.len()` bytes is the prefix's own
//! delimiter and never opens a span.

use crate::{CleanError, CleanResult};

/// Leading assignment that carries the informational total.
pub const TOTAL_PREFIX: &str = "Total=";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ScanState {
    /// Looking for the `=` that opens the next span length.
    Seeking,
    /// Inside a length whose first byte is at `start`.
    Reading { start: usize },
}

/// Parse span lengths out of `raw`, in order of appearance.
///
/// ```
/// use bridge_clean::clean_span_data;
///
/// let spans = clean_span_data("Total=64  (1)=12;(2)=19;(3)=21;(4)=12;").unwrap();
/// assert_eq!(spans, [12.0, 19.0, 21.0, 12.0]);
/// ```
///
/// # Errors
///
/// [`CleanError::MalformedField`] if an `=` is not followed by a length, or
/// a length does not parse as a number.
pub fn clean_span_data(raw: &str) -> CleanResult<Vec<f64>> {
    let mut spans = Vec::new();
    let mut state = ScanState::Seeking;

    for (pos, ch) in raw.char_indices() {
        state = match state {
            ScanState::Reading { start } if is_length_char(ch) => ScanState::Reading { start },
            ScanState::Reading { start } => {
                spans.push(parse_length(raw, &raw[start..pos])?);
                seek(pos, ch)
            }
            ScanState::Seeking => seek(pos, ch),
        };
    }

    if let ScanState::Reading { start } = state {
        spans.push(parse_length(raw, &raw[start..])?);
    }
    Ok(spans)
}

/// Transition out of `Seeking` for the byte `ch` at `pos`.
#[inline]
fn seek(pos: usize, ch: char) -> ScanState {
    if ch == '=' && pos >= TOTAL_PREFIX.len() {
        ScanState::Reading { start: pos + 1 }
    } else {
        ScanState::Seeking
    }
}

#[inline]
fn is_length_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

fn parse_length(raw: &str, text: &str) -> CleanResult<f64> {
    if text.is_empty() {
        return Err(CleanError::field("span details", raw, "'=' not followed by a span length"));
    }
    text.parse::<f64>()
        .map_err(|e| CleanError::field("span details", raw, format!("span length {text:?}: {e}")))
}

//! Score-tail cleaning.
//!
//! The trailing fields of a raw row hold one BCI score per year, most recent
//! first, starting at the dataset's `start_year`.  Blank fields become
//! [`MISSING_BCI`]; the year list is synthesized, never read from the row.

use bridge_core::{ConditionHistory, MISSING_BCI};

use crate::record::parse_finite;
use crate::{CleanError, CleanResult};

/// Build a history from raw score fields, the first belonging to
/// `start_year` and each later one to the year before.
///
/// ```
/// use bridge_clean::clean_bci_data;
///
/// let h = clean_bci_data(2013, &["", "72.3", ""]).unwrap();
/// assert_eq!(h.year_labels(), ["2013", "2012", "2011"]);
/// assert_eq!(h.scores(), [-1.0, 72.3, -1.0]);
/// ```
///
/// # Errors
///
/// [`CleanError::MalformedField`] if a non-blank score is not a finite number, or
/// if the history would run back past year 0.
pub fn clean_bci_data<S: AsRef<str>>(start_year: i32, raw_scores: &[S]) -> CleanResult<ConditionHistory> {
    if (start_year as i64) < raw_scores.len() as i64 {
        return Err(CleanError::field(
            "start year",
            &start_year.to_string(),
            format!("too early for {} yearly scores", raw_scores.len()),
        ));
    }

    let scores = raw_scores
        .iter()
        .map(|s| {
            let s = s.as_ref().trim();
            if s.is_empty() {
                Ok(MISSING_BCI)
            } else {
                parse_finite(s, "BCI score")
            }
        })
        .collect::<CleanResult<Vec<f64>>>()?;

    Ok(ConditionHistory::from_start_year(start_year, scores))
}

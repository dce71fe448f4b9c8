//! Year-indexed Bridge Condition Index (BCI) history.
//!
//! # Layout
//!
//! A history is a pair of equal-length sequences, most recent first:
//!
//! ```text
//! years:  [2013, 2012, 2011, 2010, ...]
//! scores: [-1.0, 72.3, -1.0, 69.5, ...]
//! ```
//!
//! A score equal to [`MISSING_BCI`] (compared exactly, no epsilon) means the
//! bridge was not measured that year.  Histories built by the cleaner step
//! down by exactly one year per entry; later inspections may prepend a newer
//! year and leave a gap, but never resequence the tail.
//!
//! Scores are kept in their sentinel form so the paired shape survives
//! serialization unchanged.  Accessors translate the sentinel to `Option`.

use crate::{BridgeError, BridgeResult};

/// Sentinel score for "not measured that year".
pub const MISSING_BCI: f64 = -1.0;

/// `true` if `score` is the missing-score sentinel.
#[inline]
pub fn is_missing(score: f64) -> bool {
    score == MISSING_BCI
}

/// Paired `years` / `scores` sequences, most recent year first.
///
/// Deserialization goes through [`ConditionHistory::new`], so a serialized
/// history with unequal lengths or unordered years is rejected.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawHistory")
)]
pub struct ConditionHistory {
    years:  Vec<i32>,
    scores: Vec<f64>,
}

/// Unchecked wire form of [`ConditionHistory`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHistory {
    years:  Vec<i32>,
    scores: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHistory> for ConditionHistory {
    type Error = BridgeError;

    fn try_from(raw: RawHistory) -> BridgeResult<Self> {
        Self::new(raw.years, raw.scores)
    }
}

impl ConditionHistory {
    /// Build a history from explicit year and score lists.
    ///
    /// Fails if the lists differ in length or if `years` is not strictly
    /// descending.
    pub fn new(years: Vec<i32>, scores: Vec<f64>) -> BridgeResult<Self> {
        if years.len() != scores.len() {
            return Err(BridgeError::HistoryLengthMismatch {
                years:  years.len(),
                scores: scores.len(),
            });
        }
        if let Some(w) = years.windows(2).find(|w| w[0] <= w[1]) {
            return Err(BridgeError::InvalidArgument(format!(
                "history years must be strictly descending, found {} before {}",
                w[0], w[1]
            )));
        }
        Ok(Self { years, scores })
    }

    /// Build a history whose years are synthesized from `start_year`,
    /// decreasing by one per score.
    ///
    /// ```
    /// use bridge_core::{ConditionHistory, MISSING_BCI};
    ///
    /// let h = ConditionHistory::from_start_year(2013, vec![MISSING_BCI, 72.3]);
    /// assert_eq!(h.years(), &[2013, 2012]);
    /// assert_eq!(h.most_recent(), Some(72.3));
    /// ```
    pub fn from_start_year(start_year: i32, scores: Vec<f64>) -> Self {
        let years = scores.iter().zip(0..).map(|(_, i)| start_year - i).collect();
        Self { years, scores }
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Years, most recent first.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Raw scores including [`MISSING_BCI`] sentinels, most recent first.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Years rendered as strings (`"2013"`, `"2012"`, ...).
    pub fn year_labels(&self) -> Vec<String> {
        self.years.iter().map(i32::to_string).collect()
    }

    /// `(year, score)` pairs in stored order; missing scores are `None`.
    pub fn entries(&self) -> impl Iterator<Item = (i32, Option<f64>)> + '_ {
        self.years
            .iter()
            .zip(&self.scores)
            .map(|(&y, &s)| (y, (!is_missing(s)).then_some(s)))
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// The first recorded score scanning from the most recent year, or
    /// `None` if every year is missing.
    pub fn most_recent(&self) -> Option<f64> {
        self.scores.iter().copied().find(|&s| !is_missing(s))
    }

    /// The most recent year in the history, recorded or not.
    pub fn latest_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    /// The score recorded for `year`, if any.
    pub fn score_for(&self, year: i32) -> Option<f64> {
        self.entries()
            .find(|&(y, _)| y == year)
            .and_then(|(_, s)| s)
    }

    /// Mean of the recorded scores whose year lies in `start..=stop`.
    ///
    /// Both bounds are inclusive.  Returns `None` when no recorded score
    /// falls in the window, which keeps "no data" distinct from a genuine
    /// average of zero.
    pub fn average_between(&self, start: i32, stop: i32) -> Option<f64> {
        let (total, count) = self
            .entries()
            .filter(|&(y, _)| start <= y && y <= stop)
            .filter_map(|(_, s)| s)
            .fold((0.0, 0u32), |(t, c), s| (t + s, c + 1));

        (count > 0).then(|| total / count as f64)
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Record `score` for `year`.
    ///
    /// A year newer than [`latest_year`](Self::latest_year) is prepended as a
    /// single entry; intermediate years are not filled in.  The latest year
    /// itself may be written only while its score is still missing.  Any
    /// other year is rejected.
    pub fn record(&mut self, year: i32, score: f64) -> BridgeResult<()> {
        match self.latest_year() {
            None => {
                self.years.push(year);
                self.scores.push(score);
            }
            Some(latest) if year > latest => {
                self.years.insert(0, year);
                self.scores.insert(0, score);
            }
            Some(latest) if year == latest && self.scores.first().is_some_and(|&s| is_missing(s)) => {
                self.scores[0] = score;
            }
            Some(latest) => {
                return Err(BridgeError::InvalidArgument(format!(
                    "cannot record a score for {year}: history already runs to {latest}"
                )));
            }
        }
        Ok(())
    }
}

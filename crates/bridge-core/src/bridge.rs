//! The `Bridge` record.

use std::fmt;

use crate::{BridgeId, ConditionHistory, GeoPoint};

/// One bridge in the inventory.
///
/// Fields mirror the fixed columns of the source dataset; the trailing
/// per-year score columns are folded into [`history`](Self::history).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bridge {
    /// Sequential identifier assigned at cleaning time, starting at 1.
    pub id: BridgeId,
    pub name: String,
    /// Highway designation, e.g. `"403"`.
    pub highway: String,
    pub location: GeoPoint,
    pub year_built: Option<i32>,
    pub last_major_rehab: Option<i32>,
    pub last_minor_rehab: Option<i32>,
    /// Span count as declared by the source row.
    pub span_count: u32,
    /// Span lengths in physical order along the structure.
    pub span_lengths: Vec<f64>,
    /// Deck length; `0.0` when the source left it blank.
    pub deck_length: f64,
    /// Date of the last inspection, `MM/DD/YYYY`.
    pub last_inspected: String,
    pub history: ConditionHistory,
}

impl Bridge {
    /// Most recent recorded BCI score, or `None` if none was ever recorded.
    #[inline]
    pub fn condition(&self) -> Option<f64> {
        self.history.most_recent()
    }

    /// Rounded great-circle distance from this bridge to `point`.
    #[inline]
    pub fn distance_km(&self, point: GeoPoint) -> f64 {
        self.location.distance_km(point)
    }
}

// ── RehabKind ─────────────────────────────────────────────────────────────────

/// Which rehabilitation date a rehabilitation updates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RehabKind {
    Major,
    Minor,
}

impl fmt::Display for RehabKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RehabKind::Major => "major",
            RehabKind::Minor => "minor",
        };
        f.write_str(s)
    }
}

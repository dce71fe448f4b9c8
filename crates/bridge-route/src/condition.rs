//! Condition lookups over a bridge collection.

use std::cmp::Ordering;

use bridge_core::{Bridge, BridgeId, MISSING_BCI, find_bridge_by_id};

use crate::{RouteError, RouteResult};

/// Most recent recorded BCI score of bridge `id`.
///
/// Returns [`MISSING_BCI`] if the bridge is absent or has never been scored.
pub fn get_bridge_condition(bridges: &[Bridge], id: BridgeId) -> f64 {
    find_bridge_by_id(bridges, id)
        .and_then(Bridge::condition)
        .unwrap_or(MISSING_BCI)
}

/// The candidate with the lowest most recent BCI score.  Ties go to the
/// smaller id.
///
/// Only each bridge's first recorded score, scanning from the most recent
/// year, takes part in the comparison.
///
/// # Errors
///
/// - [`RouteError::EmptyCandidates`] if `candidates` is empty.
/// - [`RouteError::UnknownBridge`] if a candidate is not in `bridges`.
/// - [`RouteError::NoCondition`] if a candidate has no recorded score.
pub fn find_worst_bci(bridges: &[Bridge], candidates: &[BridgeId]) -> RouteResult<BridgeId> {
    let mut worst: Option<(f64, BridgeId)> = None;

    for &id in candidates {
        let bridge = find_bridge_by_id(bridges, id).ok_or(RouteError::UnknownBridge(id))?;
        let score = bridge.condition().ok_or(RouteError::NoCondition(id))?;

        let replace = match worst {
            None => true,
            Some((w_score, w_id)) => cmp_score(score, w_score).then(id.cmp(&w_id)).is_lt(),
        };
        if replace {
            worst = Some((score, id));
        }
    }

    worst.map(|(_, id)| id).ok_or(RouteError::EmptyCandidates)
}

/// Numeric score order: `0.0` and `-0.0` compare equal so the id decides.
fn cmp_score(a: f64, b: f64) -> Ordering {
    if a == b { Ordering::Equal } else { a.total_cmp(&b) }
}

/// Average recorded score of `bridge` over the years `start..=stop`.
///
/// Both bounds are inclusive.  Returns `0.0` when no recorded score falls in
/// the window; callers that must tell "no data" apart from a true zero
/// average should use
/// [`ConditionHistory::average_between`](bridge_core::ConditionHistory::average_between).
pub fn calculate_average_condition(bridge: &Bridge, start: i32, stop: i32) -> RouteResult<f64> {
    if start > stop {
        return Err(RouteError::InvalidWindow { start, stop });
    }
    Ok(bridge.history.average_between(start, stop).unwrap_or(0.0))
}

//! Lookups and field updates over a caller-owned bridge collection.
//!
//! The collection is a plain slice.  Mutating functions take `&mut [Bridge]`
//! and validate every argument before touching any field, so a failed call
//! leaves the collection unchanged.  Callers sharing a collection across
//! threads must serialize access themselves.

use crate::{Bridge, BridgeError, BridgeId, BridgeResult, RehabKind};

/// The bridge with `id`, or `None` if the collection has no such bridge.
pub fn find_bridge_by_id(bridges: &[Bridge], id: BridgeId) -> Option<&Bridge> {
    bridges.iter().find(|b| b.id == id)
}

/// Mutable twin of [`find_bridge_by_id`].
pub fn find_bridge_by_id_mut(bridges: &mut [Bridge], id: BridgeId) -> Option<&mut Bridge> {
    bridges.iter_mut().find(|b| b.id == id)
}

/// Record an inspection of bridge `id` on `inspect_date` (`MM/DD/YYYY`)
/// with score `bci`.
///
/// Sets `last_inspected` and records `bci` for the date's year via
/// [`ConditionHistory::record`](crate::ConditionHistory::record): only the
/// one year is added, skipped years are not back-filled.
pub fn inspect_bridge(
    bridges: &mut [Bridge],
    id: BridgeId,
    inspect_date: &str,
    bci: f64,
) -> BridgeResult<()> {
    let year = inspection_year(inspect_date)?;
    if !(0.0..=100.0).contains(&bci) {
        return Err(BridgeError::InvalidArgument(format!(
            "BCI score {bci} is outside 0..=100"
        )));
    }

    let bridge = find_bridge_by_id_mut(bridges, id).ok_or(BridgeError::BridgeNotFound(id))?;
    bridge.history.record(year, bci)?;
    bridge.last_inspected = inspect_date.to_owned();
    Ok(())
}

/// Set the last major or minor rehabilitation year of every bridge in `ids`.
///
/// Fails with [`BridgeError::BridgeNotFound`] on the first unknown id, before
/// any bridge is updated.
pub fn rehabilitate_bridge(
    bridges: &mut [Bridge],
    ids: &[BridgeId],
    year: i32,
    kind: RehabKind,
) -> BridgeResult<()> {
    if let Some(&missing) = ids.iter().find(|&&id| find_bridge_by_id(bridges, id).is_none()) {
        return Err(BridgeError::BridgeNotFound(missing));
    }

    for bridge in bridges.iter_mut().filter(|b| ids.contains(&b.id)) {
        match kind {
            RehabKind::Major => bridge.last_major_rehab = Some(year),
            RehabKind::Minor => bridge.last_minor_rehab = Some(year),
        }
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Extract the year from an `MM/DD/YYYY` date.
fn inspection_year(date: &str) -> BridgeResult<i32> {
    let invalid = || BridgeError::InvalidArgument(format!("inspection date {date:?} is not MM/DD/YYYY"));

    let mut parts = date.split('/');
    let (Some(mm), Some(dd), Some(yyyy), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let well_formed = mm.len() == 2
        && dd.len() == 2
        && yyyy.len() == 4
        && date.bytes().filter(|b| *b != b'/').all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    let month: u32 = mm.parse().map_err(|_| invalid())?;
    let day: u32 = dd.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    yyyy.parse().map_err(|_| invalid())
}

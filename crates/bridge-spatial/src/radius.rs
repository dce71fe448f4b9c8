//! Radius query trait and the default linear-scan implementation.
//!
//! # Pluggability
//!
//! The route planner calls radius queries through [`RadiusQuery`], so a
//! caller that issues many queries against a large collection can swap in
//! [`BridgeIndex`](crate::BridgeIndex) without changing results.

use bridge_core::{Bridge, BridgeId, BridgeIdSet, GeoPoint};
use tracing::debug;

use crate::SpatialResult;
use crate::error::check_radius;

// ── RadiusQuery trait ─────────────────────────────────────────────────────────

/// Source of "bridges within `radius_km` of a point" answers.
pub trait RadiusQuery {
    /// Ids of bridges at rounded great-circle distance `<= radius_km` from
    /// `center` that are not in `exclusions`, in collection order.
    ///
    /// Fails with [`SpatialError::InvalidRadius`](crate::SpatialError) if
    /// `radius_km` is not finite and positive.
    fn within_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
        exclusions: &BridgeIdSet,
    ) -> SpatialResult<Vec<BridgeId>>;

    /// Number of bridges the query answers over.
    fn bridge_count(&self) -> usize;
}

// ── LinearScan ────────────────────────────────────────────────────────────────

/// Checks every bridge in the collection.  O(n) per query, no setup cost.
#[derive(Copy, Clone, Debug)]
pub struct LinearScan<'a> {
    bridges: &'a [Bridge],
}

impl<'a> LinearScan<'a> {
    pub fn new(bridges: &'a [Bridge]) -> Self {
        Self { bridges }
    }
}

impl RadiusQuery for LinearScan<'_> {
    fn within_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
        exclusions: &BridgeIdSet,
    ) -> SpatialResult<Vec<BridgeId>> {
        find_bridges_in_radius(self.bridges, center, radius_km, exclusions)
    }

    fn bridge_count(&self) -> usize {
        self.bridges.len()
    }
}

/// Ids of the bridges within `radius_km` of `center`, boundary included,
/// skipping any id in `exclusions`.
///
/// Results keep collection order; they are not sorted by distance.
///
/// ```
/// use bridge_core::{BridgeIdSet, GeoPoint};
/// use bridge_spatial::find_bridges_in_radius;
///
/// let none = find_bridges_in_radius(&[], GeoPoint::new(43.1, -80.15), 50.0, &BridgeIdSet::default())
///     .unwrap();
/// assert!(none.is_empty());
/// ```
pub fn find_bridges_in_radius(
    bridges: &[Bridge],
    center: GeoPoint,
    radius_km: f64,
    exclusions: &BridgeIdSet,
) -> SpatialResult<Vec<BridgeId>> {
    check_radius(radius_km)?;

    let found: Vec<BridgeId> = bridges
        .iter()
        .filter(|b| !exclusions.contains(&b.id))
        .filter(|b| b.distance_km(center) <= radius_km)
        .map(|b| b.id)
        .collect();

    debug!(%center, radius_km, excluded = exclusions.len(), found = found.len(), "radius scan");
    Ok(found)
}

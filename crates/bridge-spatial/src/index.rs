//! R-tree accelerated radius queries.
//!
//! # Approach
//!
//! An R-tree (via `rstar`) holds one `[lat, lon]` entry per bridge.  A query
//! first collects the entries inside a bounding box that encloses the whole
//! query circle, then applies the same rounded haversine test as
//! [`find_bridges_in_radius`](crate::find_bridges_in_radius).  Survivors are
//! sorted by their position in the source collection, so results are
//! identical to a linear scan.
//!
//! The box uses the exact longitude extent of a spherical cap,
//! `asin(sin δ / cos φ)`, widened by a small margin to absorb metre rounding.
//! Caps that touch a pole or wrap the antimeridian fall back to scanning
//! every entry.

use rstar::{AABB, RTree, RTreeObject};
use tracing::debug;

use bridge_core::{Bridge, BridgeId, BridgeIdSet, EARTH_RADIUS_KM, GeoPoint};

use crate::SpatialResult;
use crate::error::check_radius;
use crate::radius::RadiusQuery;

/// Relative widening applied to the query radius before sizing the box.
const RADIUS_MARGIN: f64 = 1.01;

/// Absolute widening covering distances that round down onto the radius.
const ROUNDING_SLACK_KM: f64 = 0.001;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct BridgeEntry {
    point:    [f64; 2], // [lat, lon]
    id:       BridgeId,
    /// Position of the bridge in the source collection.
    position: usize,
}

impl RTreeObject for BridgeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── BridgeIndex ───────────────────────────────────────────────────────────────

/// Spatial index over a snapshot of bridge locations.
///
/// The index copies ids and coordinates at build time; rebuild it after
/// moving or adding bridges.
pub struct BridgeIndex {
    tree: RTree<BridgeEntry>,
}

impl BridgeIndex {
    /// Bulk-load the index from `bridges`.  O(n log n).
    ///
    /// ```
    /// use bridge_core::{BridgeIdSet, GeoPoint};
    /// use bridge_spatial::{BridgeIndex, RadiusQuery};
    ///
    /// let index = BridgeIndex::build(&[]);
    /// assert!(index.is_empty());
    /// let hits = index
    ///     .within_radius(GeoPoint::new(43.1, -80.15), 10.0, &BridgeIdSet::default())
    ///     .unwrap();
    /// assert!(hits.is_empty());
    /// ```
    pub fn build(bridges: &[Bridge]) -> Self {
        let entries: Vec<BridgeEntry> = bridges
            .iter()
            .enumerate()
            .map(|(position, b)| BridgeEntry {
                point: [b.location.lat, b.location.lon],
                id: b.id,
                position,
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl RadiusQuery for BridgeIndex {
    fn within_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
        exclusions: &BridgeIdSet,
    ) -> SpatialResult<Vec<BridgeId>> {
        check_radius(radius_km)?;

        let keep = |e: &&BridgeEntry| {
            !exclusions.contains(&e.id)
                && GeoPoint::new(e.point[0], e.point[1]).distance_km(center) <= radius_km
        };

        let mut hits: Vec<&BridgeEntry> = match query_box(center, radius_km) {
            Some(envelope) => self.tree.locate_in_envelope(&envelope).filter(keep).collect(),
            None => self.tree.iter().filter(keep).collect(),
        };
        hits.sort_unstable_by_key(|e| e.position);

        debug!(%center, radius_km, found = hits.len(), "indexed radius query");
        Ok(hits.into_iter().map(|e| e.id).collect())
    }

    fn bridge_count(&self) -> usize {
        self.len()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Bounding box enclosing every point within `radius_km` of `center`, or
/// `None` when the cap reaches a pole or crosses the antimeridian.
fn query_box(center: GeoPoint, radius_km: f64) -> Option<AABB<[f64; 2]>> {
    // Angular radius in radians, widened for rounding.
    let delta = (radius_km * RADIUS_MARGIN + ROUNDING_SLACK_KM) / EARTH_RADIUS_KM;
    let lat = center.lat.to_radians();

    let lat_min = lat - delta;
    let lat_max = lat + delta;
    if lat_min <= -std::f64::consts::FRAC_PI_2 || lat_max >= std::f64::consts::FRAC_PI_2 {
        return None;
    }

    let ratio = delta.sin() / lat.cos();
    if ratio >= 1.0 {
        return None;
    }
    let d_lon = ratio.asin().to_degrees();
    let lon_min = center.lon - d_lon;
    let lon_max = center.lon + d_lon;
    if lon_min < -180.0 || lon_max > 180.0 {
        return None;
    }

    Some(AABB::from_corners(
        [lat_min.to_degrees(), lon_min],
        [lat_max.to_degrees(), lon_max],
    ))
}

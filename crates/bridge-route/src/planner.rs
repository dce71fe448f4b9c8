//! Route planner trait and the greedy worst-condition planner.
//!
//! # Pluggability
//!
//! Callers go through [`RoutePlanner`], so a different visiting policy can
//! be dropped in without touching the driver.  [`GreedyPlanner`] is itself
//! generic over the radius query: [`LinearScan`] for one-off routes,
//! [`BridgeIndex`](bridge_spatial::BridgeIndex) when many routes are planned
//! over the same large collection.  Both yield identical routes.

use tracing::debug;

use bridge_core::{Bridge, BridgeId, BridgeIdSet, GeoPoint, find_bridge_by_id};
use bridge_spatial::{LinearScan, RadiusQuery};

use crate::{RouteConfig, RouteError, RouteResult, find_worst_bci};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered inspection route.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Bridges to visit in order.  Every id appears at most once.
    pub bridges: Vec<BridgeId>,
    /// `legs_km[i]` is the rounded distance from the previous position (the
    /// start, for `i == 0`) to `bridges[i]`.
    pub legs_km: Vec<f64>,
}

impl Route {
    pub fn len(&self) -> usize {
        self.bridges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bridges.is_empty()
    }

    /// Sum of all legs in kilometres.
    pub fn total_km(&self) -> f64 {
        self.legs_km.iter().sum()
    }

    fn push(&mut self, id: BridgeId, leg_km: f64) {
        self.bridges.push(id);
        self.legs_km.push(leg_km);
    }
}

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Builds an inspection route over a bridge collection.
pub trait RoutePlanner {
    /// Plan a route starting at `start`, bounded by `config`.
    fn plan(&self, bridges: &[Bridge], start: GeoPoint, config: &RouteConfig) -> RouteResult<Route>;
}

// ── GreedyPlanner ─────────────────────────────────────────────────────────────

/// Repeatedly moves to the worst-condition bridge within reach.
///
/// Stops once `max_bridges` stops are collected or no unvisited bridge lies
/// within `radius_km` of the current stop.  Each iteration either grows the
/// visited set or terminates, so the loop runs at most
/// `min(max_bridges, bridges.len())` times.
///
/// The query must be built over the same collection that is passed to
/// [`plan`](RoutePlanner::plan); rebuild it whenever bridges are added or
/// removed.  A query whose size differs from the collection is rejected with
/// [`RouteError::QueryMismatch`].
pub struct GreedyPlanner<Q: RadiusQuery> {
    query: Q,
}

impl<Q: RadiusQuery> GreedyPlanner<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q: RadiusQuery> RoutePlanner for GreedyPlanner<Q> {
    fn plan(&self, bridges: &[Bridge], start: GeoPoint, config: &RouteConfig) -> RouteResult<Route> {
        config.validate()?;
        let indexed = self.query.bridge_count();
        if indexed != bridges.len() {
            return Err(RouteError::QueryMismatch { indexed, bridges: bridges.len() });
        }

        let mut route = Route::default();
        let mut visited = BridgeIdSet::default();
        let mut here = start;

        while route.len() < config.max_bridges {
            let candidates = self.query.within_radius(here, config.radius_km, &visited)?;
            if candidates.is_empty() {
                debug!(stops = route.len(), position = %here, "no unvisited bridge in range");
                break;
            }

            let next = find_worst_bci(bridges, &candidates)?;
            let bridge = find_bridge_by_id(bridges, next).ok_or(RouteError::UnknownBridge(next))?;
            let leg_km = bridge.distance_km(here);

            debug!(
                stop = route.len() + 1,
                bridge = %next,
                candidates = candidates.len(),
                leg_km,
                "route step"
            );

            route.push(next, leg_km);
            visited.insert(next);
            here = bridge.location;
        }

        Ok(route)
    }
}

/// Greedy route as a plain id sequence, using a linear radius scan.
///
/// ```
/// use bridge_core::GeoPoint;
/// use bridge_route::map_route;
///
/// let route = map_route(&[], GeoPoint::new(43.1, -80.5), 30, 10.0).unwrap();
/// assert!(route.is_empty());
/// ```
pub fn map_route(
    bridges: &[Bridge],
    start: GeoPoint,
    max_bridges: usize,
    radius_km: f64,
) -> RouteResult<Vec<BridgeId>> {
    let planner = GreedyPlanner::new(LinearScan::new(bridges));
    let route = planner.plan(bridges, start, &RouteConfig::new(max_bridges, radius_km))?;
    Ok(route.bridges)
}

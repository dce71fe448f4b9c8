//! Route planning parameters.

use crate::{RouteError, RouteResult};

/// Limits for one greedy route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteConfig {
    /// Upper bound on the number of bridges in the route.  `0` yields an
    /// empty route.
    pub max_bridges: usize,

    /// Maximum great-circle distance from one stop to the next, in km.
    pub radius_km: f64,
}

impl RouteConfig {
    pub fn new(max_bridges: usize, radius_km: f64) -> Self {
        Self { max_bridges, radius_km }
    }

    /// Reject radii that are not finite and strictly positive.
    pub fn validate(&self) -> RouteResult<()> {
        if self.radius_km.is_finite() && self.radius_km > 0.0 {
            Ok(())
        } else {
            Err(RouteError::Config(format!(
                "radius_km must be a positive number, got {}",
                self.radius_km
            )))
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self { max_bridges: 10, radius_km: 50.0 }
    }
}

//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `bridge-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("radius must be a positive number of kilometres, got {0}")]
    InvalidRadius(f64),
}

pub type SpatialResult<T> = Result<T, SpatialError>;

/// Reject radii that are not finite and strictly positive.
pub(crate) fn check_radius(radius_km: f64) -> SpatialResult<()> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(())
    } else {
        Err(SpatialError::InvalidRadius(radius_km))
    }
}

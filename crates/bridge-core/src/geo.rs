//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Distances are reported in
//! kilometres rounded to three decimals (metre precision), so every caller
//! compares against the same rounded value.

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres, rounded to the metre.
    ///
    /// Inputs are trusted to be valid coordinates.  The result is symmetric
    /// and `p.distance_km(p) == 0.0`.
    ///
    /// ```
    /// use bridge_core::GeoPoint;
    ///
    /// let a = GeoPoint::new(43.659777, -79.397383);
    /// let b = GeoPoint::new(43.657129, -79.399439);
    /// assert_eq!(a.distance_km(b), 0.338);
    /// ```
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = other.lon.to_radians() - self.lon.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // min() keeps asin in its domain when rounding pushes `a` past 1.
        let c = 2.0 * a.sqrt().min(1.0).asin();
        round_to_metre(c * EARTH_RADIUS_KM)
    }
}

#[inline]
fn round_to_metre(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

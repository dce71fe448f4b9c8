//! `bridge-spatial` — radius queries over a bridge collection.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`radius`] | `RadiusQuery` trait, `LinearScan`, `find_bridges_in_radius`  |
//! | [`index`]  | `BridgeIndex` (R-tree prefilter + exact haversine)           |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                           |
//!
//! Both query implementations return identical results: ids of bridges
//! whose rounded haversine distance to the centre is `<= radius`, minus the
//! exclusions, in collection order.

pub mod error;
pub mod index;
pub mod radius;


pub use error::{SpatialError, SpatialResult};
pub use index::BridgeIndex;
pub use radius::{LinearScan, RadiusQuery, find_bridges_in_radius};

//! `bridge-core` — foundational types for the bridge inspection toolkit.
//!
//! Every other `bridge-*` crate depends on this one.  It has no `bridge-*`
//! dependencies and minimal external ones (`thiserror`, `rustc-hash`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`ids`]        | `BridgeId`, `BridgeIdSet`                                 |
//! | [`geo`]        | `GeoPoint`, haversine distance in kilometres              |
//! | [`history`]    | `ConditionHistory`, `MISSING_BCI`                         |
//! | [`bridge`]     | `Bridge`, `RehabKind`                                     |
//! | [`collection`] | `find_bridge_by_id`, `inspect_bridge`, `rehabilitate_bridge` |
//! | [`error`]      | `BridgeError`, `BridgeResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod bridge;
pub mod collection;
pub mod error;
pub mod geo;
pub mod history;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bridge::{Bridge, RehabKind};
pub use collection::{
    find_bridge_by_id, find_bridge_by_id_mut, inspect_bridge, rehabilitate_bridge,
};
pub use error::{BridgeError, BridgeResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint};
pub use history::{ConditionHistory, MISSING_BCI, is_missing};
pub use ids::{BridgeId, BridgeIdSet};

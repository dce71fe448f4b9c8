use thiserror::Error;

use bridge_core::BridgeId;
use bridge_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("candidate set is empty")]
    EmptyCandidates,

    #[error("bridge {0} is not in the collection")]
    UnknownBridge(BridgeId),

    #[error("bridge {0} has no recorded condition score")]
    NoCondition(BridgeId),

    #[error("year window {start}..={stop} is empty (start > stop)")]
    InvalidWindow { start: i32, stop: i32 },

    #[error("radius query covers {indexed} bridges but the collection has {bridges}")]
    QueryMismatch { indexed: usize, bridges: usize },

    #[error("route configuration error: {0}")]
    Config(String),

    #[error("radius query failed: {0}")]
    Spatial(#[from] SpatialError),
}

pub type RouteResult<T> = Result<T, RouteError>;

//! `bridge-route` — condition lookups and inspection route planning.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`condition`] | `get_bridge_condition`, `find_worst_bci`, `calculate_average_condition` |
//! | [`config`]    | `RouteConfig`                                                   |
//! | [`planner`]   | `RoutePlanner` trait, `Route`, `GreedyPlanner`, `map_route`     |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                                  |
//!
//! # Greedy route (summary)
//!
//! ```text
//! here    = start
//! visited = {}
//! while route.len() < max_bridges:
//!     candidates = radius_query(here, radius, exclude = visited)
//!     if candidates is empty: stop
//!     next = worst most-recent BCI among candidates (ties → smaller id)
//!     route.push(next); visited.insert(next); here = next.location
//! ```
//!
//! Every leg is bounded by the radius measured from the *previous* stop, not
//! from the original start.

pub mod condition;
pub mod config;
pub mod error;
pub mod planner;

#[cfg(test)]
mod tests;

pub use condition::{calculate_average_condition, find_worst_bci, get_bridge_condition};
pub use config::RouteConfig;
pub use error::{RouteError, RouteResult};
pub use planner::{GreedyPlanner, Route, RoutePlanner, map_route};

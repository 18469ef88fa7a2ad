//! Route planner.
//!
//! Answers queries over a [`Catalog`](crate::catalog::Catalog):
//! the cheapest or fastest single route (Dijkstra), every simple route
//! ranked by cost or time (exhaustive depth-first search), and direct
//! connections.

mod config;
mod criterion;
mod enumerate;
mod rank;
mod search;
mod shortest;


pub use config::SearchConfig;
pub use criterion::Criterion;
pub use rank::rank_routes;
pub use search::{Planner, RouteQuery, SearchError};

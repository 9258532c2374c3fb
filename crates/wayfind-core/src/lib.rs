//! Wayfind Core Library
//!
//! Cost-aware shortest-path search (Dijkstra and A*) over caller-defined
//! state spaces, and adjacency-list graphs with edge contraction and
//! Karger's randomized minimum cut.

pub mod config;
pub mod coordinate;
pub mod cost;
pub mod error;
pub mod graph;
pub mod input;
pub mod logging;
pub mod search;

pub use cost::Cost;
pub use error::{Result, WayfindError};

//! Cost-aware shortest-path search over caller-defined state spaces
//!
//! Provides two engines sharing one frontier, node arena and path model:
//! - `DijkstraPathfinder`: uninformed search with a finalized set
//! - `AStarPathfinder`: heuristic-guided search with a best-cost map
//!
//! Callers describe the state space with a [`Successors`] implementation
//! (usually a closure) returning `(state, move cost)` pairs. Move costs must be
//! non-negative; a negative cost panics.

pub mod astar;
pub mod dijkstra;
mod frontier;
pub mod heuristic;
mod node;
pub mod path;
pub mod successors;
#[cfg(test)]
mod test_support;

pub use astar::AStarPathfinder;
pub use dijkstra::DijkstraPathfinder;
pub use heuristic::ManhattanHeuristic;
pub use path::{Path, PathNode};
pub use successors::{Heuristic, StateCost, Successors};

/// Counters collected during a single search, reported via tracing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped and accepted for expansion
    pub expanded: usize,
    /// Nodes pushed onto the frontier (including the initial state)
    pub pushed: usize,
    /// Stale frontier entries discarded on pop
    pub skipped: usize,
    /// Largest frontier size observed
    pub frontier_peak: usize,
}

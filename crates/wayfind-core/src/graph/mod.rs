//! Adjacency-list graphs and randomized minimum cut
//!
//! Provides:
//! - `Graph` storage keyed by element-identified vertices
//! - depth/breadth-first traversal and Dijkstra over weighted edges
//! - edge contraction and Karger's repeated-contraction minimum cut

pub mod contract;
pub mod edge;
pub mod mincut;
pub mod store;
pub mod traversal;
pub mod vertex;

pub use contract::ParentCache;
pub use edge::{Edge, EdgeKind};
pub use mincut::MinCut;
pub use store::Graph;
pub use vertex::{Combine, Vertex};

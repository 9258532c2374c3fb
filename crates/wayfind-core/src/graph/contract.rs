//! Edge contraction
//!
//! Contraction treats the graph as undirected: the merged vertex is joined to
//! every former neighbour with undirected edges, and edges that only pointed
//! into the contracted pair are dropped with it.

use crate::graph::edge::{Edge, EdgeKind};
use crate::graph::store::Graph;
use crate::graph::vertex::{Combine, Vertex};
use std::collections::HashMap;
use std::hash::Hash;

/// Maps each vertex to the vertex it was merged into.
///
/// A union-find without path compression: `root` walks the chain until it
/// reaches a vertex that is its own parent.
#[derive(Debug, Clone)]
pub struct ParentCache<E> {
    parents: HashMap<Vertex<E>, Vertex<E>>,
}

impl<E> ParentCache<E>
where
    E: Clone + Eq + Hash,
{
    /// Every vertex starts as its own root
    pub fn new<'a>(vertices: impl IntoIterator<Item = &'a Vertex<E>>) -> Self
    where
        E: 'a,
    {
        let parents = vertices
            .into_iter()
            .map(|v| (v.clone(), v.clone()))
            .collect();
        Self { parents }
    }

    pub fn record_merge(
        &mut self,
        source: &Vertex<E>,
        destination: &Vertex<E>,
        merged: &Vertex<E>,
    ) {
        self.parents
            .entry(merged.clone())
            .or_insert_with(|| merged.clone());
        if source != merged {
            self.parents.insert(source.clone(), merged.clone());
        }
        if destination != merged {
            self.parents.insert(destination.clone(), merged.clone());
        }
    }

    /// Current representative of `vertex`.
    ///
    /// `None` for a vertex never seen by the cache, or if the chain does not
    /// settle within one step per tracked vertex.
    pub fn root(&self, vertex: &Vertex<E>) -> Option<&Vertex<E>> {
        let (mut current, _) = self.parents.get_key_value(vertex)?;
        for _ in 0..=self.parents.len() {
            let parent = self.parents.get(current)?;
            if parent == current {
                return Some(current);
            }
            current = parent;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl<E, W> Graph<E, W>
where
    E: Clone + Eq + Hash + Combine,
    W: Clone,
{
    /// Merge `edge.source` and `edge.destination` into one vertex.
    ///
    /// The merged vertex's element is `source.combined(destination)`. Edges
    /// from either endpoint to a third vertex are re-created as undirected
    /// edges from the merged vertex, keeping their weights; edges between the
    /// two endpoints disappear. Returns `None`, leaving the graph untouched,
    /// for a self-loop, an endpoint missing from the graph, or a combined
    /// element that already names a third vertex.
    pub fn contract(&mut self, edge: &Edge<E, W>) -> Option<Vertex<E>> {
        let source = &edge.source;
        let destination = &edge.destination;
        if edge.is_self_loop() {
            return None;
        }

        let merged = source.combined(destination);
        if &merged != source && &merged != destination && self.contains_vertex(&merged) {
            tracing::debug!("contraction_collides");
            return None;
        }

        // Resolve every rewired edge before touching the adjacency map
        let rewired: Vec<(Vertex<E>, Option<W>)> = self
            .edges_from(source)?
            .iter()
            .chain(self.edges_from(destination)?)
            .filter(|e| &e.destination != source && &e.destination != destination)
            .map(|e| (e.destination.clone(), e.weight.clone()))
            .collect();

        self.remove_vertex(source);
        self.remove_vertex(destination);

        let merged = self.vertex_for(merged.into_element());
        for (neighbour, weight) in rewired {
            self.add_edge(EdgeKind::Undirected, &merged, &neighbour, weight);
        }

        tracing::trace!(
            vertices = self.vertex_count(),
            edges = self.directed_edge_count(),
            "contracted"
        );
        Some(merged)
    }

    /// `contract`, also pointing both endpoints at the merged vertex in `parents`
    pub fn contract_tracked(
        &mut self,
        edge: &Edge<E, W>,
        parents: &mut ParentCache<E>,
    ) -> Option<Vertex<E>> {
        let merged = self.contract(edge)?;
        parents.record_merge(&edge.source, &edge.destination, &merged);
        Some(merged)
    }
}

use crate::graph::edge::{Edge, EdgeKind};
use crate::graph::vertex::Vertex;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Adjacency-list graph owning its vertices and edges.
///
/// Each vertex maps to the directed edges whose source it is. Vertices are
/// iterated in insertion order so that seeded randomized algorithms are
/// reproducible. Callers only ever hold vertex and edge values, never
/// references into the map.
#[derive(Debug, Clone)]
pub struct Graph<E, W = u64> {
    adjacency: HashMap<Vertex<E>, Vec<Edge<E, W>>>,
    order: Vec<Vertex<E>>,
}

impl<E, W> Default for Graph<E, W> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<E, W> Graph<E, W>
where
    E: Clone + Eq + Hash,
    W: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing vertex for `element`, or a newly registered one with no edges
    pub fn vertex_for(&mut self, element: E) -> Vertex<E> {
        let vertex = Vertex::new(element);
        self.ensure_vertex(&vertex);
        vertex
    }

    /// Lookup without registering
    pub fn vertex(&self, element: &E) -> Option<Vertex<E>> {
        let vertex = Vertex::new(element.clone());
        self.adjacency.contains_key(&vertex).then_some(vertex)
    }

    pub fn contains_vertex(&self, vertex: &Vertex<E>) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<E>> {
        self.order.iter()
    }

    /// Outgoing edges of `vertex`, or `None` if it is not in the graph
    pub fn edges_from(&self, vertex: &Vertex<E>) -> Option<&[Edge<E, W>]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Every stored directed edge, grouped by source in vertex order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E, W>> {
        self.order
            .iter()
            .filter_map(|v| self.adjacency.get(v))
            .flatten()
    }

    /// Number of stored directed edges (an undirected edge counts twice)
    pub fn directed_edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Number of logical edges: each reciprocal pair of directed edges counts
    /// once, an unmatched directed edge counts once. Parallel undirected edges
    /// are counted separately.
    pub fn edge_count(&self) -> usize {
        logical_edges(self.edges()).len()
    }

    /// Weight of the first edge from `source` to `destination`.
    ///
    /// Only looks at direct edges; does not search the graph.
    pub fn weight(&self, source: &Vertex<E>, destination: &Vertex<E>) -> Option<W> {
        self.adjacency
            .get(source)?
            .iter()
            .find(|e| &e.destination == destination)
            .and_then(|e| e.weight.clone())
    }

    /// Add an edge without checking for duplicates.
    ///
    /// Registers either endpoint that is not yet in the graph.
    pub fn add_edge(
        &mut self,
        kind: EdgeKind,
        source: &Vertex<E>,
        destination: &Vertex<E>,
        weight: Option<W>,
    ) {
        self.ensure_vertex(source);
        self.ensure_vertex(destination);

        let edge = Edge::new(source.clone(), destination.clone(), weight);
        let reverse = (kind == EdgeKind::Undirected).then(|| edge.reversed());
        self.push_edge(edge);
        if let Some(reverse) = reverse {
            self.push_edge(reverse);
        }
    }

    /// Add an edge between two elements, creating their vertices as needed
    pub fn add_edge_between(
        &mut self,
        kind: EdgeKind,
        source: E,
        destination: E,
        weight: Option<W>,
    ) -> (Vertex<E>, Vertex<E>) {
        let source = self.vertex_for(source);
        let destination = self.vertex_for(destination);
        self.add_edge(kind, &source, &destination, weight);
        (source, destination)
    }

    /// Remove `vertex`, its outgoing edges and every edge pointing at it.
    ///
    /// Returns `false` if the vertex was not in the graph.
    pub fn remove_vertex(&mut self, vertex: &Vertex<E>) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        self.order.retain(|v| v != vertex);
        for edges in self.adjacency.values_mut() {
            edges.retain(|e| &e.destination != vertex);
        }
        true
    }

    /// Remove one edge equal to `edge` from its source's outgoing list.
    ///
    /// The reverse direction of an undirected edge is left in place.
    pub fn remove_edge(&mut self, edge: &Edge<E, W>) -> bool
    where
        W: PartialEq,
    {
        let Some(edges) = self.adjacency.get_mut(&edge.source) else {
            return false;
        };
        match edges.iter().position(|e| e == edge) {
            Some(index) => {
                edges.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every edge whose source and destination coincide
    pub fn remove_self_loops(&mut self) -> usize {
        let mut removed = 0;
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|e| !e.is_self_loop());
            removed += before - edges.len();
        }
        removed
    }

    fn ensure_vertex(&mut self, vertex: &Vertex<E>) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.clone(), Vec::new());
            self.order.push(vertex.clone());
        }
    }

    fn push_edge(&mut self, edge: Edge<E, W>) {
        if let Some(edges) = self.adjacency.get_mut(&edge.source) {
            edges.push(edge);
        }
    }
}

/// One representative per logical edge.
///
/// A directed edge is matched against an earlier unmatched edge running the
/// opposite way; matched pairs are reported once. Weights are not compared.
pub(crate) fn logical_edges<'a, E, W>(
    edges: impl Iterator<Item = &'a Edge<E, W>>,
) -> Vec<&'a Edge<E, W>>
where
    E: Eq + Hash + 'a,
    W: 'a,
{
    let mut unmatched: HashMap<(&Vertex<E>, &Vertex<E>), usize> = HashMap::new();
    let mut logical = Vec::new();

    for edge in edges {
        if let Some(pending) = unmatched
            .get_mut(&(&edge.destination, &edge.source))
            .filter(|n| **n > 0)
        {
            *pending -= 1;
            continue;
        }
        *unmatched
            .entry((&edge.source, &edge.destination))
            .or_insert(0) += 1;
        logical.push(edge);
    }

    logical
}

impl<E, W> fmt::Display for Graph<E, W>
where
    E: Clone + Eq + Hash + fmt::Display,
    W: Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            let edges = self.edges_from(vertex).unwrap_or_default();
            let targets: Vec<String> = edges
                .iter()
                .map(|e| match &e.weight {
                    Some(w) => format!("{} ({})", e.destination, w),
                    None => e.destination.to_string(),
                })
                .collect();
            writeln!(f, "{} --> [ {} ]", vertex, targets.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(graph: &Graph<String>) -> Vec<String> {
        graph.vertices().map(|v| v.element().clone()).collect()
    }

    #[test]
    fn test_vertex_for_is_idempotent() {
        let mut graph: Graph<String> = Graph::new();
        let a = graph.vertex_for("a".to_string());
        let again = graph.vertex_for("a".to_string());

        assert_eq!(a, again);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edges_from(&a), Some(&[][..]));
    }

    #[test]
    fn test_vertex_lookup() {
        let mut graph: Graph<String> = Graph::new();
        graph.vertex_for("a".to_string());

        assert!(graph.vertex(&"a".to_string()).is_some());
        assert!(graph.vertex(&"b".to_string()).is_none());
    }

    #[test]
    fn test_undirected_edge_stores_both_directions() {
        let mut graph: Graph<String> = Graph::new();
        let (a, b) =
            graph.add_edge_between(EdgeKind::Undirected, "a".into(), "b".into(), Some(5));

        assert_eq!(graph.directed_edge_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(&a, &b), Some(5));
        assert_eq!(graph.weight(&b, &a), Some(5));
    }

    #[test]
    fn test_directed_edge_stores_one_direction() {
        let mut graph: Graph<String> = Graph::new();
        let (a, b) = graph.add_edge_between(EdgeKind::Directed, "a".into(), "b".into(), None);

        assert_eq!(graph.edges_from(&a).unwrap().len(), 1);
        assert!(graph.edges_from(&b).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(&a, &b), None);
    }

    #[test]
    fn test_parallel_undirected_edges_counted_per_pair() {
        let mut graph: Graph<String> = Graph::new();
        for _ in 0..2 {
            graph.add_edge_between(EdgeKind::Undirected, "a".into(), "b".into(), None);
        }
        graph.add_edge_between(EdgeKind::Undirected, "b".into(), "c".into(), None);

        assert_eq!(graph.directed_edge_count(), 6);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_opposing_directed_edges_count_once() {
        let mut graph: Graph<String> = Graph::new();
        graph.add_edge_between(EdgeKind::Directed, "a".into(), "b".into(), None);
        graph.add_edge_between(EdgeKind::Directed, "b".into(), "a".into(), None);
        graph.add_edge_between(EdgeKind::Directed, "b".into(), "c".into(), None);

        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_remove_vertex_purges_incoming_edges() {
        let mut graph: Graph<String> = Graph::new();
        let (a, b) = graph.add_edge_between(EdgeKind::Undirected, "a".into(), "b".into(), None);
        let (_, c) = graph.add_edge_between(EdgeKind::Undirected, "b".into(), "c".into(), None);
        graph.add_edge(EdgeKind::Undirected, &a, &c, None);

        assert!(graph.remove_vertex(&b));

        assert_eq!(labels(&graph), vec!["a", "c"]);
        assert!(!graph.contains_vertex(&b));
        assert!(graph.edges().all(|e| !e.touches(&b)));
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.remove_vertex(&b));
    }

    #[test]
    fn test_remove_edge_takes_one_direction_and_instance() {
        let mut graph: Graph<String> = Graph::new();
        let (a, b) = graph.add_edge_between(EdgeKind::Undirected, "a".into(), "b".into(), None);
        graph.add_edge(EdgeKind::Undirected, &a, &b, None);

        let edge = Edge::new(a.clone(), b.clone(), None);
        assert!(graph.remove_edge(&edge));

        assert_eq!(graph.edges_from(&a).unwrap().len(), 1);
        assert_eq!(graph.edges_from(&b).unwrap().len(), 2);

        let missing = Edge::new(a.clone(), b.clone(), Some(9));
        assert!(!graph.remove_edge(&missing));
    }

    #[test]
    fn test_weight_returns_first_defined_edge() {
        let mut graph: Graph<String> = Graph::new();
        let (a, b) =
            graph.add_edge_between(EdgeKind::Directed, "a".into(), "b".into(), Some(3));
        graph.add_edge(EdgeKind::Directed, &a, &b, Some(1));

        assert_eq!(graph.weight(&a, &b), Some(3));
    }

    #[test]
    fn test_remove_self_loops() {
        let mut graph: Graph<String> = Graph::new();
        let (a, _) = graph.add_edge_between(EdgeKind::Undirected, "a".into(), "b".into(), None);
        graph.add_edge(EdgeKind::Undirected, &a, &a, None);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.remove_self_loops(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_display() {
        let mut graph: Graph<String> = Graph::new();
        graph.add_edge_between(EdgeKind::Directed, "a".into(), "b".into(), Some(2));
        graph.add_edge_between(EdgeKind::Directed, "a".into(), "c".into(), None);

        assert_eq!(graph.to_string(), "a --> [ b (2), c ]\nb --> [  ]\nc --> [  ]\n");
    }
}

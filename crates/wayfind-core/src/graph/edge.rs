use crate::graph::vertex::Vertex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// One edge, source to destination
    Directed,
    /// Stored as a pair of directed edges kept in sync by every mutation
    Undirected,
}

/// Directed connection between two vertices, optionally weighted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<E, W> {
    pub source: Vertex<E>,
    pub destination: Vertex<E>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<W>,
}

impl<E: Clone, W: Clone> Edge<E, W> {
    pub fn new(source: Vertex<E>, destination: Vertex<E>, weight: Option<W>) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<E: PartialEq, W> Edge<E, W> {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    pub fn touches(&self, vertex: &Vertex<E>) -> bool {
        &self.source == vertex || &self.destination == vertex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_swaps_endpoints() {
        let edge = Edge::new(Vertex::new('a'), Vertex::new('b'), Some(4u32));
        let reversed = edge.reversed();
        assert_eq!(reversed.source, Vertex::new('b'));
        assert_eq!(reversed.destination, Vertex::new('a'));
        assert_eq!(reversed.weight, Some(4));
        assert_eq!(reversed.reversed(), edge);
    }

    #[test]
    fn test_self_loop_and_touches() {
        let edge: Edge<char, u32> = Edge::new(Vertex::new('a'), Vertex::new('a'), None);
        assert!(edge.is_self_loop());
        assert!(edge.touches(&Vertex::new('a')));
        assert!(!edge.touches(&Vertex::new('b')));
    }
}

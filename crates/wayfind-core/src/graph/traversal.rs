//! Traversal and path-finding over a `Graph`

use crate::cost::Cost;
use crate::graph::store::Graph;
use crate::graph::vertex::Vertex;
use crate::search::{DijkstraPathfinder, Path, StateCost};
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

impl<E, W> Graph<E, W>
where
    E: Clone + Eq + Hash,
    W: Clone,
{
    /// Visit every vertex reachable from `start`, deepest first.
    ///
    /// Each vertex is visited once. Nothing is visited if `start` is not in
    /// the graph.
    pub fn depth_first<F>(&self, start: &Vertex<E>, visit: F)
    where
        F: FnMut(&Vertex<E>),
    {
        self.walk(start, visit, VecDeque::pop_back);
    }

    /// Visit every vertex reachable from `start` in order of hop distance
    pub fn breadth_first<F>(&self, start: &Vertex<E>, visit: F)
    where
        F: FnMut(&Vertex<E>),
    {
        self.walk(start, visit, VecDeque::pop_front);
    }

    fn walk<'g, F, T>(&'g self, start: &'g Vertex<E>, mut visit: F, mut take: T)
    where
        F: FnMut(&Vertex<E>),
        T: FnMut(&mut VecDeque<&'g Vertex<E>>) -> Option<&'g Vertex<E>>,
    {
        if !self.contains_vertex(start) {
            return;
        }

        let mut visited: HashSet<&'g Vertex<E>> = HashSet::new();
        let mut pending: VecDeque<&'g Vertex<E>> = VecDeque::new();
        pending.push_back(start);

        while let Some(next) = take(&mut pending) {
            if !visited.insert(next) {
                continue;
            }
            visit(next);

            if let Some(edges) = self.edges_from(next) {
                pending.extend(edges.iter().map(|e| &e.destination));
            }
        }
    }
}

impl<E, W> Graph<E, W>
where
    E: Clone + Eq + Hash,
    W: Cost,
{
    /// Cheapest route between two vertices following edge directions.
    ///
    /// Unweighted edges cost `W::ONE`.
    ///
    /// # Panics
    /// If a traversed edge has a negative weight.
    pub fn shortest_path(
        &self,
        source: &Vertex<E>,
        destination: &Vertex<E>,
    ) -> Option<Path<Vertex<E>, W>> {
        self.shortest_path_where(source, |v| v == destination)
    }

    /// Cheapest route from `source` to the first vertex accepted by `is_target`
    pub fn shortest_path_where<P>(
        &self,
        source: &Vertex<E>,
        is_target: P,
    ) -> Option<Path<Vertex<E>, W>>
    where
        P: Fn(&Vertex<E>) -> bool,
    {
        if !self.contains_vertex(source) {
            return None;
        }

        let pathfinder = DijkstraPathfinder::new(|current: &Vertex<E>| {
            self.edges_from(current)
                .unwrap_or_default()
                .iter()
                .map(|e| StateCost::new(e.destination.clone(), e.weight.unwrap_or(W::ONE)))
                .collect::<Vec<_>>()
        });

        pathfinder.shortest_path(source.clone(), is_target)
    }
}

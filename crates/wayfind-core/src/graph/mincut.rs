//! Karger's randomized minimum cut
//!
//! Each trial contracts a scratch copy of the graph down to two vertices by
//! picking uniformly random directed edges, so a vertex is chosen in
//! proportion to its remaining degree. The number of edges left between the
//! two survivors is the trial's cut. Trials are independent; only the best
//! one is kept. The input is treated as undirected.

use crate::config::MinCutConfig;
use crate::graph::contract::ParentCache;
use crate::graph::edge::Edge;
use crate::graph::store::{logical_edges, Graph};
use crate::graph::vertex::{Combine, Vertex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

/// Best cut found across all trials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinCut<E, W> {
    /// Number of logical edges crossing the cut
    pub size: usize,
    /// Original edges crossing the cut, one per logical edge
    pub edges: Vec<Edge<E, W>>,
    /// Original vertices grouped by the side they ended up on.
    ///
    /// Two groups for a connected graph; a disconnected graph may leave more.
    pub groups: Vec<Vec<Vertex<E>>>,
}

impl<E: Clone, W> MinCut<E, W> {
    /// First group against all the others
    pub fn partition(&self) -> (Vec<Vertex<E>>, Vec<Vertex<E>>) {
        let mut groups = self.groups.iter();
        let first = groups.next().cloned().unwrap_or_default();
        let rest = groups.flatten().cloned().collect();
        (first, rest)
    }

    /// Product of the group sizes
    pub fn group_product(&self) -> usize {
        self.groups.iter().map(Vec::len).product()
    }
}

/// Scratch outcome of one contraction trial
struct Trial<E> {
    size: usize,
    parents: ParentCache<E>,
}

impl<E, W> Graph<E, W>
where
    E: Clone + Eq + Hash + Combine,
    W: Clone,
{
    /// Minimum cut over `iterations` trials using the thread-local RNG.
    ///
    /// `None` for a graph with fewer than two vertices or zero iterations.
    pub fn minimum_cut(&self, iterations: usize) -> Option<MinCut<E, W>> {
        self.minimum_cut_with_rng(iterations, &mut rand::thread_rng())
    }

    /// Minimum cut drawing every random choice from `rng`.
    ///
    /// Reproducible for a seeded RNG: vertices and edges are visited in
    /// insertion order.
    #[tracing::instrument(level = "debug", skip_all, fields(iterations = iterations, vertices = self.vertex_count()))]
    pub fn minimum_cut_with_rng<R: Rng>(
        &self,
        iterations: usize,
        rng: &mut R,
    ) -> Option<MinCut<E, W>> {
        if self.vertex_count() < 2 || iterations == 0 {
            return None;
        }

        let start = Instant::now();
        let mut best: Option<MinCut<E, W>> = None;

        for trial_index in 0..iterations {
            let trial = self.run_trial(rng);
            if best.as_ref().is_none_or(|b| trial.size < b.size) {
                tracing::debug!(trial = trial_index, size = trial.size, "improved_cut");
                best = Some(self.resolve_cut(&trial));
            }
            if best.as_ref().is_some_and(|b| b.size == 0) {
                break;
            }
        }

        crate::trace_time!(start, "minimum_cut", iterations = iterations);
        best
    }

    /// Minimum cut with trials spread over the rayon thread pool
    #[tracing::instrument(level = "debug", skip_all, fields(iterations = iterations, vertices = self.vertex_count()))]
    pub fn minimum_cut_parallel(&self, iterations: usize) -> Option<MinCut<E, W>>
    where
        E: Send + Sync,
        W: Send + Sync,
    {
        if self.vertex_count() < 2 || iterations == 0 {
            return None;
        }

        let best = (0..iterations)
            .into_par_iter()
            .map(|_| {
                let mut rng = rand::thread_rng();
                self.run_trial(&mut rng)
            })
            .min_by_key(|trial| trial.size)?;

        tracing::debug!(size = best.size, "best_parallel_cut");
        Some(self.resolve_cut(&best))
    }

    /// Minimum cut driven by `config`.
    ///
    /// A seed only applies to sequential runs.
    pub fn minimum_cut_with(&self, config: &MinCutConfig) -> Option<MinCut<E, W>>
    where
        E: Send + Sync,
        W: Send + Sync,
    {
        match (config.parallel, config.seed) {
            (true, seed) => {
                if seed.is_some() {
                    tracing::warn!("seed ignored for parallel minimum cut");
                }
                self.minimum_cut_parallel(config.iterations)
            }
            (false, Some(seed)) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.minimum_cut_with_rng(config.iterations, &mut rng)
            }
            (false, None) => self.minimum_cut(config.iterations),
        }
    }

    fn run_trial<R: Rng>(&self, rng: &mut R) -> Trial<E> {
        let mut scratch = self.clone();
        scratch.remove_self_loops();
        let mut parents = ParentCache::new(scratch.vertices());

        while scratch.vertex_count() > 2 {
            let available = scratch.directed_edge_count();
            // Nothing left to contract: every component is a single vertex
            if available == 0 {
                break;
            }

            let index = rng.gen_range(0..available);
            let Some(edge) = scratch.edges().nth(index).cloned() else {
                break;
            };
            if scratch.contract_tracked(&edge, &mut parents).is_none() {
                break;
            }
        }

        Trial {
            size: scratch.edge_count(),
            parents,
        }
    }

    /// Map the trial back onto the original vertices and edges
    fn resolve_cut(&self, trial: &Trial<E>) -> MinCut<E, W> {
        let parents = &trial.parents;

        let edges: Vec<Edge<E, W>> = logical_edges(self.edges())
            .into_iter()
            .filter(|e| parents.root(&e.source) != parents.root(&e.destination))
            .cloned()
            .collect();

        let mut group_index: HashMap<Option<&Vertex<E>>, usize> = HashMap::new();
        let mut groups: Vec<Vec<Vertex<E>>> = Vec::new();
        for vertex in self.vertices() {
            let index = *group_index
                .entry(parents.root(vertex))
                .or_insert_with(|| {
                    groups.push(Vec::new());
                    groups.len() - 1
                });
            groups[index].push(vertex.clone());
        }

        MinCut {
            size: edges.len(),
            edges,
            groups,
        }
    }
}

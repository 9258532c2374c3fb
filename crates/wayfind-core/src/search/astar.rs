use crate::coordinate::Coordinate;
use crate::cost::{assert_non_negative, Cost};
use crate::search::frontier::Frontier;
use crate::search::heuristic::ManhattanHeuristic;
use crate::search::node::NodeArena;
use crate::search::path::Path;
use crate::search::successors::{Heuristic, Successors};
use crate::search::SearchStats;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Heuristic-guided lowest-cost search.
///
/// Frontier priority is `cumulative cost + heuristic(state)`. A best-cost map
/// replaces Dijkstra's finalized set: a neighbour is queued only when it
/// improves on the best known cost, and a popped entry is discarded only when
/// a strictly cheaper cost for its state has been recorded since.
pub struct AStarPathfinder<S, C, N> {
    next_states: N,
    _marker: PhantomData<fn(&S) -> C>,
}

impl<S, C, N> AStarPathfinder<S, C, N>
where
    S: Clone + Eq + Hash,
    C: Cost,
    N: Successors<S, C>,
{
    pub fn new(next_states: N) -> Self {
        Self {
            next_states,
            _marker: PhantomData,
        }
    }

    /// Cheapest path from `initial` to the first state accepted by `is_target`.
    ///
    /// Optimal only when `heuristic` is admissible. Returns `None` when no
    /// accepting state is reachable.
    ///
    /// # Panics
    /// If the neighbour generator yields a negative move cost.
    pub fn shortest_path<P, H>(&self, initial: S, is_target: P, heuristic: H) -> Option<Path<S, C>>
    where
        P: Fn(&S) -> bool,
        H: Heuristic<S, C>,
    {
        self.search(initial, is_target, heuristic).0
    }

    /// Cheapest path from `initial` to any of `targets`
    pub fn shortest_path_to_any<H>(
        &self,
        initial: S,
        targets: &[S],
        heuristic: H,
    ) -> Option<Path<S, C>>
    where
        H: Heuristic<S, C>,
    {
        self.shortest_path(initial, |state| targets.contains(state), heuristic)
    }

    /// Overall cost of the cheapest path, if any
    pub fn shortest_cost<P, H>(&self, initial: S, is_target: P, heuristic: H) -> Option<C>
    where
        P: Fn(&S) -> bool,
        H: Heuristic<S, C>,
    {
        self.shortest_path(initial, is_target, heuristic)
            .map(|path| path.overall_cost())
    }

    /// Run the search and also report its counters
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn search<P, H>(
        &self,
        initial: S,
        is_target: P,
        heuristic: H,
    ) -> (Option<Path<S, C>>, SearchStats)
    where
        P: Fn(&S) -> bool,
        H: Heuristic<S, C>,
    {
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut explored: HashMap<S, C> = HashMap::new();
        let mut stats = SearchStats::default();

        let initial_estimate = heuristic.estimate(&initial);
        explored.insert(initial.clone(), C::ZERO);
        let root = arena.push_root(initial, initial_estimate);
        frontier.push(initial_estimate, root);
        stats.pushed += 1;

        while let Some(entry) = frontier.pop() {
            let node = arena.get(entry.node);
            let cumulative = node.cumulative;

            // A cheaper route to this state was queued after this entry
            if explored
                .get(&node.state)
                .is_some_and(|best| *best < cumulative)
            {
                stats.skipped += 1;
                continue;
            }
            stats.expanded += 1;
            tracing::trace!(
                g = ?cumulative,
                h = ?node.estimate,
                f = ?entry.priority,
                "expand"
            );

            if is_target(&node.state) {
                stats.frontier_peak = frontier.peak();
                let path = arena.path_to(entry.node);
                tracing::debug!(
                    expanded = stats.expanded,
                    pushed = stats.pushed,
                    skipped = stats.skipped,
                    frontier_peak = stats.frontier_peak,
                    cost = ?path.overall_cost(),
                    steps = path.len(),
                    "path_found"
                );
                return (Some(path), stats);
            }

            let successors = self.next_states.next_states(&node.state);
            for successor in successors {
                assert_non_negative(successor.cost);

                let new_cost = cumulative + successor.cost;
                let improves = explored
                    .get(&successor.state)
                    .is_none_or(|best| new_cost < *best);
                if !improves {
                    continue;
                }

                explored.insert(successor.state.clone(), new_cost);
                let estimate = heuristic.estimate(&successor.state);
                let child = arena.push(successor.state, entry.node, successor.cost, estimate);
                frontier.push(new_cost + estimate, child);
                stats.pushed += 1;
            }
        }

        stats.frontier_peak = frontier.peak();
        tracing::debug!(
            expanded = stats.expanded,
            pushed = stats.pushed,
            nodes = arena.len(),
            "no_path"
        );
        (None, stats)
    }
}

impl<N> AStarPathfinder<Coordinate, i64, N>
where
    N: Successors<Coordinate, i64>,
{
    /// Grid search guided by Manhattan distance to the nearest target.
    ///
    /// Admissible whenever every move costs at least 1 per unit of Manhattan
    /// distance travelled, which holds for cardinal moves with costs `>= 1`.
    pub fn shortest_manhattan_path(
        &self,
        initial: Coordinate,
        targets: &[Coordinate],
    ) -> Option<Path<Coordinate, i64>> {
        let heuristic = ManhattanHeuristic::new(targets.to_vec());
        self.shortest_path_to_any(initial, targets, heuristic)
    }
}

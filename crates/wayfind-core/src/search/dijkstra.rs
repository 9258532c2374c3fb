use crate::cost::{assert_non_negative, Cost};
use crate::search::frontier::Frontier;
use crate::search::node::NodeArena;
use crate::search::path::Path;
use crate::search::successors::Successors;
use crate::search::SearchStats;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

/// Uninformed lowest-cost search.
///
/// Lazy-deletion Dijkstra: the same state may sit in the frontier several
/// times, and every pop of an already finalized state is discarded. The
/// returned cost is always minimal; which of several equally cheap paths is
/// returned depends on frontier tie-breaking.
pub struct DijkstraPathfinder<S, C, N> {
    next_states: N,
    _marker: PhantomData<fn(&S) -> C>,
}

impl<S, C, N> DijkstraPathfinder<S, C, N>
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
    /// Returns `None` when no accepting state is reachable.
    ///
    /// # Panics
    /// If the neighbour generator yields a negative move cost.
    pub fn shortest_path<P>(&self, initial: S, is_target: P) -> Option<Path<S, C>>
    where
        P: Fn(&S) -> bool,
    {
        self.search(initial, is_target).0
    }

    /// Cheapest path from `initial` to any of `targets`
    pub fn shortest_path_to_any(&self, initial: S, targets: &[S]) -> Option<Path<S, C>> {
        self.shortest_path(initial, |state| targets.contains(state))
    }

    /// Overall cost of the cheapest path, if any
    pub fn shortest_cost<P>(&self, initial: S, is_target: P) -> Option<C>
    where
        P: Fn(&S) -> bool,
    {
        self.shortest_path(initial, is_target)
            .map(|path| path.overall_cost())
    }

    pub fn shortest_cost_to_any(&self, initial: S, targets: &[S]) -> Option<C> {
        self.shortest_path_to_any(initial, targets)
            .map(|path| path.overall_cost())
    }

    /// Run the search and also report its counters
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn search<P>(&self, initial: S, is_target: P) -> (Option<Path<S, C>>, SearchStats)
    where
        P: Fn(&S) -> bool,
    {
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut finalized: HashSet<S> = HashSet::new();
        let mut stats = SearchStats::default();

        let root = arena.push_root(initial, C::ZERO);
        frontier.push(C::ZERO, root);
        stats.pushed += 1;

        // Main Dijkstra loop
        while let Some(entry) = frontier.pop() {
            let node = arena.get(entry.node);

            // Already have the cheapest route to this state
            if finalized.contains(&node.state) {
                stats.skipped += 1;
                continue;
            }
            finalized.insert(node.state.clone());
            stats.expanded += 1;

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
                if finalized.contains(&successor.state) {
                    continue;
                }

                let child = arena.push(successor.state, entry.node, successor.cost, C::ZERO);
                frontier.push(arena.get(child).cumulative, child);
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

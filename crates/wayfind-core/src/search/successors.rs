//! Callback contracts the engines are parameterized over

use serde::Serialize;

/// A state reachable in one move together with the cost of that move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StateCost<S, C> {
    pub state: S,
    pub cost: C,
}

impl<S, C> StateCost<S, C> {
    pub fn new(state: S, cost: C) -> Self {
        Self { state, cost }
    }
}

impl<S, C> From<(S, C)> for StateCost<S, C> {
    fn from((state, cost): (S, C)) -> Self {
        Self { state, cost }
    }
}

/// Neighbour generator for a state space.
///
/// Called lazily, at most once per expanded state. Must be deterministic and
/// must only return non-negative costs.
pub trait Successors<S, C> {
    fn next_states(&self, state: &S) -> Vec<StateCost<S, C>>;
}

impl<S, C, F> Successors<S, C> for F
where
    F: Fn(&S) -> Vec<StateCost<S, C>>,
{
    fn next_states(&self, state: &S) -> Vec<StateCost<S, C>> {
        self(state)
    }
}

/// Estimate of the remaining cost from a state to the nearest accepting state.
///
/// A* only returns optimal paths when the estimate is admissible (never
/// larger than the true remaining cost) and non-negative. Neither property is
/// checked at runtime.
pub trait Heuristic<S, C> {
    fn estimate(&self, state: &S) -> C;
}

impl<S, C, F> Heuristic<S, C> for F
where
    F: Fn(&S) -> C,
{
    fn estimate(&self, state: &S) -> C {
        self(state)
    }
}

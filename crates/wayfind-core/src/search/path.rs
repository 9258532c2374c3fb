use crate::cost::Cost;
use serde::Serialize;

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathNode<S, C> {
    pub state: S,
    /// Cost of the move into this state (zero for the start)
    pub incremental_cost: C,
    /// Cost from the start up to and including this step
    pub total_cost: C,
}

/// Ordered sequence of states from the initial state to an accepting state.
///
/// Invariant: `total_cost[0] == 0` and
/// `total_cost[i] == total_cost[i - 1] + incremental_cost[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<S, C> {
    nodes: Vec<PathNode<S, C>>,
}

impl<S, C: Cost> Path<S, C> {
    pub(crate) fn new(nodes: Vec<PathNode<S, C>>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[PathNode<S, C>] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<PathNode<S, C>> {
        self.nodes
    }

    pub fn states(&self) -> Vec<S>
    where
        S: Clone,
    {
        self.nodes.iter().map(|n| n.state.clone()).collect()
    }

    /// Total cost of the path; zero for the single-state path
    pub fn overall_cost(&self) -> C {
        self.nodes.last().map_or(C::ZERO, |n| n.total_cost)
    }

    /// Number of states, including the start
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&S> {
        self.nodes.first().map(|n| &n.state)
    }

    pub fn goal(&self) -> Option<&S> {
        self.nodes.last().map(|n| &n.state)
    }

    pub fn contains(&self, state: &S) -> bool
    where
        S: PartialEq,
    {
        self.nodes.iter().any(|n| &n.state == state)
    }

    /// Check the cumulative-cost invariant
    pub fn is_consistent(&self) -> bool {
        let Some(first) = self.nodes.first() else {
            return true;
        };
        if first.total_cost != C::ZERO {
            return false;
        }
        self.nodes
            .windows(2)
            .all(|pair| pair[1].total_cost == pair[0].total_cost + pair[1].incremental_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(state: char, incremental_cost: u32, total_cost: u32) -> PathNode<char, u32> {
        PathNode {
            state,
            incremental_cost,
            total_cost,
        }
    }

    #[test]
    fn test_accessors() {
        let path = Path::new(vec![node('a', 0, 0), node('b', 2, 2), node('c', 3, 5)]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.start(), Some(&'a'));
        assert_eq!(path.goal(), Some(&'c'));
        assert_eq!(path.overall_cost(), 5);
        assert!(path.contains(&'b'));
        assert!(!path.contains(&'z'));
        assert!(path.is_consistent());
    }

    #[test]
    fn test_empty_path_costs_zero() {
        let path: Path<char, u32> = Path::new(Vec::new());
        assert!(path.is_empty());
        assert_eq!(path.overall_cost(), 0);
        assert!(path.is_consistent());
    }

    #[test]
    fn test_inconsistent_totals_detected() {
        let path = Path::new(vec![node('a', 0, 0), node('b', 2, 3)]);
        assert!(!path.is_consistent());

        let shifted = Path::new(vec![node('a', 0, 1)]);
        assert!(!shifted.is_consistent());
    }

    #[test]
    fn test_serializes_nodes() {
        let path = Path::new(vec![node('a', 0, 0), node('b', 1, 1)]);
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json["nodes"][1]["state"], "b");
        assert_eq!(json["nodes"][1]["total_cost"], 1);
    }
}

//! Arena of search nodes linked child-to-parent by index

use crate::cost::Cost;
use crate::search::path::{Path, PathNode};

pub(crate) type NodeId = usize;

/// One discovery of a state. Never mutated after creation; a cheaper route to
/// the same state produces a new node.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode<S, C> {
    pub state: S,
    pub parent: Option<NodeId>,
    /// Cost of the single move from `parent`
    pub move_cost: C,
    /// Cost from the initial state
    pub cumulative: C,
    /// Heuristic estimate to the goal (zero for uninformed search)
    pub estimate: C,
}

#[derive(Debug)]
pub(crate) struct NodeArena<S, C> {
    nodes: Vec<SearchNode<S, C>>,
}

impl<S: Clone, C: Cost> NodeArena<S, C> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push_root(&mut self, state: S, estimate: C) -> NodeId {
        self.nodes.push(SearchNode {
            state,
            parent: None,
            move_cost: C::ZERO,
            cumulative: C::ZERO,
            estimate,
        });
        self.nodes.len() - 1
    }

    pub fn push(&mut self, state: S, parent: NodeId, move_cost: C, estimate: C) -> NodeId {
        let cumulative = self.nodes[parent].cumulative + move_cost;
        self.nodes.push(SearchNode {
            state,
            parent: Some(parent),
            move_cost,
            cumulative,
            estimate,
        });
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> &SearchNode<S, C> {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk parent links from `goal` back to the root and emit start-first.
    pub fn path_to(&self, goal: NodeId) -> Path<S, C> {
        let mut chain = Vec::new();
        let mut current = Some(goal);
        while let Some(id) = current {
            let node = &self.nodes[id];
            chain.push(PathNode {
                state: node.state.clone(),
                incremental_cost: node.move_cost,
                total_cost: node.cumulative,
            });
            current = node.parent;
        }

        chain.reverse();
        Path::new(chain)
    }
}

use crate::cost::Cost;
use crate::search::node::NodeId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Frontier entry ordered by priority, then by insertion order
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapEntry<C> {
    pub priority: C,
    pub sequence: u64,
    pub node: NodeId,
}

impl<C: Cost> PartialEq for HeapEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Cost> Eq for HeapEntry<C> {}

impl<C: Cost> PartialOrd for HeapEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost> Ord for HeapEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Min-priority queue of arena nodes.
///
/// The same state may be queued several times at different priorities; there
/// is no decrease-key. Engines discard stale entries when they are popped.
#[derive(Debug)]
pub(crate) struct Frontier<C> {
    heap: BinaryHeap<Reverse<HeapEntry<C>>>,
    next_sequence: u64,
    peak: usize,
}

impl<C: Cost> Frontier<C> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            peak: 0,
        }
    }

    pub fn push(&mut self, priority: C, node: NodeId) {
        self.heap.push(Reverse(HeapEntry {
            priority,
            sequence: self.next_sequence,
            node,
        }));
        self.next_sequence += 1;
        self.peak = self.peak.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<HeapEntry<C>> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn peak(&self) -> usize {
        self.peak
    }
}

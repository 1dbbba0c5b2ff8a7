use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use lnsim_core::NodeId;

/// Internal heap entry. Ordered so that `BinaryHeap` (a max-heap) pops
/// the smallest weight first, breaking ties by lexicographic node id.
#[derive(Debug, Clone)]
struct HeapEntry {
    weight: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight.to_bits() == other.weight.to_bits() && self.node == other.node
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Inverted: the smallest weight must compare greatest so it pops
        // first from the max-heap. Equal weights fall back to id order,
        // smallest id first, keeping route selection reproducible.
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// A set-backed min-priority queue over node ids keyed by route weight,
/// with decrease-key support.
///
/// The presence set is the source of truth for which nodes are live. An
/// `upsert` of an already-queued node pushes a fresh heap entry instead
/// of removing the old one; since keys only ever decrease during a
/// search, the newest entry for a node pops first and any stale
/// duplicates left behind are discarded lazily on later pops.
#[derive(Debug, Default)]
pub struct UpdatablePrioritySet {
    heap: BinaryHeap<HeapEntry>,
    live: HashSet<NodeId>,
}

impl UpdatablePrioritySet {
    /// Create an empty priority set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` with `weight`, or lower its key if already present.
    /// Amortized O(log n).
    pub fn upsert(&mut self, node: NodeId, weight: f64) {
        self.live.insert(node.clone());
        self.heap.push(HeapEntry { weight, node });
    }

    /// Remove and return the live node with the smallest weight, skipping
    /// invalidated stale entries. Returns `None` when no live node
    /// remains.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            if self.live.remove(&entry.node) {
                return Some(entry.node);
            }
        }
        None
    }

    /// Number of live nodes in the set.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true if no live node remains.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

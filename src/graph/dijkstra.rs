use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use super::{Graph, Predecessors};

/// Every edge costs the same.
const EDGE_COST: u32 = 1;

/// A vertex waiting in the priority queue at a given cost.
/// `seq` orders entries of equal cost by insertion so extraction is deterministic.
struct QueuedVertex<V> {
    cost: u32,
    seq: u64,
    vertex: V,
}

impl<V> PartialEq for QueuedVertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for QueuedVertex<V> {}

impl<V> PartialOrd for QueuedVertex<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for QueuedVertex<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cost, self.seq).cmp(&(other.cost, other.seq))
    }
}

impl<V: Clone + Eq + Hash + Debug> Graph<V> {
    /// Single-source shortest paths from `start` with unit edge costs.
    pub fn dijkstra<P>(&self, start: &V, passable: P) -> Predecessors<V>
    where
        P: Fn(&V) -> bool,
    {
        self.dijkstra_with(start, passable, |_, _| {})
    }

    /// Like [`Graph::dijkstra`], but reports every vertex once, when it is
    /// settled, together with its final cost.
    ///
    /// Only neighbours are checked with `passable`; the start is always
    /// settled. The queue has no decrease-key: an improved vertex is pushed
    /// again and stale entries are skipped when popped. An unknown start
    /// yields an empty map.
    pub fn dijkstra_with<P, F>(&self, start: &V, passable: P, mut on_settle: F) -> Predecessors<V>
    where
        P: Fn(&V) -> bool,
        F: FnMut(&V, u32),
    {
        let mut predecessors = Predecessors::new();
        if !self.contains_vertex(start) {
            return predecessors;
        }

        // Missing entries are at infinite distance
        let mut distances: HashMap<V, u32> = HashMap::from([(start.clone(), 0)]);
        let mut settled = HashSet::new();
        // Using Reverse to turn the max-heap into a min-heap
        let mut queue = BinaryHeap::new();
        let mut seq = 0;
        queue.push(Reverse(QueuedVertex {
            cost: 0,
            seq,
            vertex: start.clone(),
        }));
        predecessors.insert(start.clone(), None);

        while let Some(Reverse(QueuedVertex { cost, vertex, .. })) = queue.pop() {
            if !settled.insert(vertex.clone()) {
                continue;
            }
            on_settle(&vertex, cost);

            let alt = cost.saturating_add(EDGE_COST);
            for neighbor in self.neighbors_or_empty(&vertex) {
                if !passable(neighbor) {
                    continue;
                }
                let is_cheaper = distances.get(neighbor).is_none_or(|&known| alt < known);
                if is_cheaper {
                    distances.insert(neighbor.clone(), alt);
                    predecessors.insert(neighbor.clone(), Some(vertex.clone()));
                    seq += 1;
                    queue.push(Reverse(QueuedVertex {
                        cost: alt,
                        seq,
                        vertex: neighbor.clone(),
                    }));
                }
            }
        }
        predecessors
    }
}

use std::{
    collections::{HashSet, VecDeque},
    fmt::Debug,
    hash::Hash,
};

use super::{Graph, Predecessors};

impl<V: Clone + Eq + Hash + Debug> Graph<V> {
    /// Breadth-first search from `start`.
    ///
    /// The start is always visited, even if it is not passable. Every other
    /// vertex is entered only if `passable` holds for it. Neighbours are
    /// expanded in edge-insertion order, so the first discovery wins when
    /// several shortest paths exist. An unknown start yields an empty map.
    pub fn bfs<P, F>(&self, start: &V, passable: P, mut on_visit: F) -> Predecessors<V>
    where
        P: Fn(&V) -> bool,
        F: FnMut(&V),
    {
        let mut predecessors = Predecessors::new();
        if !self.contains_vertex(start) {
            return predecessors;
        }

        let mut visited = HashSet::from([start.clone()]);
        let mut queue = VecDeque::from([start.clone()]);
        predecessors.insert(start.clone(), None);
        on_visit(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors_or_empty(&current) {
                if visited.contains(neighbor) || !passable(neighbor) {
                    continue;
                }
                visited.insert(neighbor.clone());
                predecessors.insert(neighbor.clone(), Some(current.clone()));
                on_visit(neighbor);
                queue.push_back(neighbor.clone());
            }
        }
        predecessors
    }
}

use std::{collections::HashSet, fmt::Debug, hash::Hash};

use super::{Graph, Predecessors};

impl<V: Clone + Eq + Hash + Debug> Graph<V> {
    /// Depth-first search from `start`.
    ///
    /// If the start itself is not passable nothing is visited at all. Otherwise
    /// unvisited passable neighbours are explored depth-first in edge-insertion
    /// order. Each stack frame keeps a cursor into its neighbour list, so the
    /// visiting order is the same as the recursive formulation without its
    /// depth limit. An unknown start yields an empty map.
    pub fn dfs<P, F>(&self, start: &V, passable: P, mut on_visit: F) -> Predecessors<V>
    where
        P: Fn(&V) -> bool,
        F: FnMut(&V),
    {
        let mut predecessors = Predecessors::new();
        if !self.contains_vertex(start) || !passable(start) {
            return predecessors;
        }

        let mut visited = HashSet::from([start.clone()]);
        predecessors.insert(start.clone(), None);
        on_visit(start);

        // (vertex, index of the next neighbour to look at)
        let mut stack: Vec<(V, usize)> = vec![(start.clone(), 0)];
        while let Some((current, cursor)) = stack.last_mut() {
            let Some(neighbor) = self.neighbors_or_empty(current).get(*cursor) else {
                stack.pop();
                continue;
            };
            *cursor += 1;
            if visited.contains(neighbor) || !passable(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            predecessors.insert(neighbor.clone(), Some(current.clone()));
            on_visit(neighbor);
            stack.push((neighbor.clone(), 0));
        }
        predecessors
    }
}

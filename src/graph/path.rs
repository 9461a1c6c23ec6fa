use std::hash::Hash;

use super::Predecessors;

/// Walks the predecessor chain back from `end` and returns the path from
/// `start` to `end`, both included.
///
/// Returns an empty path if `end` was never reached or its chain does not lead
/// back to `start`.
pub fn reconstruct_path<V: Clone + Eq + Hash>(
    predecessors: &Predecessors<V>,
    start: &V,
    end: &V,
) -> Vec<V> {
    let mut path = Vec::new();
    let mut step = end;
    while let Some(previous) = predecessors.get(step) {
        path.push(step.clone());
        // A chain can't be longer than the map without looping
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        match previous {
            Some(previous) => step = previous,
            None => break,
        }
    }
    if path.last() != Some(start) {
        return Vec::new();
    }
    path.reverse();
    path
}

//! A generic undirected graph and the traversals that run over it.
//!
//! The graph knows nothing about mazes: every traversal takes a `passable`
//! predicate that decides whether a vertex may be entered.

mod bfs;
mod dfs;
mod dijkstra;
mod path;

use std::{
    collections::HashMap,
    fmt::Debug,
    hash::Hash,
};

use crate::error::{Error, Result};
pub use path::reconstruct_path;

/// Vertex reached from, for each vertex a traversal visited.
/// The start vertex maps to `None`.
pub type Predecessors<V> = HashMap<V, Option<V>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Algorithm::Dfs => write!(f, "Depth-First Search (DFS)"),
            Algorithm::Dijkstra => write!(f, "Dijkstra's Algorithm"),
        }
    }
}

/// Undirected adjacency-list graph. Neighbour lists keep edge-insertion order,
/// which decides tie-breaking in every traversal.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, Vec<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph {
            adjacency: HashMap::new(),
        }
    }
}

impl<V: Clone + Eq + Hash + Debug> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex. Adding a vertex that is already present does nothing.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// Parallel edges and self-loops are not filtered out.
    ///
    /// # Errors
    /// [`Error::UnknownVertex`] if either endpoint was never added.
    pub fn add_edge(&mut self, a: V, b: V) -> Result<()> {
        for v in [&a, &b] {
            if !self.contains_vertex(v) {
                return Err(Error::UnknownVertex(format!("{v:?}")));
            }
        }
        if let Some(neighbors) = self.adjacency.get_mut(&a) {
            neighbors.push(b.clone());
        }
        if let Some(neighbors) = self.adjacency.get_mut(&b) {
            neighbors.push(a);
        }
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Neighbours of `vertex` in edge-insertion order, or `None` for an unknown vertex.
    pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    pub fn degree(&self, vertex: &V) -> usize {
        self.neighbors(vertex).map_or(0, <[V]>::len)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    fn neighbors_or_empty(&self, vertex: &V) -> &[V] {
        self.neighbors(vertex).unwrap_or_default()
    }
}

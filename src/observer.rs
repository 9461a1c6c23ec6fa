//! Live progress notifications for traversals.

use std::{fmt::Debug, sync::mpsc::Sender};

use crate::graph::Algorithm;

/// Receives notifications while a traversal runs. All methods default to doing nothing,
/// so implementors only override what they care about.
///
/// Observers are called synchronously, in registration order, and cannot influence the traversal.
pub trait TraversalObserver<V> {
    fn on_started(&mut self, _algorithm: Algorithm) {}
    /// Fired once per visited vertex, in visiting order.
    fn on_vertex_visited(&mut self, _vertex: &V) {}
    /// Fired when a vertex's cost is final (Dijkstra only).
    fn on_vertex_finished(&mut self, _vertex: &V, _cost: u32) {}
    /// `cost` is `None` and `path` empty when the end could not be reached.
    fn on_complete(&mut self, _algorithm: Algorithm, _path: &[V], _cost: Option<u32>) {}
}

impl<V, O: TraversalObserver<V> + ?Sized> TraversalObserver<V> for Box<O> {
    fn on_started(&mut self, algorithm: Algorithm) {
        (**self).on_started(algorithm);
    }

    fn on_vertex_visited(&mut self, vertex: &V) {
        (**self).on_vertex_visited(vertex);
    }

    fn on_vertex_finished(&mut self, vertex: &V, cost: u32) {
        (**self).on_vertex_finished(vertex, cost);
    }

    fn on_complete(&mut self, algorithm: Algorithm, path: &[V], cost: Option<u32>) {
        (**self).on_complete(algorithm, path, cost);
    }
}

/// A notification as a value, for sending to another thread.
#[derive(Debug, Clone, PartialEq)]
pub enum TraversalEvent<V> {
    Started(Algorithm),
    VertexVisited(V),
    VertexFinished { vertex: V, cost: u32 },
    Complete {
        algorithm: Algorithm,
        path: Vec<V>,
        cost: Option<u32>,
    },
}

/// Forwards every notification over the channel. A disconnected receiver is ignored.
impl<V: Clone> TraversalObserver<V> for Sender<TraversalEvent<V>> {
    fn on_started(&mut self, algorithm: Algorithm) {
        let _ = self.send(TraversalEvent::Started(algorithm));
    }

    fn on_vertex_visited(&mut self, vertex: &V) {
        let _ = self.send(TraversalEvent::VertexVisited(vertex.clone()));
    }

    fn on_vertex_finished(&mut self, vertex: &V, cost: u32) {
        let _ = self.send(TraversalEvent::VertexFinished {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn on_complete(&mut self, algorithm: Algorithm, path: &[V], cost: Option<u32>) {
        let _ = self.send(TraversalEvent::Complete {
            algorithm,
            path: path.to_vec(),
            cost,
        });
    }
}

/// Logs every notification through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<V: Debug> TraversalObserver<V> for TracingObserver {
    fn on_started(&mut self, algorithm: Algorithm) {
        tracing::info!("[solve] {} started", algorithm);
    }

    fn on_vertex_visited(&mut self, vertex: &V) {
        tracing::trace!("[solve] visited {:?}", vertex);
    }

    fn on_vertex_finished(&mut self, vertex: &V, cost: u32) {
        tracing::trace!("[solve] finished {:?} at cost {}", vertex, cost);
    }

    fn on_complete(&mut self, algorithm: Algorithm, path: &[V], cost: Option<u32>) {
        match cost {
            Some(cost) => tracing::info!(
                "[solve] {} complete: {} steps, cost {}",
                algorithm,
                path.len().saturating_sub(1),
                cost
            ),
            None => tracing::info!("[solve] {} complete: no path found", algorithm),
        }
    }
}

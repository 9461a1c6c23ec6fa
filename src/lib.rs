pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod maze;
pub mod maze_graph;
pub mod observer;

pub use config::Config;
pub use error::{Error, Result};
pub use graph::{Algorithm, Graph, Predecessors, reconstruct_path};
pub use maze::{Juncture, Maze};
pub use maze_graph::{MazeGraph, Route};
pub use observer::{TracingObserver, TraversalEvent, TraversalObserver};

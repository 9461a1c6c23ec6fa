use rand::Rng;

use crate::{
    graph::{Algorithm, Graph, Predecessors, reconstruct_path},
    maze::{DEFAULT_WALL_PROBABILITY, Juncture, Maze, get_rng},
    observer::TraversalObserver,
};

/// Observer type used when observers of different kinds are mixed.
pub type DynObserver = Box<dyn TraversalObserver<Juncture> + Send>;

/// The outcome of solving the maze with one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub algorithm: Algorithm,
    /// Junctures from start to end, both included. Empty if the end is unreachable.
    pub path: Vec<Juncture>,
    /// Sum of the edge weights along the path, `None` if the end is unreachable.
    pub cost: Option<u32>,
    /// Number of junctures the algorithm visited.
    pub visited: usize,
}

impl Route {
    pub fn is_found(&self) -> bool {
        self.cost.is_some()
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// A maze together with the graph of its open connections.
///
/// The graph has one vertex per cell and an edge between every two neighbouring
/// cells without a wall between them. It is never updated in place; replacing
/// the maze rebuilds it.
pub struct MazeGraph<O = DynObserver> {
    maze: Maze,
    graph: Graph<Juncture>,
    observers: Vec<O>,
}

impl MazeGraph {
    pub fn new(maze: Maze) -> Self {
        MazeGraph::with_observers(maze, Vec::new())
    }
}

impl<O: TraversalObserver<Juncture>> MazeGraph<O> {
    /// Builds the graph for `maze` with observers of a single concrete type.
    pub fn with_observers(maze: Maze, observers: Vec<O>) -> Self {
        let graph = build_graph(&maze);
        MazeGraph {
            maze,
            graph,
            observers,
        }
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: O) {
        self.observers.push(observer);
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn graph(&self) -> &Graph<Juncture> {
        &self.graph
    }

    /// Swaps in a different maze and rebuilds the graph from scratch.
    pub fn replace_maze(&mut self, maze: Maze) {
        self.graph = build_graph(&maze);
        self.maze = maze;
    }

    /// Replaces the maze with a freshly randomized one of the same size.
    pub fn reload(&mut self) {
        self.reload_with(&mut get_rng(None));
    }

    pub fn reload_with<R: Rng>(&mut self, rng: &mut R) {
        let maze = Maze::with_rng(
            self.maze.width(),
            self.maze.height(),
            DEFAULT_WALL_PROBABILITY,
            rng,
        );
        self.replace_maze(maze);
    }

    /// Breadth-first search from `start`, reporting the route to `end` on completion.
    pub fn run_bfs<F: FnMut(&Juncture)>(
        &mut self,
        start: Juncture,
        end: Juncture,
        on_visit: F,
    ) -> Predecessors<Juncture> {
        let predecessors = self.traverse(Algorithm::Bfs, start, on_visit);
        self.complete(Algorithm::Bfs, &predecessors, start, end);
        predecessors
    }

    /// Depth-first search from `start`. A walled start visits nothing.
    pub fn run_dfs<F: FnMut(&Juncture)>(
        &mut self,
        start: Juncture,
        end: Juncture,
        on_visit: F,
    ) -> Predecessors<Juncture> {
        let predecessors = self.traverse(Algorithm::Dfs, start, on_visit);
        self.complete(Algorithm::Dfs, &predecessors, start, end);
        predecessors
    }

    /// Dijkstra from `start`. Observers also get the final cost of every settled juncture.
    pub fn run_dijkstra(&mut self, start: Juncture, end: Juncture) -> Predecessors<Juncture> {
        let predecessors = self.traverse(Algorithm::Dijkstra, start, |_| {});
        self.complete(Algorithm::Dijkstra, &predecessors, start, end);
        predecessors
    }

    /// Runs `algorithm` from `start` and packages the route to `end`.
    pub fn solve(&mut self, algorithm: Algorithm, start: Juncture, end: Juncture) -> Route {
        let mut visited = 0;
        let predecessors = self.traverse(algorithm, start, |_| visited += 1);
        let (path, cost) = self.complete(algorithm, &predecessors, start, end);
        tracing::debug!(
            "[solve] {} from {} to {}: visited {}, path length {}",
            algorithm,
            start,
            end,
            visited,
            path.len()
        );
        Route {
            algorithm,
            path,
            cost,
            visited,
        }
    }

    /// The path from `start` to `end` recorded in `predecessors`, and its cost.
    /// A walled end is never reachable.
    pub fn route_to(
        &self,
        predecessors: &Predecessors<Juncture>,
        start: Juncture,
        end: Juncture,
    ) -> (Vec<Juncture>, Option<u32>) {
        if self.maze.is_wall_at(end) {
            return (Vec::new(), None);
        }
        let path = reconstruct_path(predecessors, &start, &end);
        if path.is_empty() {
            return (path, None);
        }
        let cost = path
            .windows(2)
            .map(|step| self.maze.weight_between(step[0], step[1]))
            .sum::<crate::Result<u32>>()
            .ok();
        (path, cost)
    }

    fn traverse<F: FnMut(&Juncture)>(
        &mut self,
        algorithm: Algorithm,
        start: Juncture,
        mut on_visit: F,
    ) -> Predecessors<Juncture> {
        self.observers
            .iter_mut()
            .for_each(|observer| observer.on_started(algorithm));

        let (maze, graph, observers) = (&self.maze, &self.graph, &mut self.observers);
        let passable = |juncture: &Juncture| !maze.is_wall_at(*juncture);
        match algorithm {
            Algorithm::Bfs | Algorithm::Dfs => {
                let visit = |juncture: &Juncture| {
                    observers
                        .iter_mut()
                        .for_each(|observer| observer.on_vertex_visited(juncture));
                    on_visit(juncture);
                };
                if algorithm == Algorithm::Bfs {
                    graph.bfs(&start, passable, visit)
                } else {
                    graph.dfs(&start, passable, visit)
                }
            }
            Algorithm::Dijkstra => graph.dijkstra_with(&start, passable, |juncture, cost| {
                observers.iter_mut().for_each(|observer| {
                    observer.on_vertex_visited(juncture);
                    observer.on_vertex_finished(juncture, cost);
                });
                on_visit(juncture);
            }),
        }
    }

    fn complete(
        &mut self,
        algorithm: Algorithm,
        predecessors: &Predecessors<Juncture>,
        start: Juncture,
        end: Juncture,
    ) -> (Vec<Juncture>, Option<u32>) {
        let (path, cost) = self.route_to(predecessors, start, end);
        self.observers
            .iter_mut()
            .for_each(|observer| observer.on_complete(algorithm, &path, cost));
        (path, cost)
    }
}

/// One vertex per cell, then an edge to the right and down neighbours where no wall is in between.
fn build_graph(maze: &Maze) -> Graph<Juncture> {
    let mut graph = Graph::new();
    maze.junctures().for_each(|juncture| graph.add_vertex(juncture));
    for from in maze.junctures() {
        for to in [from.right(), from.down()] {
            // Out-of-bounds neighbours are rejected by the wall query
            if maze.is_wall_between(from, to) == Ok(false) {
                graph.add_edge(from, to).ok();
            }
        }
    }
    tracing::debug!(
        "[graph] built graph for {}x{} maze: {} vertices, {} edges",
        maze.width(),
        maze.height(),
        graph.vertex_count(),
        graph.edge_count()
    );
    graph
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        sync::mpsc::{self, Sender},
    };

    use super::*;
    use crate::observer::TraversalEvent;

    fn j(x: i32, y: i32) -> Juncture {
        Juncture::new(x, y)
    }

    fn corner(maze: &Maze) -> Juncture {
        j(maze.width() as i32 - 1, maze.height() as i32 - 1)
    }

    /// Column x = 2 is solid wall, splitting the maze in two.
    const SPLIT: &str = "
        ..#..
        ..#..
        ..#..
        ..#..
        ..#..
    ";

    #[test]
    fn test_open_maze_degrees() {
        let graph = MazeGraph::new(Maze::open(4, 3));
        let graph = graph.graph();
        assert_eq!(graph.vertex_count(), 12);
        // corners
        for c in [j(0, 0), j(3, 0), j(0, 2), j(3, 2)] {
            assert_eq!(graph.degree(&c), 2, "corner {c}");
        }
        // edges
        for e in [j(1, 0), j(2, 0), j(0, 1), j(3, 1), j(1, 2), j(2, 2)] {
            assert_eq!(graph.degree(&e), 3, "edge {e}");
        }
        // interior
        for i in [j(1, 1), j(2, 1)] {
            assert_eq!(graph.degree(&i), 4, "interior {i}");
        }
        assert_eq!(graph.edge_count(), 3 * 3 + 4 * 2);
    }

    #[test]
    fn test_edges_follow_walls() {
        let maze = Maze::seeded(9, 7, 11);
        let graph = MazeGraph::new(maze.clone());
        for a in maze.junctures() {
            let neighbors = graph.graph().neighbors(&a).unwrap();
            // No duplicates
            assert_eq!(
                neighbors.iter().collect::<HashSet<_>>().len(),
                neighbors.len()
            );
            for b in [a.right(), a.down()] {
                if maze.is_in_bounds(b) {
                    let connected = neighbors.contains(&b);
                    assert_eq!(connected, !maze.is_wall_between(a, b).unwrap());
                    assert_eq!(connected, graph.graph().neighbors(&b).unwrap().contains(&a));
                }
            }
        }
    }

    #[test]
    fn test_bfs_open_grid_shortest_hop_count() {
        let mut graph = MazeGraph::new(Maze::open(5, 5));
        let predecessors = graph.run_bfs(j(0, 0), j(4, 4), |_| {});
        let path = reconstruct_path(&predecessors, &j(0, 0), &j(4, 4));
        assert_eq!(path.len() - 1, 8);
        assert_eq!(path.first(), Some(&j(0, 0)));
        assert_eq!(path.last(), Some(&j(4, 4)));
        assert!(path.windows(2).all(|step| step[0].is_adjacent(step[1])));
    }

    #[test]
    fn test_dijkstra_matches_bfs_hop_count() {
        for seed in 0..20 {
            let maze = Maze::seeded(12, 10, seed);
            let (start, end) = (j(0, 0), corner(&maze));
            let mut graph = MazeGraph::new(maze);
            let bfs = graph.solve(Algorithm::Bfs, start, end);
            let dijkstra = graph.solve(Algorithm::Dijkstra, start, end);
            assert_eq!(bfs.is_found(), dijkstra.is_found(), "seed {seed}");
            if bfs.is_found() {
                assert_eq!(bfs.steps(), dijkstra.steps(), "seed {seed}");
                assert_eq!(bfs.cost, dijkstra.cost, "seed {seed}");
            }
        }
    }

    #[test]
    fn test_dfs_walled_start_visits_nothing() {
        let maze = Maze::from_layout(
            "
            ...
            .#.
            ...
            ",
        )
        .unwrap();
        let start = j(1, 1);
        let mut graph = MazeGraph::new(maze);
        // (0, 1) and (1, 0) own open walls towards the start
        assert!(graph.graph().degree(&start) > 0);

        let mut visits = 0;
        let predecessors = graph.run_dfs(start, j(2, 2), |_| visits += 1);
        assert!(predecessors.is_empty());
        assert_eq!(visits, 0);

        // BFS still explores from the walled start
        let predecessors = graph.run_bfs(start, j(2, 2), |_| {});
        assert!(predecessors.len() > 1);
    }

    #[test]
    fn test_unreachable_end() {
        let maze = Maze::from_layout(SPLIT).unwrap();
        let (start, end) = (j(0, 0), j(4, 4));
        let mut graph = MazeGraph::new(maze);

        let predecessors = graph.run_bfs(start, end, |_| {});
        assert!(!predecessors.contains_key(&end));
        let predecessors = graph.run_dfs(start, end, |_| {});
        assert!(!predecessors.contains_key(&end));
        let predecessors = graph.run_dijkstra(start, end);
        assert!(reconstruct_path(&predecessors, &start, &end).is_empty());

        for algorithm in Algorithm::ALL {
            let route = graph.solve(algorithm, start, end);
            assert!(!route.is_found(), "{algorithm}");
            assert!(route.path.is_empty());
            assert_eq!(route.visited, 10, "{algorithm}");
        }
    }

    #[test]
    fn test_walled_end_is_unreachable() {
        let maze = Maze::from_layout("..\n.#").unwrap();
        let mut graph = MazeGraph::new(maze);
        let route = graph.solve(Algorithm::Bfs, j(0, 0), j(1, 1));
        assert!(!route.is_found());
    }

    #[test]
    fn test_route_cost_and_start_equals_end() {
        let mut graph = MazeGraph::new(Maze::open(5, 5));
        let route = graph.solve(Algorithm::Dijkstra, j(0, 0), j(4, 4));
        assert_eq!(route.cost, Some(8));
        assert_eq!(route.visited, 25);

        let route = graph.solve(Algorithm::Dfs, j(2, 2), j(2, 2));
        assert_eq!(route.path, vec![j(2, 2)]);
        assert_eq!(route.cost, Some(0));
        assert_eq!(route.steps(), Some(0));
    }

    #[test]
    fn test_start_outside_maze() {
        let mut graph = MazeGraph::new(Maze::open(3, 3));
        for algorithm in Algorithm::ALL {
            let route = graph.solve(algorithm, j(-1, 0), j(2, 2));
            assert!(!route.is_found());
            assert_eq!(route.visited, 0);
        }
    }

    fn collect_events(
        algorithm: Algorithm,
        maze: Maze,
        start: Juncture,
    ) -> (Vec<TraversalEvent<Juncture>>, Vec<Juncture>, Predecessors<Juncture>) {
        let (sender, receiver) = mpsc::channel();
        let end = corner(&maze);
        let mut graph = MazeGraph::<Sender<_>>::with_observers(maze, vec![sender]);
        let mut order = Vec::new();
        let predecessors = match algorithm {
            Algorithm::Bfs => graph.run_bfs(start, end, |&v| order.push(v)),
            Algorithm::Dfs => graph.run_dfs(start, end, |&v| order.push(v)),
            Algorithm::Dijkstra => graph.run_dijkstra(start, end),
        };
        drop(graph);
        (receiver.iter().collect(), order, predecessors)
    }

    #[test]
    fn test_observer_sees_each_event_once() {
        for algorithm in Algorithm::ALL {
            let (events, order, predecessors) =
                collect_events(algorithm, Maze::seeded(10, 10, 5), j(0, 0));

            assert_eq!(events.first(), Some(&TraversalEvent::Started(algorithm)));
            assert!(matches!(events.last(), Some(TraversalEvent::Complete { .. })));
            let started = events
                .iter()
                .filter(|e| matches!(e, TraversalEvent::Started(_)))
                .count();
            let completed = events
                .iter()
                .filter(|e| matches!(e, TraversalEvent::Complete { .. }))
                .count();
            assert_eq!((started, completed), (1, 1), "{algorithm}");

            let visited = events
                .iter()
                .filter_map(|e| match e {
                    TraversalEvent::VertexVisited(v) => Some(*v),
                    _ => None,
                })
                .collect::<Vec<_>>();
            assert_eq!(visited.len(), predecessors.len(), "{algorithm}");
            assert_eq!(
                visited.iter().collect::<HashSet<_>>().len(),
                visited.len(),
                "{algorithm} reported a juncture twice"
            );
            assert!(visited.iter().all(|v| predecessors.contains_key(v)));
            if algorithm != Algorithm::Dijkstra {
                assert_eq!(visited, order, "{algorithm}");
            }
        }
    }

    #[test]
    fn test_dijkstra_reports_finished_costs() {
        let (events, _, predecessors) =
            collect_events(Algorithm::Dijkstra, Maze::open(3, 3), j(0, 0));
        let finished = events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::VertexFinished { vertex, cost } => Some((*vertex, *cost)),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(finished.len(), predecessors.len());
        for (vertex, cost) in finished {
            let hops = reconstruct_path(&predecessors, &j(0, 0), &vertex).len() as u32 - 1;
            assert_eq!(cost, hops);
            assert_eq!(cost as i32, vertex.x + vertex.y);
        }
        assert_eq!(
            events.last(),
            Some(&TraversalEvent::Complete {
                algorithm: Algorithm::Dijkstra,
                path: reconstruct_path(&predecessors, &j(0, 0), &j(2, 2)),
                cost: Some(4),
            })
        );
    }

    #[test]
    fn test_dfs_walled_start_still_starts_and_completes() {
        let maze = Maze::from_layout("...\n.#.\n...").unwrap();
        let (events, order, _) = collect_events(Algorithm::Dfs, maze, j(1, 1));
        assert!(order.is_empty());
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            TraversalEvent::Complete {
                algorithm: Algorithm::Dfs,
                path: Vec::new(),
                cost: None,
            }
        );
    }

    /// Tags every event with the observer it came from.
    struct Tagged {
        tag: u8,
        sender: Sender<(u8, TraversalEvent<Juncture>)>,
    }

    impl TraversalObserver<Juncture> for Tagged {
        fn on_started(&mut self, algorithm: Algorithm) {
            let _ = self.sender.send((self.tag, TraversalEvent::Started(algorithm)));
        }

        fn on_vertex_visited(&mut self, vertex: &Juncture) {
            let _ = self.sender.send((self.tag, TraversalEvent::VertexVisited(*vertex)));
        }
    }

    #[test]
    fn test_observers_notified_in_registration_order() {
        let (sender, receiver) = mpsc::channel();
        let mut graph = MazeGraph::new(Maze::open(2, 1));
        graph.add_observer(Box::new(Tagged {
            tag: 1,
            sender: sender.clone(),
        }));
        graph.add_observer(Box::new(Tagged { tag: 2, sender }));
        graph.add_observer(Box::new(crate::observer::TracingObserver));
        graph.run_bfs(j(0, 0), j(1, 0), |_| {});
        drop(graph);

        let events = receiver.iter().collect::<Vec<_>>();
        assert_eq!(
            events,
            vec![
                (1, TraversalEvent::Started(Algorithm::Bfs)),
                (2, TraversalEvent::Started(Algorithm::Bfs)),
                (1, TraversalEvent::VertexVisited(j(0, 0))),
                (2, TraversalEvent::VertexVisited(j(0, 0))),
                (1, TraversalEvent::VertexVisited(j(1, 0))),
                (2, TraversalEvent::VertexVisited(j(1, 0))),
            ]
        );
    }

    #[test]
    fn test_reload_rebuilds_graph() {
        let mut graph = MazeGraph::new(Maze::open(6, 4));
        let open_edges = graph.graph().edge_count();
        graph.reload_with(&mut get_rng(Some(9)));
        assert_eq!((graph.maze().width(), graph.maze().height()), (6, 4));
        assert_eq!(graph.graph().vertex_count(), 24);
        assert_eq!(*graph.maze(), Maze::with_rng(6, 4, 0.3, &mut get_rng(Some(9))));
        assert!(graph.graph().edge_count() <= open_edges);

        graph.replace_maze(Maze::open(2, 2));
        assert_eq!(graph.graph().vertex_count(), 4);
        assert_eq!(graph.graph().edge_count(), 4);
    }
}

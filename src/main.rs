use std::io::Write;

use mazegraph::{
    Config, Maze, MazeGraph, Route, TracingObserver, logging,
    maze::{get_rng, tile},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}\n\n{}", Config::USAGE);
            std::process::exit(2);
        }
    };
    let _guard = logging::init_tracing(&config.log_dir)?;
    tracing::info!("[app] starting with {:?}", config);

    let maze = Maze::with_rng(
        config.width,
        config.height,
        config.wall_probability,
        &mut get_rng(config.seed),
    );
    let mut graph = MazeGraph::new(maze);
    graph.add_observer(Box::new(TracingObserver));

    let (start, end) = (config.start(), config.end());
    let mut stdout = std::io::stdout();
    for &algorithm in &config.algorithms {
        let route = graph.solve(algorithm, start, end);
        writeln!(stdout, "{algorithm}")?;
        tile::draw(&mut stdout, graph.maze(), start, end, &route.path)?;
        writeln!(stdout, "{}\n", summary(&route))?;
    }

    tracing::info!("[app] done");
    Ok(())
}

fn summary(route: &Route) -> String {
    match (route.steps(), route.cost) {
        (Some(steps), Some(cost)) => format!(
            "Path found: {} steps, cost {}, {} junctures visited.",
            steps, cost, route.visited
        ),
        _ => format!(
            "No path found to the destination ({} junctures visited).",
            route.visited
        ),
    }
}

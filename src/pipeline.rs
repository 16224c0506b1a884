use std::time::Instant;

use crate::{
    config::MazeConfig,
    generators::{derive_seed, generate_maze, get_rng},
    maze::Maze,
    solvers::{Endpoints, solve_maze},
};

/// A finished maze with its chosen start and end cells.
#[derive(Debug, Clone)]
pub struct Generation {
    maze: Maze,
    seed: u64,
    endpoints: Endpoints,
    kept_walls: usize,
}

impl Generation {
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Seed the maze was generated from, whether given or derived.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    pub fn start(&self) -> usize {
        self.endpoints.start
    }

    pub fn end(&self) -> usize {
        self.endpoints.end
    }

    /// Number of walls left standing inside the maze.
    pub fn kept_walls(&self) -> usize {
        self.kept_walls
    }
}

/// Runs the whole pipeline: shuffle the walls, carve, build the tree, analyze it.
///
/// Each phase runs to completion before the next one starts. Phase timings are logged at info
/// level.
pub fn generate(config: &MazeConfig) -> Generation {
    let seed = config.seed().unwrap_or_else(derive_seed);
    tracing::info!(
        columns = config.columns(),
        rows = config.rows(),
        seed,
        wall_order = %config.wall_order(),
        "generating maze"
    );

    let mut rng = get_rng(seed);
    let mut maze = timed("allocate cells", || {
        Maze::new(config.columns(), config.rows())
    });
    let kept = generate_maze(&mut maze, config.wall_order(), &mut rng);
    let endpoints = solve_maze(&maze);
    tracing::info!(
        start = ?maze.grid().coords(endpoints.start),
        end = ?maze.grid().coords(endpoints.end),
        length = endpoints.length,
        "picked endpoints"
    );

    Generation {
        maze,
        seed,
        endpoints,
        kept_walls: kept.len(),
    }
}

/// Runs one phase of the pipeline inside its own span and logs how long it took.
pub fn timed<T>(phase: &'static str, f: impl FnOnce() -> T) -> T {
    let _span = tracing::info_span!("phase", name = phase).entered();
    let started = Instant::now();
    let output = f();
    tracing::info!(
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "{phase} done"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::WallOrder;

    #[test]
    fn test_generate_reports_given_seed() {
        let config = MazeConfig::new(4, 6).unwrap().with_seed(Some(9));
        let generation = generate(&config);
        assert_eq!(generation.seed(), 9);
        assert_eq!(generation.maze().open_wall_count(), 23);
        assert_eq!(
            generation.kept_walls(),
            generation.maze().grid().wall_count() - 23
        );
    }

    #[test]
    fn test_generate_derives_seed_and_reproduces() {
        let config = MazeConfig::new(5, 5).unwrap();
        let first = generate(&config);
        let again = generate(&config.with_seed(Some(first.seed())));
        assert_eq!(first.maze(), again.maze());
        assert_eq!(first.endpoints(), again.endpoints());
    }

    #[test]
    fn test_wall_order_is_honored() {
        let config = MazeConfig::new(8, 8).unwrap().with_seed(Some(2));
        let shuffled = generate(&config);
        let scattered = generate(&config.with_wall_order(WallOrder::Buckets));
        assert_eq!(scattered.maze().open_wall_count(), 63);
        assert_ne!(shuffled.maze(), scattered.maze());
    }
}

pub mod diameter;
pub mod tree;

pub use diameter::{Subtree, TreeAnalysis, analyze};
pub use tree::RootedTree;

use crate::{maze::Maze, pipeline::timed};

/// Start and end of the longest branch-weighted path of a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub start: usize,
    pub end: usize,
    /// Weighted length of the path between them.
    pub length: u64,
}

/// Picks the start and end cells of a carved maze: the two ends of its longest path, where every
/// step out of a junction counts once per branch of that junction.
///
/// # Panics
/// If the open sides of `maze` do not connect every cell.
pub fn solve_maze(maze: &Maze) -> Endpoints {
    let tree = timed("build tree", || RootedTree::build(maze, 0));
    assert!(
        tree.is_spanning(),
        "maze is not connected: reached {} of {} cells",
        tree.len(),
        maze.len()
    );
    assert_eq!(tree.edge_count(), maze.len() - 1);

    let analysis = timed("analyze tree", || analyze(&tree));
    let (start, end) = analysis.endpoints();
    Endpoints {
        start,
        end,
        length: analysis.length(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{WallOrder, generate_maze, get_rng};
    use crate::maze::Wall;

    #[test]
    fn test_solve_small_maze() {
        let mut maze = Maze::new(2, 2);
        generate_maze(&mut maze, WallOrder::Shuffle, &mut get_rng(1));
        let endpoints = solve_maze(&maze);
        assert!(endpoints.start < 4 && endpoints.end < 4);
        assert_ne!(endpoints.start, endpoints.end);
        assert!(endpoints.length >= 3);
    }

    #[test]
    fn test_endpoints_of_corridor() {
        // Corridor (0,0) - (0,1) - (1,1) - (1,0): the ends are the two bottom cells.
        let mut maze = Maze::new(2, 2);
        for (lower, higher) in [(0, 1), (1, 3), (2, 3)] {
            maze.open_wall(Wall { lower, higher });
        }
        let endpoints = solve_maze(&maze);
        assert_eq!((endpoints.start, endpoints.end), (2, 0));
        assert_eq!(endpoints.length, 4);
    }

    #[test]
    #[should_panic(expected = "not connected")]
    fn test_uncarved_maze_panics() {
        solve_maze(&Maze::new(3, 3));
    }
}

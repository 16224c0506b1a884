use crate::{
    generators::union_find::UnionFind,
    maze::{Maze, Wall},
};

/// Carves a perfect maze out of `maze` by visiting `walls` in the given order and removing
/// every wall whose cells are not yet connected.
///
/// Returns the walls left standing, in visiting order.
///
/// # Panics
/// If the walls do not connect the whole grid, or if a wall has a cell outside of the maze.
pub fn randomized_kruskal(maze: &mut Maze, walls: &[Wall]) -> Vec<Wall> {
    let mut uf = UnionFind::new(maze.len());
    let mut kept = Vec::with_capacity(walls.len().saturating_sub(maze.len()));
    let mut opened = 0usize;

    for &wall in walls {
        let lower = uf.find(wall.lower);
        let higher = uf.find(wall.higher);
        if lower != higher {
            maze.open_wall(wall);
            uf.union(lower, higher);
            opened += 1;
        } else {
            // Removing it would close a cycle
            kept.push(wall);
        }
    }

    assert_eq!(
        uf.components(),
        1,
        "carving left {} disconnected components",
        uf.components()
    );
    assert_eq!(opened, maze.len() - 1);
    tracing::debug!(opened, kept = kept.len(), "carved spanning tree");
    kept
}

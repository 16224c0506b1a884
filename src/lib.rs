//! Random perfect mazes on a hexagonal grid.
//!
//! Walls between neighboring cells are visited in random order and knocked down unless that would
//! close a loop (randomized Kruskal). The resulting spanning tree is then rooted and searched for
//! its longest path, weighting every step out of a junction by the number of branches there, and
//! the two ends of that path become the start and end of the maze.

pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod pipeline;
pub mod render;
pub mod solvers;

pub use config::MazeConfig;
pub use error::MazeError;
pub use pipeline::{Generation, generate};

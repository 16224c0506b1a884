use std::time::{SystemTime, UNIX_EPOCH};

use rand::{SeedableRng, rngs::StdRng};

pub mod kruskal;
pub mod union_find;
pub mod walls;

pub use kruskal::randomized_kruskal;
pub use union_find::UnionFind;
pub use walls::{WallOrder, randomize_walls};

use crate::{
    maze::{Maze, Wall},
    pipeline::timed,
};

/// Get a random number generator seeded for reproducibility.
pub fn get_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seed derived from the clock and the process id, for runs where the caller gave none.
/// The result always fits in 63 bits so it survives a round trip through a signed integer.
pub fn derive_seed() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let mixed = now.as_secs().wrapping_shl(20)
        ^ u64::from(now.subsec_nanos())
        ^ u64::from(std::process::id()).wrapping_shl(40);
    mixed & (u64::MAX >> 1)
}

/// Randomizes every candidate wall of `maze` and carves a perfect maze out of it.
///
/// Returns the walls left standing.
pub fn generate_maze(maze: &mut Maze, order: WallOrder, rng: &mut StdRng) -> Vec<Wall> {
    let mut walls = timed("enumerate walls", || maze.grid().walls());
    timed("shuffle walls", || randomize_walls(&mut walls, order, rng));
    timed("carve maze", || randomized_kruskal(maze, &walls))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_seed_is_positive() {
        for _ in 0..10 {
            assert!(derive_seed() <= i64::MAX as u64);
        }
    }

    #[test]
    fn test_generate_maze_is_reproducible() {
        let mut a = Maze::new(5, 8);
        let mut b = Maze::new(5, 8);
        let kept_a = generate_maze(&mut a, WallOrder::Buckets, &mut get_rng(17));
        let kept_b = generate_maze(&mut b, WallOrder::Buckets, &mut get_rng(17));
        assert_eq!(a, b);
        assert_eq!(kept_a, kept_b);
        assert_eq!(a.open_wall_count(), 39);
    }
}

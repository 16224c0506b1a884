use rand::{Rng, seq::SliceRandom};

use crate::maze::Wall;

/// Number of bins used by [`WallOrder::Buckets`] on each pass.
const BUCKETS: usize = 1024;
/// Number of redistribution passes used by [`WallOrder::Buckets`].
const BUCKET_PASSES: usize = 3;

/// How candidate walls are put in random order before carving.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WallOrder {
    /// Fisher-Yates shuffle: every permutation is equally likely.
    #[default]
    Shuffle,
    /// Three passes of scattering the walls into 1024 random bins, read back in bin order.
    ///
    /// Roughly equivalent to sorting on a random 30-bit key. Not proven uniform.
    Buckets,
}

impl std::fmt::Display for WallOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WallOrder::Shuffle => write!(f, "Fisher-Yates shuffle"),
            WallOrder::Buckets => write!(f, "3-pass bucket scatter"),
        }
    }
}

/// Puts `walls` in random order.
pub fn randomize_walls<R: Rng>(walls: &mut Vec<Wall>, order: WallOrder, rng: &mut R) {
    match order {
        WallOrder::Shuffle => walls.shuffle(rng),
        WallOrder::Buckets => scatter_walls(walls, rng),
    }
}

fn scatter_walls<R: Rng>(walls: &mut Vec<Wall>, rng: &mut R) {
    let mut buckets: Vec<Vec<Wall>> = vec![Vec::new(); BUCKETS];
    let mut spare: Vec<Vec<Wall>> = vec![Vec::new(); BUCKETS];

    for wall in walls.drain(..) {
        buckets[rng.random_range(0..BUCKETS)].push(wall);
    }
    for _ in 1..BUCKET_PASSES {
        for bucket in buckets.iter_mut() {
            // Most recently dropped first, like popping a stack of cards.
            while let Some(wall) = bucket.pop() {
                spare[rng.random_range(0..BUCKETS)].push(wall);
            }
        }
        std::mem::swap(&mut buckets, &mut spare);
    }
    for mut bucket in buckets {
        bucket.reverse();
        walls.append(&mut bucket);
    }
}

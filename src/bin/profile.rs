use std::time::Instant;

use hexmaze::{
    MazeConfig, MazeError,
    config::MAX_DIMENSION,
    generate,
};
use tracing::level_filters::LevelFilter;

fn main() -> Result<(), MazeError> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(3);

    let config = MazeConfig::new(MAX_DIMENSION, MAX_DIMENSION)?;
    for iteration in 0..num_iters {
        let started = Instant::now();
        let generation = generate(&config);
        tracing::info!(
            iteration,
            seed = generation.seed(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "generated {MAX_DIMENSION}x{MAX_DIMENSION} maze"
        );
    }
    Ok(())
}

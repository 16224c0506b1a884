use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use hexmaze::{
    MazeConfig, MazeError, generate, generators::WallOrder, pipeline::timed,
    render::write_postscript,
};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

/// Draw a random hexagonal maze as PostScript.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of columns, from 2 to 1000
    columns: u32,

    /// Number of rows, from 2 to 1000
    rows: u32,

    /// Seed for the random number generator; derived from the clock when omitted
    seed: Option<u64>,

    /// Write the PostScript to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How candidate walls are put in random order
    #[arg(value_enum, long, default_value_t = WallOrder::Shuffle)]
    wall_order: WallOrder,

    /// Log more: -d for phase timings, -dd for debug, -ddd for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Write logs to this file instead of standard error
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_logging(verbosity: u8, log_file: Option<&Path>) -> io::Result<WorkerGuard> {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let (writer, guard) = match log_file {
        Some(path) => tracing_appender::non_blocking(File::create(path)?),
        None => tracing_appender::non_blocking(io::stderr()),
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(filter)
        .with_target(false)
        .with_ansi(log_file.is_none())
        .init();
    Ok(guard)
}

fn run(args: &Args) -> Result<(), MazeError> {
    let config = MazeConfig::new(args.columns, args.rows)?
        .with_seed(args.seed)
        .with_wall_order(args.wall_order);
    let generation = generate(&config);
    // Always reported, so any run can be reproduced.
    eprintln!("seed={}", generation.seed());

    timed("print maze", || -> Result<(), MazeError> {
        match &args.output {
            Some(path) => {
                let mut out = BufWriter::new(File::create(path)?);
                write_postscript(&mut out, &generation)?;
                out.flush()?;
            }
            None => {
                let mut out = BufWriter::new(io::stdout().lock());
                write_postscript(&mut out, &generation)?;
                out.flush()?;
            }
        }
        Ok(())
    })
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match setup_logging(args.debug, args.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: cannot open log file: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

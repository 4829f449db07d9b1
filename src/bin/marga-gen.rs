//! CLI tool for generating random maze files.
//!
//! Writes `maze_<n>.json` descriptions into a directory, ready for
//! `marga-solve`. A fixed seed reproduces the same corpus.
//!
//! # Usage
//!
//! ```bash
//! marga-gen --count 20 --out-dir tests-data
//! marga-gen --seed 42 --min-rows 10 --max-rows 30 --obstacle-percent 40
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use marga_search::{GeneratorConfig, MazeGenerator, Result};

/// Generate random maze description files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How many mazes to generate (1 to 100)
    #[arg(short, long, default_value_t = 10)]
    count: u32,

    /// Directory the maze files are written into
    #[arg(short, long, default_value = "tests-data")]
    out_dir: PathBuf,

    /// Seed for reproducible generation; drawn from the OS when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Smallest allowed row count
    #[arg(long)]
    min_rows: Option<i32>,

    /// Largest allowed row count
    #[arg(long)]
    max_rows: Option<i32>,

    /// Smallest allowed column count
    #[arg(long)]
    min_cols: Option<i32>,

    /// Largest allowed column count
    #[arg(long)]
    max_cols: Option<i32>,

    /// Share of cells turned into obstacles, 0 to 100
    #[arg(long)]
    obstacle_percent: Option<u32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = GeneratorConfig::default();
    if let Some(v) = args.min_rows {
        config.min_rows = v;
    }
    if let Some(v) = args.max_rows {
        config.max_rows = v;
    }
    if let Some(v) = args.min_cols {
        config.min_cols = v;
    }
    if let Some(v) = args.max_cols {
        config.max_cols = v;
    }
    if let Some(v) = args.obstacle_percent {
        config.obstacle_percent = v;
    }

    let count = args.count.clamp(1, 100);
    if count != args.count {
        warn!("count {} clamped to {}", args.count, count);
    }

    let generator = MazeGenerator::new(config)?;
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    std::fs::create_dir_all(&args.out_dir)?;
    info!("writing {} mazes to {}", count, args.out_dir.display());

    for i in 1..=count {
        let spec = generator.generate_with(&mut rng);
        let path = args.out_dir.join(format!("maze_{i}.json"));
        spec.save(&path)?;
        println!(
            "{}: {}x{}, {} obstacles",
            path.display(),
            spec.n_rows,
            spec.n_columns,
            spec.obstacles.len()
        );
    }
    Ok(())
}

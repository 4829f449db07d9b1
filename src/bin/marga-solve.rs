//! CLI tool for solving maze files.
//!
//! Loads one or more JSON maze descriptions and runs every requested
//! algorithm and heuristic combination over each of them, printing one
//! report block per run or a single JSON array covering all of them.
//!
//! # Usage
//!
//! ```bash
//! marga-solve maze.json
//! marga-solve --algorithm astar --heuristic euclidean maze.json
//! marga-solve --json --output results.json tests-data/maze_1.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{debug, error};

use marga_search::{solve, Algorithm, Grid, Heuristic, MazeSpec, Result};

/// Run search algorithms over maze files and report the results
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze description files (JSON)
    #[arg(required = true)]
    mazes: Vec<PathBuf>,

    /// Algorithm to run (dfs, bfs, astar, greedy, all)
    #[arg(short, long, default_value = "all")]
    algorithm: String,

    /// Heuristic for the informed algorithms (chebyshev, manhattan,
    /// euclidean, all)
    #[arg(long, default_value = "all")]
    heuristic: String,

    /// Emit one JSON array instead of text blocks
    #[arg(long)]
    json: bool,

    /// Write results to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
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
    let combos = combos(args)?;

    let mut text = String::new();
    let mut entries = Vec::new();

    for path in &args.mazes {
        let spec = MazeSpec::load(path)?;
        let mut grid = Grid::from_spec(&spec)?;
        debug!("{}:\n{}", path.display(), grid.render());

        if !args.json {
            text.push_str(&format!(
                "Maze {} ({}x{}, {} obstacles)\n\n",
                path.display(),
                spec.n_rows,
                spec.n_columns,
                spec.obstacles.len()
            ));
        }

        for &(algorithm, heuristic) in &combos {
            let report = solve(&mut grid, algorithm, heuristic)?;
            if args.json {
                entries.push(serde_json::json!({
                    "maze": path.display().to_string(),
                    "algorithm": algorithm.name(),
                    "heuristic": heuristic.map(|h| h.name()),
                    "report": report,
                }));
            } else {
                match heuristic {
                    Some(h) => text.push_str(&format!("[{algorithm} / {h}]\n")),
                    None => text.push_str(&format!("[{algorithm}]\n")),
                }
                text.push_str(&format!("{report}\n\n"));
            }
        }
    }

    let out = if args.json {
        let mut s = serde_json::to_string_pretty(&entries)?;
        s.push('\n');
        s
    } else {
        text
    };

    match &args.output {
        Some(path) => std::fs::write(path, out)?,
        None => print!("{out}"),
    }
    Ok(())
}

fn combos(args: &Args) -> Result<Vec<(Algorithm, Option<Heuristic>)>> {
    let algorithms: Vec<Algorithm> = if args.algorithm.eq_ignore_ascii_case("all") {
        Algorithm::ALL.to_vec()
    } else {
        vec![args.algorithm.parse()?]
    };
    let heuristics: Vec<Heuristic> = if args.heuristic.eq_ignore_ascii_case("all") {
        Heuristic::ALL.to_vec()
    } else {
        vec![args.heuristic.parse()?]
    };

    let mut out = Vec::new();
    for &algorithm in &algorithms {
        if algorithm.uses_heuristic() {
            for &heuristic in &heuristics {
                out.push((algorithm, Some(heuristic)));
            }
        } else {
            out.push((algorithm, None));
        }
    }
    Ok(out)
}

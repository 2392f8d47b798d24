//! Solve a tree spanning problem from the command line.
//!
//! Usage:
//!     tree-spanner -a dfw -t 0,0 0,1 1,0 1,1 -v 0.5,0.5
//!     tree-spanner -a bfmst -r --tcount 5 --vcount 6 --seed 3 --time
//!     tree-spanner -a dfw -r --tcount 6 --vcount 10 -p | python plotter.py

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use tree_spanner::instance::{random_instance, InstanceParams};
use tree_spanner::plot::write_plottable;
use tree_spanner::{Algorithm, DistanceMetric, Point, Spanner, SpannerConfig};

/// Connect terminal points with a minimum length tree, optionally through extra vertices
#[derive(Parser, Debug)]
#[command(name = "tree-spanner")]
#[command(version)]
#[command(about = "Minimum spanning trees and exact Steiner trees in the plane", long_about = None)]
struct Cli {
    /// The algorithm to run: Dreyfus-Wagner (dfw), minimum spanning tree (mst) or brute force
    /// minimum spanning trees over subsets of the optional vertices (bfmst)
    #[arg(short, long, default_value = "mst")]
    algorithm: Algorithm,

    /// Function to calculate the distance between vertices
    #[arg(short, long = "distance-function", default_value = "euclidean")]
    distance_function: DistanceMetric,

    /// Terminal vertices in the form x1,y1 x2,y2 ...
    #[arg(short, long, num_args = 1..)]
    terminals: Vec<Point<f64>>,

    /// Optional vertices, same format as terminals
    #[arg(short = 'v', long = "vertices", num_args = 1..)]
    optionals: Vec<Point<f64>>,

    /// Draw terminals and optional vertices at random instead
    #[arg(short, long)]
    random: bool,

    /// Number of terminals to draw, use with -r
    #[arg(long, default_value_t = 0)]
    tcount: usize,

    /// Number of optional vertices to draw, use with -r
    #[arg(long, default_value_t = 0)]
    vcount: usize,

    /// Minimum x coordinate to draw, use with -r
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    xmin: f64,

    /// Maximum x coordinate to draw, use with -r
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    xmax: f64,

    /// Minimum y coordinate to draw, use with -r
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    ymin: f64,

    /// Maximum y coordinate to draw, use with -r
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    ymax: f64,

    /// Random seed to use
    #[arg(long)]
    seed: Option<u64>,

    /// Measure the time of the solution
    #[arg(long)]
    time: bool,

    /// Suppress output
    #[arg(short, long)]
    quiet: bool,

    /// Output only the plottable stream of points and edges
    #[arg(short, long)]
    plottable: bool,

    /// Log solver diagnostics to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let (terminals, optionals) = if cli.random {
        random_instance(&InstanceParams {
            terminal_count: cli.tcount,
            optional_count: cli.vcount,
            x_range: (cli.xmin, cli.xmax),
            y_range: (cli.ymin, cli.ymax),
            seed: cli.seed,
        })
    } else {
        (cli.terminals.clone(), cli.optionals.clone())
    };

    let config = SpannerConfig::builder()
        .algorithm(cli.algorithm)
        .dist_metric(cli.distance_function)
        .build();
    let spanner = Spanner::new(&terminals, &optionals, config);
    let chatty = !(cli.quiet || cli.plottable);

    if chatty {
        println!(
            "Tree to span has {} terminal(s) and {} optional node(s).",
            terminals.len(),
            optionals.len()
        );
        println!("Solution is searched with: {}", cli.algorithm);
    }

    let (result, elapsed) = measure_time(|| spanner.solve());
    let solution = result.context("failed to solve")?;

    if cli.time && chatty {
        println!("Solution took {} s", elapsed.as_secs_f64());
    }

    if chatty {
        println!("Edges:");
        for edge in &solution.edges {
            println!("\t{edge}");
        }
        println!("Total edge length: {:.2}", solution.total_cost);
    }

    if cli.plottable {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_plottable(
            &mut out,
            cli.algorithm.name(),
            spanner.terminals(),
            spanner.optionals(),
            &solution,
        )
        .context("failed to write plottable output")?;
        out.flush()?;
    }
    Ok(())
}

// measure running time of a closure
fn measure_time<F: FnOnce() -> R, R>(closure: F) -> (R, Duration) {
    let before = Instant::now();
    let result = closure();
    (result, before.elapsed())
}

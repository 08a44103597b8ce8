//! Command-line interface for the swarmopt library
//!
//! This binary runs the particle swarm optimizer against bundled benchmark
//! objectives and can export the full iteration trace for an external
//! visualization layer.
//!
//! # Usage
//!
//! ```bash
//! # Optimize the shifted parabola with a reproducible seed
//! swarmopt run --objective parabola --particles 30 --iterations 100 --seed 42
//!
//! # Export the iteration trace as JSON
//! swarmopt run --objective ripple --trace-out trace.json
//!
//! # List the bundled benchmark objectives
//! swarmopt benchmarks
//! ```

use std::{fs::File, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use swarmopt::{
    benchmarks::{rippled_bowl, shifted_parabola},
    objective::Minimize,
    observer::CallbackObserver,
    swarm::SwarmBuilder,
};
use tabled::{Table, Tabled};

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Run the optimizer against a benchmark objective
    Run {
        /// Benchmark objective to minimize
        #[arg(short, long, value_enum, default_value_t = Objective::Parabola)]
        objective: Objective,

        /// Number of particles in the swarm
        #[arg(short, long, default_value_t = 30)]
        particles: usize,

        /// Number of iteration passes
        #[arg(short, long, default_value_t = 100)]
        iterations: usize,

        /// Lower bound of the initial sampling interval
        #[arg(long, default_value_t = -100.0, allow_negative_numbers = true)]
        lower: f64,

        /// Upper bound of the initial sampling interval
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        upper: f64,

        /// Inertia weight w
        #[arg(long, default_value_t = 0.8)]
        inertia: f64,

        /// Cognitive (personal-best attraction) coefficient c1
        #[arg(long, default_value_t = 0.1)]
        cognitive: f64,

        /// Social (swarm-best attraction) coefficient c2
        #[arg(long, default_value_t = 0.1)]
        social: f64,

        /// Seed for the random source, for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to save the iteration trace to, as JSON
        #[arg(short, long)]
        trace_out: Option<PathBuf>,
    },
    /// List the bundled benchmark objectives
    Benchmarks,
}

/// Bundled benchmark objectives, stated in minimization convention
#[derive(Clone, Copy, ValueEnum)]
enum Objective {
    /// Shifted parabola (x - 3)^2
    Parabola,
    /// Rippled bowl x^2/20 + 1 - cos(3x)
    Ripple,
}

impl Objective {
    fn function(self) -> fn(f64) -> f64 {
        match self {
            Objective::Parabola => shifted_parabola,
            Objective::Ripple => rippled_bowl,
        }
    }
}

/// Row of the benchmark listing table
#[derive(Tabled)]
struct BenchmarkRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Definition")]
    definition: &'static str,
    #[tabled(rename = "Global minimum")]
    minimum: &'static str,
}

pub fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Run {
            objective,
            particles,
            iterations,
            lower,
            upper,
            inertia,
            cognitive,
            social,
            seed,
            trace_out,
        } => {
            let mut builder = SwarmBuilder::default(*lower, *upper)
                .pop_size(*particles)
                .max_iters(*iterations)
                .inertia(*inertia)
                .cognitive(*cognitive)
                .social(*social);
            if let Some(seed) = seed {
                builder = builder.seed(*seed);
            }

            let mut optimizer = builder
                .build(Minimize(objective.function()))
                .expect("Invalid swarm configuration");

            let bar = ProgressBar::new(*iterations as u64);
            bar.set_style(
                ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                    .expect("Invalid progress template"),
            );
            let progress = bar.clone();
            optimizer.add_observer(Box::new(CallbackObserver {
                callback: Box::new(move |snapshot| {
                    progress.set_message(format!("best {:.6}", snapshot.best_fitness));
                    progress.inc(1);
                }),
            }));

            optimizer.initialize().expect("Failed to initialize swarm");
            let report = optimizer.run().expect("Optimization failed");
            bar.finish_and_clear();

            println!(
                "{} position {:.6} with objective value {:.6} after {} iterations ({} evaluations)",
                "best:".green().bold(),
                report.best_position,
                -report.best_fitness,
                report.iterations,
                report.evaluations
            );
            if let Some(last) = report.trace.last() {
                println!(
                    "final particle positions: {}",
                    last.positions.iter().map(|p| format!("{p:.4}")).join(", ")
                );
            }

            if let Some(path) = trace_out {
                let file = File::create(path).expect("Failed to create trace file");
                serde_json::to_writer_pretty(file, &report.trace)
                    .expect("Failed to serialize trace to JSON");
                println!("trace written to {}", path.display());
            }
        }
        Commands::Benchmarks => {
            let rows = vec![
                BenchmarkRow {
                    name: "parabola",
                    definition: "(x - 3)^2",
                    minimum: "0 at x = 3",
                },
                BenchmarkRow {
                    name: "ripple",
                    definition: "x^2/20 + 1 - cos(3x)",
                    minimum: "0 at x = 0",
                },
            ];
            println!("{}", Table::new(rows));
        }
    }
}

//! Run one elevator scenario from a TOML file.
//!
//! ```text
//! sample_run demos/sample_run/scenario.toml --rounds 20 --frame-ms 250
//! sample_run demos/sample_run/scenario.toml --algorithm pushy_passenger --csv-dir out/
//! ```
//!
//! Set `RUST_LOG=debug` for per-round summaries.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use lift_output::{CsvWriter, SimOutputObserver, TextRenderer};
use lift_policy::MovementKind;
use lift_sim::ScenarioConfig;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "sample_run", about = "Round-based elevator simulation")]
struct Cli {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Number of rounds to simulate
    #[arg(long, default_value_t = 15)]
    rounds: u64,

    /// Override the scenario's moving_algorithm
    #[arg(long)]
    algorithm: Option<MovementKind>,

    /// Override the scenario's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Draw every round even if the scenario turns visualization off
    #[arg(long)]
    visualize: bool,

    /// Milliseconds per pause unit between frames
    #[arg(long, default_value_t = 0)]
    frame_ms: u64,

    /// Write round_summaries.csv and run_stats.csv into this directory
    #[arg(long)]
    csv_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut scenario = ScenarioConfig::from_path(&cli.scenario)
        .with_context(|| format!("loading {}", cli.scenario.display()))?;
    if let Some(kind) = cli.algorithm {
        scenario.moving_algorithm = kind;
    }
    if let Some(seed) = cli.seed {
        scenario.seed = seed;
    }
    scenario.visualize |= cli.visualize;

    log::info!(
        "{} floors, {} elevators of capacity {}, dispatch: {}",
        scenario.num_floors,
        scenario.num_elevators,
        scenario.elevator_capacity,
        scenario.moving_algorithm,
    );

    let mut sim = scenario.build()?;
    let mut text = TextRenderer::new(io::stdout().lock())
        .with_frame_delay(Duration::from_millis(cli.frame_ms));

    let stats = match &cli.csv_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let mut csv = SimOutputObserver::new(CsvWriter::new(dir)?);
            let stats = sim.run(cli.rounds, &mut (&mut text, &mut csv))?;
            if let Some(e) = csv.take_error() {
                return Err(e).context("writing CSV output");
            }
            stats
        }
        None => sim.run(cli.rounds, &mut text)?,
    };
    if let Some(e) = text.take_error() {
        return Err(e).context("writing to stdout");
    }

    if stats.people_completed == 0 {
        log::warn!("nobody reached their floor in {} rounds", stats.num_iterations);
    }
    Ok(())
}

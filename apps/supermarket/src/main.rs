//! supermarket — command-line driver for the checkout lane simulator.
//!
//! Runs the five-regular-lane, one-self-service-lane store from the default
//! config (or a JSON file) and prints lane status after every interval.
//! Without `--intervals` the run is interactive: after each interval it asks
//! whether to end the simulation.
//!
//! ```text
//! supermarket --intervals 20 --seed 7 --output ./out
//! RUST_LOG=debug supermarket --config store.json
//! ```

mod prompt;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use checkout_core::CheckoutConfig;
use checkout_output::{CsvWriter, OutputWriter, SimOutputObserver, TextReporter};
use checkout_lane::AssignmentPolicy;
use checkout_sim::{CheckoutObserver, RunSummary, Sim, SimBuilder, StopAfter};

use prompt::PromptStop;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "supermarket")]
#[command(about = "Simulate customers queueing at supermarket checkout lanes")]
struct Args {
    /// JSON config file; fields it omits keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many intervals instead of prompting
    #[arg(short = 'n', long)]
    intervals: Option<u64>,

    /// Sleep one tick duration of wall time per tick
    #[arg(long)]
    realtime: bool,

    /// Directory for lane_snapshots.csv and interval_summaries.csv
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write output.db instead of CSV files (needs --output)
    #[cfg(feature = "sqlite")]
    #[arg(long, requires = "output")]
    sqlite: bool,
}

fn load_config(args: &Args) -> Result<CheckoutConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CheckoutConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    stamp_start(&mut config);
    Ok(config)
}

/// Start the clock now unless the config file pins a start time.
fn stamp_start(config: &mut CheckoutConfig) {
    if config.start_unix_secs.is_none() {
        config.start_unix_secs = Some(Local::now().timestamp());
    }
}

// ── Run helpers ───────────────────────────────────────────────────────────────

fn drive<P, O>(sim: &mut Sim<P>, observer: &mut O, intervals: Option<u64>) -> Result<RunSummary>
where
    P: AssignmentPolicy,
    O: CheckoutObserver,
{
    let summary = match intervals {
        Some(n) => sim.run(observer, &mut StopAfter(n))?,
        None => sim.run(observer, &mut PromptStop::stdio())?,
    };
    Ok(summary)
}

fn run_with_files<P, W>(
    sim: &mut Sim<P>,
    writer: W,
    intervals: Option<u64>,
) -> Result<RunSummary>
where
    P: AssignmentPolicy,
    W: OutputWriter,
{
    let mut obs = (TextReporter::stdout(), SimOutputObserver::new(writer));
    let summary = drive(sim, &mut obs, intervals)?;
    if let Some(e) = obs.0.take_error() {
        return Err(e).context("writing status report");
    }
    if let Some(e) = obs.1.take_error() {
        return Err(e).context("writing simulation output");
    }
    Ok(summary)
}

#[cfg(feature = "sqlite")]
fn run_to_dir<P: AssignmentPolicy>(sim: &mut Sim<P>, dir: &Path, args: &Args) -> Result<RunSummary> {
    if args.sqlite {
        let summary = run_with_files(sim, checkout_output::SqliteWriter::new(dir)?, args.intervals)?;
        log::info!("wrote {}", dir.join("output.db").display());
        return Ok(summary);
    }
    let summary = run_with_files(sim, CsvWriter::new(dir)?, args.intervals)?;
    log::info!("wrote CSV output to {}", dir.display());
    Ok(summary)
}

#[cfg(not(feature = "sqlite"))]
fn run_to_dir<P: AssignmentPolicy>(sim: &mut Sim<P>, dir: &Path, args: &Args) -> Result<RunSummary> {
    let summary = run_with_files(sim, CsvWriter::new(dir)?, args.intervals)?;
    log::info!("wrote CSV output to {}", dir.display());
    Ok(summary)
}

fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    log::info!("config: {config:?}");

    let mut sim = SimBuilder::new(config).realtime(args.realtime).build()?;

    let summary = match &args.output {
        None => {
            let mut reporter = TextReporter::stdout();
            let summary = drive(&mut sim, &mut reporter, args.intervals)?;
            if let Some(e) = reporter.take_error() {
                return Err(e).context("writing status report");
            }
            summary
        }
        Some(dir) => {
            prepare_output_dir(dir)?;
            run_to_dir(&mut sim, dir, &args)?
        }
    };

    println!(
        "Simulation ended at {} after {} intervals: {} customers arrived, {} checked out, {} could not join a lane.",
        summary.final_tick, summary.intervals, summary.arrivals, summary.departed, summary.dropped
    );
    Ok(())
}

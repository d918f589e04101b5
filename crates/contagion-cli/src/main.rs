//! Command-line front end for the contagion simulator.

mod render;

use anyhow::{bail, Context, Result};
use contagion_core::{GridConfig, PathogenConfig, SimConfig};
use contagion_world::Simulation;
use std::env;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage:
  contagion
    <popn-size> [1000]
    <num-steps> [1000]
    <prob-transmit> [0.01-0.012]
    <prob-death> [0.5]
    <tmin-exposed> [2]
    <tavg-exposed> [9]
    <tmin-infected> [7]
    <tavg-infected> [9]
    <num-contacts> [16]
    <quarantine-delay> [0] (currently unused)
    <num-seeds> [1]
    <step-size> [1]

Set CONTAGION_SEED to an integer for a reproducible run.";

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}\n");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &SimConfig) -> Result<()> {
    info!(
        disease = %config.pathogen.name,
        rows = config.grid.rows,
        cols = config.grid.cols,
        seeds = config.initial_infections,
        "configuration loaded"
    );

    let mut sim = Simulation::new(config)?;
    let report = sim.run();

    print!("{}", render::render_text(&sim.grid().snapshot()));
    println!();
    println!("After {} days...", report.days_elapsed);
    println!(
        "{} died, {} recovered, {} still infected.",
        report.deceased, report.recovered, report.still_infected
    );
    Ok(())
}

/// Logs go to stderr so stdout stays free for the grid and summary.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Positional arguments only, no flags.
fn parse_args(args: &[String]) -> Result<SimConfig> {
    if args.len() != 12 {
        bail!("expected 12 arguments, got {}", args.len());
    }

    let n: i32 = parse(args, 0, "popn-size")?;
    let max_days: u64 = parse(args, 1, "num-steps")?;
    let p_transmit: f64 = parse(args, 2, "prob-transmit")?;
    let p_death: f64 = parse(args, 3, "prob-death")?;
    let min_incubation_days: u32 = parse(args, 4, "tmin-exposed")?;
    let mean_incubation_days: u32 = parse(args, 5, "tavg-exposed")?;
    let min_infectious_days: u32 = parse(args, 6, "tmin-infected")?;
    let mean_infectious_days: u32 = parse(args, 7, "tavg-infected")?;
    let mean_contacts: f64 = parse(args, 8, "num-contacts")?;
    let quarantine_days: u32 = parse(args, 9, "quarantine-delay")?;
    let initial_infections: u32 = parse(args, 10, "num-seeds")?;
    let report_interval: u64 = parse(args, 11, "step-size")?;

    let rng_seed = match env::var("CONTAGION_SEED") {
        Ok(value) => Some(
            value
                .parse()
                .context("CONTAGION_SEED must be an integer")?,
        ),
        Err(_) => None,
    };

    Ok(SimConfig {
        grid: GridConfig::square(n),
        pathogen: PathogenConfig {
            p_transmit,
            p_death,
            min_incubation_days,
            mean_incubation_days,
            min_infectious_days,
            mean_infectious_days,
            mean_contacts,
            quarantine_days,
            ..Default::default()
        },
        max_days,
        initial_infections,
        report_interval,
        rng_seed,
    })
}

fn parse<T>(args: &[String], index: usize, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args[index]
        .parse()
        .with_context(|| format!("invalid <{name}>: {:?}", args[index]))
}

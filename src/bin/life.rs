//! `life`: run the automaton from the command line.
//!
//! Logs one line per step (at `debug`) and a summary at the end. `--print`
//! dumps every committed frame as text.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_life::automaton::StepOutcome;
use rust_life::core::AutomatonConfig;
use rust_life::driver::{Driver, DriverConfig};
use rust_life::placement::Placement;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlacementArg {
    Noise,
    Random,
    Glider,
    Lwss,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Conway's Game of Life with a bounded frame history", long_about = None)]
struct Args {
    /// JSON automaton config; flags below override its fields
    #[clap(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[clap(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[clap(long)]
    height: Option<usize>,

    /// Seed placement
    #[clap(short, long, value_enum)]
    placement: Option<PlacementArg>,

    /// Noise sampling frequency
    #[clap(long, default_value_t = 0.5)]
    frequency: f32,

    /// Noise level a cell must exceed to start alive
    #[clap(long, default_value_t = 0.5)]
    minimum: f32,

    /// Uniform draw a cell must exceed to start alive (random placement)
    #[clap(long, default_value_t = 0.5)]
    threshold: f32,

    /// Maximum retained frames
    #[clap(long)]
    max_frames: Option<usize>,

    /// Pause instead of discarding the oldest frames when full
    #[clap(long)]
    no_scroll: bool,

    /// Milliseconds between steps
    #[clap(short, long)]
    delay_ms: Option<u64>,

    /// RNG seed
    #[clap(short, long)]
    seed: Option<u64>,

    /// Stop after this many steps
    #[clap(long)]
    steps: Option<u64>,

    /// Reseed instead of stopping when everything dies
    #[clap(long)]
    restart: bool,

    /// Print each committed frame
    #[clap(long)]
    print: bool,
}

impl Args {
    fn automaton_config(&self) -> Result<AutomatonConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                AutomatonConfig::from_json(&text)?
            }
            None => AutomatonConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(placement) = self.placement {
            config.placement = match placement {
                PlacementArg::Noise => Placement::Noise {
                    frequency: self.frequency,
                    minimum: self.minimum,
                },
                PlacementArg::Random => Placement::Random {
                    threshold: self.threshold,
                },
                PlacementArg::Glider => Placement::Glider,
                PlacementArg::Lwss => Placement::LightweightSpaceship,
            };
        }
        if let Some(max_frames) = self.max_frames {
            config.max_frames = max_frames;
        }
        if self.no_scroll {
            config.scroll_on_overflow = false;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut driver_config = DriverConfig::new(args.automaton_config()?)
        .with_restart_on_termination(args.restart);
    driver_config.max_steps = args.steps;

    info!(
        width = driver_config.automaton.width,
        height = driver_config.automaton.height,
        seed = driver_config.automaton.seed,
        "starting"
    );

    let mut driver = Driver::new(driver_config).context("invalid configuration")?;
    if args.print {
        println!("{}", driver.automaton().current());
    }

    let cancel = AtomicBool::new(false);
    let summary = driver.run(&cancel, |automaton, outcome| {
        if args.print && matches!(outcome, StepOutcome::Advanced(_)) {
            println!("generation {}\n{}", automaton.generation(), automaton.current());
        }
    })?;

    info!(
        steps = summary.steps,
        advanced = summary.advanced,
        paused = summary.paused,
        pause_episodes = summary.pause_episodes,
        restarts = summary.restarts,
        stop = ?summary.stop,
        "done"
    );
    Ok(())
}

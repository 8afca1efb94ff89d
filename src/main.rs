//! Command-line runner for a single navigation episode.
//!
//! Usage:
//!   cargo run --bin drishti-sim                          # built-in level 0
//!   cargo run --bin drishti-sim -- --level 1 --render
//!   cargo run --bin drishti-sim -- --map maps/gap_wall.txt --interval-ms 0
//!   cargo run --bin drishti-sim -- --generate --seed 7

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use drishti::config::{DEFAULT_CONFIG_PATH, DrishtiConfig};
use drishti::environment::{MapDescription, TrueEnvironment, build_environment};
use drishti::harness::{Scheduler, StopReason, render_episode};
use drishti::simulation::Episode;

/// Fog-of-war navigation simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Built-in level index (wraps)
    #[arg(short, long, default_value_t = 0)]
    level: usize,

    /// ASCII map file (`#` wall, `.` empty, `S` start, `E` goal)
    #[arg(short, long, conflicts_with = "generate")]
    map: Option<PathBuf>,

    /// Generate a procedural map from the config's generator section
    #[arg(short, long)]
    generate: bool,

    /// Seed for the procedural generator
    #[arg(long, requires = "generate")]
    seed: Option<u64>,

    /// Stop after this many ticks (0 = unlimited); overrides the config
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Milliseconds between ticks; overrides the config
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Print the agent's view after every tick
    #[arg(short, long)]
    render: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config {}: {}", args.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(max_ticks) = args.max_ticks {
        config.simulation.max_ticks = max_ticks;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.simulation.tick_interval_ms = interval_ms;
    }

    let env = match load_environment(&args, &config) {
        Ok(env) => env,
        Err(e) => {
            error!("Invalid map [{}]: {}", e.code(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut episode = Episode::new(env, config.to_simulation_config());
    let scheduler = Scheduler::from_settings(&config.simulation);

    if args.render {
        println!("{}\n", render_episode(&episode));
    }

    episode.start();
    let summary = scheduler.run(&mut episode, |episode, report| {
        if args.render {
            println!("{}\n", render_episode(episode));
        }
        if let Some(event) = report.event {
            info!("[Sim] tick {}: {:?}", episode.stats().ticks, event);
        }
    });

    let stats = episode.stats();
    info!(
        "[Sim] {:?} after {} ticks ({:.2}s): travelled {:.2} cells, discovered {} cells, {} ticks without a route, {} nodes expanded",
        summary.stop_reason,
        stats.ticks,
        summary.elapsed.as_secs_f32(),
        stats.distance_travelled,
        stats.cells_discovered,
        stats.no_route_ticks,
        stats.nodes_expanded
    );

    if summary.stop_reason == StopReason::TickLimit {
        warn!("[Sim] Goal not reached within {} ticks", stats.ticks);
    }
    ExitCode::SUCCESS
}

fn load_config(path: &Path) -> Result<DrishtiConfig, drishti::ConfigLoadError> {
    if path.exists() {
        DrishtiConfig::load(path)
    } else {
        info!("Config not found at {}, using defaults", path.display());
        Ok(DrishtiConfig::default())
    }
}

fn load_environment(
    args: &Args,
    config: &DrishtiConfig,
) -> drishti::environment::Result<TrueEnvironment> {
    if let Some(map) = &args.map {
        info!("Loading map: {}", map.display());
        return TrueEnvironment::from_ascii_file(map);
    }

    let description = if args.generate {
        let mut generator = config.generator.clone();
        if let Some(seed) = args.seed {
            generator = generator.with_seed(seed);
        }
        MapDescription::Procedural(generator)
    } else {
        MapDescription::Level(args.level)
    };
    build_environment(&description)
}

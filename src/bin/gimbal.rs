//! Provides the `gimbal-cli` tool for simulating gimbal animations headlessly.
//!
//! Usage: `gimbal-cli [--scene FILE] [--from X,Y,Z] [--to X,Y,Z] [options]`
//!
//! Runs the animation frame by frame and prints the orientation after each
//! tick. Flags override values from the scene file.
//!
//! # Examples
//! ```text
//! gimbal-cli --from 170,0,0 --to -170,0,0 --rate 10 --dt 0.5
//! gimbal-cli --scene demo.json --strategy concurrent --json
//! ```

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use gimbal::animation::{DirectionPolicy, PriorityOrder, Strategy};
use gimbal::euler::EulerMode;
use gimbal::pose::GimbalPose;
use gimbal::scene::SceneConfig;

#[derive(Parser)]
#[command(name = "gimbal-cli")]
#[command(about = "Simulate an Euler gimbal animating toward a target", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON scene file
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Euler mode (XYZ, XZY, YXZ, YZX, ZXY, ZYX)
    #[arg(long, value_parser = parse_mode)]
    mode: Option<EulerMode>,

    /// Starting angles in degrees, e.g. 0,45,90
    #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
    from: Option<[f32; 3]>,

    /// Target angles in degrees
    #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
    to: Option<[f32; 3]>,

    /// Rate in degrees per second
    #[arg(long)]
    rate: Option<f32>,

    /// Seconds per simulated frame
    #[arg(long, default_value_t = 0.05)]
    dt: f32,

    /// sequential or concurrent
    #[arg(long, value_parser = parse_strategy)]
    strategy: Option<Strategy>,

    /// Use the legacy direction rule (large negative differences go the long way)
    #[arg(long)]
    legacy_direction: bool,

    /// Finish the last named axis first in sequential mode
    #[arg(long)]
    reversed_priority: bool,

    /// Give up after this many frames
    #[arg(long, default_value_t = 100_000)]
    max_ticks: usize,

    /// Print the trajectory as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct TickRecord {
    tick: usize,
    rotation: [f32; 3],
    arrow: [f32; 3],
    done: bool,
}

fn parse_mode(s: &str) -> Result<EulerMode, String> {
    s.parse().map_err(|e: gimbal::GimbalError| e.to_string())
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse().map_err(|e: gimbal::GimbalError| e.to_string())
}

fn parse_triple(s: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated angles, got {s:?}"));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("not a number: {part:?}"))?;
    }
    Ok(out)
}

fn build_config(cli: &Cli) -> Result<SceneConfig> {
    let mut config = match &cli.scene {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => SceneConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(from) = cli.from {
        config.rotation = from;
    }
    if let Some(to) = cli.to {
        config.target = to;
    }
    if let Some(rate) = cli.rate {
        config.rate = rate;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if cli.legacy_direction {
        config.tuning.direction = DirectionPolicy::Legacy;
    }
    if cli.reversed_priority {
        config.tuning.priority = PriorityOrder::Reversed;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<bool> {
    if !(cli.dt.is_finite() && cli.dt > 0.0) {
        bail!("--dt must be a positive number of seconds, got {}", cli.dt);
    }

    let config = build_config(cli)?;
    log::info!(
        "{} {} from {:?} to {:?} at {} deg/s",
        config.strategy,
        config.mode,
        config.rotation,
        config.target,
        config.rate
    );

    let mut scene = config.into_scene()?;
    scene.play()?;

    let mut records = Vec::new();
    let mut converged = false;
    for tick in 1..=cli.max_ticks {
        let done = scene.frame(cli.dt);
        let orientation = scene.orientation();
        let pose = GimbalPose::from_orientation(orientation);
        let record = TickRecord {
            tick,
            rotation: orientation.rotation,
            arrow: pose.arrow_direction.to_array(),
            done,
        };

        if cli.json {
            records.push(record);
        } else {
            println!(
                "{:>6}  x={:>9.3} y={:>9.3} z={:>9.3}  arrow=({:>6.3}, {:>6.3}, {:>6.3}){}",
                record.tick,
                record.rotation[0],
                record.rotation[1],
                record.rotation[2],
                record.arrow[0],
                record.arrow[1],
                record.arrow[2],
                if done { "  done" } else { "" }
            );
        }

        if done {
            converged = true;
            break;
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }
    Ok(converged)
}

fn main() {
    let cli = Cli::parse();

    let level = match (cli.verbose, cli.quiet) {
        (0, true) => "error",
        (0, false) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => {
            log::error!("did not reach the target within {} ticks", cli.max_ticks);
            process::exit(2);
        }
        Err(e) => {
            log::error!("{:#}", e);
            process::exit(1);
        }
    }
}

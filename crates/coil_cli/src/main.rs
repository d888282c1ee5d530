//! `coil` command line entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use coil_animation::JumpDirection;
use coil_cli::{run_scenario, CoilConfig, CurveReport, Scenario};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coil", version, about = "Headless driver for the spring jump animation")]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario and write the per-frame report
    Run {
        /// Configuration file (coil.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scenario JSON; defaults to a full compress and jump
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Seed for the jump direction draw
        #[arg(long)]
        seed: Option<u64>,

        /// Pin the jump direction (left or right)
        #[arg(long)]
        direction: Option<JumpDirection>,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the spring's control points
    Curve {
        /// Configuration file (coil.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            config,
            scenario,
            seed,
            direction,
            output,
        } => cmd_run(config, scenario, seed, direction, output),
        Commands::Curve { config } => cmd_curve(config),
    }
}

fn cmd_run(
    config: Option<PathBuf>,
    scenario: Option<PathBuf>,
    seed: Option<u64>,
    direction: Option<JumpDirection>,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let config = CoilConfig::load_or_default(config.as_deref())?.with_overrides(seed, direction);
    let curve = config.build_curve()?;
    let controller = config.build_controller(&curve);
    tracing::info!(
        points = curve.len(),
        direction = %controller.animator().direction(),
        "spring ready"
    );

    let scenario = match scenario {
        Some(path) => Scenario::from_path(&path)?,
        None => Scenario::full_jump(config.animator.max_strength),
    };

    let report = run_scenario(controller, &scenario);
    match output {
        Some(path) => {
            report.write_to_path(&path, config.output.pretty)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => report.write_to_writer(&mut io::stdout().lock(), config.output.pretty)?,
    }

    Ok(if report.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_curve(config: Option<PathBuf>) -> Result<ExitCode> {
    let config = CoilConfig::load_or_default(config.as_deref())?;
    let curve = config.build_curve()?;
    CurveReport::new(&curve, &config.animator)
        .write_to_writer(&mut io::stdout().lock(), config.output.pretty)?;
    Ok(ExitCode::SUCCESS)
}

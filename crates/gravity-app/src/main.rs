//! Headless Gravity Playground runner.
//!
//! Loads `config.ron`, applies CLI overrides, spawns the requested bodies and
//! runs the simulation, optionally printing the final snapshot as JSON.

use std::process::ExitCode;

use clap::Parser;
use gravity_app::platform::{PlatformDirs, PlatformError};
use gravity_app::{Command, RunOptions, Sandbox, SandboxError, StopSignal, run};
use gravity_config::{CliArgs, Config, ConfigError};
use gravity_input::{KeyboardState, RawKeyEvent, parse_key_name};
use gravity_physics::Shape;
use tracing::{error, info};
use winit::keyboard::PhysicalKey;

#[derive(Parser, Debug)]
#[command(name = "gravity-playground", version, about = "2D rigid-body gravity sandbox")]
struct RunArgs {
    #[command(flatten)]
    settings: CliArgs,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Round bodies to spawn before the run.
    #[arg(long, default_value_t = 0)]
    spawn_round: usize,

    /// Rectangular bodies to spawn before the run.
    #[arg(long, default_value_t = 0)]
    spawn_rect: usize,

    /// Pace ticks at 16 ms instead of running as fast as possible.
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON on stdout.
    #[arg(long)]
    dump: bool,

    /// Hot-reload `config.ron` while running.
    #[arg(long)]
    watch: bool,

    /// Key held down for the whole run, by winit key name (repeatable).
    #[arg(long = "hold", value_name = "KEY")]
    hold: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sandbox(#[from] SandboxError),

    #[error("failed to encode snapshot: {0}")]
    Dump(#[from] serde_json::Error),

    #[error("unknown key name: {0}")]
    UnknownKey(String),
}

fn main() -> ExitCode {
    let args = RunArgs::parse();

    let (dirs, file_config, config) = match load(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            gravity_log::init_logging(None, false, None).ok();
            error!("startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) =
        gravity_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config))
    {
        eprintln!("logging unavailable: {e}");
    }
    info!(config_dir = %dirs.config_dir.display(), "Gravity Playground");

    match run_session(&args, &dirs, file_config, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("run failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load(args: &RunArgs) -> Result<(PlatformDirs, Config, Config), AppError> {
    let dirs = match &args.settings.config {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let file_config = Config::load_or_create(&dirs.config_dir)?;
    let mut config = file_config.clone();
    config.apply_cli_overrides(&args.settings)?;
    Ok((dirs, file_config, config))
}

fn run_session(
    args: &RunArgs,
    dirs: &PlatformDirs,
    file_config: Config,
    config: Config,
) -> Result<(), AppError> {
    let mut keyboard = KeyboardState::new();
    for name in &args.hold {
        let code = parse_key_name(name).ok_or_else(|| AppError::UnknownKey(name.clone()))?;
        keyboard.process_raw(RawKeyEvent::pressed(PhysicalKey::Code(code)));
    }

    let mut sandbox = Sandbox::new(config)?.with_file_config(file_config);
    for _ in 0..args.spawn_round {
        sandbox.apply(Command::Spawn(Shape::Round))?;
    }
    for _ in 0..args.spawn_rect {
        sandbox.apply(Command::Spawn(Shape::Rectangular))?;
    }

    let options = RunOptions {
        ticks: Some(args.ticks),
        realtime: args.realtime,
        watch_config: args.watch.then(|| dirs.config_dir.clone()),
    };
    let summary = run(&mut sandbox, &options, &StopSignal::new(), |s| {
        s.bindings().control_input(&keyboard)
    });

    let player = sandbox.world().player();
    info!(
        ticks = summary.ticks,
        bodies = sandbox.world().bodies().len(),
        x = player.position.x,
        y = player.position.y,
        grounded = player.grounded,
        "simulation complete"
    );

    if args.dump {
        let json = serde_json::to_string_pretty(&sandbox.snapshot())?;
        println!("{json}");
    }
    Ok(())
}

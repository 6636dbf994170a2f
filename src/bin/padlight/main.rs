//! padlight - Terminal pad grid instrument
//!
//! Run with: cargo run -- [--config padlight.toml] [--mute]

mod app;
mod ui;

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use env_logger::{Builder, Env, Target};
use padlight::config::Config;

use app::Padlight;

#[derive(Parser, Debug)]
#[command(version, about = "Pad grid instrument with procedural sound and light")]
struct Args {
    /// TOML config file; missing or broken files fall back to defaults
    #[arg(long, default_value = "padlight.toml")]
    config: PathBuf,

    /// Shorten every effect to 260ms
    #[arg(long)]
    reduced_motion: bool,

    /// Run visuals only, never open an audio device
    #[arg(long)]
    mute: bool,

    /// Seed for effect drift and noise layers
    #[arg(long)]
    seed: Option<u64>,

    /// Where log output goes (the terminal belongs to the UI)
    #[arg(long, default_value = "padlight.log")]
    log_file: PathBuf,
}

fn setup_logger(path: &Path) -> EyreResult<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    // `info` by default; override with `RUST_LOG=debug` when troubleshooting.
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .unwrap_or(());
    Ok(())
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    setup_logger(&args.log_file)?;

    let mut config = Config::load_or_default(&args.config);
    if args.reduced_motion {
        config.visual.reduced_motion = true;
    }
    if args.mute {
        config.audio.enabled = false;
    }

    Padlight::new(config, args.seed).run()
}

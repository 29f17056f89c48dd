//! HAVDEF - voice deepfake detection demo
//!
//! Main entry point for the desktop application.

use anyhow::{Context, Result};
use clap::Parser;
use havdef::config::AppConfig;
use havdef::script::Script;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "havdef")]
#[command(about = "Hindi Audio-Visual Deepfake Defense: voice deepfake detection demo")]
struct Args {
    /// Configuration file (defaults to <config dir>/havdef/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in the light theme
    #[arg(long)]
    light: bool,

    /// Seed for reproducible verdicts
    #[arg(long)]
    seed: Option<u64>,

    /// Run a TOML script of timed UI actions, then exit with its status
    #[arg(long)]
    script: Option<PathBuf>,

    /// Initial window width
    #[arg(long)]
    width: Option<f32>,

    /// Initial window height
    #[arg(long)]
    height: Option<f32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "havdef=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HAVDEF");

    let mut config = AppConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    if args.light {
        config.ui.start_dark = false;
    }
    if let Some(seed) = args.seed {
        config.detection.seed = Some(seed);
    }
    if let Some(width) = args.width {
        config.ui.window_width = width;
    }
    if let Some(height) = args.height {
        config.ui.window_height = height;
    }
    config.validate().context("Invalid configuration")?;

    let script = args
        .script
        .as_deref()
        .map(Script::load)
        .transpose()
        .context("Failed to load script")?;

    havdef::ui::run(config, script).map_err(|e| anyhow::anyhow!("UI error: {}", e))
}

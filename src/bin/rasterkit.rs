//! rasterkit: run a drawing script and write the saved canvases.
//!
//! Run: `rasterkit input.txt output/`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rasterkit::output::OutputFormat;
use rasterkit::script::{Session, SessionConfig};

/// rasterkit: scan-convert primitives from a drawing script
#[derive(Parser, Debug)]
#[command(name = "rasterkit")]
#[command(version)]
#[command(about = "Rasterize lines, polygons, ellipses and curves from a command script", long_about = None)]
struct Cli {
    /// Script with one command per line
    input: PathBuf,

    /// Directory saved canvases are written to (created if missing)
    output_dir: PathBuf,

    /// Image format of saved canvases (bmp or png)
    #[arg(short, long, default_value = "bmp")]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is not set (e.g. debug, rasterkit=trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let script = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read script {}", cli.input.display()))?;
    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("failed to create {}", cli.output_dir.display()))?;

    let config = SessionConfig {
        output_dir: cli.output_dir.clone(),
        format: cli.format,
        ..SessionConfig::default()
    };
    let mut session = Session::new(config);
    let saved = session
        .run_script(&script)
        .with_context(|| format!("script {} failed", cli.input.display()))?;

    info!(canvases = saved.len(), "done");
    Ok(())
}

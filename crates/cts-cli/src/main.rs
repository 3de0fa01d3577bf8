use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cts_cli::{Cli, Config, parser, render};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let talks = parser::parse_talks_file(&cli.input)
        .with_context(|| format!("failed to parse talk list '{}'", cli.input.display()))?;
    tracing::debug!(count = talks.len(), "parsed talks");

    let params = config.params().context("invalid configuration")?;
    let tracks = cts_core::schedule_tracks(&talks, &params)
        .context("failed to build the conference schedule")?;

    if cli.json {
        println!("{}", render::render_tracks_json(&tracks)?);
    } else {
        print!("{}", render::render_tracks(&tracks));
    }

    Ok(())
}

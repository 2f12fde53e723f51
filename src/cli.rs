//! Command line front end: replays a session script and prints a JSON summary.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use anatomark_designer::{
    rasterize, DesignerState, DiagnosisStyles, RegionTable, RenderScene,
};
use anatomark_settings::{default_config_path, Config};

use crate::session::{Session, SessionSummary};

#[derive(Debug, Parser)]
#[command(name = "anatomark")]
#[command(about = "Replay an annotation session over an anatomical diagram")]
#[command(version)]
pub struct Cli {
    /// Session script (JSON array of events).
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,
    /// Config file (.toml or .json); defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Region geometry (JSON array of `{name, points}`).
    #[arg(long)]
    regions: Option<PathBuf>,
    /// Diagnosis style catalog; the built-in catalog is used otherwise.
    #[arg(long)]
    styles: Option<PathBuf>,
    /// Write a PNG preview of the final state.
    #[arg(long)]
    png: Option<PathBuf>,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
}

pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    let config = load_config(cli.config.as_deref())?;
    let regions = match &cli.regions {
        Some(path) => RegionTable::from_path(path)
            .with_context(|| format!("failed to load regions from {}", path.display()))?,
        None => RegionTable::empty(),
    };
    let styles = match &cli.styles {
        Some(path) => DiagnosisStyles::from_path(path)
            .with_context(|| format!("failed to load styles from {}", path.display()))?,
        None => DiagnosisStyles::builtin(),
    };
    let session = Session::from_path(&cli.script)
        .with_context(|| format!("failed to read session {}", cli.script.display()))?;

    let mut state = DesignerState::with_regions(regions)
        .with_tool_settings(config.tool_settings())
        .with_history_limit(config.history.depth);
    session.replay(&mut state);

    if let Some(output) = &cli.png {
        let scene = RenderScene::build(
            &state,
            &state.regions,
            Some(&styles),
            &config.render_options(),
        );
        let pixmap = rasterize(&scene, cli.width, cli.height)
            .with_context(|| format!("invalid preview size {}x{}", cli.width, cli.height))?;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        pixmap
            .save_png(output)
            .with_context(|| format!("failed to write image to {}", output.display()))?;
        tracing::info!("Wrote preview to {}", output.display());
    }

    let json = serde_json::to_string_pretty(&SessionSummary::of(&state))?;
    println!("{json}");
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    match default_config_path() {
        Some(path) => Config::load_or_default(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(Config::default()),
    }
}

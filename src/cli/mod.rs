//! CLI interface for gastrend
//!
//! Provides subcommands for:
//! - `estimate`: Price estimate for a single date
//! - `forecast`: Extrapolate month-start prices forward
//! - `summary`: Summary statistics over the loaded history
//! - `config`: Show resolved configuration

mod estimate;
mod forecast;
mod summary;

pub use estimate::EstimateArgs;
pub use forecast::ForecastArgs;
pub use summary::SummaryArgs;

use crate::config::Config;
use crate::data::{self, Observation};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gastrend")]
#[command(about = "Natural gas price estimation from monthly settlement history")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price estimate for a single date
    Estimate(EstimateArgs),
    /// Extrapolate month-start prices forward
    Forecast(ForecastArgs),
    /// Summary statistics over the loaded history
    Summary(SummaryArgs),
    /// Show resolved configuration
    Config,
}

/// Load the observation series from the override path or the configured one
fn load_observations(
    override_path: &Option<PathBuf>,
    config: &Config,
) -> anyhow::Result<Vec<Observation>> {
    let path = override_path
        .clone()
        .unwrap_or_else(|| config.data.prices_path.clone());
    let observations = data::load_csv(&path)?;
    tracing::info!(path = %path.display(), count = observations.len(), "history loaded");
    Ok(observations)
}

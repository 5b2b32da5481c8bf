//! Forecast command implementation

use crate::config::Config;
use crate::estimate::{ForecastPoint, PriceModel};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ForecastArgs {
    /// Months to extrapolate (defaults to the configured horizon)
    #[arg(long)]
    pub months: Option<u32>,

    /// Prices CSV override (defaults to the configured path)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format: json or table
    #[arg(long, default_value = "table")]
    pub format: String,
}

impl ForecastArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let observations = super::load_observations(&self.data, config)?;
        let model = PriceModel::build(&observations)?;

        let months = self.months.unwrap_or(config.model.horizon_months);
        let points: Vec<ForecastPoint> = model.extrapolate(months)?.collect();

        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(&points)?);
        } else {
            println!("Forecast from {} observed months:", observations.len());
            for point in &points {
                println!("{}  {:.4}", point.date, point.price);
            }
        }
        Ok(())
    }
}

//! Estimate command implementation

use crate::config::Config;
use crate::estimate::PriceModel;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Date to estimate (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Prices CSV override (defaults to the configured path)
    #[arg(long)]
    pub data: Option<PathBuf>,
}

impl EstimateArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let observations = super::load_observations(&self.data, config)?;
        let model = PriceModel::build(&observations)?;

        if self.date < model.origin() || self.date > model.last_observed() {
            tracing::warn!(date = %self.date, "estimate outside observed history");
        }

        let price = model.estimate(self.date);
        println!("{}  {:.4}", self.date, price);
        Ok(())
    }
}

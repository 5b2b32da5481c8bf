//! Summary command implementation

use crate::config::Config;
use crate::estimate::{summary_statistics, PriceModel};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Prices CSV override (defaults to the configured path)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format: json or table
    #[arg(long, default_value = "table")]
    pub format: String,
}

impl SummaryArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let observations = super::load_observations(&self.data, config)?;
        let model = PriceModel::build(&observations)?;
        let summary = summary_statistics(&observations, model.adjustments());

        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", summary.format_table());
        }
        Ok(())
    }
}

use clap::Parser;
use gastrend::cli::{Cli, Commands};
use gastrend::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    gastrend::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Estimate(args) => {
            tracing::info!(date = %args.date, "estimating price");
            args.execute(&config)?;
        }
        Commands::Forecast(args) => {
            tracing::info!("extrapolating forward prices");
            args.execute(&config)?;
        }
        Commands::Summary(args) => {
            tracing::info!("computing summary statistics");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Prices: {}", config.data.prices_path.display());
            println!("  Horizon: {} months", config.model.horizon_months);
            println!(
                "  Logging: {} (json: {})",
                config.telemetry.log_level, config.telemetry.json_logs
            );
        }
    }

    Ok(())
}

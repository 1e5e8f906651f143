//! Water tariff service: CLI server
//!
//! ```sh
//! # Run with default config (~/.config/water-tariff/config.toml)
//! water-tariff
//!
//! # Custom config path and port
//! water-tariff --config /etc/water-tariff/config.toml --api-port 8081
//!
//! # Validate config without starting
//! water-tariff --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use water_tariff::config::AppConfig;
use water_tariff::server::{init_tracing, ServerHandle, ServerOptions};

/// Tiered water tariff tables and bill calculation over REST.
#[derive(Parser, Debug)]
#[command(
    name = "water-tariff",
    version,
    about = "Water tariff service",
    long_about = "REST API for tiered water rate tables and consumption pricing.\n\n\
                  Default config: ~/.config/water-tariff/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TARIFF_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(water_tariff::default_config_path);

    // A broken config file is fatal here; the plain binary falls back to
    // defaults instead.
    let mut config = AppConfig::load(&config_path)?;

    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.api_address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}

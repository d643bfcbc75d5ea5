mod cli;

use crate::cli::{Cli, Commands, LogProfile};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use starlio_web::application::use_cases::RunApplicationUseCase;
use starlio_web::config::{AppConfig, ConfigError};
use starlio_web::debug::{DebugConfig, init_logging};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let debug_config = match cli.log {
        LogProfile::Default => DebugConfig::default(),
        LogProfile::Development => DebugConfig::development(),
        LogProfile::Production => DebugConfig::production(),
        LogProfile::Quiet => DebugConfig::quiet(),
    };
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match cli.command {
        Commands::Serve { config, host, port } => {
            let mut config = match load_config(config.as_deref()) {
                Ok(config) => config,
                Err(e) => {
                    error!("Failed to load configuration: {}", e);
                    eprintln!("❌ Failed to load configuration: {}", e);
                    std::process::exit(1);
                }
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            info!("Starting application...");
            match RunApplicationUseCase::new(config).execute().await {
                Ok(_) => {
                    info!("Application terminated normally");
                }
                Err(e) => {
                    error!("Application failed: {}", e);
                    eprintln!("❌ Application failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::CheckConfig { config } => match load_config(config.as_deref()) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!("{}", toml::to_string_pretty(&config.redacted())?);
            }
            Err(e) => {
                eprintln!("❌ Invalid configuration: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// An explicit path must exist; the default path is optional.
fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => AppConfig::load(path),
        None => AppConfig::load_or_default(&PathBuf::from(DEFAULT_CONFIG_PATH)),
    }
}

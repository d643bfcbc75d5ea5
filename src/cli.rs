use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "starlio-web",
    author = "Starlio Team",
    version,
    about = "Starlio web front end",
    long_about = "Serves the Starlio landing pages, renders the wallpaper of the day and reports requests to an analytics collector"
)]
pub struct Cli {
    /// Logging preset
    #[arg(long, value_enum, global = true, default_value = "default")]
    pub log: LogProfile,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server
    Serve {
        /// Path to the TOML config file [default: config.toml if present]
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override server.host
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Override server.port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Validate the config file and print the effective settings
    #[command(name = "check-config")]
    CheckConfig {
        /// Path to the TOML config file [default: config.toml if present]
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogProfile {
    Default,
    Development,
    Production,
    /// Warnings and errors only
    Quiet,
}

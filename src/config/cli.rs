use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "geo-signup")]
#[command(about = "Sign up users located in Egypt by reverse-geocoding their coordinates")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "GEOCODER_API_KEY",
        hide_env_values = true,
        help = "Geocoding provider API key, overrides the config file"
    )]
    pub api_key: Option<String>,

    #[arg(long, global = true, help = "Emit JSON log lines")]
    pub json_logs: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a coordinate to its city label
    Resolve {
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Validate and resolve a new user, then print the record.
    ///
    /// Users are held in memory for this run only; nothing is persisted.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
    },
}

impl CliConfig {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn load_app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(api_key) = &self.api_key {
            config.geocoder.api_key = api_key.clone();
        }

        Ok(config)
    }
}

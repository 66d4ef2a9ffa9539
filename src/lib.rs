pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{InMemoryUserRepository, OpenCageClient};
pub use config::AppConfig;
pub use crate::core::{
    resolver::LocationResolver, signup::SignupService, validator::validate_coordinate,
};
pub use utils::error::{ErrorKind, Result, SignupError};

#[cfg(feature = "cli")]
pub mod cli;

use crate::core::resolver::DEFAULT_TARGET_COUNTRY;
use crate::utils::error::{Result, SignupError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.opencagedata.com/geocode/v1/json";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub region: RegionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    pub language: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_country() -> String {
    DEFAULT_TARGET_COUNTRY.to_string()
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            language: None,
            timeout_seconds: None,
        }
    }
}

impl GeocoderConfig {
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            country: default_country(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| SignupError::config("toml_parsing", format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR_NAME}` with the environment value. Unset variables
    /// are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| SignupError::config("toml_parsing", e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let checks = [
            validate_url("geocoder.endpoint", &self.geocoder.endpoint),
            validate_non_empty_string("geocoder.api_key", &self.geocoder.api_key),
            validate_non_empty_string("geocoder.language", self.geocoder.language()),
            validate_positive_number(
                "geocoder.timeout_seconds",
                self.geocoder.timeout().as_secs(),
                1,
            ),
            validate_non_empty_string("region.country", &self.region.country),
        ];

        for check in checks {
            check.map_err(into_config_error)?;
        }

        if self.geocoder.api_key.starts_with("${") {
            return Err(SignupError::config(
                "geocoder.api_key",
                format!("environment variable {} is not set", self.geocoder.api_key),
            ));
        }

        Ok(())
    }
}

fn into_config_error(err: SignupError) -> SignupError {
    match err {
        SignupError::ValidationError { field, reason } => SignupError::ConfigError {
            field,
            message: reason,
        },
        other => other,
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::dir::SigninDirectory;

pub const DEFAULT_AUTH_API_URL: &str = "http://localhost:8080/api";

/// Startup configuration, built from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub signin_directory: SigninDirectory,
    /// Overrides the url of the settings file.
    pub auth_api_url: Option<String>,
}

impl Config {
    pub fn new(signin_directory: SigninDirectory, auth_api_url: Option<String>) -> Self {
        Self {
            signin_directory,
            auth_api_url,
        }
    }
}

/// Content of the optional `signin.toml` file of the data directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub auth_api_url: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    ReadingFile(String),
    InvalidLogLevel(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ReadingFile(e) => write!(f, "Failed to read settings file: {}", e),
            Self::InvalidLogLevel(l) => write!(f, "Invalid log level '{}'", l),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Settings {
    /// A missing file is not an error, defaults are used instead. The log level is only
    /// checked by [`Settings::log_level`], so that a bad level does not discard the rest.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::ReadingFile(e.to_string())),
        };
        toml::from_str::<Settings>(&content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing settings file: {}", e)))
    }

    pub fn log_level(&self) -> Result<Option<LevelFilter>, ConfigError> {
        self.log_level
            .as_deref()
            .map(|l| LevelFilter::from_str(l).map_err(|_| ConfigError::InvalidLogLevel(l.into())))
            .transpose()
    }
}

/// The command line wins over the settings file, which wins over the default.
pub fn auth_api_url(config: &Config, settings: &Settings) -> String {
    config
        .auth_api_url
        .clone()
        .or_else(|| settings.auth_api_url.clone())
        .unwrap_or_else(|| DEFAULT_AUTH_API_URL.to_string())
}

//! Server configuration read from Tactix.toml.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PATH: &str = "Tactix.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Grid size N of the N×N board.
    pub size: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { size: 4 }
    }
}

impl Config {
    pub fn default_hardcoded() -> Self {
        Self {
            server: ServerConfig::default(),
            engine: EngineConfig::default(),
        }
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Load Tactix.toml, or fall back to the hard-coded defaults.
    pub fn load_or_default() -> Self {
        Self::from_file(DEFAULT_PATH).unwrap_or_else(|e| {
            log::warn!("Could not load {} ({}), using hardcoded defaults", DEFAULT_PATH, e);
            Self::default_hardcoded()
        })
    }

    /// Apply a `PORT` value from the environment, if it parses.
    pub fn with_port_override(mut self, port: Option<String>) -> Self {
        if let Some(port) = port.and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

//! Application configuration
//!
//! Configuration loaded from `.repo-onboard.toml`, with the backend base URL
//! overridable through the environment (a `.env` file is honoured).

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable that overrides `base_url` from the config file
pub const BASE_URL_ENV: &str = "REPO_ONBOARD_BASE_URL";

/// Application configuration loaded from `.repo-onboard.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, e.g. `https://api.example.com`
    ///
    /// Left unset, endpoint URLs degrade to bare paths and every request
    /// fails at send time.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Address the client treats as its current page location
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    "http://localhost:3000/".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            location: default_location(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    /// `REPO_ONBOARD_BASE_URL` (from the process or `.env`) wins over the file.
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }

        let config = Self::from_content(crate::load_config_file().as_deref());
        config.with_base_url_override(env::var(BASE_URL_ENV).ok())
    }

    /// Parse config content, falling back to defaults when absent or invalid
    pub fn from_content(content: Option<&str>) -> Self {
        if let Some(content) = content {
            match toml::from_str(content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Replace the base URL when an override is given
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url);
        }
        self
    }

    /// Replace the location when an override is given
    pub fn with_location_override(mut self, location: Option<String>) -> Self {
        if let Some(location) = location {
            self.location = location;
        }
        self
    }

    /// Base URL as a string prefix; empty when unconfigured
    pub fn base_url_or_empty(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
    }
}

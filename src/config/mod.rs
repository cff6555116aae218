// src/config/mod.rs
use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
// Origin of the development proxy that fronts the service during local work.
const DEV_PROXY_URL: &str = "http://localhost:3000";

// Startup configuration. Loaded once in main and injected into AppState;
// nothing reads the environment after that.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub dev_proxy_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            dev_proxy_enabled: false,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by an optional config file, overridden by
    /// CODEQUAL_* environment variables.
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("dev_proxy_enabled", false)?;

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("codequal").join("config.toml");
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder = builder.add_source(config::Environment::with_prefix("CODEQUAL"));

        builder
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Base URL requests are issued against. With the dev proxy enabled,
    /// requests go through the proxy origin instead of the service directly.
    pub fn endpoint_base(&self) -> &str {
        if self.dev_proxy_enabled {
            DEV_PROXY_URL
        } else {
            &self.api_base_url
        }
    }
}

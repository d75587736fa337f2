//! Service configuration.
//!
//! Loaded from a YAML file (`config/storefront.yaml`, or the path in `STOREFRONT_CONFIG`), then
//! overridden by the environment variables the service has always honoured: `PORT`,
//! `JWT_SECRET` and `DATA_FILE`. A missing file means defaults.

use crate::order_actor::ReservationMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/storefront.yaml";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub use_json: bool,
    pub gateway: GatewayConfig,
    pub auth: AuthConfig,
    pub store: StoreConfig,
    /// JSON snapshot loaded at startup and written on shutdown. No file, no persistence.
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Request channel capacity of each store actor.
    pub channel_buffer: usize,
    pub reservation: ReservationMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            use_json: false,
            gateway: GatewayConfig::default(),
            auth: AuthConfig::default(),
            store: StoreConfig::default(),
            data_file: None,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "your-secret-key".to_string(),
            token_ttl_hours: 24,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            reservation: ReservationMode::Atomic,
        }
    }
}

impl AppConfig {
    /// Reads the config file named by `STOREFRONT_CONFIG` (or the default path) and applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config yaml: {}", path.display()))
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(port) = lookup("PORT") {
            self.gateway.port = port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port}"))?;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(file) = lookup("DATA_FILE") {
            self.data_file = Some(PathBuf::from(file));
        }
        Ok(())
    }
}

mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind};
use tracing::{debug, info};

/// Environment variable that supplies the completion endpoint token.
pub const API_KEY_ENV: &str = "STOCKSAGE_API_KEY";

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies the
/// `STOCKSAGE_API_KEY` override.
pub async fn load() -> Result<Config> {
    load_from(env::var("CONFIG_PATH").ok(), env::var(API_KEY_ENV).ok()).await
}

/// Reads `path`, or the default location when `None`. A missing file at the
/// default location means all defaults; an explicit path must exist.
pub async fn load_from(path: Option<String>, api_key_override: Option<String>) -> Result<Config> {
    let required = path.is_some();
    let config_path = path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config_str = read_config(&config_path, required).await?;
    parse(&config_str, api_key_override)
}

async fn read_config(config_path: &str, required: bool) -> Result<String> {
    debug!("Loading configuration from: {}", config_path);

    match tokio::fs::read_to_string(config_path).await {
        Ok(contents) => Ok(contents),
        Err(e) if !required && e.kind() == ErrorKind::NotFound => {
            info!("No {} found, using default configuration", config_path);
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Parses YAML configuration, letting `api_key_override` replace the file's token.
/// An empty document yields the defaults.
pub fn parse(config_str: &str, api_key_override: Option<String>) -> Result<Config> {
    let mut config: Config = if config_str.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(config_str)?
    };

    if let Some(key) = api_key_override.filter(|k| !k.trim().is_empty()) {
        debug!("Using API key from {}", API_KEY_ENV);
        config.llm.api_key = key;
    }

    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(format!(
            "no API key configured: set llm.api_key or {API_KEY_ENV}"
        )));
    }

    Ok(config)
}

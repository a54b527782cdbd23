mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::io::ErrorKind;
use tracing::debug;

/// Loads configuration from CONFIG_PATH (default `config.yaml`), falling back to
/// built-in defaults when the file does not exist. `UPSTREAM_API_KEY` and `PORT`
/// environment variables override the file.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Ok(api_key) = env::var("UPSTREAM_API_KEY") {
        config.upstream.api_key = api_key;
    }
    if let Ok(port) = env::var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(config)
}

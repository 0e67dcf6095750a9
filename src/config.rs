use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// CLI configuration, read from ~/.config/calshare/config.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default share site for `calshare url` ("google", "yahoo", ...)
    #[serde(default)]
    pub default_site: Option<String>,

    /// Default IANA timezone for new events
    #[serde(default)]
    pub default_timezone: Option<String>,
}

/// Get the config file path (~/.config/calshare/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("calshare");
    Ok(config_dir.join("config.toml"))
}

impl Config {
    /// Load the config file, falling back to defaults when absent.
    pub fn load() -> Result<Config> {
        let path = config_path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        Ok(config)
    }
}

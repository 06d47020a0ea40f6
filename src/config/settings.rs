use super::network::{NetworkParams, MAINNET};
use crate::error::Result;
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

static DEFAULT_LOG_LEVEL: &str = "info";

const CONFIG_PATH_KEY: &str = "WALLET_CONFIG";
const NETWORK_KEY: &str = "WALLET_NETWORK";
const LOG_LEVEL_KEY: &str = "WALLET_LOG_LEVEL";

/// On-disk TOML layout; every field is optional
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    network: Option<String>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    network: &'static NetworkParams,
    log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            network: &MAINNET,
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

impl Config {
    /// Build the configuration from the file named by `WALLET_CONFIG` (if
    /// any), then apply `WALLET_NETWORK` and `WALLET_LOG_LEVEL` on top.
    pub fn load() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_KEY) {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.apply_overrides(lookup(NETWORK_KEY), lookup(LOG_LEVEL_KEY))?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Config::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut config = Config::default();
        config.apply_overrides(file.network, file.log_level)?;
        Ok(config)
    }

    fn apply_overrides(
        &mut self,
        network: Option<String>,
        log_level: Option<String>,
    ) -> Result<()> {
        if let Some(name) = network {
            self.set_network(&name)?;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn set_network(&mut self, name: &str) -> Result<()> {
        self.network = NetworkParams::by_name(name)?;
        Ok(())
    }

    pub fn network(&self) -> &'static NetworkParams {
        self.network
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

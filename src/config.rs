use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::address::AccountAddress;
use crate::network::{configure, EndpointConfig, Network};
use crate::rpc::DEFAULT_TIMEOUT;
use crate::store::{AddressStore, StoreSnapshot};

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

/// Hand-edited lists may hold blank entries; drop them instead of failing the whole file
fn lenient_addresses<'de, D>(deserializer: D) -> Result<Vec<AccountAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .filter_map(|s| AccountAddress::parse(s).ok())
        .collect())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub network: Network,
    /// Replaces the public mainnet endpoint when set
    #[serde(default)]
    pub mainnet_rpc_url: Option<String>,
    /// Replaces the public devnet endpoint when set
    #[serde(default)]
    pub devnet_rpc_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default, deserialize_with = "lenient_addresses")]
    pub history: Vec<AccountAddress>,
    #[serde(default, deserialize_with = "lenient_addresses")]
    pub favorites: Vec<AccountAddress>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: Network::default(),
            mainnet_rpc_url: None,
            devnet_rpc_url: None,
            request_timeout_secs: default_timeout_secs(),
            history: Vec::new(),
            favorites: Vec::new(),
        }
    }
}

impl Config {
    /// Returns the config directory path (~/.config/solscan on Linux)
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("solscan"))
            .context("Could not determine config directory")
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {dir:?}"))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        Ok(())
    }

    /// Endpoint for `network`, honoring any override
    pub fn endpoint(&self, network: Network) -> EndpointConfig {
        let custom = match network {
            Network::Mainnet => self.mainnet_rpc_url.as_deref(),
            Network::Devnet => self.devnet_rpc_url.as_deref(),
        };

        match custom {
            Some(url) if !url.trim().is_empty() => EndpointConfig::custom(network, url.trim()),
            _ => configure(network),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn store_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            history: self.history.clone(),
            favorites: self.favorites.clone(),
            network: self.network,
        }
    }

    /// Copy the store's state in and persist it
    pub fn remember(&mut self, store: &AddressStore) -> Result<()> {
        let snapshot = store.snapshot();
        self.history = snapshot.history;
        self.favorites = snapshot.favorites;
        self.network = snapshot.network;
        self.save()
    }
}

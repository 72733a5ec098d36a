use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Ledger cluster the explorer is pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Devnet,
}

impl Network {
    pub fn toggled(self) -> Self {
        match self {
            Self::Mainnet => Self::Devnet,
            Self::Devnet => Self::Mainnet,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Devnet => "Devnet",
        }
    }

    pub fn default_url(self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_RPC_URL,
            Self::Devnet => DEVNET_RPC_URL,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where JSON-RPC requests go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub network: Network,
    pub url: String,
}

impl EndpointConfig {
    pub fn custom(network: Network, url: impl Into<String>) -> Self {
        Self {
            network,
            url: url.into(),
        }
    }
}

/// Select the public endpoint for a network. No I/O.
pub fn configure(network: Network) -> EndpointConfig {
    EndpointConfig::custom(network, network.default_url())
}

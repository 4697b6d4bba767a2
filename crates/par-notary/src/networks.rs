use serde::{Deserialize, Serialize};

/// A named ledger network: endpoint plus optional API token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerNetwork {
    /// Human-readable network name.
    pub name: String,

    /// Base URL of the ledger node's REST API.
    pub endpoint: String,

    /// API token, where the node requires one (local development nodes
    /// ship with a fixed default token; hosted endpoints take none).
    pub api_token: Option<String>,
}

impl LedgerNetwork {
    /// Local development node.
    pub fn localnet() -> Self {
        Self {
            name: "localnet".to_string(),
            endpoint: "http://localhost:4001".to_string(),
            api_token: Some("a".repeat(64)),
        }
    }

    /// Public test network.
    pub fn testnet() -> Self {
        Self {
            name: "testnet".to_string(),
            endpoint: "https://testnet-api.anchornode.cloud".to_string(),
            api_token: None,
        }
    }

    /// Main network.
    pub fn mainnet() -> Self {
        Self {
            name: "mainnet".to_string(),
            endpoint: "https://mainnet-api.anchornode.cloud".to_string(),
            api_token: None,
        }
    }

    /// Resolve a network by selector string.
    pub fn get_network(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "localnet" | "local" => Some(Self::localnet()),
            "testnet" | "test" => Some(Self::testnet()),
            "mainnet" | "main" => Some(Self::mainnet()),
            _ => None,
        }
    }
}

use std::net::SocketAddr;
use std::path::Path;

use par_notary::LedgerConfig;
use par_registry::StorageConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Environment variable overriding the configured ledger account.
pub const LEDGER_ACCOUNT_ENV: &str = "PAR_LEDGER_ACCOUNT";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageConfig,
    pub ledger: LedgerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".parse().unwrap(),
            storage: StorageConfig::default(),
            ledger: LedgerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration: defaults, overlaid by a TOML file when given,
    /// overlaid by the environment.
    pub fn load(path: Option<&Path>) -> ServerResult<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                toml::from_str(&raw)
                    .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply environment overrides (`PAR_LEDGER_ACCOUNT`).
    pub fn apply_env(&mut self) {
        if let Ok(account) = std::env::var(LEDGER_ACCOUNT_ENV) {
            if !account.is_empty() {
                self.ledger.account = Some(account);
            }
        }
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storage strategy selected at process start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-memory only; assets vanish on restart.
    Memory,
    /// File-backed only; one document per asset, no ledger anchoring.
    File,
    /// Pure-ledger; write-only, no local copy.
    Ledger,
    /// Local tier plus best-effort ledger anchoring.
    Hybrid,
}

/// Local tier used by the hybrid strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalBackend {
    Memory,
    File,
}

/// Storage configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Local tier for the hybrid backend.
    pub local: LocalBackend,
    /// Storage directory for the file-backed tiers.
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Hybrid,
            local: LocalBackend::Memory,
            dir: PathBuf::from("data/assets"),
        }
    }
}

use std::path::PathBuf;

use par_crypto::AccountKey;
use par_types::{AssetId, AssetUploadRequest, TxId};
use serde::{Deserialize, Serialize};

use crate::client::LedgerClient;
use crate::error::{LedgerError, LedgerResult};
use crate::networks::LedgerNetwork;
use crate::record::{RecordParams, SignedRecord};

/// Configuration for the ledger connection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Network selector: `localnet`/`local`, `testnet`/`test`,
    /// `mainnet`/`main`.
    pub network: String,

    /// Account address (hex public key). Notarization is disabled when
    /// unset.
    pub account: Option<String>,

    /// Directory holding `{address}.key` files.
    pub key_dir: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            network: "localnet".to_string(),
            account: None,
            key_dir: PathBuf::from("data/keys"),
        }
    }
}

/// Configured account's balance report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountBalance {
    pub address: String,
    pub balance: u64,
}

/// Best-effort ledger notary.
///
/// Connecting never fails: a missing account, unreadable key, unknown
/// network, or unreachable node leaves the notary offline, and an offline
/// notary answers every `notarize` call with `None`. The local save path
/// must never be held hostage by the ledger.
pub struct LedgerNotary {
    client: Option<LedgerClient>,
    key: Option<AccountKey>,
}

impl LedgerNotary {
    /// Probe the configured network and set up the signing account.
    ///
    /// Any failure is logged at `warn` and downgrades the notary to
    /// offline; it is never surfaced to the caller.
    pub async fn connect(config: &LedgerConfig) -> Self {
        let Some(account) = &config.account else {
            tracing::warn!("no ledger account configured, notarization disabled");
            return Self::offline();
        };
        let key = match AccountKey::load(&config.key_dir, account) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!(account = %account, error = %e, "failed to load ledger account key, notarization disabled");
                return Self::offline();
            }
        };
        let Some(network) = LedgerNetwork::get_network(&config.network) else {
            tracing::warn!(network = %config.network, "unknown ledger network, notarization disabled");
            return Self::offline();
        };
        let client = match LedgerClient::new(&network) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build ledger client, notarization disabled");
                return Self::offline();
            }
        };
        match client.status().await {
            Ok(status) => {
                tracing::info!(network = %network.name, round = status.last_round, "connected to ledger");
                Self {
                    client: Some(client),
                    key: Some(key),
                }
            }
            Err(e) => {
                tracing::warn!(network = %network.name, error = %e, "ledger connection failed, notarization will be skipped");
                Self::offline()
            }
        }
    }

    /// A notary with no ledger behind it; every notarization is skipped.
    pub fn offline() -> Self {
        Self {
            client: None,
            key: None,
        }
    }

    /// Whether a ledger node was reachable at startup.
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// The configured account address, when a key was loaded.
    pub fn address(&self) -> Option<String> {
        self.key.as_ref().map(AccountKey::address)
    }

    /// Record the asset's identity on the ledger and wait for confirmation.
    ///
    /// Returns the opaque transaction reference, or `None` when the ledger
    /// was unreachable or rejected the record. Failures are logged, never
    /// raised, and never retried.
    pub async fn notarize(&self, id: &AssetId, request: &AssetUploadRequest) -> Option<TxId> {
        let (client, key) = match (&self.client, &self.key) {
            (Some(client), Some(key)) => (client, key),
            _ => {
                tracing::warn!(asset = %id.short_hex(), "ledger not available, skipping notarization");
                return None;
            }
        };
        match Self::submit(client, key, id, request).await {
            Ok(tx) => {
                tracing::info!(asset = %id.short_hex(), tx = %tx, "asset recorded on ledger");
                Some(tx)
            }
            Err(e) => {
                tracing::warn!(asset = %id.short_hex(), error = %e, "ledger write failed, skipping notarization");
                None
            }
        }
    }

    async fn submit(
        client: &LedgerClient,
        key: &AccountKey,
        id: &AssetId,
        request: &AssetUploadRequest,
    ) -> LedgerResult<TxId> {
        let record = RecordParams::for_asset(&key.address(), id, request)?;
        let signed = SignedRecord::sign(record, key)?;
        let tx = client.submit_record(&signed).await?;
        let round = client.wait_for_confirmation(&tx).await?;
        tracing::debug!(tx = %tx, round, "ledger record confirmed");
        Ok(tx)
    }

    /// The configured account's balance, in the ledger's smallest unit.
    pub async fn balance(&self) -> LedgerResult<AccountBalance> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| LedgerError::Unavailable("no ledger connection".to_string()))?;
        let address = self
            .address()
            .ok_or_else(|| LedgerError::Unavailable("no ledger account".to_string()))?;
        let balance = client.account_balance(&address).await?;
        Ok(AccountBalance { address, balance })
    }
}

impl std::fmt::Debug for LedgerNotary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerNotary")
            .field("connected", &self.is_connected())
            .finish()
    }
}

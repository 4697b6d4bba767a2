use std::sync::Arc;

use par_crypto::derive_asset_id;
use par_notary::{LedgerAssetStore, LedgerNotary};
use par_store::{AssetStore, FsAssetStore, InMemoryAssetStore};
use par_types::{Asset, AssetId, AssetSummary, AssetUploadRequest, TxId};

use crate::config::{LocalBackend, StorageBackend, StorageConfig};
use crate::error::RegistryResult;

/// Result of registering an asset: the derived identifier and the ledger
/// reference, when one was obtained.
#[derive(Clone, Debug)]
pub struct SaveOutcome {
    pub asset_id: AssetId,
    pub transaction: Option<TxId>,
}

/// The hybrid coordinator: local store as the durability source of truth,
/// ledger anchoring strictly best-effort on top.
pub struct AssetRegistry {
    local: Arc<dyn AssetStore>,
    notary: Option<Arc<LedgerNotary>>,
}

impl AssetRegistry {
    /// Build a registry over an explicit local store and optional notary.
    pub fn new(local: Arc<dyn AssetStore>, notary: Option<Arc<LedgerNotary>>) -> Self {
        Self { local, notary }
    }

    /// Build a registry from configuration.
    ///
    /// `notary` is used by the hybrid backend for anchoring and by the
    /// pure-ledger backend as its write target; the local-only backends
    /// ignore it.
    pub async fn open(
        storage: &StorageConfig,
        notary: Option<Arc<LedgerNotary>>,
    ) -> RegistryResult<Self> {
        let registry = match storage.backend {
            StorageBackend::Memory => Self::new(Arc::new(InMemoryAssetStore::new()), None),
            StorageBackend::File => {
                Self::new(Arc::new(FsAssetStore::open(&storage.dir).await?), None)
            }
            StorageBackend::Ledger => {
                let notary = notary.unwrap_or_else(|| Arc::new(LedgerNotary::offline()));
                Self::new(Arc::new(LedgerAssetStore::new(notary)), None)
            }
            StorageBackend::Hybrid => {
                let local: Arc<dyn AssetStore> = match storage.local {
                    LocalBackend::Memory => Arc::new(InMemoryAssetStore::new()),
                    LocalBackend::File => Arc::new(FsAssetStore::open(&storage.dir).await?),
                };
                Self::new(local, notary)
            }
        };
        Ok(registry)
    }

    /// Register an asset: derive its identity, persist it locally, anchor
    /// it on the ledger best-effort, and link the reference back.
    ///
    /// The local save is always attempted and is the only step whose
    /// failure aborts the operation. A failed or skipped notarization
    /// leaves the asset stored with no ledger link, forever -- there is no
    /// rollback and no background reconciliation.
    pub async fn save_and_link(
        &self,
        request: &AssetUploadRequest,
    ) -> RegistryResult<SaveOutcome> {
        let asset_id = derive_asset_id(request);
        self.local.save(request, &asset_id).await?;
        tracing::debug!(asset = %asset_id.short_hex(), "asset saved locally");

        let transaction = match &self.notary {
            Some(notary) => notary.notarize(&asset_id, request).await,
            None => None,
        };
        if let Some(tx) = &transaction {
            self.local.link_transaction(&asset_id, tx).await?;
            tracing::info!(asset = %asset_id.short_hex(), tx = %tx, "asset linked to ledger transaction");
        }

        Ok(SaveOutcome {
            asset_id,
            transaction,
        })
    }

    /// Summaries of every stored asset.
    pub async fn list(&self) -> RegistryResult<Vec<AssetSummary>> {
        Ok(self.local.list().await?)
    }

    /// Point lookup by identifier.
    pub async fn retrieve(&self, id: &AssetId) -> RegistryResult<Option<Asset>> {
        Ok(self.local.retrieve(id).await?)
    }

    /// The ledger reference linked to an identifier, if any.
    pub async fn linked_transaction(&self, id: &AssetId) -> RegistryResult<Option<TxId>> {
        Ok(self.local.linked_transaction(id).await?)
    }
}

impl std::fmt::Debug for AssetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetRegistry")
            .field("anchored", &self.notary.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use par_types::GpsCoordinates;

    fn sample_request() -> AssetUploadRequest {
        AssetUploadRequest {
            description: "Test asset".into(),
            content: "This is test content".into(),
            location: GpsCoordinates::new(40.7128, -74.0060),
            timestamp: "2024-01-01T12:00:00".parse().unwrap(),
            creator: "creator123".into(),
            publisher: "publisher456".into(),
        }
    }

    fn memory_registry() -> AssetRegistry {
        AssetRegistry::new(Arc::new(InMemoryAssetStore::new()), None)
    }

    #[tokio::test]
    async fn save_and_link_returns_derived_identifier() {
        let registry = memory_registry();
        let outcome = registry.save_and_link(&sample_request()).await.unwrap();
        assert_eq!(outcome.asset_id, derive_asset_id(&sample_request()));
        assert!(outcome.transaction.is_none());
    }

    #[tokio::test]
    async fn saved_asset_is_retrievable() {
        let registry = memory_registry();
        let request = sample_request();
        let outcome = registry.save_and_link(&request).await.unwrap();

        let asset = registry
            .retrieve(&outcome.asset_id)
            .await
            .unwrap()
            .expect("should exist");
        assert_eq!(asset.asset_id, outcome.asset_id);
        assert_eq!(asset.content, request.content);
        assert_eq!(asset.description, request.description);
    }

    #[tokio::test]
    async fn ledger_unavailable_still_saves_locally() {
        // Hybrid configuration with an offline notary: the register path
        // must still produce a valid identifier and a retrievable asset.
        let registry = AssetRegistry::new(
            Arc::new(InMemoryAssetStore::new()),
            Some(Arc::new(LedgerNotary::offline())),
        );
        let outcome = registry.save_and_link(&sample_request()).await.unwrap();

        assert_eq!(outcome.asset_id.to_hex().len(), 64);
        assert!(outcome.transaction.is_none());
        assert!(registry
            .retrieve(&outcome.asset_id)
            .await
            .unwrap()
            .is_some());
        assert!(registry
            .linked_transaction(&outcome.asset_id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn identical_input_registers_once() {
        let registry = memory_registry();
        let first = registry.save_and_link(&sample_request()).await.unwrap();
        let second = registry.save_and_link(&sample_request()).await.unwrap();
        assert_eq!(first.asset_id, second.asset_id);
        assert_eq!(registry.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn distinct_inputs_register_separately() {
        let registry = memory_registry();
        let mut other = sample_request();
        other.content = "Entirely different content".into();

        let first = registry.save_and_link(&sample_request()).await.unwrap();
        let second = registry.save_and_link(&other).await.unwrap();
        assert_ne!(first.asset_id, second.asset_id);

        let summaries = registry.list().await.unwrap();
        assert_eq!(summaries.len(), 2);
        let ids: Vec<AssetId> = summaries.iter().map(|s| s.asset_id).collect();
        assert!(ids.contains(&first.asset_id));
        assert!(ids.contains(&second.asset_id));
    }

    #[tokio::test]
    async fn retrieve_unknown_returns_none() {
        let registry = memory_registry();
        let unknown = AssetId::from_digest([0; 32]);
        assert!(registry.retrieve(&unknown).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn open_file_backend_persists_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            local: LocalBackend::Memory,
            dir: dir.path().join("assets"),
        };
        let registry = AssetRegistry::open(&config, None).await.unwrap();
        let outcome = registry.save_and_link(&sample_request()).await.unwrap();
        assert!(dir
            .path()
            .join("assets")
            .join(format!("{}.json", outcome.asset_id))
            .exists());
    }

    #[tokio::test]
    async fn open_ledger_backend_is_write_only() {
        let config = StorageConfig {
            backend: StorageBackend::Ledger,
            ..StorageConfig::default()
        };
        let registry = AssetRegistry::open(&config, None).await.unwrap();
        let outcome = registry.save_and_link(&sample_request()).await.unwrap();
        assert!(registry.retrieve(&outcome.asset_id).await.unwrap().is_none());
        assert!(registry.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn open_hybrid_backend_over_file_tier() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::Hybrid,
            local: LocalBackend::File,
            dir: dir.path().join("assets"),
        };
        let registry = AssetRegistry::open(&config, Some(Arc::new(LedgerNotary::offline())))
            .await
            .unwrap();
        let outcome = registry.save_and_link(&sample_request()).await.unwrap();
        assert!(registry.retrieve(&outcome.asset_id).await.unwrap().is_some());
        assert!(outcome.transaction.is_none());
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use par_store::{AssetStore, StoreResult};
use par_types::{Asset, AssetId, AssetSummary, AssetUploadRequest, TxId};

use crate::notary::LedgerNotary;

/// Pure-ledger storage strategy.
///
/// Saving records the asset's identity on the ledger and keeps nothing
/// locally. Listing and retrieval would require scanning the ledger, which
/// this system deliberately does not implement, so both degrade to empty
/// results with a warning. Links are meaningless here -- the ledger record
/// *is* the transaction.
pub struct LedgerAssetStore {
    notary: Arc<LedgerNotary>,
}

impl LedgerAssetStore {
    pub fn new(notary: Arc<LedgerNotary>) -> Self {
        Self { notary }
    }
}

#[async_trait]
impl AssetStore for LedgerAssetStore {
    async fn save(&self, request: &AssetUploadRequest, id: &AssetId) -> StoreResult<()> {
        // Best-effort by contract: a skipped notarization is not a save
        // failure.
        self.notary.notarize(id, request).await;
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<AssetSummary>> {
        tracing::warn!("asset listing is not supported by the pure-ledger store");
        Ok(Vec::new())
    }

    async fn retrieve(&self, _id: &AssetId) -> StoreResult<Option<Asset>> {
        tracing::warn!("asset retrieval is not supported by the pure-ledger store");
        Ok(None)
    }

    async fn link_transaction(&self, id: &AssetId, _tx: &TxId) -> StoreResult<()> {
        tracing::debug!(asset = %id.short_hex(), "pure-ledger store ignores transaction links");
        Ok(())
    }

    async fn linked_transaction(&self, _id: &AssetId) -> StoreResult<Option<TxId>> {
        Ok(None)
    }
}

impl std::fmt::Debug for LedgerAssetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerAssetStore")
            .field("notary", &self.notary)
            .finish()
    }
}

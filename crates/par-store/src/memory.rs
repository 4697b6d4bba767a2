use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use par_types::{Asset, AssetId, AssetSummary, AssetUploadRequest, TxId};

use crate::error::StoreResult;
use crate::traits::AssetStore;

#[derive(Default)]
struct Inner {
    assets: HashMap<AssetId, Asset>,
    // Insertion order of first appearance; listing follows it.
    order: Vec<AssetId>,
    links: HashMap<AssetId, TxId>,
}

/// In-memory, HashMap-based asset store.
///
/// Intended for tests, demos, and ephemeral deployments. All records are
/// held behind a `RwLock` for safe concurrent access and cloned on read.
/// Listing preserves the order in which identifiers were first saved.
pub struct InMemoryAssetStore {
    inner: RwLock<Inner>,
}

impl InMemoryAssetStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Number of assets currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").assets.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").assets.is_empty()
    }
}

impl Default for InMemoryAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn save(&self, request: &AssetUploadRequest, id: &AssetId) -> StoreResult<()> {
        let asset = Asset::from_request(*id, request);
        let mut inner = self.inner.write().expect("lock poisoned");
        if inner.assets.insert(*id, asset).is_none() {
            inner.order.push(*id);
        }
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<AssetSummary>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.assets.get(id))
            .map(Asset::summary)
            .collect())
    }

    async fn retrieve(&self, id: &AssetId) -> StoreResult<Option<Asset>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.assets.get(id).cloned())
    }

    async fn link_transaction(&self, id: &AssetId, tx: &TxId) -> StoreResult<()> {
        // Stored regardless of whether the asset is known; the link map is
        // keyed independently of the asset map.
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.links.insert(*id, tx.clone());
        Ok(())
    }

    async fn linked_transaction(&self, id: &AssetId) -> StoreResult<Option<TxId>> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.links.get(id).cloned())
    }
}

impl std::fmt::Debug for InMemoryAssetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAssetStore")
            .field("asset_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use par_types::GpsCoordinates;

    fn make_request(description: &str, content: &str) -> AssetUploadRequest {
        AssetUploadRequest {
            description: description.into(),
            content: content.into(),
            location: GpsCoordinates::new(40.7128, -74.0060),
            timestamp: "2024-01-01T12:00:00".parse().unwrap(),
            creator: "creator1".into(),
            publisher: "publisher1".into(),
        }
    }

    fn make_id(fill: u8) -> AssetId {
        AssetId::from_digest([fill; 32])
    }

    // -----------------------------------------------------------------------
    // Core contract
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryAssetStore::new();
        assert!(store.list().await.unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn save_two_assets_lists_both() {
        let store = InMemoryAssetStore::new();
        store
            .save(&make_request("First test asset", "Content of first asset"), &make_id(1))
            .await
            .unwrap();
        store
            .save(&make_request("Second test asset", "Content of second asset"), &make_id(2))
            .await
            .unwrap();

        let summaries = store.list().await.unwrap();
        assert_eq!(summaries.len(), 2);

        let ids: Vec<AssetId> = summaries.iter().map(|s| s.asset_id).collect();
        assert!(ids.contains(&make_id(1)));
        assert!(ids.contains(&make_id(2)));

        let descriptions: Vec<&str> =
            summaries.iter().map(|s| s.description.as_str()).collect();
        assert!(descriptions.contains(&"First test asset"));
        assert!(descriptions.contains(&"Second test asset"));
    }

    #[tokio::test]
    async fn retrieve_round_trips_all_fields() {
        let store = InMemoryAssetStore::new();
        let request = make_request("Retrievable asset", "Content for retrieval test");
        let id = make_id(3);
        store.save(&request, &id).await.unwrap();

        let asset = store.retrieve(&id).await.unwrap().expect("should exist");
        assert_eq!(asset.asset_id, id);
        assert_eq!(asset.description, request.description);
        assert_eq!(asset.content, request.content);
        assert_eq!(asset.location, request.location);
        assert_eq!(asset.timestamp, request.timestamp);
        assert_eq!(asset.creator, request.creator);
        assert_eq!(asset.publisher, request.publisher);
    }

    #[tokio::test]
    async fn retrieve_unknown_returns_none() {
        let store = InMemoryAssetStore::new();
        assert!(store.retrieve(&make_id(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_is_last_write_wins() {
        let store = InMemoryAssetStore::new();
        let id = make_id(4);
        store.save(&make_request("first", "a"), &id).await.unwrap();
        store.save(&make_request("second", "b"), &id).await.unwrap();

        assert_eq!(store.len(), 1);
        let asset = store.retrieve(&id).await.unwrap().unwrap();
        assert_eq!(asset.description, "second");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order() {
        let store = InMemoryAssetStore::new();
        for fill in [5u8, 1, 3] {
            store
                .save(&make_request(&format!("asset-{fill}"), "x"), &make_id(fill))
                .await
                .unwrap();
        }
        let ids: Vec<AssetId> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.asset_id)
            .collect();
        assert_eq!(ids, vec![make_id(5), make_id(1), make_id(3)]);
    }

    // -----------------------------------------------------------------------
    // Ledger links
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn link_then_read_back() {
        let store = InMemoryAssetStore::new();
        let id = make_id(6);
        store.save(&make_request("linked", "x"), &id).await.unwrap();
        store
            .link_transaction(&id, &TxId::new("TXN42"))
            .await
            .unwrap();
        assert_eq!(
            store.linked_transaction(&id).await.unwrap(),
            Some(TxId::new("TXN42"))
        );
    }

    #[tokio::test]
    async fn link_for_unknown_identifier_is_stored() {
        let store = InMemoryAssetStore::new();
        let id = make_id(7);
        store
            .link_transaction(&id, &TxId::new("orphan"))
            .await
            .unwrap();
        assert_eq!(
            store.linked_transaction(&id).await.unwrap(),
            Some(TxId::new("orphan"))
        );
    }

    #[tokio::test]
    async fn unlinked_identifier_has_no_transaction() {
        let store = InMemoryAssetStore::new();
        let id = make_id(8);
        store.save(&make_request("bare", "x"), &id).await.unwrap();
        assert!(store.linked_transaction(&id).await.unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Concurrent access
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn concurrent_saves_of_identical_input_are_harmless() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryAssetStore::new());
        let id = make_id(10);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .save(&make_request("same", "same content"), &id)
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[test]
    fn debug_format() {
        let store = InMemoryAssetStore::new();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryAssetStore"));
        assert!(debug.contains("asset_count"));
    }
}

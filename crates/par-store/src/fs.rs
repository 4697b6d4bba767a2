use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use par_types::{Asset, AssetId, AssetSummary, AssetUploadRequest, TxId};
use tokio::fs;

use crate::error::{StoreError, StoreResult};
use crate::traits::AssetStore;

/// File-backed asset store.
///
/// Each asset is one self-describing JSON document named
/// `{identifier}.json` under the storage directory; a linked ledger
/// reference is a `{identifier}.txid` sidecar holding the raw reference
/// string. Listing follows directory iteration order and skips records
/// that no longer decode, counting them into a single warning per listing
/// rather than failing the whole operation.
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// The storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn asset_path(&self, id: &AssetId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    fn link_path(&self, id: &AssetId) -> PathBuf {
        self.root.join(format!("{id}.txid"))
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn save(&self, request: &AssetUploadRequest, id: &AssetId) -> StoreResult<()> {
        let asset = Asset::from_request(*id, request);
        let document = serde_json::to_vec_pretty(&asset)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(self.asset_path(id), document).await?;
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<AssetSummary>> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut summaries = Vec::new();
        let mut skipped = 0usize;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match fs::read(&path).await {
                Ok(bytes) => match serde_json::from_slice::<Asset>(&bytes) {
                    Ok(asset) => summaries.push(asset.summary()),
                    Err(_) => skipped += 1,
                },
                Err(_) => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, root = %self.root.display(), "skipped undecodable asset records during listing");
        }
        Ok(summaries)
    }

    async fn retrieve(&self, id: &AssetId) -> StoreResult<Option<Asset>> {
        let path = self.asset_path(id);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::warn!(asset = %id.short_hex(), error = %e, "asset record unreadable, treating as absent");
                return Ok(None);
            }
        };
        match serde_json::from_slice::<Asset>(&bytes) {
            Ok(asset) => Ok(Some(asset)),
            Err(e) => {
                tracing::warn!(asset = %id.short_hex(), error = %e, "asset record undecodable, treating as absent");
                Ok(None)
            }
        }
    }

    async fn link_transaction(&self, id: &AssetId, tx: &TxId) -> StoreResult<()> {
        if !fs::try_exists(self.asset_path(id)).await? {
            tracing::debug!(asset = %id.short_hex(), "link for unknown asset ignored");
            return Ok(());
        }
        fs::write(self.link_path(id), tx.as_str()).await?;
        Ok(())
    }

    async fn linked_transaction(&self, id: &AssetId) -> StoreResult<Option<TxId>> {
        match fs::read_to_string(self.link_path(id)).await {
            Ok(reference) => Ok(Some(TxId::new(reference.trim()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::warn!(asset = %id.short_hex(), error = %e, "link record unreadable, treating as absent");
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for FsAssetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsAssetStore")
            .field("root", &self.root)
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
            location: GpsCoordinates::new(37.7749, -122.4194),
            timestamp: "2024-01-02T15:30:00".parse().unwrap(),
            creator: "creator2".into(),
            publisher: "publisher2".into(),
        }
    }

    fn make_id(fill: u8) -> AssetId {
        AssetId::from_digest([fill; 32])
    }

    #[tokio::test]
    async fn fresh_store_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_writes_document_named_by_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        let id = make_id(1);
        store.save(&make_request("doc", "content"), &id).await.unwrap();
        assert!(dir.path().join(format!("{id}.json")).exists());
    }

    #[tokio::test]
    async fn retrieve_round_trips_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        let request = make_request("Retrievable asset", "Content for retrieval test");
        let id = make_id(2);
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
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        assert!(store.retrieve(&make_id(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_all_saved_assets() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        store.save(&make_request("one", "a"), &make_id(1)).await.unwrap();
        store.save(&make_request("two", "b"), &make_id(2)).await.unwrap();

        let summaries = store.list().await.unwrap();
        assert_eq!(summaries.len(), 2);
        let descriptions: Vec<&str> =
            summaries.iter().map(|s| s.description.as_str()).collect();
        assert!(descriptions.contains(&"one"));
        assert!(descriptions.contains(&"two"));
    }

    #[tokio::test]
    async fn corrupt_records_are_skipped_in_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        store.save(&make_request("good", "a"), &make_id(1)).await.unwrap();
        std::fs::write(dir.path().join(format!("{}.json", make_id(2))), "{not json").unwrap();

        let summaries = store.list().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].description, "good");
    }

    #[tokio::test]
    async fn corrupt_record_retrieves_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        let id = make_id(3);
        std::fs::write(dir.path().join(format!("{id}.json")), "garbage").unwrap();
        assert!(store.retrieve(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn non_json_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        std::fs::write(dir.path().join("notes.txt"), "unrelated").unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_is_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        let id = make_id(4);
        store.save(&make_request("first", "a"), &id).await.unwrap();
        store.save(&make_request("second", "b"), &id).await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), 1);
        let asset = store.retrieve(&id).await.unwrap().unwrap();
        assert_eq!(asset.description, "second");
    }

    #[tokio::test]
    async fn link_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        let id = make_id(5);
        store.save(&make_request("linked", "x"), &id).await.unwrap();
        store.link_transaction(&id, &TxId::new("TXN99")).await.unwrap();
        assert_eq!(
            store.linked_transaction(&id).await.unwrap(),
            Some(TxId::new("TXN99"))
        );
    }

    #[tokio::test]
    async fn link_for_unknown_identifier_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::open(dir.path()).await.unwrap();
        let id = make_id(6);
        store.link_transaction(&id, &TxId::new("orphan")).await.unwrap();
        assert!(store.linked_transaction(&id).await.unwrap().is_none());
        assert!(!dir.path().join(format!("{id}.txid")).exists());
    }

    #[tokio::test]
    async fn listing_survives_removed_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("assets");
        let store = FsAssetStore::open(&root).await.unwrap();
        std::fs::remove_dir_all(&root).unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}

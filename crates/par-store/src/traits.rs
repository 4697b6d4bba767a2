use async_trait::async_trait;
use par_types::{Asset, AssetId, AssetSummary, AssetUploadRequest, TxId};

use crate::error::StoreResult;

/// Local asset store.
///
/// All implementations must satisfy these invariants:
/// - `save` is last-write-wins per identifier. Identifiers are expected
///   (not enforced) to be content-derived, so two writes to the same
///   identifier carry identical content and the race is harmless.
/// - `retrieve` of an unknown identifier is `Ok(None)`, never an error.
/// - `list` order is backend-specific; callers must not depend on it.
/// - `link_transaction` for an unknown identifier is a no-op concern, not
///   an error.
/// - I/O failures on the write path are propagated; unreadable records on
///   the read path degrade to absence.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Construct an [`Asset`] from the request and identifier and store it,
    /// replacing any prior record at that identifier.
    async fn save(&self, request: &AssetUploadRequest, id: &AssetId) -> StoreResult<()>;

    /// Summaries of every stored asset.
    async fn list(&self) -> StoreResult<Vec<AssetSummary>>;

    /// Point lookup by identifier.
    async fn retrieve(&self, id: &AssetId) -> StoreResult<Option<Asset>>;

    /// Record a ledger transaction reference against an identifier.
    async fn link_transaction(&self, id: &AssetId, tx: &TxId) -> StoreResult<()>;

    /// The ledger reference linked to an identifier, if any.
    async fn linked_transaction(&self, id: &AssetId) -> StoreResult<Option<TxId>>;
}

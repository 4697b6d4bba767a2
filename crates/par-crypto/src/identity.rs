use chrono::NaiveDateTime;
use par_types::{AssetId, AssetUploadRequest};
use serde_json::json;
use sha2::{Digest, Sha256};

/// Rendering used for timestamps inside the canonical record. The fraction
/// is omitted when zero, so whole-second timestamps stay short.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Derive the content-addressed identifier for an upload request.
///
/// The identifier is the SHA-256 digest of the canonical identity record
/// (see [`canonical_record`]). Derivation is deterministic across runs and
/// processes, and cannot fail.
pub fn derive_asset_id(request: &AssetUploadRequest) -> AssetId {
    let canonical = canonical_record(request);
    let digest = Sha256::digest(canonical.as_bytes());
    AssetId::from_digest(digest.into())
}

/// Canonical serialization of the identity-bearing fields.
///
/// Exactly `content`, `location.latitude`, `location.longitude`,
/// `timestamp`, `creator`, and `publisher` participate. `description` is
/// deliberately excluded: editing the human-facing label of an asset must
/// not change its identity.
///
/// serde_json's default object representation keeps keys in lexicographic
/// order and `to_string` emits no whitespace, so two logically-identical
/// records always serialize to the same bytes regardless of field-insertion
/// order.
pub fn canonical_record(request: &AssetUploadRequest) -> String {
    json!({
        "content": request.content,
        "location": {
            "latitude": request.location.latitude,
            "longitude": request.location.longitude,
        },
        "timestamp": render_timestamp(&request.timestamp),
        "creator": request.creator,
        "publisher": request.publisher,
    })
    .to_string()
}

fn render_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

use chrono::NaiveDateTime;
use par_crypto::AccountKey;
use par_types::{AssetId, AssetUploadRequest};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{LedgerError, LedgerResult};

/// Type tag carried in every notarization note.
pub const NOTE_TYPE: &str = "asset_registry";

/// Ledger field-length limits, in characters.
pub const NOTE_DESCRIPTION_LIMIT: usize = 100;
pub const RECORD_NAME_LIMIT: usize = 32;
pub const RECORD_UNIT_LIMIT: usize = 8;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The metadata the ledger record commits to.
///
/// The payload itself never leaves this process; only the SHA-256 digest of
/// its compact JSON serialization is written to the ledger, as the record's
/// commitment field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NotePayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub asset_id: AssetId,
    pub description: String,
    pub creator: String,
    pub publisher: String,
    pub timestamp: String,
}

impl NotePayload {
    /// Build the note for an asset, truncating the description to the note
    /// limit.
    pub fn for_asset(id: &AssetId, request: &AssetUploadRequest) -> Self {
        Self {
            kind: NOTE_TYPE.to_string(),
            asset_id: *id,
            description: truncate_chars(&request.description, NOTE_DESCRIPTION_LIMIT),
            creator: request.creator.clone(),
            publisher: request.publisher.clone(),
            timestamp: render_timestamp(&request.timestamp),
        }
    }

    /// Hex-encoded SHA-256 commitment over the compact JSON serialization.
    pub fn commitment(&self) -> LedgerResult<String> {
        let bytes =
            serde_json::to_vec(self).map_err(|e| LedgerError::Serialization(e.to_string()))?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}

/// The minimal record created on the ledger: a short name, a shorter
/// unit/ticker, a one-of-one supply marker, and the metadata commitment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordParams {
    pub name: String,
    pub unit: String,
    pub total: u64,
    pub decimals: u32,
    pub commitment: String,
    pub sender: String,
}

impl RecordParams {
    /// Build the ledger record for an asset. Name and unit come from the
    /// description, truncated to the ledger's field limits, with fixed
    /// fallbacks when the description is empty.
    pub fn for_asset(
        sender: &str,
        id: &AssetId,
        request: &AssetUploadRequest,
    ) -> LedgerResult<Self> {
        let name = if request.description.is_empty() {
            "Asset".to_string()
        } else {
            truncate_chars(&request.description, RECORD_NAME_LIMIT)
        };
        let unit = if request.description.is_empty() {
            "ASSET".to_string()
        } else {
            truncate_chars(&request.description, RECORD_UNIT_LIMIT)
        };
        Ok(Self {
            name,
            unit,
            total: 1,
            decimals: 0,
            commitment: NotePayload::for_asset(id, request).commitment()?,
            sender: sender.to_string(),
        })
    }
}

/// A record plus the sender's signature over its serialized bytes -- the
/// unit of submission the ledger node accepts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignedRecord {
    pub record: RecordParams,
    pub signature: String,
}

impl SignedRecord {
    /// Sign `record` with the sender's account key.
    pub fn sign(record: RecordParams, key: &AccountKey) -> LedgerResult<Self> {
        let bytes = serde_json::to_vec(&record)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        let signature = key.sign(&bytes);
        Ok(Self { record, signature })
    }
}

/// Truncate to at most `limit` characters, respecting char boundaries.
pub(crate) fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}

fn render_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

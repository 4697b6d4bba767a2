use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::id::AssetId;

/// GPS coordinates attached to an asset at capture time.
///
/// No range validation is performed; the values are carried verbatim and
/// participate in identity derivation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Registration input: the content being registered plus its capture
/// metadata. Immutable once constructed.
///
/// The timestamp is caller-supplied (ISO-8601, no timezone) -- the registry
/// records the claimed capture time, it does not stamp its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetUploadRequest {
    pub description: String,
    pub content: String,
    pub location: GpsCoordinates,
    pub timestamp: NaiveDateTime,
    pub creator: String,
    pub publisher: String,
}

/// The persisted asset record: identifier plus every field of the upload
/// request. Created once at save time and never mutated; re-registering the
/// same content yields the same identifier and an identical record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: AssetId,
    pub description: String,
    pub content: String,
    pub location: GpsCoordinates,
    pub timestamp: NaiveDateTime,
    pub creator: String,
    pub publisher: String,
}

impl Asset {
    /// Build the persisted record from an upload request and its derived
    /// identifier.
    pub fn from_request(asset_id: AssetId, request: &AssetUploadRequest) -> Self {
        Self {
            asset_id,
            description: request.description.clone(),
            content: request.content.clone(),
            location: request.location,
            timestamp: request.timestamp,
            creator: request.creator.clone(),
            publisher: request.publisher.clone(),
        }
    }

    /// Listing projection of this asset.
    pub fn summary(&self) -> AssetSummary {
        AssetSummary {
            asset_id: self.asset_id,
            description: self.description.clone(),
        }
    }
}

/// Identifier + description projection of an [`Asset`], used for listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    pub asset_id: AssetId,
    pub description: String,
}

//! Foundation types for the Provenance Asset Registry.
//!
//! An *asset* is an immutable record of arbitrary text content plus capture
//! metadata (GPS location, timestamp, creator, publisher). Every asset is
//! named by an [`AssetId`] -- the SHA-256 digest of its content-bearing
//! fields -- so identical input always maps to the same identifier.
//!
//! # Types
//!
//! - [`AssetId`] -- validated 64-character lowercase hex identifier
//! - [`AssetUploadRequest`] -- the registration input
//! - [`Asset`] -- the persisted record (request fields + identifier)
//! - [`AssetSummary`] -- identifier + description projection for listing
//! - [`TxId`] -- opaque ledger transaction reference

pub mod asset;
pub mod error;
pub mod id;
pub mod tx;

// Re-export primary types at crate root for ergonomic imports.
pub use asset::{Asset, AssetSummary, AssetUploadRequest, GpsCoordinates};
pub use error::TypeError;
pub use id::AssetId;
pub use tx::TxId;

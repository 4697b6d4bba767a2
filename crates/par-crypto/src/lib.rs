//! Cryptographic primitives for the Provenance Asset Registry.
//!
//! Two concerns live here:
//!
//! - [`identity`] -- deriving an [`AssetId`](par_types::AssetId) from an
//!   upload request: canonical JSON over the content-bearing fields,
//!   hashed with SHA-256.
//! - [`keys`] -- ed25519 account key material for signing ledger records:
//!   generation, key-file loading, and signature verification.

pub mod identity;
pub mod keys;

pub use identity::{canonical_record, derive_asset_id};
pub use keys::{AccountKey, KeyError};

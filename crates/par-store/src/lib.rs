//! Local asset storage for the Provenance Asset Registry.
//!
//! The local store holds the authoritative copy of every registered
//! [`Asset`](par_types::Asset), keyed by its content-derived identifier,
//! plus the (optional) ledger transaction reference linked to it after
//! notarization.
//!
//! # Storage Backends
//!
//! All backends implement the [`AssetStore`] trait:
//!
//! - [`InMemoryAssetStore`] -- `HashMap`-based store for tests, demos, and
//!   ephemeral deployments
//! - [`FsAssetStore`] -- one JSON document per asset under a storage
//!   directory, named by identifier
//!
//! # Design Rules
//!
//! 1. Assets are immutable once written; a repeated save of the same
//!    identifier replaces the record (identical input derives identical
//!    content, so the replacement is a no-op in practice).
//! 2. Absence is `Ok(None)`, never an error.
//! 3. Ledger links are recorded independently of the asset write and may
//!    be missing forever.
//! 4. Listing favors availability: undecodable records are skipped (and
//!    counted), not fatal.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use fs::FsAssetStore;
pub use memory::InMemoryAssetStore;
pub use traits::AssetStore;

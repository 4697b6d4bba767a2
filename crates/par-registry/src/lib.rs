//! Hybrid storage coordination for the Provenance Asset Registry.
//!
//! The [`AssetRegistry`] ties the pieces together: derive the asset's
//! identity, persist it in the local store (the durability source of
//! truth), then anchor the identity on the ledger best-effort and link the
//! resulting transaction reference back into the local record. The ledger
//! step never rolls back or blocks the local save -- cross-store
//! consistency is an explicit non-goal.
//!
//! The storage strategy (in-memory, file-backed, pure-ledger, or hybrid)
//! is selected once at process start via [`StorageConfig`] and injected
//! into the registry; there is no process-wide mutable storage singleton.

pub mod config;
pub mod error;
pub mod registry;

pub use config::{LocalBackend, StorageBackend, StorageConfig};
pub use error::{RegistryError, RegistryResult};
pub use registry::{AssetRegistry, SaveOutcome};

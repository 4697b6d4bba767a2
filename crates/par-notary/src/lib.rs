//! Ledger notarization for the Provenance Asset Registry.
//!
//! The ledger is an external append-only service used purely as an
//! immutability anchor. The registry needs exactly two things from it:
//! create a record carrying a commitment to the asset's metadata, and wait
//! for confirmation, yielding an opaque transaction reference. Everything
//! here is best-effort by design: a ledger that is down, slow, or rejecting
//! records never fails an asset registration.
//!
//! - [`LedgerNetwork`] -- named endpoints (local / testnet / mainnet)
//! - [`LedgerClient`] -- thin HTTP client (status, submit, confirm, balance)
//! - [`LedgerNotary`] -- signs and submits notarization records, converting
//!   every failure into "no reference produced"
//! - [`LedgerAssetStore`] -- pure-ledger storage strategy (write-only)

pub mod client;
pub mod error;
pub mod networks;
pub mod notary;
pub mod record;
pub mod store;

pub use client::LedgerClient;
pub use error::{LedgerError, LedgerResult};
pub use networks::LedgerNetwork;
pub use notary::{AccountBalance, LedgerConfig, LedgerNotary};
pub use record::{NotePayload, RecordParams, SignedRecord};
pub use store::LedgerAssetStore;

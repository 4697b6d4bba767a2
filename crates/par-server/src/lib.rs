//! HTTP server for the Provenance Asset Registry.
//!
//! A thin axum surface over the [`AssetRegistry`](par_registry::AssetRegistry):
//! upload, list, point retrieval, ledger balance, and liveness probes. All
//! engineering substance lives below this layer; handlers translate
//! registry results into the response envelopes and nothing more.

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use api::{
    AssetResponse, AssetUploadResponse, AssetsListResponse, BalanceResponse, HealthResponse,
};
pub use config::{ServerConfig, LEDGER_ACCOUNT_ENV};
pub use error::{ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::RegistryServer;

use std::sync::Arc;

use par_notary::LedgerNotary;
use par_registry::AssetRegistry;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, AppState};

/// Provenance Asset Registry server.
pub struct RegistryServer {
    config: ServerConfig,
}

impl RegistryServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Wire up the notary and registry from configuration.
    ///
    /// The notary connects once at startup when a ledger account is
    /// configured; an unreachable ledger leaves it offline rather than
    /// failing startup. Also reused by the CLI commands, which operate on
    /// the same state without the HTTP layer.
    pub async fn build_state(&self) -> ServerResult<AppState> {
        let notary = if self.config.ledger.account.is_some() {
            Some(Arc::new(LedgerNotary::connect(&self.config.ledger).await))
        } else {
            None
        };
        let registry = AssetRegistry::open(&self.config.storage, notary.clone()).await?;
        Ok(AppState {
            registry: Arc::new(registry),
            notary,
        })
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let state = self.build_state().await?;
        let app = build_router(state);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("asset registry listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

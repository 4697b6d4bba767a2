use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use par_notary::LedgerNotary;
use par_registry::AssetRegistry;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;

/// Shared per-request state: the registry, and the notary handle for the
/// balance endpoint (present whenever a ledger account is configured,
/// independent of the storage strategy).
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<AssetRegistry>,
    pub notary: Option<Arc<LedgerNotary>>,
}

/// Build the axum router with all registry endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::root_handler))
        .route("/health", get(handler::health_handler))
        .route("/upload", post(handler::upload_handler))
        .route("/assets", get(handler::list_assets_handler))
        .route("/assets/:asset_id", get(handler::get_asset_handler))
        .route("/balance", get(handler::balance_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use par_types::{AssetId, AssetUploadRequest};

use crate::api::{
    AssetResponse, AssetUploadResponse, AssetsListResponse, BalanceResponse, HealthResponse,
};
use crate::router::AppState;

/// Root handler: static liveness payload.
pub async fn root_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Provenance Asset Registry API is running".to_string(),
    })
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "API server is operational".to_string(),
    })
}

/// Register an asset: derive, save locally, anchor best-effort.
pub async fn upload_handler(
    State(state): State<AppState>,
    Json(request): Json<AssetUploadRequest>,
) -> (StatusCode, Json<AssetUploadResponse>) {
    match state.registry.save_and_link(&request).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(AssetUploadResponse {
                success: true,
                asset_id: Some(outcome.asset_id),
                message: "Asset uploaded successfully".to_string(),
                transaction_id: outcome.transaction,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "asset save failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AssetUploadResponse {
                    success: false,
                    asset_id: None,
                    message: "Failed to save asset".to_string(),
                    transaction_id: None,
                }),
            )
        }
    }
}

/// List all registered assets.
pub async fn list_assets_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<AssetsListResponse>) {
    match state.registry.list().await {
        Ok(assets) => (
            StatusCode::OK,
            Json(AssetsListResponse {
                success: true,
                assets,
                message: "Assets retrieved successfully".to_string(),
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "asset listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AssetsListResponse {
                    success: false,
                    assets: Vec::new(),
                    message: "Failed to list assets".to_string(),
                }),
            )
        }
    }
}

/// Fetch one asset by identifier.
///
/// A malformed identifier is a client error, an unknown one a plain
/// not-found; neither is ever a server fault.
pub async fn get_asset_handler(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> (StatusCode, Json<AssetResponse>) {
    let id = match asset_id.parse::<AssetId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(AssetResponse {
                    success: false,
                    asset: None,
                    message: "Invalid asset ID format".to_string(),
                }),
            );
        }
    };
    match state.registry.retrieve(&id).await {
        Ok(Some(asset)) => (
            StatusCode::OK,
            Json(AssetResponse {
                success: true,
                asset: Some(asset),
                message: "Asset retrieved successfully".to_string(),
            }),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(AssetResponse {
                success: false,
                asset: None,
                message: "Asset not found".to_string(),
            }),
        ),
        Err(e) => {
            tracing::error!(asset = %id.short_hex(), error = %e, "asset retrieval failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AssetResponse {
                    success: false,
                    asset: None,
                    message: "Failed to retrieve asset".to_string(),
                }),
            )
        }
    }
}

/// Report the configured ledger account's balance.
pub async fn balance_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<BalanceResponse>) {
    let Some(notary) = &state.notary else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(BalanceResponse {
                success: false,
                address: None,
                balance: None,
                message: "Ledger is not configured".to_string(),
            }),
        );
    };
    match notary.balance().await {
        Ok(balance) => (
            StatusCode::OK,
            Json(BalanceResponse {
                success: true,
                address: Some(balance.address),
                balance: Some(balance.balance),
                message: "Balance retrieved successfully".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "balance query failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(BalanceResponse {
                    success: false,
                    address: notary.address(),
                    balance: None,
                    message: "Ledger is unavailable".to_string(),
                }),
            )
        }
    }
}

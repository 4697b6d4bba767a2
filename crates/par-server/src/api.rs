use par_types::{Asset, AssetId, AssetSummary, TxId};
use serde::{Deserialize, Serialize};

/// Liveness/readiness payload for `/` and `/health`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Response to `POST /upload`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetUploadResponse {
    pub success: bool,
    pub asset_id: Option<AssetId>,
    pub message: String,
    pub transaction_id: Option<TxId>,
}

/// Response to `GET /assets`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetsListResponse {
    pub success: bool,
    pub assets: Vec<AssetSummary>,
    pub message: String,
}

/// Response to `GET /assets/{asset_id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetResponse {
    pub success: bool,
    pub asset: Option<Asset>,
    pub message: String,
}

/// Response to `GET /balance`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub success: bool,
    pub address: Option<String>,
    pub balance: Option<u64>,
    pub message: String,
}

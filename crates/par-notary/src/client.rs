use std::time::Duration;

use par_types::TxId;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::networks::LedgerNetwork;
use crate::record::SignedRecord;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONFIRMATION_ATTEMPTS: u32 = 8;
const CONFIRMATION_POLL_INTERVAL: Duration = Duration::from_millis(500);

const API_TOKEN_HEADER: &str = "X-Ledger-API-Token";

/// Node status report.
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeStatus {
    pub last_round: u64,
}

/// Pending-record report: confirmed when `confirmed_round` is set, rejected
/// when the node put an error in `pool_error`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PendingRecord {
    pub confirmed_round: Option<u64>,
    pub pool_error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SubmitResponse {
    tx_id: TxId,
}

/// Ledger account report, balance in the ledger's smallest unit.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountInfo {
    pub address: String,
    pub balance: u64,
}

/// Thin HTTP client for a ledger node's REST API.
///
/// The registry treats the ledger as opaque: it creates records, waits for
/// confirmation, and reads account balances. Nothing here interprets ledger
/// state beyond those three calls.
pub struct LedgerClient {
    http: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl LedgerClient {
    /// Build a client for the given network.
    pub fn new(network: &LedgerNetwork) -> LedgerResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: network.endpoint.trim_end_matches('/').to_string(),
            api_token: network.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.endpoint)
    }

    fn with_token(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.header(API_TOKEN_HEADER, token),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response) -> LedgerResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(LedgerError::Rejected(format!("{status}: {body}")))
    }

    /// Reachability probe.
    pub async fn status(&self) -> LedgerResult<NodeStatus> {
        let response = self
            .with_token(self.http.get(self.url("status")))
            .send()
            .await?;
        Ok(Self::check_status(response).await?.json().await?)
    }

    /// Submit a signed record; returns the transaction reference assigned
    /// by the node. Submission does not imply confirmation.
    pub async fn submit_record(&self, record: &SignedRecord) -> LedgerResult<TxId> {
        let response = self
            .with_token(self.http.post(self.url("records")).json(record))
            .send()
            .await?;
        let submit: SubmitResponse = Self::check_status(response).await?.json().await?;
        tracing::debug!(tx = %submit.tx_id, "ledger record submitted");
        Ok(submit.tx_id)
    }

    /// Poll until the record confirms, returning the confirmation round.
    ///
    /// The wait is bounded: after a fixed number of polls the call gives up
    /// with [`LedgerError::ConfirmationTimeout`] rather than blocking the
    /// request indefinitely.
    pub async fn wait_for_confirmation(&self, tx_id: &TxId) -> LedgerResult<u64> {
        for attempt in 1..=CONFIRMATION_ATTEMPTS {
            let response = self
                .with_token(
                    self.http
                        .get(self.url(&format!("records/pending/{tx_id}"))),
                )
                .send()
                .await?;
            let pending: PendingRecord = Self::check_status(response).await?.json().await?;

            if let Some(error) = pending.pool_error.filter(|e| !e.is_empty()) {
                return Err(LedgerError::Rejected(error));
            }
            if let Some(round) = pending.confirmed_round {
                return Ok(round);
            }
            if attempt < CONFIRMATION_ATTEMPTS {
                tokio::time::sleep(CONFIRMATION_POLL_INTERVAL).await;
            }
        }
        Err(LedgerError::ConfirmationTimeout {
            tx_id: tx_id.to_string(),
            attempts: CONFIRMATION_ATTEMPTS,
        })
    }

    /// Account balance in the ledger's smallest unit.
    pub async fn account_balance(&self, address: &str) -> LedgerResult<u64> {
        let response = self
            .with_token(self.http.get(self.url(&format!("accounts/{address}"))))
            .send()
            .await?;
        let account: AccountInfo = Self::check_status(response).await?.json().await?;
        Ok(account.balance)
    }
}

impl std::fmt::Debug for LedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_rooted_at_v1() {
        let client = LedgerClient::new(&LedgerNetwork::localnet()).unwrap();
        assert_eq!(client.url("status"), "http://localhost:4001/v1/status");
        assert_eq!(
            client.url("records/pending/TX1"),
            "http://localhost:4001/v1/records/pending/TX1"
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let network = LedgerNetwork {
            name: "custom".into(),
            endpoint: "http://node.example:9000/".into(),
            api_token: None,
        };
        let client = LedgerClient::new(&network).unwrap();
        assert_eq!(client.url("status"), "http://node.example:9000/v1/status");
    }

    #[test]
    fn pending_record_decodes_both_shapes() {
        let confirmed: PendingRecord =
            serde_json::from_str("{\"confirmed_round\":12,\"pool_error\":null}").unwrap();
        assert_eq!(confirmed.confirmed_round, Some(12));

        let waiting: PendingRecord =
            serde_json::from_str("{\"confirmed_round\":null,\"pool_error\":\"\"}").unwrap();
        assert!(waiting.confirmed_round.is_none());
    }
}

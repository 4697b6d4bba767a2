use thiserror::Error;

/// Errors from ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No client is connected (not configured, or unreachable at startup).
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    /// Transport-level failure talking to the ledger node.
    #[error("ledger request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a non-success status.
    #[error("ledger rejected request: {0}")]
    Rejected(String),

    /// The record was submitted but never confirmed within the wait bound.
    #[error("record {tx_id} not confirmed after {attempts} attempts")]
    ConfirmationTimeout { tx_id: String, attempts: u32 },

    /// Record serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Account key failure (missing file, mismatch, bad material).
    #[error(transparent)]
    Key(#[from] par_crypto::KeyError),
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

use thiserror::Error;

/// Errors from registry operations.
///
/// Only local persistence failures surface here; everything ledger-related
/// is recoverable-by-omission and never becomes an error.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("store error: {0}")]
    Store(#[from] par_store::StoreError),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

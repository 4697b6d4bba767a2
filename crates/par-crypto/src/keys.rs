use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ed25519_dalek::{Signer, Verifier};
use thiserror::Error;

/// Ed25519 account key for signing ledger records.
///
/// The account *address* is the hex-encoded public key; the private seed
/// lives in a key file named `{address}.key` under a key directory,
/// hex-encoded. Loading verifies that the stored seed actually derives the
/// requested address, so a mismatched key file fails loudly instead of
/// producing records the ledger would reject.
pub struct AccountKey {
    signing: ed25519_dalek::SigningKey,
}

impl AccountKey {
    /// Generate a new random account key.
    pub fn generate() -> Self {
        let mut csprng = rand::thread_rng();
        Self {
            signing: ed25519_dalek::SigningKey::generate(&mut csprng),
        }
    }

    /// Create from a raw 32-byte seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing: ed25519_dalek::SigningKey::from_bytes(&seed),
        }
    }

    /// The account address: hex-encoded ed25519 public key.
    pub fn address(&self) -> String {
        hex::encode(self.signing.verifying_key().to_bytes())
    }

    /// Sign a message, returning the hex-encoded signature.
    pub fn sign(&self, message: &[u8]) -> String {
        hex::encode(self.signing.sign(message).to_bytes())
    }

    /// Load the key for `address` from `{key_dir}/{address}.key`.
    ///
    /// Fails if the file is missing, the seed is not 32 hex-encoded bytes,
    /// or the derived address does not match the requested one.
    pub fn load(key_dir: &Path, address: &str) -> Result<Self, KeyError> {
        let path = key_dir.join(format!("{address}.key"));
        if !path.exists() {
            return Err(KeyError::KeyFileNotFound(path));
        }
        let seed_hex = fs::read_to_string(&path)?;
        let seed = decode_seed(seed_hex.trim())?;
        let key = Self::from_seed(seed);
        let derived = key.address();
        if derived != address {
            return Err(KeyError::AddressMismatch {
                expected: address.to_string(),
                derived,
            });
        }
        Ok(key)
    }

    /// Write the seed to `{key_dir}/{address}.key`, creating the directory
    /// if needed. Returns the path written.
    pub fn save(&self, key_dir: &Path) -> Result<PathBuf, KeyError> {
        fs::create_dir_all(key_dir)?;
        let path = key_dir.join(format!("{}.key", self.address()));
        fs::write(&path, hex::encode(self.signing.to_bytes()))?;
        Ok(path)
    }

    /// Verify a hex-encoded signature made by the key behind `address`.
    pub fn verify(address: &str, message: &[u8], signature_hex: &str) -> Result<(), KeyError> {
        let key_bytes: [u8; 32] = hex::decode(address)
            .ok()
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| KeyError::InvalidAddress(address.to_string()))?;
        let verifying = ed25519_dalek::VerifyingKey::from_bytes(&key_bytes)
            .map_err(|_| KeyError::InvalidAddress(address.to_string()))?;
        let sig_bytes: [u8; 64] = hex::decode(signature_hex)
            .ok()
            .and_then(|b| b.try_into().ok())
            .ok_or(KeyError::InvalidSignature)?;
        let signature = ed25519_dalek::Signature::from_bytes(&sig_bytes);
        verifying
            .verify(message, &signature)
            .map_err(|_| KeyError::InvalidSignature)
    }
}

fn decode_seed(seed_hex: &str) -> Result<[u8; 32], KeyError> {
    let bytes =
        hex::decode(seed_hex).map_err(|e| KeyError::InvalidKeyMaterial(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| KeyError::InvalidKeyMaterial("seed must be 32 bytes".to_string()))
}

impl fmt::Debug for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountKey({}, <seed redacted>)", self.address())
    }
}

/// Errors from account key operations.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("key file not found: {0}")]
    KeyFileNotFound(PathBuf),

    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("key does not match account {expected} (derives {derived})")]
    AddressMismatch { expected: String, derived: String },

    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque ledger transaction reference.
///
/// Returned by the ledger when a notarization record is confirmed. The
/// registry never interprets the contents; it only stores and echoes it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TxId {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_verbatim() {
        let tx = TxId::new("TXN123ABC");
        assert_eq!(tx.to_string(), "TXN123ABC");
        assert_eq!(tx.as_str(), "TXN123ABC");
    }

    #[test]
    fn serde_is_transparent() {
        let tx = TxId::new("ref-1");
        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(json, "\"ref-1\"");
        let parsed: TxId = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
    }
}

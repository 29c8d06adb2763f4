use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::request::builder::QuoteRequest;

/// Content hash of a quote request. Equal requests hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestFingerprint(String);

impl RequestFingerprint {
    pub fn of(request: &QuoteRequest) -> Result<Self, serde_json::Error> {
        // Struct field order is fixed, so the JSON form is canonical
        let body = serde_json::to_vec(request)?;
        Ok(Self::from_bytes(&body))
    }

    pub fn from_bytes(body: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(body);

        let hash = hasher.finalize();
        RequestFingerprint(format!("sha256:{}", hex::encode(hash)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

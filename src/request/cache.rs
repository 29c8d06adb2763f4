// Caller-side only: the engine never reads this.
// Holds the most recent result so an unchanged request is not re-fetched.

use chrono::{DateTime, Utc};

use crate::request::fingerprint::RequestFingerprint;
use crate::types::QuoteResult;

#[derive(Debug, Clone)]
pub struct CachedQuote {
    pub fingerprint: RequestFingerprint,
    pub result: QuoteResult,
    pub cached_at: DateTime<Utc>, // informational only
}

#[derive(Debug, Default)]
pub struct QuoteCache {
    slot: Option<CachedQuote>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit only when `fingerprint` equals the stored one.
    pub fn get(&self, fingerprint: &RequestFingerprint) -> Option<&QuoteResult> {
        self.slot
            .as_ref()
            .filter(|cached| &cached.fingerprint == fingerprint)
            .map(|cached| &cached.result)
    }

    /// Replace the slot with a fresh entry.
    pub fn store(&mut self, fingerprint: RequestFingerprint, result: QuoteResult) -> &CachedQuote {
        log::debug!("caching quote result for {}", fingerprint.as_str());
        self.slot.insert(CachedQuote {
            fingerprint,
            result,
            cached_at: Utc::now(),
        })
    }

    pub fn entry(&self) -> Option<&CachedQuote> {
        self.slot.as_ref()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

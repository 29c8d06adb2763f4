//! Deterministic curation and ranking engine for mortgage rate quotes.
//!
//! `rate-quote-core` turns the raw program/offer payload of a pricing service
//! into a display-ready set of programs: per-offer cost aggregation,
//! program-wide best-offer tagging, product-family filtering and ordering,
//! and a bounded best-options window per program. All operations are pure
//! and deterministic; identical inputs always produce identical outputs.

pub mod config;
pub mod curation;
pub mod engine;
pub mod offer;
pub mod request;
pub mod types;
pub mod window;

pub use config::{ConfigError, CurationConfig};
pub use engine::QuoteEngine;
pub use types::{CleanedOffer, LoanType, OfferTag, Program, QuoteError, QuoteResult, RawOffer, RawProgram};

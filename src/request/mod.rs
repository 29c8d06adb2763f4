pub mod builder;
pub mod cache;
pub mod fingerprint;
pub mod views;

pub use builder::{LoanDetails, PurchaseDetails, PurchaseRequest, QuoteRequest, RefinanceRequest};
pub use cache::{CachedQuote, QuoteCache};
pub use fingerprint::RequestFingerprint;
pub use views::RateView;

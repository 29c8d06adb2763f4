pub mod identifiers;
pub mod quote;
pub mod raw;

pub use identifiers::{LoanType, OfferTag, UnknownLoanType};
pub use quote::{
    CleanedOffer, LenderCosts, Prepaids, Program, QuoteError, QuoteResult, ThirdPartyCosts,
};
pub use raw::{RawOffer, RawProgram};

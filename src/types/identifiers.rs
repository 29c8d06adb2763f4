use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The loan purpose a quote was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanType {
    NewPurchase,
    Refinance,
    Cashout,
}

#[derive(Debug, Error)]
#[error("Unknown loan type: {0}")]
pub struct UnknownLoanType(pub String);

impl LoanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::NewPurchase => "new-purchase",
            LoanType::Refinance => "refinance",
            LoanType::Cashout => "cashout",
        }
    }

    /// Owner's title insurance is not charged to the borrower on refinances.
    pub fn waives_owners_title(&self) -> bool {
        matches!(self, LoanType::Refinance | LoanType::Cashout)
    }
}

impl FromStr for LoanType {
    type Err = UnknownLoanType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new-purchase" => Ok(LoanType::NewPurchase),
            "refinance" => Ok(LoanType::Refinance),
            "cashout" => Ok(LoanType::Cashout),
            other => Err(UnknownLoanType(other.to_string())),
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge marking a distinguished offer within a program or window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OfferTag {
    LowestRate,
    LowestClosing,
    LowestPoints,
}

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{OfferTag, UnknownLoanType};

/// Lender-side cost components of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LenderCosts {
    pub lender_fee: f64,
    pub application_fee: f64,
    /// Credit-or-charge line; negative when the lender pays a credit.
    pub loanee_cost: f64,
}

impl LenderCosts {
    pub fn total(&self) -> f64 {
        self.lender_fee + self.application_fee + self.loanee_cost
    }
}

/// Third-party cost components of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyCosts {
    pub appraisal_fee: f64,
    pub owners_title_ins: f64,
    pub city_county_tax: f64,
    pub lenders_title_ins: f64,
    pub closing_and_escrow_fees: f64,
    pub recording_fees: f64,
    pub notary_fee: f64,
    pub other_fees: f64,
}

impl ThirdPartyCosts {
    pub fn total(&self) -> f64 {
        self.appraisal_fee
            + self.owners_title_ins
            + self.city_county_tax
            + self.lenders_title_ins
            + self.closing_and_escrow_fees
            + self.recording_fees
            + self.notary_fee
            + self.other_fees
    }
}

/// Prepaid items collected at closing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prepaids {
    pub interest: f64,
    pub homeowners_ins: f64,
    pub tax_reserve: f64,
    pub homeowners_ins_reserve: f64,
}

impl Prepaids {
    pub fn total(&self) -> f64 {
        self.interest + self.homeowners_ins + self.tax_reserve + self.homeowners_ins_reserve
    }
}

/// An offer after cost aggregation. Owned by a single pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedOffer {
    pub tags: Vec<OfferTag>,

    pub rate: f64,
    pub apr: f64,
    pub points: f64,
    pub monthly_payment: f64,

    pub lender_costs: LenderCosts,
    pub third_party_costs: ThirdPartyCosts,
    pub prepaids: Prepaids,

    pub total_closing_costs: f64,
    pub total_prepaids: f64,
}

impl CleanedOffer {
    /// Tags behave as an ordered set: adding a present tag is a no-op.
    pub fn add_tag(&mut self, tag: OfferTag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn has_tag(&self, tag: OfferTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    pub product_type: String,
    /// `name` immediately followed by `product_type`.
    pub display_name: String,
    pub rates: Vec<CleanedOffer>,
}

impl Program {
    pub fn new(name: impl Into<String>, product_type: impl Into<String>) -> Self {
        let name = name.into();
        let product_type = product_type.into();
        let display_name = format!("{name}{product_type}");
        Self {
            name,
            product_type,
            display_name,
            rates: Vec::new(),
        }
    }
}

/// The root value handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteResult {
    pub programs: Vec<Program>,
}

impl QuoteResult {
    /// An empty result means "no offers" for this request.
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Malformed quote payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownLoanType(#[from] UnknownLoanType),
}

use serde::{Deserialize, Serialize};

use crate::types::{CleanedOffer, OfferTag, Program, QuoteResult};

/// Which offers of a window the consumer asked to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateView {
    BestRate,
    BestClosingCosts,
    #[default]
    All,
}

impl RateView {
    pub fn shows(&self, offer: &CleanedOffer) -> bool {
        match self {
            RateView::BestRate => offer.has_tag(OfferTag::LowestRate),
            RateView::BestClosingCosts => offer.has_tag(OfferTag::LowestClosing),
            RateView::All => true,
        }
    }
}

impl Program {
    pub fn offers_in(&self, view: RateView) -> Vec<&CleanedOffer> {
        self.rates.iter().filter(|offer| view.shows(offer)).collect()
    }
}

impl QuoteResult {
    /// The offer the consumer picked, by program and offer position.
    pub fn offer(&self, program_idx: usize, rate_idx: usize) -> Option<(&Program, &CleanedOffer)> {
        let program = self.programs.get(program_idx)?;
        let offer = program.rates.get(rate_idx)?;
        Some((program, offer))
    }
}

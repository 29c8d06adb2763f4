use crate::types::{CleanedOffer, OfferTag};

/// Indices of the program-wide best offers, keyed to raw offer order.
///
/// Tie rules:
/// - rate and points: first occurrence wins (strict `<`)
/// - closing costs: last occurrence wins (`<=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestOffers {
    pub lowest_rate: usize,
    pub lowest_closing: usize,
    pub lowest_points: usize,
}

impl BestOffers {
    /// Single left-to-right fold over `offers`. `None` when there are no offers.
    pub fn scan(offers: &[CleanedOffer]) -> Option<Self> {
        if offers.is_empty() {
            return None;
        }
        let best = (0..offers.len()).fold(BestOffers::default(), |acc, idx| acc.step(offers, idx));
        Some(best)
    }

    fn step(self, offers: &[CleanedOffer], idx: usize) -> Self {
        let offer = &offers[idx];
        let mut next = self;

        if offer.total_closing_costs <= offers[self.lowest_closing].total_closing_costs {
            next.lowest_closing = idx;
        }

        // Index 0 is the baseline for rate and points
        if idx > 0 {
            if offer.points.abs() < offers[self.lowest_points].points.abs() {
                next.lowest_points = idx;
            }
            if offer.rate < offers[self.lowest_rate].rate {
                next.lowest_rate = idx;
            }
        }

        next
    }

    pub fn apply(&self, offers: &mut [CleanedOffer]) {
        offers[self.lowest_rate].add_tag(OfferTag::LowestRate);
        offers[self.lowest_closing].add_tag(OfferTag::LowestClosing);
        offers[self.lowest_points].add_tag(OfferTag::LowestPoints);
    }
}

/// Tag the program-wide best offers in place. Empty slices are left alone.
pub fn tag_best_offers(offers: &mut [CleanedOffer]) -> Option<BestOffers> {
    let best = BestOffers::scan(offers)?;
    best.apply(offers);
    Some(best)
}

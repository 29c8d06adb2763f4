//! Best-options window selection.
//!
//! Each program is reduced to a short run of offers spanning the practical
//! rate/cost trade-off. Offers with zero closing cost usually carry a higher
//! rate, so the window is anchored at the first zero-cost offer (in
//! descending-rate order) when there is one.

use crate::types::{CleanedOffer, OfferTag, Program};

pub const DEFAULT_WINDOW_SIZE: usize = 4;

#[derive(Debug, Clone)]
pub struct WindowSelector {
    window_size: usize,
}

impl Default for WindowSelector {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl WindowSelector {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn select_window(&self, mut program: Program) -> Program {
        let offers = std::mem::take(&mut program.rates);

        // 1. Rate ascending, then one offer per closing-cost tier
        let mut by_rate = offers;
        by_rate.sort_by(|a, b| a.rate.total_cmp(&b.rate));
        let mut tiers = dedup_by_closing_costs(by_rate);

        // 2. Rate descending, anchored at the first zero-cost offer
        tiers.sort_by(|a, b| b.rate.total_cmp(&a.rate));
        let start = window_start(&tiers);
        let end = start.saturating_add(self.window_size).min(tiers.len());
        let mut window: Vec<CleanedOffer> = tiers.drain(start..end).collect();

        // 3. Tags are re-derived within the window only
        retag_window(&mut window);

        log::debug!(
            "{}: window of {} offers starting at {}",
            program.display_name,
            window.len(),
            start
        );

        program.rates = window;
        program
    }
}

/// Keep the first offer of each distinct `total_closing_costs` value.
pub fn dedup_by_closing_costs(offers: Vec<CleanedOffer>) -> Vec<CleanedOffer> {
    let mut seen: Vec<f64> = Vec::with_capacity(offers.len());
    offers
        .into_iter()
        .filter(|offer| {
            if seen.contains(&offer.total_closing_costs) {
                false
            } else {
                seen.push(offer.total_closing_costs);
                true
            }
        })
        .collect()
}

/// Index of the first zero-cost offer, or 0 when absent.
pub fn window_start(offers: &[CleanedOffer]) -> usize {
    offers
        .iter()
        .position(|o| o.total_closing_costs == 0.0)
        .unwrap_or(0)
}

/// Clear all tags, then tag the cheapest offer `lowestClosing` and the
/// lowest-rate offer `lowestRate`. Leaves the window in descending-rate order.
pub fn retag_window(window: &mut [CleanedOffer]) {
    if window.is_empty() {
        return;
    }

    for offer in window.iter_mut() {
        offer.clear_tags();
    }

    window.sort_by(|a, b| a.total_closing_costs.total_cmp(&b.total_closing_costs));
    window[0].add_tag(OfferTag::LowestClosing);

    window.sort_by(|a, b| b.rate.total_cmp(&a.rate));
    if let Some(last) = window.last_mut() {
        last.add_tag(OfferTag::LowestRate);
    }
}

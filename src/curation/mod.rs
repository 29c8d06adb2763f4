pub mod ordering;
pub mod tagging;

use crate::config::CurationConfig;
use crate::offer::CostAggregator;
use crate::types::{LoanType, Program, RawProgram};
pub use ordering::{drop_non_conforming, order_programs, ProgramRanker};
pub use tagging::{tag_best_offers, BestOffers};

/// Builds tagged, filtered and ordered programs from the raw payload.
pub struct ProgramCurator<R> {
    aggregator: CostAggregator,
    ranker: R,
    non_conforming_family: String,
}

impl ProgramCurator<CurationConfig> {
    pub fn from_config(config: &CurationConfig) -> Self {
        Self::new(
            CostAggregator::new(config.notary_fee),
            config.clone(),
            config.non_conforming_family.clone(),
        )
    }
}

impl Default for ProgramCurator<CurationConfig> {
    fn default() -> Self {
        Self::from_config(&CurationConfig::v0())
    }
}

impl<R> ProgramCurator<R>
where
    R: ProgramRanker,
{
    pub fn new(aggregator: CostAggregator, ranker: R, non_conforming_family: impl Into<String>) -> Self {
        Self {
            aggregator,
            ranker,
            non_conforming_family: non_conforming_family.into(),
        }
    }

    pub fn curate(&self, raw_programs: &[RawProgram], loan_type: LoanType) -> Vec<Program> {
        // 1. Per-program aggregation and tie-break tagging, raw order
        let programs: Vec<Program> = raw_programs
            .iter()
            .map(|raw| self.build_program(raw, loan_type))
            .collect();

        // 2. Family filter, decided over the whole set
        let considered = programs.len();
        let mut programs = drop_non_conforming(programs, &self.non_conforming_family);
        log::debug!(
            "curated {} programs, {} dropped by family filter",
            considered,
            considered - programs.len()
        );

        // 3. Ordering
        order_programs(&mut programs, &self.ranker);

        programs
    }

    fn build_program(&self, raw: &RawProgram, loan_type: LoanType) -> Program {
        let mut program = Program::new(raw.display_name.trim(), raw.product_type.trim());
        program.rates = raw
            .offers()
            .iter()
            .map(|offer| self.aggregator.aggregate(offer, loan_type))
            .collect();

        if let Some(best) = tag_best_offers(&mut program.rates) {
            log::trace!("{}: program-wide best offers {:?}", program.display_name, best);
        }

        program
    }
}

use crate::config::{ConfigError, CurationConfig};
use crate::curation::{ProgramCurator, ProgramRanker};
use crate::types::{LoanType, QuoteError, QuoteResult, RawProgram};
use crate::window::WindowSelector;

/// The full transformation: aggregate, curate, then window every program.
///
/// Stateless between calls; the same input always yields the same result.
pub struct QuoteEngine<R> {
    curator: ProgramCurator<R>,
    selector: WindowSelector,
}

impl Default for QuoteEngine<CurationConfig> {
    fn default() -> Self {
        Self {
            curator: ProgramCurator::default(),
            selector: WindowSelector::default(),
        }
    }
}

impl QuoteEngine<CurationConfig> {
    pub fn from_config(config: &CurationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            ProgramCurator::from_config(config),
            WindowSelector::new(config.window_size),
        ))
    }
}

impl<R> QuoteEngine<R>
where
    R: ProgramRanker,
{
    pub fn new(curator: ProgramCurator<R>, selector: WindowSelector) -> Self {
        Self { curator, selector }
    }

    pub fn transform(&self, raw_programs: &[RawProgram], loan_type: LoanType) -> QuoteResult {
        log::debug!(
            "transforming {} raw programs for {}",
            raw_programs.len(),
            loan_type
        );

        let programs = self
            .curator
            .curate(raw_programs, loan_type)
            .into_iter()
            .map(|program| self.selector.select_window(program))
            .collect();

        QuoteResult { programs }
    }

    /// Parse a JSON array of program records and transform it.
    pub fn transform_json(&self, payload: &str, loan_type: LoanType) -> Result<QuoteResult, QuoteError> {
        let raw_programs: Vec<RawProgram> = serde_json::from_str(payload)?;
        Ok(self.transform(&raw_programs, loan_type))
    }
}

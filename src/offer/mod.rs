pub mod costs;
pub mod parse;

pub use costs::{sum_other_fees, CostAggregator, OTHER_FEE_FIELDS};
pub use parse::{round_half_up, unformat_currency, ParsedAmount};

use crate::offer::parse::{round_half_up, ParsedAmount};
use crate::types::{CleanedOffer, LenderCosts, LoanType, Prepaids, RawOffer, ThirdPartyCosts};

/// Fee fields summed into the third-party `otherFees` component.
pub const OTHER_FEE_FIELDS: [&str; 3] = ["creditReport805", "floodCertification807", "wireFee812"];

/// Converts raw offer records into cleaned offers with bucketed cost totals.
///
/// Never fails: unreadable fields degrade to zero.
#[derive(Debug, Clone)]
pub struct CostAggregator {
    notary_fee: f64,
}

impl CostAggregator {
    pub fn new(notary_fee: f64) -> Self {
        Self { notary_fee }
    }

    pub fn aggregate(&self, raw: &RawOffer, loan_type: LoanType) -> CleanedOffer {
        let lender_costs = LenderCosts {
            lender_fee: amount(raw, "lenderFee813"),
            application_fee: amount(raw, "applicationFee"),
            loanee_cost: amount(raw, "creditOrCharge802"),
        };

        let mut third_party_costs = ThirdPartyCosts {
            appraisal_fee: amount(raw, "appraisalFee804"),
            owners_title_ins: amount(raw, "ownersTitleInsurance1103"),
            city_county_tax: amount(raw, "cityCountyTaxStamps1204"),
            lenders_title_ins: amount(raw, "lendersTitleInsurance1104"),
            closing_and_escrow_fees: amount(raw, "closingEscrowFee1102"),
            recording_fees: amount(raw, "recordingFees1202"),
            notary_fee: self.notary_fee,
            other_fees: sum_other_fees(raw),
        };

        let prepaids = Prepaids {
            interest: amount(raw, "interest901"),
            homeowners_ins: amount(raw, "hazIns903"),
            tax_reserve: amount(raw, "taxResrv1004"),
            homeowners_ins_reserve: amount(raw, "hazInsReserve1002"),
        };

        // Overrides land before totals are taken
        if loan_type.waives_owners_title() {
            third_party_costs.owners_title_ins = 0.0;
        }

        let total_closing_costs =
            clamp_total(round_half_up(lender_costs.total() + third_party_costs.total(), 0));
        let total_prepaids = clamp_total(round_half_up(prepaids.total(), 0));

        CleanedOffer {
            tags: Vec::new(),
            rate: field(raw, "teaserRate").rounded(3),
            apr: field(raw, "APR").rounded(3),
            points: field(raw, "point").rounded(3),
            monthly_payment: field(raw, "payment").rounded(0),
            lender_costs,
            third_party_costs,
            prepaids,
            total_closing_costs,
            total_prepaids,
        }
    }
}

/// Sum of the credit-report, flood-certification and wire fees, each
/// defaulting to zero on its own.
pub fn sum_other_fees(raw: &RawOffer) -> f64 {
    OTHER_FEE_FIELDS.iter().map(|key| amount(raw, key)).sum()
}

/// Totals stay within `0..=f64::MAX`; a sum that cancels to NaN reads as 0.
fn clamp_total(total: f64) -> f64 {
    if total.is_nan() {
        0.0
    } else {
        total.clamp(0.0, f64::MAX)
    }
}

fn field(raw: &RawOffer, key: &str) -> ParsedAmount {
    ParsedAmount::from_value(raw.get(key))
}

fn amount(raw: &RawOffer, key: &str) -> f64 {
    field(raw, key).rounded(0)
}

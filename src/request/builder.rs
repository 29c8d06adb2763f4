use serde::{Deserialize, Deserializer, Serialize};

use crate::offer::ParsedAmount;
use crate::types::LoanType;

/// Borrower inputs collected before a quote is requested.
///
/// Money fields accept currency-formatted strings; unreadable amounts are 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanDetails {
    pub zipcode: String,
    pub residence_type: String,
    pub property_use: String,
    pub credit_score: String,
    /// Product choice on refinances (e.g. conventional or FHA).
    pub fha: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub purchase_price: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub down_payment_percent: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub est_value: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub current_mortgage_balance: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub cashout: f64,
}

impl LoanDetails {
    pub fn down_payment_dollars(&self) -> f64 {
        self.purchase_price * self.down_payment_percent / 100.0
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(ParsedAmount::from_value(Some(&value)).value())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDetails {
    pub living_situation: String,
    pub house_price: f64,
    pub loan_amount: f64,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub loan_type: String,
    pub purchase_details: PurchaseDetails,
    pub living_situation: String,
    pub home_worth_today: f64,
    pub current_mortgage_balance: f64,
    pub loan_amount: f64,
    pub property_type: String,
    pub residence_type: String,
    pub zip_code: String,
    #[serde(rename = "creditscore")]
    pub credit_score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceRequest {
    pub loan_type: String,
    pub refinance_option: String,
    /// Present on cash-out refinances only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cash_take_out: Option<f64>,
    pub current_mortgage_balance: f64,
    pub loan_amount: f64,
    pub subordinate_financing: Option<f64>,
    pub current_mortgage_payment: Option<f64>,
    pub is_include_taxes: Option<bool>,
    pub impounds: String,
    pub home_worth_today: f64,
    pub property_type: String,
    pub residence_type: String,
    pub zip_code: String,
    /// Present on rate-and-term refinances only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub product_type: Option<String>,
    #[serde(rename = "creditscore")]
    pub credit_score: String,
}

/// Request body sent to the pricing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteRequest {
    Purchase(PurchaseRequest),
    Refinance(RefinanceRequest),
}

impl QuoteRequest {
    pub fn build(loan_type: LoanType, details: &LoanDetails) -> Self {
        match loan_type {
            LoanType::NewPurchase => {
                let down_payment = details.down_payment_dollars();
                let loan_amount = details.purchase_price - down_payment;
                QuoteRequest::Purchase(PurchaseRequest {
                    loan_type: "PUR".into(),
                    purchase_details: PurchaseDetails {
                        living_situation: "homeOwner".into(),
                        house_price: details.purchase_price,
                        loan_amount,
                        zip_code: details.zipcode.clone(),
                    },
                    living_situation: "renting".into(),
                    home_worth_today: details.purchase_price,
                    current_mortgage_balance: down_payment,
                    loan_amount,
                    property_type: details.residence_type.clone(),
                    residence_type: details.property_use.clone(),
                    zip_code: details.zipcode.clone(),
                    credit_score: details.credit_score.clone(),
                })
            }
            LoanType::Refinance => QuoteRequest::Refinance(RefinanceRequest {
                refinance_option: "REFLMP".into(),
                cash_take_out: None,
                loan_amount: details.current_mortgage_balance,
                product_type: Some(details.fha.clone()),
                ..refinance_base(details)
            }),
            LoanType::Cashout => QuoteRequest::Refinance(RefinanceRequest {
                refinance_option: "REFCO".into(),
                cash_take_out: Some(details.cashout),
                loan_amount: details.cashout + details.current_mortgage_balance,
                product_type: None,
                ..refinance_base(details)
            }),
        }
    }

    pub fn loan_amount(&self) -> f64 {
        match self {
            QuoteRequest::Purchase(r) => r.loan_amount,
            QuoteRequest::Refinance(r) => r.loan_amount,
        }
    }
}

fn refinance_base(details: &LoanDetails) -> RefinanceRequest {
    RefinanceRequest {
        loan_type: "REF".into(),
        refinance_option: String::new(),
        cash_take_out: None,
        current_mortgage_balance: details.current_mortgage_balance,
        loan_amount: 0.0,
        subordinate_financing: None,
        current_mortgage_payment: None,
        is_include_taxes: None,
        impounds: "YES".into(),
        home_worth_today: details.est_value,
        property_type: details.residence_type.clone(),
        residence_type: details.property_use.clone(),
        zip_code: details.zipcode.clone(),
        product_type: None,
        credit_score: details.credit_score.clone(),
    }
}

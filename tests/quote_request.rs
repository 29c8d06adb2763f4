use rate_quote_core::request::{LoanDetails, QuoteCache, QuoteRequest, RateView, RequestFingerprint};
use rate_quote_core::types::{LoanType, OfferTag, RawOffer, RawProgram};
use rate_quote_core::QuoteEngine;
use serde_json::{json, Value};

fn details() -> LoanDetails {
    LoanDetails {
        zipcode: "94103".into(),
        residence_type: "0".into(),
        property_use: "0".into(),
        credit_score: "740".into(),
        fha: "CONFORMING".into(),
        purchase_price: 400_000.0,
        down_payment_percent: 20.0,
        est_value: 650_000.0,
        current_mortgage_balance: 300_000.0,
        cashout: 50_000.0,
    }
}

#[test]
fn purchase_request_body() {
    let request = QuoteRequest::build(LoanType::NewPurchase, &details());
    let body: Value = serde_json::to_value(&request).unwrap();

    assert_eq!(body["loanType"], "PUR");
    assert_eq!(body["loanAmount"], json!(320_000.0));
    assert_eq!(body["currentMortgageBalance"], json!(80_000.0));
    assert_eq!(body["homeWorthToday"], json!(400_000.0));
    assert_eq!(body["livingSituation"], "renting");
    assert_eq!(body["purchaseDetails"]["livingSituation"], "homeOwner");
    assert_eq!(body["purchaseDetails"]["loanAmount"], json!(320_000.0));
    assert_eq!(body["purchaseDetails"]["zipCode"], "94103");
    assert_eq!(body["creditscore"], "740");
}

#[test]
fn refinance_request_body() {
    let request = QuoteRequest::build(LoanType::Refinance, &details());
    let body: Value = serde_json::to_value(&request).unwrap();

    assert_eq!(request.loan_amount(), 300_000.0);
    assert_eq!(body["loanType"], "REF");
    assert_eq!(body["refinanceOption"], "REFLMP");
    assert_eq!(body["impounds"], "YES");
    assert_eq!(body["homeWorthToday"], json!(650_000.0));
    assert_eq!(body["productType"], "CONFORMING");
    assert_eq!(body["subordinateFinancing"], Value::Null);
    assert!(body.get("cashTakeOut").is_none());
}

#[test]
fn cashout_request_body() {
    let request = QuoteRequest::build(LoanType::Cashout, &details());
    let body: Value = serde_json::to_value(&request).unwrap();

    assert_eq!(request.loan_amount(), 350_000.0);
    assert_eq!(body["refinanceOption"], "REFCO");
    assert_eq!(body["cashTakeOut"], json!(50_000.0));
    assert!(body.get("productType").is_none());
}

#[test]
fn loan_details_accept_formatted_amounts() {
    let parsed: LoanDetails = serde_json::from_value(json!({
        "zipcode": "10001",
        "purchase_price": "$425,000",
        "down_payment_percent": "10",
        "cashout": "n/a"
    }))
    .unwrap();

    assert_eq!(parsed.purchase_price, 425_000.0);
    assert_eq!(parsed.down_payment_dollars(), 42_500.0);
    assert_eq!(parsed.cashout, 0.0);
    assert_eq!(parsed.est_value, 0.0);
}

#[test]
fn fingerprint_tracks_request_content() {
    let a = RequestFingerprint::of(&QuoteRequest::build(LoanType::Refinance, &details())).unwrap();
    let b = RequestFingerprint::of(&QuoteRequest::build(LoanType::Refinance, &details())).unwrap();
    assert_eq!(a, b);
    assert!(a.as_str().starts_with("sha256:"));
    assert_eq!(a.as_str().len(), "sha256:".len() + 64);

    let mut moved = details();
    moved.zipcode = "94110".into();
    let c = RequestFingerprint::of(&QuoteRequest::build(LoanType::Refinance, &moved)).unwrap();
    assert_ne!(a, c);

    let d = RequestFingerprint::of(&QuoteRequest::build(LoanType::Cashout, &details())).unwrap();
    assert_ne!(a, d);
}

#[test]
fn cache_hits_only_on_equal_fingerprint() {
    let engine = QuoteEngine::default();
    let raw = vec![RawProgram::new(
        "30 YEAR Fixed",
        "CONFORMING",
        vec![RawOffer::new().with("teaserRate", 4.0)],
    )];
    let result = engine.transform(&raw, LoanType::Refinance);

    let fp = RequestFingerprint::of(&QuoteRequest::build(LoanType::Refinance, &details())).unwrap();
    let other = RequestFingerprint::from_bytes(b"something else");

    let mut cache = QuoteCache::new();
    assert!(cache.get(&fp).is_none());

    let entry = cache.store(fp.clone(), result.clone());
    assert_eq!(entry.fingerprint, fp);

    assert_eq!(cache.get(&fp), Some(&result));
    assert!(cache.get(&other).is_none());
    assert!(cache.entry().is_some());

    cache.clear();
    assert!(cache.get(&fp).is_none());
}

#[test]
fn rate_views_and_offer_lookup() {
    let offers = vec![
        RawOffer::new().with("teaserRate", 4.5).with("creditOrCharge802", -25),
        RawOffer::new().with("teaserRate", 4.25).with("lenderFee813", 600),
        RawOffer::new().with("teaserRate", 4.0).with("lenderFee813", 1400),
    ];
    let raw = vec![RawProgram::new("30 YEAR Fixed", "CONFORMING", offers)];
    let result = QuoteEngine::default().transform(&raw, LoanType::NewPurchase);
    let program = &result.programs[0];

    let best_rate = program.offers_in(RateView::BestRate);
    assert_eq!(best_rate.len(), 1);
    assert_eq!(best_rate[0].rate, 4.0);

    let best_closing = program.offers_in(RateView::BestClosingCosts);
    assert_eq!(best_closing.len(), 1);
    assert!(best_closing[0].has_tag(OfferTag::LowestClosing));
    assert_eq!(best_closing[0].total_closing_costs, 0.0);

    assert_eq!(program.offers_in(RateView::All).len(), 3);
    assert_eq!(RateView::default(), RateView::All);
    assert_eq!(serde_json::to_value(RateView::BestClosingCosts).unwrap(), "bestclosingcosts");

    let (chosen_program, chosen) = result.offer(0, 1).unwrap();
    assert_eq!(chosen_program.display_name, "30 YEAR FixedCONFORMING");
    assert_eq!(chosen.rate, 4.25);
    assert!(result.offer(0, 3).is_none());
    assert!(result.offer(1, 0).is_none());
}

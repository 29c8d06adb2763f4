use std::fs;

use rate_quote_core::config::{ConfigError, CurationConfig};
use rate_quote_core::types::{LoanType, RawOffer, RawProgram};
use rate_quote_core::QuoteEngine;
use tempfile::tempdir;

#[test]
fn v0_tables() {
    let config = CurationConfig::v0();

    assert_eq!(config.program_name_rank.len(), 8);
    assert_eq!(config.program_name_rank["7 YEAR ARM"], 70);
    assert_eq!(config.product_family_rank["FHA-Streamline"], 400);
    assert_eq!(config.notary_fee, 25.0);
    assert_eq!(config.window_size, 4);
    assert_eq!(config.non_conforming_family, "NONCONFORMING");
    assert_eq!(config, CurationConfig::default());
}

#[test]
fn omitted_fields_fall_back_to_v0() {
    let config = CurationConfig::from_json_str(r#"{ "window_size": 2 }"#).unwrap();

    assert_eq!(config.window_size, 2);
    assert_eq!(config.product_family_rank, CurationConfig::v0().product_family_rank);
    assert_eq!(config.notary_fee, 25.0);
}

#[test]
fn zero_window_size_is_rejected() {
    let err = CurationConfig::from_json_str(r#"{ "window_size": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWindowSize(0)));

    let config = CurationConfig {
        window_size: 0,
        ..CurationConfig::v0()
    };
    assert!(QuoteEngine::from_config(&config).is_err());
}

#[test]
fn load_from_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("curation.json");

    let mut config = CurationConfig::v0();
    config.program_name_rank.insert("40 YEAR Fixed".into(), 5);
    config.notary_fee = 0.0;
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = CurationConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn load_errors() {
    let dir = tempdir().unwrap();

    let missing = CurationConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(missing, ConfigError::Io(_)));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let parse = CurationConfig::load(&bad).unwrap_err();
    assert!(matches!(parse, ConfigError::Parse(_)));
}

#[test]
fn engine_honours_loaded_tables() {
    let config = CurationConfig::from_json_str(
        r#"{
          "program_name_rank": { "Alpha": 1, "Beta": 2 },
          "product_family_rank": { "JUMBO": 10 },
          "notary_fee": 0,
          "non_conforming_family": "JUMBO"
        }"#,
    )
    .unwrap();
    let engine = QuoteEngine::from_config(&config).unwrap();

    let offer = RawOffer::new().with("teaserRate", 4.0);
    let raw = vec![
        RawProgram::new("Beta", "JUMBO", vec![offer.clone()]),
        RawProgram::new("Alpha", "JUMBO", vec![offer]),
    ];
    let result = engine.transform(&raw, LoanType::NewPurchase);

    // All programs share the configured non-conforming family, so none drop
    let names: Vec<&str> = result.programs.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
    // No notary fee configured: an offer with no cost fields is zero-cost
    assert_eq!(result.programs[0].rates[0].total_closing_costs, 0.0);
    assert_eq!(result.programs[0].rates[0].third_party_costs.notary_fee, 0.0);
}

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Composite rank given to programs whose name or family is not in the tables.
pub const UNRANKED: u32 = 9_999_999;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid window size: {0}")]
    InvalidWindowSize(usize),
}

// Key point:
// Serializable
// Comparable
// Read-only for the lifetime of an engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationConfig {
    /// Exact program name -> rank.
    pub program_name_rank: BTreeMap<String, u32>,
    /// Exact product family -> rank.
    pub product_family_rank: BTreeMap<String, u32>,
    /// Flat notary fee added to every offer's third-party costs.
    pub notary_fee: f64,
    /// Maximum number of offers kept per program window.
    pub window_size: usize,
    /// Family dropped whenever any other family is present.
    pub non_conforming_family: String,
}

impl CurationConfig {
    pub fn v0() -> Self {
        let program_name_rank = [
            ("30 YEAR Fixed", 10),
            ("20 YEAR Fixed", 20),
            ("15 YEAR Fixed", 30),
            ("10 YEAR Fixed", 40),
            ("30 YEAR ARM", 50),
            ("10 YEAR ARM", 60),
            ("7 YEAR ARM", 70),
            ("5 YEAR ARM", 80),
        ]
        .into_iter()
        .map(|(name, rank)| (name.to_string(), rank))
        .collect();

        let product_family_rank = [
            ("CONFORMING", 100),
            ("NONCONFORMING", 200),
            ("FHA", 300),
            ("FHA-Streamline", 400),
        ]
        .into_iter()
        .map(|(family, rank)| (family.to_string(), rank))
        .collect();

        Self {
            program_name_rank,
            product_family_rank,
            notary_fee: 25.0,
            window_size: 4,
            non_conforming_family: "NONCONFORMING".into(),
        }
    }

    /// Parse a JSON config; omitted fields keep their `v0` values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CurationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::InvalidWindowSize(self.window_size));
        }
        Ok(())
    }

    /// `name rank + family rank`, or [`UNRANKED`] if either lookup misses.
    pub fn composite_rank(&self, name: &str, family: &str) -> u32 {
        match (
            self.program_name_rank.get(name),
            self.product_family_rank.get(family),
        ) {
            (Some(n), Some(f)) => n.saturating_add(*f),
            _ => UNRANKED,
        }
    }
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self::v0()
    }
}

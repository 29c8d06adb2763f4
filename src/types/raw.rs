use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single offer record as returned by the pricing service.
///
/// Field values are left untyped: the service mixes plain numbers,
/// currency-formatted strings and missing or junk values. Reading is
/// by exact key only; the record is never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawOffer {
    inner: Map<String, Value>,
}

impl RawOffer {
    pub fn new() -> Self {
        RawOffer { inner: Map::new() }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Builder form of [`RawOffer::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }
}

/// A lending program entry in the raw payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProgram {
    pub display_name: String,
    pub product_type: String,
    /// Absent on some programs; treated as an empty list.
    #[serde(rename = "rateVO", default, skip_serializing_if = "Option::is_none")]
    pub rate_vo: Option<Vec<RawOffer>>,
}

impl RawProgram {
    pub fn new(
        display_name: impl Into<String>,
        product_type: impl Into<String>,
        offers: Vec<RawOffer>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            product_type: product_type.into(),
            rate_vo: Some(offers),
        }
    }

    pub fn offers(&self) -> &[RawOffer] {
        self.rate_vo.as_deref().unwrap_or(&[])
    }
}

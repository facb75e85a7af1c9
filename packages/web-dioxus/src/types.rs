//! Type definitions for the bundled store datasets
//!
//! These mirror the JSON shipped in `src/data/`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Store Types
// ============================================================================

/// Store identifier, always compared in string form.
///
/// The source data is inconsistent about whether a store number is a JSON
/// string or a JSON number, so deserialization coerces both to a string and
/// every join or lookup goes through that coerced form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StoreNumber(String);

impl StoreNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => StoreNumber(text),
            Raw::Number(number) => StoreNumber(number.to_string()),
        })
    }
}

/// Short store type codes used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreTypeCode {
    #[serde(rename = "RE")]
    Retail,
    #[serde(rename = "FL")]
    FullLine,
    #[serde(rename = "RK")]
    Rack,
    #[serde(rename = "DC")]
    DistributionCenter,
}

impl StoreTypeCode {
    pub fn code(&self) -> &'static str {
        match self {
            StoreTypeCode::Retail => "RE",
            StoreTypeCode::FullLine => "FL",
            StoreTypeCode::Rack => "RK",
            StoreTypeCode::DistributionCenter => "DC",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StoreTypeCode::Retail => "Retail",
            StoreTypeCode::FullLine => "Full Line",
            StoreTypeCode::Rack => "Rack",
            StoreTypeCode::DistributionCenter => "Distribution Center",
        }
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match raw {
            "RE" => Some(StoreTypeCode::Retail),
            "FL" => Some(StoreTypeCode::FullLine),
            "RK" => Some(StoreTypeCode::Rack),
            "DC" => Some(StoreTypeCode::DistributionCenter),
            _ => None,
        }
    }

    pub fn variants() -> &'static [StoreTypeCode] {
        &[
            StoreTypeCode::Retail,
            StoreTypeCode::FullLine,
            StoreTypeCode::Rack,
            StoreTypeCode::DistributionCenter,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single retail location's static descriptive and positional data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    pub store_number: StoreNumber,
    pub name: String,
    pub type_code: StoreTypeCode,
    pub type_desc: String,
    pub postal_address: PostalAddress,
    pub health_score: f64,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(default)]
    pub customer_footfall: Option<i64>,
}

impl StoreRecord {
    /// Outbound dashboard link, falling back to a derived URL when the
    /// record does not carry one.
    pub fn dashboard_link(&self, base: &str) -> String {
        self.dashboard_url
            .clone()
            .unwrap_or_else(|| format!("{base}/store/{}", self.store_number))
    }
}

// ============================================================================
// Performance Facet Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetCount {
    pub unique_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    #[serde(default)]
    pub response_time: Option<f64>,
}

/// Performance/incident summary for one store, joined by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceFacet {
    pub name: StoreNumber,
    #[serde(default)]
    pub results: Option<FacetCount>,
    #[serde(default)]
    pub total_result: Option<FacetCount>,
    #[serde(default)]
    pub performance_stats: Option<PerformanceStats>,
}

/// Top-level shape of the performance dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetFile {
    pub facets: Vec<PerformanceFacet>,
}

//! One-time loading of the bundled store datasets
//!
//! Both collections are decoded once, at first use, and never mutated. A
//! decode failure is logged and degrades to an empty collection so the view
//! still renders.

use std::sync::LazyLock;

use thiserror::Error;
use tracing::{error, info};

use crate::metrics::FacetIndex;
use crate::types::{FacetFile, PerformanceFacet, StoreRecord};

const STORES_JSON: &str = include_str!("data/stores.json");
const STORE_DETAILS_JSON: &str = include_str!("data/store_details.json");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to decode store catalog: {0}")]
    Stores(#[source] serde_json::Error),
    #[error("failed to decode performance facets: {0}")]
    Facets(#[source] serde_json::Error),
}

/// The full store catalog, in source order.
pub static STORES: LazyLock<Vec<StoreRecord>> = LazyLock::new(|| {
    match decode_stores(STORES_JSON) {
        Ok(stores) => {
            info!(count = stores.len(), "loaded store catalog");
            stores
        }
        Err(err) => {
            error!(error = %err, "store catalog unavailable");
            Vec::new()
        }
    }
});

/// Per-store performance facets, joined to the catalog by identifier.
pub static FACETS: LazyLock<Vec<PerformanceFacet>> = LazyLock::new(|| {
    match decode_facets(STORE_DETAILS_JSON) {
        Ok(facets) => {
            info!(count = facets.len(), "loaded performance facets");
            facets
        }
        Err(err) => {
            error!(error = %err, "performance facets unavailable");
            Vec::new()
        }
    }
});

/// Identifier index over [`FACETS`], built once.
pub static FACET_INDEX: LazyLock<FacetIndex> = LazyLock::new(|| FacetIndex::build(&FACETS));

pub fn decode_stores(raw: &str) -> Result<Vec<StoreRecord>, DataError> {
    serde_json::from_str(raw).map_err(DataError::Stores)
}

pub fn decode_facets(raw: &str) -> Result<Vec<PerformanceFacet>, DataError> {
    serde_json::from_str::<FacetFile>(raw)
        .map(|file| file.facets)
        .map_err(DataError::Facets)
}

//! Store filtering
//!
//! A stable filter over the catalog: original order preserved, all three
//! predicates must hold, no side effects.

use crate::state::FilterState;
use crate::types::StoreRecord;

/// The subset of `stores` matching `filter`, in catalog order.
pub fn filter_stores(stores: &[StoreRecord], filter: &FilterState) -> Vec<StoreRecord> {
    stores
        .iter()
        .filter(|store| {
            let matches_id = filter.store_id_query.is_empty()
                || store.store_number.as_str() == filter.store_id_query;
            let matches_type = filter
                .store_type
                .map_or(true, |code| store.type_code == code);
            let matches_health = filter
                .min_health_score
                .map_or(true, |floor| store.health_score >= floor as f64);
            matches_id && matches_type && matches_health
        })
        .cloned()
        .collect()
}

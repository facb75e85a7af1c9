//! Performance facet lookup, uptime derivation, and marker coloring

use std::collections::HashMap;

use crate::types::{PerformanceFacet, StoreNumber};

/// Identifier-keyed index over the performance facets.
///
/// Built once when the dataset loads so that per-marker lookups stay O(1)
/// instead of re-scanning the facet list on every render.
#[derive(Debug, Clone, Default)]
pub struct FacetIndex {
    by_store: HashMap<String, PerformanceFacet>,
}

impl FacetIndex {
    pub fn build(facets: &[PerformanceFacet]) -> Self {
        let mut by_store = HashMap::new();
        for facet in facets {
            // First entry wins, matching the first-match scan of the
            // original dataset contract.
            by_store
                .entry(facet.name.as_str().to_owned())
                .or_insert_with(|| facet.clone());
        }
        Self { by_store }
    }

    pub fn get(&self, store_number: &StoreNumber) -> Option<&PerformanceFacet> {
        self.by_store.get(store_number.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_store.is_empty()
    }
}

/// Uptime percentage for a store's facet.
///
/// `None` means no facet exists for the store at all. When the facet is
/// present, a missing `results` counts as 0 and a missing or zero
/// `totalResult` counts as 1.
pub fn uptime_percentage(facet: Option<&PerformanceFacet>) -> Option<f64> {
    let facet = facet?;
    let unique = facet.results.map(|c| c.unique_count).unwrap_or(0);
    let total = match facet.total_result.map(|c| c.unique_count) {
        Some(total) if total != 0 => total,
        _ => 1,
    };
    Some(unique as f64 / total as f64 * 100.0)
}

/// Uptime as rendered: an unknown uptime collapses to 0 for display and
/// marker color.
pub fn uptime_or_zero(facet: Option<&PerformanceFacet>) -> f64 {
    uptime_percentage(facet).unwrap_or(0.0)
}

/// Marker color, a three-way step over the uptime percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Red,
    Yellow,
    Green,
}

impl MarkerColor {
    /// Boundary values belong to the upper bucket: 50 is Yellow, 80 is
    /// Green.
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage < 50.0 {
            MarkerColor::Red
        } else if percentage < 80.0 {
            MarkerColor::Yellow
        } else {
            MarkerColor::Green
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            MarkerColor::Red => "marker-red",
            MarkerColor::Yellow => "marker-yellow",
            MarkerColor::Green => "marker-green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FacetCount;

    fn facet(name: &str, unique: Option<i64>, total: Option<i64>) -> PerformanceFacet {
        PerformanceFacet {
            name: StoreNumber::new(name),
            results: unique.map(|unique_count| FacetCount { unique_count }),
            total_result: total.map(|unique_count| FacetCount { unique_count }),
            performance_stats: None,
        }
    }

    #[test]
    fn percentage_boundaries_pick_the_upper_bucket() {
        let half = facet("1", Some(50), Some(100));
        assert_eq!(uptime_percentage(Some(&half)), Some(50.0));
        assert_eq!(MarkerColor::for_percentage(50.0), MarkerColor::Yellow);

        let below = facet("2", Some(79), Some(100));
        assert_eq!(uptime_percentage(Some(&below)), Some(79.0));
        assert_eq!(MarkerColor::for_percentage(79.0), MarkerColor::Yellow);

        let at_green = facet("3", Some(80), Some(100));
        assert_eq!(uptime_percentage(Some(&at_green)), Some(80.0));
        assert_eq!(MarkerColor::for_percentage(80.0), MarkerColor::Green);

        assert_eq!(MarkerColor::for_percentage(49.9), MarkerColor::Red);
    }

    #[test]
    fn missing_facet_renders_as_zero_and_red() {
        assert_eq!(uptime_percentage(None), None);
        assert_eq!(uptime_or_zero(None), 0.0);
        assert_eq!(MarkerColor::for_percentage(uptime_or_zero(None)), MarkerColor::Red);
    }

    #[test]
    fn missing_counts_default_without_dividing_by_zero() {
        let no_results = facet("1", None, Some(50));
        assert_eq!(uptime_percentage(Some(&no_results)), Some(0.0));

        let no_total = facet("2", Some(3), None);
        assert_eq!(uptime_percentage(Some(&no_total)), Some(300.0));

        let zero_total = facet("3", Some(3), Some(0));
        assert_eq!(uptime_percentage(Some(&zero_total)), Some(300.0));
    }

    #[test]
    fn index_keeps_the_first_facet_per_store() {
        let facets = vec![
            facet("2221", Some(40), Some(50)),
            facet("2221", Some(1), Some(100)),
            facet("1042", Some(93), Some(100)),
        ];
        let index = FacetIndex::build(&facets);

        assert_eq!(index.len(), 2);
        let first = index.get(&StoreNumber::new("2221")).unwrap();
        assert_eq!(first.results.unwrap().unique_count, 40);
        assert!(index.get(&StoreNumber::new("9999")).is_none());
    }

    #[test]
    fn index_matches_numeric_and_string_identifiers() {
        let facets = vec![facet("2221", Some(40), Some(50))];
        let index = FacetIndex::build(&facets);

        let coerced: StoreNumber = serde_json::from_str("2221").unwrap();
        assert!(index.get(&coerced).is_some());
    }
}

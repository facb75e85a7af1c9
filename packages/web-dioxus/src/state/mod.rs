//! View state and reducer-style transitions
//!
//! The UI shell stays thin: every transition is a pure function from the
//! previous state and an event to the next state, so the interesting
//! behavior is testable without a renderer.

use std::num::ParseIntError;

use tracing::debug;

use crate::metrics::FacetIndex;
use crate::types::{PerformanceFacet, StoreNumber, StoreRecord, StoreTypeCode};

// ============================================================================
// Filters
// ============================================================================

/// The three independent filter criteria, applied conjunctively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Exact-match store identifier, trimmed at input time. Empty means
    /// wildcard.
    pub store_id_query: String,
    /// `None` means all types.
    pub store_type: Option<StoreTypeCode>,
    /// Inclusive health score floor. `None` means all scores.
    pub min_health_score: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    StoreIdChanged(String),
    StoreTypeChanged(Option<StoreTypeCode>),
    MinHealthChanged(Option<i64>),
}

impl FilterState {
    pub fn apply(mut self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::StoreIdChanged(raw) => self.store_id_query = raw.trim().to_owned(),
            FilterEvent::StoreTypeChanged(code) => self.store_type = code,
            FilterEvent::MinHealthChanged(floor) => self.min_health_score = floor,
        }
        self
    }
}

/// Parse the raw value of the health-score select.
///
/// Empty input means wildcard. A non-numeric value is an error so that a bad
/// input gets rejected at the boundary instead of silently filtering out
/// every store.
pub fn parse_health_floor(raw: &str) -> Result<Option<i64>, ParseIntError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}

// ============================================================================
// Selection & Hover
// ============================================================================

/// A store record merged with its looked-up performance facet.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedStore {
    pub store: StoreRecord,
    pub details: Option<PerformanceFacet>,
}

/// Last known pointer coordinates, in client space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Selection and hover are independent fields; either can be set or cleared
/// without touching the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected: Option<SelectedStore>,
    pub hovered: Option<StoreRecord>,
    pub pointer: PointerPosition,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Selected(StoreNumber),
    SelectionCleared,
    HoverEntered(StoreRecord, PointerPosition),
    HoverMoved(PointerPosition),
    HoverLeft,
}

impl SelectionState {
    /// Selection resolves against the full catalog, not the filtered view,
    /// so a store stays selected even when a later filter change hides it
    /// from the visible list.
    pub fn apply(
        mut self,
        event: SelectionEvent,
        stores: &[StoreRecord],
        facets: &FacetIndex,
    ) -> Self {
        match event {
            SelectionEvent::Selected(store_number) => {
                self.selected = stores
                    .iter()
                    .find(|store| store.store_number == store_number)
                    .map(|store| SelectedStore {
                        store: store.clone(),
                        details: facets.get(&store_number).cloned(),
                    });
                if self.selected.is_none() {
                    debug!(store = %store_number, "selection cleared, store not in catalog");
                }
            }
            SelectionEvent::SelectionCleared => self.selected = None,
            SelectionEvent::HoverEntered(store, pointer) => {
                self.hovered = Some(store);
                self.pointer = pointer;
            }
            SelectionEvent::HoverMoved(pointer) => self.pointer = pointer,
            SelectionEvent::HoverLeft => self.hovered = None,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FacetCount, PostalAddress};

    fn store(number: &str, type_code: StoreTypeCode, health: f64) -> StoreRecord {
        StoreRecord {
            store_number: StoreNumber::new(number),
            name: format!("Store {number}"),
            type_code,
            type_desc: type_code.label().to_string(),
            postal_address: PostalAddress {
                latitude: 37.0,
                longitude: -122.0,
            },
            health_score: health,
            dashboard_url: None,
            customer_footfall: None,
        }
    }

    fn catalog() -> Vec<StoreRecord> {
        vec![
            store("2221", StoreTypeCode::Retail, 65.0),
            store("1042", StoreTypeCode::FullLine, 92.0),
        ]
    }

    fn index() -> FacetIndex {
        FacetIndex::build(&[PerformanceFacet {
            name: StoreNumber::new("2221"),
            results: Some(FacetCount { unique_count: 40 }),
            total_result: Some(FacetCount { unique_count: 50 }),
            performance_stats: None,
        }])
    }

    #[test]
    fn filter_events_update_one_field_at_a_time() {
        let state = FilterState::default()
            .apply(FilterEvent::StoreIdChanged("  2221  ".to_string()))
            .apply(FilterEvent::StoreTypeChanged(Some(StoreTypeCode::Retail)))
            .apply(FilterEvent::MinHealthChanged(Some(50)));

        assert_eq!(state.store_id_query, "2221");
        assert_eq!(state.store_type, Some(StoreTypeCode::Retail));
        assert_eq!(state.min_health_score, Some(50));

        let state = state.apply(FilterEvent::StoreTypeChanged(None));
        assert_eq!(state.store_type, None);
        assert_eq!(state.store_id_query, "2221");
    }

    #[test]
    fn health_floor_parsing_rejects_garbage() {
        assert_eq!(parse_health_floor(""), Ok(None));
        assert_eq!(parse_health_floor("  "), Ok(None));
        assert_eq!(parse_health_floor("50"), Ok(Some(50)));
        assert_eq!(parse_health_floor(" 80 "), Ok(Some(80)));
        assert!(parse_health_floor("fifty").is_err());
    }

    #[test]
    fn selecting_a_known_store_joins_its_details() {
        let state = SelectionState::default().apply(
            SelectionEvent::Selected(StoreNumber::new("2221")),
            &catalog(),
            &index(),
        );

        let selected = state.selected.expect("store should be selected");
        assert_eq!(selected.store.store_number, StoreNumber::new("2221"));
        let details = selected.details.expect("facet should be joined");
        assert_eq!(details.results.unwrap().unique_count, 40);
    }

    #[test]
    fn selecting_a_store_without_a_facet_leaves_details_empty() {
        let state = SelectionState::default().apply(
            SelectionEvent::Selected(StoreNumber::new("1042")),
            &catalog(),
            &index(),
        );

        let selected = state.selected.expect("store should be selected");
        assert!(selected.details.is_none());
    }

    #[test]
    fn selecting_an_unknown_store_clears_the_previous_selection() {
        let state = SelectionState::default()
            .apply(
                SelectionEvent::Selected(StoreNumber::new("2221")),
                &catalog(),
                &index(),
            )
            .apply(
                SelectionEvent::Selected(StoreNumber::new("9999")),
                &catalog(),
                &index(),
            );

        assert!(state.selected.is_none());
    }

    #[test]
    fn hover_and_selection_do_not_disturb_each_other() {
        let stores = catalog();
        let state = SelectionState::default()
            .apply(
                SelectionEvent::Selected(StoreNumber::new("2221")),
                &stores,
                &index(),
            )
            .apply(
                SelectionEvent::HoverEntered(stores[1].clone(), PointerPosition { x: 10.0, y: 20.0 }),
                &stores,
                &index(),
            );

        assert!(state.selected.is_some());
        assert_eq!(
            state.hovered.as_ref().map(|s| s.store_number.clone()),
            Some(StoreNumber::new("1042"))
        );
        assert_eq!(state.pointer, PointerPosition { x: 10.0, y: 20.0 });

        let state = state.apply(SelectionEvent::HoverLeft, &stores, &index());
        assert!(state.hovered.is_none());
        assert!(state.selected.is_some());

        let state = state.apply(SelectionEvent::SelectionCleared, &stores, &index());
        assert!(state.selected.is_none());
    }

    #[test]
    fn hover_move_only_updates_the_pointer() {
        let stores = catalog();
        let state = SelectionState::default()
            .apply(
                SelectionEvent::HoverEntered(stores[0].clone(), PointerPosition { x: 1.0, y: 1.0 }),
                &stores,
                &index(),
            )
            .apply(
                SelectionEvent::HoverMoved(PointerPosition { x: 5.0, y: 6.0 }),
                &stores,
                &index(),
            );

        assert_eq!(state.pointer, PointerPosition { x: 5.0, y: 6.0 });
        assert!(state.hovered.is_some());
    }
}

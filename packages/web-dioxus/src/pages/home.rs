//! Store map dashboard page

use dioxus::prelude::*;

use crate::components::{FilterBar, MapView, MetricsPanel, StoreCard};
use crate::data::{FACET_INDEX, STORES};
use crate::filters::filter_stores;
use crate::state::{FilterState, SelectionEvent, SelectionState};

/// The dashboard: filter bar on top, then sidebar list, map, and metrics
/// panel side by side.
#[component]
pub fn Home() -> Element {
    let filter = use_signal(FilterState::default);
    let mut selection = use_signal(SelectionState::default);

    // Re-filter whenever the filter state changes; the catalog itself is
    // static for the lifetime of the view.
    let filtered = use_memo(move || filter_stores(&STORES, &filter()));

    rsx! {
        div {
            class: "dashboard",

            FilterBar { filter }

            div {
                class: "dashboard-body",

                aside {
                    class: "sidebar",
                    h2 { class: "panel-title", "Store Overview" }
                    if filtered().is_empty() {
                        p { class: "panel-placeholder", "No stores match the current filters." }
                    }
                    for store in filtered() {
                        StoreCard {
                            key: "{store.store_number}",
                            store: store.clone(),
                            selected: selection()
                                .selected
                                .as_ref()
                                .is_some_and(|s| s.store.store_number == store.store_number),
                            on_select: move |store_number| {
                                let next = selection().apply(
                                    SelectionEvent::Selected(store_number),
                                    &STORES,
                                    &FACET_INDEX,
                                );
                                selection.set(next);
                            },
                        }
                    }
                }

                MapView {
                    stores: filtered(),
                    selection,
                }

                MetricsPanel { selected: selection().selected }
            }
        }
    }
}

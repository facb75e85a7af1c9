//! Map pane: OSM tile grid, colored store markers, hover tooltip

use dioxus::prelude::*;
use tracing::debug;

use crate::data::{FACET_INDEX, STORES};
use crate::map::{
    project, tile_count, tile_url, world_size, DEFAULT_CENTER, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM,
    TILE_SIZE,
};
use crate::metrics::{uptime_or_zero, MarkerColor};
use crate::state::{PointerPosition, SelectionEvent, SelectionState};
use crate::types::StoreRecord;

/// Props for MapView
#[derive(Props, Clone, PartialEq)]
pub struct MapViewProps {
    /// Stores currently passing the filters; one marker each.
    pub stores: Vec<StoreRecord>,
    pub selection: Signal<SelectionState>,
}

/// Scrollable world map with one marker per filtered store.
#[component]
pub fn MapView(props: MapViewProps) -> Element {
    let mut zoom = use_signal(|| DEFAULT_ZOOM);
    let selection = props.selection;

    let z = zoom();
    let world = world_size(z);
    let (origin_x, origin_y) = project(DEFAULT_CENTER.0, DEFAULT_CENTER.1, z);

    // Bring the default center back into view on mount and whenever the
    // zoom changes.
    use_effect(move || {
        let _ = zoom();
        #[cfg(feature = "web")]
        {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Some(origin) = document.get_element_by_id("map-origin") {
                    origin.scroll_into_view_with_bool(false);
                }
            }
        }
    });

    rsx! {
        div {
            class: "map-pane",

            div {
                class: "map-world",
                style: "width: {world}px; height: {world}px;",

                div {
                    id: "map-origin",
                    class: "map-origin",
                    style: "left: {origin_x}px; top: {origin_y}px;",
                }

                for tile_y in 0..tile_count(z) {
                    for tile_x in 0..tile_count(z) {
                        MapTile {
                            key: "{z}-{tile_x}-{tile_y}",
                            tile_x,
                            tile_y,
                            zoom: z,
                        }
                    }
                }

                for store in props.stores.iter().cloned() {
                    StoreMarker {
                        key: "{store.store_number}",
                        store,
                        zoom: z,
                        selection,
                    }
                }
            }

            div {
                class: "map-controls",
                button {
                    class: "map-zoom",
                    onclick: move |_| zoom.set((zoom() + 1).min(MAX_ZOOM)),
                    "+"
                }
                button {
                    class: "map-zoom",
                    onclick: move |_| zoom.set(zoom().saturating_sub(1).max(MIN_ZOOM)),
                    "\u{2212}"
                }
            }

            div { class: "map-attribution", "\u{a9} OpenStreetMap contributors" }

            HoverTooltip { selection }
        }
    }
}

#[component]
fn MapTile(tile_x: u32, tile_y: u32, zoom: u8) -> Element {
    let left = tile_x * TILE_SIZE;
    let top = tile_y * TILE_SIZE;
    let src = tile_url(tile_x, tile_y, zoom);

    rsx! {
        img {
            class: "map-tile",
            style: "left: {left}px; top: {top}px;",
            src: "{src}",
            alt: "",
        }
    }
}

#[component]
fn StoreMarker(store: StoreRecord, zoom: u8, selection: Signal<SelectionState>) -> Element {
    let percentage = uptime_or_zero(FACET_INDEX.get(&store.store_number));
    let color = MarkerColor::for_percentage(percentage);
    let (x, y) = project(
        store.postal_address.latitude,
        store.postal_address.longitude,
        zoom,
    );

    let marker_class = format!("marker {}", color.css_class());
    let marker_style = format!("left: {x:.1}px; top: {y:.1}px;");

    let mut selection = selection;
    let hover_store = store.clone();
    let click_store = store.clone();

    rsx! {
        button {
            class: "{marker_class}",
            style: "{marker_style}",
            aria_label: "{store.name}",
            onclick: move |_| open_dashboard(&click_store),
            onmouseenter: move |event| {
                let point = event.client_coordinates();
                let next = selection().apply(
                    SelectionEvent::HoverEntered(
                        hover_store.clone(),
                        PointerPosition { x: point.x, y: point.y },
                    ),
                    &STORES,
                    &FACET_INDEX,
                );
                selection.set(next);
            },
            onmousemove: move |event| {
                let point = event.client_coordinates();
                let next = selection().apply(
                    SelectionEvent::HoverMoved(PointerPosition { x: point.x, y: point.y }),
                    &STORES,
                    &FACET_INDEX,
                );
                selection.set(next);
            },
            onmouseleave: move |_| {
                let next = selection().apply(SelectionEvent::HoverLeft, &STORES, &FACET_INDEX);
                selection.set(next);
            },
        }
    }
}

#[component]
fn HoverTooltip(selection: Signal<SelectionState>) -> Element {
    let state = selection();
    let Some(store) = state.hovered else {
        return rsx! {};
    };

    let uptime = format!("{:.2}", uptime_or_zero(FACET_INDEX.get(&store.store_number)));
    let left = state.pointer.x + 12.0;
    let top = state.pointer.y - 10.0;

    rsx! {
        div {
            class: "map-tooltip",
            style: "left: {left}px; top: {top}px;",
            strong { "{store.name}" }
            br {}
            "Store Number: {store.store_number}"
            br {}
            "Health Score: {store.health_score}"
            br {}
            "Type: {store.type_desc}"
            br {}
            "Uptime: {uptime}%"
        }
    }
}

/// Base for derived dashboard links, overridable per environment.
fn dashboard_base() -> String {
    std::env::var("STORE_DASHBOARD_BASE_URL")
        .unwrap_or_else(|_| "https://newrelic.com".to_string())
}

/// Marker activation opens the store dashboard in a new browsing context.
/// Nothing is awaited or checked beyond the open call itself.
fn open_dashboard(store: &StoreRecord) {
    let url = store.dashboard_link(&dashboard_base());
    debug!(store = %store.store_number, %url, "opening store dashboard");

    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
                tracing::warn!(?err, "failed to open dashboard link");
            }
        }
    }
}

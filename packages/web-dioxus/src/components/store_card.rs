//! Sidebar card for a single store

use dioxus::prelude::*;

use crate::types::{StoreNumber, StoreRecord};

/// Props for StoreCard
#[derive(Props, Clone, PartialEq)]
pub struct StoreCardProps {
    pub store: StoreRecord,
    pub selected: bool,
    pub on_select: EventHandler<StoreNumber>,
}

/// Store overview card shown in the sidebar list; clicking it selects the
/// store in the metrics panel.
#[component]
pub fn StoreCard(props: StoreCardProps) -> Element {
    let store = props.store.clone();
    let store_number = store.store_number.clone();

    let card_class = if props.selected {
        "store-card store-card-selected"
    } else {
        "store-card"
    };

    rsx! {
        button {
            class: "{card_class}",
            onclick: move |_| props.on_select.call(store_number.clone()),

            strong { class: "store-card-name", "{store.name}" }
            p { class: "store-card-line", "Store #: {store.store_number}" }
            p { class: "store-card-line", "Type: {store.type_desc}" }
            p { class: "store-card-line", "Health: {store.health_score}" }
        }
    }
}

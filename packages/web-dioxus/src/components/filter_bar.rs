//! Filter controls across the top of the dashboard

use dioxus::prelude::*;
use tracing::warn;

use crate::state::{parse_health_floor, FilterEvent, FilterState};
use crate::types::StoreTypeCode;

/// Props for FilterBar
#[derive(Props, Clone, PartialEq)]
pub struct FilterBarProps {
    pub filter: Signal<FilterState>,
}

/// Store id text field plus type and health-score selects. Every input goes
/// through a [`FilterEvent`] so the transitions stay pure.
#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let mut filter = props.filter;

    let id_value = filter().store_id_query.clone();
    let type_value = filter()
        .store_type
        .map(|code| code.code())
        .unwrap_or("")
        .to_string();
    let health_value = filter()
        .min_health_score
        .map(|floor| floor.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "filter-bar",

            input {
                r#type: "text",
                class: "filter-input",
                placeholder: "Enter Store ID (e.g., 2221)",
                value: "{id_value}",
                oninput: move |event| {
                    let next = filter().apply(FilterEvent::StoreIdChanged(event.value()));
                    filter.set(next);
                }
            }

            select {
                class: "filter-select",
                value: "{type_value}",
                onchange: move |event| {
                    let code = StoreTypeCode::from_code(&event.value());
                    let next = filter().apply(FilterEvent::StoreTypeChanged(code));
                    filter.set(next);
                },
                option { value: "", "All Types" }
                for code in StoreTypeCode::variants() {
                    option { value: "{code.code()}", "{code.label()}" }
                }
            }

            select {
                class: "filter-select",
                value: "{health_value}",
                onchange: move |event| {
                    match parse_health_floor(&event.value()) {
                        Ok(floor) => {
                            let next = filter().apply(FilterEvent::MinHealthChanged(floor));
                            filter.set(next);
                        }
                        Err(err) => {
                            warn!(raw = %event.value(), error = %err, "ignoring invalid health score filter");
                        }
                    }
                },
                option { value: "", "All Scores" }
                option { value: "80", "80 and above" }
                option { value: "50", "50 and above" }
                option { value: "30", "30 and above" }
            }
        }
    }
}

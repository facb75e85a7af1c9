//! Performance metrics panel for the selected store

use dioxus::prelude::*;

use crate::state::SelectedStore;

/// Props for MetricsPanel
#[derive(Props, Clone, PartialEq)]
pub struct MetricsPanelProps {
    pub selected: Option<SelectedStore>,
}

#[component]
pub fn MetricsPanel(props: MetricsPanelProps) -> Element {
    rsx! {
        aside {
            class: "metrics-panel",
            h2 { class: "panel-title", "Performance Metrics" }
            if let Some(selected) = props.selected {
                SelectedStoreDetails { selected }
            } else {
                p {
                    class: "panel-placeholder",
                    "No store selected. Click a store marker to view details."
                }
            }
        }
    }
}

#[component]
fn SelectedStoreDetails(selected: SelectedStore) -> Element {
    let footfall = selected
        .store
        .customer_footfall
        .map(|count| count.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let response_time = selected
        .details
        .as_ref()
        .and_then(|details| details.performance_stats)
        .and_then(|stats| stats.response_time)
        .map(|ms| format!("{ms} ms"))
        .unwrap_or_else(|| "N/A".to_string());
    let incident_count = selected
        .details
        .as_ref()
        .and_then(|details| details.results)
        .map(|count| count.unique_count)
        .unwrap_or(0);

    rsx! {
        div {
            class: "metrics-details",
            p { strong { "Store: " } "{selected.store.name}" }
            p { strong { "Health Score: " } "{selected.store.health_score}" }
            p { strong { "Customer Footfall: " } "{footfall}" }
            p { strong { "Response Time: " } "{response_time}" }
            p { strong { "Incident Count: " } "{incident_count}" }
        }
    }
}

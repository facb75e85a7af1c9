//! Store Pulse - store location map dashboard
//!
//! A Dioxus web application rendering a retail store catalog on a map, with
//! filtering by identifier, type, and health score, and a performance panel
//! for the selected store.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod data;
mod filters;
mod map;
mod metrics;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    dioxus::launch(app::App);
}

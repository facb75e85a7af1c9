//! Reusable UI components

mod filter_bar;
mod map_view;
mod metrics_panel;
mod store_card;

pub use filter_bar::*;
pub use map_view::*;
pub use metrics_panel::*;
pub use store_card::*;

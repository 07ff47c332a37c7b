//! Terminal User Interface for the trading dashboard.
//!
//! A sidebar with view shortcuts, a top bar with scrape actions and
//! connection status, and a content area routed by view key.

mod app;
mod event;
mod input;
mod render;
pub(crate) mod state;
pub(crate) mod style;
mod table;
mod widgets;

pub use app::App;
pub use state::{AppState, PopupState, View};

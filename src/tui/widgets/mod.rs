//! TUI widgets.

mod data_view;
mod placeholder;
mod popups;
mod sidebar;
mod ticker;
mod topbar;

pub use data_view::render_dashboard;
pub use placeholder::render_placeholder;
pub use popups::{render_alert, render_confirm_settings, render_help, render_quit_confirm};
pub use sidebar::render_sidebar;
pub use ticker::render_ticker;
pub use topbar::render_topbar;

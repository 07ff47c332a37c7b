//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use super::state::{AppState, PopupState, View};
use super::widgets::{
    render_alert, render_confirm_settings, render_dashboard, render_help, render_placeholder,
    render_quit_confirm, render_sidebar, render_ticker, render_topbar,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: sidebar on the left, top bar and content on the right.
    let columns = Layout::horizontal([
        Constraint::Length(24), // Sidebar
        Constraint::Min(40),    // Main area
    ])
    .split(area);

    render_sidebar(frame, columns[0], state);

    let main = Layout::vertical([
        Constraint::Length(2), // Actions + status line
        Constraint::Min(10),   // Content area
    ])
    .split(columns[1]);

    render_topbar(frame, main[0], state);
    render_content(frame, main[1], state);

    // Popups (rendered last to overlay everything).
    match &state.popup {
        PopupState::None => {}
        PopupState::Alert { kind, message } => render_alert(frame, area, *kind, message),
        PopupState::ConfirmSettings { message } => render_confirm_settings(frame, area, message),
        PopupState::Help => render_help(frame, area),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
    }
}

/// Renders content based on the active view key.
fn render_content(frame: &mut Frame, area: Rect, state: &AppState) {
    match View::from_key(&state.active_view) {
        View::Dashboard => render_dashboard(frame, area, state),
        View::Ticker(symbol) => render_ticker(frame, area, state, &symbol),
        View::Placeholder(title) => render_placeholder(frame, area, title),
    }
}

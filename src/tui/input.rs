//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, NAV_ITEMS, PopupState, TICKERS, View};
use crate::api::ScrapeJob;

/// Result of handling a key event. Actions with side effects (spawning
/// backend jobs, quitting) are returned to the app loop; pure state
/// changes happen in place.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit immediately (Ctrl-C).
    Quit,
    /// Confirmed exit: ask the backend to shut down, then quit.
    ShutdownAndQuit,
    /// Switch to the view behind this key.
    OpenView(String),
    /// Trigger a scrape job.
    Scrape(ScrapeJob),
    /// Re-fetch both file lists.
    RefreshLists,
    /// Fetch content for the focused pane's selected file.
    LoadSelected,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match &state.popup {
        PopupState::Alert { .. } => return handle_alert(state, key),
        PopupState::ConfirmSettings { .. } => return handle_confirm_settings(state, key),
        PopupState::Help => return handle_help(state, key),
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::None => {}
    }
    handle_normal(state, key)
}

fn handle_alert(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            state.popup = PopupState::None;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_confirm_settings(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            state.popup = PopupState::None;
            // `settings` is not a routed id; it lands on the default
            // placeholder until a real settings panel exists.
            KeyAction::OpenView("settings".to_string())
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::ShutdownAndQuit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_normal(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // Global keys first.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            return KeyAction::None;
        }
        KeyCode::Char('?') => {
            state.popup = PopupState::Help;
            return KeyAction::None;
        }
        KeyCode::Tab => return cycle_view(state, 1),
        KeyCode::BackTab => return cycle_view(state, -1),
        KeyCode::Char('t') => return KeyAction::Scrape(ScrapeJob::Trading212),
        KeyCode::Char('y') => return KeyAction::Scrape(ScrapeJob::Yfinance),
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            return KeyAction::OpenView(NAV_ITEMS[idx].0.to_string());
        }
        KeyCode::Char(c @ '6'..='9') => {
            let idx = c as usize - '6' as usize;
            return KeyAction::OpenView(format!("ticker:{}", TICKERS[idx]));
        }
        KeyCode::Char('0') => {
            return KeyAction::OpenView(format!("ticker:{}", TICKERS[4]));
        }
        _ => {}
    }

    // View-local keys.
    match View::from_key(&state.active_view) {
        View::Dashboard => handle_dashboard_keys(state, key),
        View::Ticker(_) => handle_ticker_keys(state, key),
        View::Placeholder(_) => KeyAction::None,
    }
}

fn cycle_view(state: &AppState, step: isize) -> KeyAction {
    let keys: Vec<&str> = NAV_ITEMS.iter().map(|(k, _)| *k).collect();
    let pos = keys.iter().position(|k| *k == state.active_view);
    let next = match pos {
        Some(i) => (i as isize + step).rem_euclid(keys.len() as isize) as usize,
        // Ticker/settings views re-enter the cycle at the start.
        None => 0,
    };
    KeyAction::OpenView(keys[next].to_string())
}

fn handle_dashboard_keys(state: &mut AppState, key: KeyEvent) -> KeyAction {
    use crate::api::DatasetKind;

    match key.code {
        KeyCode::Char('r') => return KeyAction::RefreshLists,
        KeyCode::Left | KeyCode::Char('h') => state.focused_pane = DatasetKind::Reports,
        KeyCode::Right | KeyCode::Char('l') => state.focused_pane = DatasetKind::Market,
        KeyCode::Up | KeyCode::Char('k') => {
            let pane = state.pane_mut(state.focused_pane);
            pane.select_up();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let pane = state.pane_mut(state.focused_pane);
            pane.select_down();
        }
        KeyCode::Enter => return KeyAction::LoadSelected,
        KeyCode::Esc => {
            let pane = state.pane_mut(state.focused_pane);
            pane.clear_selection();
        }
        KeyCode::PageUp => {
            let pane = state.pane_mut(state.focused_pane);
            pane.content_scroll = pane.content_scroll.saturating_sub(10);
        }
        KeyCode::PageDown => {
            let pane = state.pane_mut(state.focused_pane);
            pane.content_scroll = pane.content_scroll.saturating_add(10);
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_ticker_keys(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => return KeyAction::OpenView("overview".to_string()),
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(ticker) = state.ticker.as_mut() {
                ticker.content_scroll = ticker.content_scroll.saturating_sub(1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(ticker) = state.ticker.as_mut() {
                ticker.content_scroll = ticker.content_scroll.saturating_add(1);
            }
        }
        KeyCode::PageUp => {
            if let Some(ticker) = state.ticker.as_mut() {
                ticker.content_scroll = ticker.content_scroll.saturating_sub(10);
            }
        }
        KeyCode::PageDown => {
            if let Some(ticker) = state.ticker.as_mut() {
                ticker.content_scroll = ticker.content_scroll.saturating_add(10);
            }
        }
        _ => {}
    }
    KeyAction::None
}

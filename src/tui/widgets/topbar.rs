//! Top bar: scrape actions, balance, return and connection pills, plus
//! the transient status line.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, ConnectionStatus};
use crate::tui::style::Styles;

/// Renders the two-line top bar.
pub fn render_topbar(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    render_action_row(frame, rows[0], state);
    render_status_row(frame, rows[1], state);
}

fn render_action_row(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Min(46),    // Action buttons
        Constraint::Length(22), // Balance pill
        Constraint::Length(16), // Return pill
        Constraint::Length(20), // Status pill
        Constraint::Length(9),  // Clock
    ])
    .split(area);

    // Both buttons are disabled (dimmed) while either job runs.
    let busy = state.any_scrape_busy();
    let button = |label: String, this_busy: bool| {
        if this_busy {
            Span::styled(label, Styles::status())
        } else if busy {
            Span::styled(label, Styles::dim())
        } else {
            Span::styled(label, Styles::header())
        }
    };
    let t212_label = if state.t212_busy {
        " [t] Get Trading212 Info ~ ".to_string()
    } else {
        " [t] Get Trading212 Info ".to_string()
    };
    let yf_label = if state.yfinance_busy {
        " [y] Get Stock Info ~ ".to_string()
    } else {
        " [y] Get Stock Info ".to_string()
    };
    let actions = Line::from(vec![
        button(t212_label, state.t212_busy),
        Span::raw(" "),
        button(yf_label, state.yfinance_busy),
    ]);
    frame.render_widget(Paragraph::new(actions), chunks[0]);

    let balance = match state.balance {
        Some(total) => format!("Balance: £{total:.2}"),
        None => "Balance:".to_string(),
    };
    frame.render_widget(Paragraph::new(balance).style(Styles::default()), chunks[1]);

    let connected = state.connection == ConnectionStatus::Connected;
    // TODO: compute the return from report data instead of hardcoding.
    let ret = if connected { "Return: 182%" } else { "Return:" };
    frame.render_widget(Paragraph::new(ret).style(Styles::default()), chunks[2]);

    let (status_text, status_style) = if connected {
        (" Connected ", Styles::connected())
    } else {
        (" Disconnected ", Styles::disconnected())
    };
    frame.render_widget(Paragraph::new(status_text).style(status_style), chunks[3]);

    let clock = Local::now().format(" %H:%M:%S").to_string();
    frame.render_widget(Paragraph::new(clock).style(Styles::dim()), chunks[4]);
}

fn render_status_row(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status_message {
        Some(msg) => {
            let style = if msg.starts_with("Error") {
                Styles::danger()
            } else {
                Styles::status()
            };
            Line::from(Span::styled(format!(" {msg}"), style))
        }
        None => Line::from(Span::styled(
            " t/y scrape · 1-5 views · 6-0 tickers · ? help · q quit",
            Styles::help(),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

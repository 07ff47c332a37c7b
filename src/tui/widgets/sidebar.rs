//! Sidebar: main navigation and ticker shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::{AppState, NAV_ITEMS, TICKERS};
use crate::tui::style::Styles;

/// Renders the sidebar with navigation entries and ticker shortcuts.
pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Investments ")
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for (i, (key, label)) in NAV_ITEMS.iter().enumerate() {
        let style = if state.active_view == *key {
            Styles::nav_active()
        } else {
            Styles::nav_inactive()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), Styles::dim()),
            Span::styled(*label, style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Tickers", Styles::dim())));
    for (i, ticker) in TICKERS.iter().enumerate() {
        // Keys 6..9 then 0 for the fifth ticker.
        let hotkey = if i < 4 { (b'6' + i as u8) as char } else { '0' };
        let active = state.active_view == format!("ticker:{ticker}");
        let style = if active {
            Styles::nav_active()
        } else {
            Styles::nav_inactive()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {hotkey} "), Styles::dim()),
            Span::styled(*ticker, style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" ? ", Styles::help_key()),
        Span::styled("Help", Styles::help()),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" q ", Styles::help_key()),
        Span::styled("Exit", Styles::help()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

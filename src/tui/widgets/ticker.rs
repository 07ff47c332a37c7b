//! Ticker view: market data table for a single symbol.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, TICKER_ROW_CAP};
use crate::tui::style::Styles;

use super::data_view::render_content_table;

/// Renders the market data table for `symbol`, or the matching
/// loading/error/no-data notice.
pub fn render_ticker(frame: &mut Frame, area: Rect, state: &AppState, symbol: &str) {
    let Some(pane) = state.ticker.as_ref().filter(|p| p.symbol == symbol) else {
        render_notice(frame, area, "No data available", Styles::dim());
        return;
    };

    if pane.loading {
        render_notice(frame, area, "Loading...", Styles::dim());
        return;
    }
    if let Some(err) = &pane.error {
        render_notice(frame, area, err, Styles::danger());
        return;
    }
    match &pane.content {
        Some(content) => {
            let title = format!("{symbol} Market Data");
            render_content_table(
                frame,
                area,
                content,
                TICKER_ROW_CAP,
                pane.content_scroll,
                &title,
            );
        }
        None => render_notice(frame, area, "No data available", Styles::dim()),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str, style: ratatui::style::Style) {
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), style)).alignment(Alignment::Center),
        area,
    );
}

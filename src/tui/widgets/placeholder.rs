//! Static placeholder panel for views without content yet.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::style::Styles;

/// Renders a centered placeholder with a title.
pub fn render_placeholder(frame: &mut Frame, area: Rect, title: &str) {
    let block = Block::default().borders(Borders::ALL).style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .split(inner);

    let content = vec![
        Line::from(Span::styled(title.to_string(), Styles::dim())),
        Line::from(Span::styled(
            format!("Content for {title} will appear here."),
            Styles::help(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        rows[1],
    );
}

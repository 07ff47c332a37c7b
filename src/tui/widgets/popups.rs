//! Popup widgets: alerts, the settings confirmation prompt, the help
//! overlay and the quit confirmation.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::state::AlertKind;
use crate::tui::style::Styles;

fn centered_popup(area: Rect, height: u16) -> Rect {
    // 50% width, fixed height, clamped for small terminals.
    let popup_width = (area.width * 50 / 100).clamp(40, 70);
    let popup_height = height.min(area.height);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Renders a dismissable alert popup.
pub fn render_alert(frame: &mut Frame, area: Rect, kind: AlertKind, message: &str) {
    let popup_area = centered_popup(area, 7);
    frame.render_widget(Clear, popup_area);

    let (title, border) = match kind {
        AlertKind::Success => (" Success ", Styles::success()),
        AlertKind::Error => (" Error ", Styles::danger()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from(Span::styled(message.to_string(), Styles::default())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" → dismiss", Styles::help()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// Renders the yes/no prompt offering to open the settings view.
pub fn render_confirm_settings(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_popup(area, 8);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_style(Styles::focused_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from(Span::styled(message.to_string(), Styles::default())),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" → open settings", Styles::help()),
        ]),
        Line::from(vec![
            Span::styled("n", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" → cancel", Styles::help()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

/// Renders the keybinding reference overlay.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup(area, 17);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::focused_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!(" {key:<12}"), Styles::help_key()),
            Span::styled(desc.to_string(), Styles::help()),
        ])
    };
    let content = vec![
        entry("t", "Sync Trading212 account data"),
        entry("y", "Update stock info via yfinance"),
        entry("1-5", "Switch view (5 = data dashboard)"),
        entry("6-9, 0", "Open ticker market data"),
        entry("Tab", "Cycle views"),
        entry("h/l, ←/→", "Focus dashboard pane"),
        entry("j/k, ↑/↓", "Select file in focused pane"),
        entry("Enter", "Load selected file"),
        entry("r", "Refresh file lists"),
        entry("PgUp/PgDn", "Scroll table content"),
        entry("Esc", "Clear selection / close"),
        entry("?", "Toggle this help"),
        entry("q", "Quit"),
    ];
    frame.render_widget(Paragraph::new(content), inner);
}

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup(area, 8);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Exit t212dash ")
        .borders(Borders::ALL)
        .border_style(Styles::focused_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from(Span::styled(
            "Quit and stop the backend?",
            Styles::default(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" → quit", Styles::help()),
        ]),
        Line::from(vec![
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" or ", Styles::help()),
            Span::styled("n", Styles::help_key()),
            Span::styled(" → cancel", Styles::help()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .style(Styles::default()),
        inner,
    );
}

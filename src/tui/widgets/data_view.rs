//! Dashboard view: two data panes (history reports, market data), each
//! with a file list and a capped content table.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table};

use crate::api::{DatasetKind, FileContent};
use crate::tui::state::{AppState, DATA_VIEW_ROW_CAP, DataPaneState};
use crate::tui::style::Styles;
use crate::tui::table::ContentTable;

/// Renders the dashboard: reports pane on the left, market pane on the
/// right. The focused pane gets an accented border.
pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let panes = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_pane(
        frame,
        panes[0],
        state.pane(DatasetKind::Reports),
        DatasetKind::Reports,
        state.focused_pane == DatasetKind::Reports,
    );
    render_pane(
        frame,
        panes[1],
        state.pane(DatasetKind::Market),
        DatasetKind::Market,
        state.focused_pane == DatasetKind::Market,
    );
}

fn render_pane(
    frame: &mut Frame,
    area: Rect,
    pane: &DataPaneState,
    kind: DatasetKind,
    focused: bool,
) {
    let border_style = if focused {
        Styles::focused_border()
    } else {
        Styles::dim()
    };
    let block = Block::default()
        .title(format!(" {} ({} files) ", kind.title(), pane.files.len()))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(inner);

    render_file_list(frame, rows[0], pane);
    render_content(frame, rows[1], pane);
}

fn render_file_list(frame: &mut Frame, area: Rect, pane: &DataPaneState) {
    if pane.list_loading {
        frame.render_widget(
            Paragraph::new(Span::styled("Loading...", Styles::dim()))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }
    if pane.files.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No files found", Styles::dim()))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = pane
        .files
        .iter()
        .map(|f| ListItem::new(display_name(f)))
        .collect();
    let list = List::new(items)
        .style(Styles::default())
        .highlight_style(Styles::selected());
    let mut list_state = ListState::default().with_selected(pane.selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_content(frame: &mut Frame, area: Rect, pane: &DataPaneState) {
    if pane.content_loading {
        frame.render_widget(
            Paragraph::new(Span::styled("Loading...", Styles::dim()))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }
    match &pane.content {
        Some(content) => render_content_table(
            frame,
            area,
            content,
            DATA_VIEW_ROW_CAP,
            pane.content_scroll,
            &content.filename,
        ),
        None => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Select a file to view content",
                    Styles::dim(),
                ))
                .alignment(Alignment::Center),
                area,
            );
        }
    }
}

/// Renders a capped content table with an omitted-row notice in the
/// bottom border. Shared with the ticker view.
pub(super) fn render_content_table(
    frame: &mut Frame,
    area: Rect,
    content: &FileContent,
    cap: usize,
    scroll: usize,
    title: &str,
) {
    let table_model = ContentTable::build(content, cap);

    let mut block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::TOP);
    if let Some(notice) = table_model.overflow_notice() {
        block = block.title_bottom(Span::styled(notice, Styles::dim()));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(
        table_model
            .headers
            .iter()
            .map(|h| Span::styled(h.clone(), Styles::table_header())),
    )
    .height(1);

    // Scroll stays inside the capped rows; the cap itself is the
    // pagination limit.
    let scroll = scroll.min(table_model.rows.len().saturating_sub(1));
    let rows: Vec<Row> = table_model
        .rows
        .iter()
        .skip(scroll)
        .map(|cells| Row::new(cells.iter().map(|c| Span::raw(c.clone()))))
        .collect();

    let constraints: Vec<Constraint> = table_model
        .column_widths(inner.width)
        .into_iter()
        .map(Constraint::Length)
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .style(Styles::default());
    frame.render_widget(table, inner);
}

/// List entries show the bare file name, without the market data
/// directory prefix the backend includes.
fn display_name(file: &str) -> String {
    file.replace("market_data\\", "").replace("market_data/", "")
}

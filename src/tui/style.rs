//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Dashboard palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const HEADER_BG: Color = Color::Blue;
    pub const HEADER_FG: Color = Color::White;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Status pill: green/red.
    pub const CONNECTED: Color = Color::Green;
    pub const DISCONNECTED: Color = Color::Red;

    pub const NAV_ACTIVE: Color = Color::Cyan;
    pub const NAV_INACTIVE: Color = Color::DarkGray;

    pub const SUCCESS: Color = Color::Green;
    pub const DANGER: Color = Color::Red;
    pub const ACCENT: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Top bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected list/table row.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header row.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active sidebar entry.
    pub fn nav_active() -> Style {
        Style::default()
            .fg(Theme::NAV_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive sidebar entry.
    pub fn nav_inactive() -> Style {
        Style::default().fg(Theme::NAV_INACTIVE)
    }

    /// Dimmed text.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Success-colored text.
    pub fn success() -> Style {
        Style::default().fg(Theme::SUCCESS)
    }

    /// Error-colored text.
    pub fn danger() -> Style {
        Style::default()
            .fg(Theme::DANGER)
            .add_modifier(Modifier::BOLD)
    }

    /// Connected status pill.
    pub fn connected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Theme::CONNECTED)
            .add_modifier(Modifier::BOLD)
    }

    /// Disconnected status pill.
    pub fn disconnected() -> Style {
        Style::default()
            .fg(Theme::FG)
            .bg(Theme::DISCONNECTED)
            .add_modifier(Modifier::BOLD)
    }

    /// Transient status line.
    pub fn status() -> Style {
        Style::default().fg(Color::Yellow)
    }

    /// Focused pane border.
    pub fn focused_border() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Help text.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Highlighted keys in help lines.
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }
}

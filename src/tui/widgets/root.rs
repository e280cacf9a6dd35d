//! Root layout widget - orchestrates main layout structure

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{help, lyrics_view, search_form, status_bar};

/// Main layout structure:
/// ```text
///  Lyrics Finder
/// ┌ Artist ──────────────┬ Song ────────────────┐
/// └──────────────────────┴──────────────────────┘
/// ┌ Lyrics ─────────────────────────────────────┐
/// │  title / artist / source                    │
/// │  lyrics text (scrollable)                   │
/// └─────────────────────────────────────────────┘
/// ┌ status / toast ───────────────── key hints ─┐
/// └─────────────────────────────────────────────┘
/// ```
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let root = frame.area();
    let theme = get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Inputs
            Constraint::Min(5),    // Lyrics
            Constraint::Length(3), // Status bar
        ])
        .split(root);

    let header = Line::from(vec![
        Span::styled(
            format!(" {} Lyrics Finder", theme.icons.music),
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  find lyrics for your favorite songs",
            Style::default().fg(theme.palette.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);

    search_form::render(frame, state, rows[1]);
    lyrics_view::render(frame, state, rows[2]);
    status_bar::render(frame, state, rows[3]);

    if state.show_help {
        help::render(frame, root);
    }
}

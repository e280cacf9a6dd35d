//! Artist / song input boxes

use crate::app::state::{AppState, Field};
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_input(frame, state, theme, Field::Artist, &state.artist_input, cols[0]);
    render_input(frame, state, theme, Field::Song, &state.song_input, cols[1]);
}

fn render_input(
    frame: &mut Frame,
    state: &AppState,
    theme: &Theme,
    field: Field,
    value: &str,
    area: Rect,
) {
    let icons = &theme.icons;
    let is_focused = state.focus == field;
    let border_color = if is_focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };

    let icon = match field {
        Field::Artist => icons.artist,
        Field::Song => icons.music,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} {} ", icon, field.label()))
        .title_style(Style::default().fg(theme.palette.accent));

    let prompt = if is_focused && state.is_searching() {
        format!("{} {}", value, icons.spinner_frame(state.tick))
    } else if is_focused {
        format!("{}▏", value)
    } else if value.is_empty() {
        placeholder(field).to_string()
    } else {
        value.to_string()
    };

    let style = if value.is_empty() && !is_focused {
        Style::default().fg(theme.palette.fg_secondary)
    } else {
        Style::default().fg(theme.palette.fg_primary)
    };

    let p = Paragraph::new(Line::from(prompt)).style(style).block(block);
    frame.render_widget(p, area);
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Artist => "e.g., Arijit Singh",
        Field::Song => "e.g., Tum Hi Ho",
    }
}

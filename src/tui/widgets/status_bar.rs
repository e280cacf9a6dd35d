//! Bottom status line: toast or lookup status, plus key hints

use crate::app::state::{AppState, ToastKind};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::truncate_str;

const HINTS: &str = "Enter search  Tab switch  Ctrl+S save  F1 help  Esc quit";

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(HINTS.chars().count() as u16 + 1),
        ])
        .split(inner);

    let width = cols[0].width.saturating_sub(3) as usize;

    let left = if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        let (prefix, color) = match toast.kind {
            ToastKind::Success => (icons.download, theme.palette.success),
            ToastKind::Error => (icons.error, theme.palette.error),
        };
        Line::from(vec![
            Span::styled(format!("{} ", prefix), Style::default().fg(color)),
            Span::styled(truncate_str(&toast.message, width), Style::default().fg(color)),
        ])
    } else {
        Line::from(Span::styled(
            truncate_str(&state.status, width),
            Style::default().fg(theme.palette.fg_secondary),
        ))
    };
    frame.render_widget(Paragraph::new(left), cols[0]);

    let hints = Line::from(Span::styled(HINTS, Style::default().fg(theme.palette.fg_secondary)));
    frame.render_widget(Paragraph::new(hints), cols[1]);
}

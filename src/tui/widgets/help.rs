//! Help overlay showing keybindings

use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered over `area`
pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent))
        .style(Style::default().bg(theme.palette.bg_primary));

    let content = vec![
        section_header("Search", theme),
        keybind("Tab", "Switch between artist and song", theme),
        keybind("Enter", "Search lyrics", theme),
        keybind("Backspace", "Delete character", theme),
        keybind("Ctrl+u", "Clear field", theme),
        Line::default(),
        section_header("Lyrics", theme),
        keybind("Up / Down", "Scroll", theme),
        keybind("PgUp / PgDn", "Scroll a page", theme),
        keybind("Ctrl+Home", "Go to top", theme),
        keybind("Ctrl+End", "Go to bottom", theme),
        keybind("Ctrl+s", "Save lyrics to a text file", theme),
        Line::default(),
        section_header("General", theme),
        keybind("F1", "Toggle this help", theme),
        keybind("Esc", "Close help / quit", theme),
        keybind("Ctrl+c", "Quit", theme),
    ];

    let para = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(para, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:14}", key),
            Style::default()
                .fg(theme.palette.success)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}

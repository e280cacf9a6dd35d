//! Lyrics pane: the found lyrics, lookup progress, or not-found hints

use crate::app::NOT_FOUND_SUGGESTIONS;
use crate::app::state::{AppState, LookupStatus};
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::truncate_str;

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Lyrics ", icons.lyrics))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Add horizontal padding
    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),  // Left padding
            Constraint::Min(1),     // Content
            Constraint::Length(1),  // Right padding
        ])
        .split(inner)[1];

    match state.lookup.clone() {
        LookupStatus::Found => render_result(frame, state, theme, padded),
        LookupStatus::Searching { provider } => {
            let text = match provider {
                Some(name) => format!("{} Trying {}...", icons.spinner_frame(state.tick), name),
                None => format!("{} Searching...", icons.spinner_frame(state.tick)),
            };
            render_centered(frame, vec![Line::from(text)], theme, padded);
        }
        LookupStatus::NotFound => render_not_found(frame, theme, padded),
        LookupStatus::Idle => {
            let lines = vec![
                Line::from("Find lyrics for your favorite songs"),
                Line::default(),
                Line::from("Type an artist and a song, then press Enter"),
            ];
            render_centered(frame, lines, theme, padded);
        }
    }
}

fn render_result(frame: &mut Frame, state: &mut AppState, theme: &Theme, area: Rect) {
    let Some(result) = &state.result else {
        return;
    };
    let icons = &theme.icons;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Artist + source
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Lyrics
        ])
        .split(area);

    let width = area.width as usize;

    let title = Line::from(Span::styled(
        truncate_str(&format!("{} {}", icons.music, result.title), width),
        Style::default()
            .fg(theme.palette.fg_primary)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title), rows[0]);

    let byline = Line::from(vec![
        Span::styled(
            format!("{} {}", icons.artist, result.artist),
            Style::default().fg(theme.palette.fg_secondary),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", icons.success, result.source),
            Style::default().fg(theme.palette.success),
        ),
    ]);
    frame.render_widget(Paragraph::new(byline), rows[1]);

    let lyrics = Paragraph::new(result.lyrics.as_str())
        .style(Style::default().fg(theme.palette.fg_primary))
        .wrap(Wrap { trim: false });
    let total_rows = lyrics.line_count(rows[3].width);
    let scroll = u16::try_from(state.scroll).unwrap_or(u16::MAX);
    frame.render_widget(lyrics.scroll((scroll, 0)), rows[3]);

    state.viewport_height = rows[3].height as usize;
    state.lyrics_rows = total_rows;
    // The pane may have grown or been resized since the last scroll.
    state.scroll = state.scroll.min(state.max_scroll());
}

fn render_not_found(frame: &mut Frame, theme: &Theme, area: Rect) {
    let icons = &theme.icons;
    let hint = Style::default().fg(theme.palette.info);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} Lyrics not found. Please check the spelling or try a different song.",
                icons.error
            ),
            Style::default().fg(theme.palette.error),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{} Suggestions:", icons.info),
            hint.add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        NOT_FOUND_SUGGESTIONS
            .iter()
            .map(|s| Line::from(Span::styled(format!("{} {}", icons.bullet, s), hint))),
    );
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_centered(frame: &mut Frame, lines: Vec<Line>, theme: &Theme, area: Rect) {
    // Center vertically
    let top_padding = (area.height as usize).saturating_sub(lines.len()) / 2;
    let mut centered: Vec<Line> = vec![Line::default(); top_padding];
    centered.extend(lines);

    let paragraph = Paragraph::new(centered)
        .style(Style::default().fg(theme.palette.fg_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

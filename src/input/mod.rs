use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::AppState;
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err() {
                                break;
                            }
                    }
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => {
                        if tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err() {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx
                            .blocking_send(Event::Input(InputEvent::Resize))
                            .is_err()
                        {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        },
        InputEvent::Key(k) if state.show_help => handle_help(k),
        InputEvent::Key(k) => handle_form(k),
    }
}

fn handle_help(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => Some(Action::ToggleHelp),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

fn handle_form(k: KeyEvent) -> Option<Action> {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    match k.code {
        // Quit
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),

        // Form
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Enter => Some(Action::StartSearch),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
        KeyCode::Char('s') if ctrl => Some(Action::SaveLyrics),

        // Lyrics scrolling
        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Home if ctrl => Some(Action::GoTop),
        KeyCode::End if ctrl => Some(Action::GoBottom),

        KeyCode::F(1) => Some(Action::ToggleHelp),

        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_form_keys() {
        let state = AppState::new();
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::InputChar('q')));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::StartSearch));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Tab)), Some(Action::FocusNext));
        assert_eq!(map_input_to_action(&state, ctrl('s')), Some(Action::SaveLyrics));
        assert_eq!(map_input_to_action(&state, ctrl('c')), Some(Action::Quit));
        assert_eq!(map_input_to_action(&state, ctrl('x')), None);
        assert_eq!(map_input_to_action(&state, key(KeyCode::PageDown)), Some(Action::PageDown));
    }

    #[test]
    fn test_help_overlay_swallows_typing() {
        let mut state = AppState::new();
        state.show_help = true;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('a'))), None);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::ToggleHelp));
        assert_eq!(map_input_to_action(&state, ctrl('c')), Some(Action::Quit));
    }
}

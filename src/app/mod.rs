pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::export;
use crate::input;
use crate::lyrics::Resolver;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, LookupEvent};
use state::{AppState, LookupStatus, Toast};
use std::sync::Arc;
use tokio::sync::mpsc;

const PAGE: isize = 10;

/// Shown when every provider missed.
pub const NOT_FOUND_SUGGESTIONS: [&str; 4] = [
    "Check the spelling of artist and song name",
    "Try using the full song title",
    "Some songs might not be available in the databases",
    "Try searching on Genius.com or AZLyrics.com",
];

pub struct App {
    cfg: Config,
    state: AppState,
    resolver: Arc<Resolver>,
}

impl App {
    pub fn new(cfg: Config) -> anyhow::Result<Self> {
        let resolver = Resolver::from_config(&cfg.lyrics)?;
        Ok(Self::with_resolver(cfg, resolver))
    }

    pub fn with_resolver(cfg: Config, resolver: Resolver) -> Self {
        Self {
            cfg,
            state: AppState::new(),
            resolver: Arc::new(resolver),
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);

        // Redraw after every event. Ticks only arrive while a lookup runs.
        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Lookup(le) => self.handle_lookup(le),
                Event::Tick => self.state.tick = self.state.tick.wrapping_add(1),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::StartSearch => self.spawn_lookup(tx),
            Action::SaveLyrics => self.save_lyrics(),
            _ => self.reduce(action),
        }
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::FocusNext | Action::FocusPrev => {
                // Two fields: both directions land on the other one.
                self.state.focus = self.state.focus.next();
            }
            Action::InputChar(c) => self.state.focused_input_mut().push(c),
            Action::Backspace => {
                self.state.focused_input_mut().pop();
            }
            Action::ClearInput => self.state.focused_input_mut().clear(),
            Action::ScrollUp => self.state.scroll_by(-1),
            Action::ScrollDown => self.state.scroll_by(1),
            Action::PageUp => self.state.scroll_by(-PAGE),
            Action::PageDown => self.state.scroll_by(PAGE),
            Action::GoTop => self.state.scroll = 0,
            Action::GoBottom => self.state.scroll = self.state.max_scroll(),
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Resize => {
                // Resize is handled by terminal
            }
            Action::StartSearch | Action::SaveLyrics => {} // handled in handle_action
        }
    }

    fn handle_lookup(&mut self, le: LookupEvent) {
        match le {
            LookupEvent::Attempt { id, provider } => {
                if id == self.state.lookup_id && self.state.is_searching() {
                    self.state.status = format!("Trying {provider}...");
                    self.state.lookup = LookupStatus::Searching {
                        provider: Some(provider),
                    };
                }
            }
            LookupEvent::Found { id, result } => {
                if id == self.state.lookup_id {
                    self.state.status = format!("Lyrics found from {}", result.source);
                    self.state.lookup = LookupStatus::Found;
                    self.state.result = Some(result);
                    self.state.scroll = 0;
                }
            }
            LookupEvent::NotFound { id } => {
                if id == self.state.lookup_id {
                    self.state.status = "Lyrics not found".into();
                    self.state.lookup = LookupStatus::NotFound;
                }
            }
        }
    }

    fn spawn_lookup(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.is_searching() {
            return;
        }
        let query = match self.state.query() {
            Ok(q) => q,
            Err(msg) => {
                self.state.toast = Some(Toast::error(msg));
                return;
            }
        };

        let id = self.state.begin_lookup();
        self.state.status = format!("Searching: {} - {}", query.song, query.artist);

        let resolver = self.resolver.clone();
        let tx = tx.clone();

        tokio::spawn(async move {
            let attempt_tx = tx.clone();
            let lookup = resolver.resolve_with(&query, |provider| {
                let _ = attempt_tx.try_send(Event::Lookup(LookupEvent::Attempt {
                    id,
                    provider: provider.to_string(),
                }));
            });
            tokio::pin!(lookup);

            let mut ticker = tokio::time::interval(std::time::Duration::from_millis(120));
            let outcome = loop {
                tokio::select! {
                    outcome = &mut lookup => break outcome,
                    _ = ticker.tick() => {
                        let _ = tx.send(Event::Tick).await;
                    }
                }
            };

            let event = match outcome {
                Some(result) => LookupEvent::Found { id, result },
                None => LookupEvent::NotFound { id },
            };
            let _ = tx.send(Event::Lookup(event)).await;
        });
    }

    fn save_lyrics(&mut self) {
        let Some(result) = &self.state.result else {
            self.state.toast = Some(Toast::error("Nothing to save yet"));
            return;
        };

        match export::save(result, &self.cfg.paths.export_dir) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "lyrics saved");
                self.state.toast = Some(Toast::success(format!("Saved {}", path.display())));
            }
            Err(e) => {
                tracing::warn!("save failed: {e:#}");
                self.state.toast = Some(Toast::error(format!("Save failed: {e:#}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Field, ToastKind};
    use crate::lyrics::LyricsResult;

    fn app() -> App {
        App::with_resolver(Config::default(), Resolver::new(Vec::new()))
    }

    fn found() -> LyricsResult {
        LyricsResult {
            title: "Song".into(),
            artist: "Artist".into(),
            lyrics: "one\ntwo".into(),
            source: "lrclib.net".into(),
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut app = app();
        for c in "Queen".chars() {
            app.reduce(Action::InputChar(c));
        }
        app.reduce(Action::FocusNext);
        assert_eq!(app.state.focus, Field::Song);
        for c in "Bo".chars() {
            app.reduce(Action::InputChar(c));
        }
        app.reduce(Action::Backspace);

        assert_eq!(app.state.artist_input, "Queen");
        assert_eq!(app.state.song_input, "B");

        app.reduce(Action::ClearInput);
        assert!(app.state.song_input.is_empty());
    }

    #[test]
    fn stale_lookup_events_are_ignored() {
        let mut app = app();
        let old = app.state.begin_lookup();
        let current = app.state.begin_lookup();

        app.handle_lookup(LookupEvent::Found { id: old, result: found() });
        assert!(app.state.result.is_none());

        app.handle_lookup(LookupEvent::Attempt {
            id: current,
            provider: "lyrics.ovh".into(),
        });
        assert_eq!(
            app.state.lookup,
            LookupStatus::Searching {
                provider: Some("lyrics.ovh".into())
            }
        );

        app.handle_lookup(LookupEvent::Found { id: current, result: found() });
        assert_eq!(app.state.lookup, LookupStatus::Found);
        assert_eq!(app.state.result, Some(found()));
    }

    #[test]
    fn not_found_keeps_result_empty() {
        let mut app = app();
        let id = app.state.begin_lookup();
        app.handle_lookup(LookupEvent::NotFound { id });
        assert_eq!(app.state.lookup, LookupStatus::NotFound);
        assert!(app.state.result.is_none());
    }

    #[tokio::test]
    async fn empty_form_is_rejected_before_lookup() {
        let mut app = app();
        let (tx, _rx) = mpsc::channel(8);
        app.handle_action(Action::StartSearch, &tx);

        assert_eq!(app.state.lookup, LookupStatus::Idle);
        assert_eq!(app.state.lookup_id, 0);
        assert_eq!(app.state.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[tokio::test]
    async fn lookup_reports_not_found_over_channel() {
        let mut app = app();
        app.state.artist_input = "Nobody".into();
        app.state.song_input = "Nothing".into();
        let (tx, mut rx) = mpsc::channel(8);
        app.handle_action(Action::StartSearch, &tx);
        assert!(app.state.is_searching());

        loop {
            match rx.recv().await {
                Some(Event::Lookup(le)) => {
                    app.handle_lookup(le);
                    break;
                }
                Some(_) => continue,
                None => panic!("lookup task dropped the channel"),
            }
        }
        assert_eq!(app.state.lookup, LookupStatus::NotFound);
    }

    #[test]
    fn save_writes_into_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.paths.export_dir = dir.path().to_path_buf();
        let mut app = App::with_resolver(cfg, Resolver::new(Vec::new()));

        app.save_lyrics();
        assert_eq!(app.state.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));

        app.state.result = Some(found());
        app.save_lyrics();
        assert_eq!(app.state.toast.as_ref().map(|t| t.kind), Some(ToastKind::Success));
        let saved = std::fs::read_to_string(dir.path().join("Artist_Song_lyrics.txt")).unwrap();
        assert_eq!(saved, "Song - Artist\n\none\ntwo");

        app.save_lyrics();
        let toast = app.state.toast.as_ref().unwrap();
        assert!(toast.message.ends_with("Artist_Song_lyrics (1).txt"), "{}", toast.message);
    }
}

use crate::lyrics::{LyricsResult, Query};

/// Which input field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Artist,
    Song,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Artist => Field::Song,
            Field::Song => Field::Artist,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Artist => "Artist",
            Field::Song => "Song",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupStatus {
    #[default]
    Idle,
    /// `provider` is the one currently being tried.
    Searching { provider: Option<String> },
    Found,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(4)
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    // Search form
    pub artist_input: String,
    pub song_input: String,
    pub focus: Field,

    // Lookup
    pub lookup: LookupStatus,
    /// Id of the most recent lookup; events from older ones are dropped.
    pub lookup_id: u64,
    pub result: Option<LyricsResult>,

    // Lyrics pane
    pub scroll: usize,
    /// Lyrics pane height from the last draw.
    pub viewport_height: usize,
    /// Rows the lyrics take once wrapped to the pane width, from the last draw.
    pub lyrics_rows: usize,

    pub show_help: bool,
    pub toast: Option<Toast>,
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            tick: 0,
            artist_input: String::new(),
            song_input: String::new(),
            focus: Field::default(),
            lookup: LookupStatus::default(),
            lookup_id: 0,
            result: None,
            scroll: 0,
            viewport_height: 0,
            lyrics_rows: 0,
            show_help: false,
            toast: None,
            status: String::new(),
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Artist => &mut self.artist_input,
            Field::Song => &mut self.song_input,
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.lookup, LookupStatus::Searching { .. })
    }

    /// The query typed into the form, or why it can't be searched yet.
    pub fn query(&self) -> Result<Query, &'static str> {
        let artist = self.artist_input.trim();
        let song = self.song_input.trim();
        if artist.is_empty() || song.is_empty() {
            return Err("Please enter both artist name and song title");
        }
        Ok(Query::new(artist, song))
    }

    /// Start a new lookup, clearing the previous result.
    pub fn begin_lookup(&mut self) -> u64 {
        self.lookup_id += 1;
        self.lookup = LookupStatus::Searching { provider: None };
        self.result = None;
        self.scroll = 0;
        self.lyrics_rows = 0;
        self.lookup_id
    }

    pub fn lyrics_line_count(&self) -> usize {
        self.result
            .as_ref()
            .map(|r| r.lyrics.lines().count())
            .unwrap_or(0)
    }

    /// Wrapping only ever adds rows, so the unwrapped count is a floor until
    /// the pane has been drawn.
    pub fn max_scroll(&self) -> usize {
        self.lyrics_rows
            .max(self.lyrics_line_count())
            .saturating_sub(self.viewport_height.max(1))
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let next = if delta.is_negative() {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.scroll = next.min(self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(lines: usize) -> LyricsResult {
        LyricsResult {
            title: "T".into(),
            artist: "A".into(),
            lyrics: (0..lines).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n"),
            source: "test".into(),
        }
    }

    #[test]
    fn test_query_requires_both_fields() {
        let mut state = AppState::new();
        state.artist_input = "  Queen ".into();
        assert!(state.query().is_err());

        state.song_input = "   ".into();
        assert!(state.query().is_err());

        state.song_input = " Bohemian Rhapsody".into();
        assert_eq!(state.query().unwrap(), Query::new("Queen", "Bohemian Rhapsody"));
    }

    #[test]
    fn test_begin_lookup_resets_result() {
        let mut state = AppState::new();
        state.result = Some(found(3));
        state.scroll = 2;

        let first = state.begin_lookup();
        let second = state.begin_lookup();
        assert!(second > first);
        assert!(state.result.is_none());
        assert_eq!(state.scroll, 0);
        assert!(state.is_searching());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = AppState::new();
        state.result = Some(found(30));
        state.viewport_height = 10;

        state.scroll_by(-5);
        assert_eq!(state.scroll, 0);
        state.scroll_by(15);
        assert_eq!(state.scroll, 15);
        state.scroll_by(100);
        assert_eq!(state.scroll, 20);
    }

    #[test]
    fn test_wrapped_rows_extend_scroll() {
        let mut state = AppState::new();
        state.result = Some(found(5));
        state.viewport_height = 4;
        assert_eq!(state.max_scroll(), 1);

        state.lyrics_rows = 12;
        state.scroll_by(100);
        assert_eq!(state.scroll, 8);

        state.begin_lookup();
        assert_eq!(state.lyrics_rows, 0);
    }

    #[test]
    fn test_field_cycles() {
        assert_eq!(Field::Artist.next(), Field::Song);
        assert_eq!(Field::Song.next(), Field::Artist);
    }
}

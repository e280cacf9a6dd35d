use crate::lyrics::LyricsResult;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Lookup(LookupEvent),
    /// Spinner frame while a lookup runs.
    Tick,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

/// Progress of one lookup, tagged with the id it was started under.
#[derive(Debug, Clone)]
pub enum LookupEvent {
    Attempt { id: u64, provider: String },
    Found { id: u64, result: LyricsResult },
    NotFound { id: u64 },
}

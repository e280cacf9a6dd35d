#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    InputChar(char),
    Backspace,
    ClearInput,
    StartSearch,
    SaveLyrics,

    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoTop,
    GoBottom,

    ToggleHelp,
    Resize,
}

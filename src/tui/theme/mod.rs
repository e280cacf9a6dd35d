//! Colors, borders and glyphs shared by every widget

pub mod icons;
pub mod palette;

use std::sync::OnceLock;

pub use icons::Icons;
pub use palette::Palette;
use ratatui::symbols::border;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
    border: border::Set<'static>,
}

impl Theme {
    pub fn new(nerd_font: bool) -> Self {
        Self {
            palette: Palette::GREEN,
            icons: if nerd_font { Icons::nerd() } else { Icons::plain() },
            border: if nerd_font { border::ROUNDED } else { border::PLAIN },
        }
    }

    pub fn border_set(&self) -> border::Set<'static> {
        self.border
    }
}

/// Fix the theme for this session. Only the first call has an effect.
pub fn init(nerd_font: bool) {
    let _ = THEME.set(Theme::new(nerd_font));
}

/// The session theme; Nerd Font glyphs if `init` was never called.
pub fn get_theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::new(true))
}

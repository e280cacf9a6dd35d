//! Color palette - dark background with a green accent

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
}

impl Palette {
    pub const GREEN: Self = Self {
        bg_primary: Color::Rgb(18, 18, 18),      // #121212 near black
        fg_primary: Color::Rgb(224, 224, 224),   // #e0e0e0 off white
        fg_secondary: Color::Rgb(136, 136, 136), // #888888 medium gray
        accent: Color::Rgb(29, 185, 84),         // #1db954 green
        border: Color::Rgb(64, 64, 64),          // #404040 dark gray
        success: Color::Rgb(30, 215, 96),        // #1ed760 light green
        error: Color::Rgb(255, 107, 107),        // #ff6b6b soft red
        info: Color::Rgb(93, 173, 226),          // #5dade2 soft blue
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::GREEN
    }
}

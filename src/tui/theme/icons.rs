//! Glyph sets for the lyrics UI
//!
//! The Nerd Font set needs a patched font (https://www.nerdfonts.com);
//! the plain set only uses characters every terminal font has.

#[derive(Debug, Clone)]
pub struct Icons {
    pub help: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub music: &'static str,
    pub artist: &'static str,
    pub lyrics: &'static str,
    pub download: &'static str,
    pub bullet: &'static str,
    /// Frames cycled while a lookup is in flight.
    pub spinner: &'static [&'static str],
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            help: "\u{f059}",     // nf-fa-question_circle
            success: "\u{f00c}",  // nf-fa-check
            error: "\u{f00d}",    // nf-fa-times
            info: "\u{f05a}",     // nf-fa-info_circle
            music: "\u{f001}",    // nf-fa-music
            artist: "\u{f007}",   // nf-fa-user
            lyrics: "\u{f15c}",   // nf-fa-file_text_o
            download: "\u{f019}", // nf-fa-download
            bullet: "•",
            spinner: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"],
        }
    }

    pub const fn plain() -> Self {
        Self {
            help: "?",
            success: "+",
            error: "x",
            info: "i",
            music: "#",
            artist: "@",
            lyrics: "=",
            download: "v",
            bullet: "-",
            spinner: &["|", "/", "-", "\\"],
        }
    }

    pub fn spinner_frame(&self, tick: u64) -> &'static str {
        self.spinner[(tick % self.spinner.len() as u64) as usize]
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        let icons = Icons::plain();
        assert_eq!(icons.spinner_frame(0), "|");
        assert_eq!(icons.spinner_frame(3), "\\");
        assert_eq!(icons.spinner_frame(4), "|");
        assert_eq!(Icons::nerd().spinner_frame(9), "⠙");
    }

    #[test]
    fn test_plain_set_is_ascii() {
        let icons = Icons::plain();
        for glyph in [
            icons.help,
            icons.success,
            icons.error,
            icons.info,
            icons.music,
            icons.artist,
            icons.lyrics,
            icons.download,
            icons.bullet,
        ]
        .into_iter()
        .chain(icons.spinner.iter().copied())
        {
            assert!(glyph.is_ascii(), "{glyph:?}");
        }
    }
}

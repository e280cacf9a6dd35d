//! Synced (LRC) lyrics cleanup
//!
//! Synced lyrics carry a timestamp marker per line:
//! [mm:ss.xx] Lyrics line here
//!
//! Example:
//! [00:12.34] Hello world
//! [00:15.00] Another line
//!
//! For display and export only the text matters, so markers are dropped.

/// Strip the leading `[...]` markers from every line.
///
/// A line containing `]` keeps only what follows its last `]`, trimmed. Lines
/// without `]` pass through unchanged.
pub fn strip_timestamps(content: &str) -> String {
    content
        .split('\n')
        .map(strip_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_line(line: &str) -> &str {
    match line.rfind(']') {
        Some(end) => line[end + 1..].trim(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_timestamps() {
        assert_eq!(
            strip_timestamps("[00:01.23]Hello\n[00:02.00]World\nPlain line"),
            "Hello\nWorld\nPlain line"
        );
    }

    #[test]
    fn test_strip_keeps_text_after_last_bracket() {
        assert_eq!(strip_line("[00:12.34][00:15.00]  Repeated  "), "Repeated");
        assert_eq!(strip_line("[ti:Test Song]"), "");
        assert_eq!(strip_line("  untouched  "), "  untouched  ");
    }

    #[test]
    fn test_strip_preserves_line_count() {
        let lrc = "[00:01.00]One\n\n[00:03.00]\n[00:04.00]Four";
        let stripped = strip_timestamps(lrc);
        assert_eq!(stripped, "One\n\n\nFour");
        assert_eq!(stripped.split('\n').count(), lrc.split('\n').count());
    }
}

use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::lyrics::LyricsResult;

/// Plain-text export: `"{title} - {artist}\n\n{lyrics}"`.
pub fn export_text(result: &LyricsResult) -> String {
    format!("{} - {}\n\n{}", result.title, result.artist, result.lyrics)
}

/// File name for an export, e.g. `Queen_Bohemian Rhapsody_lyrics.txt`.
pub fn export_file_name(result: &LyricsResult) -> String {
    format!(
        "{}_{}_lyrics.txt",
        sanitize(&result.artist),
        sanitize(&result.title)
    )
}

/// Write the export into `dir`, creating it if needed.
///
/// Existing files are never replaced: a taken name gets a ` (1)`, ` (2)`, ...
/// suffix before the extension.
pub fn save(result: &LyricsResult, dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    let name = export_file_name(result);
    let stem = name.strip_suffix(".txt").unwrap_or(&name);

    for n in 0..MAX_SUFFIX {
        let path = if n == 0 {
            dir.join(&name)
        } else {
            dir.join(format!("{stem} ({n}).txt"))
        };
        match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(export_text(result).as_bytes())
                    .with_context(|| format!("write {}", path.display()))?;
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e).with_context(|| format!("create {}", path.display())),
        }
    }
    anyhow::bail!("too many saved copies of {name} in {}", dir.display())
}

const MAX_SUFFIX: u32 = 1000;

/// Write the export to an exact path.
pub fn save_to(result: &LyricsResult, path: &Path) -> anyhow::Result<()> {
    fs::write(path, export_text(result)).with_context(|| format!("write {}", path.display()))
}

// Characters that are invalid in file names on at least one common platform.
fn sanitize(part: &str) -> String {
    let cleaned: String = part
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "unknown".to_string()
    } else {
        cleaned
    }
}

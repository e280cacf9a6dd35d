//! Lyrics lookup across several public lyrics services
//!
//! This module provides:
//! - One client per lyrics service, each behind the [`provider::LyricsProvider`] trait
//! - A [`Resolver`] that tries the providers in order and keeps the first hit
//! - Timestamp stripping for synced (LRC) lyrics
//! - The normalized result shared by every provider

pub mod fly;
pub mod http;
pub mod lrclib;
pub mod ninjas;
pub mod ovh;
pub mod parser;
pub mod provider;
pub mod resolver;

pub use provider::{Miss, ProviderKind};
pub use resolver::Resolver;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub artist: String,
    pub song: String,
}

impl Query {
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            song: song.into(),
        }
    }
}

/// Lyrics found by one of the providers, normalized to a common shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsResult {
    pub title: String,
    pub artist: String,
    pub lyrics: String,
    /// Name of the provider that answered.
    pub source: String,
}

impl LyricsResult {
    /// Assemble a result from the fields a provider returned.
    ///
    /// A field is blank when it is missing or only whitespace. Blank
    /// title/artist fall back to the query; blank lyrics are a miss, never an
    /// empty success.
    pub(crate) fn build(
        source: &str,
        query: &Query,
        title: Option<String>,
        artist: Option<String>,
        lyrics: Option<String>,
    ) -> Result<Self, Miss> {
        let lyrics = non_blank(lyrics).ok_or(Miss::Empty)?;
        Ok(Self {
            title: non_blank(title).unwrap_or_else(|| query.song.clone()),
            artist: non_blank(artist).unwrap_or_else(|| query.artist.clone()),
            lyrics,
            source: source.to_string(),
        })
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

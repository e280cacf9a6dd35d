//! LRCLIB API client
//!
//! LRCLIB is a free lyrics API that provides plain and synchronized (LRC
//! format) lyrics.
//! API Documentation: https://lrclib.net/docs

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::http;
use super::parser;
use super::provider::{LyricsProvider, Miss};
use super::{LyricsResult, Query, non_blank};

/// LRCLIB API response
#[derive(Debug, Deserialize, Clone)]
pub struct LrclibResponse {
    #[serde(rename = "trackName")]
    pub track_name: Option<String>,
    #[serde(rename = "artistName")]
    pub artist_name: Option<String>,
    #[serde(rename = "plainLyrics")]
    pub plain_lyrics: Option<String>,
    #[serde(rename = "syncedLyrics")]
    pub synced_lyrics: Option<String>,
}

/// LRCLIB API client
#[derive(Debug, Clone)]
pub struct LrclibClient {
    client: reqwest::Client,
    base_url: String,
}

impl LrclibClient {
    pub const NAME: &'static str = "lrclib.net";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
    const DEFAULT_BASE_URL: &'static str = "https://lrclib.net/api";

    /// Create a new LRCLIB client
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: http::build_client(timeout, false)?,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Exact-match endpoint
    fn url(&self, query: &Query) -> String {
        format!(
            "{}/get?artist_name={}&track_name={}",
            self.base_url,
            http::encode(&query.artist),
            http::encode(&query.song)
        )
    }

    /// Plain lyrics win; synced lyrics are used only without them, and lose
    /// their timestamps on the way.
    pub fn normalize(raw: LrclibResponse, query: &Query) -> Result<LyricsResult, Miss> {
        let lyrics = non_blank(raw.plain_lyrics)
            .or_else(|| non_blank(raw.synced_lyrics).map(|synced| parser::strip_timestamps(&synced)));
        LyricsResult::build(Self::NAME, query, raw.track_name, raw.artist_name, lyrics)
    }
}

#[async_trait]
impl LyricsProvider for LrclibClient {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn lookup(&self, query: &Query) -> Result<LyricsResult, Miss> {
        let raw: LrclibResponse = http::get_json(self.client.get(self.url(query))).await?;
        Self::normalize(raw, query)
    }
}

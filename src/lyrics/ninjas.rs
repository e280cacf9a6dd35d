//! API Ninjas lyrics client
//!
//! Query-parameter lookup returning a list of matches:
//! `GET /v1/lyrics?title={song}&artist={artist}`. Only the first entry is used.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::http;
use super::provider::{LyricsProvider, Miss};
use super::{LyricsResult, Query};

/// One entry of the API Ninjas response list
#[derive(Debug, Deserialize, Clone)]
pub struct NinjasEntry {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub lyrics: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NinjasClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NinjasClient {
    pub const NAME: &'static str = "api-ninjas.com";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
    const DEFAULT_BASE_URL: &'static str = "https://api.api-ninjas.com";

    pub fn new(timeout: Duration, api_key: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: http::build_client(timeout, false)?,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key,
        })
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, query: &Query) -> String {
        format!(
            "{}/v1/lyrics?title={}&artist={}",
            self.base_url,
            http::encode(&query.song),
            http::encode(&query.artist)
        )
    }

    pub fn normalize(raw: Vec<NinjasEntry>, query: &Query) -> Result<LyricsResult, Miss> {
        let first = raw.into_iter().next().ok_or(Miss::Empty)?;
        LyricsResult::build(Self::NAME, query, first.title, first.artist, first.lyrics)
    }
}

#[async_trait]
impl LyricsProvider for NinjasClient {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn lookup(&self, query: &Query) -> Result<LyricsResult, Miss> {
        let mut request = self.client.get(self.url(query));
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }
        let raw: Vec<NinjasEntry> = http::get_json(request).await?;
        Self::normalize(raw, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> Query {
        Query::new("Queen", "Bohemian Rhapsody")
    }

    #[test]
    fn test_url_uses_query_parameters() {
        let client = NinjasClient::new(NinjasClient::DEFAULT_TIMEOUT, None)
            .unwrap()
            .with_base_url("http://localhost:9");
        assert_eq!(
            client.url(&query()),
            "http://localhost:9/v1/lyrics?title=Bohemian%20Rhapsody&artist=Queen"
        );
    }

    #[test]
    fn test_normalize_takes_first_entry() {
        let raw: Vec<NinjasEntry> = http::parse_body(
            r#"[
                {"title": "Bohemian Rhapsody", "artist": "Queen", "lyrics": "Is this the real life?"},
                {"title": "Other", "artist": "Other", "lyrics": "nope"}
            ]"#,
        )
        .unwrap();
        let result = NinjasClient::normalize(raw, &query()).unwrap();
        assert_eq!(result.source, NinjasClient::NAME);
        assert_eq!(result.lyrics, "Is this the real life?");
        assert_eq!(result.artist, "Queen");
    }

    #[test]
    fn test_normalize_prefers_entry_fields_then_query() {
        let raw: Vec<NinjasEntry> =
            http::parse_body(r#"[{"title": "Bohemian Rhapsody (Remastered)", "lyrics": "Mama"}]"#)
                .unwrap();
        let result = NinjasClient::normalize(raw, &query()).unwrap();
        assert_eq!(result.title, "Bohemian Rhapsody (Remastered)");
        assert_eq!(result.artist, "Queen");
    }

    #[test]
    fn test_normalize_misses() {
        assert!(matches!(
            NinjasClient::normalize(Vec::new(), &query()),
            Err(Miss::Empty)
        ));

        let raw: Vec<NinjasEntry> = http::parse_body(r#"[{"title": "x", "lyrics": ""}]"#).unwrap();
        assert!(matches!(NinjasClient::normalize(raw, &query()), Err(Miss::Empty)));

        let raw: Result<Vec<NinjasEntry>, Miss> = http::parse_body(r#"{"error": "missing key"}"#);
        assert!(matches!(raw, Err(Miss::Malformed(_))));
    }
}

//! lyrics-api.fly.dev client
//!
//! Path-based lookup: `GET /api/lyrics/{artist}/{song}`.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::http;
use super::provider::{LyricsProvider, Miss};
use super::{LyricsResult, Query};

/// lyrics-api.fly.dev response
#[derive(Debug, Deserialize, Clone)]
pub struct FlyResponse {
    pub lyrics: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FlyClient {
    client: reqwest::Client,
    base_url: String,
}

impl FlyClient {
    pub const NAME: &'static str = "lyrics-api.fly.dev";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
    const DEFAULT_BASE_URL: &'static str = "https://lyrics-api.fly.dev";

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

    fn url(&self, query: &Query) -> String {
        format!(
            "{}/api/lyrics/{}/{}",
            self.base_url,
            http::encode(&query.artist),
            http::encode(&query.song)
        )
    }

    pub fn normalize(raw: FlyResponse, query: &Query) -> Result<LyricsResult, Miss> {
        LyricsResult::build(Self::NAME, query, raw.title, raw.artist, raw.lyrics)
    }
}

#[async_trait]
impl LyricsProvider for FlyClient {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn lookup(&self, query: &Query) -> Result<LyricsResult, Miss> {
        let raw: FlyResponse = http::get_json(self.client.get(self.url(query))).await?;
        Self::normalize(raw, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> Query {
        Query::new("Arijit Singh", "Tum Hi Ho")
    }

    #[test]
    fn test_url_encodes_path_segments() {
        let client = FlyClient::new(FlyClient::DEFAULT_TIMEOUT)
            .unwrap()
            .with_base_url("http://localhost:9");
        assert_eq!(
            client.url(&query()),
            "http://localhost:9/api/lyrics/Arijit%20Singh/Tum%20Hi%20Ho"
        );
    }

    #[test]
    fn test_normalize_success() {
        let raw: FlyResponse = http::parse_body(
            r#"{"lyrics": "Hum tere bin", "title": "Tum Hi Ho", "artist": "Arijit Singh"}"#,
        )
        .unwrap();
        let result = FlyClient::normalize(raw, &query()).unwrap();
        assert_eq!(result.source, FlyClient::NAME);
        assert_eq!(result.lyrics, "Hum tere bin");
        assert_eq!(result.title, "Tum Hi Ho");
    }

    #[test]
    fn test_normalize_fills_missing_fields_from_query() {
        let raw: FlyResponse = http::parse_body(r#"{"lyrics": "la la"}"#).unwrap();
        let result = FlyClient::normalize(raw, &Query::new("Someone", "Something")).unwrap();
        assert_eq!(result.title, "Something");
        assert_eq!(result.artist, "Someone");
    }

    #[test]
    fn test_normalize_empty_lyrics_is_miss() {
        let raw: FlyResponse = http::parse_body(r#"{"lyrics": "", "title": "x"}"#).unwrap();
        assert!(matches!(FlyClient::normalize(raw, &query()), Err(Miss::Empty)));

        let raw: FlyResponse = http::parse_body(r#"{"error": "not found"}"#).unwrap();
        assert!(matches!(FlyClient::normalize(raw, &query()), Err(Miss::Empty)));
    }
}

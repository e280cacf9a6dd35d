//! lyrics.ovh client
//!
//! Path-based lookup: `GET /v1/{artist}/{song}`. The service only returns the
//! lyrics text, so title and artist always come from the query.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::http;
use super::provider::{LyricsProvider, Miss};
use super::{LyricsResult, Query};

#[derive(Debug, Deserialize, Clone)]
pub struct OvhResponse {
    pub lyrics: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OvhClient {
    client: reqwest::Client,
    base_url: String,
}

impl OvhClient {
    pub const NAME: &'static str = "lyrics.ovh";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    const DEFAULT_BASE_URL: &'static str = "https://api.lyrics.ovh";

    /// `accept_invalid_certs` turns off certificate checking for this host only.
    pub fn new(timeout: Duration, accept_invalid_certs: bool) -> anyhow::Result<Self> {
        if accept_invalid_certs {
            tracing::warn!("certificate verification disabled for {}", Self::NAME);
        }
        Ok(Self {
            client: http::build_client(timeout, accept_invalid_certs)?,
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
            "{}/v1/{}/{}",
            self.base_url,
            http::encode(&query.artist),
            http::encode(&query.song)
        )
    }

    pub fn normalize(raw: OvhResponse, query: &Query) -> Result<LyricsResult, Miss> {
        LyricsResult::build(Self::NAME, query, None, None, raw.lyrics)
    }
}

#[async_trait]
impl LyricsProvider for OvhClient {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn lookup(&self, query: &Query) -> Result<LyricsResult, Miss> {
        let raw: OvhResponse = http::get_json(self.client.get(self.url(query))).await?;
        Self::normalize(raw, query)
    }
}

//! Ordered fallback across lyrics providers

use super::fly::FlyClient;
use super::lrclib::LrclibClient;
use super::ninjas::NinjasClient;
use super::ovh::OvhClient;
use super::provider::{LyricsProvider, ProviderKind, normalize_order};
use super::{LyricsResult, Query};
use crate::config::LyricsConfig;

/// Tries providers one after another and keeps the first hit.
///
/// Providers are awaited strictly in order; the chain is fixed when the
/// resolver is built and holds no state between lookups.
pub struct Resolver {
    providers: Vec<Box<dyn LyricsProvider>>,
}

impl Resolver {
    pub fn new(providers: Vec<Box<dyn LyricsProvider>>) -> Self {
        Self { providers }
    }

    /// Build the production chain in the configured order.
    pub fn from_config(cfg: &LyricsConfig) -> anyhow::Result<Self> {
        let timeout_override = cfg.timeout_override();

        let mut providers: Vec<Box<dyn LyricsProvider>> = Vec::new();
        for kind in normalize_order(&cfg.providers) {
            let provider: Box<dyn LyricsProvider> = match kind {
                ProviderKind::Fly => Box::new(FlyClient::new(
                    timeout_override.unwrap_or(FlyClient::DEFAULT_TIMEOUT),
                )?),
                ProviderKind::Ninjas => Box::new(NinjasClient::new(
                    timeout_override.unwrap_or(NinjasClient::DEFAULT_TIMEOUT),
                    cfg.api_ninjas_key.clone(),
                )?),
                ProviderKind::Lrclib => Box::new(LrclibClient::new(
                    timeout_override.unwrap_or(LrclibClient::DEFAULT_TIMEOUT),
                )?),
                ProviderKind::Ovh => Box::new(OvhClient::new(
                    timeout_override.unwrap_or(OvhClient::DEFAULT_TIMEOUT),
                    cfg.ovh_accept_invalid_certs,
                )?),
            };
            providers.push(provider);
        }

        Ok(Self::new(providers))
    }

    /// Provider names in the order they are tried.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub async fn resolve(&self, query: &Query) -> Option<LyricsResult> {
        self.resolve_with(query, |_| {}).await
    }

    /// Like [`Resolver::resolve`], calling `on_attempt` with each provider's
    /// name right before it is tried.
    pub async fn resolve_with<F>(&self, query: &Query, mut on_attempt: F) -> Option<LyricsResult>
    where
        F: FnMut(&str),
    {
        for provider in &self.providers {
            let name = provider.name();
            on_attempt(name);

            match provider.lookup(query).await {
                Ok(result) => {
                    tracing::info!(
                        provider = name,
                        artist = query.artist.as_str(),
                        song = query.song.as_str(),
                        "lyrics found"
                    );
                    return Some(result);
                }
                Err(miss) => {
                    tracing::debug!(provider = name, "provider miss: {miss}");
                }
            }
        }

        tracing::info!(
            artist = query.artist.as_str(),
            song = query.song.as_str(),
            "no provider had lyrics"
        );
        None
    }
}

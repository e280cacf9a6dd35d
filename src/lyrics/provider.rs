//! Provider trait and the ways a provider can come up empty.

use async_trait::async_trait;
use thiserror::Error;

use super::{LyricsResult, Query};

/// Why a provider had nothing for a query.
///
/// A miss is never fatal: the resolver logs it and moves on to the next
/// provider.
#[derive(Debug, Error)]
pub enum Miss {
    /// Connection failure, timeout, TLS failure.
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Well-formed response without any lyrics text.
    #[error("response has no lyrics")]
    Empty,
}

/// One external lyrics service.
///
/// Implement this trait to add a service to the chain, or to stand in for
/// one in tests.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Name reported as the result's `source`.
    fn name(&self) -> &str;

    /// Look the query up. Exactly one request per call, no retries.
    async fn lookup(&self, query: &Query) -> Result<LyricsResult, Miss>;
}

/// The built-in providers, addressable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Fly,
    Ninjas,
    Lrclib,
    Ovh,
}

impl ProviderKind {
    pub const DEFAULT_ORDER: [ProviderKind; 4] = [
        ProviderKind::Fly,
        ProviderKind::Ninjas,
        ProviderKind::Lrclib,
        ProviderKind::Ovh,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Fly => "fly",
            Self::Ninjas => "ninjas",
            Self::Lrclib => "lrclib",
            Self::Ovh => "ovh",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "fly" | "lyrics-api" | "lyrics-api.fly.dev" => Some(Self::Fly),
            "ninjas" | "api-ninjas" | "api-ninjas.com" => Some(Self::Ninjas),
            "lrclib" | "lrc-lib" | "lrclib.net" => Some(Self::Lrclib),
            "ovh" | "lyrics.ovh" => Some(Self::Ovh),
            _ => None,
        }
    }
}

/// Turn the configured provider keys into a chain.
///
/// Unknown keys are skipped and repeats keep their first position. An empty
/// result means the default chain.
pub fn normalize_order(keys: &[String]) -> Vec<ProviderKind> {
    let mut order = Vec::new();
    for key in keys {
        let Some(kind) = ProviderKind::from_key(key) else {
            tracing::warn!(key = key.as_str(), "ignoring unknown lyrics provider");
            continue;
        };
        if !order.contains(&kind) {
            order.push(kind);
        }
    }

    if order.is_empty() {
        ProviderKind::DEFAULT_ORDER.to_vec()
    } else {
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_key_aliases() {
        assert_eq!(ProviderKind::from_key("FLY"), Some(ProviderKind::Fly));
        assert_eq!(ProviderKind::from_key(" lyrics.ovh "), Some(ProviderKind::Ovh));
        assert_eq!(ProviderKind::from_key("lrc-lib"), Some(ProviderKind::Lrclib));
        assert_eq!(ProviderKind::from_key("genius"), None);
    }

    #[test]
    fn test_normalize_order() {
        assert_eq!(
            normalize_order(&keys(&["ovh", "bogus", "fly", "OVH"])),
            vec![ProviderKind::Ovh, ProviderKind::Fly]
        );
        assert_eq!(normalize_order(&[]), ProviderKind::DEFAULT_ORDER.to_vec());
        assert_eq!(
            normalize_order(&keys(&["nope"])),
            ProviderKind::DEFAULT_ORDER.to_vec()
        );
    }
}

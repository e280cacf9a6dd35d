//! HTTP plumbing shared by the provider clients

use anyhow::Context;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::provider::Miss;

const USER_AGENT: &str = concat!("lyrics-finder/", env!("CARGO_PKG_VERSION"));

/// Build the reqwest client for one provider.
pub fn build_client(timeout: Duration, accept_invalid_certs: bool) -> anyhow::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout);
    if accept_invalid_certs {
        builder = builder.danger_accept_invalid_certs(true);
    }
    builder.build().context("build http client")
}

/// Percent-encode one path segment or query value.
pub fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Send a GET and decode the JSON body.
///
/// Transport failures (timeouts included), non-2xx statuses and bodies that
/// don't match `T` all come back as a [`Miss`].
pub async fn get_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, Miss> {
    let response = request
        .send()
        .await
        .map_err(|e| Miss::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Miss::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Miss::Transport(e.to_string()))?;
    parse_body(&body)
}

/// Decode a response body, mapping decode errors to [`Miss::Malformed`].
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, Miss> {
    serde_json::from_str(body).map_err(|e| Miss::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode("AC/DC"), "AC%2FDC");
        assert_eq!(encode("Tum Hi Ho"), "Tum%20Hi%20Ho");
        assert_eq!(encode("Beyoncé"), "Beyonc%C3%A9");
    }

    #[test]
    fn test_parse_body_malformed() {
        let parsed: Result<Vec<String>, Miss> = parse_body("{not json");
        assert!(matches!(parsed, Err(Miss::Malformed(_))));

        let parsed: Result<Vec<String>, Miss> = parse_body(r#"{"lyrics": "x"}"#);
        assert!(matches!(parsed, Err(Miss::Malformed(_))));
    }
}

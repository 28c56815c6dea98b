// src/fetch/mod.rs

pub mod urls;

use crate::config::Config;
use crate::sensitive::Sensitive;
use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Why a fetch produced no payload.
///
/// URLs carried here are already redacted.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot build a request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("cannot set up the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("could not reach {url} ({reason}): {source}")]
    Transport {
        url: String,
        reason: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: StatusCode },

    #[error("{url} returned a body that is not JSON: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    fn transport(url: &str, err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else {
            "transport error"
        };
        // reqwest embeds the full URL, key included, in its Display output
        FetchError::Transport {
            url: url.to_string(),
            reason,
            source: err.without_url(),
        }
    }
}

/// What to ask the upstream API for.
#[derive(Debug, Clone)]
pub struct Request {
    pub route: String,
    pub credential: Sensitive<String>,
    /// Extra query parameters appended after `api_key`.
    pub params: Vec<(String, String)>,
}

impl Request {
    pub fn new(route: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            credential: Sensitive::new(credential.into()),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Full request target, credential in clear. Never log this directly.
    pub fn url(&self, config: &Config) -> Result<Url, url::ParseError> {
        let mut params: Vec<(&str, &str)> = Vec::with_capacity(self.params.len() + 1);
        params.push(("api_key", self.credential.expose().as_str()));
        params.extend(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        urls::build_url(&config.base_url, &config.api_version, &self.route, &params)
    }
}

/// Issue exactly one GET for `request` and parse the body as JSON.
///
/// A fresh client is built per call: no retries, no redirects followed, no
/// pooled connections carried between invocations. A 3xx is a status failure.
#[instrument(level = "debug", skip_all, fields(route = %request.route))]
pub async fn fetch(config: &Config, request: &Request) -> Result<Value, FetchError> {
    let url = request.url(config)?;
    let shown = urls::redact_url(&url);
    info!("fetching {}", shown);

    if config.accept_invalid_certs {
        warn!("TLS certificate verification is DISABLED for this request");
    }

    let client = Client::builder()
        .timeout(config.timeout)
        .redirect(Policy::none())
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()
        .map_err(|e| FetchError::Client(e.without_url()))?;

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::transport(&shown, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: shown, status });
    }

    let body = resp
        .bytes()
        .await
        .map_err(|e| FetchError::transport(&shown, e))?;
    debug!(bytes = body.len(), %status, "response received");

    serde_json::from_slice(&body).map_err(|source| FetchError::InvalidJson { url: shown, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{refused_addr, serve_once, serve_once_with, serve_silent};
    use std::time::Duration;

    fn local(base: &str) -> Config {
        Config::eia()
            .with_base_url(base)
            .with_timeout(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn returns_parsed_json_on_2xx() {
        let (base, server) = serve_once("200 OK", r#"{"response":{"data":[]}}"#).await;
        let req = Request::new("/petroleum/sum/", "KEY");

        let value = fetch(&local(&base), &req).await.unwrap();
        assert_eq!(value["response"]["data"], serde_json::json!([]));

        let raw = server.await.unwrap();
        assert!(
            raw.starts_with("GET /v2/petroleum/sum?api_key=KEY HTTP/1.1"),
            "unexpected request line: {raw}"
        );
    }

    #[tokio::test]
    async fn extra_params_follow_the_key() {
        let (base, server) = serve_once("200 OK", r#"{"results":[]}"#).await;
        let cfg = Config::tmdb().with_base_url(base);
        let req = Request::new("search/movie", "k").with_param("query", "alien");

        fetch(&cfg, &req).await.unwrap();
        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /3/search/movie?api_key=k&query=alien HTTP/1.1"));
    }

    #[tokio::test]
    async fn non_2xx_is_a_status_failure() {
        let (base, _server) = serve_once("404 Not Found", r#"{"error":"nope"}"#).await;
        let req = Request::new("petroleum/sum", "s3cr3t");

        let err = fetch(&local(&base), &req).await.unwrap_err();
        match &err {
            FetchError::Status { status, .. } => assert_eq!(*status, StatusCode::NOT_FOUND),
            other => panic!("expected status failure, got {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(!msg.contains("s3cr3t"));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_failure() {
        let base = refused_addr();
        let req = Request::new("petroleum/sum", "s3cr3t");

        let err = fetch(&local(&base), &req).await.unwrap_err();
        assert!(
            matches!(err, FetchError::Transport { .. }),
            "expected transport failure, got {err:?}"
        );
        let msg = err.to_string();
        assert!(msg.starts_with("could not reach"));
        assert!(!msg.contains("s3cr3t"));
    }

    #[tokio::test]
    async fn redirects_are_not_followed() {
        let (base, server) = serve_once_with(
            "302 Found",
            &["Location: /elsewhere"],
            r#"{"response":{"data":[]}}"#,
        )
        .await;
        let req = Request::new("petroleum/sum", "s3cr3t");

        let err = fetch(&local(&base), &req).await.unwrap_err();
        match &err {
            FetchError::Status { status, .. } => assert_eq!(*status, StatusCode::FOUND),
            other => panic!("expected status failure, got {other:?}"),
        }
        assert!(!err.to_string().contains("s3cr3t"));

        // the only request the server saw was the original one
        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /v2/petroleum/sum?api_key=s3cr3t HTTP/1.1"));
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let base = serve_silent().await;
        let cfg = local(&base).with_timeout(Duration::from_secs(1));
        let req = Request::new("x", "s3cr3t");

        let err = fetch(&cfg, &req).await.unwrap_err();
        assert!(
            matches!(
                err,
                FetchError::Transport {
                    reason: "request timed out",
                    ..
                }
            ),
            "expected timeout, got {err:?}"
        );
        let msg = err.to_string();
        assert!(msg.contains("request timed out"));
        assert!(!msg.contains("s3cr3t"));
    }

    #[tokio::test]
    async fn non_json_body_is_rejected() {
        let (base, _server) = serve_once("200 OK", "<html>maintenance</html>").await;
        let req = Request::new("petroleum/sum", "KEY");

        let err = fetch(&local(&base), &req).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidJson { .. }));
    }

    #[test]
    fn request_debug_hides_the_key() {
        let req = Request::new("petroleum/sum", "s3cr3t");
        assert!(!format!("{req:?}").contains("s3cr3t"));
    }
}

//! SearXNG API client and response parsers
//!
//! The client issues exactly one GET per call and reports failure as
//! absence: transport errors, timeouts, and empty bodies become `None`,
//! logged to stderr. The parsers are total functions that degrade to an
//! empty or absent result on malformed input instead of raising; an
//! unreachable or misbehaving instance must never crash the workflow.

use crate::error::{WorkflowError, WorkflowResult};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::form_urlencoded;

/// Client for one SearXNG instance
#[derive(Debug, Clone)]
pub struct SearxngClient {
    base_url: String,
    http: reqwest::Client,
}

impl SearxngClient {
    /// Build a client for `base_url` with the given timeout. The timeout is
    /// expressed upstream in whole seconds, rounded up from milliseconds
    /// (4500ms becomes a 5s limit).
    pub fn new(base_url: &str, timeout_ms: u64) -> WorkflowResult<Self> {
        if base_url.is_empty() {
            return Err(WorkflowError::ConfigError(
                "SearXNG base URL is required".to_string(),
            ));
        }

        let timeout_secs = timeout_ms.div_ceil(1000).max(1);
        let http = reqwest::Client::builder()
            .user_agent(concat!("searxfred/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/autocompleter?q={query}`
    pub fn autocomplete_url(&self, query: &str) -> String {
        self.endpoint_url("autocompleter", &[("q", query)])
    }

    /// `{base}/search?q={query}&format=json`
    pub fn search_url(&self, query: &str) -> String {
        self.endpoint_url("search", &[("q", query), ("format", "json")])
    }

    /// `{base}/search?q={query}`: the web interface, used as the action
    /// target whenever the workflow cannot or should not act itself
    pub fn browser_url(&self, query: &str) -> String {
        self.endpoint_url("search", &[("q", query)])
    }

    fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            serializer.append_pair(key, value);
        }
        format!("{}/{}?{}", self.base_url, path, serializer.finish())
    }

    /// One GET, following standard redirects. Returns the body text
    /// whenever one is readable, regardless of HTTP status: upstream error
    /// payloads ride on 4xx/5xx responses and the parsers classify them.
    /// `None` on transport failure, timeout, or an empty body. Never
    /// propagates.
    pub async fn get_text(&self, url: &str) -> Option<String> {
        match self.http.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    log::warn!("GET {url} returned HTTP {status}");
                }
                match response.text().await {
                    Ok(body) if !body.is_empty() => Some(body),
                    Ok(_) => None,
                    Err(err) => {
                        log::warn!("failed reading response body from {url}: {err}");
                        None
                    }
                }
            }
            Err(err) => {
                log::warn!("GET {url} failed: {err}");
                None
            }
        }
    }

    /// Fetch the raw autocomplete response body for `query`
    pub async fn fetch_autocomplete(&self, query: &str) -> Option<String> {
        self.get_text(&self.autocomplete_url(query)).await
    }

    /// Fetch the raw JSON search response body for `query`
    pub async fn fetch_search(&self, query: &str) -> Option<String> {
        self.get_text(&self.search_url(query)).await
    }
}

/// Full search response. Fields are inspected by the orchestrator, not
/// validated here; a missing `results` array deserializes as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RawResult>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SearchResponse {
    /// The upstream error text, if the API reported one. `error` wins over
    /// `message`; empty strings count as absent.
    pub fn upstream_error(&self) -> Option<&str> {
        self.error
            .as_deref()
            .filter(|msg| !msg.is_empty())
            .or_else(|| self.message.as_deref().filter(|msg| !msg.is_empty()))
    }
}

/// One search result as SearXNG returns it. Order within the response is
/// relevance order and is preserved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Parse an autocomplete response body, expected shape
/// `[echoedQuery, [suggestion, ...]]`.
///
/// Absent text, invalid JSON, short arrays, and a non-array second element
/// all mean "no suggestions", never an error. Non-string entries in the
/// suggestion array are skipped.
pub fn parse_autocomplete_response(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    let Ok(value) = serde_json::from_str::<Value>(text) else {
        return Vec::new();
    };
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };
    if entries.len() < 2 {
        return Vec::new();
    }
    match entries[1].as_array() {
        Some(suggestions) => suggestions
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect(),
        None => Vec::new(),
    }
}

/// Parse a search response body. `None` when the text is absent or not
/// valid JSON, indistinguishable from "no data".
pub fn parse_search_response(text: Option<&str>) -> Option<SearchResponse> {
    serde_json::from_str(text?).ok()
}

//! Workflow configuration read from Alfred's environment variables

use std::env;

/// Default request timeout when `timeout_ms` is unset or unusable
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
/// Hard ceiling on the request timeout, below Alfred's own script timeout
pub const MAX_TIMEOUT_MS: u64 = 30000;

/// Environment variable holding the SearXNG instance URL
pub const ENV_SEARXNG_URL: &str = "searxng_url";
/// Environment variable holding the request timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "timeout_ms";

/// Workflow configuration, resolved once per invocation.
///
/// Alfred exports workflow variables as lowercase environment variables, so
/// the keys here are `searxng_url` and `timeout_ms`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the SearXNG instance; `None` means not configured.
    /// A missing URL is a recognized condition the orchestrator renders as
    /// an item, never an error that propagates.
    pub base_url: Option<String>,
    /// Request timeout in milliseconds, always within `[1, MAX_TIMEOUT_MS]`
    pub timeout_ms: u64,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let base_url = env::var(ENV_SEARXNG_URL)
            .ok()
            .map(|raw| raw.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let timeout_ms = parse_timeout(
            &env::var(ENV_TIMEOUT_MS).unwrap_or_default(),
            DEFAULT_TIMEOUT_MS,
            MAX_TIMEOUT_MS,
        );

        Self {
            base_url,
            timeout_ms,
        }
    }

    /// Build a config directly, clamping the timeout the same way
    /// `from_env` does. Used by tests and embedders.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            base_url: if base_url.is_empty() {
                None
            } else {
                Some(base_url)
            },
            timeout_ms: timeout_ms.clamp(1, MAX_TIMEOUT_MS),
        }
    }
}

/// Parse a timeout value from its raw environment string.
///
/// Mirrors `parseInt` semantics: the leading integer portion of the string
/// is taken (`"5.5"` → 5, `"10abc"` → 10). Unparsable or non-positive input
/// yields `default_ms`; values above `max_ms` clamp to `max_ms`. Pure and
/// infallible: configuration mistakes must never break the workflow.
pub fn parse_timeout(raw: &str, default_ms: u64, max_ms: u64) -> u64 {
    match parse_leading_int(raw) {
        Some(parsed) if parsed > 0 => (parsed as u64).min(max_ms),
        _ => default_ms,
    }
}

/// Parse the leading integer portion of a string: optional sign followed by
/// digits, leading whitespace skipped. `None` when no digits lead.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Saturate rather than fail on absurdly long digit runs.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

//! Orchestrator: one query-to-items pass
//!
//! Single pass, no retries. Every failure condition terminates early with
//! a formatted item list; the caller always gets something renderable.

use crate::config::Config;
use crate::format::{browser_fallback_item, error_item, search_result_item, suggestion_item};
use crate::searxng::{parse_autocomplete_response, parse_search_response, SearxngClient};
use crate::types::{Cache, Item, ScriptFilterOutput, SearchQuery};

/// How many results are shown; upstream routinely returns more
const MAX_SHOWN_RESULTS: usize = 10;
/// Reuse hint handed to Alfred on the success path
const CACHE_SECONDS: u32 = 60;

/// Which endpoint an invocation targets. As-you-type invocations use
/// `Suggest`, committed queries use `Search`; the selection is made by the
/// calling workflow step, never guessed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Suggest,
    Search,
}

/// Run one invocation: resolve guards, fetch, parse, format.
pub async fn run(query: &SearchQuery, mode: Mode, config: &Config) -> ScriptFilterOutput {
    let Some(base_url) = config.base_url.as_deref() else {
        return ScriptFilterOutput::uncached(vec![error_item(
            "SearXNG URL not configured",
            "Set searxng_url in workflow settings",
            None,
        )]);
    };

    let text = query.text.trim();
    if text.is_empty() {
        return ScriptFilterOutput::uncached(vec![Item::new(
            "Search SearXNG...",
            format!("Type to search {base_url}"),
            "",
        )]);
    }

    let client = match SearxngClient::new(base_url, config.timeout_ms) {
        Ok(client) => client,
        Err(err) => {
            log::error!("failed to build HTTP client: {err}");
            return ScriptFilterOutput::uncached(vec![error_item(
                "SearXNG client unavailable",
                &err.to_string(),
                None,
            )]);
        }
    };
    let fallback_url = client.browser_url(text);

    let items = match mode {
        Mode::Suggest => {
            let Some(body) = client.fetch_autocomplete(text).await else {
                return network_failure(text, &fallback_url);
            };
            let suggestions = parse_autocomplete_response(Some(&body));
            log::debug!("{} suggestions for {text:?}", suggestions.len());
            suggestions
                .iter()
                .map(|suggestion| {
                    suggestion_item(suggestion, query.category.as_deref(), query.time_range)
                })
                .collect()
        }
        Mode::Search => {
            let body = client.fetch_search(text).await;
            // Malformed JSON is indistinguishable from no data here.
            let Some(response) = parse_search_response(body.as_deref()) else {
                return network_failure(text, &fallback_url);
            };
            if let Some(message) = response.upstream_error() {
                return ScriptFilterOutput::uncached(vec![error_item(
                    "SearXNG error",
                    message,
                    None,
                )]);
            }
            log::debug!("{} results for {text:?}", response.results.len());
            response
                .results
                .iter()
                .take(MAX_SHOWN_RESULTS)
                .map(|result| search_result_item(result, &fallback_url))
                .collect()
        }
    };

    success(items, text, &fallback_url)
}

/// Both network-failure rows carry the browser URL so the user can still
/// complete the search by hand.
fn network_failure(query: &str, fallback_url: &str) -> ScriptFilterOutput {
    ScriptFilterOutput::uncached(vec![
        error_item(
            "Cannot reach SearXNG",
            "Check your connection or try in browser",
            Some(fallback_url),
        ),
        Item::new(
            format!("Search \"{query}\" in browser"),
            "Open SearXNG web interface",
            fallback_url,
        ),
    ])
}

fn success(mut items: Vec<Item>, query: &str, fallback_url: &str) -> ScriptFilterOutput {
    if items.is_empty() {
        items.push(error_item(
            &format!("No results for \"{query}\""),
            "Try different search terms",
            None,
        ));
    }
    items.push(browser_fallback_item(query, fallback_url));

    ScriptFilterOutput {
        items,
        cache: Some(Cache {
            seconds: CACHE_SECONDS,
            loosereload: true,
        }),
    }
}

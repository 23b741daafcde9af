//! End-to-end orchestrator tests against a mock SearXNG instance
//!
//! Each test stands up a wiremock server playing the part of the instance
//! and asserts on the item list the workflow would hand to Alfred.

use searxfred::{run, Config, Mode, SearchQuery, TimeRange};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config::new(server.uri(), 5000)
}

fn result(title: &str, url: &str, content: &str) -> serde_json::Value {
    json!({ "title": title, "url": url, "content": content })
}

async fn mount_search(server: &MockServer, query: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", query))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_formats_results_and_appends_fallback() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "rust",
        json!({ "results": [
            result("Rust Programming Language", "https://www.rust-lang.org/", "A systems language."),
            result("Rust (video game)", "https://rust.facepunch.com/", "Survival game."),
        ]}),
    )
    .await;

    let output = run(&SearchQuery::new("rust"), Mode::Search, &config_for(&server)).await;

    assert_eq!(output.items.len(), 3);

    let first = &output.items[0];
    assert_eq!(first.title, "Rust Programming Language");
    assert_eq!(first.subtitle, "rust-lang.org · A systems language.");
    assert_eq!(first.arg, "https://www.rust-lang.org/");
    assert_eq!(first.quicklookurl.as_deref(), Some("https://www.rust-lang.org/"));
    assert!(first.valid);

    let fallback = output.items.last().unwrap();
    assert_eq!(fallback.title, "Search \"rust\" in browser");
    assert_eq!(fallback.arg, format!("{}/search?q=rust", server.uri()));
    assert!(fallback.valid);

    let cache = output.cache.expect("success output carries a cache hint");
    assert_eq!(cache.seconds, 60);
    assert!(cache.loosereload);
}

#[tokio::test]
async fn search_truncates_to_ten_results() {
    let server = MockServer::start().await;
    let results: Vec<_> = (0..25)
        .map(|i| result(&format!("Result {i}"), &format!("https://example.com/{i}"), ""))
        .collect();
    mount_search(&server, "many", json!({ "results": results })).await;

    let output = run(&SearchQuery::new("many"), Mode::Search, &config_for(&server)).await;

    // 10 results plus the trailing browser item
    assert_eq!(output.items.len(), 11);
    assert_eq!(output.items[0].title, "Result 0");
    assert_eq!(output.items[9].title, "Result 9");
}

#[tokio::test]
async fn empty_results_inject_no_results_item() {
    let server = MockServer::start().await;
    mount_search(&server, "nothing", json!({ "results": [] })).await;

    let output = run(
        &SearchQuery::new("nothing"),
        Mode::Search,
        &config_for(&server),
    )
    .await;

    assert_eq!(output.items.len(), 2);
    let no_results = &output.items[0];
    assert_eq!(no_results.title, "No results for \"nothing\"");
    assert_eq!(no_results.subtitle, "Try different search terms");
    assert!(!no_results.valid);
    assert!(output.items[1].valid);
    assert_eq!(output.items[1].title, "Search \"nothing\" in browser");
}

#[tokio::test]
async fn upstream_error_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    mount_search(&server, "rust", json!({ "error": "rate limited" })).await;

    let output = run(&SearchQuery::new("rust"), Mode::Search, &config_for(&server)).await;

    assert_eq!(output.items.len(), 1);
    let item = &output.items[0];
    assert_eq!(item.title, "SearXNG error");
    assert_eq!(item.subtitle, "rate limited");
    assert!(!item.valid);
    assert!(output.cache.is_none());
}

#[tokio::test]
async fn upstream_message_is_surfaced_too() {
    let server = MockServer::start().await;
    mount_search(&server, "rust", json!({ "message": "search disabled" })).await;

    let output = run(&SearchQuery::new("rust"), Mode::Search, &config_for(&server)).await;

    assert_eq!(output.items.len(), 1);
    assert_eq!(output.items[0].subtitle, "search disabled");
}

#[tokio::test]
async fn malformed_body_degrades_like_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let output = run(&SearchQuery::new("rust"), Mode::Search, &config_for(&server)).await;

    assert_eq!(output.items.len(), 2);
    assert_eq!(output.items[0].title, "Cannot reach SearXNG");
    assert_eq!(output.items[0].arg, format!("{}/search?q=rust", server.uri()));
    assert!(output.items[0].valid);
}

#[tokio::test]
async fn http_500_with_empty_body_degrades_like_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = run(&SearchQuery::new("rust"), Mode::Search, &config_for(&server)).await;

    assert_eq!(output.items.len(), 2);
    assert_eq!(output.items[0].title, "Cannot reach SearXNG");
    assert!(output.cache.is_none());
}

#[tokio::test]
async fn http_error_page_degrades_like_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let output = run(&SearchQuery::new("rust"), Mode::Search, &config_for(&server)).await;

    assert_eq!(output.items.len(), 2);
    assert_eq!(output.items[0].title, "Cannot reach SearXNG");
}

#[tokio::test]
async fn rate_limit_error_body_is_surfaced_despite_status() {
    // SearXNG rate-limits with a 429 that still carries its JSON error.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "error": "rate limited" })))
        .mount(&server)
        .await;

    let output = run(&SearchQuery::new("rust"), Mode::Search, &config_for(&server)).await;

    assert_eq!(output.items.len(), 1);
    assert_eq!(output.items[0].title, "SearXNG error");
    assert_eq!(output.items[0].subtitle, "rate limited");
    assert!(!output.items[0].valid);
}

#[tokio::test]
async fn suggest_maps_suggestions_and_appends_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocompleter"))
        .and(query_param("q", "clim"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["clim", ["climate change", "climbing gear"]])),
        )
        .mount(&server)
        .await;

    let output = run(&SearchQuery::new("clim"), Mode::Suggest, &config_for(&server)).await;

    assert_eq!(output.items.len(), 3);
    assert_eq!(output.items[0].title, "climate change");
    assert_eq!(output.items[0].subtitle, "Search for this suggestion");
    assert_eq!(output.items[0].autocomplete.as_deref(), Some("climate change"));
    assert_eq!(output.items[1].title, "climbing gear");
    assert_eq!(output.items[2].title, "Search \"clim\" in browser");
    assert!(output.cache.is_some());
}

#[tokio::test]
async fn suggest_carries_bang_context_into_variables() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocompleter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["n", ["nasa"]])))
        .mount(&server)
        .await;

    let query = SearchQuery {
        text: "n".to_string(),
        category: Some("news".to_string()),
        time_range: Some(TimeRange::Month),
    };
    let output = run(&query, Mode::Suggest, &config_for(&server)).await;

    let suggestion = &output.items[0];
    assert_eq!(suggestion.subtitle, "Search news (past month) for this suggestion");
    let json = serde_json::to_string(suggestion).unwrap();
    assert!(json.contains("\"category\":\"news\""));
    assert!(json.contains("\"timeRange\":\"month\""));
}

#[tokio::test]
async fn suggest_with_empty_suggestions_still_offers_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocompleter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["zzz", []])))
        .mount(&server)
        .await;

    let output = run(&SearchQuery::new("zzz"), Mode::Suggest, &config_for(&server)).await;

    assert_eq!(output.items.len(), 2);
    assert_eq!(output.items[0].title, "No results for \"zzz\"");
    assert!(!output.items[0].valid);
    assert!(output.items[1].valid);
}

#[tokio::test]
async fn multi_word_queries_are_url_encoded_once() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "climate change",
        json!({ "results": [result("IPCC", "https://www.ipcc.ch/", "Reports.")] }),
    )
    .await;

    let query = SearchQuery::new("climate change");
    let output = run(&query, Mode::Search, &config_for(&server)).await;

    assert_eq!(output.items.len(), 2);
    let fallback = output.items.last().unwrap();
    assert_eq!(
        fallback.arg,
        format!("{}/search?q=climate+change", server.uri())
    );
}

#[tokio::test]
async fn query_text_is_trimmed_before_use() {
    let server = MockServer::start().await;
    mount_search(&server, "rust", json!({ "results": [] })).await;

    let output = run(&SearchQuery::new("  rust  "), Mode::Search, &config_for(&server)).await;

    // Reached the mock (which matches the trimmed q) rather than the
    // placeholder guard.
    assert_eq!(output.items[0].title, "No results for \"rust\"");
}

#[tokio::test]
async fn identical_payloads_produce_identical_output() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "rust",
        json!({ "results": [result("Rust", "https://www.rust-lang.org/", "Lang.")] }),
    )
    .await;

    let config = config_for(&server);
    let query = SearchQuery::new("rust");
    let first = serde_json::to_string(&run(&query, Mode::Search, &config).await).unwrap();
    let second = serde_json::to_string(&run(&query, Mode::Search, &config).await).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn result_items_expose_modifier_actions() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "rust",
        json!({ "results": [result("Rust", "https://www.rust-lang.org/", "Lang.")] }),
    )
    .await;

    let output = run(&SearchQuery::new("rust"), Mode::Search, &config_for(&server)).await;

    let mods = output.items[0].mods.as_ref().expect("result item has mods");
    let cmd = mods.cmd.as_ref().unwrap();
    assert_eq!(cmd.arg.as_deref(), Some("https://www.rust-lang.org/"));
    assert_eq!(
        cmd.variables.as_ref().unwrap().get("action").map(String::as_str),
        Some("copy")
    );
    let alt = mods.alt.as_ref().unwrap();
    assert_eq!(
        alt.arg.as_deref(),
        Some(format!("{}/search?q=rust", server.uri()).as_str())
    );
}

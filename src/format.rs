//! Mapping suggestions and search results into Alfred items

use crate::searxng::RawResult;
use crate::types::{Icon, Item, ModAction, Mods, TimeRange, Variables};
use std::collections::HashMap;

/// Maximum characters in a result subtitle
const SUBTITLE_MAX_CHARS: usize = 100;

/// Characters the matcher replaces with spaces so punctuated titles still
/// match their bare words
const MATCH_PUNCTUATION: &[char] = &[
    '-', '(', ')', '_', '.', ':', '#', '/', '\\', ';', ',', '[', ']',
];

/// Extract the display domain from a URL: scheme and a leading `www.`
/// stripped, cut at the first path separator. Anything that does not look
/// like an http(s) URL is returned unchanged.
pub fn extract_domain(url: &str) -> &str {
    let host = match url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return url,
    };
    let host = host.strip_prefix("www.").unwrap_or(host);
    let domain = host.split('/').next().unwrap_or(host);
    if domain.is_empty() {
        url
    } else {
        domain
    }
}

/// Build the match string Alfred filters against: the punctuation-stripped
/// text, a camel-case-separated copy, and the original, space-joined.
/// Duplication across the variants is intentional; it only widens recall.
pub fn alfred_matcher(text: &str) -> String {
    let clean: String = text
        .chars()
        .map(|c| if MATCH_PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    let mut camel_case_separated = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c.is_ascii_uppercase() {
            camel_case_separated.push(' ');
        }
        camel_case_separated.push(c);
    }

    format!("{clean} {camel_case_separated} {text}")
}

/// Item for one autocomplete suggestion. Category and time range come from
/// the already-parsed bang context and are echoed back through `variables`
/// so the follow-up search invocation inherits them.
pub fn suggestion_item(
    suggestion: &str,
    category: Option<&str>,
    time_range: Option<TimeRange>,
) -> Item {
    let mut subtitle = String::from("Search");
    if let Some(category) = category {
        subtitle.push(' ');
        subtitle.push_str(category);
    }
    if let Some(time_range) = time_range {
        subtitle.push_str(&format!(" (past {time_range})"));
    }
    subtitle.push_str(" for this suggestion");

    let mut item = Item::new(suggestion, subtitle, suggestion);
    item.autocomplete = Some(suggestion.to_string());
    item.icon = Some(Icon::default());
    if category.is_some() || time_range.is_some() {
        item.variables = Some(Variables {
            category: category.map(str::to_string),
            time_range,
        });
    }
    item
}

/// Item for one search result. `web_url` is the same query on the SearXNG
/// web interface, bound to the alt modifier.
pub fn search_result_item(result: &RawResult, web_url: &str) -> Item {
    let title = match result.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => "Untitled",
    };
    let content = result.content.as_deref().unwrap_or("");
    let subtitle = truncate_chars(
        &format!("{} · {}", extract_domain(&result.url), content),
        SUBTITLE_MAX_CHARS,
    );

    let mut item = Item::new(title, subtitle, result.url.clone());
    item.quicklookurl = Some(result.url.clone());
    // Match uses the raw upstream title, not the "Untitled" display default.
    item.match_text = Some(alfred_matcher(result.title.as_deref().unwrap_or("")));
    item.mods = Some(Mods {
        cmd: Some(ModAction {
            arg: Some(result.url.clone()),
            subtitle: Some("⌘: Copy URL".to_string()),
            variables: Some(HashMap::from([(
                "action".to_string(),
                "copy".to_string(),
            )])),
            valid: None,
        }),
        alt: Some(ModAction {
            arg: Some(web_url.to_string()),
            subtitle: Some("⌥: View in SearXNG".to_string()),
            variables: None,
            valid: None,
        }),
        ctrl: None,
        shift: None,
    });
    item
}

/// Non-crashing error row. Actionable only when `arg` carries a URL; all
/// modifier slots are explicitly disabled so a held key cannot action it.
pub fn error_item(title: &str, subtitle: &str, arg: Option<&str>) -> Item {
    let mut item = Item::new(title, subtitle, arg.unwrap_or(""));
    item.mods = Some(Mods::all_disabled());
    item
}

/// Trailing "search in browser" row, always appended on the success path
pub fn browser_fallback_item(query: &str, fallback_url: &str) -> Item {
    let mut item = Item::new(
        format!("Search \"{query}\" in browser"),
        "Open SearXNG web interface",
        fallback_url,
    );
    item.icon = Some(Icon::default());
    item
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

//! Alfred Script Filter schema and query types
//!
//! Alfred distinguishes between an optional field that is absent and one
//! that is null, so every optional field here is an `Option` with
//! `skip_serializing_if`: `None` means the key is omitted from the JSON
//! entirely.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A single row in Alfred's result list. The only entity that crosses the
/// workflow boundary outward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Main display text
    pub title: String,
    /// Secondary display text
    pub subtitle: String,
    /// Action payload passed to the next workflow step on Enter
    pub arg: String,
    /// Whether Alfred may action this row; always false when `arg` is empty
    pub valid: bool,
    /// Extra terms Alfred's fuzzy filter matches against
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_text: Option<String>,
    /// Text inserted into the search field on Tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// URL shown in Alfred's Quick Look preview
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quicklookurl: Option<String>,
    /// Workflow variables carried alongside the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
    /// Modifier-key overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<Mods>,
}

impl Item {
    /// Build a plain item. `valid` is derived from `arg`: an empty action
    /// payload must never be actionable.
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        arg: impl Into<String>,
    ) -> Self {
        let arg = arg.into();
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            valid: !arg.is_empty(),
            arg,
            match_text: None,
            autocomplete: None,
            icon: None,
            quicklookurl: None,
            variables: None,
            mods: None,
        }
    }
}

/// Icon reference, relative to the workflow directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub path: String,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            path: "icon.png".to_string(),
        }
    }
}

/// Modifier-key action overrides for an item
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mods {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<ModAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<ModAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctrl: Option<ModAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ModAction>,
}

impl Mods {
    /// All four modifiers explicitly disabled. Used on error rows so a held
    /// modifier cannot accidentally action them.
    pub fn all_disabled() -> Self {
        let disabled = ModAction {
            valid: Some(false),
            subtitle: Some(String::new()),
            arg: None,
            variables: None,
        };
        Self {
            cmd: Some(disabled.clone()),
            alt: Some(disabled.clone()),
            ctrl: Some(disabled.clone()),
            shift: Some(disabled),
        }
    }
}

/// Override applied when a modifier key is held
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, String>>,
}

/// Bang context echoed back to the host through suggestion items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "timeRange", skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

/// Time-range filter recognized by SearXNG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Day => write!(f, "day"),
            TimeRange::Week => write!(f, "week"),
            TimeRange::Month => write!(f, "month"),
            TimeRange::Year => write!(f, "year"),
        }
    }
}

/// A resolved query. Bang-prefix parsing happens upstream in the workflow
/// definition; by the time it reaches this crate the category and time
/// range are already separated from the text.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub text: String,
    pub category: Option<String>,
    pub time_range: Option<TimeRange>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
            time_range: None,
        }
    }
}

/// Top-level Script Filter document written to stdout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptFilterOutput {
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<Cache>,
}

impl ScriptFilterOutput {
    /// Output without a cache hint, for error and guard states that should
    /// not be reused.
    pub fn uncached(items: Vec<Item>) -> Self {
        Self { items, cache: None }
    }
}

/// Advisory reuse hint for Alfred. `loosereload` lets Alfred serve the
/// stale copy while it refreshes in the background.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cache {
    pub seconds: u32,
    pub loosereload: bool,
}

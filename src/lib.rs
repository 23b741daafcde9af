//! # searxfred
//!
//! Bridge between a self-hosted [SearXNG](https://docs.searxng.org/)
//! instance and Alfred's Script Filter: one invocation reads its
//! configuration from the environment, queries either the autocomplete or
//! the full search endpoint, and emits Alfred item JSON on stdout.
//!
//! The contract with the host is "always return a valid, renderable item
//! list": missing configuration, empty queries, network failures, upstream
//! API errors, and malformed responses all degrade into display items
//! instead of process failures.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use searxfred::{run, Config, Mode, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env();
//!     let output = run(&SearchQuery::new("climate change"), Mode::Search, &config).await;
//!     println!("{}", serde_json::to_string(&output).unwrap());
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod searxng;
pub mod types;
pub mod workflow;

// Re-export the invocation surface
pub use config::{parse_timeout, Config};
pub use error::{WorkflowError, WorkflowResult};
pub use searxng::{parse_autocomplete_response, parse_search_response, SearxngClient};
pub use types::{Item, ScriptFilterOutput, SearchQuery, TimeRange};
pub use workflow::{run, Mode};

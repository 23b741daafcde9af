//! searxfred CLI - Alfred Script Filter entry point
//!
//! Alfred invokes this binary once per keystroke batch (`suggest`) or per
//! committed query (`search`) and renders the JSON it prints to stdout.
//! Configuration arrives through environment variables exported by the
//! workflow; diagnostics go to stderr, where Alfred's debugger shows them.

use clap::{Parser, Subcommand, ValueEnum};
use searxfred::{run, Config, Mode, SearchQuery, TimeRange};

#[derive(Parser)]
#[command(name = "searxfred")]
#[command(about = "SearXNG Script Filter bridge for Alfred")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch full search results
    Search {
        /// Search query (bang prefix already stripped by the workflow)
        query: String,

        /// Category selected by a bang prefix, e.g. "images"
        #[arg(short, long)]
        category: Option<String>,

        /// Time range selected by a bang prefix
        #[arg(short, long, value_enum)]
        time_range: Option<TimeRangeCli>,
    },
    /// Fetch as-you-type autocomplete suggestions
    Suggest {
        /// Partial query
        query: String,

        /// Category selected by a bang prefix, e.g. "images"
        #[arg(short, long)]
        category: Option<String>,

        /// Time range selected by a bang prefix
        #[arg(short, long, value_enum)]
        time_range: Option<TimeRangeCli>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TimeRangeCli {
    Day,
    Week,
    Month,
    Year,
}

impl From<TimeRangeCli> for TimeRange {
    fn from(value: TimeRangeCli) -> Self {
        match value {
            TimeRangeCli::Day => TimeRange::Day,
            TimeRangeCli::Week => TimeRange::Week,
            TimeRangeCli::Month => TimeRange::Month,
            TimeRangeCli::Year => TimeRange::Year,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::from_env();

    let (mode, query, category, time_range) = match cli.command {
        Commands::Search {
            query,
            category,
            time_range,
        } => (Mode::Search, query, category, time_range),
        Commands::Suggest {
            query,
            category,
            time_range,
        } => (Mode::Suggest, query, category, time_range),
    };

    let query = SearchQuery {
        text: query,
        category,
        time_range: time_range.map(TimeRange::from),
    };

    let output = run(&query, mode, &config).await;
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

//! sitesearch - query a site content catalog from the command line.
//!
//! ```bash
//! sitesearch search "vr" --catalog content/
//! sitesearch search "animation" --type gallery --category "3D Animation" --json
//! sitesearch search "frame 12" --strategy weighted-evidence
//! sitesearch recent
//! sitesearch catalog --catalog content/catalog.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sitesearch_cli::output;
use sitesearch_cli::RecentSearches;
use sitesearch_core::catalog::{load_catalog, SearchFilters};
use sitesearch_core::config::Config;
use sitesearch_core::types::{ContentKind, RankingStrategy, SearchableItem};
use sitesearch_rank::{SearchEngine, SearchRequest};

const DEFAULT_CATALOG: &str = "content";
const DEFAULT_HISTORY: &str = ".sitesearch/recent.json";

#[derive(Parser)]
#[command(name = "sitesearch", version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog
    Search {
        /// Search query; blank queries return no results
        query: String,

        /// Only items of this kind (gallery, team, content, service, about, project)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Only items in this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,

        /// Only items carrying this tag (case-insensitive)
        #[arg(long)]
        tag: Option<String>,

        /// Ranking strategy: lexical or weighted-evidence
        #[arg(long)]
        strategy: Option<String>,

        /// Maximum number of results to return (defaults to search.default_limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,

        /// Catalog file or directory (overrides catalog.path)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Do not record this query in the recent searches
        #[arg(long)]
        no_history: bool,
    },
    /// Show recent searches, most recent first
    Recent,
    /// Show how many searchable items each collection contributes
    Catalog {
        /// Catalog file or directory (overrides catalog.path)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;

    match cli.command {
        Command::Search { query, kind, category, tag, strategy, limit, json, catalog, no_history } => {
            let mut settings = config.search()?;
            if let Some(s) = strategy {
                settings.strategy = s.parse::<RankingStrategy>()?;
            }
            let default_limit = settings.default_limit;
            let engine = SearchEngine::new(settings)?;
            let items = load_items(&config, catalog.as_deref())?;

            let mut filters = SearchFilters::new();
            filters.kind = kind;
            filters.category = category;
            filters.tag = tag;
            let mut request = SearchRequest::new(query.as_str()).with_filters(filters);
            request.limit = Some(limit.unwrap_or(default_limit));

            let hits = engine.search(&items, &request);
            info!(hits = hits.len(), strategy = ?engine.strategy(), "search finished");

            let rendered = if json { output::format_json(&query, &hits) } else { output::format_human(&query, &hits) };
            println!("{}", rendered);

            if !no_history {
                let path = history_path(&config);
                let mut recent = RecentSearches::load(&path);
                if recent.record(&query) {
                    recent.save(&path)?;
                }
            }
        }
        Command::Recent => {
            let recent = RecentSearches::load(&history_path(&config));
            if recent.is_empty() {
                println!("No recent searches");
            }
            for (i, q) in recent.entries().iter().enumerate() {
                println!("{}. {}", i + 1, q);
            }
        }
        Command::Catalog { catalog } => {
            let items = load_items(&config, catalog.as_deref())?;
            let counts: Vec<(ContentKind, usize)> = ContentKind::ALL
                .into_iter()
                .map(|kind| (kind, items.iter().filter(|i| i.kind == kind).count()))
                .collect();
            println!("{}", output::format_catalog_summary(&counts));
        }
    }

    Ok(())
}

/// Resolve the catalog location (flag > catalog.path > ./content) and assemble it.
fn load_items(config: &Config, flag: Option<&Path>) -> Result<Vec<SearchableItem>> {
    let path = flag
        .map(Path::to_path_buf)
        .or_else(|| config.path("catalog.path"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));
    let source = load_catalog(&path).with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    info!(entries = source.len(), path = %path.display(), "catalog loaded");
    Ok(source.assemble())
}

fn history_path(config: &Config) -> PathBuf {
    config.path("history.file").unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY))
}

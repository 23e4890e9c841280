//! Search facade: one call evaluates a borrowed catalog against one request.

use tracing::debug;

use sitesearch_core::catalog::{filter_items, passes_prefilter, SearchFilters};
use sitesearch_core::config::SearchSettings;
use sitesearch_core::traits::RelevanceRanker;
use sitesearch_core::types::{RankingStrategy, ScoredResult, SearchableItem};
use sitesearch_core::Query;

use crate::ranker::Ranker;
use crate::results::{build_hits, rank, SearchHit};

/// A query plus optional filters and result limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub filters: SearchFilters,
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build a request from hosting query parameters.
    ///
    /// Recognizes `q`, `type`, `category`, `tag` and `limit`. Blank values are
    /// ignored, an unparsable limit means no limit, and a missing
    /// `q` is an empty query rather than an error.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "q" => request.query = value.to_string(),
                "type" => request.filters.kind = Some(value.to_string()),
                "category" => request.filters.category = Some(value.to_string()),
                "tag" => request.filters.tag = Some(value.to_string()),
                "limit" => request.limit = value.parse().ok(),
                _ => {}
            }
        }
        request
    }
}

/// Stateless engine; safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    ranker: Ranker,
    settings: SearchSettings,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_strategy(RankingStrategy::default())
    }
}

impl SearchEngine {
    pub fn new(settings: SearchSettings) -> anyhow::Result<Self> {
        settings.validate()?;
        Ok(Self { ranker: Ranker::for_strategy(settings.strategy), settings })
    }

    pub fn with_strategy(strategy: RankingStrategy) -> Self {
        let settings = SearchSettings { strategy, ..SearchSettings::default() };
        Self { ranker: Ranker::for_strategy(strategy), settings }
    }

    pub fn strategy(&self) -> RankingStrategy {
        self.ranker.strategy()
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Filter, prefilter (when the strategy allows it) and score, in catalog
    /// order. Nothing is dropped for low relevance here.
    pub fn score_catalog(&self, catalog: &[SearchableItem], query: &Query, filters: &SearchFilters) -> Vec<ScoredResult> {
        let filtered = filter_items(catalog, filters);
        let candidates: Vec<&SearchableItem> = if self.ranker.applies_prefilter() {
            filtered.into_iter().filter(|item| passes_prefilter(item, query)).collect()
        } else {
            filtered
        };
        debug!(catalog = catalog.len(), candidates = candidates.len(), "scoring candidates");
        self.score_all(&candidates, query)
    }

    #[cfg(feature = "parallel")]
    fn score_all(&self, items: &[&SearchableItem], query: &Query) -> Vec<ScoredResult> {
        use rayon::prelude::*;
        items.par_iter().map(|item| self.ranker.score(item, query)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(&self, items: &[&SearchableItem], query: &Query) -> Vec<ScoredResult> {
        items.iter().map(|item| self.ranker.score(item, query)).collect()
    }

    /// Evaluate `request` against `catalog` and return ranked hits.
    pub fn search(&self, catalog: &[SearchableItem], request: &SearchRequest) -> Vec<SearchHit> {
        let query = Query::new(request.query.as_str());
        if query.is_empty() {
            debug!("empty query after normalization; no results");
            return Vec::new();
        }
        let scored = self.score_catalog(catalog, &query, &request.filters);
        let mut ranked = rank(scored);
        if let Some(limit) = self.effective_limit(request.limit) {
            ranked.truncate(limit);
        }
        debug!(query = query.normalized(), hits = ranked.len(), strategy = ?self.strategy(), "search complete");
        build_hits(ranked)
    }

    /// `None` means every ranked result; an explicit limit is capped at `max_limit`.
    fn effective_limit(&self, requested: Option<usize>) -> Option<usize> {
        requested.filter(|&l| l > 0).map(|l| l.min(self.settings.max_limit))
    }
}

use crate::normalize::Query;
use crate::types::{ScoredResult, SearchableItem};

/// Scores one catalog item against a prepared query.
///
/// Implementations must return relevance `0.0` with no evidence for an empty
/// query, and must never fail: a field that cannot match simply contributes
/// nothing.
pub trait RelevanceRanker: Send + Sync {
    fn score(&self, item: &SearchableItem, query: &Query) -> ScoredResult;

    /// Whether the coarse substring prefilter may run before scoring.
    fn applies_prefilter(&self) -> bool;
}

//! Ranked Result Builder: orders scored items and shapes them for the host.

use serde::{Deserialize, Serialize};

use sitesearch_core::types::{ContentKind, MatchEvidence, MatchField, ScoredResult};

/// Drop non-positive results, then sort by relevance and priority, both
/// descending. The sort is stable, so equal `(relevance, priority)` pairs
/// keep catalog order. Ids are not deduplicated.
pub fn rank(mut scored: Vec<ScoredResult>) -> Vec<ScoredResult> {
    scored.retain(|r| r.relevance > 0.0);
    scored.sort_by(|a, b| {
        b.relevance
            .total_cmp(&a.relevance)
            .then_with(|| b.item.sort_priority().cmp(&a.item.sort_priority()))
    });
    scored
}

/// Per-field evidence as shown next to a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitMatch {
    pub field: MatchField,
    pub text: String,
    pub score: f64,
}

impl From<MatchEvidence> for HitMatch {
    fn from(m: MatchEvidence) -> Self {
        Self { field: m.field, text: m.snippet, score: m.score }
    }
}

/// The outbound result shape consumed by the hosting route and the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub kind: ContentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub relevance: f64,
    pub matches: Vec<HitMatch>,
}

impl From<ScoredResult> for SearchHit {
    fn from(r: ScoredResult) -> Self {
        let item = r.item;
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            url: item.url,
            image: item.image_ref,
            kind: item.kind,
            category: item.category,
            relevance: r.relevance,
            matches: r.matches.into_iter().map(HitMatch::from).collect(),
        }
    }
}

pub fn build_hits(ranked: Vec<ScoredResult>) -> Vec<SearchHit> {
    ranked.into_iter().map(SearchHit::from).collect()
}

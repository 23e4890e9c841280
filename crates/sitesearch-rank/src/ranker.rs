//! Relevance Ranker: turns one item and one query into a [`ScoredResult`].
//!
//! Two regimes share the same matching primitives and are selected per
//! deployment, never summed:
//!
//! - [`LexicalRanker`]: additive substring score with exact-title and priority
//!   bonuses. Safe to run behind the substring prefilter.
//! - [`EvidenceRanker`]: fixed increment per field that has evidence above the
//!   match threshold. Fuzzy, so the prefilter must be skipped.

use sitesearch_core::traits::RelevanceRanker;
use sitesearch_core::types::{MatchEvidence, MatchField, RankingStrategy, ScoredResult, SearchableItem};
use sitesearch_core::{normalize, Query};
use sitesearch_text::locate::MATCH_THRESHOLD;
use sitesearch_text::{find_matches, similarity};

pub mod lexical {
    pub const TITLE_CONTAINS: f64 = 3.0;
    pub const TITLE_EXACT: f64 = 4.0;
    pub const DESCRIPTION_CONTAINS: f64 = 2.0;
    pub const TAG_CONTAINS: f64 = 2.0;
    pub const CATEGORY_CONTAINS: f64 = 1.5;
    pub const TITLE_WORD: f64 = 1.0;
    pub const DESCRIPTION_WORD: f64 = 0.5;
    pub const TAG_WORD: f64 = 0.75;
    /// Multiplies the best image-reference match score.
    pub const IMAGE_SCALE: f64 = 0.35;
}

pub mod evidence {
    pub const TITLE: f64 = 0.4;
    pub const DESCRIPTION: f64 = 0.3;
    pub const IMAGE: f64 = 0.35;
    pub const CATEGORY: f64 = 0.2;
    pub const TAGS: f64 = 0.2;
    pub const CREATOR_NAME: f64 = 0.1;
    pub const CREATOR_ROLE: f64 = 0.1;
}

/// Running relevance and evidence for one item.
#[derive(Default)]
struct Tally {
    relevance: f64,
    matches: Vec<MatchEvidence>,
}

impl Tally {
    fn add(&mut self, points: f64) {
        self.relevance += points;
    }

    fn record(&mut self, field: MatchField, snippet: impl Into<String>, score: f64) {
        self.matches.push(MatchEvidence { field, snippet: snippet.into(), score });
    }

    /// Record all evidence for `field`; the weight counts once if any exists.
    fn field<I>(&mut self, field: MatchField, weight: f64, found: I)
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let before = self.matches.len();
        for (snippet, score) in found {
            self.record(field, snippet, score);
        }
        if self.matches.len() > before {
            self.add(weight);
        }
    }

    fn finish(self, item: &SearchableItem) -> ScoredResult {
        ScoredResult { item: item.clone(), relevance: self.relevance, matches: self.matches }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalRanker;

impl LexicalRanker {
    /// Best snippet for a long field, falling back to the whole value.
    fn snippet(text: &str, query: &Query) -> (String, f64) {
        find_matches(text, query.raw())
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map_or_else(|| (text.to_string(), similarity(text, query.raw())), |m| (m.text, m.score))
    }
}

impl RelevanceRanker for LexicalRanker {
    fn score(&self, item: &SearchableItem, query: &Query) -> ScoredResult {
        if query.is_empty() {
            return ScoredResult::unmatched(item.clone());
        }
        let q = query.normalized();
        let title = normalize(&item.title);
        let description = normalize(&item.description);
        let tags: Vec<String> = item.tags.iter().map(|t| normalize(t)).collect();
        let mut tally = Tally::default();

        if title.contains(q) {
            tally.add(lexical::TITLE_CONTAINS);
            tally.record(MatchField::Title, item.title.as_str(), similarity(&item.title, query.raw()));
        }
        if title == q {
            tally.add(lexical::TITLE_EXACT);
        }
        if description.contains(q) {
            tally.add(lexical::DESCRIPTION_CONTAINS);
            let (snippet, score) = Self::snippet(&item.description, query);
            tally.record(MatchField::Description, snippet, score);
        }
        for (raw, tag) in item.tags.iter().zip(&tags) {
            if tag.contains(q) {
                tally.add(lexical::TAG_CONTAINS);
                tally.record(MatchField::Tags, raw.as_str(), similarity(raw, query.raw()));
            }
        }
        if let Some(ref category) = item.category {
            if normalize(category).contains(q) {
                tally.add(lexical::CATEGORY_CONTAINS);
                tally.record(MatchField::Category, category.as_str(), similarity(category, query.raw()));
            }
        }

        for word in query.words() {
            let word = word.as_str();
            if title.contains(word) {
                tally.add(lexical::TITLE_WORD);
            }
            if description.contains(word) {
                tally.add(lexical::DESCRIPTION_WORD);
            }
            if tags.iter().any(|t| t.contains(word)) {
                tally.add(lexical::TAG_WORD);
            }
        }

        if let Some(ref image) = item.image_ref {
            let best = find_matches(image, query.raw()).max_by(|a, b| a.score.total_cmp(&b.score));
            if let Some(m) = best {
                tally.add(lexical::IMAGE_SCALE * m.score);
                tally.record(MatchField::Image, m.text, m.score);
            }
        }

        if tally.relevance > 0.0 {
            if let Some(priority) = item.priority {
                tally.add(f64::from(priority));
            }
        }

        tally.finish(item)
    }

    fn applies_prefilter(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EvidenceRanker;

impl EvidenceRanker {
    fn located(text: &str, query: &Query) -> Vec<(String, f64)> {
        find_matches(text, query.raw()).map(|m| (m.text, m.score)).collect()
    }

    fn labelled(value: &str, query: &Query) -> Option<(String, f64)> {
        let score = similarity(value, query.raw());
        (score > MATCH_THRESHOLD).then(|| (value.to_string(), score))
    }
}

impl RelevanceRanker for EvidenceRanker {
    fn score(&self, item: &SearchableItem, query: &Query) -> ScoredResult {
        if query.is_empty() {
            return ScoredResult::unmatched(item.clone());
        }
        let mut tally = Tally::default();

        tally.field(MatchField::Title, evidence::TITLE, Self::located(&item.title, query));
        tally.field(
            MatchField::Description,
            evidence::DESCRIPTION,
            Self::located(&item.description, query),
        );
        if let Some(ref image) = item.image_ref {
            tally.field(MatchField::Image, evidence::IMAGE, Self::located(image, query));
        }
        if let Some(ref category) = item.category {
            tally.field(MatchField::Category, evidence::CATEGORY, Self::labelled(category, query));
        }
        tally.field(
            MatchField::Tags,
            evidence::TAGS,
            item.tags.iter().filter_map(|t| Self::labelled(t, query)),
        );
        if let Some(ref creator) = item.creator {
            tally.field(MatchField::CreatorName, evidence::CREATOR_NAME, Self::labelled(&creator.name, query));
            if let Some(ref role) = creator.role {
                tally.field(MatchField::CreatorRole, evidence::CREATOR_ROLE, Self::labelled(role, query));
            }
        }

        tally.finish(item)
    }

    fn applies_prefilter(&self) -> bool {
        false
    }
}

/// The ranker selected by [`RankingStrategy`].
#[derive(Debug, Clone, Copy)]
pub enum Ranker {
    Lexical(LexicalRanker),
    WeightedEvidence(EvidenceRanker),
}

impl Ranker {
    pub fn for_strategy(strategy: RankingStrategy) -> Self {
        match strategy {
            RankingStrategy::Lexical => Ranker::Lexical(LexicalRanker),
            RankingStrategy::WeightedEvidence => Ranker::WeightedEvidence(EvidenceRanker),
        }
    }

    pub fn strategy(&self) -> RankingStrategy {
        match self {
            Ranker::Lexical(_) => RankingStrategy::Lexical,
            Ranker::WeightedEvidence(_) => RankingStrategy::WeightedEvidence,
        }
    }
}

impl RelevanceRanker for Ranker {
    fn score(&self, item: &SearchableItem, query: &Query) -> ScoredResult {
        match self {
            Ranker::Lexical(r) => r.score(item, query),
            Ranker::WeightedEvidence(r) => r.score(item, query),
        }
    }

    fn applies_prefilter(&self) -> bool {
        match self {
            Ranker::Lexical(r) => r.applies_prefilter(),
            Ranker::WeightedEvidence(r) => r.applies_prefilter(),
        }
    }
}

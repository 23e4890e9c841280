//! Domain types shared by the catalog, the rankers and the result builder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The content collection an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Gallery,
    Team,
    Content,
    Service,
    About,
    Project,
}

impl ContentKind {
    /// Catalog assembly order.
    pub const ALL: [ContentKind; 6] = [
        ContentKind::Gallery,
        ContentKind::Team,
        ContentKind::Content,
        ContentKind::Service,
        ContentKind::About,
        ContentKind::Project,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Gallery => "gallery",
            ContentKind::Team => "team",
            ContentKind::Content => "content",
            ContentKind::Service => "service",
            ContentKind::About => "about",
            ContentKind::Project => "project",
        }
    }

    /// Name of the collection on disk and in default URLs.
    pub fn collection_name(self) -> &'static str {
        match self {
            ContentKind::Service => "services",
            ContentKind::Project => "projects",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ContentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted || k.collection_name() == wanted)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

/// Which scoring regime the ranker runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankingStrategy {
    /// Additive lexical score with exact-match and priority bonuses.
    #[default]
    Lexical,
    /// Fixed per-field increments backed by match evidence; no prefilter.
    WeightedEvidence,
}

impl FromStr for RankingStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "lexical" => Ok(RankingStrategy::Lexical),
            "weighted-evidence" | "evidence" => Ok(RankingStrategy::WeightedEvidence),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

/// Who made a piece of content (gallery credits).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// The uniform shape every content variant is mapped into at ingestion.
///
/// - `title`: never empty after normalization
/// - `description`: empty when the source had none
/// - `image_ref`: filename-like asset identifier, itself searchable
/// - `priority`: higher is more important; bonus and tie-break
/// - `url`: opaque link target passed through to results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ContentKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Contributor>,
}

impl SearchableItem {
    /// Priority as used for sorting; absent counts as zero.
    pub fn sort_priority(&self) -> u32 {
        self.priority.unwrap_or(0)
    }
}

/// The item field a match was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchField {
    Title,
    Description,
    Image,
    Category,
    Tags,
    CreatorName,
    CreatorRole,
}

/// Where and how strongly the query matched inside one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvidence {
    pub field: MatchField,
    pub snippet: String,
    /// In `[0, 1]`.
    pub score: f64,
}

/// An item with its relevance for one query. Transient, one per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub item: SearchableItem,
    pub relevance: f64,
    pub matches: Vec<MatchEvidence>,
}

impl ScoredResult {
    pub fn unmatched(item: SearchableItem) -> Self {
        Self { item, relevance: 0.0, matches: Vec::new() }
    }
}

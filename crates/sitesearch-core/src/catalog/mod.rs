//! Catalog Aggregator: merges the typed content collections into one
//! sequence of [`SearchableItem`], applies field filters and the coarse
//! substring prefilter.
//!
//! The catalog is rebuilt (or borrowed from an immutable snapshot) for every
//! query; nothing here keeps state between calls.

mod content;
mod loader;

pub use content::{
    AboutSection, ContentItem, ContentSection, GalleryItem, Project, Service, TeamMember,
};
pub use loader::{load_catalog, load_dir, load_file};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::{normalize, Query};
use crate::types::{ContentKind, SearchableItem};

/// All content collections as handed over by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSource {
    pub gallery: Vec<GalleryItem>,
    pub team: Vec<TeamMember>,
    pub content: Vec<ContentSection>,
    pub services: Vec<Service>,
    pub about: Vec<AboutSection>,
    pub projects: Vec<Project>,
}

impl CatalogSource {
    pub fn len(&self) -> usize {
        self.gallery.len()
            + self.team.len()
            + self.content.len()
            + self.services.len()
            + self.about.len()
            + self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in [`ContentKind::ALL`] order, each collection in arrival order.
    pub fn into_items(self) -> impl Iterator<Item = ContentItem> {
        self.gallery
            .into_iter()
            .map(ContentItem::from)
            .chain(self.team.into_iter().map(ContentItem::from))
            .chain(self.content.into_iter().map(ContentItem::from))
            .chain(self.services.into_iter().map(ContentItem::from))
            .chain(self.about.into_iter().map(ContentItem::from))
            .chain(self.projects.into_iter().map(ContentItem::from))
    }

    /// Assemble the uniform catalog from these collections.
    pub fn assemble(self) -> Vec<SearchableItem> {
        assemble_catalog(self.into_items())
    }
}

/// Concatenate content items into searchable items, preserving arrival order.
///
/// Items whose title normalizes to nothing are dropped silently.
pub fn assemble_catalog<I>(items: I) -> Vec<SearchableItem>
where
    I: IntoIterator<Item = ContentItem>,
{
    let mut catalog = Vec::new();
    let mut excluded = 0usize;
    for item in items {
        let kind = item.kind();
        match item.into_searchable() {
            Some(searchable) => catalog.push(searchable),
            None => {
                excluded += 1;
                debug!(%kind, "excluding catalog item without a usable title");
            }
        }
    }
    debug!(items = catalog.len(), excluded, "assembled catalog");
    catalog
}

/// Optional field filters, combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Exact, case-insensitive match on the item kind or its collection name.
    pub kind: Option<String>,
    /// Exact, case-insensitive match on the item category.
    pub category: Option<String>,
    /// Case-insensitive membership in the item tags.
    pub tag: Option<String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.category.is_none() && self.tag.is_none()
    }

    /// Check if an item passes every filter that is set.
    pub fn matches(&self, item: &SearchableItem) -> bool {
        if let Some(ref kind) = self.kind {
            if !kind_matches(item.kind, kind) {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            let wanted = category.to_lowercase();
            match item.category {
                Some(ref c) if c.to_lowercase() == wanted => {}
                _ => return false,
            }
        }

        if let Some(ref tag) = self.tag {
            let wanted = tag.to_lowercase();
            if !item.tags.iter().any(|t| t.to_lowercase() == wanted) {
                return false;
            }
        }

        true
    }
}

fn kind_matches(kind: ContentKind, wanted: &str) -> bool {
    wanted.parse::<ContentKind>().is_ok_and(|k| k == kind)
}

/// Keep the items that pass `filters`, in catalog order.
pub fn filter_items<'a>(items: &'a [SearchableItem], filters: &SearchFilters) -> Vec<&'a SearchableItem> {
    items.iter().filter(|item| filters.matches(item)).collect()
}

/// The normalized text the coarse prefilter searches in.
pub fn searchable_text(item: &SearchableItem) -> String {
    let mut text = String::with_capacity(item.title.len() + item.description.len() + 16);
    text.push_str(&item.title);
    text.push(' ');
    text.push_str(&item.description);
    for tag in &item.tags {
        text.push(' ');
        text.push_str(tag);
    }
    if let Some(ref category) = item.category {
        text.push(' ');
        text.push_str(category);
    }
    normalize(&text)
}

/// Coarse containment guard: does the item's text contain the whole query?
///
/// Only valid ahead of substring-style scoring; fuzzy scoring can match items
/// this rejects.
pub fn passes_prefilter(item: &SearchableItem, query: &Query) -> bool {
    searchable_text(item).contains(query.normalized())
}

//! Typed source collections and their mapping into [`SearchableItem`].
//!
//! Every wire field is optional. Ingestion is the single place where absent
//! strings become empty, ids and urls get defaults, and items whose title
//! normalizes to nothing are dropped.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::types::{ContentKind, Contributor, SearchableItem};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub creator: Option<Contributor>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentSection {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub priority: Option<u32>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutSection {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    pub priority: Option<u32>,
    pub url: Option<String>,
}

/// One entry of any content collection.
#[derive(Debug, Clone)]
pub enum ContentItem {
    Gallery(GalleryItem),
    Team(TeamMember),
    Content(ContentSection),
    Service(Service),
    About(AboutSection),
    Project(Project),
}

/// Fields common to every variant once it is unpacked.
struct Draft {
    kind: ContentKind,
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    tags: Vec<String>,
    category: Option<String>,
    image_ref: Option<String>,
    priority: Option<u32>,
    url: Option<String>,
    creator: Option<Contributor>,
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Gallery(_) => ContentKind::Gallery,
            ContentItem::Team(_) => ContentKind::Team,
            ContentItem::Content(_) => ContentKind::Content,
            ContentItem::Service(_) => ContentKind::Service,
            ContentItem::About(_) => ContentKind::About,
            ContentItem::Project(_) => ContentKind::Project,
        }
    }

    /// Map into the uniform shape, or `None` when the title is unusable.
    pub fn into_searchable(self) -> Option<SearchableItem> {
        let kind = self.kind();
        let draft = match self {
            ContentItem::Gallery(g) => Draft {
                kind,
                id: g.id,
                title: g.title,
                description: g.description,
                tags: g.tags,
                category: g.category,
                image_ref: g.image,
                priority: None,
                url: g.url,
                creator: g.creator,
            },
            ContentItem::Team(t) => Draft {
                kind,
                id: t.id,
                title: t.name,
                description: t.bio,
                tags: t.skills,
                category: t.role,
                image_ref: t.image,
                priority: None,
                url: t.url,
                creator: None,
            },
            ContentItem::Content(c) => Draft {
                kind,
                id: c.id,
                title: c.title,
                description: c.body,
                tags: c.tags,
                category: c.category,
                image_ref: None,
                priority: None,
                url: c.url,
                creator: None,
            },
            ContentItem::Service(s) => Draft {
                kind,
                id: s.id,
                title: s.title,
                description: s.description,
                tags: s.features,
                category: None,
                image_ref: None,
                priority: s.priority,
                url: s.url,
                creator: None,
            },
            ContentItem::About(a) => Draft {
                kind,
                id: a.id,
                title: a.title,
                description: a.content,
                tags: Vec::new(),
                category: None,
                image_ref: None,
                priority: None,
                url: a.url,
                creator: None,
            },
            ContentItem::Project(p) => Draft {
                kind,
                id: p.id,
                title: p.title,
                description: p.description,
                tags: p.technologies,
                category: p.category,
                image_ref: p.image,
                priority: p.priority,
                url: p.url,
                creator: None,
            },
        };
        draft.finish()
    }
}

impl Draft {
    fn finish(self) -> Option<SearchableItem> {
        let title = self.title.unwrap_or_default();
        let slug = normalize(&title).replace(' ', "-");
        if slug.is_empty() {
            return None;
        }
        let id = non_blank(self.id).unwrap_or(slug);
        let url = non_blank(self.url)
            .unwrap_or_else(|| format!("/{}/{}", self.kind.collection_name(), id));
        let creator = self.creator.filter(|c| !c.name.trim().is_empty());
        Some(SearchableItem {
            id,
            title,
            description: self.description.unwrap_or_default(),
            kind: self.kind,
            tags: self.tags.into_iter().filter(|t| !t.trim().is_empty()).collect(),
            category: non_blank(self.category),
            image_ref: non_blank(self.image_ref),
            priority: self.priority,
            url,
            creator,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<GalleryItem> for ContentItem {
    fn from(v: GalleryItem) -> Self {
        ContentItem::Gallery(v)
    }
}

impl From<TeamMember> for ContentItem {
    fn from(v: TeamMember) -> Self {
        ContentItem::Team(v)
    }
}

impl From<ContentSection> for ContentItem {
    fn from(v: ContentSection) -> Self {
        ContentItem::Content(v)
    }
}

impl From<Service> for ContentItem {
    fn from(v: Service) -> Self {
        ContentItem::Service(v)
    }
}

impl From<AboutSection> for ContentItem {
    fn from(v: AboutSection) -> Self {
        ContentItem::About(v)
    }
}

impl From<Project> for ContentItem {
    fn from(v: Project) -> Self {
        ContentItem::Project(v)
    }
}

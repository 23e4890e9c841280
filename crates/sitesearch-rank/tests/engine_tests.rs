use sitesearch_core::catalog::{
    assemble_catalog, CatalogSource, ContentItem, GalleryItem, Project, SearchFilters, Service,
};
use sitesearch_core::config::SearchSettings;
use sitesearch_core::types::{ContentKind, MatchField, RankingStrategy, SearchableItem};
use sitesearch_core::Query;
use sitesearch_rank::{SearchEngine, SearchRequest};

fn site_catalog() -> Vec<SearchableItem> {
    CatalogSource {
        projects: vec![Project {
            title: Some("VR Architectural Visualization".into()),
            ..Default::default()
        }],
        services: vec![Service {
            title: Some("Software Development".into()),
            features: vec!["Custom Solutions".into()],
            priority: Some(1),
            ..Default::default()
        }],
        ..Default::default()
    }
    .assemble()
}

fn gallery_pair() -> Vec<SearchableItem> {
    assemble_catalog(vec![
        ContentItem::from(GalleryItem {
            title: Some("Robot Reel".into()),
            category: Some("3D Animation".into()),
            tags: vec!["3D".into()],
            ..Default::default()
        }),
        ContentItem::from(GalleryItem {
            title: Some("Headset Demo".into()),
            category: Some("VR/AR".into()),
            tags: vec!["VR".into()],
            ..Default::default()
        }),
    ])
}

#[test]
fn vr_query_returns_only_the_project() {
    let engine = SearchEngine::with_strategy(RankingStrategy::Lexical);
    let hits = engine.search(&site_catalog(), &SearchRequest::new("vr"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "VR Architectural Visualization");
    assert_eq!(hits[0].kind, ContentKind::Project);
    assert_eq!(hits[0].relevance, 4.0);
    assert_eq!(hits[0].matches[0].field, MatchField::Title);
}

#[test]
fn vr_query_under_weighted_evidence_also_skips_the_service() {
    let engine = SearchEngine::with_strategy(RankingStrategy::WeightedEvidence);
    let hits = engine.search(&site_catalog(), &SearchRequest::new("vr"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind, ContentKind::Project);
}

#[test]
fn empty_query_yields_nothing_even_with_filters() {
    let catalog = gallery_pair();
    for strategy in [RankingStrategy::Lexical, RankingStrategy::WeightedEvidence] {
        let engine = SearchEngine::with_strategy(strategy);
        let request = SearchRequest::new("").with_filters(SearchFilters::new().with_category("3d animation"));
        assert!(engine.search(&catalog, &request).is_empty());
        assert!(engine.search(&catalog, &SearchRequest::new("  !! ")).is_empty());
    }
}

#[test]
fn filters_narrow_before_scoring() {
    let catalog = gallery_pair();
    let engine = SearchEngine::default();
    let all = engine.search(&catalog, &SearchRequest::new("demo reel"));
    assert!(all.is_empty(), "whole-query prefilter rejects both");

    let reel = engine.search(
        &catalog,
        &SearchRequest::new("reel").with_filters(SearchFilters::new().with_category("3D ANIMATION")),
    );
    assert_eq!(reel.len(), 1);

    let filtered_out = engine.search(
        &catalog,
        &SearchRequest::new("reel").with_filters(SearchFilters::new().with_tag("vr")),
    );
    assert!(filtered_out.is_empty());
}

#[test]
fn weighted_evidence_skips_the_substring_prefilter() {
    let catalog = assemble_catalog(vec![ContentItem::from(GalleryItem {
        title: Some("Animations Showcase".into()),
        ..Default::default()
    })]);
    let request = SearchRequest::new("animation showcases");

    let lexical = SearchEngine::with_strategy(RankingStrategy::Lexical);
    assert!(lexical.search(&catalog, &request).is_empty());

    let fuzzy = SearchEngine::with_strategy(RankingStrategy::WeightedEvidence);
    let hits = fuzzy.search(&catalog, &request);
    assert_eq!(hits.len(), 1);
    assert!((hits[0].relevance - 0.4).abs() < 1e-9);
    assert!(hits[0].matches.iter().all(|m| m.field == MatchField::Title));
}

#[test]
fn score_catalog_keeps_catalog_order() {
    let titles: Vec<String> = (0..64).map(|i| format!("Item {i} robot")).collect();
    let catalog = assemble_catalog(titles.iter().map(|t| {
        ContentItem::from(Project { title: Some(t.clone()), ..Default::default() })
    }));
    let engine = SearchEngine::default();
    let scored = engine.score_catalog(&catalog, &Query::new("robot"), &SearchFilters::new());
    let order: Vec<&str> = scored.iter().map(|r| r.item.title.as_str()).collect();
    let expected: Vec<&str> = titles.iter().map(String::as_str).collect();
    assert_eq!(order, expected);
}

#[test]
fn unlimited_request_returns_every_match() {
    let catalog = assemble_catalog((0..25).map(|i| {
        ContentItem::from(Project { title: Some(format!("Robot {i}")), ..Default::default() })
    }));
    let hits = SearchEngine::default().search(&catalog, &SearchRequest::new("robot"));
    assert_eq!(hits.len(), 25);
    let zero = SearchEngine::default().search(&catalog, &SearchRequest::new("robot").with_limit(0));
    assert_eq!(zero.len(), 25);
}

#[test]
fn explicit_limits_are_clamped() {
    let catalog = assemble_catalog((0..15).map(|i| {
        ContentItem::from(Project { title: Some(format!("Robot {i}")), ..Default::default() })
    }));
    let settings = SearchSettings { default_limit: 10, max_limit: 12, ..SearchSettings::default() };
    let engine = SearchEngine::new(settings).expect("valid settings");

    assert_eq!(engine.search(&catalog, &SearchRequest::new("robot")).len(), 15);
    assert_eq!(engine.search(&catalog, &SearchRequest::new("robot").with_limit(3)).len(), 3);
    assert_eq!(engine.search(&catalog, &SearchRequest::new("robot").with_limit(1000)).len(), 12);
}

#[test]
fn invalid_settings_are_rejected() {
    let settings = SearchSettings { default_limit: 20, max_limit: 5, ..SearchSettings::default() };
    assert!(SearchEngine::new(settings).is_err());
}

#[test]
fn shared_ids_across_kinds_are_not_deduplicated() {
    let catalog = assemble_catalog(vec![
        ContentItem::from(Project { id: Some("tour".into()), title: Some("Museum Tour".into()), ..Default::default() }),
        ContentItem::from(GalleryItem { id: Some("tour".into()), title: Some("Museum Tour".into()), ..Default::default() }),
    ]);
    let hits = SearchEngine::default().search(&catalog, &SearchRequest::new("museum"));
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.id == "tour"));
    assert_eq!(hits[0].kind, ContentKind::Project);
}

#[test]
fn query_pairs_map_to_request() {
    let request = SearchRequest::from_query_pairs([
        ("q", " vr "),
        ("type", "Project"),
        ("category", ""),
        ("tag", "3D"),
        ("limit", "5"),
        ("page", "2"),
    ]);
    assert_eq!(request.query, "vr");
    assert_eq!(request.filters.kind.as_deref(), Some("Project"));
    assert_eq!(request.filters.category, None);
    assert_eq!(request.filters.tag.as_deref(), Some("3D"));
    assert_eq!(request.limit, Some(5));

    let missing_q = SearchRequest::from_query_pairs([("type", "gallery"), ("limit", "lots")]);
    assert_eq!(missing_q.query, "");
    assert_eq!(missing_q.limit, None);
    assert!(SearchEngine::default().search(&site_catalog(), &missing_q).is_empty());
}

#[test]
fn hits_serialize_to_the_outbound_shape() {
    let hits = SearchEngine::default().search(&site_catalog(), &SearchRequest::new("vr"));
    let json = serde_json::to_value(&hits[0]).expect("serialize");
    assert_eq!(json["id"], "vr-architectural-visualization");
    assert_eq!(json["url"], "/projects/vr-architectural-visualization");
    assert_eq!(json["kind"], "project");
    assert_eq!(json["relevance"], 4.0);
    assert_eq!(json["matches"][0]["field"], "title");
    assert_eq!(json["matches"][0]["text"], "VR Architectural Visualization");
    assert!(json.get("image").is_none());
    assert!(json.get("category").is_none());
}

use sitesearch_core::traits::RelevanceRanker;
use sitesearch_core::types::{ContentKind, Contributor, MatchField, ScoredResult, SearchableItem};
use sitesearch_core::Query;
use sitesearch_rank::{rank, EvidenceRanker, LexicalRanker, Ranker};

fn item(kind: ContentKind, id: &str, title: &str) -> SearchableItem {
    SearchableItem {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        kind,
        tags: Vec::new(),
        category: None,
        image_ref: None,
        priority: None,
        url: format!("/{}/{}", kind.collection_name(), id),
        creator: None,
    }
}

fn scored(id: &str, relevance: f64, priority: Option<u32>) -> ScoredResult {
    let mut it = item(ContentKind::Project, id, id);
    it.priority = priority;
    ScoredResult { item: it, relevance, matches: Vec::new() }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_query_scores_zero_in_both_regimes() {
    let mut it = item(ContentKind::Service, "s", "Software Development");
    it.priority = Some(3);
    for ranker in [Ranker::Lexical(LexicalRanker), Ranker::WeightedEvidence(EvidenceRanker)] {
        for q in ["", "   ", "?!."] {
            let r = ranker.score(&it, &Query::new(q));
            assert_eq!(r.relevance, 0.0);
            assert!(r.matches.is_empty());
        }
    }
}

#[test]
fn rank_excludes_zero_relevance() {
    let ranked = rank(vec![scored("a", 0.0, Some(5)), scored("b", 0.0, None)]);
    assert!(ranked.is_empty());
}

#[test]
fn rank_breaks_ties_by_priority() {
    let ranked = rank(vec![scored("low", 3.0, Some(1)), scored("high", 3.0, Some(2))]);
    let ids: Vec<&str> = ranked.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, ["high", "low"]);
}

#[test]
fn rank_is_stable_for_equal_keys_and_keeps_duplicate_ids() {
    let ranked = rank(vec![
        scored("first", 1.0, None),
        scored("top", 2.5, None),
        scored("second", 1.0, Some(0)),
        scored("first", 1.0, None),
    ]);
    let ids: Vec<&str> = ranked.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, ["top", "first", "second", "first"]);
}

#[test]
fn lexical_contributions_are_additive() {
    let mut it = item(ContentKind::Project, "anim", "Animation");
    it.description = "3D animation reel for clients".into();
    it.tags = vec!["Animation".into(), "Motion".into()];
    it.category = Some("Animation Studio".into());
    it.priority = Some(2);

    let r = LexicalRanker.score(&it, &Query::new("Animation"));
    // 3 + 4 + 2 + 2 + 1.5 for the whole query, 1 + 0.5 + 0.75 for its word, 2 priority.
    assert!(approx(r.relevance, 16.75), "relevance = {}", r.relevance);
    let fields: Vec<MatchField> = r.matches.iter().map(|m| m.field).collect();
    assert_eq!(fields, [MatchField::Title, MatchField::Description, MatchField::Tags, MatchField::Category]);
    assert_eq!(r.matches[0].score, 1.0);
    assert_eq!(r.matches[1].snippet, "3D animation reel for");
}

#[test]
fn lexical_per_word_matches_without_whole_query() {
    let mut it = item(ContentKind::Gallery, "g", "Robot Reel");
    it.description = "A walking robot".into();
    it.tags = vec!["Robotics".into()];
    let r = LexicalRanker.score(&it, &Query::new("robot dance"));
    // "robot": title 1 + description 0.5 + tag 0.75; "dance": nothing.
    assert!(approx(r.relevance, 2.25), "relevance = {}", r.relevance);
    assert!(r.matches.is_empty());
}

#[test]
fn lexical_image_reference_scales_best_match() {
    let mut it = item(ContentKind::Gallery, "night", "Night Scene");
    it.image_ref = Some("frame12_final.png".into());
    let r = LexicalRanker.score(&it, &Query::new("Frame 12"));
    assert!(approx(r.relevance, 0.35 * 0.9), "relevance = {}", r.relevance);
    assert_eq!(r.matches.len(), 1);
    assert_eq!(r.matches[0].field, MatchField::Image);
}

#[test]
fn lexical_priority_needs_a_textual_match() {
    let mut it = item(ContentKind::Service, "s", "Software Development");
    it.priority = Some(5);
    assert_eq!(LexicalRanker.score(&it, &Query::new("zzz")).relevance, 0.0);
    assert!(approx(LexicalRanker.score(&it, &Query::new("software")).relevance, 3.0 + 1.0 + 5.0));
}

#[test]
fn evidence_counts_each_field_once() {
    let mut it = item(ContentKind::Gallery, "h", "Headset");
    it.tags = vec!["VR".into(), "VR/AR".into()];
    let r = EvidenceRanker.score(&it, &Query::new("vr"));
    assert!(approx(r.relevance, 0.2), "relevance = {}", r.relevance);
    assert_eq!(r.matches.len(), 2);
    assert!(r.matches.iter().all(|m| m.field == MatchField::Tags));
    assert_eq!(r.matches[0].score, 1.0);
    assert_eq!(r.matches[1].score, 0.8);
}

#[test]
fn evidence_scores_creator_identity() {
    let mut it = item(ContentKind::Gallery, "ocean", "Ocean Study");
    it.creator = Some(Contributor { name: "Kim Lee".into(), role: Some("Animator".into()) });
    let r = EvidenceRanker.score(&it, &Query::new("kim"));
    assert!(approx(r.relevance, 0.1), "relevance = {}", r.relevance);
    assert_eq!(r.matches.len(), 1);
    assert_eq!(r.matches[0].field, MatchField::CreatorName);
    assert_eq!(r.matches[0].snippet, "Kim Lee");

    let r = EvidenceRanker.score(&it, &Query::new("animator"));
    assert!(approx(r.relevance, 0.1));
    assert_eq!(r.matches[0].field, MatchField::CreatorRole);
}

#[test]
fn evidence_title_and_frame_snippets() {
    let mut it = item(ContentKind::Gallery, "scene", "Scene frame12 wide");
    it.description = "Lighting pass for the harbour shot".into();
    let r = EvidenceRanker.score(&it, &Query::new("Frame 12 closeup"));
    assert!(approx(r.relevance, 0.4), "relevance = {}", r.relevance);
    assert_eq!(r.matches[0].snippet, "Scene frame12 wide");
    assert_eq!(r.matches[0].score, 0.9);
    assert!(r.matches.iter().all(|m| m.field == MatchField::Title));
}

#[test]
fn strategies_disagree_on_prefilter() {
    assert!(Ranker::Lexical(LexicalRanker).applies_prefilter());
    assert!(!Ranker::WeightedEvidence(EvidenceRanker).applies_prefilter());
}

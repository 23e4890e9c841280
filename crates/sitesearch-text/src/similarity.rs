//! Tiered string similarity in `[0, 1]`.
//!
//! Both inputs are normalized, then the tiers are tried in a fixed order and
//! the first one that applies decides the score:
//!
//! | Tier | Condition | Score |
//! |------|-----------|-------|
//! | Exact | equal, non-empty | 1.0 |
//! | Frame | share a `frame N` number | 0.9 |
//! | Containment | one contains the other, both non-empty | 0.8 |
//! | WordOverlap | at least one common word | 0.6 × common / max word count |
//! | CharOverlap | fallback, positional | 0.4 × same-index chars / max length |
//!
//! No edit distance: the character tier compares positions only, so reordered
//! near-duplicates score low there.

use std::collections::HashSet;

use sitesearch_core::normalize;

use crate::frame::frame_numbers_normalized;

pub const EXACT_SCORE: f64 = 1.0;
pub const FRAME_SCORE: f64 = 0.9;
pub const CONTAINMENT_SCORE: f64 = 0.8;
pub const WORD_OVERLAP_WEIGHT: f64 = 0.6;
pub const CHAR_OVERLAP_WEIGHT: f64 = 0.4;

/// Which tier decided a similarity score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimilarityTier {
    Exact,
    Frame,
    Containment,
    WordOverlap(f64),
    CharOverlap(f64),
}

impl SimilarityTier {
    pub fn score(self) -> f64 {
        match self {
            SimilarityTier::Exact => EXACT_SCORE,
            SimilarityTier::Frame => FRAME_SCORE,
            SimilarityTier::Containment => CONTAINMENT_SCORE,
            SimilarityTier::WordOverlap(s) | SimilarityTier::CharOverlap(s) => s,
        }
    }
}

/// Similarity of `a` and `b` in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_tier(a, b).score()
}

/// Run the tiers and report which one fired.
pub fn similarity_tier(a: &str, b: &str) -> SimilarityTier {
    let sa = normalize(a);
    let sb = normalize(b);
    let both = !sa.is_empty() && !sb.is_empty();

    if both && sa == sb {
        return SimilarityTier::Exact;
    }

    if shares_frame_number(&sa, &sb) {
        return SimilarityTier::Frame;
    }

    if both && (sa.contains(sb.as_str()) || sb.contains(sa.as_str())) {
        return SimilarityTier::Containment;
    }

    let words_a: Vec<&str> = sa.split_whitespace().collect();
    let words_b: Vec<&str> = sb.split_whitespace().collect();
    let set_b: HashSet<&str> = words_b.iter().copied().collect();
    let common = words_a.iter().filter(|w| set_b.contains(*w)).count();
    if common > 0 {
        let longest = words_a.len().max(words_b.len());
        return SimilarityTier::WordOverlap(WORD_OVERLAP_WEIGHT * ratio(common, longest));
    }

    SimilarityTier::CharOverlap(char_overlap(&sa, &sb))
}

fn shares_frame_number(sa: &str, sb: &str) -> bool {
    let frames_a = frame_numbers_normalized(sa);
    if frames_a.is_empty() {
        return false;
    }
    let frames_b = frame_numbers_normalized(sb);
    frames_a.iter().any(|n| frames_b.contains(n))
}

fn char_overlap(sa: &str, sb: &str) -> f64 {
    if sa.is_empty() || sb.is_empty() {
        return 0.0;
    }
    // Normalized text is ASCII, so bytes are characters.
    let matches = sa.bytes().zip(sb.bytes()).filter(|(x, y)| x == y).count();
    CHAR_OVERLAP_WEIGHT * ratio(matches, sa.len().max(sb.len()))
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

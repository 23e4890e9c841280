//! Match Locator: scans a longer field for the query and yields scored
//! snippets for highlighting.

use sitesearch_core::normalize;

use crate::frame::{frame_numbers, frame_numbers_normalized, locate_frame};
use crate::similarity::{similarity, FRAME_SCORE};

/// Minimum word similarity for a general-path match.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// Words on each side of a frame match.
const FRAME_RADIUS: usize = 3;

/// Words on each side of a general match.
const CONTEXT_RADIUS: usize = 2;

/// One located occurrence: the snippet around it and how well it matched.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedMatch {
    pub text: String,
    pub score: f64,
}

/// Lazy sequence of matches of a query inside a text.
///
/// Frame-number matches come first, then word matches in text-scan order
/// (outer loop over text words, inner over query words). Clone it to restart.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    words: Vec<&'a str>,
    query_words: Vec<String>,
    frames: std::vec::IntoIter<LocatedMatch>,
    word: usize,
    query_word: usize,
}

/// Find the query inside `text`.
///
/// Snippets are cut from the original text so case and punctuation survive;
/// comparisons use normalized forms. Duplicate snippets are kept.
pub fn find_matches<'a>(text: &'a str, query: &str) -> Matches<'a> {
    let words: Vec<&'a str> = text.split_whitespace().collect();
    let normalized_query = normalize(query);
    let query_words: Vec<String> = normalized_query.split_whitespace().map(str::to_string).collect();
    let frames = frame_matches(&words, &normalized_query, text);
    Matches { words, query_words, frames: frames.into_iter(), word: 0, query_word: 0 }
}

fn frame_matches(words: &[&str], normalized_query: &str, text: &str) -> Vec<LocatedMatch> {
    let wanted = frame_numbers_normalized(normalized_query);
    if wanted.is_empty() {
        return Vec::new();
    }
    let present = frame_numbers(text);
    wanted
        .iter()
        .filter(|n| present.contains(*n))
        .map(|n| {
            let at = locate_frame(words, n).unwrap_or(0);
            LocatedMatch { text: window(words, at, FRAME_RADIUS), score: FRAME_SCORE }
        })
        .collect()
}

fn window(words: &[&str], at: usize, radius: usize) -> String {
    let start = at.saturating_sub(radius);
    let end = (at + radius + 1).min(words.len());
    words[start..end].join(" ")
}

impl Iterator for Matches<'_> {
    type Item = LocatedMatch;

    fn next(&mut self) -> Option<LocatedMatch> {
        if let Some(frame) = self.frames.next() {
            return Some(frame);
        }
        while self.word < self.words.len() {
            while self.query_word < self.query_words.len() {
                let word = self.words[self.word];
                let score = similarity(word, &self.query_words[self.query_word]);
                self.query_word += 1;
                if score > MATCH_THRESHOLD {
                    return Some(LocatedMatch {
                        text: window(&self.words, self.word, CONTEXT_RADIUS),
                        score,
                    });
                }
            }
            self.query_word = 0;
            self.word += 1;
        }
        None
    }
}

impl std::iter::FusedIterator for Matches<'_> {}

//! "frame N" tokens: gallery and project identifiers embed frame numbers that
//! must outrank generic text overlap.

use std::sync::LazyLock;

use regex::Regex;
use sitesearch_core::normalize;

static FRAME_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"frame\s*(\d+)").ok());

/// Frame numbers in already-normalized text, deduplicated in first-seen order.
pub(crate) fn frame_numbers_normalized(normalized: &str) -> Vec<String> {
    let Some(re) = FRAME_RE.as_ref() else {
        return Vec::new();
    };
    let mut numbers: Vec<String> = Vec::new();
    for caps in re.captures_iter(normalized) {
        if let Some(n) = caps.get(1) {
            if !numbers.iter().any(|seen| seen == n.as_str()) {
                numbers.push(n.as_str().to_string());
            }
        }
    }
    numbers
}

/// Digit strings of every `frame <digits>` occurrence in `text`.
///
/// Matching is case-insensitive and tolerant of whitespace or punctuation
/// between the word and the number (`Frame 12`, `frame12`, `frame-12`).
pub fn frame_numbers(text: &str) -> Vec<String> {
    frame_numbers_normalized(&normalize(text))
}

/// Index of the raw word where the token for frame `number` starts.
///
/// The words are normalized and joined exactly as [`frame_numbers`] sees the
/// text, and the match offset is mapped back to the raw word it falls in.
/// Words that normalize to nothing (`-`, `#`) are skipped.
pub(crate) fn locate_frame(words: &[&str], number: &str) -> Option<usize> {
    let re = FRAME_RE.as_ref()?;
    let mut joined = String::new();
    let mut starts: Vec<(usize, usize)> = Vec::with_capacity(words.len());
    for (index, word) in words.iter().enumerate() {
        let norm = normalize(word);
        if norm.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        starts.push((joined.len(), index));
        joined.push_str(&norm);
    }
    let offset = re
        .captures_iter(&joined)
        .find(|caps| caps.get(1).is_some_and(|n| n.as_str() == number))?
        .get(0)?
        .start();
    starts.iter().rev().find(|(start, _)| *start <= offset).map(|&(_, index)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_spaced_and_joined_forms() {
        assert_eq!(frame_numbers("Frame 12 closeup"), ["12"]);
        assert_eq!(frame_numbers("Scene frame12 wide, FRAME-7 and frame 12"), ["12", "7"]);
        assert!(frame_numbers("framed picture").is_empty());
    }

    #[test]
    fn locates_frame_token_start() {
        let words = ["Wide", "shot", "of", "Frame", "12,", "night"];
        assert_eq!(locate_frame(&words, "12"), Some(3));
        let joined = ["render", "frame12.png"];
        assert_eq!(locate_frame(&joined, "12"), Some(1));
        assert_eq!(locate_frame(&joined, "3"), None);
    }

    #[test]
    fn locates_frame_across_punctuation_words() {
        let words = ["intro", "words", "then", "Frame", "-", "12", "shot"];
        assert_eq!(locate_frame(&words, "12"), Some(3));
        let leading = ["--", "frame", "#", "#", "7"];
        assert_eq!(locate_frame(&leading, "7"), Some(1));
    }
}

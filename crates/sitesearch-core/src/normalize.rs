//! Text canonicalization shared by every comparison in the engine.

/// Canonicalize `text` for comparison.
///
/// Lowercases, keeps only `[a-z0-9]` and whitespace, collapses whitespace runs
/// to a single space and trims both ends. `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A query prepared once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    normalized: String,
    words: Vec<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        let words = normalized.split_whitespace().map(str::to_string).collect();
        Self { raw, normalized, words }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True when nothing searchable survives normalization.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

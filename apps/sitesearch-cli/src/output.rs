//! Output formatting for search results.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use serde::Serialize;
use sitesearch_core::types::ContentKind;
use sitesearch_rank::SearchHit;

/// Maximum characters to show for a description or snippet.
const SNIPPET_MAX_LEN: usize = 160;

/// JSON output structure for search results
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub query: &'a str,
    pub results: &'a [SearchHit],
}

/// Formats search results as JSON.
pub fn format_json(query: &str, hits: &[SearchHit]) -> String {
    let output = JsonOutput { query, results: hits };
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Formats search results for human-readable terminal output.
pub fn format_human(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No results found for \"{}\"", query);
    }

    let mut output = format!(
        "Found {} result{} for \"{}\":\n\n",
        hits.len(),
        if hits.len() == 1 { "" } else { "s" },
        query
    );

    for (i, hit) in hits.iter().enumerate() {
        output.push_str(&format!("{}. {} [{}] (relevance: {:.2})\n", i + 1, hit.title, hit.kind, hit.relevance));
        output.push_str(&format!("   {}\n", hit.url));
        if let Some(ref category) = hit.category {
            output.push_str(&format!("   Category: {}\n", category));
        }
        if !hit.description.trim().is_empty() {
            output.push_str(&format!("   {}\n", truncate_text(&hit.description, SNIPPET_MAX_LEN)));
        }
        for m in &hit.matches {
            output.push_str(&format!(
                "   - {:?} ({:.2}): {}\n",
                m.field,
                m.score,
                truncate_text(&m.text, SNIPPET_MAX_LEN)
            ));
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Per-kind item counts, in catalog order.
pub fn format_catalog_summary(counts: &[(ContentKind, usize)]) -> String {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let mut output = format!("{} searchable items\n", total);
    for (kind, count) in counts {
        output.push_str(&format!("  {:<8} {}\n", kind.collection_name(), count));
    }
    output.trim_end().to_string()
}

/// Truncates text to a maximum length, adding ellipsis if needed.
fn truncate_text(text: &str, max_len: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_len).collect();
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}

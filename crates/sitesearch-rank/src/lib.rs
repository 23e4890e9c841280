//! sitesearch-rank
//!
//! Scores catalog items against a query with a selectable strategy, ranks
//! them and shapes the hits returned to the host. See [`SearchEngine`] for
//! the one-call entry point.

pub mod engine;
pub mod ranker;
pub mod results;

pub use engine::{SearchEngine, SearchRequest};
pub use ranker::{EvidenceRanker, LexicalRanker, Ranker};
pub use results::{build_hits, rank, HitMatch, SearchHit};

//! sitesearch-text
//!
//! String-level matching primitives: the tiered similarity scorer, frame-number
//! extraction and the match locator that turns a long field into scored
//! snippets. Callers own the catalog and the ranking.

pub mod frame;
pub mod locate;
pub mod similarity;

pub use frame::frame_numbers;
pub use locate::{find_matches, LocatedMatch, Matches};
pub use similarity::{similarity, similarity_tier, SimilarityTier};

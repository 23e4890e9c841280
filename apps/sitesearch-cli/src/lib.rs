//! Command-line host for the site search engine: loads a catalog from disk,
//! runs queries and keeps a short search history.

pub mod history;
pub mod output;

pub use history::{RecentSearches, MAX_RECENT};

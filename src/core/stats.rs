use serde::{Serialize, Deserialize};
use crate::core::types::ArticleId;

/// Point-in-time counters for the store and index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseStats {
    pub total_articles: usize,
    pub total_terms: usize,
    pub next_id: ArticleId,
}

use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use crate::core::types::{Article, ArticleId};
use crate::index::inverted::InvertedIndex;
use crate::query::types::{SearchParams, SortBy};
use crate::scoring::scorer::{FrequencyScorer, Scorer};
use crate::storage::article_store::ArticleStore;

/// Runs searches against a store and its index. Read-only.
pub struct QueryExecutor {
    pub scorer: Box<dyn Scorer>,
}

impl Default for QueryExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryExecutor {
    pub fn new() -> Self {
        QueryExecutor {
            scorer: Box::new(FrequencyScorer),
        }
    }

    /// keyword lookup -> tag filter -> sort.
    ///
    /// Without a keyword the result is empty, even when a tag is given.
    pub fn execute(
        &self,
        store: &ArticleStore,
        index: &InvertedIndex,
        params: &SearchParams,
    ) -> Vec<Arc<Article>> {
        let keyword = params.effective_keyword();

        let mut results = match keyword {
            Some(keyword) => self.execute_keyword(store, index, keyword),
            None => Vec::new(),
        };

        if let Some(tag) = params.effective_tag() {
            results.retain(|article| article.has_tag(tag));
        }

        match (&params.sort_by, keyword) {
            (Some(SortBy::Relevance), Some(keyword)) => self.sort_by_relevance(&mut results, keyword),
            (Some(SortBy::Date), _) => Self::sort_by_date(&mut results),
            _ => {}
        }

        debug!(
            keyword = ?keyword,
            tag = ?params.effective_tag(),
            sort_by = ?params.sort_by.as_ref().map(SortBy::as_str),
            hits = results.len(),
            "Executed search"
        );
        results
    }

    fn execute_keyword(
        &self,
        store: &ArticleStore,
        index: &InvertedIndex,
        keyword: &str,
    ) -> Vec<Arc<Article>> {
        let candidates: HashSet<ArticleId> = index
            .lookup(&keyword.to_lowercase())
            .iter()
            .copied()
            .collect();

        if candidates.is_empty() {
            return Vec::new();
        }

        store
            .all()
            .iter()
            .filter(|article| candidates.contains(&article.id))
            .cloned()
            .collect()
    }

    fn sort_by_relevance(&self, results: &mut [Arc<Article>], keyword: &str) {
        // sort_by_cached_key is stable
        results.sort_by_cached_key(|article| Reverse(self.scorer.score(article, keyword)));
    }

    fn sort_by_date(results: &mut [Arc<Article>]) {
        results.sort_by_key(|article| Reverse(article.created_at));
    }
}

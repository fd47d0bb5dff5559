use crate::core::types::Article;

/// Scorer trait
pub trait Scorer: Send + Sync {
    fn score(&self, article: &Article, keyword: &str) -> u32;

    fn name(&self) -> &str;
}

/// Counts literal, case-insensitive keyword occurrences in title + content.
///
/// Occurrences are non-overlapping and counted left to right, so `"aa"` in
/// `"aaa"` scores 1. The keyword is never interpreted as a pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyScorer;

impl FrequencyScorer {
    fn count(haystack: &str, needle: &str) -> u32 {
        if needle.is_empty() {
            return 0;
        }
        haystack.to_lowercase().matches(needle).count() as u32
    }
}

impl Scorer for FrequencyScorer {
    fn score(&self, article: &Article, keyword: &str) -> u32 {
        let needle = keyword.to_lowercase();
        Self::count(&article.title, &needle) + Self::count(&article.content, &needle)
    }

    fn name(&self) -> &str {
        "frequency"
    }
}

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::core::types::{Article, ArticleId};
use crate::index::posting::PostingList;

/// Term representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(String);

impl Term {
    pub fn new(text: &str) -> Self {
        Term(text.to_string())
    }
}

/// Inverted index structure: normalized token -> ids of the articles whose
/// content contains it.
pub struct InvertedIndex {
    pub postings: HashMap<Term, PostingList>,
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for InvertedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            tokenizer: Box::new(WordTokenizer),
        }
    }

    /// Index every distinct token of `content` under `article_id`.
    pub fn add(&mut self, article_id: ArticleId, content: &str) {
        let mut seen: HashSet<String> = HashSet::new();

        for token in self.tokenizer.tokenize(content) {
            if !seen.insert(token.clone()) {
                continue;
            }
            self.postings
                .entry(Term(token))
                .or_default()
                .add(article_id);
        }
    }

    /// Exact-token lookup. The caller is responsible for lowercasing.
    pub fn lookup(&self, token: &str) -> &[ArticleId] {
        self.postings
            .get(&Term::new(token))
            .map(PostingList::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, token: &str, article_id: ArticleId) -> bool {
        self.postings
            .get(&Term::new(token))
            .is_some_and(|list| list.contains(article_id))
    }

    pub fn clear(&mut self) {
        self.postings.clear();
    }

    /// Clear, then index every article's content in the given order
    pub fn rebuild(&mut self, articles: &[Arc<Article>]) {
        self.clear();
        for article in articles {
            self.add(article.id, &article.content);
        }
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn tokenizer_name(&self) -> &str {
        self.tokenizer.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut index = InvertedIndex::new();
        index.add(ArticleId(1), "Rust is fast");
        index.add(ArticleId(2), "Go is simple");

        assert_eq!(index.lookup("is"), &[ArticleId(1), ArticleId(2)]);
        assert_eq!(index.lookup("rust"), &[ArticleId(1)]);
        assert!(index.lookup("python").is_empty());
    }

    #[test]
    fn test_lookup_is_exact_and_expects_lowercase() {
        let mut index = InvertedIndex::new();
        index.add(ArticleId(1), "Rust");

        assert_eq!(index.lookup("rust"), &[ArticleId(1)]);
        assert!(index.lookup("Rust").is_empty());
        assert!(index.lookup("rus").is_empty());
    }

    #[test]
    fn test_repeated_word_contributes_id_once() {
        let mut index = InvertedIndex::new();
        index.add(ArticleId(1), "cat cat CAT Cat");

        assert_eq!(index.lookup("cat"), &[ArticleId(1)]);
        assert_eq!(index.term_count(), 1);
    }

    #[test]
    fn test_re_adding_same_article_is_idempotent() {
        let mut index = InvertedIndex::new();
        index.add(ArticleId(1), "hello world");
        index.add(ArticleId(1), "hello world");

        assert_eq!(index.lookup("hello"), &[ArticleId(1)]);
    }

    #[test]
    fn test_empty_content_indexes_empty_token() {
        let mut index = InvertedIndex::new();
        index.add(ArticleId(1), "");

        assert_eq!(index.lookup(""), &[ArticleId(1)]);
        assert_eq!(index.term_count(), 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut index = InvertedIndex::new();
        index.add(ArticleId(1), "a b c");
        index.clear();

        assert_eq!(index.term_count(), 0);
        assert!(index.lookup("a").is_empty());
        assert!(!index.contains("a", ArticleId(1)));
    }

    #[test]
    fn test_rebuild_drops_previous_entries() {
        let mut index = InvertedIndex::new();
        index.add(ArticleId(1), "old words");

        let article = Arc::new(Article {
            id: ArticleId(2),
            title: String::new(),
            content: "new words".to_string(),
            tags: None,
            created_at: chrono::Utc::now(),
        });
        index.rebuild(&[article]);

        assert!(index.lookup("old").is_empty());
        assert_eq!(index.lookup("words"), &[ArticleId(2)]);
    }
}

use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use crate::core::types::{Article, ArticleId, NewArticle};

/// Owns every article in creation order.
///
/// Ids start at 1 and only move forward. Creation timestamps are strictly
/// increasing within one store.
pub struct ArticleStore {
    articles: Vec<Arc<Article>>,
    positions: HashMap<ArticleId, usize>,
    next_id: ArticleId,
    last_created: Option<DateTime<Utc>>,
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore {
    pub fn new() -> Self {
        ArticleStore {
            articles: Vec::new(),
            positions: HashMap::new(),
            next_id: ArticleId(1),
            last_created: None,
        }
    }

    /// Empty store that keeps this one's id counter and last timestamp
    pub fn successor(&self) -> Self {
        ArticleStore {
            next_id: self.next_id,
            last_created: self.last_created,
            ..ArticleStore::new()
        }
    }

    pub fn create(&mut self, new: NewArticle, now: DateTime<Utc>) -> Arc<Article> {
        let id = self.next_id;
        self.next_id = id.next();

        let created_at = match self.last_created {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created = Some(created_at);

        let article = Arc::new(Article {
            id,
            title: new.title.unwrap_or_default(),
            content: new.content.unwrap_or_default(),
            tags: new.tags,
            created_at,
        });

        self.positions.insert(id, self.articles.len());
        self.articles.push(article.clone());
        article
    }

    pub fn get(&self, id: ArticleId) -> Option<Arc<Article>> {
        self.positions.get(&id).map(|&pos| self.articles[pos].clone())
    }

    /// Swap in a new set of records, keeping their order.
    ///
    /// The id counter never moves backwards: it resumes from the larger of
    /// its current value and the highest imported id + 1.
    pub fn replace_all(&mut self, records: Vec<Article>) {
        self.articles.clear();
        self.positions.clear();

        let mut max_id = None;
        let mut latest = None;
        for article in records {
            max_id = max_id.max(Some(article.id));
            latest = latest.max(Some(article.created_at));
            // First occurrence wins for lookups when a snapshot repeats an id
            self.positions.entry(article.id).or_insert(self.articles.len());
            self.articles.push(Arc::new(article));
        }

        if let Some(max_id) = max_id {
            self.next_id = self.next_id.max(max_id.next());
        }
        self.last_created = self.last_created.max(latest);
    }

    pub fn all(&self) -> &[Arc<Article>] {
        &self.articles
    }

    pub fn next_id(&self) -> ArticleId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

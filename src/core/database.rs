use std::sync::Arc;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info};
use crate::core::error::{Error, Result};
use crate::core::stats::DatabaseStats;
use crate::core::types::{Article, ArticleId, NewArticle};
use crate::index::inverted::InvertedIndex;
use crate::query::types::SearchParams;
use crate::search::executor::QueryExecutor;
use crate::storage::article_store::ArticleStore;
use crate::storage::layout::StorageLayout;
use crate::storage::snapshot::Snapshot;

/// Store and index always change together under one lock
struct Inner {
    store: ArticleStore,
    index: InvertedIndex,
}

impl Inner {
    /// Index built from scratch over `store`
    fn rebuilt(store: ArticleStore) -> Self {
        let mut index = InvertedIndex::new();
        index.rebuild(store.all());
        Inner { store, index }
    }
}

/// Single owner of all articles and their index.
///
/// Writers (`create_article`, `import_snapshot`) hold the write lock for the
/// whole store+index update, so readers never see one without the other.
pub struct Database {
    inner: RwLock<Inner>,
    executor: QueryExecutor,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    pub fn new() -> Self {
        let index = InvertedIndex::new();
        debug!(tokenizer = index.tokenizer_name(), "Opened in-memory article database");

        Database {
            inner: RwLock::new(Inner {
                store: ArticleStore::new(),
                index,
            }),
            executor: QueryExecutor::new(),
        }
    }

    pub fn create_article(&self, new: NewArticle) -> Arc<Article> {
        let mut inner = self.inner.write();
        let article = inner.store.create(new, Utc::now());
        inner.index.add(article.id, &article.content);

        debug!(id = %article.id, "Created article");
        article
    }

    pub fn get_article(&self, id: ArticleId) -> Result<Arc<Article>> {
        self.inner
            .read()
            .store
            .get(id)
            .ok_or_else(|| Error::not_found(format!("Article {} not found", id)))
    }

    pub fn search_articles(&self, params: &SearchParams) -> Vec<Arc<Article>> {
        let inner = self.inner.read();
        self.executor.execute(&inner.store, &inner.index, params)
    }

    /// Every article in creation order
    pub fn export_snapshot(&self) -> Vec<Article> {
        self.inner
            .read()
            .store
            .all()
            .iter()
            .map(|article| Article::clone(article))
            .collect()
    }

    /// Replace all articles and rebuild the index from scratch.
    ///
    /// The replacement store and index are built aside and swapped in whole.
    pub fn import_snapshot(&self, articles: Vec<Article>) {
        let count = articles.len();
        let mut inner = self.inner.write();

        let mut store = inner.store.successor();
        store.replace_all(articles);
        *inner = Inner::rebuilt(store);

        info!(
            articles = count,
            terms = inner.index.term_count(),
            next_id = %inner.store.next_id(),
            "Imported snapshot"
        );
    }

    pub fn save_snapshot(&self, storage: &StorageLayout) -> Result<usize> {
        let articles = self.export_snapshot();
        Snapshot::save(storage, &articles)?;

        info!(articles = articles.len(), "Saved snapshot");
        Ok(articles.len())
    }

    pub fn load_snapshot(&self, storage: &StorageLayout) -> Result<usize> {
        let articles = Snapshot::load(storage)?;
        let count = articles.len();
        self.import_snapshot(articles);
        Ok(count)
    }

    pub fn stats(&self) -> DatabaseStats {
        let inner = self.inner.read();
        DatabaseStats {
            total_articles: inner.store.len(),
            total_terms: inner.index.term_count(),
            next_id: inner.store.next_id(),
        }
    }
}

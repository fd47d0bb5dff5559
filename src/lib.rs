pub mod core;
pub mod storage;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;
pub mod query;
pub mod api;

pub use crate::core::database::Database;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{Article, ArticleId, NewArticle};
pub use crate::query::types::{SearchParams, SortBy};

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                         ARTICLEDB STRUCT ARCHITECTURE                        │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── API LAYER ───────────────────────────────────┐
│  create_router(AppState { db: Arc<Database>, storage: StorageLayout })       │
│  POST /articles   GET /articles/search   GET /articles/:id                   │
│  POST /save       POST /load                                                 │
└──────────────────────────────────────────────────────────────────────────────┘
                                      │
┌──────────────────────────────── CORE LAYER ──────────────────────────────────┐
│  struct Database                                                             │
│  • inner: RwLock<Inner { store: ArticleStore, index: InvertedIndex }>        │
│  • executor: QueryExecutor                                                   │
│                                                                              │
│  create_article ── write lock ── store.create + index.add                    │
│  import_snapshot ─ write lock ── store.replace_all + index rebuild           │
│  get_article / search_articles / export_snapshot ── read lock                │
└──────────────────────────────────────────────────────────────────────────────┘
                                      │
┌───────────────────────────── INDEXING / SEARCH ──────────────────────────────┐
│  WordTokenizer      split on [^0-9A-Za-z_]+, lowercase, lazy                 │
│  InvertedIndex      HashMap<Term, PostingList>  (ids deduped, in order)      │
│  QueryExecutor      keyword lookup → tag filter → relevance | date sort      │
│  FrequencyScorer    literal case-insensitive occurrences in title+content    │
└──────────────────────────────────────────────────────────────────────────────┘
                                      │
┌──────────────────────────────── STORAGE ─────────────────────────────────────┐
│  ArticleStore       Vec<Arc<Article>> + id → position, monotonic ids         │
│  Snapshot           <data_dir>/articles.json, JSON array                     │
└──────────────────────────────────────────────────────────────────────────────┘
*/

pub mod article_store;
pub mod layout;
pub mod snapshot;

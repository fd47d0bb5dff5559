use crate::core::types::ArticleId;

/// Posting list for a term
/// Note: kept in insertion order, each id at most once
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    pub ids: Vec<ArticleId>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            ids: Vec::new(),
        }
    }

    /// Returns false when the id was already present
    pub fn add(&mut self, id: ArticleId) -> bool {
        // Ids are handed out in increasing order: anything above the last
        // entry cannot be a duplicate
        if self.ids.last().is_none_or(|last| *last < id) {
            self.ids.push(id);
            return true;
        }
        // Out-of-order ids only come from imported snapshots
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        self.ids.contains(&id)
    }

    pub fn as_slice(&self) -> &[ArticleId] {
        &self.ids
    }
}

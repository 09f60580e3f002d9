use serde::{Deserialize, Serialize};

pub type CategoryId = u64;

/// Snapshot of a bookmark category as reported by its provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub annotation: String,
    pub description: String,
    pub tracks_count: usize,
    pub bookmarks_count: usize,
    pub from_catalog: bool,
}

impl Category {
    pub fn new(id: CategoryId, name: String) -> Self {
        Self {
            id,
            name,
            annotation: String::new(),
            description: String::new(),
            tracks_count: 0,
            bookmarks_count: 0,
            from_catalog: false,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.annotation.is_empty() || !self.description.is_empty()
    }
}

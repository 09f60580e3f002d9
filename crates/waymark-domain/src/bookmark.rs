use serde::{Deserialize, Serialize};

pub type BookmarkId = u64;

/// Rendering-ready bookmark record fetched from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub name: String,
    pub feature_type: String,
}

use serde::{Deserialize, Serialize};

use crate::bookmark::BookmarkId;
use crate::section::ItemKind;
use crate::track::TrackId;

/// A named run of ids produced by an external sort.
///
/// A block with no ids is invalid and must not reach the section layout;
/// ingestion prunes such blocks and deletion removes a block the moment its
/// last id goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedBlock {
    pub name: String,
    pub content: BlockContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockContent {
    Bookmarks(Vec<BookmarkId>),
    Tracks(Vec<TrackId>),
}

impl SortedBlock {
    pub fn bookmarks(name: String, ids: Vec<BookmarkId>) -> Self {
        Self {
            name,
            content: BlockContent::Bookmarks(ids),
        }
    }

    pub fn tracks(name: String, ids: Vec<TrackId>) -> Self {
        Self {
            name,
            content: BlockContent::Tracks(ids),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self.content {
            BlockContent::Bookmarks(_) => ItemKind::Bookmark,
            BlockContent::Tracks(_) => ItemKind::Track,
        }
    }

    /// Bookmark and track ids share one handle space, so both variants
    /// expose their run uniformly.
    pub fn ids(&self) -> &[u64] {
        match &self.content {
            BlockContent::Bookmarks(ids) => ids,
            BlockContent::Tracks(ids) => ids,
        }
    }

    pub(crate) fn ids_mut(&mut self) -> &mut Vec<u64> {
        match &mut self.content {
            BlockContent::Bookmarks(ids) => ids,
            BlockContent::Tracks(ids) => ids,
        }
    }

    pub fn len(&self) -> usize {
        self.ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }
}

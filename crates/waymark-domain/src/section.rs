use serde::{Deserialize, Serialize};

/// What the data rows of a section hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Description,
    Track,
    Bookmark,
}

/// View type of a single flat row, consumed by the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Header,
    Description,
    Track,
    Bookmark,
}

impl From<ItemKind> for RowKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Description => RowKind::Description,
            ItemKind::Track => RowKind::Track,
            ItemKind::Bookmark => RowKind::Bookmark,
        }
    }
}

/// Section heading. String lookup lives with the render layer, so the fixed
/// headings stay symbolic; block headings carry the block name through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionTitle {
    Description,
    Tracks,
    Bookmarks,
    Named(String),
}

use std::sync::Arc;

use tracing::{debug, warn};
use waymark_core::{DataSource, WaymarkError, WaymarkResult};

use crate::block::SortedBlock;
use crate::bookmark::{Bookmark, BookmarkId};
use crate::category::Category;
use crate::position::SectionPosition;
use crate::resolver;
use crate::section::{ItemKind, RowKind};
use crate::sections::{CategorySections, SearchSections, Sections, SortedSections};
use crate::store::MarkStore;
use crate::track::Track;

/// A fetched row record, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Bookmark(Bookmark),
    Track(Track),
}

/// Flat, render-ready view over one bookmark category.
///
/// Owns the active section layout and rebuilds it whenever the result mode
/// changes. All flat-index traffic from the render layer funnels through
/// here.
pub struct BookmarkList {
    source: Arc<dyn DataSource<Category>>,
    store: Arc<dyn MarkStore>,
    sections: Sections,
}

impl BookmarkList {
    pub fn new(source: Arc<dyn DataSource<Category>>, store: Arc<dyn MarkStore>) -> Self {
        let sections = Sections::Category(CategorySections::new(source.clone(), store.clone()));
        Self {
            source,
            store,
            sections,
        }
    }

    pub fn category(&self) -> Category {
        self.source.data()
    }

    /// Read access to the active layout, for title, editability and kind
    /// queries from the render layer.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn is_search_results(&self) -> bool {
        matches!(self.sections, Sections::Search(_))
    }

    /// Switch to a single flat section over `ids`, or revert to the plain
    /// category layout when `ids` is `None`. Any held sorted blocks are
    /// dropped with the outgoing layout.
    pub fn set_search_results(&mut self, ids: Option<Vec<BookmarkId>>) {
        match ids {
            Some(ids) => {
                debug!(results = ids.len(), "switching to search results");
                self.sections = Sections::Search(SearchSections::new(ids));
            }
            None => {
                if self.is_search_results() {
                    debug!("leaving search results");
                    self.rebuild_category();
                }
            }
        }
    }

    /// Switch to the sorted-block layout, or revert to the plain category
    /// layout when `blocks` is `None`. Any held search results are dropped
    /// with the outgoing layout. Empty blocks are invalid input and are
    /// pruned before they can reach the layout.
    pub fn set_sorted_results(&mut self, blocks: Option<Vec<SortedBlock>>) {
        match blocks {
            Some(blocks) => {
                let supplied = blocks.len();
                let blocks: Vec<SortedBlock> =
                    blocks.into_iter().filter(|block| !block.is_empty()).collect();
                if blocks.len() < supplied {
                    warn!(
                        dropped = supplied - blocks.len(),
                        "dropping empty sorted blocks"
                    );
                }
                debug!(blocks = blocks.len(), "switching to sorted results");
                self.sections =
                    Sections::Sorted(SortedSections::new(self.source.clone(), blocks));
            }
            None => {
                if matches!(self.sections, Sections::Sorted(_)) {
                    debug!("leaving sorted results");
                    self.rebuild_category();
                }
            }
        }
    }

    fn rebuild_category(&mut self) {
        self.sections = Sections::Category(CategorySections::new(
            self.source.clone(),
            self.store.clone(),
        ));
    }

    pub fn total_rows(&self) -> usize {
        resolver::total_rows(&self.sections)
    }

    pub fn position_of(&self, flat_index: usize) -> Option<SectionPosition> {
        resolver::position_of(&self.sections, flat_index)
    }

    /// View type of the row at `flat_index`, for render dispatch.
    pub fn row_kind_at(&self, flat_index: usize) -> WaymarkResult<RowKind> {
        let pos = self.resolve(flat_index)?;
        Ok(match pos.item_index {
            None => RowKind::Header,
            Some(_) => self.sections.item_kind(pos.section_index).into(),
        })
    }

    /// Remove the row at `flat_index` from the active layout.
    pub fn delete(&mut self, flat_index: usize) -> WaymarkResult<()> {
        let pos = self.resolve(flat_index)?;
        debug!(flat_index, section = pos.section_index, "deleting list item");
        self.sections.delete(pos)
    }

    /// Fetch the rendering-ready record behind `flat_index`. Header and
    /// description rows have no backing record.
    pub fn item_at(&self, flat_index: usize) -> WaymarkResult<ListEntry> {
        let pos = self.resolve(flat_index)?;
        if pos.is_header() {
            return Err(WaymarkError::InvalidCoordinate(format!(
                "row {flat_index} is a section header"
            )));
        }
        match self.sections.item_kind(pos.section_index) {
            ItemKind::Description => Err(WaymarkError::InvalidCoordinate(format!(
                "row {flat_index} is the category description"
            ))),
            ItemKind::Track => {
                let id = self.sections.track_id(pos)?;
                Ok(ListEntry::Track(self.store.track(id)?))
            }
            ItemKind::Bookmark => {
                let id = self.sections.bookmark_id(pos)?;
                Ok(ListEntry::Bookmark(self.store.bookmark(id)?))
            }
        }
    }

    fn resolve(&self, flat_index: usize) -> WaymarkResult<SectionPosition> {
        self.position_of(flat_index)
            .ok_or(WaymarkError::IndexNotFound(flat_index))
    }
}

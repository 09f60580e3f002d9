//! The three section layouts a category list can present.
//!
//! Exactly one layout is live at a time. Each variant owns whatever result
//! sequence its mode was built from, so replacing the layout drops the
//! previous mode's data with it.

use std::sync::Arc;

use waymark_core::{DataSource, WaymarkError, WaymarkResult};

use crate::block::SortedBlock;
use crate::bookmark::BookmarkId;
use crate::category::Category;
use crate::position::SectionPosition;
use crate::section::{ItemKind, SectionTitle};
use crate::store::MarkStore;
use crate::track::TrackId;

pub enum Sections {
    Category(CategorySections),
    Search(SearchSections),
    Sorted(SortedSections),
}

impl Sections {
    pub fn sections_count(&self) -> usize {
        match self {
            Sections::Category(s) => s.sections_count(),
            Sections::Search(s) => s.sections_count(),
            Sections::Sorted(s) => s.sections_count(),
        }
    }

    /// The description section is never editable, and a catalog-sourced
    /// category is not editable at all in plain mode.
    pub fn is_editable(&self, section_index: usize) -> bool {
        match self {
            Sections::Category(s) => s.is_editable(section_index),
            Sections::Search(s) => s.is_editable(section_index),
            Sections::Sorted(s) => s.is_editable(section_index),
        }
    }

    pub fn has_header(&self, section_index: usize) -> bool {
        match self {
            Sections::Category(s) => s.has_header(section_index),
            Sections::Search(s) => s.has_header(section_index),
            Sections::Sorted(s) => s.has_header(section_index),
        }
    }

    /// `None` exactly when the section has no header.
    pub fn title(&self, section_index: usize) -> Option<SectionTitle> {
        match self {
            Sections::Category(s) => s.title(section_index),
            Sections::Search(s) => s.title(section_index),
            Sections::Sorted(s) => s.title(section_index),
        }
    }

    pub fn item_count(&self, section_index: usize) -> usize {
        match self {
            Sections::Category(s) => s.item_count(section_index),
            Sections::Search(s) => s.item_count(section_index),
            Sections::Sorted(s) => s.item_count(section_index),
        }
    }

    pub fn item_kind(&self, section_index: usize) -> ItemKind {
        match self {
            Sections::Category(s) => s.item_kind(section_index),
            Sections::Search(s) => s.item_kind(section_index),
            Sections::Sorted(s) => s.item_kind(section_index),
        }
    }

    pub fn bookmark_id(&self, pos: SectionPosition) -> WaymarkResult<BookmarkId> {
        let item = self.resolvable_item(pos, ItemKind::Bookmark)?;
        match self {
            Sections::Category(s) => s.bookmark_id(item),
            Sections::Search(s) => Ok(s.id_at(item)),
            Sections::Sorted(s) => Ok(s.id_at(pos.section_index, item)),
        }
    }

    pub fn track_id(&self, pos: SectionPosition) -> WaymarkResult<TrackId> {
        let item = self.resolvable_item(pos, ItemKind::Track)?;
        match self {
            Sections::Category(s) => s.track_id(item),
            // The single search section holds bookmarks, so the kind check
            // above has already rejected every track query.
            Sections::Search(_) => unreachable!("search results hold no tracks"),
            Sections::Sorted(s) => Ok(s.id_at(pos.section_index, item)),
        }
    }

    /// Remove the addressed item and restore a self-consistent layout
    /// before returning: emptied blocks are pruned and section counts are
    /// re-derived.
    pub fn delete(&mut self, pos: SectionPosition) -> WaymarkResult<()> {
        let item = self.deletable_item(pos)?;
        match self {
            // The store owns plain-mode contents and has already shrunk by
            // the time this runs; only the layout needs re-deriving.
            Sections::Category(s) => {
                s.delete();
                Ok(())
            }
            Sections::Search(s) => s.delete(item),
            Sections::Sorted(s) => s.delete(pos.section_index, item),
        }
    }

    /// Validate a position for id resolution. The checks are uniform
    /// across all three layouts: a header row or an out-of-range address is
    /// a bad coordinate, and a section of the wrong kind is a kind
    /// mismatch. Neither is recoverable.
    fn resolvable_item(&self, pos: SectionPosition, requested: ItemKind) -> WaymarkResult<usize> {
        let item = self.addressed_item(pos)?;
        let actual = self.item_kind(pos.section_index);
        if actual != requested {
            return Err(WaymarkError::KindMismatch(format!(
                "section {} holds {:?} items, {:?} requested",
                pos.section_index, actual, requested
            )));
        }
        let items = self.item_count(pos.section_index);
        if item >= items {
            return Err(WaymarkError::InvalidCoordinate(format!(
                "item {} out of range in section {} ({} items)",
                item, pos.section_index, items
            )));
        }
        Ok(item)
    }

    /// Validate a position for deletion. The description section rejects
    /// deletion outright; item bounds are the owning layout's business,
    /// since in plain mode the live count has already moved on.
    fn deletable_item(&self, pos: SectionPosition) -> WaymarkResult<usize> {
        let item = self.addressed_item(pos)?;
        if self.item_kind(pos.section_index) == ItemKind::Description {
            return Err(WaymarkError::InvalidCoordinate(format!(
                "description section {} is not deletable",
                pos.section_index
            )));
        }
        Ok(item)
    }

    fn addressed_item(&self, pos: SectionPosition) -> WaymarkResult<usize> {
        let count = self.sections_count();
        if pos.section_index >= count {
            return Err(WaymarkError::InvalidCoordinate(format!(
                "section {} out of range ({} sections)",
                pos.section_index, count
            )));
        }
        pos.item_index.ok_or_else(|| {
            WaymarkError::InvalidCoordinate(format!(
                "header row of section {} addresses no item",
                pos.section_index
            ))
        })
    }
}

/// Sections derived from the category's own groupings: optional
/// description, then tracks, then bookmarks.
///
/// Only the index assignment is cached; item counts read the provider live,
/// and every delete re-derives the assignment because the counts may have
/// changed upstream.
pub struct CategorySections {
    source: Arc<dyn DataSource<Category>>,
    store: Arc<dyn MarkStore>,
    layout: CategoryLayout,
}

#[derive(Debug, Clone, Copy, Default)]
struct CategoryLayout {
    description: Option<usize>,
    tracks: Option<usize>,
    bookmarks: Option<usize>,
    count: usize,
}

impl CategoryLayout {
    fn derive(category: &Category) -> Self {
        let mut layout = CategoryLayout::default();
        if category.has_description() {
            layout.description = Some(layout.count);
            layout.count += 1;
        }
        if category.tracks_count > 0 {
            layout.tracks = Some(layout.count);
            layout.count += 1;
        }
        if category.bookmarks_count > 0 {
            layout.bookmarks = Some(layout.count);
            layout.count += 1;
        }
        layout
    }
}

enum CategorySlot {
    Description,
    Tracks,
    Bookmarks,
}

impl CategorySections {
    pub(crate) fn new(source: Arc<dyn DataSource<Category>>, store: Arc<dyn MarkStore>) -> Self {
        let layout = CategoryLayout::derive(&source.data());
        Self {
            source,
            store,
            layout,
        }
    }

    fn category(&self) -> Category {
        self.source.data()
    }

    fn slot(&self, section_index: usize) -> CategorySlot {
        if self.layout.description == Some(section_index) {
            CategorySlot::Description
        } else if self.layout.tracks == Some(section_index) {
            CategorySlot::Tracks
        } else if self.layout.bookmarks == Some(section_index) {
            CategorySlot::Bookmarks
        } else {
            panic!(
                "section index out of range: {} ({} sections)",
                section_index, self.layout.count
            );
        }
    }

    pub fn sections_count(&self) -> usize {
        self.layout.count
    }

    pub fn is_editable(&self, section_index: usize) -> bool {
        self.layout.description != Some(section_index) && !self.category().from_catalog
    }

    pub fn has_header(&self, _section_index: usize) -> bool {
        true
    }

    pub fn title(&self, section_index: usize) -> Option<SectionTitle> {
        match self.slot(section_index) {
            CategorySlot::Description => Some(SectionTitle::Description),
            CategorySlot::Tracks => Some(SectionTitle::Tracks),
            CategorySlot::Bookmarks => Some(SectionTitle::Bookmarks),
        }
    }

    pub fn item_count(&self, section_index: usize) -> usize {
        match self.slot(section_index) {
            CategorySlot::Description => 1,
            CategorySlot::Tracks => self.category().tracks_count,
            CategorySlot::Bookmarks => self.category().bookmarks_count,
        }
    }

    pub fn item_kind(&self, section_index: usize) -> ItemKind {
        match self.slot(section_index) {
            CategorySlot::Description => ItemKind::Description,
            CategorySlot::Tracks => ItemKind::Track,
            CategorySlot::Bookmarks => ItemKind::Bookmark,
        }
    }

    fn bookmark_id(&self, item: usize) -> WaymarkResult<BookmarkId> {
        self.store.bookmark_id_by_position(self.category().id, item)
    }

    fn track_id(&self, item: usize) -> WaymarkResult<TrackId> {
        self.store.track_id_by_position(self.category().id, item)
    }

    fn delete(&mut self) {
        // The store owns the category contents; by the time this runs the
        // counts may already differ from the cached assignment.
        self.layout = CategoryLayout::derive(&self.category());
    }
}

/// A single headerless, always-editable section over externally supplied
/// search result ids. The sequence may shrink to empty; the section then
/// contributes no rows but stays present.
pub struct SearchSections {
    ids: Vec<BookmarkId>,
}

impl SearchSections {
    pub(crate) fn new(ids: Vec<BookmarkId>) -> Self {
        Self { ids }
    }

    pub fn sections_count(&self) -> usize {
        1
    }

    pub fn is_editable(&self, _section_index: usize) -> bool {
        true
    }

    pub fn has_header(&self, _section_index: usize) -> bool {
        false
    }

    pub fn title(&self, _section_index: usize) -> Option<SectionTitle> {
        None
    }

    pub fn item_count(&self, _section_index: usize) -> usize {
        self.ids.len()
    }

    pub fn item_kind(&self, _section_index: usize) -> ItemKind {
        ItemKind::Bookmark
    }

    fn id_at(&self, item: usize) -> BookmarkId {
        self.ids[item]
    }

    fn delete(&mut self, item: usize) -> WaymarkResult<()> {
        if item >= self.ids.len() {
            return Err(WaymarkError::InvalidCoordinate(format!(
                "item {} out of range ({} search results)",
                item,
                self.ids.len()
            )));
        }
        self.ids.remove(item);
        Ok(())
    }
}

/// Sections over externally supplied sorted blocks, one per block in
/// supplier order, behind an optional leading description section.
pub struct SortedSections {
    source: Arc<dyn DataSource<Category>>,
    blocks: Vec<SortedBlock>,
}

impl SortedSections {
    pub(crate) fn new(source: Arc<dyn DataSource<Category>>, blocks: Vec<SortedBlock>) -> Self {
        Self { source, blocks }
    }

    fn has_description(&self) -> bool {
        self.source.data().has_description()
    }

    fn is_description(&self, section_index: usize) -> bool {
        self.has_description() && section_index == 0
    }

    fn block_index(&self, section_index: usize) -> usize {
        section_index - usize::from(self.has_description())
    }

    pub fn sections_count(&self) -> usize {
        self.blocks.len() + usize::from(self.has_description())
    }

    pub fn is_editable(&self, section_index: usize) -> bool {
        !self.is_description(section_index)
    }

    pub fn has_header(&self, _section_index: usize) -> bool {
        true
    }

    pub fn title(&self, section_index: usize) -> Option<SectionTitle> {
        if self.is_description(section_index) {
            return Some(SectionTitle::Description);
        }
        let block = &self.blocks[self.block_index(section_index)];
        Some(SectionTitle::Named(block.name.clone()))
    }

    pub fn item_count(&self, section_index: usize) -> usize {
        if self.is_description(section_index) {
            return 1;
        }
        self.blocks[self.block_index(section_index)].len()
    }

    pub fn item_kind(&self, section_index: usize) -> ItemKind {
        if self.is_description(section_index) {
            return ItemKind::Description;
        }
        self.blocks[self.block_index(section_index)].kind()
    }

    fn id_at(&self, section_index: usize, item: usize) -> u64 {
        self.blocks[self.block_index(section_index)].ids()[item]
    }

    fn delete(&mut self, section_index: usize, item: usize) -> WaymarkResult<()> {
        let block_index = self.block_index(section_index);
        let block = &mut self.blocks[block_index];
        if item >= block.len() {
            return Err(WaymarkError::InvalidCoordinate(format!(
                "item {} out of range in block {} ({} ids)",
                item,
                block.name,
                block.len()
            )));
        }
        block.ids_mut().remove(item);
        if block.is_empty() {
            self.blocks.remove(block_index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockMarkStore;
    use crate::testing::SharedCategory;
    use std::sync::Arc;

    fn described_category() -> SharedCategory {
        let mut category = Category::new(7, "Hiking".to_string());
        category.description = "Trips around the lake".to_string();
        SharedCategory::new(category)
    }

    fn plain_category(tracks: usize, bookmarks: usize) -> SharedCategory {
        let mut category = Category::new(7, "Hiking".to_string());
        category.tracks_count = tracks;
        category.bookmarks_count = bookmarks;
        SharedCategory::new(category)
    }

    fn category_sections(source: &SharedCategory, store: MockMarkStore) -> Sections {
        Sections::Category(CategorySections::new(
            Arc::new(source.clone()),
            Arc::new(store),
        ))
    }

    fn sorted_sections(source: &SharedCategory, blocks: Vec<SortedBlock>) -> Sections {
        Sections::Sorted(SortedSections::new(Arc::new(source.clone()), blocks))
    }

    // --- category layout ---

    #[test]
    fn bookmarks_only_category_has_one_section() {
        let sections = category_sections(&plain_category(0, 3), MockMarkStore::new());

        assert_eq!(sections.sections_count(), 1);
        assert!(sections.has_header(0));
        assert_eq!(sections.item_kind(0), ItemKind::Bookmark);
        assert_eq!(sections.item_count(0), 3);
        assert_eq!(sections.title(0), Some(SectionTitle::Bookmarks));
    }

    #[test]
    fn full_category_orders_description_tracks_bookmarks() {
        let source = described_category();
        source.update(|c| {
            c.tracks_count = 2;
            c.bookmarks_count = 5;
        });
        let sections = category_sections(&source, MockMarkStore::new());

        assert_eq!(sections.sections_count(), 3);
        assert_eq!(sections.item_kind(0), ItemKind::Description);
        assert_eq!(sections.item_kind(1), ItemKind::Track);
        assert_eq!(sections.item_kind(2), ItemKind::Bookmark);
        assert_eq!(sections.item_count(0), 1);
        assert_eq!(sections.item_count(1), 2);
        assert_eq!(sections.item_count(2), 5);
        assert_eq!(sections.title(1), Some(SectionTitle::Tracks));
    }

    #[test]
    fn description_section_is_not_editable() {
        let source = described_category();
        source.update(|c| c.bookmarks_count = 1);
        let sections = category_sections(&source, MockMarkStore::new());

        assert!(!sections.is_editable(0));
        assert!(sections.is_editable(1));
    }

    #[test]
    fn catalog_category_is_never_editable() {
        let source = plain_category(1, 1);
        source.update(|c| c.from_catalog = true);
        let sections = category_sections(&source, MockMarkStore::new());

        assert!(!sections.is_editable(0));
        assert!(!sections.is_editable(1));
    }

    #[test]
    fn category_ids_come_from_positional_lookups() {
        let mut store = MockMarkStore::new();
        store
            .expect_bookmark_id_by_position()
            .returning(|_, position| Ok(100 + position as u64));
        store
            .expect_track_id_by_position()
            .returning(|_, position| Ok(200 + position as u64));
        let sections = category_sections(&plain_category(2, 2), store);

        assert_eq!(
            sections.track_id(SectionPosition::item(0, 1)).unwrap(),
            201
        );
        assert_eq!(
            sections.bookmark_id(SectionPosition::item(1, 0)).unwrap(),
            100
        );
    }

    #[test]
    fn category_rejects_cross_kind_resolution() {
        let sections = category_sections(&plain_category(2, 2), MockMarkStore::new());

        let err = sections
            .bookmark_id(SectionPosition::item(0, 0))
            .unwrap_err();
        assert!(matches!(err, WaymarkError::KindMismatch(_)));

        let err = sections.track_id(SectionPosition::item(1, 0)).unwrap_err();
        assert!(matches!(err, WaymarkError::KindMismatch(_)));
    }

    #[test]
    fn category_delete_rederives_from_fresh_counts() {
        let source = plain_category(0, 1);
        let mut sections = category_sections(&source, MockMarkStore::new());
        assert_eq!(sections.sections_count(), 1);

        // The store already removed the last bookmark upstream.
        source.update(|c| c.bookmarks_count = 0);
        sections.delete(SectionPosition::item(0, 0)).unwrap();

        assert_eq!(sections.sections_count(), 0);
    }

    #[test]
    fn category_delete_rejects_description() {
        let source = described_category();
        source.update(|c| c.bookmarks_count = 2);
        let mut sections = category_sections(&source, MockMarkStore::new());

        let err = sections.delete(SectionPosition::item(0, 0)).unwrap_err();
        assert!(matches!(err, WaymarkError::InvalidCoordinate(_)));
    }

    // --- search layout ---

    #[test]
    fn search_has_single_headerless_section() {
        let sections = Sections::Search(SearchSections::new(vec![11, 12, 13]));

        assert_eq!(sections.sections_count(), 1);
        assert!(!sections.has_header(0));
        assert_eq!(sections.title(0), None);
        assert!(sections.is_editable(0));
        assert_eq!(sections.item_kind(0), ItemKind::Bookmark);
        assert_eq!(sections.item_count(0), 3);
    }

    #[test]
    fn search_resolves_ids_directly() {
        let sections = Sections::Search(SearchSections::new(vec![11, 12, 13]));

        assert_eq!(sections.bookmark_id(SectionPosition::item(0, 2)).unwrap(), 13);
    }

    #[test]
    fn search_rejects_track_queries() {
        let sections = Sections::Search(SearchSections::new(vec![11]));

        let err = sections.track_id(SectionPosition::item(0, 0)).unwrap_err();
        assert!(matches!(err, WaymarkError::KindMismatch(_)));
    }

    #[test]
    fn search_delete_shifts_later_items() {
        let mut sections = Sections::Search(SearchSections::new(vec![11, 12, 13]));

        sections.delete(SectionPosition::item(0, 0)).unwrap();

        assert_eq!(sections.item_count(0), 2);
        assert_eq!(sections.bookmark_id(SectionPosition::item(0, 0)).unwrap(), 12);
    }

    #[test]
    fn search_section_survives_becoming_empty() {
        let mut sections = Sections::Search(SearchSections::new(vec![11]));

        sections.delete(SectionPosition::item(0, 0)).unwrap();

        assert_eq!(sections.sections_count(), 1);
        assert_eq!(sections.item_count(0), 0);
    }

    // --- sorted layout ---

    #[test]
    fn sorted_offsets_blocks_behind_description() {
        let source = described_category();
        let sections = sorted_sections(
            &source,
            vec![
                SortedBlock::tracks("Ridge loop".to_string(), vec![31]),
                SortedBlock::bookmarks("Water".to_string(), vec![41, 42]),
            ],
        );

        assert_eq!(sections.sections_count(), 3);
        assert_eq!(sections.item_kind(0), ItemKind::Description);
        assert_eq!(sections.item_kind(1), ItemKind::Track);
        assert_eq!(sections.item_kind(2), ItemKind::Bookmark);
        assert_eq!(
            sections.title(1),
            Some(SectionTitle::Named("Ridge loop".to_string()))
        );
        assert_eq!(sections.item_count(2), 2);
        assert!(!sections.is_editable(0));
        assert!(sections.is_editable(1));
    }

    #[test]
    fn sorted_without_description_starts_at_blocks() {
        let source = plain_category(0, 0);
        let sections = sorted_sections(
            &source,
            vec![SortedBlock::bookmarks("Water".to_string(), vec![41, 42])],
        );

        assert_eq!(sections.sections_count(), 1);
        assert_eq!(sections.item_kind(0), ItemKind::Bookmark);
        assert_eq!(sections.bookmark_id(SectionPosition::item(0, 1)).unwrap(), 42);
    }

    #[test]
    fn sorted_rejects_kind_disagreement() {
        let source = plain_category(0, 0);
        let sections = sorted_sections(
            &source,
            vec![
                SortedBlock::bookmarks("Water".to_string(), vec![41]),
                SortedBlock::tracks("Ridge loop".to_string(), vec![31]),
            ],
        );

        let err = sections.track_id(SectionPosition::item(0, 0)).unwrap_err();
        assert!(matches!(err, WaymarkError::KindMismatch(_)));

        let err = sections
            .bookmark_id(SectionPosition::item(1, 0))
            .unwrap_err();
        assert!(matches!(err, WaymarkError::KindMismatch(_)));
    }

    #[test]
    fn sorted_delete_prunes_emptied_block() {
        let source = plain_category(0, 0);
        let mut sections = sorted_sections(
            &source,
            vec![
                SortedBlock::bookmarks("Water".to_string(), vec![41]),
                SortedBlock::tracks("Ridge loop".to_string(), vec![31, 32]),
            ],
        );
        assert_eq!(sections.sections_count(), 2);

        sections.delete(SectionPosition::item(0, 0)).unwrap();

        // The emptied block is gone and the track block renumbered down.
        assert_eq!(sections.sections_count(), 1);
        assert_eq!(sections.item_kind(0), ItemKind::Track);
        assert_eq!(sections.track_id(SectionPosition::item(0, 1)).unwrap(), 32);
    }

    #[test]
    fn sorted_delete_keeps_partial_block() {
        let source = plain_category(0, 0);
        let mut sections = sorted_sections(
            &source,
            vec![SortedBlock::bookmarks("Water".to_string(), vec![41, 42])],
        );

        sections.delete(SectionPosition::item(0, 0)).unwrap();

        assert_eq!(sections.sections_count(), 1);
        assert_eq!(sections.bookmark_id(SectionPosition::item(0, 0)).unwrap(), 42);
    }

    #[test]
    fn sorted_delete_rejects_description() {
        let source = described_category();
        let mut sections = sorted_sections(
            &source,
            vec![SortedBlock::bookmarks("Water".to_string(), vec![41])],
        );

        let err = sections.delete(SectionPosition::item(0, 0)).unwrap_err();
        assert!(matches!(err, WaymarkError::InvalidCoordinate(_)));
    }

    // --- shared address checks ---

    #[test]
    fn header_positions_resolve_to_nothing() {
        let mut sections = Sections::Search(SearchSections::new(vec![11]));

        let err = sections.bookmark_id(SectionPosition::header(0)).unwrap_err();
        assert!(matches!(err, WaymarkError::InvalidCoordinate(_)));

        let err = sections.delete(SectionPosition::header(0)).unwrap_err();
        assert!(matches!(err, WaymarkError::InvalidCoordinate(_)));
    }

    #[test]
    fn out_of_range_addresses_are_rejected() {
        let mut sections = Sections::Search(SearchSections::new(vec![11]));

        let err = sections
            .bookmark_id(SectionPosition::item(4, 0))
            .unwrap_err();
        assert!(matches!(err, WaymarkError::InvalidCoordinate(_)));

        let err = sections.delete(SectionPosition::item(0, 9)).unwrap_err();
        assert!(matches!(err, WaymarkError::InvalidCoordinate(_)));
    }
}

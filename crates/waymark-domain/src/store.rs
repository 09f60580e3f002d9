use waymark_core::WaymarkResult;

use crate::bookmark::{Bookmark, BookmarkId};
use crate::category::CategoryId;
use crate::track::{Track, TrackId};

/// Synchronous access to the backing store that owns category contents.
///
/// Category mode resolves ids positionally through this trait and never
/// stores them itself. The fetch calls serve only the row-record accessor,
/// not the indexing logic.
#[cfg_attr(test, mockall::automock)]
pub trait MarkStore {
    fn bookmark_id_by_position(
        &self,
        category: CategoryId,
        position: usize,
    ) -> WaymarkResult<BookmarkId>;

    fn track_id_by_position(
        &self,
        category: CategoryId,
        position: usize,
    ) -> WaymarkResult<TrackId>;

    fn bookmark(&self, id: BookmarkId) -> WaymarkResult<Bookmark>;

    fn track(&self, id: TrackId) -> WaymarkResult<Track>;
}

//! Flat-index arithmetic over the active sections.
//!
//! Total row count and index-to-position translation fold the same span
//! iterator, so the two derivations cannot drift apart.

use crate::position::SectionPosition;
use crate::sections::Sections;

struct Span {
    section_index: usize,
    has_header: bool,
    items: usize,
}

impl Span {
    fn rows(&self) -> usize {
        self.items + usize::from(self.has_header)
    }
}

/// Spans of the non-empty sections, in section order. An empty section
/// contributes no rows at all; its header is never shown.
fn spans(sections: &Sections) -> impl Iterator<Item = Span> + '_ {
    (0..sections.sections_count()).filter_map(|section_index| {
        let items = sections.item_count(section_index);
        if items == 0 {
            return None;
        }
        Some(Span {
            section_index,
            has_header: sections.has_header(section_index),
            items,
        })
    })
}

/// Total number of flat rows the layout renders to.
pub fn total_rows(sections: &Sections) -> usize {
    spans(sections).map(|span| span.rows()).sum()
}

/// Translate a flat index into a section position.
///
/// `None` means the index lies beyond every section. For an index obtained
/// against the current layout that is an accounting failure, and the caller
/// must fail loudly rather than clamp.
pub fn position_of(sections: &Sections, flat_index: usize) -> Option<SectionPosition> {
    let mut first_row = 0;
    for span in spans(sections) {
        if span.has_header && flat_index == first_row {
            return Some(SectionPosition::header(span.section_index));
        }
        if flat_index < first_row + span.rows() {
            let item = flat_index - first_row - usize::from(span.has_header);
            return Some(SectionPosition::item(span.section_index, item));
        }
        first_row += span.rows();
    }
    None
}

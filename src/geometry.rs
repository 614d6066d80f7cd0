use alloc::vec::Vec;

use crate::source::DataSource;
use crate::types::{CellIndex, Direction, Slot};

/// Cumulative-offset snapshot of one section.
///
/// `offsets[0]` is the section's top edge; `offsets[r + 1]` is the leading
/// edge of row `r`, so `offsets[1]` sits after the header plus one spacing
/// step when a header extent exists. Offsets are non-decreasing; the bottom
/// carries no trailing spacing. Boundary rule: an item's span is half-open,
/// `[leading edge, next boundary)`, and spacing is charged to the preceding
/// item.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionExtent {
    offsets: Vec<f32>,
    bottom: f32,
}

impl SectionExtent {
    fn build<D: DataSource>(source: &D, section: usize, top: f32) -> Self {
        let row_count = source.row_count(section);
        let header = source.header_extent(section);
        let spacing = source.spacing(section);

        let mut offsets = Vec::with_capacity(row_count + 1);
        offsets.push(top);

        let bottom = if row_count == 0 {
            top + header
        } else {
            // A zero-extent header collapses: row 0 starts at the section top.
            let lead = if header > 0.0 { header + spacing } else { 0.0 };
            offsets.push(top + lead);
            for row in 1..row_count {
                let prev = offsets[row];
                offsets.push(prev + source.row_extent(section, row - 1) + spacing);
            }
            offsets[row_count] + source.row_extent(section, row_count - 1)
        };

        Self { offsets, bottom }
    }

    pub fn top(&self) -> f32 {
        self.offsets[0]
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn row_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// A section is empty when it has no rows and no extent.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 && self.bottom <= self.top()
    }

    /// The cumulative offset at a boundary position (0 = header leading edge,
    /// `r + 1` = row `r`'s leading edge).
    pub fn offset(&self, position: usize) -> f32 {
        self.offsets[position]
    }

    /// Resolves an offset within `[top, bottom)` to the slot whose leading
    /// edge is the greatest boundary `<= offset`.
    fn slot_at(&self, offset: f32) -> Option<Slot> {
        if offset < self.top() || offset >= self.bottom {
            return None;
        }
        // Ties pick the highest boundary, so a zero-extent header resolves
        // past itself to row 0.
        let boundaries = self.offsets.partition_point(|&edge| edge <= offset);
        match boundaries {
            0 => None,
            1 => Some(Slot::Header),
            n => Some(Slot::Row(n - 2)),
        }
    }

    fn last_slot(&self) -> Slot {
        match self.row_count() {
            0 => Slot::Header,
            n => Slot::Row(n - 1),
        }
    }

    fn next_slot(&self, slot: Slot) -> Option<Slot> {
        match slot {
            Slot::Header => (self.row_count() > 0).then_some(Slot::Row(0)),
            Slot::Row(row) => (row + 1 < self.row_count()).then_some(Slot::Row(row + 1)),
        }
    }

    fn prev_slot(&self, slot: Slot) -> Option<Slot> {
        match slot {
            Slot::Header => None,
            Slot::Row(0) => Some(Slot::Header),
            Slot::Row(row) => Some(Slot::Row(row - 1)),
        }
    }
}

/// Immutable geometry snapshot of the whole table.
///
/// Built once per reload from the data source's current shape; any shape or
/// extent change requires a fresh build, never a patch. Sections are
/// contiguous: each section's top equals the previous section's bottom and
/// the first section starts at 0.
#[derive(Clone, Debug, PartialEq)]
pub struct TableExtent {
    sections: Vec<SectionExtent>,
    empty: bool,
}

impl TableExtent {
    /// Builds the snapshot by walking every section in order with a running
    /// top offset. O(total rows).
    pub fn build<D: DataSource>(source: &D) -> Self {
        let section_count = source.section_count();
        let mut sections = Vec::with_capacity(section_count);
        let mut empty = true;
        let mut top = 0.0;
        for section in 0..section_count {
            let extent = SectionExtent::build(source, section, top);
            top = extent.bottom();
            empty = empty && extent.is_empty();
            sections.push(extent);
        }
        tdebug!(
            sections = section_count,
            total = top,
            empty,
            "TableExtent::build"
        );
        Self { sections, empty }
    }

    /// Overall emptiness: true iff every section is empty (vacuously true for
    /// zero sections).
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, section: usize) -> &SectionExtent {
        &self.sections[section]
    }

    /// Total content extent along the scroll axis.
    pub fn total_extent(&self) -> f32 {
        self.sections.last().map_or(0.0, SectionExtent::bottom)
    }

    /// First index of the table, `(0, Header)`, or `None` without sections.
    pub fn first_index(&self) -> Option<CellIndex> {
        (!self.sections.is_empty()).then(|| CellIndex::header(0))
    }

    /// Last index of the table: the last section's last row, or its header
    /// when it has no rows.
    pub fn last_index(&self) -> Option<CellIndex> {
        let section = self.sections.len().checked_sub(1)?;
        Some(CellIndex {
            section,
            slot: self.sections[section].last_slot(),
        })
    }

    /// Resolves an offset to the section whose `[top, bottom)` span contains
    /// it. Zero-extent sections are skipped: ties on equal tops resolve to
    /// the highest section index, the first one with actual extent there.
    pub fn section_at(&self, offset: f32) -> Option<usize> {
        if offset < 0.0 || offset >= self.total_extent() {
            return None;
        }
        let below = self.sections.partition_point(|s| s.top() <= offset);
        below.checked_sub(1)
    }

    /// Resolves an offset to the index whose span contains it.
    pub fn cell_at(&self, offset: f32) -> Option<CellIndex> {
        let section = self.section_at(offset)?;
        let slot = self.sections[section].slot_at(offset)?;
        Some(CellIndex { section, slot })
    }

    /// Like [`Self::cell_at`], but snaps an out-of-range offset to the
    /// nearest boundary index instead of failing.
    pub fn cell_at_clamped(&self, offset: f32) -> Option<CellIndex> {
        if offset < 0.0 {
            return self.first_index();
        }
        if offset >= self.total_extent() {
            return self.last_index();
        }
        self.cell_at(offset)
    }

    /// Advances an index by one position in the total order, crossing section
    /// boundaries. Returns `None` at the first/last index of the table.
    ///
    /// Every section contributes a header position to the order, even when
    /// headerless; generation skips the ones the data source declines.
    pub fn advance(&self, index: CellIndex, direction: Direction) -> Option<CellIndex> {
        let section = &self.sections[index.section];
        match direction {
            Direction::Forward => match section.next_slot(index.slot) {
                Some(slot) => Some(CellIndex {
                    section: index.section,
                    slot,
                }),
                None => {
                    let next = index.section + 1;
                    (next < self.sections.len()).then(|| CellIndex::header(next))
                }
            },
            Direction::Backward => match section.prev_slot(index.slot) {
                Some(slot) => Some(CellIndex {
                    section: index.section,
                    slot,
                }),
                None => {
                    let prev = index.section.checked_sub(1)?;
                    Some(CellIndex {
                        section: prev,
                        slot: self.sections[prev].last_slot(),
                    })
                }
            },
        }
    }

    /// Resolves a viewport window to its inclusive index range, clamping each
    /// unresolvable edge to the nearest table boundary. Fails only when the
    /// table is empty or the window lies entirely outside the content.
    pub fn find_range(&self, start_offset: f32, end_offset: f32) -> Option<(CellIndex, CellIndex)> {
        if self.empty || end_offset < 0.0 || start_offset > self.total_extent() {
            return None;
        }
        let start = self.cell_at_clamped(start_offset)?;
        let end = self.cell_at_clamped(end_offset)?;
        Some((start, end))
    }

    /// The leading edge of a cell, used to place it on screen. Must match
    /// offset→index resolution exactly.
    pub fn leading_edge(&self, index: CellIndex) -> f32 {
        self.sections[index.section].offset(index.slot.position())
    }
}

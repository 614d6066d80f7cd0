use alloc::collections::VecDeque;

use crate::geometry::TableExtent;
use crate::pool::RecyclePool;
use crate::source::{DataSource, TableCell, Viewport};
use crate::types::{Axis, CellIndex, Direction, Slot, TableState};

/// Errors surfaced by [`Table`] operations.
///
/// Everything else in the failure taxonomy (empty results, unresolvable
/// viewport edges, non-recyclable cells) is recovered locally and never
/// reaches the caller.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// `reload` was called with no data source attached; no state changed.
    #[error("no data source attached")]
    MissingDataSource,
}

struct VisibleCell<C> {
    index: CellIndex,
    cell: C,
}

/// A virtualized, sectioned table.
///
/// Owns the geometry snapshot, the ordered sequence of visible cells, and
/// the recycle pool; consumes a [`DataSource`] and a [`Viewport`]. All
/// methods run synchronously to completion; callers serialize access on one
/// thread, typically the host UI event loop.
///
/// Call [`Table::reload`] after any data-source shape or extent change and
/// [`Table::on_scroll`] after every viewport offset change; a redundant
/// `on_scroll` with unchanged offsets is a no-op.
pub struct Table<D: DataSource, V: Viewport> {
    axis: Axis,
    source: Option<D>,
    viewport: V,
    extent: Option<TableExtent>,
    visible: VecDeque<VisibleCell<D::Cell>>,
    pool: RecyclePool<D::Cell>,
}

impl<D: DataSource, V: Viewport> Table<D, V> {
    pub fn new(axis: Axis, viewport: V) -> Self {
        Self {
            axis,
            source: None,
            viewport,
            extent: None,
            visible: VecDeque::new(),
            pool: RecyclePool::new(),
        }
    }

    pub fn with_source(axis: Axis, viewport: V, source: D) -> Self {
        let mut table = Self::new(axis, viewport);
        table.source = Some(source);
        table
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn set_data_source(&mut self, source: D) {
        self.source = Some(source);
    }

    pub fn take_data_source(&mut self) -> Option<D> {
        self.source.take()
    }

    pub fn data_source(&self) -> Option<&D> {
        self.source.as_ref()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// The current geometry snapshot, if a reload has produced one.
    pub fn extent(&self) -> Option<&TableExtent> {
        self.extent.as_ref()
    }

    pub fn pool(&self) -> &RecyclePool<D::Cell> {
        &self.pool
    }

    /// Derived lifecycle state.
    pub fn state(&self) -> TableState {
        match &self.extent {
            None => TableState::Uninitialized,
            Some(extent) if extent.is_empty() => TableState::Empty,
            Some(_) => TableState::Windowed,
        }
    }

    pub fn section_count(&self) -> Option<usize> {
        self.source.as_ref().map(D::section_count)
    }

    pub fn row_count(&self, section: usize) -> Option<usize> {
        self.source.as_ref().map(|s| s.row_count(section))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn first_visible(&self) -> Option<CellIndex> {
        self.visible.front().map(|v| v.index)
    }

    pub fn last_visible(&self) -> Option<CellIndex> {
        self.visible.back().map(|v| v.index)
    }

    /// Walks the visible window in ascending index order without allocating.
    pub fn for_each_visible(&self, mut f: impl FnMut(CellIndex, &D::Cell)) {
        for v in &self.visible {
            f(v.index, &v.cell);
        }
    }

    /// Index currently intersecting the viewport's leading edge.
    pub fn index_at_top(&self) -> Option<CellIndex> {
        self.extent.as_ref()?.cell_at(self.viewport.top_offset())
    }

    /// Index currently intersecting the viewport's trailing edge.
    pub fn index_at_bottom(&self) -> Option<CellIndex> {
        self.extent.as_ref()?.cell_at(self.viewport.bottom_offset())
    }

    /// Rebuilds the geometry snapshot and the visible window, offering every
    /// previously visible cell to the recycle pool.
    pub fn reload(&mut self) -> Result<(), TableError> {
        self.reload_inner(false)
    }

    /// Like [`Table::reload`], but destroys every pooled and visible instance
    /// first instead of recycling.
    pub fn purge_reload(&mut self) -> Result<(), TableError> {
        self.reload_inner(true)
    }

    fn reload_inner(&mut self, purge: bool) -> Result<(), TableError> {
        let Some(source) = self.source.as_ref() else {
            twarn!("reload without a data source");
            return Err(TableError::MissingDataSource);
        };

        let extent = TableExtent::build(source);

        if purge {
            self.pool.clear();
            self.visible.clear();
        } else {
            while let Some(v) = self.visible.pop_front() {
                self.recycle(v.cell);
            }
        }

        self.viewport.set_content_extent(extent.total_extent());
        let empty = extent.is_empty();
        self.extent = Some(extent);
        tdebug!(purge, empty, "reload");
        if empty {
            return Ok(());
        }

        let top = self.viewport.top_offset();
        let bottom = self.viewport.bottom_offset();
        self.regenerate(top, bottom);
        Ok(())
    }

    /// Adjusts the visible window to the viewport's current edge offsets.
    ///
    /// No-op until a reload has produced a non-empty geometry snapshot.
    pub fn on_scroll(&mut self) {
        if self.source.is_none() {
            return;
        }
        let Some(extent) = self.extent.as_ref() else {
            return;
        };
        if extent.is_empty() {
            return;
        }

        let top = self.viewport.top_offset();
        let bottom = self.viewport.bottom_offset();
        ttrace!(top, bottom, visible = self.visible.len(), "on_scroll");

        self.trim_leading(top);
        self.trim_trailing(bottom);

        if self.visible.is_empty() {
            self.regenerate(top, bottom);
        } else {
            self.extend_leading(top);
            self.extend_trailing(bottom);
        }
    }

    /// Evicts visible cells strictly before the index at the top edge. An
    /// unresolvable edge evicts nothing.
    fn trim_leading(&mut self, top: f32) {
        let Some(limit) = self.extent.as_ref().and_then(|e| e.cell_at(top)) else {
            return;
        };
        while self.visible.front().is_some_and(|v| v.index < limit) {
            if let Some(v) = self.visible.pop_front() {
                self.recycle(v.cell);
            }
        }
    }

    /// Evicts visible cells strictly after the index at the bottom edge.
    fn trim_trailing(&mut self, bottom: f32) {
        let Some(limit) = self.extent.as_ref().and_then(|e| e.cell_at(bottom)) else {
            return;
        };
        while self.visible.back().is_some_and(|v| v.index > limit) {
            if let Some(v) = self.visible.pop_back() {
                self.recycle(v.cell);
            }
        }
    }

    /// Grows the window backward from the first visible cell to the index at
    /// the top edge (nearest boundary when unresolvable).
    fn extend_leading(&mut self, top: f32) {
        let Some((from, target)) = self.extent.as_ref().and_then(|extent| {
            let first = self.visible.front().map(|v| v.index)?;
            let target = extent.cell_at_clamped(top)?;
            if target >= first {
                return None;
            }
            let from = extent.advance(first, Direction::Backward)?;
            Some((from, target))
        }) else {
            return;
        };
        self.fill_range(from, target, Direction::Backward);
    }

    /// Grows the window forward from the last visible cell to the index at
    /// the bottom edge (nearest boundary when unresolvable).
    fn extend_trailing(&mut self, bottom: f32) {
        let Some((from, target)) = self.extent.as_ref().and_then(|extent| {
            let last = self.visible.back().map(|v| v.index)?;
            let target = extent.cell_at_clamped(bottom)?;
            if target <= last {
                return None;
            }
            let from = extent.advance(last, Direction::Forward)?;
            Some((from, target))
        }) else {
            return;
        };
        self.fill_range(from, target, Direction::Forward);
    }

    /// Regenerates the whole window for the given viewport edges.
    fn regenerate(&mut self, top: f32, bottom: f32) {
        let Some((start, end)) = self.extent.as_ref().and_then(|e| e.find_range(top, bottom))
        else {
            tdebug!(top, bottom, "viewport does not intersect content");
            return;
        };
        self.fill_range(start, end, Direction::Forward);
    }

    /// Generates cells across `[from, to]` inclusive, walking in `direction`
    /// and inserting at the corresponding end of the visible sequence.
    /// Headers the data source declines are skipped.
    fn fill_range(&mut self, from: CellIndex, to: CellIndex, direction: Direction) {
        let Some(source) = self.source.as_mut() else {
            return;
        };
        let Some(extent) = self.extent.as_ref() else {
            return;
        };

        let mut generated = 0usize;
        let mut cursor = from;
        loop {
            let past_target = match direction {
                Direction::Forward => cursor > to,
                Direction::Backward => cursor < to,
            };
            if past_target {
                break;
            }

            let produced = match cursor.slot {
                Slot::Header => source.header_cell(&mut self.pool, cursor.section),
                Slot::Row(row) => Some(source.row_cell(&mut self.pool, cursor.section, row)),
            };
            if let Some(mut cell) = produced {
                let anchor = self.axis.anchor(extent.leading_edge(cursor));
                cell.place(anchor);
                let entry = VisibleCell {
                    index: cursor,
                    cell,
                };
                match direction {
                    Direction::Forward => self.visible.push_back(entry),
                    Direction::Backward => self.visible.push_front(entry),
                }
                generated += 1;
            }

            match extent.advance(cursor, direction) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        ttrace!(generated, ?direction, "fill_range");
    }

    /// Offers an evicted cell to the pool; instances without a reuse kind are
    /// dropped instead.
    fn recycle(&mut self, cell: D::Cell) {
        if self.pool.give(cell).is_err() {
            ttrace!("dropping cell without reuse kind");
        }
    }
}

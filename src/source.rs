use crate::pool::RecyclePool;

/// A cell instance managed by the table.
///
/// The core never looks inside a cell; it only tags it with an index, asks
/// for its reuse kind when recycling, toggles its active state, and places it
/// at an anchor offset. Parenting/visual concerns belong to the implementor.
pub trait TableCell {
    /// The reuse kind this instance belongs to, or `None` when the instance
    /// must not be pooled. An empty string is treated like `None`.
    fn reuse_kind(&self) -> Option<&str>;

    /// Marks the cell visible (`true`) or parked in the pool (`false`).
    ///
    /// Deactivation must leave the cell with a cleared visual state so it can
    /// be handed out again for any index of the same kind.
    fn set_active(&mut self, active: bool);

    /// Positions the cell's leading edge at `anchor` along the scroll axis.
    ///
    /// The anchor is the geometry offset translated through
    /// [`crate::Axis::anchor`]; its value is authoritative.
    fn place(&mut self, anchor: f32);
}

/// The external capability describing the table's content.
///
/// Extent-reporting methods must be pure functions of the source's current
/// state; the core may call them several times while building one geometry
/// snapshot. Cell-producing methods receive the table's [`RecyclePool`] so
/// implementors can dequeue an inactive instance instead of building a new
/// one; the dequeuing implementor is responsible for reactivating it.
pub trait DataSource {
    type Cell: TableCell;

    fn section_count(&self) -> usize;

    fn row_count(&self, section: usize) -> usize;

    /// Extent of the section header along the scroll axis. `0` means the
    /// section has no header extent; a header cell may still be requested and
    /// answered with `None`.
    fn header_extent(&self, section: usize) -> f32;

    fn row_extent(&self, section: usize, row: usize) -> f32;

    /// Spacing inserted between consecutive items of the section.
    fn spacing(&self, section: usize) -> f32;

    /// Returns the header cell for `section`, or `None` when the section has
    /// no header. A `None` is skipped without altering layout.
    fn header_cell(
        &mut self,
        pool: &mut RecyclePool<Self::Cell>,
        section: usize,
    ) -> Option<Self::Cell>;

    fn row_cell(
        &mut self,
        pool: &mut RecyclePool<Self::Cell>,
        section: usize,
        row: usize,
    ) -> Self::Cell;
}

/// The enclosing scrollable viewport, reduced to its interface boundary.
///
/// Offsets are measured in content units along the scroll axis and grow as
/// the viewport moves past the respective content edge; the core reads both
/// once per scroll event and writes the content extent back once per reload.
pub trait Viewport {
    /// Distance the viewport's leading edge has scrolled past the content's
    /// leading edge.
    fn top_offset(&self) -> f32;

    /// Distance the viewport's trailing edge has scrolled past the content's
    /// leading edge.
    fn bottom_offset(&self) -> f32;

    /// Receives the total content extent to reserve scroll space for.
    fn set_content_extent(&mut self, extent: f32);
}

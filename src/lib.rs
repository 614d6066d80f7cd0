//! A headless, sectioned table-view virtualization core with cell recycling.
//!
//! Given a data source describing sections (an optional header followed by a
//! variable number of rows of arbitrary extent), this crate maintains the set
//! of cells intersecting a scrollable viewport: it builds a cumulative-offset
//! geometry snapshot per reload, resolves viewport edges to `(section, slot)`
//! indices, and on every scroll event trims/extends the visible window
//! incrementally, recycling evicted cells through a reuse-kind keyed pool.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`DataSource`] reporting section/row counts, extents, and cell instances
//! - a [`Viewport`] reporting the two scroll-axis edge offsets and accepting
//!   the total content extent
//! - [`TableCell`] instances that know how to activate, deactivate, and place
//!   themselves at an anchor offset
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod pool;
mod source;
mod table;
mod types;


pub use geometry::{SectionExtent, TableExtent};
pub use pool::RecyclePool;
pub use source::{DataSource, TableCell, Viewport};
pub use table::{Table, TableError};
pub use types::{Axis, CellIndex, Direction, Slot, TableState};

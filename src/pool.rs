use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::source::TableCell;

#[cfg(feature = "std")]
type KindMap<C> = HashMap<String, Vec<C>>;
#[cfg(not(feature = "std"))]
type KindMap<C> = BTreeMap<String, Vec<C>>;

/// Free lists of inactive cell instances, keyed by reuse kind.
///
/// Each kind holds a stack: the most recently evicted instance is the first
/// one handed back out. An instance is in exactly one place at a time: the
/// visible window, this pool, or dropped.
#[derive(Debug)]
pub struct RecyclePool<C> {
    kinds: KindMap<C>,
    pooled: usize,
}

impl<C: TableCell> RecyclePool<C> {
    pub fn new() -> Self {
        Self {
            kinds: KindMap::new(),
            pooled: 0,
        }
    }

    /// Pops an inactive instance of `kind`, LIFO. The caller must reactivate
    /// it before use. An empty kind never matches.
    pub fn take(&mut self, kind: &str) -> Option<C> {
        if kind.is_empty() {
            return None;
        }
        let cell = self.kinds.get_mut(kind)?.pop()?;
        self.pooled -= 1;
        Some(cell)
    }

    /// Deactivates `cell` and parks it under its reuse kind.
    ///
    /// A cell without a reuse kind is refused and handed back for the caller
    /// to drop.
    pub fn give(&mut self, mut cell: C) -> Result<(), C> {
        let kind = cell
            .reuse_kind()
            .filter(|kind| !kind.is_empty())
            .map(String::from);
        let Some(kind) = kind else {
            return Err(cell);
        };
        cell.set_active(false);
        self.kinds.entry(kind).or_default().push(cell);
        self.pooled += 1;
        Ok(())
    }

    /// Drops every pooled instance.
    pub fn clear(&mut self) {
        self.kinds.clear();
        self.pooled = 0;
    }

    /// Number of pooled instances across all kinds.
    pub fn len(&self) -> usize {
        self.pooled
    }

    pub fn is_empty(&self) -> bool {
        self.pooled == 0
    }

    /// Number of pooled instances of one kind.
    pub fn kind_len(&self, kind: &str) -> usize {
        self.kinds.get(kind).map_or(0, Vec::len)
    }
}

impl<C: TableCell> Default for RecyclePool<C> {
    fn default() -> Self {
        Self::new()
    }
}

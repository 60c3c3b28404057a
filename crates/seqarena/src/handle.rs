//! Sequence handles and range descriptors.
//!
//! A [`Handle`] names one sequence stored in a [`SeqArena`](crate::SeqArena).
//! It is epoch-scoped: the `epoch` field allows O(1) staleness checks after
//! a reset without any lookup.

use std::fmt;

/// Opaque reference to one sequence in an arena.
///
/// Indices are assigned sequentially from 0 after every reset. Callers may
/// compare handles for equality and order, but should not assume anything
/// else about their structure, and must not keep them across a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    /// Arena epoch when this handle was issued.
    pub(crate) epoch: u32,
    /// Slot in the handle table.
    pub(crate) index: u32,
}

impl Handle {
    pub(crate) fn new(epoch: u32, index: u32) -> Self {
        Self { epoch, index }
    }

    /// Sequential position of this handle within its epoch.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The reset epoch this handle belongs to.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle(epoch={}, idx={})", self.epoch, self.index)
    }
}

/// Half-open `[begin, end)` interval of the backing buffer.
///
/// Stored by value in the handle table, one per issued handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeqRange {
    /// Offset of the first value.
    pub begin: usize,
    /// Offset one past the last value.
    pub end: usize,
}

impl SeqRange {
    /// Create a range. `begin` must not exceed `end`.
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "range begin {begin} past end {end}");
        Self { begin, end }
    }

    /// Number of values covered.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Whether the range covers no values.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

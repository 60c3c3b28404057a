//! Backing storage and handle table with doubling growth.
//!
//! A [`SeqBuffer`] pairs the contiguous `Vec<i64>` that holds every
//! sequence's values with the table of [`SeqRange`]s indexed by handle.
//! Both always have the same length, which is the arena's capacity: a
//! sequence holds at least one value, so there can never be more handles
//! than values.

use crate::error::ArenaError;
use crate::handle::SeqRange;

/// Contiguous value storage plus the per-handle range table.
///
/// Capacity only changes by doubling ([`SeqBuffer::reserve`]) or by an
/// explicit [`SeqBuffer::reallocate`]. The buffer has no notion of a
/// cursor; the arena tracks which prefix is in use.
pub(crate) struct SeqBuffer {
    /// Backing storage. `data.len()` is the capacity.
    data: Vec<i64>,
    /// Range for each handle slot. Always `data.len()` entries.
    ranges: Vec<SeqRange>,
}

impl SeqBuffer {
    /// Allocate storage and table for `capacity` elements.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            ranges: vec![SeqRange::default(); capacity],
        }
    }

    /// Total capacity in elements.
    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Double the capacity until `used + additional` fits.
    ///
    /// Existing values and ranges are preserved at the same offsets.
    /// Returns the number of doublings performed (0 if it already fit).
    pub(crate) fn reserve(&mut self, used: usize, additional: usize) -> Result<u32, ArenaError> {
        let capacity = self.capacity();
        let overflow = || ArenaError::CapacityOverflow {
            requested: additional,
            capacity,
        };
        let required = used.checked_add(additional).ok_or_else(overflow)?;
        if required <= capacity {
            return Ok(0);
        }

        // Work out the final size before touching storage so a failure
        // leaves the buffer untouched.
        let mut new_cap = capacity.max(1);
        let mut doublings = 0u32;
        while new_cap < required {
            new_cap = new_cap.checked_mul(2).ok_or_else(overflow)?;
            doublings += 1;
        }

        tracing::debug!(
            old_capacity = capacity,
            new_capacity = new_cap,
            doublings,
            "growing sequence arena"
        );
        self.data.resize(new_cap, 0);
        self.ranges.resize(new_cap, SeqRange::default());
        Ok(doublings)
    }

    /// Replace storage and table with fresh allocations of `capacity`.
    ///
    /// Releases the previous allocations.
    pub(crate) fn reallocate(&mut self, capacity: usize) {
        self.data = vec![0; capacity];
        self.ranges = vec![SeqRange::default(); capacity];
    }

    /// Copy `values` into storage starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the write would run past the capacity.
    pub(crate) fn write(&mut self, offset: usize, values: &[i64]) {
        self.data[offset..offset + values.len()].copy_from_slice(values);
    }

    /// Copy the values of `src` so they start at `dst`.
    ///
    /// # Panics
    ///
    /// Panics if either region runs past the capacity.
    pub(crate) fn copy_within(&mut self, src: SeqRange, dst: usize) {
        self.data.copy_within(src.begin..src.end, dst);
    }

    /// Shared view of the values covered by `range`.
    pub(crate) fn slice(&self, range: SeqRange) -> &[i64] {
        &self.data[range.begin..range.end]
    }

    /// Range stored in handle slot `index`.
    pub(crate) fn range(&self, index: usize) -> SeqRange {
        self.ranges[index]
    }

    /// Record `range` in handle slot `index`.
    pub(crate) fn set_range(&mut self, index: usize, range: SeqRange) {
        self.ranges[index] = range;
    }

    /// Memory usage of storage and table in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<i64>()
            + self.ranges.len() * std::mem::size_of::<SeqRange>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_has_matching_table() {
        let buf = SeqBuffer::new(1024);
        assert_eq!(buf.capacity(), 1024);
        assert_eq!(buf.ranges.len(), 1024);
    }

    #[test]
    fn reserve_within_capacity_is_noop() {
        let mut buf = SeqBuffer::new(100);
        assert_eq!(buf.reserve(90, 10).unwrap(), 0);
        assert_eq!(buf.capacity(), 100);
    }

    #[test]
    fn reserve_doubles_once() {
        let mut buf = SeqBuffer::new(100);
        assert_eq!(buf.reserve(90, 11).unwrap(), 1);
        assert_eq!(buf.capacity(), 200);
        assert_eq!(buf.ranges.len(), 200);
    }

    #[test]
    fn reserve_doubles_until_fit() {
        let mut buf = SeqBuffer::new(100);
        assert_eq!(buf.reserve(0, 750).unwrap(), 3);
        assert_eq!(buf.capacity(), 800);
    }

    #[test]
    fn reserve_preserves_contents() {
        let mut buf = SeqBuffer::new(4);
        buf.write(0, &[1, 2, 3, 4]);
        buf.set_range(0, SeqRange::new(0, 4));
        buf.reserve(4, 1).unwrap();
        assert_eq!(buf.slice(buf.range(0)), &[1, 2, 3, 4]);
    }

    #[test]
    fn reserve_overflow_returns_error_not_panic() {
        let mut buf = SeqBuffer::new(4);
        let result = buf.reserve(4, usize::MAX);
        assert!(matches!(result, Err(ArenaError::CapacityOverflow { .. })));
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn copy_within_moves_values() {
        let mut buf = SeqBuffer::new(8);
        buf.write(0, &[5, 6, 7]);
        buf.copy_within(SeqRange::new(0, 3), 4);
        assert_eq!(buf.slice(SeqRange::new(4, 7)), &[5, 6, 7]);
    }

    #[test]
    fn reallocate_shrinks() {
        let mut buf = SeqBuffer::new(16);
        buf.reserve(16, 16).unwrap();
        assert_eq!(buf.capacity(), 32);
        buf.reallocate(16);
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.ranges.len(), 16);
    }
}

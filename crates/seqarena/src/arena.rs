//! The sequence arena: creation, extension, and query operations.
//!
//! [`SeqArena`] stores every sequence as a contiguous range of one shared
//! backing buffer. Creating a sequence bump-allocates at the cursor;
//! extending the most recently written sequence appends in place; extending
//! any other sequence copies it to the cursor first. Old handles are never
//! invalidated by an extension, only superseded.

use std::fmt;

use crate::buffer::SeqBuffer;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::{Handle, SeqRange};
use crate::stats::ArenaStats;

/// Single-owner arena for many short `i64` sequences.
///
/// All mutation goes through `&mut self`, so exclusive access is checked at
/// compile time. The arena does no internal locking: to share one across
/// threads, wrap it in a `Mutex` or similar and hold the lock for every
/// call, queries included.
///
/// # Handle lifetime
///
/// A [`Handle`] is valid until the next [`SeqArena::reset`]. After
/// [`SeqArena::append_to`] the old handle still resolves to the values it
/// had before the call; only the returned handle covers the extended
/// sequence. Handles from an earlier epoch are rejected with
/// [`ArenaError::StaleHandle`].
pub struct SeqArena {
    buffer: SeqBuffer,
    /// Start of unused space in `buffer`.
    cursor: usize,
    /// Handles issued since the last reset.
    count: usize,
    base_capacity: usize,
    /// Incremented (wrapping) on every reset.
    epoch: u32,
    /// Cumulative counters; gauges are filled in by `stats()`.
    counters: ArenaStats,
}

impl SeqArena {
    /// Create an arena with the given base capacity in elements.
    ///
    /// Requests below [`ArenaConfig::MIN_CAPACITY`] use the floor instead.
    pub fn new(capacity: usize) -> Self {
        Self::with_config(ArenaConfig::new(capacity))
    }

    /// Create an arena from a config.
    pub fn with_config(config: ArenaConfig) -> Self {
        let base_capacity = config.effective_capacity();
        Self {
            buffer: SeqBuffer::new(base_capacity),
            cursor: 0,
            count: 0,
            base_capacity,
            epoch: 0,
            counters: ArenaStats::default(),
        }
    }

    /// Empty the arena for the next pass.
    ///
    /// If the arena never grew this only rewinds the cursor; old contents
    /// stay in the buffer until overwritten. If it grew, storage and handle
    /// table are reallocated at base capacity, releasing the grown memory.
    /// Every handle issued before the call becomes stale.
    pub fn reset(&mut self) {
        let capacity = self.buffer.capacity();
        let shrink = capacity != self.base_capacity;
        if shrink {
            self.buffer.reallocate(self.base_capacity);
            self.counters.shrinking_resets += 1;
        }
        tracing::debug!(
            epoch = self.epoch,
            sequences = self.count,
            used = self.cursor,
            capacity,
            shrink,
            "resetting sequence arena"
        );
        self.cursor = 0;
        self.count = 0;
        self.epoch = self.epoch.wrapping_add(1);
        self.counters.resets += 1;
    }

    /// Store `values` as a new sequence and return its handle.
    ///
    /// Grows the arena if the remaining space is too small.
    pub fn append_new(&mut self, values: &[i64]) -> Result<Handle, ArenaError> {
        if values.is_empty() {
            return Err(ArenaError::EmptyInput);
        }
        let index = self.next_index()?;
        self.reserve(values.len())?;

        let begin = self.cursor;
        self.buffer.write(begin, values);
        self.cursor += values.len();

        self.counters.sequences_created += 1;
        Ok(self.issue(index, SeqRange::new(begin, self.cursor)))
    }

    /// Store the sequence of `handle` followed by `values` and return a new
    /// handle for the result.
    ///
    /// When `handle` is the most recently written sequence its values are
    /// extended in place and the new range shares them. Otherwise the old
    /// values are copied to the end of the buffer first. Either way `handle`
    /// keeps resolving to its original values.
    pub fn append_to(&mut self, handle: Handle, values: &[i64]) -> Result<Handle, ArenaError> {
        if values.is_empty() {
            return Err(ArenaError::EmptyInput);
        }
        let old = self.resolve(handle)?;
        let index = self.next_index()?;

        let begin = if old.end == self.cursor {
            self.reserve(values.len())?;
            self.counters.tail_extensions += 1;
            old.begin
        } else {
            let additional = old.len().checked_add(values.len()).ok_or_else(|| {
                ArenaError::CapacityOverflow {
                    requested: values.len(),
                    capacity: self.buffer.capacity(),
                }
            })?;
            self.reserve(additional)?;

            tracing::trace!(
                handle = %handle,
                copied = old.len(),
                appended = values.len(),
                "extending sequence by copy"
            );
            let begin = self.cursor;
            self.buffer.copy_within(old, begin);
            self.cursor += old.len();
            self.counters.copy_extensions += 1;
            self.counters.values_copied += old.len() as u64;
            begin
        };

        self.buffer.write(self.cursor, values);
        self.cursor += values.len();
        Ok(self.issue(index, SeqRange::new(begin, self.cursor)))
    }

    /// Number of values in the sequence of `handle`.
    pub fn len_of(&self, handle: Handle) -> Result<usize, ArenaError> {
        Ok(self.resolve(handle)?.len())
    }

    /// Copy the sequence of `handle` into a new `Vec`.
    ///
    /// The result is independent of the arena and may be kept across
    /// further appends and resets.
    pub fn to_vec(&self, handle: Handle) -> Result<Vec<i64>, ArenaError> {
        Ok(self.get(handle)?.to_vec())
    }

    /// Borrow the sequence of `handle` without copying.
    pub fn get(&self, handle: Handle) -> Result<&[i64], ArenaError> {
        let range = self.resolve(handle)?;
        Ok(self.buffer.slice(range))
    }

    /// First value of the sequence of `handle`.
    pub fn first_of(&self, handle: Handle) -> Result<i64, ArenaError> {
        self.get(handle)?
            .first()
            .copied()
            .ok_or(ArenaError::EmptyRange {
                index: handle.index,
            })
    }

    /// Last value of the sequence of `handle`.
    pub fn last_of(&self, handle: Handle) -> Result<i64, ArenaError> {
        self.get(handle)?
            .last()
            .copied()
            .ok_or(ArenaError::EmptyRange {
                index: handle.index,
            })
    }

    /// Buffer range backing `handle`.
    pub fn range_of(&self, handle: Handle) -> Result<SeqRange, ArenaError> {
        self.resolve(handle)
    }

    /// Handles issued since the last reset, in issue order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        // `count` always fits in u32: `next_index` refuses to go past it.
        (0..self.count).map(move |i| Handle::new(self.epoch, i as u32))
    }

    /// Number of handles issued since the last reset.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no handles have been issued since the last reset.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Elements in use (the allocation cursor).
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Elements available before the next growth.
    pub fn remaining(&self) -> usize {
        self.buffer.capacity() - self.cursor
    }

    /// Current capacity in elements.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Capacity fixed at construction and restored by `reset`.
    pub fn base_capacity(&self) -> usize {
        self.base_capacity
    }

    /// Current reset epoch.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Memory held by the backing buffer and handle table, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.memory_bytes()
    }

    /// Snapshot of cumulative counters and current gauges.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            capacity: self.buffer.capacity(),
            used: self.cursor,
            live_sequences: self.count,
            memory_bytes: self.buffer.memory_bytes(),
            ..self.counters.clone()
        }
    }

    fn resolve(&self, handle: Handle) -> Result<SeqRange, ArenaError> {
        if handle.epoch != self.epoch {
            return Err(ArenaError::StaleHandle {
                handle_epoch: handle.epoch,
                current_epoch: self.epoch,
            });
        }
        let index = handle.index as usize;
        if index >= self.count {
            return Err(ArenaError::InvalidHandle {
                index: handle.index,
                issued: self.count,
            });
        }
        Ok(self.buffer.range(index))
    }

    /// Index the next handle will get. Fails before any mutation if the
    /// handle space is exhausted.
    fn next_index(&self) -> Result<u32, ArenaError> {
        u32::try_from(self.count).map_err(|_| ArenaError::CapacityOverflow {
            requested: 1,
            capacity: self.buffer.capacity(),
        })
    }

    fn reserve(&mut self, additional: usize) -> Result<(), ArenaError> {
        let doublings = self.buffer.reserve(self.cursor, additional)?;
        self.counters.grow_events += u64::from(doublings);
        Ok(())
    }

    fn issue(&mut self, index: u32, range: SeqRange) -> Handle {
        // The table has one slot per element and every sequence holds at
        // least one element, so `count < cursor <= capacity` here.
        self.buffer.set_range(self.count, range);
        self.count += 1;
        Handle::new(self.epoch, index)
    }
}

impl Default for SeqArena {
    fn default() -> Self {
        Self::with_config(ArenaConfig::default())
    }
}

impl fmt::Debug for SeqArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqArena")
            .field("epoch", &self.epoch)
            .field("sequences", &self.count)
            .field("used", &self.cursor)
            .field("capacity", &self.buffer.capacity())
            .field("base_capacity", &self.base_capacity)
            .finish_non_exhaustive()
    }
}

//! Usage statistics for a sequence arena.
//!
//! [`ArenaStats`] is a snapshot taken by
//! [`SeqArena::stats`](crate::SeqArena::stats). Counters are cumulative
//! since construction and survive resets; gauges describe the arena at the
//! moment the snapshot was taken.

/// Cumulative counters and point-in-time gauges for one arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Sequences created via `append_new`.
    pub sequences_created: u64,
    /// `append_to` calls served by the in-place tail path.
    pub tail_extensions: u64,
    /// `append_to` calls that had to copy the old sequence first.
    pub copy_extensions: u64,
    /// Values moved by copying extensions (old sequence lengths only).
    pub values_copied: u64,
    /// Number of capacity doublings.
    pub grow_events: u64,
    /// Number of `reset` calls.
    pub resets: u64,
    /// Resets that reallocated storage back down to base capacity.
    pub shrinking_resets: u64,
    /// Current capacity in elements.
    pub capacity: usize,
    /// Elements in use (the allocation cursor).
    pub used: usize,
    /// Handles issued since the last reset.
    pub live_sequences: usize,
    /// Memory held by the backing buffer and handle table, in bytes.
    pub memory_bytes: usize,
}

impl ArenaStats {
    /// Fraction of `append_to` calls that avoided a copy.
    ///
    /// Returns `None` when no extensions have happened yet.
    pub fn tail_hit_ratio(&self) -> Option<f64> {
        let total = self.tail_extensions + self.copy_extensions;
        if total == 0 {
            return None;
        }
        Some(self.tail_extensions as f64 / total as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = ArenaStats::default();
        assert_eq!(s.sequences_created, 0);
        assert_eq!(s.grow_events, 0);
        assert_eq!(s.capacity, 0);
        assert!(s.tail_hit_ratio().is_none());
    }

    #[test]
    fn tail_hit_ratio() {
        let s = ArenaStats {
            tail_extensions: 3,
            copy_extensions: 1,
            ..Default::default()
        };
        assert_eq!(s.tail_hit_ratio(), Some(0.75));
    }
}

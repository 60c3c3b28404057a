//! Arena configuration parameters.

/// Configuration for a [`SeqArena`](crate::SeqArena).
///
/// Controls the base capacity the arena allocates at construction and
/// returns to on a shrinking reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Base capacity in `i64` elements.
    ///
    /// Default: [`ArenaConfig::DEFAULT_CAPACITY`]. Values below
    /// [`ArenaConfig::MIN_CAPACITY`] are raised to the floor when the arena
    /// is built, so small requests do not cause a cascade of early growths.
    pub base_capacity: usize,
}

impl ArenaConfig {
    /// Smallest base capacity an arena will use.
    pub const MIN_CAPACITY: usize = 1024;

    /// Default base capacity.
    pub const DEFAULT_CAPACITY: usize = Self::MIN_CAPACITY;

    /// Create a config for the requested base capacity, applying the floor.
    pub fn new(base_capacity: usize) -> Self {
        Self {
            base_capacity: base_capacity.max(Self::MIN_CAPACITY),
        }
    }

    /// Base capacity with the floor applied.
    ///
    /// Differs from `base_capacity` only when the field was assigned
    /// directly with a value below the floor.
    pub fn effective_capacity(&self) -> usize {
        self.base_capacity.max(Self::MIN_CAPACITY)
    }

    /// Initial memory footprint in bytes: backing buffer plus handle table.
    pub fn memory_bytes(&self) -> usize {
        self.effective_capacity()
            * (std::mem::size_of::<i64>() + std::mem::size_of::<crate::handle::SeqRange>())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_request_is_raised_to_floor() {
        let config = ArenaConfig::new(10);
        assert_eq!(config.base_capacity, ArenaConfig::MIN_CAPACITY);
    }

    #[test]
    fn large_request_is_preserved() {
        let config = ArenaConfig::new(10_000);
        assert_eq!(config.base_capacity, 10_000);
    }

    #[test]
    fn direct_assignment_still_floored() {
        let config = ArenaConfig { base_capacity: 3 };
        assert_eq!(config.effective_capacity(), 1024);
    }

    #[test]
    fn default_is_floor() {
        assert_eq!(ArenaConfig::default().base_capacity, 1024);
    }

    #[test]
    fn memory_bytes_counts_buffer_and_table() {
        let config = ArenaConfig::new(2048);
        let per_slot = std::mem::size_of::<i64>() + 2 * std::mem::size_of::<usize>();
        assert_eq!(config.memory_bytes(), 2048 * per_slot);
    }
}

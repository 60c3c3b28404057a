//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// Every variant describes caller misuse or an impossible capacity request.
/// An operation that returns an error leaves the arena unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// `append_new` or `append_to` was called with zero values.
    EmptyInput,
    /// A handle index that has not been issued in the current epoch.
    InvalidHandle {
        /// The index encoded in the handle.
        index: u32,
        /// Number of handles issued since the last reset.
        issued: usize,
    },
    /// A handle issued before the most recent reset.
    StaleHandle {
        /// The epoch encoded in the handle.
        handle_epoch: u32,
        /// The arena's current epoch.
        current_epoch: u32,
    },
    /// `first_of` or `last_of` on a handle whose range holds no values.
    EmptyRange {
        /// The index of the offending handle.
        index: u32,
    },
    /// Doubling the backing buffer would overflow `usize`.
    CapacityOverflow {
        /// Number of elements that had to fit.
        requested: usize,
        /// Capacity at the time of the request, in elements.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot append an empty sequence"),
            Self::InvalidHandle { index, issued } => {
                write!(
                    f,
                    "invalid handle: index {index}, only {issued} handles issued"
                )
            }
            Self::StaleHandle {
                handle_epoch,
                current_epoch,
            } => {
                write!(
                    f,
                    "stale handle: epoch {handle_epoch}, current epoch {current_epoch}"
                )
            }
            Self::EmptyRange { index } => {
                write!(f, "handle {index} refers to an empty range")
            }
            Self::CapacityOverflow {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity overflow: requested {requested} elements, capacity {capacity} elements"
                )
            }
        }
    }
}

impl Error for ArenaError {}

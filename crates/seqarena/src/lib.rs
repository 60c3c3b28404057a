//! Single-owner arena for accumulating many short integer sequences.
//!
//! A multi-step computation that builds lots of small intermediate
//! sequences would normally allocate a fresh `Vec` for each one. A
//! [`SeqArena`] instead stores every sequence as a contiguous range of one
//! shared, geometrically growing buffer and hands out small [`Handle`]
//! values in place of references.
//!
//! # Architecture
//!
//! ```text
//! SeqArena (cursor, live count, epoch, counters)
//! └── SeqBuffer
//!     ├── Vec<i64>       backing storage, doubled on demand
//!     └── Vec<SeqRange>  handle table, same length as storage
//! ```
//!
//! # Extension
//!
//! [`SeqArena::append_to`] extends a sequence by issuing a new handle.
//! If the old sequence ends at the cursor the new values are written
//! straight after it and the new range shares its prefix; otherwise the
//! old values are copied to the cursor first. The old handle keeps
//! resolving to the values it had.
//!
//! # Concurrency
//!
//! There is no internal locking. Mutation requires `&mut self`; callers that
//! share an arena between threads must provide their own lock.
//!
//! ```
//! use seqarena::SeqArena;
//!
//! let mut arena = SeqArena::new(0);
//! let path = arena.append_new(&[1, 2])?;
//! let longer = arena.append_to(path, &[3])?;
//! assert_eq!(arena.to_vec(longer)?, vec![1, 2, 3]);
//! assert_eq!(arena.to_vec(path)?, vec![1, 2]);
//!
//! arena.reset();
//! assert!(arena.len_of(longer).is_err());
//! # Ok::<(), seqarena::ArenaError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
mod buffer;
pub mod config;
pub mod error;
pub mod handle;
pub mod stats;

// Public re-exports for the primary API surface.
pub use arena::SeqArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::{Handle, SeqRange};
pub use stats::ArenaStats;

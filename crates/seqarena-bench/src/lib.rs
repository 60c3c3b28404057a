//! Benchmark workloads for the seqarena crate.
//!
//! Provides deterministic sequence workloads for benchmarks:
//!
//! - [`sequence_lengths`]: pseudo-random lengths from a seed
//! - [`path_workload`]: a pass that builds many short paths, extending
//!   some of them from earlier steps, the access pattern the arena is for

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seqarena::{ArenaError, Handle, SeqArena};

/// Generate `n` deterministic sequence lengths in `1..=max_len`.
///
/// Uses a simple LCG over the seed so benchmark inputs are identical
/// across runs.
pub fn sequence_lengths(n: usize, max_len: usize, seed: u64) -> Vec<usize> {
    let max_len = max_len.max(1) as u64;
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % max_len) as usize + 1
        })
        .collect()
}

/// Run one pass of the path-building workload against `arena`.
///
/// Each step either starts a new path or extends the path created
/// `back` steps earlier (tail when `back == 1`, copy otherwise).
/// Returns the handle of the last path written.
pub fn path_workload(
    arena: &mut SeqArena,
    lengths: &[usize],
    back: usize,
) -> Result<Option<Handle>, ArenaError> {
    let mut recent: Vec<Handle> = Vec::with_capacity(lengths.len());
    let mut scratch: Vec<i64> = Vec::new();
    for (step, &len) in lengths.iter().enumerate() {
        scratch.clear();
        scratch.extend((0..len as i64).map(|v| v + step as i64));
        let handle = if step % 2 == 1 && recent.len() >= back && back > 0 {
            arena.append_to(recent[recent.len() - back], &scratch)?
        } else {
            arena.append_new(&scratch)?
        };
        recent.push(handle);
    }
    Ok(recent.last().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_lengths_deterministic() {
        let a = sequence_lengths(100, 16, 42);
        let b = sequence_lengths(100, 16, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|&len| (1..=16).contains(&len)));
    }

    #[test]
    fn path_workload_runs_to_completion() {
        let mut arena = SeqArena::new(0);
        let lengths = sequence_lengths(1000, 8, 7);
        let last = path_workload(&mut arena, &lengths, 1).unwrap();
        assert!(last.is_some());
        assert_eq!(arena.len(), 1000);
        assert!(arena.stats().tail_extensions > 0);
    }

    #[test]
    fn path_workload_copy_path() {
        let mut arena = SeqArena::new(0);
        let lengths = sequence_lengths(200, 8, 7);
        path_workload(&mut arena, &lengths, 3).unwrap();
        assert!(arena.stats().copy_extensions > 0);
    }
}

//! Driven ports (outbound dependencies)
//!
//! The block index is owned by the storage subsystem; this engine only
//! dereferences predecessor links on an immutable snapshot handed in by
//! the caller, never mutates nodes, and never retains them beyond a
//! single call. Traversal is expressed as bounded walks over that
//! snapshot rather than a live pointer chase, so concurrent validation
//! of competing chains needs no locks here.

use crate::domain::compact::CompactTarget;
use shared_types::Algo;

/// Read-only view of one node in the block index.
///
/// `previous()` returns `None` at the genesis block or wherever the
/// caller's snapshot ends; every retarget treats a truncated history as
/// the bootstrap case rather than an error.
pub trait ChainView {
    /// Height of this block (strictly increasing along a chain).
    fn height(&self) -> u64;

    /// Block timestamp (Unix epoch seconds).
    fn time(&self) -> i64;

    /// Median-time-past over recent ancestors (Unix epoch seconds).
    fn median_time_past(&self) -> i64;

    /// Compact difficulty recorded in this block's header.
    fn bits(&self) -> CompactTarget;

    /// Algorithm that mined this block.
    fn algo(&self) -> Algo;

    /// The predecessor block, if available in this snapshot.
    fn previous(&self) -> Option<&Self>;
}

/// Walk `steps` predecessor links back from `start`.
///
/// Returns `None` if the snapshot runs out of history first.
pub fn ancestor_back<C: ChainView>(start: &C, steps: u64) -> Option<&C> {
    let mut cursor = start;
    for _ in 0..steps {
        cursor = cursor.previous()?;
    }
    Some(cursor)
}

/// Nearest ancestor of `start` (inclusive) mined with `algo`.
pub fn last_block_for_algo<C: ChainView>(start: &C, algo: Algo) -> Option<&C> {
    let mut cursor = Some(start);
    while let Some(node) = cursor {
        if node.algo() == algo {
            return Some(node);
        }
        cursor = node.previous();
    }
    None
}

/// Time source for block template timestamps.
pub trait TimeSource: Send + Sync {
    /// Current network-adjusted Unix timestamp in seconds.
    fn now(&self) -> i64;
}

/// Default time source using system time.
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

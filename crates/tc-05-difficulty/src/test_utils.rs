//! Test fixtures: an in-memory block index snapshot for exercising the
//! retarget algorithms without a storage subsystem.

use crate::domain::compact::CompactTarget;
use crate::ports::ChainView;
use shared_types::Algo;

/// A single in-memory block index node owning its whole ancestry.
pub(crate) struct MockNode {
    pub height: u64,
    pub time: i64,
    pub mtp: i64,
    pub bits: CompactTarget,
    pub algo: Algo,
    pub prev: Option<Box<MockNode>>,
}

impl ChainView for MockNode {
    fn height(&self) -> u64 {
        self.height
    }

    fn time(&self) -> i64 {
        self.time
    }

    fn median_time_past(&self) -> i64 {
        self.mtp
    }

    fn bits(&self) -> CompactTarget {
        self.bits
    }

    fn algo(&self) -> Algo {
        self.algo
    }

    fn previous(&self) -> Option<&Self> {
        self.prev.as_deref()
    }
}

impl Drop for MockNode {
    // Unlink iteratively so long fixture chains cannot overflow the
    // stack through recursive Box drops.
    fn drop(&mut self) {
        let mut cursor = self.prev.take();
        while let Some(mut node) = cursor {
            cursor = node.prev.take();
        }
    }
}

/// Builds linked fixture chains tip-first.
pub(crate) struct ChainBuilder {
    tip: MockNode,
}

impl ChainBuilder {
    /// Start a chain at height 0.
    pub fn genesis(time: i64, bits: CompactTarget, algo: Algo) -> Self {
        Self::genesis_at(0, time, bits, algo)
    }

    /// Start a chain at an arbitrary claimed height (the ancestry below
    /// it is simply absent from the snapshot).
    pub fn genesis_at(height: u64, time: i64, bits: CompactTarget, algo: Algo) -> Self {
        Self {
            tip: MockNode {
                height,
                time,
                mtp: time,
                bits,
                algo,
                prev: None,
            },
        }
    }

    /// Append one block `spacing` seconds after the current tip.
    pub fn push(self, spacing: i64, bits: CompactTarget, algo: Algo) -> Self {
        let time = self.tip.time + spacing;
        let tip = MockNode {
            height: self.tip.height + 1,
            time,
            mtp: time,
            bits,
            algo,
            prev: Some(Box::new(self.tip)),
        };
        Self { tip }
    }

    /// Append `count` blocks `spacing` seconds apart, cycling through `algos`.
    pub fn extend(mut self, count: u64, spacing: i64, bits: CompactTarget, algos: &[Algo]) -> Self {
        for i in 0..count {
            let algo = algos[i as usize % algos.len()];
            self = self.push(spacing, bits, algo);
        }
        self
    }

    /// Finish building and take ownership of the tip (and its ancestry).
    pub fn tip(self) -> MockNode {
        self.tip
    }
}

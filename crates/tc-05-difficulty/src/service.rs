//! Difficulty service - the subsystem's produced contract
//!
//! Thin orchestration over the pure domain functions: routes next-work
//! requests to the correct retarget generation, stamps candidate block
//! times, and exposes the validation checks to block/header validation.

use crate::config::ChainParams;
use crate::domain::compact::CompactTarget;
use crate::domain::entities::BlockCandidate;
use crate::domain::{
    check_min_work, check_proof_of_work, next_work_required_v1, next_work_required_v2,
    proof_increment,
};
use crate::error::Result;
use crate::ports::{ChainView, TimeSource};
use shared_types::{Algo, Hash, Network, U256};
use tracing::debug;

/// Stateless difficulty engine bound to one network's parameters.
#[derive(Clone, Debug)]
pub struct DifficultyService {
    params: ChainParams,
}

impl DifficultyService {
    /// Create a service for the given network parameters.
    pub fn new(params: ChainParams) -> Self {
        Self { params }
    }

    /// The network parameters this service was built with.
    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    /// Compact difficulty required for the block following `prev`,
    /// mined with `algo`.
    ///
    /// The height partition is total: testnet is fixed, every other
    /// network uses the legacy retarget strictly below the fork height
    /// and the averaged retarget from it onward. A missing previous
    /// block is the genesis case of whichever retarget is routed to.
    pub fn next_work_required<C: ChainView>(&self, prev: Option<&C>, algo: Algo) -> CompactTarget {
        let (bits, version) = match self.params.network {
            Network::Testnet => (self.params.testnet_fixed_bits, "fixed"),
            Network::Main | Network::Regtest => {
                let height = prev.map_or(0, ChainView::height);
                if height < self.params.v3_fork_height {
                    (next_work_required_v1(prev, algo, &self.params), "v1")
                } else {
                    debug!(height, ?algo, "routing to averaged multi-algorithm retarget");
                    (next_work_required_v2(prev, algo, &self.params), "v2")
                }
            }
        };

        #[cfg(feature = "metrics")]
        crate::metrics::record_retarget(algo, version);
        #[cfg(not(feature = "metrics"))]
        let _ = version;

        bits
    }

    /// Check a block hash against its claimed difficulty.
    pub fn check_proof_of_work(&self, hash: &Hash, bits: CompactTarget, algo: Algo) -> Result<()> {
        let result = check_proof_of_work(hash, bits, algo, &self.params);

        #[cfg(feature = "metrics")]
        if let Err(err) = &result {
            crate::metrics::record_pow_rejected(err.reason());
        }

        result
    }

    /// Check a claimed difficulty against the minimum-work bound for the
    /// elapsed time since a known difficulty.
    pub fn check_min_work(&self, bits: CompactTarget, base: CompactTarget, delta_time: i64) -> bool {
        check_min_work(bits, base, delta_time, &self.params)
    }

    /// Stamp a candidate block with the current time, never earlier than
    /// one second past the previous block's median-time-past.
    ///
    /// On testnet the new timestamp can change the work required, so the
    /// candidate's difficulty is recomputed as well.
    pub fn update_time<C: ChainView>(
        &self,
        candidate: &mut BlockCandidate,
        prev: &C,
        clock: &dyn TimeSource,
    ) {
        candidate.time = std::cmp::max(prev.median_time_past() + 1, clock.now());

        if self.params.network == Network::Testnet {
            candidate.bits = self.next_work_required(Some(prev), candidate.algo);
        }
    }

    /// Expected number of hashes represented by a block mined at `bits`.
    pub fn proof_increment(&self, bits: CompactTarget) -> U256 {
        proof_increment(bits)
    }
}

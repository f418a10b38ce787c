//! Per-network consensus parameters
//!
//! Every constant here is consensus-visible: changing a fork height or a
//! proof-of-work ceiling on a running network is a hard fork. The
//! difficulty engine never reads configuration from the environment; a
//! [`ChainParams`] value is constructed once by the node and handed in.

use crate::domain::compact::CompactTarget;
use serde::{Deserialize, Serialize};
use shared_types::{Algo, Network, U256, NUM_ALGOS};

/// Fixed difficulty served for every testnet block.
const TESTNET_FIXED_BITS: u32 = 0x1d13_ffec;

/// Consensus parameters for one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// Which network these parameters describe.
    pub network: Network,

    /// Target seconds between blocks (across all algorithms, pre-fork).
    pub target_spacing: i64,

    /// Target seconds per legacy retarget window.
    pub target_timespan: i64,

    /// Whether the network relaxes to minimum-difficulty blocks when
    /// block production stalls (test networks only).
    pub allow_min_difficulty_blocks: bool,

    /// Height activating the tighter legacy retarget bounds.
    pub diff_switch_height: u64,

    /// Height activating the corrected timespan/interval pair.
    pub inflation_fix_height: u64,

    /// Height activating the asymmetric legacy retarget bounds.
    pub diff2_switch_height: u64,

    /// Height switching from the legacy retarget to the averaged
    /// multi-algorithm retarget.
    pub v3_fork_height: u64,

    /// Compact difficulty served for every block on testnet.
    pub testnet_fixed_bits: CompactTarget,

    /// Per-algorithm proof-of-work ceilings, in consensus algorithm order.
    pow_limits: [U256; NUM_ALGOS],
}

impl ChainParams {
    /// Production network parameters.
    pub fn main() -> Self {
        Self {
            network: Network::Main,
            target_spacing: 40,
            target_timespan: 2_400,
            allow_min_difficulty_blocks: false,
            diff_switch_height: 6_000,
            inflation_fix_height: 28_500,
            diff2_switch_height: 62_000,
            v3_fork_height: 145_000,
            testnet_fixed_bits: CompactTarget::new(TESTNET_FIXED_BITS),
            pow_limits: [U256::from(0x0f_ffffu64) << 216; NUM_ALGOS],
        }
    }

    /// Public test network parameters. Forks activate early and blocks
    /// may fall back to minimum difficulty when production stalls.
    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            allow_min_difficulty_blocks: true,
            diff_switch_height: 20,
            inflation_fix_height: 40,
            diff2_switch_height: 60,
            v3_fork_height: 80,
            ..Self::main()
        }
    }

    /// Local regression-test parameters: trivial ceilings, averaged
    /// retarget active from genesis.
    pub fn regtest() -> Self {
        Self {
            network: Network::Regtest,
            allow_min_difficulty_blocks: true,
            diff_switch_height: 0,
            inflation_fix_height: 0,
            diff2_switch_height: 0,
            v3_fork_height: 0,
            pow_limits: [U256::from(0x7f_ffffu64) << 232; NUM_ALGOS],
            ..Self::main()
        }
    }

    /// The proof-of-work ceiling (easiest permitted target) for `algo`.
    pub fn pow_limit(&self, algo: Algo) -> U256 {
        self.pow_limits[algo.index()]
    }

    /// The ceiling for `algo` in compact form.
    pub fn pow_limit_bits(&self, algo: Algo) -> CompactTarget {
        CompactTarget::from_target(self.pow_limit(algo))
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::main()
    }
}

//! Legacy single-track difficulty retarget
//!
//! The chain's first-generation retarget rule, in force below the
//! [`v3_fork_height`](crate::config::ChainParams::v3_fork_height): one
//! shared difficulty track, recomputed once per fixed block interval
//! from the wall-clock time the previous window took.
//!
//! Three protocol revisions changed the tuning constants at hardcoded
//! heights while older blocks still validate under the rules they were
//! mined with. The revisions are modeled as an ordered activation table
//! resolved by a single lookup, so the height partition stays auditable:
//!
//! | activation              | timespan | bounds on actual timespan |
//! |-------------------------|----------|---------------------------|
//! | genesis                 | base × 5 | ±4×                       |
//! | `diff_switch_height`    | base × 5 | ±2×                       |
//! | `inflation_fix_height`  | base     | ±2×                       |
//! | `diff2_switch_height`   | base     | 55/73 … 75/60             |

use crate::config::ChainParams;
use crate::domain::compact::CompactTarget;
use crate::ports::{ancestor_back, ChainView};
use shared_types::{Algo, Network, U256};
use tracing::debug;

/// Retarget tuning constants for one era of the legacy algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EraParams {
    /// First height governed by this era.
    pub activation_height: u64,
    /// Seconds one retarget window is expected to take.
    pub target_timespan: i64,
    /// Blocks between retargets.
    pub retarget_interval: u64,
    /// Lower clamp on the measured window duration.
    pub min_actual_timespan: i64,
    /// Upper clamp on the measured window duration.
    pub max_actual_timespan: i64,
}

/// The full activation table for a network, oldest era first.
pub fn era_table(params: &ChainParams) -> [EraParams; 4] {
    let slow_timespan = params.target_timespan * 5;
    let fast_timespan = params.target_timespan;
    // The pre-fix protocol derived its interval from a halved spacing,
    // doubling the window length in blocks.
    let slow_interval = (slow_timespan / (params.target_spacing / 2)) as u64;
    let fast_interval = (fast_timespan / params.target_spacing) as u64;

    [
        EraParams {
            activation_height: 0,
            target_timespan: slow_timespan,
            retarget_interval: slow_interval,
            min_actual_timespan: slow_timespan / 4,
            max_actual_timespan: slow_timespan * 4,
        },
        EraParams {
            activation_height: params.diff_switch_height,
            target_timespan: slow_timespan,
            retarget_interval: slow_interval,
            min_actual_timespan: slow_timespan / 2,
            max_actual_timespan: slow_timespan * 2,
        },
        EraParams {
            activation_height: params.inflation_fix_height,
            target_timespan: fast_timespan,
            retarget_interval: fast_interval,
            min_actual_timespan: fast_timespan / 2,
            max_actual_timespan: fast_timespan * 2,
        },
        EraParams {
            activation_height: params.diff2_switch_height,
            target_timespan: fast_timespan,
            retarget_interval: fast_interval,
            min_actual_timespan: fast_timespan * 55 / 73,
            max_actual_timespan: fast_timespan * 75 / 60,
        },
    ]
}

/// Resolve the era governing a block at `height`.
pub fn era_for_height(height: u64, params: &ChainParams) -> EraParams {
    let table = era_table(params);
    debug_assert!(
        table.windows(2).all(|w| w[0].activation_height <= w[1].activation_height),
        "era activations must be ordered"
    );

    let mut era = table[0];
    for candidate in &table[1..] {
        if height >= candidate.activation_height {
            era = *candidate;
        }
    }
    era
}

/// Compute the work required for the block following `prev` under the
/// legacy retarget rule.
pub fn next_work_required_v1<C: ChainView>(
    prev: Option<&C>,
    algo: Algo,
    params: &ChainParams,
) -> CompactTarget {
    let limit = params.pow_limit(algo);
    let limit_bits = params.pow_limit_bits(algo);

    // Testnet runs a fixed difficulty track.
    if params.network == Network::Testnet {
        return limit_bits;
    }

    // Genesis block
    let Some(prev) = prev else {
        return limit_bits;
    };

    let height = prev.height() + 1;
    let era = era_for_height(height, params);

    // Only change once per interval
    if height % era.retarget_interval != 0 {
        return prev.bits();
    }

    // Walk back the full window, except on the very first retarget where
    // that would double-count the genesis block.
    let blocks_to_go_back = if height == era.retarget_interval {
        era.retarget_interval - 1
    } else {
        era.retarget_interval
    };
    let Some(first) = ancestor_back(prev, blocks_to_go_back) else {
        return limit_bits;
    };

    let actual_timespan = (prev.time() - first.time())
        .clamp(era.min_actual_timespan, era.max_actual_timespan);

    let old_target = prev.bits().decode().target;
    let mut new_target = old_target
        .saturating_mul(U256::from(actual_timespan as u64))
        / U256::from(era.target_timespan as u64);
    if new_target > limit {
        new_target = limit;
    }

    let new_bits = CompactTarget::from_target(new_target);
    debug!(
        height,
        ?algo,
        actual_timespan,
        before = %prev.bits(),
        after = %new_bits,
        "legacy retarget"
    );
    new_bits
}

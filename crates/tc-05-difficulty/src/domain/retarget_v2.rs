//! Averaged multi-algorithm difficulty retarget
//!
//! Active from [`v3_fork_height`](crate::config::ChainParams::v3_fork_height)
//! onward, once per block and independently per algorithm. Two layers:
//!
//! 1. **Global retarget** — the measured duration of the last
//!    `NUM_ALGOS × 10` blocks (by median-time-past, so a single warped
//!    timestamp cannot swing the window) scales the target recorded on
//!    the most recent block mined with the same algorithm. Only a sixth
//!    of the deviation from the expected window passes through, and the
//!    result is clamped to a 20% speed-up / 40% slow-down.
//! 2. **Local correction** — an algorithm that has produced more than
//!    its fair share of recent blocks is tightened by 40% per excess
//!    block, an under-represented one loosened by the same factor, so
//!    hash power cannot profit by hopping between tracks.

use crate::config::ChainParams;
use crate::domain::compact::CompactTarget;
use crate::ports::{ancestor_back, last_block_for_algo, ChainView};
use shared_types::{Algo, Network, U256, NUM_ALGOS};
use tracing::debug;

/// Blocks per algorithm in the averaging window.
pub const AVERAGING_INTERVAL: i64 = 10;

/// Expected seconds between blocks of the same algorithm.
pub const MULTI_ALGO_TARGET_SPACING: i64 = NUM_ALGOS as i64 * 40;

/// Expected duration of one full averaging window.
pub const AVERAGING_TARGET_TIMESPAN: i64 = AVERAGING_INTERVAL * MULTI_ALGO_TARGET_SPACING;

/// Maximum percentage slow-down absorbed per window.
pub const MAX_ADJUST_DOWN: i64 = 40;

/// Maximum percentage speed-up absorbed per window.
pub const MAX_ADJUST_UP: i64 = 20;

/// Percentage scale of one local per-algorithm correction step.
pub const LOCAL_DIFFICULTY_ADJUSTMENT: i64 = 40;

/// Lower clamp on the damped window duration.
pub const MIN_ACTUAL_TIMESPAN: i64 = AVERAGING_TARGET_TIMESPAN * (100 - MAX_ADJUST_UP) / 100;

/// Upper clamp on the damped window duration.
pub const MAX_ACTUAL_TIMESPAN: i64 = AVERAGING_TARGET_TIMESPAN * (100 + MAX_ADJUST_DOWN) / 100;

/// Compute the work required for the block following `prev` for `algo`
/// under the averaged multi-algorithm retarget rule.
pub fn next_work_required_v2<C: ChainView>(
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

    // Bootstrap: every algorithm starts at its ceiling until a full
    // averaging window and at least one same-algorithm block exist.
    let window = (NUM_ALGOS as i64 * AVERAGING_INTERVAL) as u64;
    let (Some(first), Some(prev_algo)) = (ancestor_back(prev, window), last_block_for_algo(prev, algo))
    else {
        return limit_bits;
    };

    // Median-time-past keeps a single manipulated timestamp from moving
    // the measured window; the /6 damping soaks up most of what remains.
    let mut actual_timespan = prev.median_time_past() - first.median_time_past();
    actual_timespan = AVERAGING_TARGET_TIMESPAN + (actual_timespan - AVERAGING_TARGET_TIMESPAN) / 6;
    actual_timespan = actual_timespan.clamp(MIN_ACTUAL_TIMESPAN, MAX_ACTUAL_TIMESPAN);

    // Global retarget, anchored on the last block of this algorithm.
    let mut new_target = prev_algo
        .bits()
        .decode()
        .target
        .saturating_mul(U256::from(actual_timespan as u64))
        / U256::from(AVERAGING_TARGET_TIMESPAN as u64);

    // Local per-algorithm correction. The steps are applied one at a
    // time: integer truncation accumulates per step, and a closed-form
    // power would produce a different (consensus-breaking) result.
    let adjustments = prev_algo.height() as i64 - prev.height() as i64 + NUM_ALGOS as i64 - 1;
    if adjustments > 0 {
        for _ in 0..adjustments {
            new_target = new_target / U256::from((100 + LOCAL_DIFFICULTY_ADJUSTMENT) as u64);
            new_target = new_target.saturating_mul(U256::from(100u64));
        }
    }
    if adjustments < 0 {
        for _ in 0..-adjustments {
            new_target = new_target.saturating_mul(U256::from((100 + LOCAL_DIFFICULTY_ADJUSTMENT) as u64));
            new_target = new_target / U256::from(100u64);
        }
    }

    if new_target > limit {
        new_target = limit;
    }

    let new_bits = CompactTarget::from_target(new_target);
    debug!(
        height = prev.height() + 1,
        ?algo,
        actual_timespan,
        adjustments,
        before = %prev_algo.bits(),
        after = %new_bits,
        "averaged retarget"
    );
    new_bits
}

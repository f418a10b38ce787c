//! Proof-of-work verification and the minimum-work sanity bound.

use crate::config::ChainParams;
use crate::domain::compact::CompactTarget;
use crate::error::{PowError, Result};
use shared_types::{Algo, Hash, U256};

/// Check that `hash` satisfies the difficulty claimed by `bits`.
///
/// Fails when the claimed target is negative, overflowed, zero, or
/// easier than the algorithm's ceiling, and when the hash is
/// numerically above the claimed target.
pub fn check_proof_of_work(
    hash: &Hash,
    bits: CompactTarget,
    algo: Algo,
    params: &ChainParams,
) -> Result<()> {
    let decoded = bits.decode();

    // Range check against the per-algorithm ceiling
    if decoded.negative
        || decoded.target.is_zero()
        || decoded.overflow
        || decoded.target > params.pow_limit(algo)
    {
        return Err(PowError::BelowMinimumWork { algo, bits });
    }

    // Check the work actually done matches the claimed amount
    if U256::from_big_endian(hash) > decoded.target {
        return Err(PowError::HashAboveTarget { algo });
    }

    Ok(())
}

/// True if `bits` claims at least as much work as could possibly be
/// required `delta_time` seconds after the work requirement was `base`.
///
/// Bounds how far a header chain may relax difficulty between known
/// points without the full block index: each elapsed quadruple-timespan
/// allows at most one 400% relaxation. The bound is taken against the
/// scrypt ceiling for every algorithm; this is long-standing behavior
/// and headers validated under it are consensus-visible.
pub fn check_min_work(
    bits: CompactTarget,
    base: CompactTarget,
    delta_time: i64,
    params: &ChainParams,
) -> bool {
    let claimed = bits.decode();
    if claimed.overflow {
        return false;
    }

    let limit = params.pow_limit(Algo::Scrypt);

    // Sparse test networks drop to minimum difficulty once block
    // production has stalled for two spacings.
    if params.allow_min_difficulty_blocks && delta_time > params.target_spacing * 2 {
        return claimed.target <= limit;
    }

    let mut bound = base.decode().target;
    let mut remaining = delta_time;
    while remaining > 0 && bound < limit {
        // One maximally relaxed retarget per four target timespans.
        bound = bound.saturating_mul(U256::from(4u64));
        remaining -= params.target_timespan * 4;
    }
    if bound > limit {
        bound = limit;
    }

    claimed.target <= bound
}

//! Chain-work increment
//!
//! Converts a block's compact difficulty into the expected number of
//! hash attempts it represents. The chain with the greatest accumulated
//! work wins fork comparison; the aggregation itself happens outside
//! this subsystem.

use crate::domain::compact::CompactTarget;
use shared_types::U256;

/// Expected number of hashes needed to meet the target encoded in
/// `bits`, or zero for an invalid or placeholder difficulty.
pub fn proof_increment(bits: CompactTarget) -> U256 {
    let decoded = bits.decode();
    if decoded.negative || decoded.overflow || decoded.target.is_zero() {
        return U256::zero();
    }
    // The exact value is 2^256 / (target + 1), which does not fit in 256
    // bits; since 2^256 >= target + 1, it equals ~target / (target + 1) + 1.
    (!decoded.target / (decoded.target + U256::one())) + U256::one()
}

//! Error types for the difficulty subsystem

use crate::domain::compact::CompactTarget;
use shared_types::Algo;
use thiserror::Error;

/// Result type alias for proof-of-work validation operations
pub type Result<T> = std::result::Result<T, PowError>;

/// Errors that can occur while validating proof of work
///
/// Encoding faults (negative / overflowed compact targets) are not errors;
/// they are flags on [`DecodedTarget`](crate::domain::compact::DecodedTarget)
/// that callers must check. The variants here are validation failures:
/// the block or header carrying the offending values must be rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PowError {
    /// Claimed difficulty is negative, overflowed, zero, or easier than
    /// the algorithm's proof-of-work ceiling
    #[error("nBits below minimum work (algo {algo:?}, bits {bits})")]
    BelowMinimumWork {
        /// Algorithm whose ceiling was violated
        algo: Algo,
        /// The offending compact target
        bits: CompactTarget,
    },

    /// Block hash is numerically above the target claimed by the header
    #[error("hash doesn't match nBits (algo {algo:?})")]
    HashAboveTarget {
        /// Algorithm the block claims to be mined with
        algo: Algo,
    },
}

impl PowError {
    /// Stable label for this rejection, used as a metrics dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::BelowMinimumWork { .. } => "below_minimum_work",
            Self::HashAboveTarget { .. } => "hash_above_target",
        }
    }
}

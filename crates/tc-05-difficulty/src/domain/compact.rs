//! Compact target encoding
//!
//! A 256-bit target is carried in block headers as a 32-bit "compact"
//! value: a base-256 floating-point number with a 3-byte mantissa and a
//! 1-byte exponent (the number of bytes the mantissa is shifted into
//! position). Bit `0x0080_0000` of the mantissa is a sign bit; a target
//! is never legitimately negative, so a set sign bit marks the encoding
//! invalid for consensus purposes.
//!
//! Decoding is lossy-tolerant: several encodings can decode to the same
//! target. Encoding is canonical: the minimal exponent is chosen such
//! that the mantissa fits in 3 bytes with its top bit clear, so
//! `decode(encode(t)) == t` for every target whose significant bits fit
//! in a 3-byte mantissa.

use serde::{Deserialize, Serialize};
use shared_types::U256;
use std::fmt;

/// Sign bit embedded in the top bit of the 3-byte mantissa.
const SIGN_BIT: u32 = 0x0080_0000;

/// Mask selecting the mantissa bytes below the sign bit.
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// A compact (32-bit) encoding of a 256-bit proof-of-work target.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompactTarget(u32);

/// Result of decoding a [`CompactTarget`].
///
/// Callers must check both flags before using `target`: a negative or
/// overflowed decode never represents a valid difficulty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodedTarget {
    /// The decoded 256-bit target (zero when the shift overflows).
    pub target: U256,
    /// Sign bit was set on a non-zero mantissa.
    pub negative: bool,
    /// Non-zero mantissa bits would land above bit 255.
    pub overflow: bool,
}

impl CompactTarget {
    /// Wrap a raw compact value.
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw 32-bit compact value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Decode into a 256-bit target plus sign/overflow flags.
    pub fn decode(self) -> DecodedTarget {
        let size = (self.0 >> 24) as usize;
        let word = self.0 & MANTISSA_MASK;

        let target = if size <= 3 {
            U256::from(word >> (8 * (3 - size)))
        } else if 8 * (size - 3) < 256 {
            U256::from(word) << (8 * (size - 3))
        } else {
            // Every mantissa bit would shift above bit 255; the overflow
            // flag below is what callers must act on.
            U256::zero()
        };

        DecodedTarget {
            target,
            negative: word != 0 && (self.0 & SIGN_BIT) != 0,
            overflow: word != 0
                && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32)),
        }
    }

    /// Encode a target into canonical compact form.
    pub fn from_target(target: U256) -> Self {
        let mut size = (target.bits() + 7) / 8;
        let mut word = if size <= 3 {
            target.low_u64() << (8 * (3 - size))
        } else {
            (target >> (8 * (size - 3))).low_u64()
        };

        // Keep the top mantissa bit clear so the value cannot collide
        // with the sign bit.
        if word & u64::from(SIGN_BIT) != 0 {
            word >>= 8;
            size += 1;
        }

        Self((word as u32) | ((size as u32) << 24))
    }
}

impl fmt::Display for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::Debug for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactTarget(0x{:08x})", self.0)
    }
}

//! # Core Domain Entities
//!
//! Defines the core chain primitives shared by every subsystem.
//!
//! ## Clusters
//!
//! - **Chain**: `Hash`, the `U256` re-export
//! - **Consensus**: [`Algo`], [`Network`]

use serde::{Deserialize, Serialize};

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// A 32-byte hash (big-endian when interpreted numerically).
pub type Hash = [u8; 32];

/// Number of mining algorithms securing the chain.
pub const NUM_ALGOS: usize = 3;

/// Mining algorithm identifier.
///
/// Each block records the algorithm that secured it; each algorithm has
/// its own difficulty track. Immutable per block once mined.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algo {
    /// SHA-256d (Bitcoin-style): sha256(sha256(header))
    #[serde(rename = "sha256d")]
    Sha256d,

    /// Scrypt (Litecoin-style memory-hard hash)
    #[serde(rename = "scrypt")]
    Scrypt,

    /// X11 chained hash
    #[serde(rename = "x11")]
    X11,
}

impl Algo {
    /// All algorithms, in consensus order.
    pub const ALL: [Algo; NUM_ALGOS] = [Algo::Sha256d, Algo::Scrypt, Algo::X11];

    /// Stable index of this algorithm in consensus order.
    pub fn index(self) -> usize {
        match self {
            Algo::Sha256d => 0,
            Algo::Scrypt => 1,
            Algo::X11 => 2,
        }
    }
}

/// Network identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// Production network.
    #[serde(rename = "main")]
    Main,

    /// Public test network (allows minimum-difficulty blocks).
    #[serde(rename = "testnet")]
    Testnet,

    /// Local regression-test network.
    #[serde(rename = "regtest")]
    Regtest,
}

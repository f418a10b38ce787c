//! # Trident Chain - Difficulty & Proof-of-Work Engine (Subsystem 5)
//!
//! **Bounded Context:** Difficulty retargeting & proof-of-work validation
//!
//! ## Purpose
//!
//! This subsystem decides how hard the next block must be to mine,
//! verifies that submitted blocks satisfy their claimed difficulty, and
//! converts difficulty into the chain-work measure used to compare
//! competing chains. It is consensus-critical: every node must compute
//! byte-identical results from identical inputs, so all arithmetic is
//! exact unsigned 256-bit integer math with explicit truncation -
//! never floating point.
//!
//! ## Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Service (Outer)                                    │
//! │  - DifficultyService: dispatcher, template stamping │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Ports (Middle)                                     │
//! │  - Outbound: ChainView (block index), TimeSource    │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (Inner - Pure Logic)                        │
//! │  - Compact target codec                             │
//! │  - Legacy retarget (era table)                      │
//! │  - Averaged multi-algorithm retarget                │
//! │  - Proof-of-work / minimum-work checks              │
//! │  - Chain-work increment                             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Critical Invariants
//!
//! 1. **Determinism**: identical inputs yield bit-identical outputs on
//!    every machine; no floats, no ambient state.
//! 2. **Ceiling clamp**: no retarget ever emits a target easier than the
//!    algorithm's proof-of-work ceiling.
//! 3. **Flag discipline**: a decoded compact target is used only after
//!    its negative/overflow flags are checked.
//! 4. **Bounded history**: insufficient ancestry is a bootstrap case
//!    answered with the ceiling, never an error or a panic.
//! 5. **Read-only traversal**: the block index snapshot is walked, never
//!    mutated or retained.
//!
//! ## Module Structure
//!
//! - [`domain`]: Pure retarget, codec, and validation logic
//! - [`ports`]: Hexagonal architecture interfaces (outbound)
//! - [`service`]: The produced contract for validation and mining
//! - [`config`]: Per-network consensus parameters
//! - [`metrics`]: Optional prometheus instrumentation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
/// Domain models and difficulty logic
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

mod error;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::ChainParams;
pub use error::{PowError, Result};

// Re-export commonly used types
pub use domain::{
    check_min_work, check_proof_of_work, era_for_height, era_table, next_work_required_v1,
    next_work_required_v2, proof_increment, BlockCandidate, CompactTarget, DecodedTarget,
    EraParams,
};

pub use ports::{ancestor_back, last_block_for_algo, ChainView, SystemTimeSource, TimeSource};

pub use service::DifficultyService;

/// Subsystem identifier for cross-subsystem messaging
pub const SUBSYSTEM_ID: u8 = 5;

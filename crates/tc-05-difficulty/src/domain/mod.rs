//! Domain layer - pure difficulty logic
//!
//! Everything in this module is a synchronous, deterministic function of
//! its arguments: no I/O, no clocks, no shared state. Identical inputs
//! must produce bit-identical outputs on every node, or the chain forks.
//!
//! ## Modules
//!
//! - [`compact`]: the 32-bit floating encoding of 256-bit targets
//! - [`retarget_v1`]: legacy height-windowed retarget with era table
//! - [`retarget_v2`]: averaged multi-algorithm retarget
//! - [`pow_check`]: proof-of-work verifier and minimum-work bound
//! - [`work`]: per-block chain-work increment
//! - [`entities`]: block template slice owned by this subsystem

pub mod compact;
pub mod entities;
pub mod pow_check;
pub mod retarget_v1;
pub mod retarget_v2;
pub mod work;

pub use compact::{CompactTarget, DecodedTarget};
pub use entities::BlockCandidate;
pub use pow_check::{check_min_work, check_proof_of_work};
pub use retarget_v1::{era_for_height, era_table, next_work_required_v1, EraParams};
pub use retarget_v2::next_work_required_v2;
pub use work::proof_increment;

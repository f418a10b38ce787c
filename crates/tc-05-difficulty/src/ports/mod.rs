//! Hexagonal architecture ports
//!
//! The difficulty engine is pure: everything it needs from the outside
//! world (the block index, wall-clock time) arrives through the outbound
//! ports defined here.

pub mod outbound;

pub use outbound::{
    ancestor_back, last_block_for_algo, ChainView, SystemTimeSource, TimeSource,
};

//! # Shared Types Crate
//!
//! This crate contains the domain types shared across Trident-Chain
//! subsystems: chain primitives (hashes, the `U256` re-export) and the
//! consensus-level enumerations for mining algorithms and networks.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Consensus stability**: The variants of [`Algo`] and [`Network`] are
//!   consensus-visible; reordering or renaming them is a hard fork.

pub mod entities;

pub use entities::*;

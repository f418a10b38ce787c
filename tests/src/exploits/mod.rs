//! Attack simulations against the difficulty engine.

mod algo_hopping;
mod timestamp_warp;

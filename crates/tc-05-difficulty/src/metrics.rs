//! # Difficulty Metrics
//!
//! Prometheus metrics for monitoring the difficulty engine.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! tc-05-difficulty = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `difficulty_retargets_total` - Counter of next-work computations (by algorithm and rule)
//! - `difficulty_pow_rejected_total` - Counter of rejected proof-of-work checks (by reason)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_counter_vec, CounterVec};

#[cfg(feature = "metrics")]
use shared_types::Algo;

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total next-work computations served, by algorithm and retarget rule
    pub static ref RETARGETS: CounterVec = register_counter_vec!(
        "difficulty_retargets_total",
        "Total number of next-work computations served",
        &["algo", "rule"]
    )
    .expect("Failed to create RETARGETS metric");

    /// Total proof-of-work checks rejected, by rejection reason
    pub static ref POW_REJECTED: CounterVec = register_counter_vec!(
        "difficulty_pow_rejected_total",
        "Total number of proof-of-work checks rejected",
        &["reason"]
    )
    .expect("Failed to create POW_REJECTED metric");
}

/// Record one next-work computation
#[cfg(feature = "metrics")]
pub fn record_retarget(algo: Algo, rule: &str) {
    let label = match algo {
        Algo::Sha256d => "sha256d",
        Algo::Scrypt => "scrypt",
        Algo::X11 => "x11",
    };
    RETARGETS.with_label_values(&[label, rule]).inc();
}

/// Record one rejected proof-of-work check
#[cfg(feature = "metrics")]
pub fn record_pow_rejected(reason: &str) {
    POW_REJECTED.with_label_values(&[reason]).inc();
}

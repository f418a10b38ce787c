//! Time-warp attacks: manipulating timestamps to drag difficulty down
//! (cheap blocks) or claim weaker difficulty than the chain requires.

use crate::fixtures::ChainBuilder;
use crate::init_tracing;
use shared_types::{Algo, U256};
use tc_05_difficulty::{ancestor_back, ChainParams, ChainView, CompactTarget, DifficultyService};

const BITS: CompactTarget = CompactTarget::new(0x1c0f_ffff);

const ROTATION: [Algo; 3] = [Algo::Sha256d, Algo::Scrypt, Algo::X11];

#[test]
fn test_inflated_median_time_is_capped_at_forty_percent() {
    init_tracing();
    let service = DifficultyService::new(ChainParams::main());

    // Post-fork chain on schedule, then the attacker pushes the tip's
    // median-time-past a week into the future to fake a stalled chain.
    let mut tip = ChainBuilder::genesis_at(144_965, 1_000_000, BITS, ROTATION[0])
        .extend(35, 40, BITS, &ROTATION)
        .tip();
    tip.mtp += 7 * 24 * 3_600;

    let due = ancestor_back(&tip, 2).unwrap().algo();
    let relaxed = service.next_work_required(Some(&tip), due);

    // Damping plus the clamp bound the gain to 40% regardless of how
    // far the timestamp was pushed.
    let ceiling_gain = BITS.decode().target * U256::from(1_680u64) / U256::from(1_200u64);
    assert_eq!(relaxed, CompactTarget::from_target(ceiling_gain));
}

#[test]
fn test_backdated_median_time_is_capped_at_twenty_percent() {
    init_tracing();
    let service = DifficultyService::new(ChainParams::main());

    // The mirror attack: faking a sprinting chain to force competitors
    // onto an impossibly hard target.
    let mut tip = ChainBuilder::genesis_at(144_965, 1_000_000, BITS, ROTATION[0])
        .extend(35, 40, BITS, &ROTATION)
        .tip();
    tip.mtp -= 7 * 24 * 3_600;

    let due = ancestor_back(&tip, 2).unwrap().algo();
    let squeezed = service.next_work_required(Some(&tip), due);

    let floor = BITS.decode().target * U256::from(960u64) / U256::from(1_200u64);
    assert_eq!(squeezed, CompactTarget::from_target(floor));
}

#[test]
fn test_minimum_work_rejects_fabricated_weak_headers() {
    init_tracing();
    let service = DifficultyService::new(ChainParams::main());

    // A syncing node knows the difficulty at a checkpoint. An attacker
    // presents headers claiming near-ceiling difficulty "minutes" later.
    let checkpoint = CompactTarget::new(0x1b01_0000);
    let fabricated = service.params().pow_limit_bits(Algo::Scrypt);

    // Minutes of elapsed time allow nowhere near a relaxation to the
    // ceiling from a hard checkpoint.
    assert!(!service.check_min_work(fabricated, checkpoint, 600));

    // The honest bound: what four maximally relaxed retargets allow.
    let plausible = CompactTarget::from_target(
        checkpoint.decode().target.saturating_mul(U256::from(4u64)),
    );
    assert!(service.check_min_work(plausible, checkpoint, 600));
}

#[test]
fn test_mainnet_never_relaxes_to_minimum_difficulty() {
    init_tracing();
    let main = DifficultyService::new(ChainParams::main());
    let testnet = DifficultyService::new(ChainParams::testnet());

    let checkpoint = CompactTarget::new(0x1b01_0000);
    let at_ceiling = main.params().pow_limit_bits(Algo::Scrypt);
    let long_stall = main.params().target_spacing * 100;

    // The sparse-network shortcut exists on testnet only; mainnet still
    // walks the quadrupling bound (checkpoint * 4 after one window).
    assert!(testnet.check_min_work(at_ceiling, checkpoint, long_stall));
    assert!(!main.check_min_work(at_ceiling, checkpoint, long_stall));
}

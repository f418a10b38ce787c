//! Algorithm-switching attacks: pointing surplus hash power at one
//! track, or parking an algorithm until its difficulty decays.

use crate::fixtures::ChainBuilder;
use crate::init_tracing;
use shared_types::Algo;
use tc_05_difficulty::{
    last_block_for_algo, ChainParams, ChainView, CompactTarget, DifficultyService,
};

const BITS: CompactTarget = CompactTarget::new(0x1c0f_ffff);

const ROTATION: [Algo; 3] = [Algo::Sha256d, Algo::Scrypt, Algo::X11];

#[test]
fn test_monopolizing_one_algorithm_tightens_every_block() {
    init_tracing();
    let service = DifficultyService::new(ChainParams::main());

    // Fair rotation up to the fork, then an attacker answers every
    // template request with scrypt blocks only.
    let mut builder = ChainBuilder::genesis_at(144_965, 1_000_000, BITS, ROTATION[0]);
    builder = builder.extend(35, 40, BITS, &ROTATION);

    let mut previous_target = BITS.decode().target;
    for _ in 0..5 {
        let required = {
            let tip = builder.tip_ref();
            service.next_work_required(Some(tip), Algo::Scrypt)
        };
        let target = required.decode().target;
        assert!(
            target < previous_target,
            "each monopolized block must face a harder target"
        );
        previous_target = target;
        builder = builder.push(40, required, Algo::Scrypt);
    }
}

#[test]
fn test_parked_algorithm_recovers_but_never_past_ceiling() {
    init_tracing();
    let service = DifficultyService::new(ChainParams::main());

    // Scrypt hash power leaves; the other two algorithms keep the chain
    // moving for a while.
    let tip = ChainBuilder::genesis_at(144_970, 1_000_000, BITS, Algo::Scrypt)
        .extend(30, 40, BITS, &[Algo::Sha256d, Algo::X11])
        .tip();

    let last_scrypt = last_block_for_algo(&tip, Algo::Scrypt).unwrap();
    assert_eq!(last_scrypt.height(), 144_970);

    let relaxed = service.next_work_required(Some(&tip), Algo::Scrypt);

    // The track loosens so stragglers can re-enter...
    assert!(relaxed.decode().target > BITS.decode().target);
    // ...but stays strictly inside the proof-of-work ceiling.
    assert!(relaxed.decode().target < service.params().pow_limit(Algo::Scrypt));
}

#[test]
fn test_long_parked_algorithm_saturates_at_ceiling() {
    init_tracing();
    let service = DifficultyService::new(ChainParams::main());

    // Near-hardest recorded difficulty and a very long absence: the
    // loosening loop would overshoot wildly without the ceiling clamp.
    let hard_bits = CompactTarget::new(0x1c00_ffff);
    let tip = ChainBuilder::genesis_at(144_900, 1_000_000, hard_bits, Algo::Scrypt)
        .extend(100, 40, BITS, &[Algo::Sha256d, Algo::X11])
        .tip();

    let relaxed = service.next_work_required(Some(&tip), Algo::Scrypt);
    assert_eq!(relaxed, service.params().pow_limit_bits(Algo::Scrypt));
}

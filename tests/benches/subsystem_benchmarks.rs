//! # Cross-Domain Messaging Benchmarks
//!
//! | Subsystem | Operation | Expected cost |
//! |-----------|-----------|---------------|
//! | xd-01 Message Codec | encode + leaf hash | one Keccak over ≤ 2 KiB |
//! | xd-02 Merkle Accumulator | append, branch_root | O(TREE_DEPTH) hashes |
//! | xd-03 Validator Manager | quorum verification | one recovery per signature |
//! | xd-06 Relayer | historical proof | O(TREE_DEPTH²) hashes worst case |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_crypto::{keccak256, ValidatorKeyPair};
use shared_types::{Address, MAX_BODY_LEN};
use std::time::Duration;
use xd_01_message_codec::{encode, hash_encoded_leaf, Message};
use xd_02_merkle_accumulator::{branch_root, IncrementalMerkle};
use xd_03_validator_manager::{sign_checkpoint, verify_quorum, Checkpoint, ValidatorSet};
use xd_06_relayer::Prover;

// ============================================================================
// XD-01: Message Codec
// ============================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("xd-01-message-codec");

    for size in [0usize, 256, MAX_BODY_LEN] {
        let message = Message::new(
            1000,
            Address::new([1; 32]),
            2000,
            Address::new([2; 32]),
            vec![0xAB; size],
        );
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode_and_hash", size), &message, |b, m| {
            b.iter(|| black_box(hash_encoded_leaf(&encode(m), 7)))
        });
    }

    group.finish();
}

// ============================================================================
// XD-02: Merkle Accumulator
// ============================================================================

fn bench_accumulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("xd-02-merkle-accumulator");

    let leaves: Vec<_> = (0u64..1024).map(|i| keccak256(&i.to_be_bytes())).collect();
    group.throughput(Throughput::Elements(leaves.len() as u64));
    group.bench_function("append_1024", |b| {
        b.iter(|| {
            let mut tree = IncrementalMerkle::new();
            for leaf in &leaves {
                black_box(tree.append(*leaf).unwrap());
            }
        })
    });

    let mut prover = Prover::new();
    for leaf in &leaves {
        prover.ingest(*leaf).unwrap();
    }
    let proof = prover.prove(517).unwrap();
    group.bench_function("branch_root", |b| {
        b.iter(|| black_box(branch_root(&proof.leaf, &proof.path, proof.index)))
    });

    group.finish();
}

// ============================================================================
// XD-03: Quorum Verification
// ============================================================================

fn bench_quorum(c: &mut Criterion) {
    let mut group = c.benchmark_group("xd-03-validator-manager");
    group.measurement_time(Duration::from_secs(10));

    let checkpoint = Checkpoint::new([9; 32], 41);
    for n in [4u8, 16, 64] {
        let keys: Vec<_> = (1..=n)
            .map(|i| ValidatorKeyPair::from_bytes([i; 32]).unwrap())
            .collect();
        let set = ValidatorSet::with_default_threshold(keys.iter().map(|k| k.address()).collect())
            .unwrap();
        let signatures: Vec<_> = keys[..set.threshold() as usize]
            .iter()
            .map(|k| sign_checkpoint(k, 1000, &checkpoint).unwrap())
            .collect();

        group.throughput(Throughput::Elements(signatures.len() as u64));
        group.bench_with_input(BenchmarkId::new("verify_quorum", n), &signatures, |b, sigs| {
            b.iter(|| black_box(verify_quorum(&set, 1000, &checkpoint, sigs).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// XD-06: Relayer Prover
// ============================================================================

fn bench_prover(c: &mut Criterion) {
    let mut group = c.benchmark_group("xd-06-relayer");

    let mut prover = Prover::new();
    for i in 0u64..10_000 {
        prover.ingest(keccak256(&i.to_le_bytes())).unwrap();
    }

    group.bench_function("prove_latest", |b| {
        b.iter(|| black_box(prover.prove(black_box(4_321)).unwrap()))
    });
    group.bench_function("prove_against_previous", |b| {
        b.iter(|| black_box(prover.prove_against_previous(black_box(1_234), 5_000).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_codec,
    bench_accumulator,
    bench_quorum,
    bench_prover
);
criterion_main!(benches);

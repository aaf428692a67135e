use criterion::{Criterion, black_box, criterion_group, criterion_main};

use feistel_des::crypto::des::{DES, encrypt};
use feistel_des::crypto::des_key_expansion::DesKeyExpansion;
use feistel_des::crypto::key_expansion::KeyExpansion;

fn bench_single_block(c: &mut Criterion) {
    let key = 0x1334_5779_9BBC_DFF1u64;
    let block = 0x0123_4567_89AB_CDEFu64;

    let mut group = c.benchmark_group("DES single block");

    group.bench_function("encrypt with fresh schedule", |b| {
        b.iter(|| encrypt(black_box(block), black_box(key)))
    });

    let cipher = DES::with_key(key);
    group.bench_function("encrypt with cached schedule", |b| {
        b.iter(|| cipher.encrypt_block(black_box(block)))
    });

    group.bench_function("round trip with cached schedule", |b| {
        b.iter(|| cipher.decrypt_block(cipher.encrypt_block(black_box(block))))
    });

    group.finish();
}

fn bench_key_schedule(c: &mut Criterion) {
    let key = 0x1334_5779_9BBC_DFF1u64;
    c.bench_function("derive 16 round keys", |b| {
        b.iter(|| DesKeyExpansion.generate_round_keys(black_box(key)))
    });
}

criterion_group!(benches, bench_single_block, bench_key_schedule);
criterion_main!(benches);

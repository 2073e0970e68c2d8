//! Ed448 scalar multiplication and X448 ladder benchmarks

use criterion::{
    black_box, criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion,
};
use ecmul_ed448::{EdwardsPoint, GroupLaw, MontgomeryPoint, Scalar, ScalarMul, SigningKey};

fn test_scalar_x() -> Scalar {
    let mut wide = [0u8; 114];
    for (i, b) in wide.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(29).wrapping_add(7);
    }
    Scalar::from_uniform_bytes(&wide)
}

fn test_scalar_y() -> Scalar {
    let mut wide = [0u8; 114];
    for (i, b) in wide.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(83).wrapping_add(101);
    }
    Scalar::from_uniform_bytes(&wide)
}

fn bench_point_mul<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = EdwardsPoint::GENERATOR.double();
    let s = test_scalar_x();
    group.bench_function("scalar_mult", |b| {
        b.iter(|| EdwardsPoint::scalar_mult(&black_box(s), &black_box(p)))
    });
}

fn bench_point_mul_by_generator<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let x = test_scalar_x();
    group.bench_function("scalar_base_mult", |b| {
        b.iter(|| EdwardsPoint::scalar_base_mult(&black_box(x)))
    });
}

fn bench_double_scalar_base_mult<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = EdwardsPoint::generator().double();
    let x = test_scalar_x();
    let y = test_scalar_y();
    group.bench_function("double_scalar_base_mult", |b| {
        b.iter(|| EdwardsPoint::double_scalar_base_mult(&black_box(x), &black_box(p), &black_box(y)))
    });
}

fn bench_ladder<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let u = MontgomeryPoint::GENERATOR;
    let k = [0x5au8; 56];
    group.bench_function("x448 ladder", |b| {
        b.iter(|| black_box(u).mul_clamped(black_box(k)))
    });
    group.bench_function("x448 base via edwards", |b| {
        b.iter(|| MontgomeryPoint::mul_base_clamped(black_box(k)))
    });
}

fn bench_high_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("high-level operations");
    bench_point_mul(&mut group);
    bench_point_mul_by_generator(&mut group);
    bench_double_scalar_base_mult(&mut group);
    bench_ladder(&mut group);
    group.finish();
}

fn bench_signing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ed448 signatures");
    let key = SigningKey::from([0x42u8; 57]);
    let verifying_key = key.verifying_key();
    let sig = key.sign_raw(b"benchmark message");
    group.bench_function("sign", |b| b.iter(|| key.sign_raw(black_box(b"benchmark message"))));
    group.bench_function("verify", |b| {
        b.iter(|| verifying_key.verify_raw(black_box(&sig), black_box(b"benchmark message")))
    });
    group.finish();
}

criterion_group!(benches, bench_high_level, bench_signing);
criterion_main!(benches);

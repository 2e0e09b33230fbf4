use criterion::{criterion_group, BatchSize, Criterion};
use rand::{thread_rng, Rng};
use secp256k1_schnorr::{PrivateKey, Signer};
use std::hint::black_box;

fn benchmark_signature_generation(c: &mut Criterion) {
    let mut digest = [0u8; 32];
    thread_rng().fill(&mut digest);
    c.bench_function(&format!("{}/digest_len={}", module_path!(), digest.len()), |b| {
        b.iter_batched(
            || PrivateKey::from_rng(&mut thread_rng()),
            |signer| {
                black_box(signer.sign(&digest).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_signature_generation
}

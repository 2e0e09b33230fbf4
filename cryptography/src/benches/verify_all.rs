use criterion::{criterion_group, BatchSize, Criterion};
use rand::{thread_rng, Rng};
use secp256k1_schnorr::{batch, PrivateKey, Signer};
use std::hint::black_box;

fn benchmark_verify_all(c: &mut Criterion) {
    for n in [10, 100, 1000].into_iter() {
        for concurrency in [1, 8].into_iter() {
            c.bench_function(
                &format!("{}/items={} conc={}", module_path!(), n, concurrency),
                |b| {
                    b.iter_batched(
                        || {
                            let mut rng = thread_rng();
                            (0..n)
                                .map(|_| {
                                    let signer = PrivateKey::from_rng(&mut rng);
                                    let mut digest = [0u8; 32];
                                    rng.fill(&mut digest);
                                    let signature = signer.sign(&digest).unwrap();
                                    (signer.public_key(), digest, signature)
                                })
                                .collect::<Vec<_>>()
                        },
                        |items| {
                            black_box(batch::verify_all(&items, concurrency).unwrap());
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_verify_all
}

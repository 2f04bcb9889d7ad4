use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use estclust_core::alignment::{AlignParams, Aligner};
use estclust_core::ga::GaParams;
use estclust_core::sequence::Sequence;
use estclust_core::{ClusterConfig, EstClusterer};

mod criterion_config;
use criterion_config::configure_criterion;

/// A random EST-sized sequence over the four plain bases.
fn random_sequence(name: &str, length: usize, rng: &mut StdRng) -> Sequence {
    const BASES: [char; 4] = ['A', 'C', 'G', 'T'];
    let text: String = (0..length).map(|_| BASES[rng.random_range(0..4)]).collect();
    Sequence::from_raw(name, &text)
}

/// A family of related sequences: one parent with light point noise.
fn noisy_family(count: usize, length: usize, rng: &mut StdRng) -> Vec<Sequence> {
    let parent = random_sequence("parent", length, rng);
    let parent_text: String = (0..parent.len()).map(|i| parent.letter(i)).collect();
    (0..count)
        .map(|k| {
            let noisy: String = parent_text
                .chars()
                .map(|c| {
                    if rng.random_bool(0.02) {
                        ['A', 'C', 'G', 'T'][rng.random_range(0..4)]
                    } else {
                        c
                    }
                })
                .collect();
            Sequence::from_raw(format!("member-{k}"), &noisy)
        })
        .collect()
}

fn alignment_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(99);
    let mut group = c.benchmark_group("alignment");

    for length in [100_usize, 300, 500] {
        let x = random_sequence("x", length, &mut rng);
        let y = random_sequence("y", length, &mut rng);
        let aligner = Aligner::new(AlignParams::default());

        group.throughput(Throughput::Elements((length * length) as u64));
        group.bench_with_input(BenchmarkId::new("full_fill", length), &length, |b, _| {
            b.iter(|| black_box(aligner.align(&x, &y).score()));
        });
        group.bench_with_input(BenchmarkId::new("probe", length), &length, |b, _| {
            b.iter(|| black_box(aligner.probe(&x, &y)));
        });
    }
    group.finish();
}

fn clustering_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut sequences = noisy_family(10, 300, &mut rng);
    sequences.extend((0..10).map(|k| random_sequence(&format!("noise-{k}"), 300, &mut rng)));

    let params = GaParams {
        population_size: 10,
        number_of_generations: 10,
        p_mutation: 0.1,
        random_seed: Some(1),
        ..GaParams::default()
    };
    let clusterer = EstClusterer::new(ClusterConfig::default());

    c.bench_function("cluster_twenty_ests", |b| {
        b.iter(|| black_box(clusterer.cluster(&sequences, &params).unwrap()));
    });
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = alignment_benchmarks, clustering_benchmarks
}
criterion_main!(benches);

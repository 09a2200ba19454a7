//! Performance benchmarks for stepnet

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stepnet::genetics::{codec, GenerationRange, UniformSource};
use stepnet::{Network, Topology};

fn random_network(counts: &[usize]) -> Network {
    let topology = Topology::new(counts.to_vec()).unwrap();
    let mut source = UniformSource::new(GenerationRange::default(), 42).unwrap();
    Network::random(topology, &mut source).unwrap()
}

fn benchmark_propagate(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate");

    for width in [4usize, 16, 64].iter() {
        let net = random_network(&[*width, *width, *width, 2]);
        let inputs = vec![1i32; *width];

        group.bench_with_input(BenchmarkId::new("width", width), width, |b, _| {
            b.iter(|| net.propagate(black_box(&inputs)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let net = random_network(&[16, 16, 16, 2]);
    let genes = net.to_genotype();
    let bits = codec::encode_sequence(&genes).unwrap();

    c.bench_function("encode_sequence", |b| {
        b.iter(|| codec::encode_sequence(black_box(&genes)).unwrap());
    });

    c.bench_function("decode_sequence", |b| {
        b.iter(|| codec::decode_sequence(black_box(&bits)).unwrap());
    });
}

fn benchmark_construction(c: &mut Criterion) {
    let topology = Topology::new(vec![16, 16, 16, 2]).unwrap();
    let net = random_network(topology.counts());
    let genes = net.to_genotype();
    let bits = net.to_bitstring().unwrap();

    c.bench_function("from_genotype", |b| {
        b.iter(|| Network::from_genotype(topology.clone(), black_box(&genes)).unwrap());
    });

    c.bench_function("from_bitstring", |b| {
        b.iter(|| Network::from_bitstring(topology.clone(), black_box(&bits)).unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_propagate,
    benchmark_codec,
    benchmark_construction,
);

criterion_main!(benches);

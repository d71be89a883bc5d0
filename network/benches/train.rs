use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use network::{FeedforwardNetwork, Topology};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TOPOLOGIES: &[(usize, usize, usize)] = &[(2, 4, 1), (5, 10, 1), (32, 64, 4)];

fn create_network(topology: Topology) -> FeedforwardNetwork {
    let mut rng = StdRng::seed_from_u64(42);
    FeedforwardNetwork::with_rng(topology, 0.1, &mut rng).unwrap()
}

fn bench_train_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedforward/train");

    for &(input, hidden, output) in TOPOLOGIES {
        let topology = Topology::new(input, hidden, output).unwrap();
        let mut network = create_network(topology);
        let inputs = vec![0.5; input];
        let targets = vec![0.25; output];

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}x{}", input, hidden, output)),
            &(inputs, targets),
            |b, (inputs, targets)| {
                b.iter(|| network.train(black_box(inputs), black_box(targets)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedforward/predict");

    for &(input, hidden, output) in TOPOLOGIES {
        let topology = Topology::new(input, hidden, output).unwrap();
        let network = create_network(topology);
        let inputs = vec![0.5; input];

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}x{}", input, hidden, output)),
            &inputs,
            |b, inputs| {
                b.iter(|| network.predict(black_box(inputs)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_train_step, bench_predict);
criterion_main!(benches);

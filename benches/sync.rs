use criterion::{black_box, criterion_group, criterion_main, Criterion};
use entrain::cluster::{Clustering, SyncNet};
use entrain::sync::{AdjacencyRepr, Connectivity, PhaseInit, Solver, SyncConfig, SyncNetwork};
use rand::prelude::*;

fn blobs(n_per_blob: usize, centers: &[(f64, f64)], seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(n_per_blob * centers.len());
    for &(cx, cy) in centers {
        for _ in 0..n_per_blob {
            data.push(vec![
                cx + rng.random::<f64>() * 0.5,
                cy + rng.random::<f64>() * 0.5,
            ]);
        }
    }
    data
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for solver in [Solver::Fast, Solver::Rk4] {
        group.bench_function(format!("all_to_all_n100_{solver:?}"), |b| {
            b.iter(|| {
                let mut network = SyncNetwork::new(
                    100,
                    Connectivity::AllToAll,
                    AdjacencyRepr::Matrix,
                    SyncConfig {
                        initial_phases: PhaseInit::Equipartition,
                        ..SyncConfig::default()
                    },
                )
                .unwrap();
                network.simulate(10, 1.0, solver, false).unwrap();
                black_box(network.phases()[0]);
            })
        });
    }

    group.finish();
}

fn bench_syncnet(c: &mut Criterion) {
    let mut group = c.benchmark_group("syncnet");

    let data = blobs(25, &[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)], 42);
    group.bench_function("fit_predict_n75_three_blobs", |b| {
        b.iter(|| {
            let model = SyncNet::new(1.0).with_solver(Solver::Fast).with_seed(42);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_simulate, bench_syncnet);
criterion_main!(benches);

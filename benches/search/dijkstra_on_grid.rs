use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metro_core::prelude::*;
use metro_core::{connection, station};
use rand::prelude::*;

criterion_group!(benches, criterion_benchmark, build_graph);
criterion_main!(benches);

/// `size` x `size` stations, 0.01 degrees apart, every row and column is a line
fn grid_network(size: u32) -> (StationRegistry, Vec<Connection>) {
    let id = |row: u32, col: u32| row * size + col;

    let stations: StationRegistry = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .map(|(row, col)| {
            let s = station!(
                id(row, col),
                48.0 + row as f64 * 0.01,
                11.0 + col as f64 * 0.01
            );
            (s.id, s)
        })
        .collect();

    let mut connections = Vec::new();
    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                connections.push(connection!(id(row, col), id(row, col + 1); row));
            }
            if row + 1 < size {
                connections.push(connection!(id(row, col), id(row + 1, col); size + col));
            }
        }
    }

    (stations, connections)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    for size in [10, 30, 100] {
        let (stations, connections) = grid_network(size);
        let g = Graph::build(&stations, &connections).unwrap();
        let n = size * size;

        c.bench_with_input(BenchmarkId::new("dijkstra_corner_to_corner", n), &g, |b, g| {
            b.iter(|| shortest_path(g, black_box(0), black_box(n - 1)))
        });

        let mut rng = StdRng::seed_from_u64(42);
        let queries: Vec<(StationId, StationId)> = (0..100)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
            .collect();

        c.bench_with_input(BenchmarkId::new("dijkstra_random", n), &g, |b, g| {
            b.iter(|| {
                for (src, dst) in &queries {
                    let _ = shortest_path(g, *src, *dst);
                }
            })
        });
    }
}

fn build_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in [10u32, 30, 100] {
        let (stations, connections) = grid_network(size);
        group.throughput(criterion::Throughput::Elements(connections.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size * size), &size, |b, _| {
            b.iter(|| Graph::build(&stations, &connections).unwrap());
        });
    }
    group.finish();
}

//! Benchmarks for Delaunay triangulation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use trigon::delaunay::{triangulate, triangulate_with, DelaunayConfig};
use trigon::{NullCanvas, Point2};

fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<i64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state % 10_000) as i64;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state % 10_000) as i64;

        points.push(Point2::new(x, y));
    }

    points
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    for count in [100, 1000, 5000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("delaunay", count), &points, |b, points| {
            b.iter(|| triangulate(black_box(points)))
        });

        let plain = DelaunayConfig { legalize: false };
        group.bench_with_input(BenchmarkId::new("no_flips", count), &points, |b, points| {
            b.iter(|| triangulate_with(black_box(points), &plain, &mut NullCanvas))
        });
    }

    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let points = generate_random_points(2000, 777);
    let triangulation = match triangulate(&points) {
        Ok(triangulation) => triangulation,
        Err(err) => panic!("benchmark input rejected: {}", err),
    };
    let queries = generate_random_points(1000, 4242);

    c.bench_function("locate_1000", |b| {
        b.iter(|| {
            for &q in &queries {
                let _ = triangulation.locate(black_box(q));
            }
        })
    });
}

criterion_group!(benches, bench_triangulate, bench_locate);
criterion_main!(benches);

// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compare tree-backed queries against linear scans over the same point set.

use bramble_kdtree::KdTree;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn next_point(&mut self) -> Point {
        let x = self.next_f64();
        Point::new(x, self.next_f64())
    }
}

fn gen_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count).map(|_| rng.next_point()).collect()
}

fn build_tree(pts: &[Point]) -> KdTree {
    let mut tree = KdTree::new();
    for &p in pts {
        tree.insert(p).expect("finite coordinates");
    }
    tree
}

fn gen_windows(count: usize, side: f64, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let x0 = rng.next_f64() * (1.0 - side);
            let y0 = rng.next_f64() * (1.0 - side);
            Rect::new(x0, y0, x0 + side, y0 + side)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let pts = gen_points(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_{n}"), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| black_box(build_tree(&pts)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    let pts = gen_points(100_000, 0x5eed);
    let tree = build_tree(&pts);
    let windows = gen_windows(256, 0.05, 0x77aa11);
    group.throughput(Throughput::Elements(windows.len() as u64));

    group.bench_function("tree", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for &w in &windows {
                total += tree.range(black_box(w)).expect("finite rect").len();
            }
            black_box(total)
        });
    });

    group.bench_function("linear_scan", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for &w in &windows {
                total += pts
                    .iter()
                    .filter(|p| w.x0 <= p.x && p.x <= w.x1 && w.y0 <= p.y && p.y <= w.y1)
                    .count();
            }
            black_box(total)
        });
    });
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let pts = gen_points(100_000, 0x5eed);
    let tree = build_tree(&pts);
    let queries = gen_points(256, 0x9e8877);
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("tree", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for &q in &queries {
                let p = tree
                    .nearest(black_box(q))
                    .expect("finite point")
                    .expect("non-empty tree");
                acc += p.distance_squared(q);
            }
            black_box(acc)
        });
    });

    group.bench_function("brute_force", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for &q in &queries {
                let best = pts
                    .iter()
                    .map(|p| p.distance_squared(q))
                    .fold(f64::INFINITY, f64::min);
                acc += best;
            }
            black_box(acc)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_range, bench_nearest);
criterion_main!(benches);

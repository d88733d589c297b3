// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::DVec3;
use vantage_pick::shapes::{PointSet, Polyline, Sphere};
use vantage_pick::{Interest, PickParams, Ray, RayHit, RayHitTest, SceneTree, pick};

/// Root 0 with `n` interactive sphere children on a square grid in `z = 0`.
struct Grid {
    children: Vec<usize>,
    spheres: Vec<Sphere>,
}

impl Grid {
    fn new(n: usize) -> Self {
        let side = (n as f64).sqrt().ceil() as usize;
        let spheres = (0..n)
            .map(|i| Sphere {
                center: DVec3::new((i % side) as f64 * 2.0, (i / side) as f64 * 2.0, 0.0),
                radius: 0.5,
            })
            .collect();
        Self {
            children: (1..=n).collect(),
            spheres,
        }
    }
}

impl SceneTree for Grid {
    type Node = usize;

    fn children(&self, node: usize) -> &[usize] {
        if node == 0 { &self.children } else { &[] }
    }

    fn interests(&self, node: usize) -> Interest {
        if node == 0 {
            Interest::empty()
        } else {
            Interest::CLICK
        }
    }

    fn hit_test(&self, node: usize, ray: &Ray, params: &PickParams) -> Option<RayHit> {
        let sphere = self.spheres.get(node.checked_sub(1)?)?;
        sphere.ray_hit(ray, params)
    }
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/sphere_grid");
    let params = PickParams::default();
    // Straight down onto the first sphere.
    let ray = Ray::new(DVec3::new(0.0, 0.0, 10.0), DVec3::NEG_Z).unwrap();

    for n in [16_usize, 256, 4_096] {
        let grid = Grid::new(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &grid, |b, grid| {
            b.iter(|| black_box(pick(grid, [0], black_box(&ray), &params)));
        });
    }

    group.finish();
}

fn bench_thin_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/thin");
    let params = PickParams::default();
    let ray = Ray::new(DVec3::new(0.05, 0.05, 10.0), DVec3::NEG_Z).unwrap();

    for n in [64_usize, 1_024, 16_384] {
        let points: Vec<DVec3> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64 * core::f64::consts::TAU;
                DVec3::new(t.cos() * 3.0, t.sin() * 3.0, 0.0)
            })
            .chain([DVec3::ZERO])
            .collect();
        let line = Polyline {
            points: points.clone(),
        };
        let cloud = PointSet { points };
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("polyline", n), &line, |b, line| {
            b.iter(|| black_box(line.ray_hit(black_box(&ray), &params)));
        });
        group.bench_with_input(BenchmarkId::new("point_set", n), &cloud, |b, cloud| {
            b.iter(|| black_box(cloud.ray_hit(black_box(&ray), &params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid, bench_thin_geometry);
criterion_main!(benches);

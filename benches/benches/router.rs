// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use glam::DVec3;
use kurbo::{Point, Size};
use vantage_event_state::pointer::{Modifiers, PointerButton};
use vantage_pick::shapes::Sphere;
use vantage_pick::{Interest, PickParams, Ray, RayHit, RayHitTest, SceneTree, ViewProjection};
use vantage_router::{InputRouter, SceneEvent, Viewer};
use vantage_selection::{SelectionChanged, SelectionManager};

/// A row of `n` spheres seen head-on, with events counted and dropped.
struct Row {
    children: Vec<usize>,
    spheres: Vec<Sphere>,
    camera: ViewProjection,
    delivered: usize,
}

impl Row {
    fn new(n: usize) -> Self {
        let spheres = (0..n)
            .map(|i| Sphere {
                center: DVec3::new(i as f64 * 0.5 - n as f64 * 0.25, 0.0, 0.0),
                radius: 0.2,
            })
            .collect();
        let camera = ViewProjection::look_at_perspective(
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::ZERO,
            DVec3::Y,
            core::f64::consts::FRAC_PI_2,
            4.0 / 3.0,
            0.1,
            100.0,
        )
        .unwrap();
        Self {
            children: (1..=n).collect(),
            spheres,
            camera,
            delivered: 0,
        }
    }
}

impl SceneTree for Row {
    type Node = usize;

    fn children(&self, node: usize) -> &[usize] {
        if node == 0 { &self.children } else { &[] }
    }

    fn interests(&self, node: usize) -> Interest {
        if node == 0 {
            Interest::empty()
        } else {
            Interest::INTERACTIVE
        }
    }

    fn hit_test(&self, node: usize, ray: &Ray, params: &PickParams) -> Option<RayHit> {
        self.spheres.get(node.checked_sub(1)?)?.ray_hit(ray, params)
    }
}

impl Viewer for Row {
    type Listener = u8;
    type View = ();
    type Camera = ViewProjection;

    fn surface_size(&self) -> Size {
        Size::new(800.0, 600.0)
    }

    fn camera(&self, _: usize) -> Option<&ViewProjection> {
        Some(&self.camera)
    }

    fn view(&self, _: usize) -> Option<()> {
        Some(())
    }

    fn emit(&mut self, _: usize, _: &SceneEvent<'_, usize, ()>) {
        self.delivered += 1;
    }

    fn notify(&mut self, _: u8, _: &SceneEvent<'_, usize, ()>) {
        self.delivered += 1;
    }

    fn selection_changed(&mut self, _: &SelectionChanged<usize>) {
        self.delivered += 1;
    }
}

fn bench_hover_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("router/hover_sweep");

    for n in [8_usize, 64, 512] {
        let mut viewer = Row::new(n);
        let mut router: InputRouter<usize, u8, ()> = InputRouter::new();
        router.set_active_scene(&mut viewer, Some(0));

        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                for x in (0..800).step_by(20) {
                    let at = Point::new(f64::from(x), 300.0);
                    router.handle_move(&mut viewer, black_box(at), PointerButton::None);
                }
            });
        });
        black_box(viewer.delivered);
    }

    group.finish();
}

fn bench_click(c: &mut Criterion) {
    let mut viewer = Row::new(64);
    let mut router: InputRouter<usize, u8, ()> = InputRouter::new();
    router.set_active_scene(&mut viewer, Some(0));
    let center = Point::new(400.0, 300.0);
    router.handle_move(&mut viewer, center, PointerButton::None);

    c.bench_function("router/click", |b| {
        b.iter(|| {
            router.handle_press(&mut viewer, center, PointerButton::Primary, Modifiers::empty());
            router.handle_release(&mut viewer, center, PointerButton::Primary, Modifiers::empty());
        });
    });
}

fn bench_deselect_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/deselect_all");

    for len in [16_u32, 256, 4_096] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut manager = SelectionManager::new();
                    for key in 0..len {
                        manager.toggle(key, &mut ());
                    }
                    manager
                },
                |mut manager| {
                    manager.deselect_all(&mut ());
                    black_box(manager);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hover_sweep, bench_click, bench_deselect_all);
criterion_main!(benches);

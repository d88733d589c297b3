// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Vantage demos: a small arena scene that
//! implements [`Viewer`] and logs every delivered event.

use glam::{DAffine3, DVec3};
use kurbo::Size;
use tracing_subscriber::EnvFilter;
use vantage_pick::shapes::{Aabb, PointSet, Polyline, Sphere, Transformed};
use vantage_pick::{Interest, PickParams, Ray, RayHit, RayHitTest, SceneTree, ViewProjection};
use vantage_router::{SceneEvent, Viewer};
use vantage_selection::SelectionChanged;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Geometry a demo node can carry.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
    Aabb(Aabb),
    Polyline(Polyline),
    Points(PointSet),
    Moved(Transformed<Sphere>),
}

impl RayHitTest for Shape {
    fn ray_hit(&self, ray: &Ray, params: &PickParams) -> Option<RayHit> {
        match self {
            Self::Sphere(s) => s.ray_hit(ray, params),
            Self::Aabb(b) => b.ray_hit(ray, params),
            Self::Polyline(l) => l.ray_hit(ray, params),
            Self::Points(p) => p.ray_hit(ray, params),
            Self::Moved(t) => t.ray_hit(ray, params),
        }
    }
}

/// One scene node.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: &'static str,
    pub children: Vec<usize>,
    pub interests: Interest,
    pub shape: Option<Shape>,
}

fn node(
    name: &'static str,
    children: Vec<usize>,
    interests: Interest,
    shape: Option<Shape>,
) -> Node {
    Node {
        name,
        children,
        interests,
        shape,
    }
}

/// A viewer with one scene, a fixed camera and an event log.
#[derive(Debug)]
pub struct DemoViewer {
    pub nodes: Vec<Node>,
    pub camera: ViewProjection,
    pub surface: Size,
    /// Orbit angle, captured as the view snapshot when a drag starts.
    pub orbit: f64,
    pub log: Vec<String>,
}

/// Root node of [`DemoViewer::gallery`].
pub const ROOT: usize = 0;

impl DemoViewer {
    /// A row of shapes on the `z = 0` plane, seen from `z = 10`.
    ///
    /// | node | shape | pixel (800x600) |
    /// |------|-------|-----------------|
    /// | 1 `ball` | sphere at the origin | (400, 300) |
    /// | 2 `crate` | box around `x = 4` | (520, 300) |
    /// | 3 `rig` | group owning 4 | |
    /// | 4 `rig-arm` | sphere moved to `x = -4` | (280, 300) |
    /// | 5 `wire` | polyline at `y = 3` | (400, 210) |
    /// | 6 `stars` | points at `y = -3`, never picked (wheel interest only) | (400, 390) |
    pub fn gallery() -> Result<Self, vantage_pick::PickError> {
        let nodes = vec![
            node("scene", vec![1, 2, 3, 5, 6], Interest::empty(), None),
            node(
                "ball",
                vec![],
                Interest::INTERACTIVE,
                Some(Shape::Sphere(Sphere {
                    center: DVec3::ZERO,
                    radius: 1.0,
                })),
            ),
            node(
                "crate",
                vec![],
                Interest::CLICK | Interest::DRAG | Interest::DROP,
                Some(Shape::Aabb(Aabb {
                    min: DVec3::new(3.0, -1.0, -1.0),
                    max: DVec3::new(5.0, 1.0, 1.0),
                })),
            ),
            node("rig", vec![4], Interest::INTERACTIVE, None),
            node(
                "rig-arm",
                vec![],
                Interest::empty(),
                Some(Shape::Moved(Transformed {
                    world_from_local: DAffine3::from_translation(DVec3::new(-4.0, 0.0, 0.0)),
                    geometry: Sphere {
                        center: DVec3::ZERO,
                        radius: 1.0,
                    },
                })),
            ),
            node(
                "wire",
                vec![],
                Interest::MOUSE_OVER | Interest::MOUSE_LEAVE,
                Some(Shape::Polyline(Polyline {
                    points: vec![DVec3::new(-2.0, 3.0, 0.0), DVec3::new(2.0, 3.0, 0.0)],
                })),
            ),
            node(
                "stars",
                vec![],
                Interest::MOUSE_WHEEL,
                Some(Shape::Points(PointSet {
                    points: vec![DVec3::new(0.0, -3.0, 0.0)],
                })),
            ),
        ];
        let camera = ViewProjection::look_at_perspective(
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::ZERO,
            DVec3::Y,
            core::f64::consts::FRAC_PI_2,
            800.0 / 600.0,
            0.1,
            100.0,
        )?;
        Ok(Self {
            nodes,
            camera,
            surface: Size::new(800.0, 600.0),
            orbit: 0.0,
            log: Vec::new(),
        })
    }

    /// Display name of `node`.
    pub fn name(&self, node: usize) -> &'static str {
        self.nodes.get(node).map_or("?", |n| n.name)
    }

    fn describe(&self, event: &SceneEvent<'_, usize, f64>) -> String {
        match event {
            SceneEvent::Drag { session } | SceneEvent::Drop { session } => format!(
                "{} (moved {:?}, orbit at start {:?})",
                event.name(),
                session.displacement(),
                session.view
            ),
            SceneEvent::MouseWheel { delta, .. } => format!("{} {delta:+}", event.name()),
            _ => event.name().to_owned(),
        }
    }
}

impl SceneTree for DemoViewer {
    type Node = usize;

    fn children(&self, node: usize) -> &[usize] {
        self.nodes.get(node).map_or(&[][..], |n| n.children.as_slice())
    }

    fn interests(&self, node: usize) -> Interest {
        self.nodes
            .get(node)
            .map_or(Interest::empty(), |n| n.interests)
    }

    fn hit_test(&self, node: usize, ray: &Ray, params: &PickParams) -> Option<RayHit> {
        self.nodes.get(node)?.shape.as_ref()?.ray_hit(ray, params)
    }
}

impl Viewer for DemoViewer {
    type Listener = &'static str;
    type View = f64;
    type Camera = ViewProjection;

    fn surface_size(&self) -> Size {
        self.surface
    }

    fn camera(&self, scene: usize) -> Option<&ViewProjection> {
        (scene == ROOT).then_some(&self.camera)
    }

    fn view(&self, scene: usize) -> Option<f64> {
        (scene == ROOT).then_some(self.orbit)
    }

    fn emit(&mut self, target: usize, event: &SceneEvent<'_, usize, f64>) {
        // Nodes only hear what they asked for.
        if !self.interests(target).contains(event.kind().interest()) {
            return;
        }
        let line = format!("{:>8} <- {}", self.name(target), self.describe(event));
        tracing::info!("{line}");
        self.log.push(line);
    }

    fn notify(&mut self, listener: &'static str, event: &SceneEvent<'_, usize, f64>) {
        if let SceneEvent::Drag { session } = event {
            self.orbit += session.last_delta.x * 0.01;
        }
        let line = format!("{listener:>8} <- {}", self.describe(event));
        tracing::info!("{line}");
        self.log.push(line);
    }

    fn selection_changed(&mut self, change: &SelectionChanged<usize>) {
        let names = |keys: &[usize]| keys.iter().map(|&k| self.name(k)).collect::<Vec<_>>();
        let line = format!(
            "selection {:?} -> {:?}",
            names(&change.old),
            names(&change.new)
        );
        tracing::info!("{line}");
        self.log.push(line);
    }
}

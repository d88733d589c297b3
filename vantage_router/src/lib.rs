// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_router --heading-base-level=0

//! Vantage Router: pointer input routing for interactive 3D scenes.
//!
//! ## Overview
//!
//! [`InputRouter`] receives raw input (press, move, release, wheel, double
//! click, keys) in surface pixel coordinates and turns it into semantic
//! [`SceneEvent`]s: hover enter/leave, click, drag, drop, wheel steps and
//! selection changes. It keeps the state that spans events (pointer state, the
//! single drag session, the hover record and the selection) and nothing else.
//!
//! ## The viewer
//!
//! The host application implements [`Viewer`], which extends
//! [`vantage_pick::SceneTree`] with the surface size, a camera per scene, view
//! snapshots and event delivery. The router stores only `Copy` handles and
//! borrows the viewer for each call, so dispatch is synchronous and a handler
//! can never re-enter the router.
//!
//! ## Picking
//!
//! Hover is resolved by casting a ray through the active scene's camera and
//! testing the registered interactive scenes followed by the active scene.
//! Without an active scene (or without a camera for it) nothing is hovered.
//!
//! ## Routing
//!
//! Events about a hit go to that object. Drag, wheel and double click with no
//! object under the cursor are broadcast to every fallback listener instead.
//! Selection `select`/`deselect` events go to the toggled object, and every
//! membership change is followed by one [`Viewer::selection_changed`] call
//! carrying old and new snapshots.
//!
//! ## Example
//!
//! ```
//! use glam::DVec3;
//! use kurbo::{Point, Size};
//! use vantage_event_state::pointer::{Modifiers, PointerButton};
//! use vantage_pick::shapes::Sphere;
//! use vantage_pick::{Interest, PickParams, Ray, RayHit, RayHitTest, SceneTree, ViewProjection};
//! use vantage_router::{InputRouter, SceneEvent, Viewer};
//! use vantage_selection::SelectionChanged;
//!
//! // Node 0 is the scene root, node 1 a clickable unit sphere at the origin.
//! struct Demo {
//!     camera: ViewProjection,
//!     log: Vec<String>,
//! }
//!
//! impl SceneTree for Demo {
//!     type Node = usize;
//!     fn children(&self, node: usize) -> &[usize] {
//!         if node == 0 { &[1] } else { &[] }
//!     }
//!     fn interests(&self, node: usize) -> Interest {
//!         if node == 1 { Interest::CLICK } else { Interest::empty() }
//!     }
//!     fn hit_test(&self, node: usize, ray: &Ray, params: &PickParams) -> Option<RayHit> {
//!         let sphere = Sphere { center: DVec3::ZERO, radius: 1.0 };
//!         if node == 1 { sphere.ray_hit(ray, params) } else { None }
//!     }
//! }
//!
//! impl Viewer for Demo {
//!     type Listener = ();
//!     type View = ();
//!     type Camera = ViewProjection;
//!     fn surface_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//!     fn camera(&self, _: usize) -> Option<&ViewProjection> {
//!         Some(&self.camera)
//!     }
//!     fn view(&self, _: usize) -> Option<()> {
//!         Some(())
//!     }
//!     fn emit(&mut self, target: usize, event: &SceneEvent<'_, usize, ()>) {
//!         self.log.push(format!("{} -> {target}", event.name()));
//!     }
//!     fn notify(&mut self, _: (), _: &SceneEvent<'_, usize, ()>) {}
//!     fn selection_changed(&mut self, change: &SelectionChanged<usize>) {
//!         self.log.push(format!("selection {:?}", change.new));
//!     }
//! }
//!
//! let camera = ViewProjection::look_at_perspective(
//!     DVec3::new(0.0, 0.0, 10.0),
//!     DVec3::ZERO,
//!     DVec3::Y,
//!     core::f64::consts::FRAC_PI_2,
//!     800.0 / 600.0,
//!     0.1,
//!     100.0,
//! )
//! .unwrap();
//! let mut viewer = Demo { camera, log: Vec::new() };
//! let mut router: InputRouter<usize, (), ()> = InputRouter::new();
//! router.set_active_scene(&mut viewer, Some(0));
//!
//! let center = Point::new(400.0, 300.0);
//! router.handle_move(&mut viewer, center, PointerButton::None);
//! router.handle_press(&mut viewer, center, PointerButton::Primary, Modifiers::empty());
//! router.handle_release(&mut viewer, center, PointerButton::Primary, Modifiers::empty());
//!
//! assert_eq!(
//!     viewer.log,
//!     ["mouseover -> 1", "select -> 1", "selection [1]", "click -> 1"]
//! );
//! assert!(router.is_selected(&1));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to dependencies.
//! - `libm`: `no_std` floating point support.
//! - `serde`: derive `Serialize`/`Deserialize` for [`RouterConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod event;
mod router;
mod viewer;

pub use config::RouterConfig;
pub use event::{EventKind, SceneEvent};
pub use router::InputRouter;
pub use viewer::Viewer;

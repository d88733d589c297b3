// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted pointer session against the demo gallery.
//!
//! Hover, click, extend-click, an object drag, a camera drag that falls
//! through to a fallback listener, wheel steps and a right-click clear.
//!
//! Run:
//! - `cargo run -p vantage_demos --example router_session`
//! - `RUST_LOG=trace cargo run -p vantage_demos --example router_session` for raw input

use kurbo::Point;
use vantage_demos::{DemoViewer, ROOT, init_tracing};
use vantage_event_state::pointer::{Modifiers, PointerButton};
use vantage_event_state::wheel::WheelDelta;
use vantage_router::InputRouter;

const BALL: Point = Point::new(400.0, 300.0);
const CRATE: Point = Point::new(520.0, 300.0);
const RIG: Point = Point::new(280.0, 300.0);
const WIRE: Point = Point::new(400.0, 210.0);
const SKY: Point = Point::new(80.0, 60.0);

fn main() -> Result<(), vantage_pick::PickError> {
    init_tracing();

    let mut viewer = DemoViewer::gallery()?;
    let mut router: InputRouter<usize, &'static str, f64> = InputRouter::new();
    router.register_fallback_listener("camera");
    router.set_active_scene(&mut viewer, Some(ROOT));

    println!("== Hover ==");
    for at in [WIRE, BALL, RIG, SKY] {
        router.handle_move(&mut viewer, at, PointerButton::None);
    }

    println!("== Click, then extend with Ctrl ==");
    let none = Modifiers::empty();
    router.handle_move(&mut viewer, BALL, PointerButton::None);
    router.handle_press(&mut viewer, BALL, PointerButton::Primary, none);
    router.handle_release(&mut viewer, BALL, PointerButton::Primary, none);
    router.handle_move(&mut viewer, RIG, PointerButton::None);
    router.handle_press(&mut viewer, RIG, PointerButton::Primary, Modifiers::CTRL);
    router.handle_release(&mut viewer, RIG, PointerButton::Primary, Modifiers::CTRL);
    println!("  selected: {:?}", names(&viewer, router.selection()));

    println!("== Drag the crate ==");
    router.handle_move(&mut viewer, CRATE, PointerButton::None);
    router.handle_press(&mut viewer, CRATE, PointerButton::Primary, none);
    for step in 1..=3 {
        let at = CRATE + kurbo::Vec2::new(0.0, 8.0 * f64::from(step));
        router.handle_move(&mut viewer, at, PointerButton::Primary);
    }
    let moved = router.normalized_drag(viewer.surface);
    router.handle_release(&mut viewer, CRATE, PointerButton::Primary, none);
    println!("  normalized displacement: {moved:?}");

    println!("== Orbit the camera from empty space ==");
    router.handle_move(&mut viewer, SKY, PointerButton::None);
    router.handle_press(&mut viewer, SKY, PointerButton::Primary, none);
    for step in 1..=4 {
        let at = SKY + kurbo::Vec2::new(15.0 * f64::from(step), 0.0);
        router.handle_move(&mut viewer, at, PointerButton::Primary);
    }
    router.handle_release(&mut viewer, SKY, PointerButton::Primary, none);
    println!("  orbit is now {:.2}", viewer.orbit);

    println!("== Wheel ==");
    router.handle_wheel(&mut viewer, WheelDelta::Wheel(120.0));
    router.handle_move(&mut viewer, BALL, PointerButton::None);
    router.handle_wheel(&mut viewer, WheelDelta::Detail(-3.0));

    println!("== Right click clears ==");
    router.handle_press(&mut viewer, BALL, PointerButton::Secondary, none);
    router.handle_release(&mut viewer, BALL, PointerButton::Secondary, none);
    println!("  selected: {:?}", names(&viewer, router.selection()));

    println!("== Log ==");
    for line in &viewer.log {
        println!("  {line}");
    }
    Ok(())
}

fn names(viewer: &DemoViewer, keys: &[usize]) -> Vec<&'static str> {
    keys.iter().map(|&k| viewer.name(k)).collect()
}

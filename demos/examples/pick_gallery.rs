// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep the cursor across the demo gallery and print what each pixel picks.
//!
//! Shows hierarchy attribution (the rig owns its arm), thin geometry picked
//! within tolerance (the wire), and nodes that are never candidates (the
//! stars only listen for the wheel).
//!
//! Run:
//! - `cargo run -p vantage_demos --example pick_gallery`

use kurbo::Point;
use vantage_demos::{DemoViewer, ROOT, init_tracing};
use vantage_pick::{PickParams, resolve};

fn main() -> Result<(), vantage_pick::PickError> {
    init_tracing();

    let viewer = DemoViewer::gallery()?;
    let params = PickParams::default();

    let rows = [("y=210", 210.0), ("y=300", 300.0), ("y=390", 390.0)];
    for (label, y) in rows {
        println!("== Row {label} ==");
        for x in (240..=560).step_by(40) {
            let at = Point::new(f64::from(x), y);
            match resolve(&viewer, at, viewer.surface, &viewer.camera, [ROOT], &params) {
                Some(hover) => println!(
                    "  ({x:>3}, {y:>3}) -> {} via {} at {:.2} ({:?})",
                    viewer.name(hover.object),
                    viewer.name(hover.part),
                    hover.hit.distance,
                    hover.hit.kind,
                ),
                None => println!("  ({x:>3}, {y:>3}) -> nothing"),
            }
        }
    }

    println!("== Tighter line tolerance ==");
    let strict = PickParams {
        line_precision: 0.01,
        ..params
    };
    let near_wire = Point::new(400.0, 214.0);
    for (name, p) in [("default", &params), ("strict", &strict)] {
        let hit = resolve(&viewer, near_wire, viewer.surface, &viewer.camera, [ROOT], p);
        println!("  {name:>7}: {:?}", hit.map(|h| viewer.name(h.object)));
    }
    Ok(())
}

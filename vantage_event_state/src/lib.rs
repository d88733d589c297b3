// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_event_state --heading-base-level=0

//! Vantage Event State: small state machines for 3D viewer pointer input.
//!
//! This crate tracks the pieces of input state that must survive between raw
//! events. Each module handles one concern:
//!
//! - [`pointer`]: last known cursor position, pressed button and modifier keys
//! - [`hover`]: enter/leave transitions when the hovered object changes
//! - [`wheel`]: normalize platform wheel deltas to a signed unit step
//! - [`drag`]: the single active drag session and its normalized deltas
//!
//! None of these modules know how objects are found under the cursor. They
//! accept application-specific object handles (any `Copy + PartialEq` key) and
//! raw pointer positions, and produce state queries or transitions that a
//! router can turn into events.
//!
//! ## Hover transitions
//!
//! ```rust
//! use vantage_event_state::hover::HoverTransition;
//!
//! // Pointer moves from object 1 onto object 2.
//! let t = HoverTransition::between(Some(1), Some(2));
//! assert_eq!(t.leave, Some(1));
//! assert_eq!(t.enter, Some(2));
//!
//! // Staying on the same object produces nothing.
//! assert!(HoverTransition::between(Some(2), Some(2)).is_empty());
//! ```
//!
//! ## Drag sessions
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vantage_event_state::drag::DragController;
//! use vantage_event_state::pointer::PointerButton;
//!
//! let mut drag: DragController<u32, ()> = DragController::new();
//!
//! // Press on object 7 at (10, 10).
//! assert!(drag.begin(Point::new(10.0, 10.0), PointerButton::Primary, None, Some(7)));
//!
//! // Move pointer, get delta since last position.
//! let delta = drag.update(Point::new(30.0, 20.0)).unwrap();
//! assert_eq!(delta, Vec2::new(20.0, 10.0));
//!
//! // Displacement normalized by a 200x100 surface.
//! let n = drag.normalized_drag(Size::new(200.0, 100.0));
//! assert_eq!(n, Vec2::new(0.1, 0.1));
//!
//! let session = drag.end().unwrap();
//! assert_eq!(session.object, Some(7));
//! assert!(!drag.is_dragging());
//! ```
//!
//! ## Features
//!
//! - `std` (default): compile Kurbo with the standard library.
//! - `libm`: `no_std` float support for Kurbo.
//! - `serde`: derive `Serialize`/`Deserialize` for buttons and modifiers.
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod drag;
pub mod hover;
pub mod pointer;
pub mod wheel;

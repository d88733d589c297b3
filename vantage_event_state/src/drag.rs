// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session lifecycle: start point, current point, last-frame delta.
//!
//! ## Usage
//!
//! 1) Open a session on press with [`DragController::begin`]. It refuses to
//!    open a second session while one is active.
//! 2) On each move, call [`DragController::update`] to get the delta since the
//!    previous position.
//! 3) Query [`DragController::normalized_drag`] to feed camera controllers.
//!    [`DragSession::moved`] tells a drag from a click, even when the pointer
//!    returned to where it started.
//! 4) Close it with [`DragController::end`], which hands back the final session.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use vantage_event_state::drag::DragController;
//! use vantage_event_state::pointer::PointerButton;
//!
//! let mut drag: DragController<u32, &str> = DragController::new();
//!
//! // A view drag: no object under the cursor, view state captured at start.
//! drag.begin(Point::new(10.0, 20.0), PointerButton::Primary, Some("orbit"), None);
//! assert!(drag.is_dragging());
//!
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//!
//! let last = drag.normalized_last_drag(Size::new(100.0, 50.0));
//! assert_eq!(last, Vec2::new(0.05, 0.1));
//!
//! let session = drag.end().unwrap();
//! assert_eq!(session.view, Some("orbit"));
//! ```

use kurbo::{Point, Size, Vec2};

use crate::pointer::PointerButton;

/// The record of an in-progress press-move-release interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<K, V> {
    /// Pointer position when the session opened.
    pub start: Point,
    /// Most recent pointer position.
    pub end: Point,
    /// Movement between the two most recent positions.
    pub last_delta: Vec2,
    /// Button that opened the session.
    pub button: PointerButton,
    /// Object under the cursor at start, or `None` for a view drag.
    pub object: Option<K>,
    /// View state captured at start, if there was a view to capture.
    pub view: Option<V>,
    /// Set once any update moved the pointer, even if it later came back.
    pub moved: bool,
}

impl<K, V> DragSession<K, V> {
    /// Raw pixel displacement from start to the current position.
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        self.end - self.start
    }
}

/// Owns at most one [`DragSession`].
#[derive(Clone, Debug)]
pub struct DragController<K, V> {
    session: Option<DragSession<K, V>>,
}

impl<K, V> Default for DragController<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> DragController<K, V> {
    /// Creates a controller with no active session.
    #[must_use]
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// The active session, if any.
    #[must_use]
    pub fn current_session(&self) -> Option<&DragSession<K, V>> {
        self.session.as_ref()
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Open a session at `position`.
    ///
    /// Returns `false` and leaves the existing session untouched if one is
    /// already active.
    pub fn begin(
        &mut self,
        position: Point,
        button: PointerButton,
        view: Option<V>,
        object: Option<K>,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            start: position,
            end: position,
            last_delta: Vec2::ZERO,
            button,
            object,
            view,
            moved: false,
        });
        true
    }

    /// Move the session end to `position`, returning the delta from the previous end.
    ///
    /// Returns `None` when no session is active.
    pub fn update(&mut self, position: Point) -> Option<Vec2> {
        let session = self.session.as_mut()?;
        session.last_delta = position - session.end;
        session.end = position;
        session.moved |= session.last_delta != Vec2::ZERO;
        Some(session.last_delta)
    }

    /// Close the active session and return it.
    pub fn end(&mut self) -> Option<DragSession<K, V>> {
        self.session.take()
    }

    /// Displacement from start divided component-wise by `surface`.
    ///
    /// The zero vector means "no drag": it is returned when no session is
    /// active, and for a surface with zero extent.
    #[must_use]
    pub fn normalized_drag(&self, surface: Size) -> Vec2 {
        self.session
            .as_ref()
            .map(|s| normalize(s.displacement(), surface))
            .unwrap_or(Vec2::ZERO)
    }

    /// Last-frame delta divided component-wise by `surface`.
    #[must_use]
    pub fn normalized_last_drag(&self, surface: Size) -> Vec2 {
        self.session
            .as_ref()
            .map(|s| normalize(s.last_delta, surface))
            .unwrap_or(Vec2::ZERO)
    }
}

fn normalize(v: Vec2, surface: Size) -> Vec2 {
    if surface.width <= 0.0 || surface.height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(v.x / surface.width, v.y / surface.height)
}

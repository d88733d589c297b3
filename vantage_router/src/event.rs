// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events the router delivers to scene objects and fallback listeners.

use kurbo::Point;
use vantage_event_state::drag::DragSession;
use vantage_pick::Interest;

/// A routed scene event.
///
/// `K` is the scene node handle and `V` the host's view snapshot type. Drag
/// events borrow the router's live session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent<'a, K, V> {
    /// The pointer started hovering `object`.
    MouseOver {
        /// Newly hovered object.
        object: K,
    },
    /// The pointer stopped hovering `object`.
    MouseLeave {
        /// Previously hovered object.
        object: K,
    },
    /// A press and release without movement over `object`.
    Click {
        /// Clicked object.
        object: K,
        /// Pointer position at release.
        position: Point,
    },
    /// A double click, with the hovered object if any.
    DblClick {
        /// Hovered object; `None` when broadcast.
        object: Option<K>,
        /// Last known pointer position.
        position: Point,
    },
    /// The pointer moved during a drag session.
    Drag {
        /// The session after applying the move.
        session: &'a DragSession<K, V>,
    },
    /// A drag that started on an object ended with movement.
    Drop {
        /// The final session.
        session: &'a DragSession<K, V>,
    },
    /// A wheel step.
    MouseWheel {
        /// Hovered object; `None` when broadcast.
        object: Option<K>,
        /// `+1`, `-1` or `0`.
        delta: i32,
    },
    /// `object` joined the selection.
    Select {
        /// Selected object.
        object: K,
    },
    /// `object` left the selection.
    Deselect {
        /// Deselected object.
        object: K,
    },
}

/// Discriminant of a [`SceneEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`SceneEvent::MouseOver`].
    MouseOver,
    /// See [`SceneEvent::MouseLeave`].
    MouseLeave,
    /// See [`SceneEvent::Click`].
    Click,
    /// See [`SceneEvent::DblClick`].
    DblClick,
    /// See [`SceneEvent::Drag`].
    Drag,
    /// See [`SceneEvent::Drop`].
    Drop,
    /// See [`SceneEvent::MouseWheel`].
    MouseWheel,
    /// See [`SceneEvent::Select`].
    Select,
    /// See [`SceneEvent::Deselect`].
    Deselect,
}

impl EventKind {
    /// Wire name, as listed in node interests.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MouseOver => "mouseover",
            Self::MouseLeave => "mouseleave",
            Self::Click => "click",
            Self::DblClick => "dblclick",
            Self::Drag => "drag",
            Self::Drop => "drop",
            Self::MouseWheel => "mousewheel",
            Self::Select => "select",
            Self::Deselect => "deselect",
        }
    }

    /// The interest bit a node sets to receive this event.
    #[must_use]
    pub const fn interest(self) -> Interest {
        match self {
            Self::MouseOver => Interest::MOUSE_OVER,
            Self::MouseLeave => Interest::MOUSE_LEAVE,
            Self::Click => Interest::CLICK,
            Self::DblClick => Interest::DBL_CLICK,
            Self::Drag => Interest::DRAG,
            Self::Drop => Interest::DROP,
            Self::MouseWheel => Interest::MOUSE_WHEEL,
            Self::Select => Interest::SELECT,
            Self::Deselect => Interest::DESELECT,
        }
    }
}

impl<K: Copy, V> SceneEvent<'_, K, V> {
    /// The event's kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::MouseOver { .. } => EventKind::MouseOver,
            Self::MouseLeave { .. } => EventKind::MouseLeave,
            Self::Click { .. } => EventKind::Click,
            Self::DblClick { .. } => EventKind::DblClick,
            Self::Drag { .. } => EventKind::Drag,
            Self::Drop { .. } => EventKind::Drop,
            Self::MouseWheel { .. } => EventKind::MouseWheel,
            Self::Select { .. } => EventKind::Select,
            Self::Deselect { .. } => EventKind::Deselect,
        }
    }

    /// Wire name of the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The object the event is about, if any.
    ///
    /// For drag and drop this is the session object, which is `None` for view
    /// drags.
    #[must_use]
    pub fn object(&self) -> Option<K> {
        match *self {
            Self::MouseOver { object }
            | Self::MouseLeave { object }
            | Self::Click { object, .. }
            | Self::Select { object }
            | Self::Deselect { object } => Some(object),
            Self::DblClick { object, .. } | Self::MouseWheel { object, .. } => object,
            Self::Drag { session } | Self::Drop { session } => session.object,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use vantage_event_state::pointer::PointerButton;

    #[test]
    fn names_match_interest_vocabulary() {
        let e: SceneEvent<'_, u32, ()> = SceneEvent::MouseWheel {
            object: None,
            delta: 1,
        };
        assert_eq!(e.name(), "mousewheel");
        assert_eq!(e.kind().interest(), Interest::MOUSE_WHEEL);
        assert_eq!(e.object(), None);

        let e: SceneEvent<'_, u32, ()> = SceneEvent::Click {
            object: 4,
            position: Point::ZERO,
        };
        assert_eq!(e.name(), "click");
        assert_eq!(e.object(), Some(4));
    }

    #[test]
    fn drag_object_comes_from_session() {
        let session = DragSession {
            start: Point::ZERO,
            end: Point::new(3.0, 0.0),
            last_delta: Vec2::new(3.0, 0.0),
            button: PointerButton::Primary,
            object: Some(9_u32),
            view: None::<()>,
            moved: true,
        };
        let e = SceneEvent::Drop { session: &session };
        assert_eq!(e.kind(), EventKind::Drop);
        assert_eq!(e.object(), Some(9));
        assert!(EventKind::Drop.interest().is_interactive());
    }
}

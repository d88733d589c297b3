// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host interface the router dispatches through.

use kurbo::Size;
use vantage_pick::{Camera, SceneTree};
use vantage_selection::{SelectionChanged, SelectionSink};

use crate::SceneEvent;

/// The host application as seen by [`InputRouter`](crate::InputRouter).
///
/// A viewer owns the scene graph, the render surface, the per-scene cameras
/// and whatever sits behind event delivery. The router holds only handles and
/// borrows the viewer for the duration of each input call, so implementations
/// must not call back into the router from `emit` or `notify`.
pub trait Viewer: SceneTree {
    /// Fallback listener handle.
    type Listener: Copy + PartialEq;
    /// View state captured by value when a drag starts.
    type View: Clone;
    /// Camera type used for picking.
    type Camera: Camera + ?Sized;

    /// Current drawing surface size in pixels.
    fn surface_size(&self) -> Size;

    /// Camera of `scene`, if it has one.
    fn camera(&self, scene: Self::Node) -> Option<&Self::Camera>;

    /// Snapshot of `scene`'s view state.
    fn view(&self, scene: Self::Node) -> Option<Self::View>;

    /// Deliver `event` to scene object `target`.
    fn emit(&mut self, target: Self::Node, event: &SceneEvent<'_, Self::Node, Self::View>);

    /// Deliver a broadcast `event` to a fallback listener.
    fn notify(
        &mut self,
        listener: Self::Listener,
        event: &SceneEvent<'_, Self::Node, Self::View>,
    );

    /// Announce a selection change.
    fn selection_changed(&mut self, change: &SelectionChanged<Self::Node>);
}

/// Routes selection notifications from the manager into the viewer.
pub(crate) struct ViewerSink<'a, H: ?Sized>(pub(crate) &'a mut H);

impl<H: Viewer + ?Sized> SelectionSink<H::Node> for ViewerSink<'_, H> {
    fn select(&mut self, key: &H::Node) {
        self.0.emit(*key, &SceneEvent::Select { object: *key });
    }

    fn deselect(&mut self, key: &H::Node) {
        self.0.emit(*key, &SceneEvent::Deselect { object: *key });
    }

    fn selection_changed(&mut self, change: &SelectionChanged<H::Node>) {
        self.0.selection_changed(change);
    }
}

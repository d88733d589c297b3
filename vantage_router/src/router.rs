// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The input router.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Size, Vec2};
use tracing::{debug, trace};
use vantage_event_state::drag::{DragController, DragSession};
use vantage_event_state::hover::HoverTransition;
use vantage_event_state::pointer::{Modifiers, PointerButton, PointerState};
use vantage_event_state::wheel::WheelDelta;
use vantage_pick::Hover;
use vantage_selection::SelectionManager;

use crate::viewer::ViewerSink;
use crate::{RouterConfig, SceneEvent, Viewer};

/// Turns raw pointer input into routed scene events.
///
/// `K` is the scene node handle (scenes are nodes too), `L` the fallback
/// listener handle and `V` the viewer's view snapshot type. Every input
/// handler borrows the [`Viewer`] and dispatches synchronously through it.
#[derive(Clone, Debug)]
pub struct InputRouter<K, L, V> {
    config: RouterConfig,
    pointer: PointerState,
    drag: DragController<K, V>,
    selection: SelectionManager<K>,
    hovered: Option<Hover<K>>,
    active_scene: Option<K>,
    interactive_scenes: Vec<K>,
    listeners: Vec<L>,
}

impl<K, L, V> Default for InputRouter<K, L, V> {
    fn default() -> Self {
        Self::with_config(RouterConfig::default())
    }
}

impl<K, L, V> InputRouter<K, L, V> {
    /// Creates a router with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router with `config`.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            pointer: PointerState::new(),
            drag: DragController::new(),
            selection: SelectionManager::new(),
            hovered: None,
            active_scene: None,
            interactive_scenes: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Last known pointer state.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// The active drag session, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragSession<K, V>> {
        self.drag.current_session()
    }

    /// The hover record from the most recent move.
    #[must_use]
    pub fn hovered(&self) -> Option<&Hover<K>> {
        self.hovered.as_ref()
    }

    /// Selected objects in insertion order.
    #[must_use]
    pub fn selection(&self) -> &[K] {
        self.selection.current()
    }

    /// The scene whose camera is used for picking.
    #[must_use]
    pub fn active_scene(&self) -> Option<&K> {
        self.active_scene.as_ref()
    }

    /// Scene roots registered for hit testing.
    #[must_use]
    pub fn interactive_scenes(&self) -> &[K] {
        &self.interactive_scenes
    }

    /// Listeners that receive events when nothing is hit.
    #[must_use]
    pub fn fallback_listeners(&self) -> &[L] {
        &self.listeners
    }

    /// Drag displacement divided by `surface`, or zero outside a drag.
    #[must_use]
    pub fn normalized_drag(&self, surface: Size) -> Vec2 {
        self.drag.normalized_drag(surface)
    }

    /// Last move delta divided by `surface`, or zero outside a drag.
    #[must_use]
    pub fn normalized_last_drag(&self, surface: Size) -> Vec2 {
        self.drag.normalized_last_drag(surface)
    }

    /// End the drag session without dispatching `drop`.
    pub fn cancel_drag(&mut self) -> Option<DragSession<K, V>> {
        let session = self.drag.end();
        if session.is_some() {
            debug!("drag cancelled");
        }
        session
    }

    /// Key press. Only modifier state is recorded.
    pub fn handle_key_down(&mut self, key: &str, modifiers: Modifiers) {
        trace!(key, ?modifiers, "key down");
        self.pointer.set_modifiers(modifiers);
    }

    /// Key release. Only modifier state is recorded.
    pub fn handle_key_up(&mut self, key: &str, modifiers: Modifiers) {
        trace!(key, ?modifiers, "key up");
        self.pointer.set_modifiers(modifiers);
    }
}

impl<K, L, V> InputRouter<K, L, V>
where
    K: Copy + PartialEq + Debug,
    L: Copy + PartialEq,
    V: Clone,
{
    /// Returns `true` if `object` is selected.
    #[must_use]
    pub fn is_selected(&self, object: &K) -> bool {
        self.selection.is_selected(object)
    }

    /// Add a broadcast listener. Returns `false` if it was already registered.
    pub fn register_fallback_listener(&mut self, listener: L) -> bool {
        if self.listeners.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove a broadcast listener. Returns `false` if it was not registered.
    pub fn unregister_fallback_listener(&mut self, listener: L) -> bool {
        remove_item(&mut self.listeners, &listener)
    }

    /// Add a scene root to the hit-test set. Returns `false` if already present.
    pub fn register_interactive_scene(&mut self, scene: K) -> bool {
        if self.interactive_scenes.contains(&scene) {
            return false;
        }
        debug!(?scene, "interactive scene registered");
        self.interactive_scenes.push(scene);
        true
    }

    /// Remove a scene root from the hit-test set. Returns `false` if absent.
    pub fn unregister_interactive_scene(&mut self, scene: K) -> bool {
        let removed = remove_item(&mut self.interactive_scenes, &scene);
        if removed {
            debug!(?scene, "interactive scene unregistered");
        }
        removed
    }

    /// Switch the active scene, clearing the selection first.
    pub fn set_active_scene<H>(&mut self, host: &mut H, scene: Option<K>)
    where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        self.deselect_all(host);
        debug!(from = ?self.active_scene, to = ?scene, "active scene changed");
        self.active_scene = scene;
    }

    /// Toggle `object`'s membership, emitting the usual selection events.
    ///
    /// Returns `true` if `object` is selected afterwards.
    pub fn toggle_selection<H>(&mut self, host: &mut H, object: K) -> bool
    where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        self.selection.toggle(object, &mut ViewerSink(host))
    }

    /// Clear the selection. Returns `true` if anything was selected.
    pub fn deselect_all<H>(&mut self, host: &mut H) -> bool
    where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        self.selection.deselect_all(&mut ViewerSink(host))
    }

    /// Pointer press.
    ///
    /// Opens a drag session on the object under the cursor, or a view drag
    /// when there is none. A press during an open session only updates the
    /// pointer state.
    pub fn handle_press<H>(
        &mut self,
        host: &mut H,
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        trace!(x = position.x, y = position.y, ?button, ?modifiers, "press");
        self.pointer.press(position, button, modifiers);
        if self.drag.is_dragging() {
            trace!("press ignored, drag already open");
            return;
        }

        let object = self.resolve_hover(host).map(|h| h.object);
        let view = self.active_scene.and_then(|scene| host.view(scene));
        self.drag.begin(position, button, view, object);
        debug!(?object, ?button, "drag started");
    }

    /// Pointer move.
    ///
    /// Dispatches `drag` when a session is open and the pointer moved, then
    /// updates the hover target, dispatching `mouseleave` before `mouseover`.
    pub fn handle_move<H>(&mut self, host: &mut H, position: Point, button: PointerButton)
    where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        trace!(x = position.x, y = position.y, ?button, "move");
        self.pointer.move_to(position, button);

        if let Some(delta) = self.drag.update(position)
            && delta != Vec2::ZERO
            && let Some(session) = self.drag.current_session()
        {
            self.deliver(host, session.object, &SceneEvent::Drag { session });
        }

        let next = self.resolve_hover(host);
        let transition = HoverTransition::between(
            self.hovered.map(|h| h.object),
            next.map(|h| h.object),
        );
        if let Some(object) = transition.leave {
            host.emit(object, &SceneEvent::MouseLeave { object });
        }
        if let Some(object) = transition.enter {
            host.emit(object, &SceneEvent::MouseOver { object });
        }
        self.hovered = next;
    }

    /// Pointer release.
    ///
    /// A release is a click unless the pointer moved at some point since the
    /// press, even if it came back. A secondary release clears the selection.
    /// Any open session ends here, dispatching `drop` to its object when the
    /// pointer moved.
    pub fn handle_release<H>(
        &mut self,
        host: &mut H,
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        trace!(x = position.x, y = position.y, ?button, ?modifiers, "release");
        self.pointer.release(position, modifiers);

        let is_click = self
            .drag
            .current_session()
            .is_none_or(|s| !s.moved);
        debug!(is_click, ?button, "release classified");

        match button {
            PointerButton::Primary if is_click => self.click(host),
            PointerButton::Secondary => {
                self.deselect_all(host);
            }
            _ => {}
        }

        if let Some(session) = self.drag.end() {
            debug!(object = ?session.object, "drag ended");
            if !is_click && let Some(object) = session.object {
                host.emit(object, &SceneEvent::Drop { session: &session });
            }
        }
    }

    /// Wheel input, normalized to a unit step.
    pub fn handle_wheel<H>(&mut self, host: &mut H, delta: WheelDelta)
    where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        let step = delta.step();
        trace!(?delta, step, "wheel");
        let object = self.hovered_object();
        self.deliver(
            host,
            object,
            &SceneEvent::MouseWheel {
                object,
                delta: step,
            },
        );
    }

    /// Double click at the last known pointer position.
    pub fn handle_double_click<H>(&mut self, host: &mut H)
    where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        trace!("double click");
        let object = self.hovered_object();
        self.deliver(
            host,
            object,
            &SceneEvent::DblClick {
                object,
                position: self.pointer.position,
            },
        );
    }

    fn hovered_object(&self) -> Option<K> {
        self.hovered.map(|h| h.object)
    }

    fn click<H>(&mut self, host: &mut H)
    where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        let Some(object) = self.hovered_object() else {
            debug!("click on empty space");
            self.deselect_all(host);
            return;
        };
        debug!(?object, "click");

        let mut sink = ViewerSink(&mut *host);
        if self
            .pointer
            .modifiers
            .intersects(self.config.extend_selection)
        {
            self.selection.toggle(object, &mut sink);
        } else if self.selection.is_selected(&object) && self.selection.current().len() > 1 {
            self.selection.deselect_others(&object, &mut sink);
        } else {
            self.selection.deselect_all(&mut sink);
            self.selection.toggle(object, &mut sink);
        }

        host.emit(
            object,
            &SceneEvent::Click {
                object,
                position: self.pointer.position,
            },
        );
    }

    /// Send to `target`, or broadcast to every fallback listener.
    fn deliver<H>(&self, host: &mut H, target: Option<K>, event: &SceneEvent<'_, K, V>)
    where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        match target {
            Some(object) => host.emit(object, event),
            None => {
                for &listener in &self.listeners {
                    host.notify(listener, event);
                }
            }
        }
    }

    /// Pick against the interactive scenes and then the active scene.
    fn resolve_hover<H>(&self, host: &H) -> Option<Hover<K>>
    where
        H: Viewer<Node = K, Listener = L, View = V> + ?Sized,
    {
        let scene = self.active_scene?;
        let camera = host.camera(scene)?;
        let roots = self
            .interactive_scenes
            .iter()
            .copied()
            .chain((!self.interactive_scenes.contains(&scene)).then_some(scene));
        vantage_pick::resolve(
            host,
            self.pointer.position,
            host.surface_size(),
            camera,
            roots,
            &self.config.pick,
        )
    }
}

fn remove_item<T: PartialEq>(items: &mut Vec<T>, item: &T) -> bool {
    match items.iter().position(|i| i == item) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_idempotent() {
        let mut router: InputRouter<u32, u8, ()> = InputRouter::new();
        assert!(router.register_fallback_listener(1));
        assert!(!router.register_fallback_listener(1));
        assert!(router.register_fallback_listener(2));
        assert_eq!(router.fallback_listeners(), &[1, 2]);

        assert!(router.unregister_fallback_listener(1));
        assert!(!router.unregister_fallback_listener(1));
        assert_eq!(router.fallback_listeners(), &[2]);

        assert!(router.register_interactive_scene(7));
        assert!(!router.register_interactive_scene(7));
        assert!(router.unregister_interactive_scene(7));
        assert!(!router.unregister_interactive_scene(7));
        assert!(router.interactive_scenes().is_empty());
    }

    #[test]
    fn key_handlers_only_track_modifiers() {
        let mut router: InputRouter<u32, u8, ()> = InputRouter::new();
        router.handle_key_down("Control", Modifiers::CTRL);
        assert_eq!(router.pointer().modifiers, Modifiers::CTRL);
        router.handle_key_up("Control", Modifiers::empty());
        assert_eq!(router.pointer().modifiers, Modifiers::empty());
        assert!(router.drag().is_none());
    }

    #[test]
    fn cancel_without_session_is_none() {
        let mut router: InputRouter<u32, u8, ()> = InputRouter::new();
        assert!(router.cancel_drag().is_none());
        assert_eq!(router.normalized_drag(Size::new(10.0, 10.0)), Vec2::ZERO);
    }

    #[test]
    fn default_config_extends_with_ctrl() {
        let router: InputRouter<u32, u8, ()> = InputRouter::new();
        assert_eq!(router.config().extend_selection, Modifiers::CTRL);
    }
}

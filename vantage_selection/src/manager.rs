// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-emitting selection edits.

use alloc::vec::Vec;

use crate::Selection;

/// Before/after snapshots of a selection change.
///
/// Both sides are full sets, not a diff, so observers may recompute either
/// incrementally or wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChanged<T> {
    /// Selection before the mutation.
    pub old: Vec<T>,
    /// Selection after the mutation.
    pub new: Vec<T>,
}

impl<T> SelectionChanged<T> {
    /// Event name used by viewers that route by string.
    pub const NAME: &'static str = "selection_changed";
}

/// Receiver of selection notifications.
pub trait SelectionSink<T> {
    /// `key` was added to the selection.
    fn select(&mut self, key: &T);
    /// `key` was removed from the selection.
    fn deselect(&mut self, key: &T);
    /// Membership changed; emitted once per mutation, after `select`/`deselect`.
    fn selection_changed(&mut self, change: &SelectionChanged<T>);
}

/// A recorded selection notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent<T> {
    /// See [`SelectionSink::select`].
    Select(T),
    /// See [`SelectionSink::deselect`].
    Deselect(T),
    /// See [`SelectionSink::selection_changed`].
    Changed(SelectionChanged<T>),
}

/// Records notifications in order.
impl<T: Clone> SelectionSink<T> for Vec<SelectionEvent<T>> {
    fn select(&mut self, key: &T) {
        self.push(SelectionEvent::Select(key.clone()));
    }

    fn deselect(&mut self, key: &T) {
        self.push(SelectionEvent::Deselect(key.clone()));
    }

    fn selection_changed(&mut self, change: &SelectionChanged<T>) {
        self.push(SelectionEvent::Changed(change.clone()));
    }
}

/// Discards notifications.
impl<T> SelectionSink<T> for () {
    fn select(&mut self, _: &T) {}
    fn deselect(&mut self, _: &T) {}
    fn selection_changed(&mut self, _: &SelectionChanged<T>) {}
}

/// A [`Selection`] whose edits are reported to a [`SelectionSink`].
#[derive(Clone, Debug, Default)]
pub struct SelectionManager<T> {
    selection: Selection<T>,
}

impl<T> SelectionManager<T> {
    /// Creates a manager with an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selection: Selection::new(),
        }
    }

    /// Selected keys in insertion order.
    #[must_use]
    pub fn current(&self) -> &[T] {
        self.selection.items()
    }

    /// The underlying selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<T> {
        &self.selection
    }
}

impl<T> SelectionManager<T>
where
    T: Clone + PartialEq,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn is_selected(&self, key: &T) -> bool {
        self.selection.contains(key)
    }

    /// Toggle `key`, emitting `select` or `deselect` for it and one change event.
    ///
    /// Returns `true` if `key` is selected afterwards.
    pub fn toggle(&mut self, key: T, sink: &mut impl SelectionSink<T>) -> bool {
        let old = self.selection.items().to_vec();
        let selected = self.selection.toggle(key.clone());
        if selected {
            sink.select(&key);
        } else {
            sink.deselect(&key);
        }
        sink.selection_changed(&SelectionChanged {
            old,
            new: self.selection.items().to_vec(),
        });
        selected
    }

    /// Deselect everything.
    ///
    /// Emits one `deselect` per member followed by a single change event. An
    /// empty selection emits nothing. Returns `true` if anything was removed.
    pub fn deselect_all(&mut self, sink: &mut impl SelectionSink<T>) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let old = self.selection.items().to_vec();
        for key in &old {
            sink.deselect(key);
        }
        self.selection.clear();
        sink.selection_changed(&SelectionChanged {
            old,
            new: Vec::new(),
        });
        true
    }

    /// Toggle off every member except `keep`, one at a time.
    ///
    /// Each removal emits its own `deselect` and change event. `keep` is left
    /// untouched whether or not it is selected.
    pub fn deselect_others(&mut self, keep: &T, sink: &mut impl SelectionSink<T>) {
        let others: Vec<T> = self
            .selection
            .iter()
            .filter(|k| *k != keep)
            .cloned()
            .collect();
        for key in others {
            self.toggle(key, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    type Events = Vec<SelectionEvent<u32>>;

    fn changed(old: &[u32], new: &[u32]) -> SelectionEvent<u32> {
        SelectionEvent::Changed(SelectionChanged {
            old: old.to_vec(),
            new: new.to_vec(),
        })
    }

    #[test]
    fn toggle_emits_select_then_change() {
        let mut m = SelectionManager::new();
        let mut ev = Events::new();

        assert!(m.toggle(1, &mut ev));
        assert_eq!(ev, vec![SelectionEvent::Select(1), changed(&[], &[1])]);
    }

    #[test]
    fn double_toggle_restores_membership() {
        let mut m = SelectionManager::new();
        let mut ev = Events::new();
        m.toggle(1, &mut ev);
        ev.clear();

        m.toggle(2, &mut ev);
        m.toggle(2, &mut ev);

        assert!(!m.is_selected(&2));
        assert_eq!(m.current(), &[1]);
        assert_eq!(ev.last(), Some(&changed(&[1, 2], &[1])));
    }

    #[test]
    fn deselect_all_on_empty_is_silent() {
        let mut m = SelectionManager::<u32>::new();
        let mut ev = Events::new();

        assert!(!m.deselect_all(&mut ev));
        assert!(ev.is_empty());
        assert_eq!(m.selection().revision(), 0);
    }

    #[test]
    fn deselect_all_emits_each_then_one_change() {
        let mut m = SelectionManager::new();
        m.toggle(1, &mut ());
        m.toggle(2, &mut ());
        m.toggle(3, &mut ());
        let mut ev = Events::new();

        assert!(m.deselect_all(&mut ev));

        assert_eq!(
            ev,
            vec![
                SelectionEvent::Deselect(1),
                SelectionEvent::Deselect(2),
                SelectionEvent::Deselect(3),
                changed(&[1, 2, 3], &[]),
            ]
        );
    }

    #[test]
    fn deselect_others_keeps_one() {
        let mut m = SelectionManager::new();
        m.toggle(1, &mut ());
        m.toggle(2, &mut ());
        m.toggle(3, &mut ());
        let mut ev = Events::new();

        m.deselect_others(&2, &mut ev);

        assert_eq!(m.current(), &[2]);
        assert_eq!(
            ev,
            vec![
                SelectionEvent::Deselect(1),
                changed(&[1, 2, 3], &[2, 3]),
                SelectionEvent::Deselect(3),
                changed(&[2, 3], &[2]),
            ]
        );
    }
}

// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_selection --heading-base-level=0

//! Vantage Selection: the selected-object set of a 3D viewer.
//!
//! Two layers live here:
//!
//! - [`Selection`]: a compact ordered set of keys with a primary key and a
//!   revision counter. It only does bookkeeping.
//! - [`SelectionManager`]: wraps a [`Selection`] and reports every change to a
//!   [`SelectionSink`] as `select`/`deselect` notifications for the affected
//!   objects plus one [`SelectionChanged`] with full before/after snapshots.
//!
//! Keys are application-specific object handles. No hashing or ordering is
//! required; equality is enough.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_selection::{Selection, SelectionEvent, SelectionManager};
//!
//! let mut manager = SelectionManager::<u32>::new();
//! let mut events: Vec<SelectionEvent<u32>> = Vec::new();
//!
//! manager.toggle(10, &mut events);
//! manager.toggle(20, &mut events);
//! assert_eq!(manager.current(), &[10, 20]);
//!
//! manager.deselect_all(&mut events);
//! assert!(manager.current().is_empty());
//!
//! // Two select + change pairs, then two deselects and a single change.
//! assert_eq!(events.len(), 7);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod manager;

pub use manager::{SelectionChanged, SelectionEvent, SelectionManager, SelectionSink};

use alloc::vec::Vec;

/// A small ordered set of keys plus a primary key and a revision.
///
/// Keys keep insertion order and appear at most once. Uniqueness is enforced
/// by scanning, which suits the handful of objects a viewer selection holds.
#[derive(Clone, Debug, Default)]
pub struct Selection<T> {
    items: Vec<T>,
    primary: Option<usize>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            primary: None,
            revision: 0,
        }
    }

    /// Returns `true` if the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns all selected keys in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the most recently added key that is still selected, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&T> {
        self.primary.map(|idx| &self.items[idx])
    }

    /// Returns the current revision counter.
    ///
    /// The counter bumps only when the contents or primary actually change, so
    /// observers can cheaply detect "nothing happened".
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.items.clear();
        self.primary = None;
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if the selection currently contains `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Adds `key` if absent. A newly added key becomes primary.
    ///
    /// Returns `true` if the key was added.
    pub fn add(&mut self, key: T) -> bool {
        if self.position_of(&key).is_some() {
            return false;
        }
        self.items.push(key);
        self.primary = Some(self.items.len() - 1);
        self.bump_revision();
        true
    }

    /// Removes `key` if present. Returns `true` if the key was removed.
    pub fn remove(&mut self, key: &T) -> bool {
        match self.position_of(key) {
            Some(idx) => {
                self.remove_at(idx);
                self.bump_revision();
                true
            }
            None => false,
        }
    }

    /// Toggles `key`: adds it when absent, removes it when present.
    ///
    /// Returns `true` if `key` is selected afterwards.
    pub fn toggle(&mut self, key: T) -> bool {
        if let Some(idx) = self.position_of(&key) {
            self.remove_at(idx);
            self.bump_revision();
            false
        } else {
            self.items.push(key);
            self.primary = Some(self.items.len() - 1);
            self.bump_revision();
            true
        }
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }

    fn remove_at(&mut self, idx: usize) {
        self.items.remove(idx);

        if let Some(current) = self.primary {
            if current == idx {
                self.primary = None;
            } else if current > idx {
                self.primary = Some(current - 1);
            }
        }

        if self.items.is_empty() {
            self.primary = None;
        }
    }
}

// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover enter/leave transitions between two consecutive pointer moves.
//!
//! Only the single previous hover target is remembered, so a transition names
//! at most one object to leave and one to enter. An object that stays hovered
//! produces no transition at all.

/// Leave/enter pair produced when the hovered object changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverTransition<K> {
    /// Object the pointer left, if any. Delivered first.
    pub leave: Option<K>,
    /// Object the pointer entered, if any.
    pub enter: Option<K>,
}

impl<K: PartialEq> HoverTransition<K> {
    /// Compute the transition from `previous` to `next` by identity.
    #[must_use]
    pub fn between(previous: Option<K>, next: Option<K>) -> Self {
        if previous == next {
            Self {
                leave: None,
                enter: None,
            }
        } else {
            Self {
                leave: previous,
                enter: next,
            }
        }
    }

    /// Returns `true` when nothing left and nothing entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leave.is_none() && self.enter.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_from_nothing() {
        let t = HoverTransition::between(None, Some(3));
        assert_eq!(t.leave, None);
        assert_eq!(t.enter, Some(3));
    }

    #[test]
    fn leave_to_nothing() {
        let t = HoverTransition::between(Some(3), None);
        assert_eq!(t.leave, Some(3));
        assert_eq!(t.enter, None);
    }

    #[test]
    fn same_object_is_empty() {
        assert!(HoverTransition::between(Some(3), Some(3)).is_empty());
        assert!(HoverTransition::<u32>::between(None, None).is_empty());
    }

    #[test]
    fn swap_names_both() {
        let t = HoverTransition::between(Some(1), Some(2));
        assert_eq!(
            t,
            HoverTransition {
                leave: Some(1),
                enter: Some(2)
            }
        );
    }
}

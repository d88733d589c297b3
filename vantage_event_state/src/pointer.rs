// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor position, pressed button and modifier keys.
//!
//! [`PointerState`] is the leaf of the input stack. It is updated on every raw
//! pointer or keyboard event and never torn down; higher layers read it to
//! decide where the pointer is and which button started an interaction.

use kurbo::Point;

/// Which pointer button an event refers to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    /// No button.
    #[default]
    None,
    /// The primary button (usually left).
    Primary,
    /// The secondary button (usually right).
    Secondary,
    /// Any other button, carrying the platform button index.
    Other(u16),
}

impl PointerButton {
    /// Map a DOM-style button index (`0` primary, `1` auxiliary, `2` secondary).
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    /// Returns `true` for any real button.
    #[must_use]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during an input event.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Super.
        const META  = 0b0000_1000;
    }
}

/// Last known pointer position, button and modifiers.
///
/// Positions are in surface-local pixel space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Last known cursor position.
    pub position: Point,
    /// Button currently held, or [`PointerButton::None`].
    pub button: PointerButton,
    /// Modifiers reported by the most recent event that carried them.
    pub modifiers: Modifiers,
}

impl PointerState {
    /// Creates a pointer at the origin with nothing pressed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: Point::ORIGIN,
            button: PointerButton::None,
            modifiers: Modifiers::empty(),
        }
    }

    /// Record a button press.
    pub fn press(&mut self, position: Point, button: PointerButton, modifiers: Modifiers) {
        self.position = position;
        self.button = button;
        self.modifiers = modifiers;
    }

    /// Record pointer motion.
    pub fn move_to(&mut self, position: Point, button: PointerButton) {
        self.position = position;
        self.button = button;
    }

    /// Record a button release. The pointer is left with no button held.
    pub fn release(&mut self, position: Point, modifiers: Modifiers) {
        self.position = position;
        self.button = PointerButton::None;
        self.modifiers = modifiers;
    }

    /// Record modifier changes from keyboard events.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }
}

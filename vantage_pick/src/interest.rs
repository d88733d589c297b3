// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Named events a scene node listens for.
    ///
    /// Picking only considers nodes (and their subtrees) whose interests
    /// intersect [`Interest::INTERACTIVE`]. The remaining bits are routed but
    /// do not make a node pickable on their own.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Interest: u16 {
        /// `mouseover`
        const MOUSE_OVER  = 1 << 0;
        /// `mouseleave`
        const MOUSE_LEAVE = 1 << 1;
        /// `click`
        const CLICK       = 1 << 2;
        /// `dblclick`
        const DBL_CLICK   = 1 << 3;
        /// `drag`
        const DRAG        = 1 << 4;
        /// `drop`
        const DROP        = 1 << 5;
        /// `mousewheel`
        const MOUSE_WHEEL = 1 << 6;
        /// `select`
        const SELECT      = 1 << 7;
        /// `deselect`
        const DESELECT    = 1 << 8;

        /// Events that make a node a pick candidate.
        const INTERACTIVE = Self::MOUSE_OVER.bits()
            | Self::MOUSE_LEAVE.bits()
            | Self::DRAG.bits()
            | Self::DROP.bits()
            | Self::CLICK.bits();
    }
}

impl Interest {
    /// Returns `true` if any pick-relevant event is present.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        self.intersects(Self::INTERACTIVE)
    }
}

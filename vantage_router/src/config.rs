// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router configuration.

use vantage_event_state::pointer::Modifiers;
use vantage_pick::PickParams;

/// Router tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterConfig {
    /// Tolerances passed to every hit test.
    pub pick: PickParams,
    /// Holding any of these modifiers during a click toggles the clicked
    /// object instead of replacing the selection. Empty disables extending.
    pub extend_selection: Modifiers,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            pick: PickParams::default(),
            extend_selection: Modifiers::CTRL,
        }
    }
}

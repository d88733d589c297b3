// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel delta normalization.
//!
//! Platforms report wheel motion with different units and sign conventions.
//! Consumers here only care about direction, so every delta collapses to a
//! signed unit step.

/// A raw wheel delta as reported by the platform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WheelDelta {
    /// Wheel-style delta, positive when rolled away from the user
    /// (typically multiples of `120` per notch).
    Wheel(f64),
    /// Detail-style delta, positive when rolled toward the user
    /// (typically multiples of `3` per notch).
    Detail(f64),
}

impl WheelDelta {
    /// Signed unit step: `1` away from the user, `-1` toward, `0` for no motion.
    ///
    /// `NaN` deltas map to `0`.
    #[must_use]
    pub fn step(self) -> i32 {
        let away = match self {
            Self::Wheel(d) => d,
            Self::Detail(d) => -d,
        };
        if away > 0.0 {
            1
        } else if away < 0.0 {
            -1
        } else {
            0
        }
    }
}

impl From<f64> for WheelDelta {
    fn from(delta: f64) -> Self {
        Self::Wheel(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_notches_collapse_to_unit() {
        assert_eq!(WheelDelta::Wheel(120.0).step(), 1);
        assert_eq!(WheelDelta::Wheel(-240.0).step(), -1);
        assert_eq!(WheelDelta::Wheel(0.0).step(), 0);
        assert_eq!(WheelDelta::Wheel(-0.0).step(), 0);
    }

    #[test]
    fn detail_sign_is_inverted() {
        assert_eq!(WheelDelta::Detail(3.0).step(), -1);
        assert_eq!(WheelDelta::Detail(-3.0).step(), 1);
    }

    #[test]
    fn nan_is_no_motion() {
        assert_eq!(WheelDelta::Wheel(f64::NAN).step(), 0);
        assert_eq!(WheelDelta::from(f64::NAN).step(), 0);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling direction bucketing.

use kurbo::Vec2;

/// Horizontal direction a card leaves the deck in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlingDirection {
    /// Off the left edge.
    Left,
    /// Off the right edge.
    Right,
}

impl FlingDirection {
    /// Bucket a release velocity into a direction.
    ///
    /// The velocity's [`fling_angle`] selects the bucket:
    /// - `angle < 45` or `angle > 315`: [`Right`](Self::Right),
    /// - `135 < angle < 225`: [`Left`](Self::Left),
    /// - anything else (mostly vertical, including the exact diagonals): `None`.
    ///
    /// This does not look at the velocity's magnitude; callers apply their own
    /// fling threshold first.
    #[must_use]
    pub fn classify(velocity: Vec2) -> Option<Self> {
        let angle = fling_angle(velocity);
        if angle < 45.0 || angle > 315.0 {
            Some(Self::Right)
        } else if angle > 135.0 && angle < 225.0 {
            Some(Self::Left)
        } else {
            None
        }
    }

    /// Unit sign of the direction along the x axis.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Angle of `velocity` in degrees, in `[0, 360)`.
///
/// Measured from the positive x axis towards the positive y axis, so in a
/// y-down coordinate space 90° points down.
#[must_use]
pub fn fling_angle(velocity: Vec2) -> f64 {
    let angle = velocity.atan2().to_degrees();
    if angle < 0.0 { angle + 360.0 } else { angle }
}

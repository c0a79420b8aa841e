// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven interpolation between two card transforms.

use crate::CardTransform;

/// Easing curve applied to normalized tween time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Runs past the target and settles back, like a spring with no bounce
    /// after the first swing. Larger tension overshoots further.
    Overshoot {
        /// Amount of overshoot; `0.0` degenerates to a cubic ease-out.
        tension: f64,
    },
}

impl Easing {
    /// Map normalized time `t` in `0.0..=1.0` onto curve progress.
    ///
    /// Both curves start at `0.0` and end at `1.0`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Overshoot { tension } => {
                let t = t - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
        }
    }
}

/// A card animation from one transform to another.
///
/// Tweens do not own a clock; callers pass the current time (in
/// milliseconds, on the same clock as `start`) to [`sample`](Self::sample).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Transform at `start`.
    pub from: CardTransform,
    /// Transform once finished.
    pub to: CardTransform,
    /// Start time in milliseconds.
    pub start: u64,
    /// Duration in milliseconds.
    pub duration: u64,
    /// Easing curve.
    pub easing: Easing,
}

impl Tween {
    /// Creates a tween.
    #[must_use]
    pub const fn new(
        from: CardTransform,
        to: CardTransform,
        start: u64,
        duration: u64,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Normalized progress at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: u64) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed as f64 / self.duration as f64).min(1.0)
    }

    /// Returns `true` once `now` has reached the end of the tween.
    #[must_use]
    pub fn is_finished(&self, now: u64) -> bool {
        now.saturating_sub(self.start) >= self.duration
    }

    /// Transform at `now`.
    #[must_use]
    pub fn sample(&self, now: u64) -> CardTransform {
        if self.is_finished(now) {
            return self.to;
        }
        self.from
            .lerp(&self.to, self.easing.apply(self.progress(now)))
    }
}

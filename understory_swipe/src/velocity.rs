// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer velocity estimation over a short trailing window.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Upper bound on retained samples, regardless of the horizon.
const MAX_SAMPLES: usize = 20;

#[derive(Clone, Copy, Debug)]
struct Sample {
    position: Point,
    time: u64,
}

/// Estimates pointer velocity from recent position samples.
///
/// Only samples within `horizon_ms` of the newest sample contribute, so a
/// pointer that stops before it is released reports (close to) zero
/// velocity. Velocities are in units per second.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; MAX_SAMPLES]>,
    horizon_ms: u64,
}

impl VelocityTracker {
    /// Creates a tracker that looks back `horizon_ms` milliseconds.
    #[must_use]
    pub fn new(horizon_ms: u64) -> Self {
        Self {
            samples: SmallVec::new(),
            horizon_ms,
        }
    }

    /// Records a pointer position at `time` (milliseconds).
    ///
    /// Samples that go back in time are dropped.
    pub fn add(&mut self, position: Point, time: u64) {
        if self.samples.last().is_some_and(|last| time < last.time) {
            return;
        }
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push(Sample { position, time });
        let cutoff = time.saturating_sub(self.horizon_ms);
        let stale = self
            .samples
            .iter()
            .take_while(|sample| sample.time < cutoff)
            .count();
        self.samples.drain(..stale);
    }

    /// Current velocity estimate, or zero if fewer than two samples span any time.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        let (Some(oldest), Some(newest)) = (self.samples.first(), self.samples.last()) else {
            return Vec2::ZERO;
        };
        let elapsed = newest.time - oldest.time;
        if elapsed == 0 {
            return Vec2::ZERO;
        }
        (newest.position - oldest.position) * (1000.0 / elapsed as f64)
    }

    /// Forgets all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

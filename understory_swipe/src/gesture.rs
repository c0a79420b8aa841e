// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer gesture classification for a swipeable card.
//!
//! A [`GestureClassifier`] watches one pointer at a time on one card and turns
//! the raw down/move/up/cancel stream into at most one [`SwipeIntent`] per
//! gesture, plus live drag feedback while the pointer moves.
//!
//! ## States
//!
//! ```text
//! Idle --down--> Pressed --move past slop--> Dragging
//!   ^               |                           |
//!   +------up-------+---------------up----------+
//! ```
//!
//! - **Pressed**: the press point and time are recorded; drag vs. click is
//!   still undecided.
//! - **Dragging**: the pointer has left the `touch_slop` circle around the
//!   press point. Every move yields a [`CardTransform`] from the
//!   [`DragFrame`].
//! - **Release**: a press that never left the slop circle and was released
//!   within `click_timeout_ms` is a [`SwipeIntent::Click`]. A dragged release
//!   fast enough on either axis is bucketed by [`FlingDirection::classify`]
//!   into [`SwipeIntent::Left`] or [`SwipeIntent::Right`]. Everything else is
//!   [`SwipeIntent::Reset`].
//!
//! ## Disabled swiping
//!
//! When swiping is disabled (sampled at pointer-down), moves are not consumed
//! and produce no feedback, and releases are never classified as swipes.
//! Clicks still work, so a tap can be used to turn swiping back on.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use understory_swipe::{
//!     DragFrame, GestureClassifier, GestureConfig, GestureOutput, PointerEvent, SwipeIntent,
//! };
//!
//! let frame = DragFrame {
//!     origin: Point::new(0.0, 0.0),
//!     parent_width: 400.0,
//!     rotation_degrees_max: 15.0,
//! };
//! let mut gestures = GestureClassifier::new(GestureConfig::default(), frame);
//!
//! gestures.on_pointer(&PointerEvent::down(Point::new(100.0, 100.0), 0));
//! gestures.on_pointer(&PointerEvent::moved(Point::new(160.0, 100.0), 16));
//! let out = gestures.on_pointer(&PointerEvent::up(Point::new(240.0, 100.0), 32));
//! assert!(matches!(out, GestureOutput::Released(SwipeIntent::Right { .. })));
//! ```

use core::num::NonZeroU64;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use tracing::{debug, trace};

use crate::{CardTransform, DragFrame, FlingDirection, VelocityTracker};

/// Pointer identifier.
pub type PointerId = NonZeroU64;

/// Pointer assumed when an event does not name one.
pub const DEFAULT_POINTER: PointerId = NonZeroU64::MIN;

/// Thresholds used to tell taps, drags, and flings apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Distance the pointer may wander from the press point and still count
    /// as a tap.
    pub touch_slop: f64,
    /// Longest press, in milliseconds, that still counts as a tap.
    pub click_timeout_ms: u64,
    /// Minimum release speed, in units per second on either axis, for a drag
    /// to count as a fling.
    pub fling_velocity_threshold: f64,
    /// How far back, in milliseconds, velocity estimation looks.
    pub velocity_horizon_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            click_timeout_ms: 500,
            fling_velocity_threshold: 50.0,
            velocity_horizon_ms: 100,
        }
    }
}

/// Phase of a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// The platform took the pointer away (for example, a system gesture).
    Cancel,
}

/// A raw pointer event in the deck's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer identifier, [`DEFAULT_POINTER`] if `None`.
    pub pointer: Option<PointerId>,
    /// Event phase.
    pub phase: PointerPhase,
    /// Pointer position. Ignored for [`PointerPhase::Cancel`].
    pub position: Point,
    /// Timestamp in milliseconds.
    pub time: u64,
}

impl PointerEvent {
    /// A pointer-down event.
    #[must_use]
    pub const fn down(position: Point, time: u64) -> Self {
        Self::new(PointerPhase::Down, position, time)
    }

    /// A pointer-move event.
    #[must_use]
    pub const fn moved(position: Point, time: u64) -> Self {
        Self::new(PointerPhase::Move, position, time)
    }

    /// A pointer-up event.
    #[must_use]
    pub const fn up(position: Point, time: u64) -> Self {
        Self::new(PointerPhase::Up, position, time)
    }

    /// A pointer-cancel event.
    #[must_use]
    pub const fn cancel(time: u64) -> Self {
        Self::new(PointerPhase::Cancel, Point::ZERO, time)
    }

    /// Sets the pointer identifier.
    #[must_use]
    pub const fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = Some(pointer);
        self
    }

    const fn new(phase: PointerPhase, position: Point, time: u64) -> Self {
        Self {
            pointer: None,
            phase,
            position,
            time,
        }
    }

    fn pointer_id(&self) -> PointerId {
        self.pointer.unwrap_or(DEFAULT_POINTER)
    }
}

/// What a finished gesture asks the card to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeIntent {
    /// Fling off the left edge with the release velocity.
    Left {
        /// Release velocity in units per second.
        velocity: Vec2,
    },
    /// Fling off the right edge with the release velocity.
    Right {
        /// Release velocity in units per second.
        velocity: Vec2,
    },
    /// Return to rest.
    Reset,
    /// The card was tapped.
    Click,
}

/// Result of feeding one event to a [`GestureClassifier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutput {
    /// The event was not consumed: wrong pointer, no active press, or a move
    /// while swiping is disabled.
    Ignored,
    /// A new press began.
    Pressed,
    /// A move inside the slop circle; the card stays put.
    Tracking,
    /// The card is being dragged; apply this transform.
    Dragged(CardTransform),
    /// The gesture ended.
    Released(SwipeIntent),
    /// The gesture was cancelled without a decision.
    Cancelled,
}

/// Coarse classifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    /// No pointer is down.
    Idle,
    /// A pointer is down but has not left the slop circle.
    Pressed,
    /// A pointer is dragging the card.
    Dragging,
}

/// State of the active press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Pointer that owns the session.
    pub pointer: PointerId,
    /// Press position.
    pub start: Point,
    /// Most recent position.
    pub last: Point,
    /// Press timestamp in milliseconds.
    pub start_time: u64,
    /// Whether swiping was enabled when the press began.
    pub swipe_enabled: bool,
    /// True once the pointer has left the slop circle.
    pub dragging: bool,
}

/// Turns a single pointer's events into drag feedback and one intent per gesture.
#[derive(Clone, Debug)]
pub struct GestureClassifier {
    config: GestureConfig,
    frame: DragFrame,
    swipe_enabled: bool,
    session: Option<GestureSession>,
    velocity: VelocityTracker,
}

impl GestureClassifier {
    /// Creates an idle classifier with swiping enabled.
    #[must_use]
    pub fn new(config: GestureConfig, frame: DragFrame) -> Self {
        Self {
            config,
            frame,
            swipe_enabled: true,
            session: None,
            velocity: VelocityTracker::new(config.velocity_horizon_ms),
        }
    }

    /// Thresholds in use.
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Drag geometry in use.
    #[must_use]
    pub const fn frame(&self) -> &DragFrame {
        &self.frame
    }

    /// Replaces the drag geometry, for example after a relayout.
    pub fn set_frame(&mut self, frame: DragFrame) {
        self.frame = frame;
    }

    /// Whether the next press may swipe.
    #[must_use]
    pub const fn swipe_enabled(&self) -> bool {
        self.swipe_enabled
    }

    /// Enables or disables swiping, starting with the next press.
    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        self.swipe_enabled = enabled;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        match &self.session {
            None => GestureState::Idle,
            Some(session) if session.dragging => GestureState::Dragging,
            Some(_) => GestureState::Pressed,
        }
    }

    /// The active press, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Drops the active press without classifying it.
    ///
    /// Returns `true` if a press was active.
    pub fn cancel(&mut self) -> bool {
        self.velocity.clear();
        self.session.take().is_some()
    }

    /// Feed one pointer event.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> GestureOutput {
        let pointer = event.pointer_id();
        match event.phase {
            PointerPhase::Down => self.on_down(pointer, event.position, event.time),
            PointerPhase::Move => self.on_move(pointer, event.position, event.time),
            PointerPhase::Up => self.on_up(pointer, event.position, event.time),
            PointerPhase::Cancel => {
                if self.session.is_some_and(|session| session.pointer == pointer) {
                    self.cancel();
                    trace!("gesture cancelled");
                    GestureOutput::Cancelled
                } else {
                    GestureOutput::Ignored
                }
            }
        }
    }

    fn on_down(&mut self, pointer: PointerId, position: Point, time: u64) -> GestureOutput {
        // A second finger does not steal the card.
        if self
            .session
            .is_some_and(|session| session.pointer != pointer)
        {
            return GestureOutput::Ignored;
        }
        self.velocity.clear();
        self.velocity.add(position, time);
        self.session = Some(GestureSession {
            pointer,
            start: position,
            last: position,
            start_time: time,
            swipe_enabled: self.swipe_enabled,
            dragging: false,
        });
        trace!(x = position.x, y = position.y, "gesture pressed");
        GestureOutput::Pressed
    }

    fn on_move(&mut self, pointer: PointerId, position: Point, time: u64) -> GestureOutput {
        let Some(session) = self
            .session
            .as_mut()
            .filter(|session| session.pointer == pointer)
        else {
            return GestureOutput::Ignored;
        };
        session.last = position;
        self.velocity.add(position, time);

        let offset = position - session.start;
        if !session.dragging && offset.hypot() > self.config.touch_slop {
            session.dragging = true;
        }
        if !session.swipe_enabled {
            return GestureOutput::Ignored;
        }
        if !session.dragging {
            return GestureOutput::Tracking;
        }
        GestureOutput::Dragged(self.frame.transform(offset))
    }

    fn on_up(&mut self, pointer: PointerId, position: Point, time: u64) -> GestureOutput {
        let Some(mut session) = self
            .session
            .take_if(|session| session.pointer == pointer)
        else {
            return GestureOutput::Ignored;
        };
        session.last = position;
        self.velocity.add(position, time);
        let velocity = self.velocity.velocity();
        self.velocity.clear();

        if (position - session.start).hypot() > self.config.touch_slop {
            session.dragging = true;
        }
        let intent = self.classify_release(&session, velocity, time);
        debug!(?intent, vx = velocity.x, vy = velocity.y, "gesture released");
        GestureOutput::Released(intent)
    }

    fn classify_release(&self, session: &GestureSession, velocity: Vec2, time: u64) -> SwipeIntent {
        let elapsed = time.saturating_sub(session.start_time);
        if !session.dragging {
            return if elapsed <= self.config.click_timeout_ms {
                SwipeIntent::Click
            } else {
                SwipeIntent::Reset
            };
        }
        if !session.swipe_enabled {
            return SwipeIntent::Reset;
        }
        let threshold = self.config.fling_velocity_threshold;
        if velocity.x.abs() < threshold && velocity.y.abs() < threshold {
            return SwipeIntent::Reset;
        }
        match FlingDirection::classify(velocity) {
            Some(FlingDirection::Right) => SwipeIntent::Right { velocity },
            Some(FlingDirection::Left) => SwipeIntent::Left { velocity },
            None => SwipeIntent::Reset,
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: gesture and motion primitives for swipeable cards.
//!
//! This crate turns a single pointer's raw event stream into card-level
//! intent and describes how a card should look while that happens:
//!
//! - [`GestureClassifier`]: a small state machine (idle → pressed → dragging)
//!   that reports live drag feedback and one [`SwipeIntent`] per gesture:
//!   fling left, fling right, reset, or click.
//! - [`FlingDirection::classify`]: buckets a release velocity by angle.
//! - [`VelocityTracker`]: trailing-window velocity estimation.
//! - [`DragFrame`] and [`CardTransform`]: map a drag offset to translation and
//!   tilt, and compute where a flung card ends up.
//! - [`Tween`] and [`Easing`]: host-clocked interpolation for reset and
//!   fling-out animations.
//!
//! Nothing here knows about card stacks or data. The `understory_swipe_deck`
//! crate composes these pieces with `understory_card_stack`.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_swipe::{DragFrame, FlingDirection};
//!
//! let frame = DragFrame {
//!     origin: Point::new(16.0, 16.0),
//!     parent_width: 360.0,
//!     rotation_degrees_max: 15.0,
//! };
//!
//! // Dragging a quarter of the deck width to the right tilts by half the maximum.
//! let dragged = frame.transform(Vec2::new(90.0, 0.0));
//! assert_eq!(dragged.rotation_degrees, 7.5);
//!
//! // Releasing with a mostly horizontal velocity flings to the right.
//! assert_eq!(
//!     FlingDirection::classify(Vec2::new(1200.0, -200.0)),
//!     Some(FlingDirection::Right)
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `tracing`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

mod fling;
mod gesture;
mod transform;
mod tween;
mod velocity;

pub use fling::{FlingDirection, fling_angle};
pub use gesture::{
    DEFAULT_POINTER, GestureClassifier, GestureConfig, GestureOutput, GestureSession,
    GestureState, PointerEvent, PointerId, PointerPhase, SwipeIntent,
};
pub use transform::{CardTransform, DragFrame};
pub use tween::{Easing, Tween};
pub use velocity::VelocityTracker;

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping drag displacement to a card's visual transform.

use kurbo::{Affine, Point, Size, Vec2};

use crate::FlingDirection;

/// Visual state of a single card: where it sits, how it is tilted, how
/// opaque it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    /// Top-left corner of the card in the deck's coordinate space.
    pub position: Point,
    /// Clockwise tilt in degrees.
    pub rotation_degrees: f64,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl CardTransform {
    /// An untilted, fully opaque card at `position`.
    #[must_use]
    pub const fn at_rest(position: Point) -> Self {
        Self {
            position,
            rotation_degrees: 0.0,
            opacity: 1.0,
        }
    }

    /// Linear interpolation towards `other`.
    ///
    /// `t` is not clamped, so eased values past `1.0` overshoot the target.
    /// Opacity is always clamped to `0.0..=1.0`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            rotation_degrees: self.rotation_degrees
                + (other.rotation_degrees - self.rotation_degrees) * t,
            opacity: (self.opacity + (other.opacity - self.opacity) * t).clamp(0.0, 1.0),
        }
    }

    /// Card-local to deck transform for a card of `size`, rotating about the
    /// card's centre.
    #[must_use]
    pub fn to_affine(&self, size: Size) -> Affine {
        let center = Point::new(size.width * 0.5, size.height * 0.5);
        Affine::translate(self.position.to_vec2())
            * Affine::rotate_about(self.rotation_degrees.to_radians(), center)
    }
}

/// Geometry needed to turn a drag offset into a [`CardTransform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragFrame {
    /// Resting top-left corner of the front card.
    pub origin: Point,
    /// Width of the deck; a drag across half of it reaches
    /// `rotation_degrees_max`.
    pub parent_width: f64,
    /// Rotation reached at a horizontal drag of half the deck width.
    pub rotation_degrees_max: f64,
}

impl DragFrame {
    /// The card's resting transform.
    #[must_use]
    pub const fn rest(&self) -> CardTransform {
        CardTransform::at_rest(self.origin)
    }

    /// Tilt for a card whose left edge sits at `x`.
    ///
    /// Linear in the horizontal displacement and deliberately unclamped. A
    /// zero-width deck yields no rotation.
    #[must_use]
    pub fn rotation_at(&self, x: f64) -> f64 {
        if self.parent_width <= 0.0 {
            return 0.0;
        }
        self.rotation_degrees_max * 2.0 * (x - self.origin.x) / self.parent_width
    }

    /// Transform of a card dragged by `offset` from rest.
    #[must_use]
    pub fn transform(&self, offset: Vec2) -> CardTransform {
        let position = self.origin + offset;
        CardTransform {
            position,
            rotation_degrees: self.rotation_at(position.x),
            opacity: 1.0,
        }
    }

    /// Transform of a card pressed at `anchor` and now under `pointer`.
    #[must_use]
    pub fn transform_from(&self, anchor: Point, pointer: Point) -> CardTransform {
        self.transform(pointer - anchor)
    }

    /// Final transform for a card flung off the deck.
    ///
    /// The card travels by `velocity` (one second's worth) and at least far
    /// enough for a card of `card_width` to clear the edge in `direction`. It
    /// ends fully tilted towards that edge and transparent.
    #[must_use]
    pub fn fling_out(
        &self,
        from: &CardTransform,
        velocity: Vec2,
        direction: FlingDirection,
        card_width: f64,
    ) -> CardTransform {
        let mut position = from.position + velocity;
        position.x = match direction {
            FlingDirection::Right => position.x.max(self.parent_width),
            FlingDirection::Left => position.x.min(-card_width),
        };
        CardTransform {
            position,
            rotation_degrees: direction.sign() * self.rotation_degrees_max,
            opacity: 0.0,
        }
    }
}

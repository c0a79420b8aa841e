// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport geometry and per-card placement.

use kurbo::{Insets, Point, Rect, Size};
use understory_swipe::CardTransform;

use crate::CardGravity;

/// The deck's box, as assigned by the host's layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Size of the deck.
    pub size: Size,
    /// Padding between the deck's edges and its cards.
    ///
    /// Cards may be drawn outside the padding while they are dragged or
    /// flung; hosts should not clip to it.
    pub padding: Insets,
}

impl Viewport {
    /// A viewport of `size` with uniform `padding`.
    #[must_use]
    pub fn new(size: Size, padding: f64) -> Self {
        Self {
            size,
            padding: Insets::uniform(padding),
        }
    }

    /// The box cards rest in.
    #[must_use]
    pub fn content(&self) -> Rect {
        let content = Rect::from_origin_size(Point::ORIGIN, self.size) - self.padding;
        // Padding larger than the deck collapses the box rather than inverting it.
        Rect::from_origin_size(
            content.origin(),
            Size::new(content.width().max(0.0), content.height().max(0.0)),
        )
    }

    /// Size of every card.
    #[must_use]
    pub fn card_size(&self) -> Size {
        self.content().size()
    }

    /// Resting top-left corner of the front card.
    #[must_use]
    pub fn front_origin(&self) -> Point {
        self.content().origin()
    }

    /// Resting rect of the card `depth` levels behind the front card.
    #[must_use]
    pub fn resting_rect(&self, depth: usize, spacing: f64, gravity: CardGravity) -> Rect {
        let offset = depth as f64 * spacing * gravity.depth_sign();
        Rect::from_origin_size(self.front_origin() + (0.0, offset), self.card_size())
    }
}

/// Where to draw one realized card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlacement<'a, C> {
    /// Source position of the card.
    pub position: usize,
    /// The card itself.
    pub card: &'a C,
    /// Resting rect, including the depth offset.
    pub rect: Rect,
    /// Current transform. Equal to the resting transform for every card but
    /// the front one.
    pub transform: CardTransform,
    /// Elevation; later (nearer) cards are higher.
    pub z: f64,
}

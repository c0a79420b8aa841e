// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck configuration.

use core::num::NonZeroUsize;

use understory_card_stack::DEFAULT_MAX_VISIBLE;
use understory_swipe::GestureConfig;

/// Where the deck sits relative to its sibling views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderLayer {
    /// Above everything, so flung cards are never clipped by siblings.
    #[default]
    Above,
    /// Below everything.
    Below,
    /// Ordered with its siblings as usual.
    Inline,
}

impl RenderLayer {
    /// Z value for the deck container.
    #[must_use]
    pub const fn z(self) -> f32 {
        match self {
            Self::Above => f32::MAX,
            Self::Below => f32::MIN_POSITIVE,
            Self::Inline => 0.0,
        }
    }
}

/// Edge the stack is anchored to.
///
/// The front card always sits at the anchored edge of the content box;
/// deeper cards are shifted by `card_spacing` per level away from it, so they
/// peek out at the opposite edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardGravity {
    /// Deeper cards peek out below the front card.
    #[default]
    Top,
    /// Deeper cards peek out above the front card.
    Bottom,
}

impl CardGravity {
    pub(crate) const fn depth_sign(self) -> f64 {
        match self {
            Self::Top => 1.0,
            Self::Bottom => -1.0,
        }
    }
}

/// Configuration for a [`SwipeDeck`](crate::SwipeDeck).
///
/// Everything except `swipe_enabled` is fixed once the deck is built;
/// use [`SwipeDeck::set_swipeable`](crate::SwipeDeck::set_swipeable) to toggle
/// swiping later.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckConfig {
    /// Number of cards realized at once.
    pub max_visible: NonZeroUsize,
    /// Tilt reached when the front card is dragged half the deck width.
    pub rotation_degrees_max: f64,
    /// Offset between consecutive cards in the stack, in logical units.
    pub card_spacing: f64,
    /// Whether cards can be swiped.
    pub swipe_enabled: bool,
    /// Z-order relative to sibling views.
    pub render_layer: RenderLayer,
    /// Stack anchoring.
    pub card_gravity: CardGravity,
    /// Tap, drag, and fling thresholds.
    pub gestures: GestureConfig,
    /// Length of the fling-out animation in milliseconds.
    pub exit_duration_ms: u64,
    /// Length of the return-to-rest animation in milliseconds.
    pub reset_duration_ms: u64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
            rotation_degrees_max: 15.0,
            card_spacing: 15.0,
            swipe_enabled: true,
            render_layer: RenderLayer::default(),
            card_gravity: CardGravity::default(),
            gestures: GestureConfig::default(),
            exit_duration_ms: 200,
            reset_duration_ms: 200,
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Events a [`SwipeDeck`](crate::SwipeDeck) reports to its host.
///
/// Positions are indices into the deck's card source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeckEvent {
    /// The card at this position left through the left edge.
    SwipedLeft(usize),
    /// The card at this position left through the right edge.
    SwipedRight(usize),
    /// The last card left and the source has nothing more.
    Depleted,
    /// The front card, at this position, was tapped.
    Clicked(usize),
    /// The front card was dragged; carries its current tilt in degrees.
    Moved(f64),
}

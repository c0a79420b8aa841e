// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card source trait and change notifications.

use alloc::vec::Vec;

/// An ordered sequence of items that can be turned into displayable cards.
///
/// The source is owned by the [`CardStack`](crate::CardStack) but mutated by the
/// host through [`CardStack::source_mut`](crate::CardStack::source_mut). After a
/// mutation, the host announces it with a [`SourceChange`] so the stack can
/// re-derive its window.
///
/// The stack never inspects a [`Card`](Self::Card); it only stores it, hands
/// it back for rendering, and offers it back to [`materialize`](Self::materialize)
/// as a recycling candidate once it has been swiped away.
pub trait CardSource {
    /// Opaque handle for a realized card (a view, a widget id, a texture, …).
    type Card;

    /// Number of items currently available.
    fn count(&self) -> usize;

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Produce a card for `position`.
    ///
    /// `position` is always `< count()`. `recycled` carries the most recently
    /// removed card, if any; implementations may reuse it or drop it.
    fn materialize(&mut self, position: usize, recycled: Option<Self::Card>) -> Self::Card;
}

/// Change notification for a [`CardSource`].
///
/// Notifications carry no payload; the stack re-derives what it needs from
/// [`CardSource::count`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceChange {
    /// Items were appended or updated. Existing cards keep their positions and
    /// any free slots in the window are refilled.
    Changed,
    /// The source was reset. All cards are dropped and the next layout pass
    /// rebuilds the window from the start.
    Invalidated,
}

impl<T: Clone> CardSource for Vec<T> {
    type Card = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn materialize(&mut self, position: usize, _recycled: Option<T>) -> T {
        self[position].clone()
    }
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    type Card = S::Card;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn materialize(&mut self, position: usize, recycled: Option<Self::Card>) -> Self::Card {
        (**self).materialize(position, recycled)
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The card window: which source positions are realized, and in what order.

use core::fmt;
use core::mem;
use core::num::NonZeroUsize;

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{CardSource, SourceChange, StackError};

/// Default number of cards kept realized at once.
pub const DEFAULT_MAX_VISIBLE: NonZeroUsize = NonZeroUsize::new(3).unwrap();

/// A realized card and the source position it was produced from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardBinding<C> {
    /// Index into the [`CardSource`].
    pub position: usize,
    /// The card produced by [`CardSource::materialize`].
    pub card: C,
}

/// Outcome of [`CardStack::remove_front`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removed {
    /// Source position of the card that left the stack.
    pub position: usize,
    /// `true` if this removal emptied the stack and the source had nothing
    /// left to refill it with.
    pub depleted: bool,
}

/// A window of at most `max_visible` realized cards over a [`CardSource`].
///
/// Cards are realized in increasing position order. [`bindings`](Self::bindings)
/// is always a contiguous run of positions ending at [`cursor`](Self::cursor),
/// the position of the back card. An empty window has no cursor; the stack
/// still remembers where to resume, so items appended after depletion pick up
/// where it left off.
///
/// The *front* card, the only one that accepts input, is the earliest
/// realized card still bound: `bindings()[0]`, at position
/// `cursor - (len - 1)`. Each newly realized card is placed beneath the
/// others and is revealed as the cards in front of it leave. Use
/// [`paint_order`](Self::paint_order) to walk the cards back to front.
///
/// Once every card has been removed and the source has nothing left, the
/// stack is *depleted*. Depletion is reported once, from
/// [`remove_front`](Self::remove_front), and sticks until the window is
/// rebuilt or new items arrive through [`SourceChange::Changed`].
pub struct CardStack<S: CardSource> {
    source: S,
    max_visible: NonZeroUsize,
    bindings: SmallVec<[CardBinding<S::Card>; 4]>,
    /// Next position to realize.
    next: usize,
    recycled: Option<S::Card>,
    depleted: bool,
}

impl<S: CardSource> fmt::Debug for CardStack<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardStack")
            .field("max_visible", &self.max_visible)
            .field("len", &self.bindings.len())
            .field("front_position", &self.front_position())
            .field("cursor", &self.cursor())
            .field("next", &self.next)
            .field("depleted", &self.depleted)
            .finish_non_exhaustive()
    }
}

impl<S: CardSource> CardStack<S> {
    /// Creates a stack over `source` and realizes up to `max_visible` cards.
    pub fn new(source: S, max_visible: NonZeroUsize) -> Self {
        let mut stack = Self {
            source,
            max_visible,
            bindings: SmallVec::new(),
            next: 0,
            recycled: None,
            depleted: false,
        };
        stack.fill();
        stack
    }

    /// Replaces the source, rebuilds the window from position 0, and returns
    /// the previous source.
    pub fn attach(&mut self, source: S) -> S {
        let previous = mem::replace(&mut self.source, source);
        self.clear_window();
        self.recycled = None;
        self.fill();
        previous
    }

    /// Applies a change notification from the host.
    ///
    /// Returns the number of cards realized in response.
    pub fn on_source_change(&mut self, change: SourceChange) -> usize {
        match change {
            SourceChange::Changed => {
                let count = self.source.count();
                if self.next > count {
                    warn!(
                        next = self.next,
                        count, "card source shrank below the realized window, rebuilding"
                    );
                    self.clear_window();
                }
                self.fill()
            }
            SourceChange::Invalidated => {
                self.clear_window();
                0
            }
        }
    }

    /// Realizes cards until the window is full or the source is exhausted.
    ///
    /// This is the layout-time refill. If the source is empty the window is
    /// cleared instead; that is never reported as depletion.
    ///
    /// Returns the number of cards realized.
    pub fn fill(&mut self) -> usize {
        if self.source.count() == 0 {
            if self.next > 0 {
                self.clear_window();
            }
            return 0;
        }
        let mut added = 0;
        while self.materialize_next().is_some() {
            added += 1;
        }
        if added > 0 {
            self.depleted = false;
        }
        self.debug_check();
        added
    }

    /// Realizes the next position and places it at the back of the stack.
    ///
    /// Returns the realized position, or `None` if the window is full or the
    /// source has no further items.
    pub fn materialize_next(&mut self) -> Option<usize> {
        if self.bindings.len() >= self.max_visible.get() {
            return None;
        }
        let next = self.next;
        if next >= self.source.count() {
            return None;
        }
        let card = self.source.materialize(next, self.recycled.take());
        self.next = next + 1;
        self.bindings.push(CardBinding {
            position: next,
            card,
        });
        trace!(position = next, len = self.bindings.len(), "materialized card");
        Some(next)
    }

    /// Drops the front card and refills the window.
    ///
    /// The refill happens before this returns, so the next front card (if
    /// any) is ready for input immediately. The removed card is kept and
    /// offered to the source as a recycling candidate for the next
    /// materialization.
    ///
    /// Returns `None` (and reports nothing) if the stack is already empty.
    pub fn remove_front(&mut self) -> Option<Removed> {
        if self.bindings.is_empty() {
            return None;
        }
        let front = self.bindings.remove(0);
        debug_assert_eq!(
            Some(front.position),
            self.next.checked_sub(self.bindings.len() + 1),
            "front card must sit at cursor - remaining"
        );
        self.recycled = Some(front.card);

        self.fill();
        let depleted = self.bindings.is_empty();
        self.depleted = depleted;
        if depleted {
            debug!(position = front.position, "card stack depleted");
        }
        Some(Removed {
            position: front.position,
            depleted,
        })
    }

    /// Moves the window so that `position` becomes the front card.
    pub fn set_position(&mut self, position: usize) -> Result<(), StackError> {
        let count = self.source.count();
        if position >= count {
            return Err(StackError::PositionOutOfRange { position, count });
        }
        self.clear_window();
        self.next = position;
        self.fill();
        Ok(())
    }

    /// The front card, the only one that accepts input.
    #[must_use]
    pub fn front(&self) -> Option<&CardBinding<S::Card>> {
        self.bindings.first()
    }

    /// Source position of the front card.
    #[must_use]
    pub fn front_position(&self) -> Option<usize> {
        self.front().map(|binding| binding.position)
    }

    /// All realized cards, front first.
    #[must_use]
    pub fn bindings(&self) -> &[CardBinding<S::Card>] {
        &self.bindings
    }

    /// Realized cards from the back of the stack to the front.
    ///
    /// This is the order in which hosts should paint them.
    pub fn paint_order(&self) -> impl DoubleEndedIterator<Item = &CardBinding<S::Card>> + '_ {
        self.bindings.iter().rev()
    }

    /// Position of the back card, the highest one realized, or `None` if the
    /// window is empty.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.bindings.last().map(|binding| binding.position)
    }

    /// Number of realized cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no cards are realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns `true` if the last card was swiped away and nothing remains.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.depleted
    }

    /// Returns `true` if the source has positions that were never realized.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next < self.source.count()
    }

    /// Maximum number of realized cards.
    #[must_use]
    pub const fn max_visible(&self) -> NonZeroUsize {
        self.max_visible
    }

    /// Shared access to the source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source.
    ///
    /// Follow any mutation with [`on_source_change`](Self::on_source_change).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn clear_window(&mut self) {
        if let Some(last) = self.bindings.pop() {
            self.recycled = Some(last.card);
        }
        self.bindings.clear();
        self.next = 0;
        self.depleted = false;
    }

    fn debug_check(&self) {
        debug_assert!(
            self.bindings.len() <= self.max_visible.get(),
            "window exceeds max_visible"
        );
        debug_assert!(
            self.bindings.last().is_none_or(|b| b.position + 1 == self.next),
            "the back card must be the last one realized"
        );
        debug_assert!(
            self.bindings
                .windows(2)
                .all(|pair| pair[1].position == pair[0].position + 1),
            "bound positions must be contiguous"
        );
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use super::{CardStack, Removed};
    use crate::{CardSource, SourceChange, StackError};

    /// A source that records every materialization.
    #[derive(Debug, Default)]
    struct Recording {
        count: usize,
        calls: Vec<(usize, Option<u32>)>,
    }

    impl Recording {
        fn new(count: usize) -> Self {
            Self {
                count,
                calls: Vec::new(),
            }
        }
    }

    impl CardSource for Recording {
        type Card = u32;

        fn count(&self) -> usize {
            self.count
        }

        fn materialize(&mut self, position: usize, recycled: Option<u32>) -> u32 {
            self.calls.push((position, recycled));
            u32::try_from(position).unwrap() + 100
        }
    }

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn positions<S: CardSource>(stack: &CardStack<S>) -> Vec<usize> {
        stack.bindings().iter().map(|b| b.position).collect()
    }

    #[test]
    fn attach_fills_window_in_position_order() {
        let stack = CardStack::new(Recording::new(5), nz(3));
        assert_eq!(positions(&stack), vec![0, 1, 2]);
        assert_eq!(stack.cursor(), Some(2));
        assert_eq!(stack.front_position(), Some(0));
        assert_eq!(stack.front().unwrap().card, 100);
    }

    #[test]
    fn swiping_front_refills_from_the_back() {
        let mut stack = CardStack::new(Recording::new(5), nz(3));
        let removed = stack.remove_front();
        assert_eq!(
            removed,
            Some(Removed {
                position: 0,
                depleted: false
            })
        );
        assert_eq!(positions(&stack), vec![1, 2, 3]);
        assert_eq!(stack.cursor(), Some(3));
        // The swiped card was offered back for recycling.
        assert_eq!(stack.source().calls.last(), Some(&(3, Some(100))));
    }

    #[test]
    fn single_item_depletes_once() {
        let mut stack = CardStack::new(vec!['x'], nz(3));
        assert_eq!(positions(&stack), vec![0]);
        assert_eq!(
            stack.remove_front(),
            Some(Removed {
                position: 0,
                depleted: true
            })
        );
        assert!(stack.is_depleted());
        assert_eq!(stack.remove_front(), None);
        assert_eq!(stack.remove_front(), None);
        assert!(stack.is_depleted());
    }

    #[test]
    fn depleted_stack_has_no_cursor() {
        let mut stack = CardStack::new(vec!['x'], nz(3));
        assert_eq!(stack.cursor(), Some(0));
        assert!(stack.remove_front().unwrap().depleted);
        assert!(stack.is_empty());
        assert_eq!(stack.cursor(), None);
        assert!(!stack.has_more());
    }

    #[test]
    fn window_of_one_is_replaced_synchronously() {
        let mut stack = CardStack::new(Recording::new(3), nz(1));
        assert_eq!(positions(&stack), vec![0]);
        let removed = stack.remove_front().unwrap();
        assert!(!removed.depleted);
        assert_eq!(positions(&stack), vec![1]);
        stack.remove_front();
        let last = stack.remove_front().unwrap();
        assert_eq!(last.position, 2);
        assert!(last.depleted);
    }

    #[test]
    fn empty_source_never_depletes() {
        let mut stack = CardStack::new(Recording::new(0), nz(3));
        assert!(stack.is_empty());
        assert_eq!(stack.cursor(), None);
        assert_eq!(stack.fill(), 0);
        assert_eq!(stack.remove_front(), None);
        assert!(!stack.is_depleted());
    }

    #[test]
    fn changed_on_full_window_is_a_no_op() {
        let mut stack = CardStack::new(Recording::new(10), nz(3));
        let calls = stack.source().calls.len();
        assert_eq!(stack.on_source_change(SourceChange::Changed), 0);
        assert_eq!(stack.source().calls.len(), calls);
        assert_eq!(positions(&stack), vec![0, 1, 2]);
    }

    #[test]
    fn changed_appends_without_moving_existing_cards() {
        let mut stack = CardStack::new(Recording::new(1), nz(3));
        assert_eq!(positions(&stack), vec![0]);
        stack.source_mut().count = 4;
        assert_eq!(stack.on_source_change(SourceChange::Changed), 2);
        assert_eq!(positions(&stack), vec![0, 1, 2]);
        assert_eq!(stack.front_position(), Some(0));
    }

    #[test]
    fn changed_after_depletion_revives_the_stack() {
        let mut stack = CardStack::new(Recording::new(1), nz(3));
        assert!(stack.remove_front().unwrap().depleted);
        // Nothing new yet: still depleted.
        assert_eq!(stack.on_source_change(SourceChange::Changed), 0);
        assert!(stack.is_depleted());

        stack.source_mut().count = 3;
        assert_eq!(stack.on_source_change(SourceChange::Changed), 2);
        assert!(!stack.is_depleted());
        assert_eq!(positions(&stack), vec![1, 2]);
    }

    #[test]
    fn shrinking_source_rebuilds_window() {
        let mut stack = CardStack::new(Recording::new(10), nz(3));
        stack.remove_front();
        stack.remove_front();
        assert_eq!(positions(&stack), vec![2, 3, 4]);
        stack.source_mut().count = 2;
        stack.on_source_change(SourceChange::Changed);
        assert_eq!(positions(&stack), vec![0, 1]);
        assert_eq!(stack.cursor(), Some(1));
    }

    #[test]
    fn invalidate_then_fill_matches_fresh_attach() {
        let mut stack = CardStack::new(vec![10, 20, 30, 40, 50], nz(3));
        stack.remove_front();
        stack.on_source_change(SourceChange::Invalidated);
        assert!(stack.is_empty());
        assert_eq!(stack.cursor(), None);

        stack.fill();
        let fresh = CardStack::new(vec![10, 20, 30, 40, 50], nz(3));
        assert_eq!(stack.bindings(), fresh.bindings());
        assert_eq!(stack.cursor(), fresh.cursor());
    }

    #[test]
    fn attach_replaces_source_and_resets() {
        let mut stack = CardStack::new(vec![1, 2, 3, 4], nz(2));
        stack.remove_front();
        let previous = stack.attach(vec![7, 8, 9]);
        assert_eq!(previous, vec![1, 2, 3, 4]);
        assert_eq!(positions(&stack), vec![0, 1]);
        assert_eq!(stack.front().unwrap().card, 7);
    }

    #[test]
    fn set_position_jumps_window() {
        let mut stack = CardStack::new(Recording::new(6), nz(3));
        stack.set_position(4).unwrap();
        assert_eq!(positions(&stack), vec![4, 5]);
        assert_eq!(stack.front_position(), Some(4));

        stack.set_position(0).unwrap();
        assert_eq!(positions(&stack), vec![0, 1, 2]);
    }

    #[test]
    fn set_position_out_of_range_fails() {
        let mut stack = CardStack::new(Recording::new(2), nz(3));
        assert_eq!(
            stack.set_position(2),
            Err(StackError::PositionOutOfRange {
                position: 2,
                count: 2
            })
        );
        // The window is untouched.
        assert_eq!(positions(&stack), vec![0, 1]);
    }

    #[test]
    fn paint_order_is_back_to_front() {
        let stack = CardStack::new(Recording::new(5), nz(3));
        let order: Vec<usize> = stack.paint_order().map(|b| b.position).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn materialize_next_respects_window_size() {
        let mut stack = CardStack::new(Recording::new(5), nz(2));
        assert_eq!(stack.materialize_next(), None);
        stack.remove_front();
        assert_eq!(stack.len(), 2);
        assert!(stack.has_more());
    }
}

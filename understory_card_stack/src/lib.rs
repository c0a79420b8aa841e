// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_card_stack --heading-base-level=0

//! Understory Card Stack: the window of realized cards behind a swipeable deck.
//!
//! A card deck shows a handful of cards from a potentially long, mutable
//! sequence of items. This crate owns the bookkeeping for that window:
//!
//! - [`CardSource`]: a trait over the host's items, with a `count` and a
//!   `materialize(position, recycled)` that produces an opaque card.
//! - [`CardStack`]: keeps at most `max_visible` cards realized, tracks which
//!   source position each one is bound to, refills as cards leave, and
//!   reports when the deck is depleted.
//! - [`SourceChange`]: payload-free change notifications the host forwards
//!   after mutating its source.
//!
//! The crate knows nothing about pointers, animation, or painting. A widget
//! (see `understory_swipe_deck`) drives it from layout passes and swipe
//! outcomes.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use understory_card_stack::{CardStack, SourceChange};
//!
//! let cards = vec!["ada", "grace", "edsger", "barbara", "ken"];
//! let mut stack = CardStack::new(cards, NonZeroUsize::new(3).unwrap());
//!
//! // The first three positions are realized; position 0 is in front.
//! assert_eq!(stack.front_position(), Some(0));
//! assert_eq!(stack.cursor(), Some(2));
//!
//! // Swiping the front card away reveals the next one and realizes
//! // position 3 at the back.
//! let removed = stack.remove_front().unwrap();
//! assert_eq!(removed.position, 0);
//! assert_eq!(stack.front_position(), Some(1));
//! assert_eq!(stack.cursor(), Some(3));
//!
//! // Appending items and announcing the change keeps the window as is.
//! stack.source_mut().push("linus");
//! assert_eq!(stack.on_source_change(SourceChange::Changed), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod source;
mod stack;

pub use error::StackError;
pub use source::{CardSource, SourceChange};
pub use stack::{CardBinding, CardStack, DEFAULT_MAX_VISIBLE, Removed};

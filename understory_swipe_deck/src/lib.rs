// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe_deck --heading-base-level=0

//! Understory Swipe Deck: a renderer-agnostic swipeable card deck.
//!
//! [`SwipeDeck`] wires [`understory_card_stack`] and [`understory_swipe`]
//! together. It keeps a few cards from a [`CardSource`](understory_card_stack::CardSource)
//! realized, lets the front one be dragged, flung, or tapped, animates it off
//! the deck, and reveals the next one.
//!
//! The host framework stays in charge of everything platform-specific:
//!
//! - it owns the items and produces card handles via `CardSource`;
//! - it calls [`SwipeDeck::layout`] with the deck's [`Viewport`] and paints
//!   [`SwipeDeck::placements`] back to front;
//! - it forwards pointer events and a frame clock;
//! - it reacts to [`DeckEvent`]s.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_swipe::PointerEvent;
//! use understory_swipe_deck::{DeckConfig, DeckEvent, SwipeDeck, Viewport};
//!
//! let cards = vec!["north", "east", "south", "west"];
//! let mut deck = SwipeDeck::new(cards, DeckConfig::default());
//! deck.layout(Viewport::new(Size::new(400.0, 600.0), 16.0));
//!
//! // Flick the front card to the right.
//! deck.pointer(&PointerEvent::down(Point::new(200.0, 300.0), 0));
//! deck.pointer(&PointerEvent::moved(Point::new(260.0, 300.0), 10));
//! deck.pointer(&PointerEvent::up(Point::new(320.0, 300.0), 20));
//!
//! // Run the exit animation to completion.
//! let mut now = 20;
//! while deck.tick(now) {
//!     now += 16;
//! }
//!
//! let swiped: Vec<_> = deck
//!     .drain_events()
//!     .filter(|event| !matches!(event, DeckEvent::Moved(_)))
//!     .collect();
//! assert_eq!(swiped, [DeckEvent::SwipedRight(0)]);
//! assert_eq!(deck.stack().front_position(), Some(1));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in dependencies.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod deck;
mod event;
mod layout;

pub use config::{CardGravity, DeckConfig, RenderLayer};
pub use deck::SwipeDeck;
pub use event::DeckEvent;
pub use layout::{CardPlacement, Viewport};

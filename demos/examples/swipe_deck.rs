// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted session with a swipe deck.
//!
//! This example shows how a host:
//! - backs the deck with its own `CardSource` that reuses swiped-away cards,
//! - forwards pointer events and a frame clock,
//! - reacts to deck events (a tap toggles swiping, like a "lock card" button),
//! - appends items and announces them with `SourceChange::Changed`.
//!
//! Run:
//! - `cargo run -p understory_demos --example swipe_deck`
//! - `RUST_LOG=debug cargo run -p understory_demos --example swipe_deck` to
//!   also see the deck's own logging.

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_card_stack::{CardSource, SourceChange};
use understory_swipe::{FlingDirection, PointerEvent};
use understory_swipe_deck::{DeckConfig, DeckEvent, SwipeDeck, Viewport};

/// A realized card: stands in for a widget the host would have to build.
#[derive(Debug)]
struct CardView {
    label: String,
    /// Serial of the widget this card was built into.
    widget: u32,
}

/// Host-side data behind the deck.
#[derive(Debug, Default)]
struct Offers {
    items: Vec<String>,
    widgets_built: u32,
}

impl CardSource for Offers {
    type Card = CardView;

    fn count(&self) -> usize {
        self.items.len()
    }

    fn materialize(&mut self, position: usize, recycled: Option<CardView>) -> CardView {
        let label = self.items[position].clone();
        match recycled {
            Some(mut view) => {
                view.label = label;
                view
            }
            None => {
                self.widgets_built += 1;
                CardView {
                    label,
                    widget: self.widgets_built,
                }
            }
        }
    }
}

/// Drives the deck's clock until its animation settles.
fn settle(deck: &mut SwipeDeck<Offers>, now: &mut u64) {
    while deck.tick(*now) {
        *now += 16;
    }
}

fn drag(deck: &mut SwipeDeck<Offers>, from: Point, dx: f64, now: &mut u64) {
    deck.pointer(&PointerEvent::down(from, *now));
    for step in 1..=4 {
        *now += 8;
        let to = Point::new(from.x + dx * f64::from(step) / 4.0, from.y);
        deck.pointer(&PointerEvent::moved(to, *now));
    }
    *now += 8;
    deck.pointer(&PointerEvent::up(Point::new(from.x + dx, from.y), *now));
    settle(deck, now);
}

fn tap(deck: &mut SwipeDeck<Offers>, at: Point, now: &mut u64) {
    deck.pointer(&PointerEvent::down(at, *now));
    *now += 60;
    deck.pointer(&PointerEvent::up(at, *now));
}

/// Prints pending events and handles taps; returns `true` if the deck ran dry.
fn report(deck: &mut SwipeDeck<Offers>, swipeable: &mut bool) -> bool {
    let events: Vec<_> = deck.drain_events().collect();
    let mut depleted = false;
    let mut tilt = None;
    for event in events {
        match event {
            DeckEvent::Moved(degrees) => tilt = Some(degrees),
            DeckEvent::SwipedLeft(position) => println!("card {position} was swiped left"),
            DeckEvent::SwipedRight(position) => println!("card {position} was swiped right"),
            DeckEvent::Clicked(position) => {
                *swipeable = !*swipeable;
                deck.set_swipeable(*swipeable);
                println!("card {position} was clicked; swiping enabled: {swipeable}");
            }
            DeckEvent::Depleted => {
                println!("no more cards");
                depleted = true;
            }
        }
    }
    if let Some(degrees) = tilt {
        println!("  last tilt while dragging: {degrees:.1} degrees");
    }
    depleted
}

fn print_stack(deck: &SwipeDeck<Offers>) {
    for placement in deck.placements() {
        println!(
            "  [{}] {:<18} widget #{} at y={:.0} z={}",
            placement.position,
            placement.card.label,
            placement.card.widget,
            placement.rect.y0,
            placement.z,
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let offers = Offers {
        items: (0..5).map(|i| format!("offer {i}")).collect(),
        ..Default::default()
    };
    let mut deck = SwipeDeck::new(offers, DeckConfig::default());
    deck.layout(Viewport::new(Size::new(360.0, 640.0), 24.0));
    let center = Point::new(180.0, 320.0);
    let mut swipeable = deck.config().swipe_enabled;
    let mut now = 0_u64;

    println!("initial stack (back to front):");
    print_stack(&deck);

    println!("\nfling right:");
    drag(&mut deck, center, 160.0, &mut now);
    report(&mut deck, &mut swipeable);

    println!("\nshort drag, released slowly:");
    deck.pointer(&PointerEvent::down(center, now));
    now += 400;
    deck.pointer(&PointerEvent::moved(Point::new(center.x - 40.0, center.y), now));
    now += 400;
    deck.pointer(&PointerEvent::up(Point::new(center.x - 40.0, center.y), now));
    settle(&mut deck, &mut now);
    report(&mut deck, &mut swipeable);

    println!("\ntap to lock the deck, then try to fling:");
    tap(&mut deck, center, &mut now);
    report(&mut deck, &mut swipeable);
    drag(&mut deck, center, -160.0, &mut now);
    report(&mut deck, &mut swipeable);

    println!("\ntap to unlock, then swipe left from a button:");
    tap(&mut deck, center, &mut now);
    report(&mut deck, &mut swipeable);
    deck.swipe_front(FlingDirection::Left, now);
    settle(&mut deck, &mut now);
    report(&mut deck, &mut swipeable);

    println!("\nappend an item:");
    deck.source_mut().items.push("a sample string".into());
    deck.on_source_change(SourceChange::Changed);
    print_stack(&deck);

    println!("\nswipe until empty:");
    while deck.is_interactive() {
        drag(&mut deck, center, 160.0, &mut now);
        if report(&mut deck, &mut swipeable) {
            break;
        }
    }

    println!(
        "\n{} widgets built for {} offers",
        deck.stack().source().widgets_built,
        deck.stack().source().items.len(),
    );
}

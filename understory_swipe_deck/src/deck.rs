// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The deck widget core.

use alloc::vec::Drain;
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use tracing::{debug, trace};
use understory_card_stack::{CardSource, CardStack, SourceChange, StackError};
use understory_swipe::{
    CardTransform, DragFrame, Easing, FlingDirection, GestureClassifier, GestureOutput,
    GestureState, PointerEvent, PointerPhase, SwipeIntent, Tween,
};

use crate::{CardPlacement, DeckConfig, DeckEvent, Viewport};

/// Tension of the return-to-rest overshoot.
const RESET_TENSION: f64 = 1.5;

/// Elevation step between consecutive cards.
const Z_STEP: f64 = 10.0;

#[derive(Clone, Copy, Debug)]
enum Motion {
    Idle,
    Resetting(Tween),
    Exiting {
        tween: Tween,
        direction: FlingDirection,
    },
}

/// A swipeable deck of cards.
///
/// The deck owns a [`CardStack`] over the host's [`CardSource`] and a
/// [`GestureClassifier`] bound to the front card. The host drives it:
///
/// - [`layout`](Self::layout) whenever the deck's box changes (and once
///   before any input), then [`placements`](Self::placements) to paint;
/// - [`pointer`](Self::pointer) for every pointer event over the deck;
/// - [`tick`](Self::tick) every frame while [`is_animating`](Self::is_animating);
/// - [`drain_events`](Self::drain_events) to observe swipes, clicks, drags,
///   and depletion.
///
/// A fling detaches the front card's classifier before the exit animation
/// starts, so no further input reaches the leaving card. When the animation
/// finishes the card is removed, the next card becomes interactive, and the
/// swipe is reported, all within the same [`tick`](Self::tick).
pub struct SwipeDeck<S: CardSource> {
    stack: CardStack<S>,
    config: DeckConfig,
    viewport: Option<Viewport>,
    gestures: Option<GestureClassifier>,
    front: CardTransform,
    motion: Motion,
    events: Vec<DeckEvent>,
}

impl<S: CardSource> core::fmt::Debug for SwipeDeck<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwipeDeck")
            .field("stack", &self.stack)
            .field("viewport", &self.viewport)
            .field("gestures", &self.gestures)
            .field("front", &self.front)
            .field("motion", &self.motion)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl<S: CardSource> SwipeDeck<S> {
    /// Creates a deck over `source`.
    ///
    /// Cards are realized immediately; input is accepted after the first
    /// [`layout`](Self::layout).
    pub fn new(source: S, config: DeckConfig) -> Self {
        Self {
            stack: CardStack::new(source, config.max_visible),
            config,
            viewport: None,
            gestures: None,
            front: CardTransform::at_rest(kurbo::Point::ORIGIN),
            motion: Motion::Idle,
            events: Vec::new(),
        }
    }

    /// The underlying card window.
    #[must_use]
    pub fn stack(&self) -> &CardStack<S> {
        &self.stack
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Last viewport passed to [`layout`](Self::layout).
    #[must_use]
    pub const fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Z value of the deck container relative to its siblings.
    #[must_use]
    pub const fn deck_z(&self) -> f32 {
        self.config.render_layer.z()
    }

    /// Current transform of the front card.
    #[must_use]
    pub const fn front_transform(&self) -> CardTransform {
        self.front
    }

    /// State of the front card's gesture, or `None` if no card accepts input.
    #[must_use]
    pub fn gesture_state(&self) -> Option<GestureState> {
        self.gestures.as_ref().map(GestureClassifier::state)
    }

    /// Returns `true` if the front card accepts input.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.gestures.is_some()
    }

    /// Returns `true` while a reset or exit animation is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        !matches!(self.motion, Motion::Idle)
    }

    /// Takes all events reported since the last call.
    pub fn drain_events(&mut self) -> Drain<'_, DeckEvent> {
        self.events.drain(..)
    }

    /// Enables or disables swiping.
    ///
    /// Takes effect at the next press; a drag already in progress keeps the
    /// setting it started with. Taps are reported either way.
    pub fn set_swipeable(&mut self, swipeable: bool) {
        self.config.swipe_enabled = swipeable;
        if let Some(gestures) = &mut self.gestures {
            gestures.set_swipe_enabled(swipeable);
        }
    }

    /// Replaces the card source and starts over from its first item.
    ///
    /// Any running animation is dropped without reporting. Returns the previous
    /// source.
    pub fn attach_source(&mut self, source: S) -> S {
        self.motion = Motion::Idle;
        let previous = self.stack.attach(source);
        self.attach_front();
        previous
    }

    /// Mutable access to the card source.
    ///
    /// Follow any mutation with [`on_source_change`](Self::on_source_change).
    pub fn source_mut(&mut self) -> &mut S {
        self.stack.source_mut()
    }

    /// Applies a change notification for the card source.
    ///
    /// If the notification moves the front card (an invalidation, or a
    /// source that shrank under the window), a running animation is dropped
    /// and a card that was leaving is never reported as swiped. Appends leave
    /// a running exit alone.
    pub fn on_source_change(&mut self, change: SourceChange) {
        let before = self.stack.front_position();
        self.stack.on_source_change(change);
        if self.stack.front_position() != before {
            self.motion = Motion::Idle;
            self.attach_front();
        }
    }

    /// Jumps so that `position` becomes the front card.
    ///
    /// Any running animation is dropped without reporting, so a card that was
    /// leaving is never reported as swiped.
    pub fn set_position(&mut self, position: usize) -> Result<(), StackError> {
        self.stack.set_position(position)?;
        self.motion = Motion::Idle;
        self.attach_front();
        Ok(())
    }

    /// Layout pass: records the viewport, fills the stack, and makes sure the
    /// front card is ready for input.
    pub fn layout(&mut self, viewport: Viewport) {
        let resized = self.viewport != Some(viewport);
        self.viewport = Some(viewport);
        if matches!(self.motion, Motion::Exiting { .. }) {
            // The leaving card keeps its animation; the stack is refilled when
            // it is removed.
            return;
        }

        let before = self.stack.front_position();
        self.stack.fill();
        if self.stack.front_position() != before || self.gestures.is_none() {
            self.attach_front();
        } else if resized {
            let frame = self.drag_frame(viewport);
            let animating = self.is_animating();
            if let Some(gestures) = &mut self.gestures {
                gestures.set_frame(frame);
                if gestures.state() == GestureState::Idle && !animating {
                    self.front = frame.rest();
                }
            }
        }
    }

    /// Where to draw each realized card, back to front.
    ///
    /// Empty until the first [`layout`](Self::layout).
    pub fn placements(&self) -> impl Iterator<Item = CardPlacement<'_, S::Card>> + '_ {
        let viewport = self.viewport;
        let len = self.stack.len();
        self.stack
            .paint_order()
            .enumerate()
            .filter_map(move |(index, binding)| {
                let viewport = viewport?;
                let depth = len - 1 - index;
                let rect = viewport.resting_rect(
                    depth,
                    self.config.card_spacing,
                    self.config.card_gravity,
                );
                let transform = if depth == 0 {
                    self.front
                } else {
                    CardTransform::at_rest(rect.origin())
                };
                Some(CardPlacement {
                    position: binding.position,
                    card: &binding.card,
                    rect,
                    transform,
                    z: index as f64 * Z_STEP,
                })
            })
    }

    /// Feeds a pointer event, in deck coordinates.
    ///
    /// Returns `true` if the event was consumed. Events are ignored when no
    /// card accepts input (before layout, while a card is leaving, or when the
    /// deck is empty) and presses that miss the front card are ignored.
    pub fn pointer(&mut self, event: &PointerEvent) -> bool {
        if event.phase == PointerPhase::Down
            && !self
                .front_rect()
                .is_some_and(|rect| rect.contains(event.position))
        {
            return false;
        }
        let Some(gestures) = &mut self.gestures else {
            return false;
        };
        match gestures.on_pointer(event) {
            GestureOutput::Ignored => false,
            GestureOutput::Pressed | GestureOutput::Tracking => true,
            GestureOutput::Dragged(transform) => {
                self.motion = Motion::Idle;
                self.front = transform;
                self.events.push(DeckEvent::Moved(transform.rotation_degrees));
                true
            }
            GestureOutput::Released(intent) => {
                self.apply_intent(intent, event.time);
                true
            }
            GestureOutput::Cancelled => {
                self.begin_reset(event.time);
                true
            }
        }
    }

    /// Flings the front card off the deck without any pointer input.
    ///
    /// Returns `false` if no card currently accepts input.
    pub fn swipe_front(&mut self, direction: FlingDirection, now: u64) -> bool {
        let Some(viewport) = self.viewport else {
            return false;
        };
        let Some(gestures) = &mut self.gestures else {
            return false;
        };
        gestures.cancel();
        let velocity = Vec2::new(direction.sign() * viewport.size.width, 0.0);
        self.begin_exit(direction, velocity, now);
        true
    }

    /// Advances animations to `now` (milliseconds).
    ///
    /// Returns `true` while an animation is still running.
    pub fn tick(&mut self, now: u64) -> bool {
        match self.motion {
            Motion::Idle => {}
            Motion::Resetting(tween) => {
                self.front = tween.sample(now);
                if tween.is_finished(now) {
                    self.motion = Motion::Idle;
                }
            }
            Motion::Exiting { tween, direction } => {
                self.front = tween.sample(now);
                if tween.is_finished(now) {
                    self.motion = Motion::Idle;
                    self.finish_exit(direction);
                }
            }
        }
        self.is_animating()
    }

    fn apply_intent(&mut self, intent: SwipeIntent, now: u64) {
        match intent {
            SwipeIntent::Left { velocity } => self.begin_exit(FlingDirection::Left, velocity, now),
            SwipeIntent::Right { velocity } => {
                self.begin_exit(FlingDirection::Right, velocity, now);
            }
            SwipeIntent::Reset => self.begin_reset(now),
            SwipeIntent::Click => {
                if let Some(position) = self.stack.front_position() {
                    self.events.push(DeckEvent::Clicked(position));
                }
            }
        }
    }

    fn begin_exit(&mut self, direction: FlingDirection, velocity: Vec2, now: u64) {
        // Detach input first so late events cannot trigger a second swipe.
        self.gestures = None;
        let Some(viewport) = self.viewport else {
            return;
        };
        let to = self.drag_frame(viewport).fling_out(
            &self.front,
            velocity,
            direction,
            viewport.card_size().width,
        );
        debug!(
            ?direction,
            position = ?self.stack.front_position(),
            "front card leaving"
        );
        self.motion = Motion::Exiting {
            tween: Tween::new(
                self.front,
                to,
                now,
                self.config.exit_duration_ms,
                Easing::Linear,
            ),
            direction,
        };
    }

    fn begin_reset(&mut self, now: u64) {
        let Some(viewport) = self.viewport else {
            return;
        };
        let rest = self.drag_frame(viewport).rest();
        if self.front == rest {
            self.motion = Motion::Idle;
            return;
        }
        self.motion = Motion::Resetting(Tween::new(
            self.front,
            rest,
            now,
            self.config.reset_duration_ms,
            Easing::Overshoot {
                tension: RESET_TENSION,
            },
        ));
    }

    fn finish_exit(&mut self, direction: FlingDirection) {
        let Some(removed) = self.stack.remove_front() else {
            return;
        };
        self.attach_front();
        self.events.push(match direction {
            FlingDirection::Left => DeckEvent::SwipedLeft(removed.position),
            FlingDirection::Right => DeckEvent::SwipedRight(removed.position),
        });
        if removed.depleted {
            self.events.push(DeckEvent::Depleted);
        }
    }

    /// Binds a fresh classifier to the current front card, if any.
    fn attach_front(&mut self) {
        self.gestures = None;
        let Some(viewport) = self.viewport else {
            return;
        };
        let frame = self.drag_frame(viewport);
        self.front = frame.rest();
        let Some(position) = self.stack.front_position() else {
            return;
        };
        let mut gestures = GestureClassifier::new(self.config.gestures, frame);
        gestures.set_swipe_enabled(self.config.swipe_enabled);
        self.gestures = Some(gestures);
        trace!(position, "front card ready");
    }

    fn drag_frame(&self, viewport: Viewport) -> DragFrame {
        DragFrame {
            origin: viewport.front_origin(),
            parent_width: viewport.size.width,
            rotation_degrees_max: self.config.rotation_degrees_max,
        }
    }

    fn front_rect(&self) -> Option<Rect> {
        let viewport = self.viewport?;
        self.stack.front()?;
        Some(Rect::from_origin_size(
            self.front.position,
            viewport.card_size(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use kurbo::{Point, Size};
    use understory_card_stack::SourceChange;
    use understory_swipe::{CardTransform, FlingDirection, GestureState, PointerEvent};

    use super::SwipeDeck;
    use crate::{DeckConfig, DeckEvent, Viewport};

    const EXIT: u64 = 200;

    fn viewport() -> Viewport {
        Viewport::new(Size::new(400.0, 600.0), 20.0)
    }

    fn deck(items: usize, max_visible: usize) -> SwipeDeck<Vec<usize>> {
        let config = DeckConfig {
            max_visible: NonZeroUsize::new(max_visible).unwrap(),
            ..DeckConfig::default()
        };
        let mut deck = SwipeDeck::new((0..items).collect(), config);
        deck.layout(viewport());
        deck
    }

    fn rest(deck: &SwipeDeck<Vec<usize>>) -> CardTransform {
        CardTransform::at_rest(deck.viewport().unwrap().front_origin())
    }

    fn positions(deck: &SwipeDeck<Vec<usize>>) -> Vec<usize> {
        deck.stack().bindings().iter().map(|b| b.position).collect()
    }

    /// Events other than drag feedback.
    fn outcomes(deck: &mut SwipeDeck<Vec<usize>>) -> Vec<DeckEvent> {
        deck.drain_events()
            .filter(|event| !matches!(event, DeckEvent::Moved(_)))
            .collect()
    }

    /// A quick horizontal flick of `dx` starting at `t`.
    fn flick(deck: &mut SwipeDeck<Vec<usize>>, dx: f64, t: u64) {
        let start = Point::new(200.0, 300.0);
        assert!(deck.pointer(&PointerEvent::down(start, t)));
        deck.pointer(&PointerEvent::moved(start + (dx * 0.5, 0.0), t + 10));
        assert!(deck.pointer(&PointerEvent::up(start + (dx, 0.0), t + 20)));
    }

    #[test]
    fn right_fling_swipes_front_and_refills() {
        let mut deck = deck(5, 3);
        assert_eq!(positions(&deck), vec![0, 1, 2]);
        assert_eq!(deck.stack().cursor(), Some(2));

        flick(&mut deck, 120.0, 0);
        assert!(deck.is_animating());
        assert!(!deck.is_interactive());
        // Nothing is reported until the card has left.
        assert!(outcomes(&mut deck).is_empty());

        assert!(!deck.tick(20 + EXIT));
        assert_eq!(outcomes(&mut deck), vec![DeckEvent::SwipedRight(0)]);
        assert_eq!(positions(&deck), vec![1, 2, 3]);
        assert_eq!(deck.stack().cursor(), Some(3));
        assert!(deck.is_interactive());
        assert_eq!(deck.front_transform(), rest(&deck));
    }

    #[test]
    fn drag_reports_tilt() {
        let mut deck = deck(5, 3);
        deck.pointer(&PointerEvent::down(Point::new(200.0, 300.0), 0));
        deck.pointer(&PointerEvent::moved(Point::new(240.0, 300.0), 16));
        let events: Vec<_> = deck.drain_events().collect();
        assert_eq!(events, vec![DeckEvent::Moved(3.0)]);
        assert_eq!(deck.gesture_state(), Some(GestureState::Dragging));
        assert_eq!(deck.front_transform().position, Point::new(60.0, 20.0));
    }

    #[test]
    fn last_card_depletes_once() {
        let mut deck = deck(1, 3);
        assert_eq!(positions(&deck), vec![0]);
        flick(&mut deck, -120.0, 0);
        deck.tick(20 + EXIT);
        assert_eq!(
            outcomes(&mut deck),
            vec![DeckEvent::SwipedLeft(0), DeckEvent::Depleted]
        );
        assert!(deck.stack().is_empty());
        assert!(!deck.is_interactive());

        // Further layouts, ticks, and input report nothing.
        deck.layout(viewport());
        deck.tick(10_000);
        assert!(!deck.pointer(&PointerEvent::down(Point::new(200.0, 300.0), 10_000)));
        assert!(!deck.swipe_front(FlingDirection::Left, 10_000));
        assert_eq!(deck.drain_events().count(), 0);
    }

    #[test]
    fn disabled_swiping_keeps_card_at_rest() {
        let mut deck = deck(5, 3);
        deck.set_swipeable(false);
        let start = Point::new(200.0, 300.0);
        assert!(deck.pointer(&PointerEvent::down(start, 0)));
        assert!(!deck.pointer(&PointerEvent::moved(start + (100.0, 0.0), 10)));
        assert!(deck.pointer(&PointerEvent::up(start + (200.0, 0.0), 20)));

        assert_eq!(deck.drain_events().count(), 0);
        assert!(!deck.is_animating());
        assert_eq!(deck.front_transform(), rest(&deck));
        assert_eq!(positions(&deck), vec![0, 1, 2]);
    }

    #[test]
    fn tap_clicks_front_card() {
        let mut deck = deck(5, 3);
        let at = Point::new(200.0, 300.0);
        deck.pointer(&PointerEvent::down(at, 0));
        deck.pointer(&PointerEvent::up(at + (2.0, 1.0), 60));
        assert_eq!(outcomes(&mut deck), vec![DeckEvent::Clicked(0)]);
        assert_eq!(positions(&deck), vec![0, 1, 2]);
        assert!(!deck.is_animating());
    }

    #[test]
    fn tap_toggles_swiping_back_on() {
        let mut deck = deck(5, 3);
        deck.set_swipeable(false);
        let at = Point::new(200.0, 300.0);
        deck.pointer(&PointerEvent::down(at, 0));
        deck.pointer(&PointerEvent::up(at, 40));
        if outcomes(&mut deck) == vec![DeckEvent::Clicked(0)] {
            deck.set_swipeable(true);
        }
        flick(&mut deck, 120.0, 100);
        deck.tick(120 + EXIT);
        assert_eq!(outcomes(&mut deck), vec![DeckEvent::SwipedRight(0)]);
    }

    #[test]
    fn input_during_exit_is_ignored() {
        let mut deck = deck(5, 3);
        flick(&mut deck, 120.0, 0);
        assert!(!deck.pointer(&PointerEvent::down(Point::new(200.0, 300.0), 50)));
        assert!(!deck.pointer(&PointerEvent::up(Point::new(320.0, 300.0), 60)));
        assert!(!deck.swipe_front(FlingDirection::Right, 70));
        deck.tick(20 + EXIT);
        assert_eq!(outcomes(&mut deck), vec![DeckEvent::SwipedRight(0)]);
        assert_eq!(positions(&deck), vec![1, 2, 3]);
    }

    #[test]
    fn jumping_mid_exit_drops_the_swipe() {
        let mut deck = deck(5, 3);
        flick(&mut deck, 120.0, 0);
        assert!(deck.is_animating());
        deck.set_position(3).unwrap();
        assert!(!deck.is_animating());
        assert!(deck.is_interactive());
        assert_eq!(deck.front_transform(), rest(&deck));

        assert!(!deck.tick(20 + EXIT));
        assert!(outcomes(&mut deck).is_empty());
        assert_eq!(positions(&deck), vec![3, 4]);
    }

    #[test]
    fn invalidating_mid_exit_drops_the_swipe() {
        let mut deck = deck(5, 3);
        flick(&mut deck, -120.0, 0);
        deck.on_source_change(SourceChange::Invalidated);
        assert!(!deck.is_animating());
        assert!(!deck.tick(20 + EXIT));
        assert!(outcomes(&mut deck).is_empty());

        deck.layout(viewport());
        assert_eq!(positions(&deck), vec![0, 1, 2]);
        assert!(deck.is_interactive());
    }

    #[test]
    fn presses_outside_front_card_are_ignored() {
        let mut deck = deck(5, 3);
        // Inside the padding, outside the card.
        assert!(!deck.pointer(&PointerEvent::down(Point::new(5.0, 5.0), 0)));
        assert_eq!(deck.gesture_state(), Some(GestureState::Idle));
    }

    #[test]
    fn slow_release_animates_back() {
        let mut deck = deck(5, 3);
        deck.pointer(&PointerEvent::down(Point::new(200.0, 300.0), 0));
        deck.pointer(&PointerEvent::moved(Point::new(260.0, 300.0), 100));
        deck.pointer(&PointerEvent::moved(Point::new(260.0, 300.0), 500));
        deck.pointer(&PointerEvent::up(Point::new(260.0, 300.0), 520));
        assert!(deck.is_animating());
        assert!(deck.tick(600));
        assert!(!deck.tick(720));
        assert_eq!(deck.front_transform(), rest(&deck));
        assert!(outcomes(&mut deck).is_empty());
        assert_eq!(positions(&deck), vec![0, 1, 2]);
    }

    #[test]
    fn cancel_mid_drag_resets_without_outcome() {
        let mut deck = deck(5, 3);
        deck.pointer(&PointerEvent::down(Point::new(200.0, 300.0), 0));
        deck.pointer(&PointerEvent::moved(Point::new(300.0, 300.0), 10));
        assert!(deck.pointer(&PointerEvent::cancel(20)));
        assert_eq!(deck.gesture_state(), Some(GestureState::Idle));
        deck.tick(1_000);
        assert!(outcomes(&mut deck).is_empty());
        assert_eq!(deck.front_transform(), rest(&deck));
    }

    #[test]
    fn window_of_one_attaches_replacement() {
        let mut deck = deck(3, 1);
        deck.swipe_front(FlingDirection::Left, 0);
        deck.tick(EXIT);
        assert_eq!(outcomes(&mut deck), vec![DeckEvent::SwipedLeft(0)]);
        assert_eq!(positions(&deck), vec![1]);
        assert!(deck.is_interactive());
    }

    #[test]
    fn placements_stack_back_to_front() {
        let deck = deck(5, 3);
        let placements: Vec<_> = deck.placements().collect();
        let summary: Vec<_> = placements
            .iter()
            .map(|p| (p.position, p.rect.y0, p.z))
            .collect();
        assert_eq!(
            summary,
            vec![(2, 50.0, 0.0), (1, 35.0, 10.0), (0, 20.0, 20.0)]
        );
        assert_eq!(placements[2].rect.size(), Size::new(360.0, 560.0));
        assert_eq!(*placements[0].card, 2);
    }

    #[test]
    fn empty_source_lays_out_nothing() {
        let mut deck = deck(0, 3);
        assert_eq!(deck.placements().count(), 0);
        assert!(!deck.is_interactive());
        deck.layout(viewport());
        assert_eq!(deck.drain_events().count(), 0);
    }

    #[test]
    fn appended_items_revive_a_depleted_deck() {
        let mut deck = deck(1, 3);
        deck.swipe_front(FlingDirection::Right, 0);
        deck.tick(EXIT);
        assert_eq!(
            outcomes(&mut deck),
            vec![DeckEvent::SwipedRight(0), DeckEvent::Depleted]
        );

        deck.source_mut().extend([1, 2]);
        deck.on_source_change(SourceChange::Changed);
        assert!(deck.is_interactive());
        assert_eq!(positions(&deck), vec![1, 2]);

        deck.swipe_front(FlingDirection::Right, 1_000);
        deck.tick(1_000 + EXIT);
        deck.swipe_front(FlingDirection::Right, 2_000);
        deck.tick(2_000 + EXIT);
        assert_eq!(
            outcomes(&mut deck),
            vec![
                DeckEvent::SwipedRight(1),
                DeckEvent::SwipedRight(2),
                DeckEvent::Depleted
            ]
        );
    }

    #[test]
    fn invalidate_waits_for_layout() {
        let mut deck = deck(5, 3);
        deck.on_source_change(SourceChange::Invalidated);
        assert!(deck.stack().is_empty());
        assert!(!deck.is_interactive());
        deck.layout(viewport());
        assert_eq!(positions(&deck), vec![0, 1, 2]);
        assert!(deck.is_interactive());
    }

    #[test]
    fn set_position_and_attach_source() {
        let mut deck = deck(6, 3);
        deck.set_position(4).unwrap();
        assert_eq!(positions(&deck), vec![4, 5]);
        assert!(deck.set_position(6).is_err());

        let previous = deck.attach_source(vec![10, 11]);
        assert_eq!(previous.len(), 6);
        assert_eq!(positions(&deck), vec![0, 1]);
        let at = Point::new(200.0, 300.0);
        deck.pointer(&PointerEvent::down(at, 0));
        deck.pointer(&PointerEvent::up(at, 10));
        assert_eq!(outcomes(&mut deck), vec![DeckEvent::Clicked(0)]);
    }
}

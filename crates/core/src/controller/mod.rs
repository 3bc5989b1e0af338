//! Collage state machine.
//!
//! Input and renderer notifications arrive as [`CollageEvent`]s. Every
//! delayed phase of a shuffle is scheduled as a timer message on the
//! controller's own virtual clock and handled when [`CollageController::advance`]
//! reaches it, so a whole sequence can be replayed deterministically.

use serde::{Deserialize, Serialize};

use crate::{
    gallery::Gallery,
    gesture::{InputEvent, ShuffleDirection, SwipeDetector},
    registry::{CardRegistry, Slot},
    render::{CardProps, Frame},
    shuffle::{self, canonical_layout, AnimationState, AnimationStates, CardId, Cards},
    timeline::{PlaybackClock, Scheduler},
    variants, AppConfig, CollageConfig, CollageError, Result,
};

/// Events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CollageEvent {
    EnterViewport,
    EntranceAnimationComplete { card: CardId },
    ForwardShuffleRequested,
    BackwardShuffleRequested,
    FlyAnimationComplete { card: CardId, state: AnimationState },
}

impl CollageEvent {
    /// Builds the notification matching an animation the renderer finished.
    pub fn animation_complete(card: CardId, state: AnimationState) -> Option<Self> {
        match state {
            AnimationState::Onscreen => Some(Self::EntranceAnimationComplete { card }),
            AnimationState::FlyLeft | AnimationState::FlyRight => {
                Some(Self::FlyAnimationComplete { card, state })
            }
            AnimationState::Offscreen | AnimationState::MoveToPosition => None,
        }
    }
}

impl From<ShuffleDirection> for CollageEvent {
    fn from(direction: ShuffleDirection) -> Self {
        match direction {
            ShuffleDirection::Forward => Self::ForwardShuffleRequested,
            ShuffleDirection::Backward => Self::BackwardShuffleRequested,
        }
    }
}

/// Whether an event changed the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
enum TimerMessage {
    CommitOrder(Cards),
    AdvancePhotoAndUnlock(CardId),
    SettleEnteringCard(CardId),
    CommitOrderAndUnlock(Cards),
}

/// Owns the collage state and drives every transition.
#[derive(Debug)]
pub struct CollageController {
    config: CollageConfig,
    registry: CardRegistry,
    gallery: Gallery,
    swipe: SwipeDetector,
    clock: PlaybackClock,
    scheduler: Scheduler<TimerMessage>,
    cards: Cards,
    animation_states: AnimationStates,
    has_entered_viewport: bool,
    has_completed_entrance: bool,
    input_locked: bool,
}

impl CollageController {
    /// Creates the controller with every card off screen in the canonical
    /// layout.
    pub fn mount(app: &AppConfig) -> Result<Self> {
        Self::with_parts(app.collage.clone(), Gallery::new(app.photos.clone())?)
    }

    pub fn with_parts(config: CollageConfig, gallery: Gallery) -> Result<Self> {
        config.validate()?;
        if config.photo_advance_stride > gallery.len() {
            return Err(CollageError::Config(format!(
                "photo_advance_stride ({}) cannot exceed the gallery size ({})",
                config.photo_advance_stride,
                gallery.len()
            )));
        }
        if config.photo_advance_stride.checked_mul(2) != Some(gallery.len()) {
            tracing::warn!(
                stride = config.photo_advance_stride,
                gallery = gallery.len(),
                "photo advance stride is not half the gallery size; photos will not follow on in order"
            );
        }

        let mut cards = canonical_layout();
        for card in &mut cards {
            card.photo_index = gallery.wrap(card.photo_index as i64);
        }

        tracing::debug!(gallery = gallery.len(), "mounted collage");

        Ok(Self {
            registry: CardRegistry::new(&config),
            swipe: SwipeDetector::new(config.swipe_threshold),
            config,
            gallery,
            clock: PlaybackClock::default(),
            scheduler: Scheduler::new(),
            cards,
            animation_states: AnimationStates::uniform(AnimationState::Offscreen),
            has_entered_viewport: false,
            has_completed_entrance: false,
            input_locked: false,
        })
    }

    /// Tears the controller down. Nothing outlives it.
    pub fn unmount(self) {
        tracing::debug!(pending = self.scheduler.len(), "unmounted collage");
    }

    pub fn cards(&self) -> &Cards {
        &self.cards
    }

    pub fn animation_states(&self) -> &AnimationStates {
        &self.animation_states
    }

    pub fn has_completed_entrance(&self) -> bool {
        self.has_completed_entrance
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms
    }

    /// Time of the next scheduled phase, if a sequence is in flight.
    pub fn next_due(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    pub fn front_card(&self) -> Result<&shuffle::Card> {
        shuffle::card_in(&self.cards, Slot::Front)
    }

    /// Feeds a raw button or touch event through the input adapters.
    pub fn handle_input(&mut self, input: InputEvent) -> Result<Outcome> {
        match self.swipe.handle(input) {
            Some(direction) => self.handle(direction.into()),
            None => Ok(Outcome::Ignored),
        }
    }

    pub fn handle(&mut self, event: CollageEvent) -> Result<Outcome> {
        match event {
            CollageEvent::EnterViewport => Ok(self.enter_viewport()),
            CollageEvent::EntranceAnimationComplete { card } => Ok(self.entrance_complete(card)),
            CollageEvent::ForwardShuffleRequested => self.shuffle_forward(),
            CollageEvent::BackwardShuffleRequested => self.shuffle_backward(),
            CollageEvent::FlyAnimationComplete { card, state } => {
                Ok(self.fly_complete(card, state))
            }
        }
    }

    /// Moves the clock forward and runs every phase that falls due, in order.
    /// Returns how many phases ran.
    pub fn advance(&mut self, delta_ms: u64) -> usize {
        self.clock.advance(delta_ms);
        let mut fired = 0;
        while let Some(event) = self.scheduler.pop_due(self.clock.now_ms) {
            self.on_timer(event.message);
            fired += 1;
        }
        fired
    }

    /// Advances just far enough to drain every scheduled phase.
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.scheduler.next_due() {
            fired += self.advance(due.saturating_sub(self.clock.now_ms));
        }
        fired
    }

    /// Derives the render props for every card, bottom of the stack first.
    pub fn frame(&self) -> Frame {
        let mut cards: Vec<CardProps> = self
            .cards
            .iter()
            .map(|card| {
                let state = self.animation_states[card.id];
                CardProps {
                    id: card.id,
                    slot: card.slot,
                    state,
                    photo_index: card.photo_index,
                    photo: self.gallery.photo(card.photo_index),
                    layout: variants::transform(
                        state,
                        self.registry.slot_config(card.slot),
                        card.z_index,
                        &self.config,
                    ),
                }
            })
            .collect();
        cards.sort_by_key(|props| props.layout.z_index);

        Frame {
            time_ms: self.clock.now_ms,
            background_color: self.config.background_color.clone(),
            cards,
        }
    }

    fn enter_viewport(&mut self) -> Outcome {
        if self.has_entered_viewport {
            return Outcome::Ignored;
        }
        self.has_entered_viewport = true;
        self.animation_states = AnimationStates::uniform(AnimationState::Onscreen);
        tracing::debug!("entering viewport, starting entrance reveal");
        Outcome::Applied
    }

    fn entrance_complete(&mut self, card: CardId) -> Outcome {
        if self.has_completed_entrance || self.animation_states[card] != AnimationState::Onscreen {
            return Outcome::Ignored;
        }
        let is_top = self
            .cards
            .iter()
            .max_by_key(|candidate| candidate.z_index)
            .is_some_and(|top| top.id == card);
        if !is_top {
            return Outcome::Ignored;
        }

        self.has_completed_entrance = true;
        self.animation_states = AnimationStates::uniform(AnimationState::MoveToPosition);
        tracing::debug!(?card, "entrance complete");
        Outcome::Applied
    }

    fn fly_complete(&mut self, card: CardId, state: AnimationState) -> Outcome {
        let is_fly = matches!(state, AnimationState::FlyLeft | AnimationState::FlyRight);
        if !is_fly || self.animation_states[card] != state {
            return Outcome::Ignored;
        }
        self.animation_states[card] = AnimationState::MoveToPosition;
        Outcome::Applied
    }

    /// Takes the input lock if a shuffle may start now.
    fn try_lock(&mut self, direction: ShuffleDirection) -> bool {
        if !self.has_completed_entrance || self.input_locked {
            tracing::trace!(
                ?direction,
                locked = self.input_locked,
                "dropping shuffle request"
            );
            return false;
        }
        self.input_locked = true;
        true
    }

    fn shuffle_forward(&mut self) -> Result<Outcome> {
        if !self.try_lock(ShuffleDirection::Forward) {
            return Ok(Outcome::Ignored);
        }

        let shuffle = match shuffle::forward_shuffle(&self.cards) {
            Ok(shuffle) => shuffle,
            Err(err) => {
                self.input_locked = false;
                return Err(err);
            }
        };
        let now = self.clock.now_ms;
        self.cards = shuffle.old_order;
        self.animation_states = shuffle.animation_states;

        self.scheduler.schedule(
            now.saturating_add(self.config.shuffle_delay_ms),
            TimerMessage::CommitOrder(shuffle.new_order),
        );
        self.scheduler.schedule(
            now.saturating_add(self.config.forward_lock_ms()),
            TimerMessage::AdvancePhotoAndUnlock(shuffle.flying_card),
        );

        tracing::debug!(card = ?shuffle.flying_card, "forward shuffle started");
        Ok(Outcome::Applied)
    }

    fn shuffle_backward(&mut self) -> Result<Outcome> {
        if !self.try_lock(ShuffleDirection::Backward) {
            return Ok(Outcome::Ignored);
        }

        // The front photo is only known before the slots rotate.
        let prepared = self.prepare_entering_photo();
        let shuffle = match prepared.and_then(|cards| shuffle::backward_shuffle(&cards)) {
            Ok(shuffle) => shuffle,
            Err(err) => {
                self.input_locked = false;
                return Err(err);
            }
        };
        let now = self.clock.now_ms;
        self.cards = shuffle.old_order;
        self.animation_states = shuffle.animation_states;

        self.scheduler.schedule(
            now.saturating_add(self.config.backward_visual_delay_ms),
            TimerMessage::SettleEnteringCard(shuffle.entering_card),
        );
        self.scheduler.schedule(
            now.saturating_add(self.config.backward_lock_ms()),
            TimerMessage::CommitOrderAndUnlock(shuffle.new_order),
        );

        tracing::debug!(card = ?shuffle.entering_card, "backward shuffle started");
        Ok(Outcome::Applied)
    }

    /// Returns the cards with the center-back card showing the photo just
    /// before the current front photo.
    fn prepare_entering_photo(&self) -> Result<Cards> {
        let front = shuffle::card_in(&self.cards, Slot::Front)?.photo_index;
        let entering = shuffle::card_in(&self.cards, Slot::CenterBack)?.id;

        let mut cards = self.cards;
        cards[entering.index()].photo_index = self.gallery.wrap(front as i64 - 1);
        Ok(cards)
    }

    fn on_timer(&mut self, message: TimerMessage) {
        match message {
            TimerMessage::CommitOrder(cards) => {
                self.commit_order(cards);
            }
            TimerMessage::AdvancePhotoAndUnlock(id) => {
                let len = self.gallery.len();
                let stride = self.config.photo_advance_stride % len;
                let card = &mut self.cards[id.index()];
                card.photo_index = (card.photo_index % len + stride) % len;
                // The renderer normally reports FlyLeft done well before this.
                if self.animation_states[id] == AnimationState::FlyLeft {
                    self.animation_states[id] = AnimationState::MoveToPosition;
                }
                self.unlock();
            }
            TimerMessage::SettleEnteringCard(id) => {
                if self.animation_states[id] == AnimationState::FlyRight {
                    self.animation_states[id] = AnimationState::MoveToPosition;
                }
            }
            TimerMessage::CommitOrderAndUnlock(cards) => {
                self.commit_order(cards);
                self.unlock();
            }
        }
    }

    fn commit_order(&mut self, cards: Cards) {
        // Only photo indices may change while a shuffle holds the lock.
        let mut cards = cards;
        for (next, current) in cards.iter_mut().zip(self.cards.iter()) {
            next.photo_index = current.photo_index;
        }
        self.cards = cards;
        tracing::debug!(at = self.clock.now_ms, "committed new z-order");
    }

    fn unlock(&mut self) {
        self.input_locked = false;
        tracing::debug!(at = self.clock.now_ms, "input unlocked");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{config::MAX_DELAY_MS, shuffle::validate_layout};

    fn mounted() -> CollageController {
        CollageController::mount(&AppConfig::default()).unwrap()
    }

    fn entered() -> CollageController {
        let mut controller = mounted();
        controller.handle(CollageEvent::EnterViewport).unwrap();
        controller
            .handle(CollageEvent::EntranceAnimationComplete { card: CardId::One })
            .unwrap();
        controller
    }

    fn slots(controller: &CollageController) -> [Slot; 6] {
        controller.cards().map(|card| card.slot)
    }

    fn assert_bijection(controller: &CollageController) {
        validate_layout(controller.cards()).unwrap();
        let ranks: HashSet<u8> = controller.cards().iter().map(|c| c.z_index).collect();
        assert_eq!(ranks, (1..=6).collect());
    }

    #[test]
    fn mounts_offscreen_in_canonical_layout() {
        let controller = mounted();
        assert!(controller.animation_states().all(AnimationState::Offscreen));
        assert!(!controller.has_completed_entrance());
        assert!(!controller.is_input_locked());
        assert_eq!(controller.cards(), &canonical_layout());
    }

    #[test]
    fn entrance_requires_viewport_and_top_card() {
        let mut controller = mounted();

        let early = controller
            .handle(CollageEvent::EntranceAnimationComplete { card: CardId::One })
            .unwrap();
        assert_eq!(early, Outcome::Ignored);
        assert!(!controller.has_completed_entrance());

        controller.handle(CollageEvent::EnterViewport).unwrap();
        assert!(controller.animation_states().all(AnimationState::Onscreen));

        for card in &CardId::ALL[1..] {
            controller
                .handle(CollageEvent::EntranceAnimationComplete { card: *card })
                .unwrap();
            assert!(!controller.has_completed_entrance());
        }

        controller
            .handle(CollageEvent::EntranceAnimationComplete { card: CardId::One })
            .unwrap();
        assert!(controller.has_completed_entrance());
        assert!(controller.animation_states().all(AnimationState::MoveToPosition));

        let again = controller
            .handle(CollageEvent::EntranceAnimationComplete { card: CardId::One })
            .unwrap();
        assert_eq!(again, Outcome::Ignored);
        assert_eq!(
            controller.handle(CollageEvent::EnterViewport).unwrap(),
            Outcome::Ignored
        );
    }

    #[test]
    fn shuffles_are_dropped_before_entrance() {
        let mut controller = mounted();
        let outcome = controller
            .handle(CollageEvent::ForwardShuffleRequested)
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert!(!controller.is_input_locked());
        assert_eq!(controller.cards(), &canonical_layout());
    }

    #[test]
    fn forward_shuffle_runs_two_phase_commit() {
        let mut controller = entered();
        controller
            .handle(CollageEvent::ForwardShuffleRequested)
            .unwrap();

        assert!(controller.is_input_locked());
        assert_eq!(
            controller.animation_states()[CardId::One],
            AnimationState::FlyLeft
        );
        let flying = controller.cards()[CardId::One.index()];
        assert_eq!(flying.slot, Slot::CenterBack);
        assert_eq!(flying.z_index, 6);
        assert_bijection(&controller);

        controller.advance(599);
        assert_eq!(controller.cards()[CardId::One.index()].z_index, 6);

        controller.advance(1);
        assert_eq!(controller.cards()[CardId::One.index()].z_index, 1);
        assert_eq!(controller.front_card().unwrap().id, CardId::Two);
        assert!(controller.is_input_locked());
        assert_eq!(controller.cards()[CardId::One.index()].photo_index, 0);

        controller.advance(100);
        assert!(!controller.is_input_locked());
        assert_eq!(controller.cards()[CardId::One.index()].photo_index, 6);
        assert_bijection(&controller);
    }

    #[test]
    fn fly_left_completion_returns_card_to_idle() {
        let mut controller = entered();
        controller
            .handle(CollageEvent::ForwardShuffleRequested)
            .unwrap();

        let stale = controller
            .handle(CollageEvent::FlyAnimationComplete {
                card: CardId::One,
                state: AnimationState::FlyRight,
            })
            .unwrap();
        assert_eq!(stale, Outcome::Ignored);

        controller
            .handle(CollageEvent::FlyAnimationComplete {
                card: CardId::One,
                state: AnimationState::FlyLeft,
            })
            .unwrap();
        assert!(controller.animation_states().all(AnimationState::MoveToPosition));
    }

    #[test]
    fn requests_inside_the_lock_window_are_dropped() {
        let mut controller = entered();
        controller
            .handle(CollageEvent::ForwardShuffleRequested)
            .unwrap();
        let during = *controller.cards();

        controller.advance(650);
        let snapshot = *controller.cards();
        for event in [
            CollageEvent::ForwardShuffleRequested,
            CollageEvent::BackwardShuffleRequested,
        ] {
            assert_eq!(controller.handle(event).unwrap(), Outcome::Ignored);
        }
        assert_eq!(
            controller.handle_input(InputEvent::NextButton).unwrap(),
            Outcome::Ignored
        );
        controller
            .handle_input(InputEvent::TouchStart { x: 300.0, y: 0.0 })
            .unwrap();
        assert_eq!(
            controller
                .handle_input(InputEvent::TouchEnd { x: 100.0, y: 0.0 })
                .unwrap(),
            Outcome::Ignored
        );
        assert_eq!(controller.cards(), &snapshot);
        assert_ne!(controller.cards(), &during);

        controller.advance(50);
        assert!(!controller.is_input_locked());
        assert_eq!(
            controller.handle_input(InputEvent::PreviousButton).unwrap(),
            Outcome::Applied
        );
    }

    #[test]
    fn requests_inside_a_backward_lock_are_dropped() {
        let mut controller = entered();
        controller
            .handle(CollageEvent::BackwardShuffleRequested)
            .unwrap();
        assert_eq!(controller.next_due(), Some(300));

        controller.advance(450);
        assert_eq!(controller.now_ms(), 450);
        assert_eq!(
            controller.animation_states()[CardId::Six],
            AnimationState::MoveToPosition
        );
        let snapshot = *controller.cards();
        let states = *controller.animation_states();

        for input in [InputEvent::NextButton, InputEvent::PreviousButton] {
            assert_eq!(controller.handle_input(input).unwrap(), Outcome::Ignored);
        }
        controller
            .handle_input(InputEvent::TouchStart { x: 300.0, y: 0.0 })
            .unwrap();
        assert_eq!(
            controller
                .handle_input(InputEvent::TouchEnd { x: 100.0, y: 0.0 })
                .unwrap(),
            Outcome::Ignored
        );
        assert_eq!(controller.cards(), &snapshot);
        assert_eq!(controller.animation_states(), &states);
        assert!(controller.is_input_locked());

        controller.advance(149);
        assert!(controller.is_input_locked());
        controller.advance(1);
        assert_eq!(controller.now_ms(), 600);
        assert!(!controller.is_input_locked());
        assert_eq!(controller.next_due(), None);
    }

    #[test]
    fn unreported_fly_left_settles_when_lock_releases() {
        let mut controller = entered();
        controller
            .handle(CollageEvent::ForwardShuffleRequested)
            .unwrap();

        controller.advance(699);
        assert_eq!(
            controller.animation_states()[CardId::One],
            AnimationState::FlyLeft
        );
        controller.advance(1);
        assert!(controller.animation_states().all(AnimationState::MoveToPosition));
    }

    #[test]
    fn stride_larger_than_gallery_is_rejected() {
        let config = CollageConfig {
            photo_advance_stride: usize::MAX,
            ..CollageConfig::default()
        };
        let err = CollageController::with_parts(config, Gallery::default()).unwrap_err();
        assert!(matches!(err, CollageError::Config(_)));

        let config = CollageConfig {
            photo_advance_stride: 13,
            ..CollageConfig::default()
        };
        assert!(CollageController::with_parts(config, Gallery::default()).is_err());
    }

    #[test]
    fn stride_equal_to_gallery_keeps_photos_in_range() {
        let config = CollageConfig {
            photo_advance_stride: 12,
            ..CollageConfig::default()
        };
        let mut controller = CollageController::with_parts(config, Gallery::default()).unwrap();
        controller.handle(CollageEvent::EnterViewport).unwrap();
        controller
            .handle(CollageEvent::EntranceAnimationComplete { card: CardId::One })
            .unwrap();
        controller
            .handle(CollageEvent::ForwardShuffleRequested)
            .unwrap();
        controller.settle();
        assert_eq!(controller.cards()[CardId::One.index()].photo_index, 0);
    }

    #[test]
    fn longest_delays_schedule_without_overflow() {
        let config = CollageConfig {
            shuffle_delay_ms: MAX_DELAY_MS,
            backward_visual_delay_ms: MAX_DELAY_MS,
            photo_advance_offset_ms: MAX_DELAY_MS,
            ..CollageConfig::default()
        };
        let mut controller = CollageController::with_parts(config, Gallery::default()).unwrap();
        controller.handle(CollageEvent::EnterViewport).unwrap();
        controller
            .handle(CollageEvent::EntranceAnimationComplete { card: CardId::One })
            .unwrap();
        controller.advance(u64::MAX - 10);

        controller
            .handle(CollageEvent::ForwardShuffleRequested)
            .unwrap();
        assert_eq!(controller.next_due(), Some(u64::MAX));
        controller.settle();
        assert!(!controller.is_input_locked());
    }

    #[test]
    fn backward_shuffle_uses_independent_timings() {
        let mut controller = entered();
        controller
            .handle(CollageEvent::BackwardShuffleRequested)
            .unwrap();

        let entering = controller.cards()[CardId::Six.index()];
        assert_eq!(entering.slot, Slot::Front);
        assert_eq!(entering.z_index, 1);
        assert_eq!(entering.photo_index, 11);
        assert_eq!(
            controller.animation_states()[CardId::Six],
            AnimationState::FlyRight
        );

        controller.advance(300);
        assert_eq!(
            controller.animation_states()[CardId::Six],
            AnimationState::MoveToPosition
        );
        assert!(controller.is_input_locked());
        assert_eq!(controller.cards()[CardId::Six.index()].z_index, 1);

        controller.advance(300);
        assert!(!controller.is_input_locked());
        assert_eq!(controller.cards()[CardId::Six.index()].z_index, 6);
        assert_eq!(controller.front_card().unwrap().photo_index, 11);
        assert_bijection(&controller);
    }

    #[test]
    fn swipe_left_then_right_restores_layout() {
        let mut controller = entered();
        let start = slots(&controller);

        controller
            .handle_input(InputEvent::TouchStart { x: 400.0, y: 200.0 })
            .unwrap();
        controller
            .handle_input(InputEvent::TouchEnd { x: 300.0, y: 210.0 })
            .unwrap();
        controller.settle();
        assert_ne!(slots(&controller), start);

        controller
            .handle_input(InputEvent::TouchStart { x: 100.0, y: 200.0 })
            .unwrap();
        controller
            .handle_input(InputEvent::TouchEnd { x: 220.0, y: 190.0 })
            .unwrap();
        controller.settle();
        assert_eq!(slots(&controller), start);
    }

    #[test]
    fn full_scenario() {
        let mut controller = mounted();
        controller.handle(CollageEvent::EnterViewport).unwrap();
        for event in controller.frame().completions() {
            controller.handle(event).unwrap();
        }
        assert!(controller.has_completed_entrance());
        assert!(controller.animation_states().all(AnimationState::MoveToPosition));

        let before = *controller.cards();
        controller
            .handle(CollageEvent::ForwardShuffleRequested)
            .unwrap();
        for event in controller.frame().completions() {
            controller.handle(event).unwrap();
        }
        controller.settle();

        for (prev, next) in before.iter().zip(controller.cards().iter()) {
            assert_eq!(next.slot, prev.slot.next());
        }
        let flown = controller.cards()[CardId::One.index()];
        assert_eq!(flown.slot, Slot::CenterBack);
        assert_eq!(flown.photo_index, 6);
        assert_eq!(controller.front_card().unwrap().photo_index, 1);

        controller
            .handle(CollageEvent::BackwardShuffleRequested)
            .unwrap();
        controller.settle();

        assert_eq!(slots(&controller), before.map(|card| card.slot));
        assert_eq!(controller.front_card().unwrap().id, CardId::One);
        assert_eq!(controller.front_card().unwrap().photo_index, 0);
        assert_bijection(&controller);
        assert!(!controller.is_input_locked());
    }

    #[test]
    fn front_photo_advances_by_one_per_forward_shuffle() {
        let mut controller = entered();
        for expected in 1..=14 {
            controller
                .handle(CollageEvent::ForwardShuffleRequested)
                .unwrap();
            controller.settle();
            assert_eq!(
                controller.front_card().unwrap().photo_index,
                expected % 12
            );
            assert_bijection(&controller);
        }
    }
}

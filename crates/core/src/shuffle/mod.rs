//! Card model and the pure slot-rotation operations behind a shuffle.
//!
//! Both directions produce two versions of the rotated card list. The *old
//! order* already carries the new slots but keeps every card's previous
//! z-index, so the card crossing the stack keeps rendering on its old layer
//! while it flies. The *new order* is the steady state, where each card's
//! z-index matches the rank of its slot. Callers commit the old order
//! immediately and the new order after a delay.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{registry::Slot, CollageError, Result};

/// Identifier of one of the six cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardId {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl CardId {
    pub const ALL: [CardId; 6] = [
        CardId::One,
        CardId::Two,
        CardId::Three,
        CardId::Four,
        CardId::Five,
        CardId::Six,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Per-card animation variant the renderer should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    Offscreen,
    Onscreen,
    /// Idle/steady state. Slot changes animate through this variant.
    MoveToPosition,
    FlyLeft,
    FlyRight,
}

/// One animation state per card, indexed by [`CardId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationStates([AnimationState; 6]);

impl AnimationStates {
    pub fn uniform(state: AnimationState) -> Self {
        Self([state; 6])
    }

    pub fn all(&self, state: AnimationState) -> bool {
        self.0.iter().all(|current| *current == state)
    }
}

impl Index<CardId> for AnimationStates {
    type Output = AnimationState;

    fn index(&self, id: CardId) -> &Self::Output {
        &self.0[id.index()]
    }
}

impl IndexMut<CardId> for AnimationStates {
    fn index_mut(&mut self, id: CardId) -> &mut Self::Output {
        &mut self.0[id.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub slot: Slot,
    pub z_index: u8,
    pub photo_index: usize,
}

/// The six cards, stored in [`CardId`] order.
pub type Cards = [Card; 6];

/// Layout at mount: the cards fill the slots from the top of the stack down
/// and show consecutive photos starting at the front.
pub fn canonical_layout() -> Cards {
    CardId::ALL.map(|id| {
        let slot = Slot::ALL[id.index()];
        Card {
            id,
            slot,
            z_index: slot.rank(),
            photo_index: id.index(),
        }
    })
}

/// Checks that the six cards sit in id order on six distinct slots with six
/// distinct z-indices in `1..=6`.
pub fn validate_layout(cards: &Cards) -> Result<()> {
    let mut slots_taken = [false; 6];
    let mut ranks_taken = [false; 6];

    for (expected, card) in CardId::ALL.iter().zip(cards.iter()) {
        if card.id != *expected {
            return Err(CollageError::InvalidLayout(format!(
                "expected {expected:?} at position {}, found {:?}",
                expected.index(),
                card.id
            )));
        }

        if std::mem::replace(&mut slots_taken[card.slot.index()], true) {
            return Err(CollageError::InvalidLayout(format!(
                "slot {:?} is occupied twice",
                card.slot
            )));
        }

        if !(1..=6).contains(&card.z_index) {
            return Err(CollageError::InvalidLayout(format!(
                "{:?} has z-index {} outside 1..=6",
                card.id, card.z_index
            )));
        }
        if std::mem::replace(&mut ranks_taken[usize::from(card.z_index - 1)], true) {
            return Err(CollageError::InvalidLayout(format!(
                "z-index {} is used twice",
                card.z_index
            )));
        }
    }

    Ok(())
}

/// Returns the card sitting in `slot`.
pub fn card_in(cards: &Cards, slot: Slot) -> Result<&Card> {
    cards
        .iter()
        .find(|card| card.slot == slot)
        .ok_or_else(|| CollageError::InvalidLayout(format!("no card in slot {slot:?}")))
}

/// Outcome of a forward shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardShuffle {
    pub old_order: Cards,
    pub new_order: Cards,
    pub animation_states: AnimationStates,
    /// The former front card. It flies off to the left and re-enters at the
    /// back, after which its photo index should be advanced.
    pub flying_card: CardId,
}

/// Outcome of a backward shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackwardShuffle {
    pub old_order: Cards,
    pub new_order: Cards,
    pub animation_states: AnimationStates,
    /// The former center-back card, flying in from the right to the front.
    pub entering_card: CardId,
}

/// Rotates every card one slot forward. The front card flies off left.
pub fn forward_shuffle(cards: &Cards) -> Result<ForwardShuffle> {
    validate_layout(cards)?;
    let flying_card = card_in(cards, Slot::Front)?.id;

    let (old_order, new_order) = rotate(cards, Slot::next);
    let mut animation_states = AnimationStates::uniform(AnimationState::MoveToPosition);
    animation_states[flying_card] = AnimationState::FlyLeft;

    Ok(ForwardShuffle {
        old_order,
        new_order,
        animation_states,
        flying_card,
    })
}

/// Rotates every card one slot backward. The center-back card flies in from
/// the right to take the front slot.
///
/// The caller must set the center-back card's photo index before calling
/// this, while the front card is still the one in [`Slot::Front`].
pub fn backward_shuffle(cards: &Cards) -> Result<BackwardShuffle> {
    validate_layout(cards)?;
    let entering_card = card_in(cards, Slot::CenterBack)?.id;

    let (old_order, new_order) = rotate(cards, Slot::prev);
    let mut animation_states = AnimationStates::uniform(AnimationState::MoveToPosition);
    animation_states[entering_card] = AnimationState::FlyRight;

    Ok(BackwardShuffle {
        old_order,
        new_order,
        animation_states,
        entering_card,
    })
}

fn rotate(cards: &Cards, step: fn(Slot) -> Slot) -> (Cards, Cards) {
    let old_order = cards.map(|card| Card {
        slot: step(card.slot),
        ..card
    });
    let new_order = old_order.map(|card| Card {
        z_index: card.slot.rank(),
        ..card
    });
    (old_order, new_order)
}

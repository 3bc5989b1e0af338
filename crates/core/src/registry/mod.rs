//! The six fixed visual slots a card can occupy and their layout.

use serde::{Deserialize, Serialize};

use crate::CollageConfig;

/// One of the six fixed visual positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Front,
    Right1,
    Left1,
    Right2,
    Left2,
    /// Directly behind the front card, at the bottom of the stack.
    CenterBack,
}

impl Slot {
    /// Slots ordered from the top of the stack down.
    pub const ALL: [Slot; 6] = [
        Slot::Front,
        Slot::Right1,
        Slot::Left1,
        Slot::Right2,
        Slot::Left2,
        Slot::CenterBack,
    ];

    /// Stacking rank in `1..=6`; the front slot is on top.
    pub fn rank(self) -> u8 {
        match self {
            Slot::Front => 6,
            Slot::Right1 => 5,
            Slot::Left1 => 4,
            Slot::Right2 => 3,
            Slot::Left2 => 2,
            Slot::CenterBack => 1,
        }
    }

    /// Slot a card moves to on a forward shuffle. Every card climbs one rank
    /// and the front card drops to the back.
    pub fn next(self) -> Slot {
        match self {
            Slot::CenterBack => Slot::Left2,
            Slot::Left2 => Slot::Right2,
            Slot::Right2 => Slot::Left1,
            Slot::Left1 => Slot::Right1,
            Slot::Right1 => Slot::Front,
            Slot::Front => Slot::CenterBack,
        }
    }

    /// Inverse of [`Slot::next`].
    pub fn prev(self) -> Slot {
        match self {
            Slot::Left2 => Slot::CenterBack,
            Slot::Right2 => Slot::Left2,
            Slot::Left1 => Slot::Right2,
            Slot::Right1 => Slot::Left1,
            Slot::Front => Slot::Right1,
            Slot::CenterBack => Slot::Front,
        }
    }

    pub(crate) fn index(self) -> usize {
        usize::from(6 - self.rank())
    }
}

/// Layout parameters for a slot, in percent of the collage width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub base_z_index: u8,
}

/// Immutable slot table built once from the configuration.
#[derive(Debug, Clone)]
pub struct CardRegistry {
    slots: [SlotConfig; 6],
}

impl CardRegistry {
    pub fn new(config: &CollageConfig) -> Self {
        let near = config.spread_percent;
        let far = config.distance_percent;
        let slots = Slot::ALL.map(|slot| {
            let (offset_x, offset_y, scale) = match slot {
                Slot::Front => (0.0, 0.0, 1.0),
                Slot::Right1 => (near, 2.0, 0.92),
                Slot::Left1 => (-near, 2.0, 0.92),
                Slot::Right2 => (far, 4.0, 0.84),
                Slot::Left2 => (-far, 4.0, 0.84),
                Slot::CenterBack => (0.0, -6.0, 0.78),
            };
            SlotConfig {
                offset_x,
                offset_y,
                scale,
                base_z_index: slot.rank(),
            }
        });
        Self { slots }
    }

    pub fn slot_config(&self, slot: Slot) -> &SlotConfig {
        &self.slots[slot.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &SlotConfig)> {
        Slot::ALL.into_iter().map(move |slot| (slot, self.slot_config(slot)))
    }
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::new(&CollageConfig::default())
    }
}

use serde::{Deserialize, Serialize};

use crate::{AnimationState, CollageConfig, SlotConfig};

/// Target layout for one card, handed to the rendering layer. Offsets are in
/// percent of the collage box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutTransform {
    pub x_percent: f32,
    pub y_percent: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: u8,
    /// Horizontal start point for cards that enter from off screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter_from_x_percent: Option<f32>,
    pub delay_ms: u64,
}

/// Maps an animation state and the card's slot to the layout the renderer
/// should animate towards.
pub fn transform(
    state: AnimationState,
    slot: &SlotConfig,
    z_index: u8,
    config: &CollageConfig,
) -> LayoutTransform {
    let settled = LayoutTransform {
        x_percent: slot.offset_x,
        y_percent: slot.offset_y,
        scale: slot.scale,
        opacity: 1.0,
        z_index,
        enter_from_x_percent: None,
        delay_ms: 0,
    };

    match state {
        AnimationState::Offscreen => LayoutTransform {
            y_percent: config.offscreen_percent,
            opacity: 0.0,
            ..settled
        },
        AnimationState::Onscreen => LayoutTransform {
            delay_ms: entrance_delay(z_index, config),
            ..settled
        },
        AnimationState::MoveToPosition => settled,
        AnimationState::FlyLeft => LayoutTransform {
            x_percent: -config.offscreen_percent,
            opacity: 0.0,
            ..settled
        },
        AnimationState::FlyRight => LayoutTransform {
            enter_from_x_percent: Some(config.offscreen_percent),
            ..settled
        },
    }
}

/// Stagger for the entrance reveal. Lower cards start first so the top card
/// is always the last to finish.
pub fn entrance_delay(z_index: u8, config: &CollageConfig) -> u64 {
    u64::from(z_index.saturating_sub(1)) * config.entrance_stagger_ms
}

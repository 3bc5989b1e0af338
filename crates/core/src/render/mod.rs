use serde::{Deserialize, Serialize};

use crate::{
    controller::CollageEvent, AnimationState, CardId, LayoutTransform, PhotoDatum, Result, Slot,
};

/// Everything the renderer needs to draw one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardProps {
    pub id: CardId,
    pub slot: Slot,
    pub state: AnimationState,
    pub photo_index: usize,
    pub photo: PhotoDatum,
    pub layout: LayoutTransform,
}

/// Snapshot of the collage, cards ordered bottom to top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub time_ms: u64,
    pub background_color: String,
    pub cards: Vec<CardProps>,
}

impl Frame {
    pub fn card(&self, id: CardId) -> Option<&CardProps> {
        self.cards.iter().find(|props| props.id == id)
    }

    /// Completion notifications a renderer would send once every animation
    /// in this frame has finished playing. Renderers are expected to send
    /// these; a forward shuffle only falls back to settling the flown card
    /// when its input lock releases.
    pub fn completions(&self) -> Vec<CollageEvent> {
        self.cards
            .iter()
            .filter_map(|props| CollageEvent::animation_complete(props.id, props.state))
            .collect()
    }
}

/// Rendering backend abstraction. The core never touches pixels; it hands
/// frames to whatever implements this.
pub trait RenderSink {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// Backend that keeps every presented frame, for hosts that inspect frames
/// after the fact instead of drawing them.
#[derive(Debug, Default)]
pub struct RenderGraph {
    frames: Vec<Frame>,
}

impl RenderGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl RenderSink for RenderGraph {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

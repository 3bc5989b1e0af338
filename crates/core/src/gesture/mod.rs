//! Input adapters: buttons and touch swipes both resolve to a shuffle
//! direction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleDirection {
    Forward,
    Backward,
}

/// Raw input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    NextButton,
    PreviousButton,
    TouchStart { x: f32, y: f32 },
    TouchEnd { x: f32, y: f32 },
}

/// Pairs touch-start and touch-end points into swipes.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: f32,
    start: Option<(f32, f32)>,
}

impl SwipeDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finishes a gesture. A leftward swipe maps to a forward shuffle and a
    /// rightward swipe to a backward one. Short or mostly vertical gestures,
    /// and ends without a matching start, yield nothing.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<ShuffleDirection> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;

        if dx.abs() <= self.threshold || dx.abs() <= dy.abs() {
            return None;
        }

        Some(if dx < 0.0 {
            ShuffleDirection::Forward
        } else {
            ShuffleDirection::Backward
        })
    }

    /// Routes any input event, returning the shuffle it asks for.
    pub fn handle(&mut self, event: InputEvent) -> Option<ShuffleDirection> {
        match event {
            InputEvent::NextButton => Some(ShuffleDirection::Forward),
            InputEvent::PreviousButton => Some(ShuffleDirection::Backward),
            InputEvent::TouchStart { x, y } => {
                self.touch_start(x, y);
                None
            }
            InputEvent::TouchEnd { x, y } => self.touch_end(x, y),
        }
    }
}

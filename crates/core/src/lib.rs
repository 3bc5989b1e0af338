//! Core library for the shuffling photo collage.
//!
//! The widget is six cards stacked across six fixed slots. A shuffle rotates
//! every card one slot while one card flies fully off or on screen. Each
//! module owns one piece: the slot table (`registry`), photo lookup
//! (`gallery`), the pure rotation step (`shuffle`), the per-state layout
//! table (`variants`), input adapters (`gesture`), the timer queue
//! (`timeline`) and the state machine that ties them together
//! (`controller`). Rendering stays outside the crate behind `render`.

pub mod config;
pub mod controller;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod registry;
pub mod render;
pub mod shuffle;
pub mod timeline;
pub mod variants;

pub use config::{AppConfig, CollageConfig};
pub use controller::{CollageController, CollageEvent, Outcome};
pub use error::{CollageError, Result};
pub use gallery::{Gallery, PhotoDatum};
pub use gesture::{InputEvent, ShuffleDirection, SwipeDetector};
pub use registry::{CardRegistry, Slot, SlotConfig};
pub use render::{CardProps, Frame, RenderGraph, RenderSink};
pub use shuffle::{
    backward_shuffle, forward_shuffle, AnimationState, AnimationStates, BackwardShuffle, Card,
    CardId, Cards, ForwardShuffle,
};
pub use timeline::{PlaybackClock, ScheduledEvent, Scheduler};
pub use variants::LayoutTransform;

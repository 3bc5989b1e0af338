use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{gallery::default_photos, CollageError, PhotoDatum, Result};

/// Upper bound for every delay tunable: one hour.
pub const MAX_DELAY_MS: u64 = 60 * 60 * 1_000;

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub collage: CollageConfig,
    pub photos: Vec<PhotoDatum>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            collage: CollageConfig::default(),
            photos: default_photos(),
        }
    }
}

impl AppConfig {
    /// Reads a JSON configuration file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.collage.validate()?;
        Ok(config)
    }
}

/// Tunables for the collage widget. Read-only once a controller is mounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollageConfig {
    /// Delay before a shuffle commits its final z-order.
    pub shuffle_delay_ms: u64,
    /// Delay before a card flying in from the right settles into its slot.
    pub backward_visual_delay_ms: u64,
    /// Extra time after `shuffle_delay_ms` before a forward shuffle advances
    /// the flown card's photo and releases the input lock.
    pub photo_advance_offset_ms: u64,
    /// How far the flown card's photo index jumps. Tuned for a 12 photo
    /// gallery with six cards.
    pub photo_advance_stride: usize,
    pub entrance_stagger_ms: u64,
    /// Minimum horizontal travel for a touch gesture to count as a swipe.
    pub swipe_threshold: f32,
    pub spread_percent: f32,
    pub distance_percent: f32,
    pub offscreen_percent: f32,
    pub background_color: String,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            shuffle_delay_ms: 600,
            backward_visual_delay_ms: 300,
            photo_advance_offset_ms: 100,
            photo_advance_stride: 6,
            entrance_stagger_ms: 120,
            swipe_threshold: 50.0,
            spread_percent: 18.0,
            distance_percent: 34.0,
            offscreen_percent: 160.0,
            background_color: "#f4efe6".to_string(),
        }
    }
}

impl CollageConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("shuffle_delay_ms", self.shuffle_delay_ms),
            ("backward_visual_delay_ms", self.backward_visual_delay_ms),
            ("photo_advance_offset_ms", self.photo_advance_offset_ms),
            ("entrance_stagger_ms", self.entrance_stagger_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(CollageError::Config(format!(
                    "{name} ({value}) exceeds the {MAX_DELAY_MS} ms limit"
                )));
            }
        }
        if self.shuffle_delay_ms == 0 {
            return Err(CollageError::Config(
                "shuffle_delay_ms must be greater than zero".into(),
            ));
        }
        if self.backward_visual_delay_ms > self.shuffle_delay_ms {
            return Err(CollageError::Config(format!(
                "backward_visual_delay_ms ({}) cannot exceed shuffle_delay_ms ({})",
                self.backward_visual_delay_ms, self.shuffle_delay_ms
            )));
        }
        if self.swipe_threshold.is_nan() || self.swipe_threshold <= 0.0 {
            return Err(CollageError::Config(
                "swipe_threshold must be positive".into(),
            ));
        }
        if self.photo_advance_stride == 0 {
            return Err(CollageError::Config(
                "photo_advance_stride must be at least one".into(),
            ));
        }
        Ok(())
    }

    /// Time a forward shuffle holds the input lock.
    pub fn forward_lock_ms(&self) -> u64 {
        self.shuffle_delay_ms.saturating_add(self.photo_advance_offset_ms)
    }

    /// Time a backward shuffle holds the input lock.
    pub fn backward_lock_ms(&self) -> u64 {
        self.shuffle_delay_ms
    }
}

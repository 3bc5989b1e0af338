use serde::{Deserialize, Serialize};

use crate::{CollageError, Result};

/// Display content for a single card face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoDatum {
    pub title: String,
    pub footer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl PhotoDatum {
    pub fn new(title: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            footer: footer.into(),
            image_path: None,
        }
    }

    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// Placeholder used for indices past the end of the gallery.
    fn synthesized(index: usize) -> Self {
        let number = index + 1;
        Self::new(format!("Photo {number}"), format!("No. {number:03}"))
    }
}

/// The fixed, ordered set of photos cards cycle through.
#[derive(Debug, Clone)]
pub struct Gallery {
    photos: Vec<PhotoDatum>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            photos: default_photos(),
        }
    }
}

impl Gallery {
    /// Builds a gallery from an ordered photo list. An empty list is rejected
    /// since indices are wrapped modulo the gallery size.
    pub fn new(photos: Vec<PhotoDatum>) -> Result<Self> {
        if photos.is_empty() {
            return Err(CollageError::Config(
                "gallery needs at least one photo".into(),
            ));
        }
        Ok(Self { photos })
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Returns the datum for `index`, synthesizing one when the index runs
    /// past the stored photos.
    pub fn photo_data(&self, index: i64) -> Result<PhotoDatum> {
        let index =
            usize::try_from(index).map_err(|_| CollageError::InvalidPhotoIndex(index))?;
        Ok(self.photo(index))
    }

    pub fn photo(&self, index: usize) -> PhotoDatum {
        self.photos
            .get(index)
            .cloned()
            .unwrap_or_else(|| PhotoDatum::synthesized(index))
    }

    /// Wraps any signed index onto `0..len`.
    pub fn wrap(&self, index: i64) -> usize {
        // len is non-zero and far below i64::MAX
        index.rem_euclid(self.photos.len() as i64) as usize
    }
}

pub(crate) fn default_photos() -> Vec<PhotoDatum> {
    const TITLES: [&str; 12] = [
        "Harbour at Dawn",
        "Salt Flats",
        "Orchard Gate",
        "Night Market",
        "Glasshouse",
        "Tidal Steps",
        "Lantern Row",
        "Quarry Lake",
        "North Platform",
        "Fern Gully",
        "Rooftop Wash",
        "Last Ferry",
    ];

    TITLES
        .iter()
        .enumerate()
        .map(|(index, title)| {
            let number = index + 1;
            PhotoDatum::new(*title, format!("No. {number:03}"))
                .with_image(format!("images/collage/{number:02}.jpg"))
        })
        .collect()
}

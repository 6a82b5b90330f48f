//! Status line and photo card shown next to the globe.

use crate::{collection::PhotoCollection, photo::Photo};

/// Status shown while the collection is empty
pub const EMPTY_STATUS: &str = "Waiting for the first travel photo…";

/// Text shown on a card for a photo without notes
pub const NO_NOTES: &str = "No notes";

/// Details of the photo under the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCard {
    /// Photo title
    pub title: String,
    /// Full capture time
    pub taken_at: String,
    /// `lat, lon` with four decimals
    pub location: String,
    /// Notes or a placeholder
    pub notes: String,
    /// Image reference to display
    pub image: String,
}

impl PhotoCard {
    fn from_photo(photo: &Photo) -> Self {
        let taken_at = photo.timestamp().map_or_else(
            || photo.time.to_string(),
            |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        );
        Self {
            title: photo.title.clone(),
            taken_at,
            location: format!("{:.4}, {:.4}", photo.lat, photo.lon),
            notes: photo.notes.clone().unwrap_or_else(|| NO_NOTES.to_string()),
            image: photo.file_ref.clone(),
        }
    }
}

/// Panel contents derived from the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    /// One-line timeline status
    pub status: String,
    /// Card for the current photo, hidden when there is none
    pub card: Option<PhotoCard>,
}

impl Default for InfoPanel {
    fn default() -> Self {
        Self {
            status: EMPTY_STATUS.to_string(),
            card: None,
        }
    }
}

impl InfoPanel {
    /// Build panel contents for the collection's current photo
    #[must_use]
    pub fn from_collection(collection: &PhotoCollection) -> Self {
        let (Some(index), Some(photo)) = (collection.current_index(), collection.current()) else {
            return Self::default();
        };

        let date = photo
            .timestamp()
            .map_or_else(|| photo.time.to_string(), |ts| ts.format("%Y-%m-%d").to_string());

        Self {
            status: format!("Timeline {}/{} · {}", index + 1, collection.len(), date),
            card: Some(PhotoCard::from_photo(photo)),
        }
    }
}

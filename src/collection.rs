//! Ordered photo collection with a timeline cursor.

use crate::{photo::Photo, Error, Result};
use log::debug;

/// Photos in timeline order plus the index of the photo being shown.
///
/// The cursor is `Some(i)` with `i < len` whenever the collection is
/// non-empty and `None` when it is empty.
#[derive(Debug, Clone, Default)]
pub struct PhotoCollection {
    photos: Vec<Photo>,
    current_index: Option<usize>,
}

impl PhotoCollection {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection positioned on the first photo
    #[must_use]
    pub fn from_photos(photos: Vec<Photo>) -> Self {
        let mut collection = Self::new();
        collection.set_all(photos);
        collection
    }

    /// Replace the whole sequence, keeping the cursor where possible.
    ///
    /// The cursor is clamped to the new last index; a collection that was
    /// empty starts at the first photo.
    pub fn set_all(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
        self.current_index = match (self.photos.len(), self.current_index) {
            (0, _) => None,
            (len, Some(index)) => Some(index.min(len - 1)),
            (_, None) => Some(0),
        };
        debug!(
            "Collection replaced: {} photos, cursor {:?}",
            self.photos.len(),
            self.current_index
        );
    }

    /// Move the cursor by `delta`, wrapping in both directions.
    ///
    /// Returns `false` without doing anything when the collection is empty.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // rem_euclid result is in [0, len)
    pub fn step(&mut self, delta: isize) -> bool {
        let Some(index) = self.current_index else {
            return false;
        };
        let len = self.photos.len() as i128;
        let next = (index as i128 + delta as i128).rem_euclid(len) as usize;
        self.current_index = Some(next);
        true
    }

    /// Jump to a specific photo.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `index` is outside the collection.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.photos.len() {
            return Err(Error::InvalidInput(format!(
                "Photo index {index} out of range for {} photos",
                self.photos.len()
            )));
        }
        self.current_index = Some(index);
        Ok(())
    }

    /// Jump to the newest photo. Returns `false` when empty.
    pub fn select_last(&mut self) -> bool {
        match self.photos.len() {
            0 => false,
            len => {
                self.current_index = Some(len - 1);
                true
            }
        }
    }

    /// Photo under the cursor
    #[must_use]
    pub fn current(&self) -> Option<&Photo> {
        self.current_index.and_then(|i| self.photos.get(i))
    }

    /// Cursor position, `None` when empty
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// All photos in timeline order
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Number of photos
    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Whether the collection holds no photos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

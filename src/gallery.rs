// Gallery cursor module
// Cyclic navigation over an ordered, append-only collection of artworks

use crate::assets::{ImageRef, TextRef};
use thiserror::Error;

/// Display metadata and image reference for one collection item.
///
/// All fields are opaque reference tokens; the cursor never inspects them
/// and the presentation layer resolves them at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    /// Title text reference
    pub title: TextRef,
    /// Artist text reference
    pub artist: TextRef,
    /// Year text reference
    pub year: TextRef,
    /// Image reference
    pub image: ImageRef,
}

impl ArtworkRecord {
    pub fn new(title: TextRef, artist: TextRef, year: TextRef, image: ImageRef) -> Self {
        Self {
            title,
            artist,
            year,
            image,
        }
    }
}

/// Errors from positional accessors on the cursor
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    /// A positional accessor was called before any artwork was appended
    #[error("gallery is empty: no artwork has been added")]
    EmptyCollection,
}

/// Cursor over an ordered collection of artworks with wraparound navigation.
///
/// Items are append-only; `position` always satisfies
/// `0 <= position < items.len()` while the collection is non-empty, so
/// `next`/`previous` traversal is cyclic and unbounded.
#[derive(Debug, Default)]
pub struct GalleryCursor {
    items: Vec<ArtworkRecord>,
    position: usize,
}

impl GalleryCursor {
    /// Create an empty cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cursor positioned at the start of `items`
    pub fn from_items(items: Vec<ArtworkRecord>) -> Self {
        Self { items, position: 0 }
    }

    /// Add an artwork to the end of the collection.
    ///
    /// The current position is unaffected, even mid-traversal; the new item
    /// becomes reachable once navigation reaches its index.
    pub fn append(&mut self, item: ArtworkRecord) {
        self.items.push(item);
    }

    /// Number of artworks in the collection
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no artworks
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reset the cursor to the first artwork and return it.
    ///
    /// Idempotent: repeated calls keep returning the first artwork.
    pub fn first(&mut self) -> Result<&ArtworkRecord, GalleryError> {
        if self.items.is_empty() {
            return Err(GalleryError::EmptyCollection);
        }
        self.position = 0;
        Ok(&self.items[self.position])
    }

    /// Return the artwork at the current position without moving the cursor
    pub fn current(&self) -> Result<&ArtworkRecord, GalleryError> {
        if self.items.is_empty() {
            return Err(GalleryError::EmptyCollection);
        }
        Ok(&self.items[self.position])
    }

    /// Advance to the next artwork, wrapping from the last back to the first
    pub fn next(&mut self) -> Result<&ArtworkRecord, GalleryError> {
        if self.items.is_empty() {
            return Err(GalleryError::EmptyCollection);
        }
        self.position = (self.position + 1) % self.items.len();
        Ok(&self.items[self.position])
    }

    /// Step back to the previous artwork, wrapping from the first to the last
    pub fn previous(&mut self) -> Result<&ArtworkRecord, GalleryError> {
        if self.items.is_empty() {
            return Err(GalleryError::EmptyCollection);
        }
        // Plain wrap-on-negative check; only single-step decrements occur
        if self.position == 0 {
            self.position = self.items.len() - 1;
        } else {
            self.position -= 1;
        }
        Ok(&self.items[self.position])
    }

    /// Current index into the collection, if any artwork exists
    pub fn position(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.position)
        }
    }

    /// Iterate the collection in insertion order without moving the cursor
    pub fn iter(&self) -> impl Iterator<Item = &ArtworkRecord> {
        self.items.iter()
    }
}

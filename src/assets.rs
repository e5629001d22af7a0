// Asset reference module
// Opaque resource identifiers and the built-in collection that uses them

use crate::gallery::{ArtworkRecord, GalleryCursor};

/// Opaque reference to a localizable piece of display text.
///
/// The cursor carries these unchanged; only the presentation layer resolves
/// them against the asset table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRef(String);

impl TextRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque reference to an artwork image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display text table for the built-in collection
const TEXT_TABLE: &[(&str, &str)] = &[
    ("artwork_title_0", "The Starry Night"),
    ("artwork_artist_0", "Vincent van Gogh"),
    ("artwork_year_0", "1889"),
    ("artwork_title_1", "The Great Wave off Kanagawa"),
    ("artwork_artist_1", "Katsushika Hokusai"),
    ("artwork_year_1", "1831"),
    ("artwork_title_2", "Girl with a Pearl Earring"),
    ("artwork_artist_2", "Johannes Vermeer"),
    ("artwork_year_2", "1665"),
];

/// Placeholder image blocks for the built-in collection.
///
/// No image decoding happens anywhere; an image reference resolves to a
/// fixed block of character art standing in for the canvas.
const IMAGE_TABLE: &[(&str, &str)] = &[
    (
        "background_0",
        "  .  *  .    ~ ~    .\n*    . ( @ )  ~   *  \n ~ ~ .   *   . ~   . \n_/\\___/\\_____/\\___/\\_",
    ),
    (
        "background_1",
        "      _  __          \n ___ ( \\/  \\__  ___  \n( _ _ \\ )    ( (   ) \n ~~ ~~ ~~ ~~ ~~ ~~ ~~",
    ),
    (
        "background_2",
        "       ____          \n      ( o  )   .     \n       \\__/   (o)    \n     __/  \\__        ",
    ),
];

/// Resolve a text reference, falling back to the raw key when unknown
pub fn resolve_text(text: &TextRef) -> &str {
    TEXT_TABLE
        .iter()
        .find(|(key, _)| *key == text.as_str())
        .map(|(_, value)| *value)
        .unwrap_or_else(|| text.as_str())
}

/// Resolve an image reference to its placeholder block, if known
pub fn resolve_image(image: &ImageRef) -> Option<&'static str> {
    IMAGE_TABLE
        .iter()
        .find(|(key, _)| *key == image.as_str())
        .map(|(_, block)| *block)
}

/// Build the fixed built-in collection in display order
pub fn builtin_archive() -> GalleryCursor {
    let mut archive = GalleryCursor::new();
    for index in 0..3 {
        archive.append(ArtworkRecord::new(
            TextRef::new(format!("artwork_title_{index}")),
            TextRef::new(format!("artwork_artist_{index}")),
            TextRef::new(format!("artwork_year_{index}")),
            ImageRef::new(format!("background_{index}")),
        ));
    }
    archive
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_text_reference_resolves_to_display_text() {
        let title = TextRef::new("artwork_title_0");
        assert_eq!(resolve_text(&title), "The Starry Night");
    }

    #[test]
    fn unknown_text_reference_falls_back_to_its_key() {
        let stray = TextRef::new("artwork_title_99");
        assert_eq!(resolve_text(&stray), "artwork_title_99");
    }

    #[test]
    fn unknown_image_reference_yields_no_block() {
        assert!(resolve_image(&ImageRef::new("background_99")).is_none());
        assert!(resolve_image(&ImageRef::new("background_1")).is_some());
    }

    #[test]
    fn builtin_archive_resolves_fully() {
        let archive = builtin_archive();
        assert_eq!(archive.len(), 3);
        for artwork in archive.iter() {
            assert_ne!(resolve_text(&artwork.title), artwork.title.as_str());
            assert_ne!(resolve_text(&artwork.artist), artwork.artist.as_str());
            assert_ne!(resolve_text(&artwork.year), artwork.year.as_str());
            assert!(resolve_image(&artwork.image).is_some());
        }
    }
}

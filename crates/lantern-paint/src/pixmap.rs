//! Decoded images keyed by resolved URL.

use std::collections::HashMap;

use lantern_common::image::DecodedImage;

/// Cache of decoded images, keyed by the resolved absolute URL.
///
/// Populated by image loading and read while painting. Entries live for the
/// lifetime of the document; nothing is evicted.
#[derive(Debug, Clone, Default)]
pub struct PixmapCache {
    images: HashMap<String, DecodedImage>,
}

impl PixmapCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a decoded image, replacing any previous entry for `url`.
    pub fn insert(&mut self, url: impl Into<String>, image: DecodedImage) {
        let _ = self.images.insert(url.into(), image);
    }

    /// Look up the image for a resolved URL.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&DecodedImage> {
        self.images.get(url)
    }

    /// True if an image is cached for `url`.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.images.contains_key(url)
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

//! Container configuration.
//!
//! Everything the layout engine asks the container about its environment
//! (default font, viewport, language, resolution) comes from here. Every
//! field has a default, so an empty JSON object is a valid configuration.

use serde::Deserialize;

use crate::error::ContainerError;

/// Size of the area the document is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 555,
            height: 777,
        }
    }
}

/// Configuration of a [`crate::DocumentContainer`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    ///
    /// The pixel size of `medium`.
    pub default_font_size: f32,
    /// Family used when a style names none.
    pub default_font_name: String,
    /// Client area reported to the layout engine.
    pub viewport: Viewport,
    /// Primary language tag, e.g. `"en"`.
    pub language: String,
    /// Culture (region) tag, e.g. `"US"`; empty when unknown.
    pub culture: String,
    /// Device resolution in dots per inch.
    pub dpi: f32,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            default_font_size: 16.0,
            default_font_name: "Segoe UI".to_string(),
            viewport: Viewport::default(),
            language: "en".to_string(),
            culture: String::new(),
            dpi: 96.0,
        }
    }
}

impl ContainerConfig {
    /// Parse a configuration from JSON, filling missing fields with their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Config`] if the JSON is malformed or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ContainerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the viewport.
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = Viewport { width, height };
        self
    }

    /// Replace the resolution.
    #[must_use]
    pub const fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Replace the language and culture.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>, culture: impl Into<String>) -> Self {
        self.language = language.into();
        self.culture = culture.into();
        self
    }
}

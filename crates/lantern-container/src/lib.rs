//! Lantern Container - the paint and resource side of an HTML layout engine
//!
//! A layout engine decides where boxes go; this crate decides what they
//! look like on screen. [`DocumentContainer`] receives the engine's paint
//! calls (backgrounds, borders, text, list markers), resolves the URLs they
//! reference, keeps decoded images and fonts, and records drawing commands
//! on a [`lantern_paint::DisplayList`]. [`Renderer`] executes such a list
//! into pixels.
//!
//! # Modules
//!
//! - [`container`]: the container facade
//! - [`config`]: defaults reported to the layout engine
//! - [`fonts`]: font faces, handles, and metrics
//! - [`host`]: callbacks into the embedding application
//! - [`image_loader`]: image format detection and decoding
//! - [`media`]: media feature values
//! - [`renderer`]: the `tiny-skia` software renderer

pub mod config;
pub mod container;
pub mod error;
pub mod fonts;
pub mod host;
pub mod image_loader;
pub mod media;
pub mod renderer;

pub use config::{ContainerConfig, Viewport};
pub use container::DocumentContainer;
pub use error::{ContainerError, DecodeError};
pub use fonts::{FontHandle, FontLibrary, FontMetrics};
pub use host::{DefaultHost, HostCallbacks};
pub use media::{MediaFeatures, MediaType};
pub use renderer::Renderer;

//! Error types for the container.

use thiserror::Error;

/// Errors returned by container operations.
///
/// Paint problems are not errors: they are reported and absorbed (see
/// [`lantern_paint::PaintIssue`]). These are the caller's mistakes.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// A font handle this container did not issue, or one already deleted.
    #[error("font handle {id} was not issued by this container")]
    UnknownFont {
        /// Identifier carried by the handle.
        id: u64,
    },

    /// The configuration could not be parsed.
    #[error("invalid container configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Why bytes could not be turned into an image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The host returned no data.
    #[error("no image data")]
    Empty,

    /// The SVG document could not be parsed.
    #[error("failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),

    /// The SVG has no area to rasterize.
    #[error("SVG has zero-size dimensions")]
    ZeroSize,

    /// A pixmap of the requested size could not be allocated.
    #[error("failed to allocate a {width}x{height} pixmap")]
    Allocation {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// No registered decoder handles the detected format.
    #[error("no decoder available for format {0:?}")]
    NoDecoder(crate::image_loader::ImageFormat),

    /// The raster decoder rejected the data.
    #[error("could not decode image ({0})")]
    Raster(#[from] image::ImageError),
}

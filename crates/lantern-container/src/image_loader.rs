//! Image decoding: detect the format of fetched bytes and decode them.
//!
//! [§ 4.8.3 The img element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-img-element)
//!
//! Fetching belongs to the host (see [`crate::host::HostCallbacks`]); this
//! module only turns bytes into a [`DecodedImage`]:
//!
//! 1. **Detect**: [`detect_format()`] decides between SVG and raster using
//!    the URL's extension, a `data:` MIME type, and magic-byte sniffing.
//! 2. **Decode**: the [`ImageDecoder`] trait with [`SvgDecoder`] and
//!    [`RasterDecoder`] implementations.
//!
//! [`ImageLoaderPipeline`] ties the two together.

use std::path::Path;

use lantern_common::image::DecodedImage;
use lantern_common::warning::warn_once;

use crate::error::DecodeError;

/// Detected image format.
///
/// The `image` crate sniffs raster sub-formats (PNG/JPEG/GIF/...) itself, so
/// two variants are enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// SVG vector image, rasterized at its intrinsic size.
    Svg,
    /// Raster image.
    Raster,
}

/// Strip the query string (`?...`) and fragment (`#...`) from a URL so its
/// path can be checked for a file extension.
///
/// [URL Standard § 4.1](https://url.spec.whatwg.org/#concept-url-path)
#[must_use]
pub fn strip_url_decorations(resolved: &str) -> &str {
    let without_fragment = resolved.split_once('#').map_or(resolved, |(b, _)| b);
    without_fragment
        .split_once('?')
        .map_or(without_fragment, |(b, _)| b)
}

/// Warn (once) about a fragment identifier in an image URL; the whole
/// document is rendered regardless.
pub fn warn_fragment(resolved: &str) {
    // TODO: render only the referenced element for SVG sprite sheets
    // (`icons.svg#globe`).
    if !resolved.starts_with("data:")
        && let Some((_, fragment)) = resolved.split_once('#')
    {
        let _ = warn_once(
            "image",
            &format!("ignoring fragment identifier '#{fragment}' in '{resolved}'"),
        );
    }
}

/// Detect whether `bytes` hold an SVG or a raster image.
///
/// 1. **Extension**: `.svg` on the URL path.
/// 2. **Data URL MIME type**: a `data:image/svg` prefix.
/// 3. **Sniffing**: after leading whitespace, the first 256 bytes start
///    with `<?xml` or `<svg`.
/// 4. **Default**: [`ImageFormat::Raster`].
#[must_use]
pub fn detect_format(resolved_url: &str, bytes: &[u8]) -> ImageFormat {
    // STEP 1: Extension
    if Path::new(strip_url_decorations(resolved_url))
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    {
        return ImageFormat::Svg;
    }

    // STEP 2: Data URL MIME type
    if resolved_url.starts_with("data:image/svg") {
        return ImageFormat::Svg;
    }

    // STEP 3: Magic bytes
    let head = bytes
        .iter()
        .skip_while(|b| b.is_ascii_whitespace())
        .take(256)
        .copied()
        .collect::<Vec<u8>>();
    if head.starts_with(b"<?xml") || head.starts_with(b"<svg") {
        return ImageFormat::Svg;
    }

    // STEP 4: Default
    ImageFormat::Raster
}

/// A decoder that turns raw bytes into a [`DecodedImage`].
pub trait ImageDecoder {
    /// Whether this decoder handles `format`.
    fn supports(&self, format: ImageFormat) -> bool;

    /// Decode `bytes`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes are not a valid image of this
    /// decoder's format.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError>;
}

/// Rasterizes SVG through usvg and resvg.
pub struct SvgDecoder;

impl ImageDecoder for SvgDecoder {
    fn supports(&self, format: ImageFormat) -> bool {
        format == ImageFormat::Svg
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())?;

        let size = tree.size();
        let (width, height) = (size.width().ceil() as u32, size.height().ceil() as u32);
        if width == 0 || height == 0 {
            return Err(DecodeError::ZeroSize);
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(DecodeError::Allocation { width, height })?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        // tiny-skia stores premultiplied pixels; the cache holds straight
        // RGBA.
        let rgba_data = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        DecodedImage::new(width, height, rgba_data).ok_or(DecodeError::Allocation { width, height })
    }
}

/// Decodes raster formats (PNG, JPEG, GIF, WebP, ...) through the `image`
/// crate.
pub struct RasterDecoder;

impl ImageDecoder for RasterDecoder {
    fn supports(&self, format: ImageFormat) -> bool {
        format == ImageFormat::Raster
    }

    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        DecodedImage::new(width, height, rgba.into_raw())
            .ok_or(DecodeError::Allocation { width, height })
    }
}

/// Detects the format of fetched bytes and dispatches to a decoder.
pub struct ImageLoaderPipeline {
    decoders: Vec<Box<dyn ImageDecoder>>,
}

impl ImageLoaderPipeline {
    /// Create a pipeline with the SVG and raster decoders.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoders: vec![Box::new(SvgDecoder), Box::new(RasterDecoder)],
        }
    }

    /// Decode the bytes fetched from `resolved_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Empty`] for empty input, otherwise whatever
    /// the selected decoder reports.
    pub fn decode(&self, bytes: &[u8], resolved_url: &str) -> Result<DecodedImage, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        warn_fragment(resolved_url);

        let format = detect_format(resolved_url, bytes);
        self.decoders
            .iter()
            .find(|decoder| decoder.supports(format))
            .map_or(Err(DecodeError::NoDecoder(format)), |decoder| {
                decoder.decode(bytes)
            })
    }
}

impl Default for ImageLoaderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

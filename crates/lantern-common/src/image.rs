//! Decoded image data shared between the image loader, the painters, and
//! the renderer.

/// Decoded image held in the pixmap cache.
///
/// Pixels are straight (non-premultiplied) RGBA, row-major, four bytes per
/// pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Raw RGBA pixel data (width * height * 4 bytes).
    rgba_data: Vec<u8>,
}

impl DecodedImage {
    /// Create a `DecodedImage` from straight RGBA pixel data.
    ///
    /// Returns `None` when `rgba_data` is not exactly `width * height * 4`
    /// bytes long.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (rgba_data.len() == expected).then_some(Self {
            width,
            height,
            rgba_data,
        })
    }

    /// Create an image filled with a single straight RGBA color.
    #[must_use]
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            rgba_data: rgba.repeat(pixels),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// True for a zero-area image (a failed or empty decode).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The RGBA value at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba_data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Raw RGBA pixel data.
    #[must_use]
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }
}

//! Font loading, handles, and metrics.
//!
//! [CSS Fonts § 5 Font Matching](https://www.w3.org/TR/css-fonts-4/#font-matching-algorithm)
//!
//! fontdue has no system font database, so faces are found by probing a
//! list of well-known paths for a regular, bold, italic, and bold-italic
//! face. A font request picks one of those four by weight and style; the
//! family list is kept on the descriptor for the text commands.
//!
//! When no face is found at all, metrics and widths fall back to a fixed
//! estimate proportional to the pixel size, so layout still gets
//! consistent numbers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use fontdue::{Font, FontSettings};
use lantern_paint::text::FontDescriptor;

/// Common system font paths for the regular face.
const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// System font paths for bold faces.
const FONT_BOLD_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "C:\\Windows\\Fonts\\segoeuib.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// System font paths for italic faces.
const FONT_ITALIC_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Italic.ttf",
    "/Library/Fonts/Arial Italic.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Italic.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansOblique.ttf",
    "C:\\Windows\\Fonts\\segoeuii.ttf",
    "C:\\Windows\\Fonts\\ariali.ttf",
];

/// System font paths for bold-italic faces.
const FONT_BOLD_ITALIC_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold Italic.ttf",
    "/Library/Fonts/Arial Bold Italic.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-BoldOblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-BoldItalic.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBoldOblique.ttf",
    "C:\\Windows\\Fonts\\segoeuiz.ttf",
    "C:\\Windows\\Fonts\\arialbi.ttf",
];

/// Ascent of the estimated metrics, as a fraction of the pixel size.
const ESTIMATED_ASCENT: f32 = 0.8;
/// Descent of the estimated metrics, as a fraction of the pixel size.
const ESTIMATED_DESCENT: f32 = 0.2;
/// x-height of the estimated metrics, as a fraction of the pixel size.
const ESTIMATED_X_HEIGHT: f32 = 0.5;
/// Advance of every character in the estimate, as a fraction of the pixel
/// size.
const ESTIMATED_ADVANCE: f32 = 0.5;

/// The faces available for drawing text.
///
/// Cloning is cheap; faces are shared.
#[derive(Clone, Default)]
pub struct FontLibrary {
    regular: Option<Arc<Font>>,
    bold: Option<Arc<Font>>,
    italic: Option<Arc<Font>>,
    bold_italic: Option<Arc<Font>>,
}

impl FontLibrary {
    /// Probe the well-known system paths for the four faces.
    #[must_use]
    pub fn system() -> Self {
        let regular = load_font_from_paths(FONT_SEARCH_PATHS, "regular");
        if regular.is_none() {
            eprintln!("Warning: No system font found. Text metrics will be estimated.");
            eprintln!("Searched paths:");
            for path in FONT_SEARCH_PATHS {
                eprintln!("  - {path}");
            }
        }
        Self {
            regular,
            bold: load_font_from_paths(FONT_BOLD_SEARCH_PATHS, "bold"),
            italic: load_font_from_paths(FONT_ITALIC_SEARCH_PATHS, "italic"),
            bold_italic: load_font_from_paths(FONT_BOLD_ITALIC_SEARCH_PATHS, "bold-italic"),
        }
    }

    /// A library with no faces: metrics are estimated and no text is drawn.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The best face for a descriptor: exact match, then a partial match,
    /// then the regular face.
    #[must_use]
    pub fn face_for(&self, descriptor: &FontDescriptor) -> Option<&Font> {
        let face = match (descriptor.is_bold(), descriptor.italic) {
            (true, true) => self
                .bold_italic
                .as_ref()
                .or(self.bold.as_ref())
                .or(self.regular.as_ref()),
            (true, false) => self.bold.as_ref().or(self.regular.as_ref()),
            (false, true) => self.italic.as_ref().or(self.regular.as_ref()),
            (false, false) => self.regular.as_ref(),
        };
        face.map(Arc::as_ref)
    }

    /// Metrics of `descriptor` as the layout engine sees them.
    #[must_use]
    pub fn metrics(&self, descriptor: &FontDescriptor) -> FontMetrics {
        let size = descriptor.size;
        let draw_spaces = !descriptor.decoration.is_none();

        let Some(face) = self.face_for(descriptor) else {
            return FontMetrics::estimated(size, draw_spaces);
        };
        let Some(line) = face.horizontal_line_metrics(size) else {
            return FontMetrics::estimated(size, draw_spaces);
        };

        #[allow(clippy::cast_precision_loss)]
        let x_height = face.metrics('x', size).height as f32;
        FontMetrics {
            height: line.ascent - line.descent,
            ascent: line.ascent,
            descent: -line.descent,
            x_height,
            draw_spaces,
        }
    }

    /// Advance width of `text` in pixels.
    ///
    /// [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
    ///
    /// Sums per-character advances, skipping control characters, the same
    /// way the renderer advances its pen.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn text_width(&self, descriptor: &FontDescriptor, text: &str) -> f32 {
        let chars = text.chars().filter(|ch| !ch.is_control());
        match self.face_for(descriptor) {
            Some(face) => chars
                .map(|ch| face.metrics(ch, descriptor.size).advance_width)
                .sum(),
            None => chars.count() as f32 * descriptor.size * ESTIMATED_ADVANCE,
        }
    }
}

impl std::fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontLibrary")
            .field("regular", &self.regular.is_some())
            .field("bold", &self.bold.is_some())
            .field("italic", &self.italic.is_some())
            .field("bold_italic", &self.bold_italic.is_some())
            .finish()
    }
}

/// Try each path in turn and load the first font that parses.
fn load_font_from_paths(paths: &[&str], label: &str) -> Option<Arc<Font>> {
    for path in paths {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = Font::from_bytes(data, FontSettings::default())
        {
            eprintln!("Loaded {label} font: {path}");
            return Some(Arc::new(font));
        }
    }
    None
}

/// Vertical metrics reported back to the layout engine.
///
/// [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
///
/// "CSS assumes that every font has font metrics that specify a
/// characteristic height above the baseline and a depth below it."
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Ascent plus descent.
    pub height: f32,
    /// Distance from the baseline to the top of the em box.
    pub ascent: f32,
    /// Distance from the baseline down to the bottom (positive).
    pub descent: f32,
    /// Height of a lowercase `x`.
    pub x_height: f32,
    /// True when the font is decorated, so spaces must be drawn for the
    /// decoration lines to be continuous.
    pub draw_spaces: bool,
}

impl FontMetrics {
    /// Proportional metrics used when no face is available.
    #[must_use]
    pub fn estimated(size: f32, draw_spaces: bool) -> Self {
        let ascent = size * ESTIMATED_ASCENT;
        let descent = size * ESTIMATED_DESCENT;
        Self {
            height: ascent + descent,
            ascent,
            descent,
            x_height: size * ESTIMATED_X_HEIGHT,
            draw_spaces,
        }
    }
}

/// Source of handle identifiers, unique across containers.
static NEXT_FONT_ID: AtomicU64 = AtomicU64::new(1);

/// Owned reference to a font created by a container.
///
/// Not `Clone` or `Copy`: the handle is valid until it is passed back to
/// [`crate::DocumentContainer::delete_font`], which consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FontHandle {
    id: u64,
    owner: u64,
}

impl FontHandle {
    pub(crate) fn issue(owner: u64) -> Self {
        Self {
            id: NEXT_FONT_ID.fetch_add(1, Ordering::Relaxed),
            owner,
        }
    }

    /// Identifier of this handle.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    pub(crate) const fn owner(&self) -> u64 {
        self.owner
    }
}

/// Source of container identities for [`FontHandle::owner`].
static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// A fresh container identity.
pub(crate) fn next_container_id() -> u64 {
    NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed)
}

//! Recoverable problems met while painting.
//!
//! Nothing a painter hits is fatal to the page: every issue is returned to
//! the caller, reported once through [`warn_once`], and painting carries on
//! with the documented fallback.

use lantern_common::warning::warn_once;

use crate::background::BackgroundRepeat;
use crate::border::BorderStyle;
use crate::marker::ListStyleType;

/// A per-primitive problem that was absorbed rather than propagated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaintIssue {
    /// An image was referenced before it was loaded (or failed to decode).
    /// Nothing is painted for it.
    #[error("pixmap not loaded for '{url}'")]
    MissingPixmap {
        /// The resolved URL that missed the cache.
        url: String,
    },

    /// A repeat policy this container does not tile. Nothing is painted for
    /// the image.
    #[error("unsupported background repeat '{0}'")]
    UnsupportedRepeat(BackgroundRepeat),

    /// A list marker type without a native shape. A filled disc is drawn
    /// instead.
    #[error("list marker of type '{0}' not supported, drawing a disc")]
    UnsupportedMarker(ListStyleType),

    /// A cursor name outside the cursor table. The arrow cursor is used
    /// instead.
    #[error("unknown cursor property \"{0}\"")]
    UnknownCursor(String),

    /// A border style without a native pen pattern. A solid pen is used
    /// instead.
    #[error("border style '{0}' drawn as solid")]
    UnsupportedBorderStyle(BorderStyle),
}

impl PaintIssue {
    /// The component name the issue is reported under.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        match self {
            Self::MissingPixmap { .. } | Self::UnsupportedRepeat(_) => "background",
            Self::UnsupportedMarker(_) => "marker",
            Self::UnknownCursor(_) => "cursor",
            Self::UnsupportedBorderStyle(_) => "border",
        }
    }

    /// Print the issue once per unique message.
    pub fn report(&self) {
        let _ = warn_once(self.component(), &self.to_string());
    }
}

/// Report every issue in `issues`.
pub fn report_all(issues: &[PaintIssue]) {
    for issue in issues {
        issue.report();
    }
}

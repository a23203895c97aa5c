//! List marker painting.
//!
//! [CSS Lists § 3 Markers](https://www.w3.org/TR/css-lists-3/#markers)
//!
//! Only the three geometric bullets have a native shape. Counter styles
//! need the item index and a font, which the layout engine does not pass
//! with the marker, so they are drawn as discs.

use lantern_common::url::DocumentBase;
use strum_macros::{Display, EnumString};

use crate::background::ImageSource;
use crate::color::Color;
use crate::display_list::{DisplayCommand, DisplayList, Pen};
use crate::geometry::Rect;
use crate::issue::PaintIssue;
use crate::pixmap::PixmapCache;

/// [§ 3.1 'list-style-type'](https://www.w3.org/TR/css-lists-3/#list-style-type)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ListStyleType {
    /// No marker.
    None,
    /// Hollow circle.
    Circle,
    /// Filled circle.
    #[default]
    Disc,
    /// Filled square.
    Square,
    /// Traditional Armenian numbering.
    Armenian,
    /// Chinese/Japanese ideographic numbering.
    CjkIdeographic,
    /// Decimal numbers starting at 1.
    Decimal,
    /// Decimal numbers padded with a leading zero.
    DecimalLeadingZero,
    /// Traditional Georgian numbering.
    Georgian,
    /// Traditional Hebrew numbering.
    Hebrew,
    /// Hiragana in gojūon order.
    Hiragana,
    /// Hiragana in iroha order.
    HiraganaIroha,
    /// Katakana in gojūon order.
    Katakana,
    /// Katakana in iroha order.
    KatakanaIroha,
    /// Lowercase ASCII letters.
    LowerAlpha,
    /// Lowercase Greek letters.
    LowerGreek,
    /// Lowercase ASCII letters.
    LowerLatin,
    /// Lowercase roman numerals.
    LowerRoman,
    /// Uppercase ASCII letters.
    UpperAlpha,
    /// Uppercase ASCII letters.
    UpperLatin,
    /// Uppercase roman numerals.
    UpperRoman,
}

/// How a marker type is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    /// Nothing at all.
    Nothing,
    /// A rectangle filled with the marker color.
    FilledRect,
    /// An ellipse filled with the marker color.
    FilledEllipse,
    /// A one-pixel ellipse outline in the marker color.
    StrokedEllipse,
}

impl ListStyleType {
    /// The native shape for this type, or `None` when it has none.
    #[must_use]
    pub const fn shape(self) -> Option<MarkerShape> {
        match self {
            Self::None => Some(MarkerShape::Nothing),
            Self::Square => Some(MarkerShape::FilledRect),
            Self::Disc => Some(MarkerShape::FilledEllipse),
            Self::Circle => Some(MarkerShape::StrokedEllipse),
            _ => None,
        }
    }
}

/// A list item's marker as laid out by the layout engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMarker {
    /// [§ 3.2 'list-style-image'](https://www.w3.org/TR/css-lists-3/#list-style-image)
    ///
    /// Drawn instead of the bullet when present.
    pub image: Option<ImageSource>,
    /// Bullet type.
    pub marker_type: ListStyleType,
    /// Bullet color.
    pub color: Color,
    /// Box the marker occupies.
    pub pos: Rect,
}

/// Paint a list marker and return the problems met.
pub fn paint_marker(
    marker: &ListMarker,
    images: &PixmapCache,
    document: &DocumentBase,
    list: &mut DisplayList,
) -> Vec<PaintIssue> {
    let mut issues = Vec::new();

    if let Some(image) = marker.image.as_ref().filter(|image| !image.src.is_empty()) {
        let url = image.resolve(document);
        if images.contains(&url) {
            list.push(DisplayCommand::DrawImage {
                dest: marker.pos,
                url,
            });
        } else {
            issues.push(PaintIssue::MissingPixmap { url });
        }
        return issues;
    }

    let shape = marker.marker_type.shape().unwrap_or_else(|| {
        issues.push(PaintIssue::UnsupportedMarker(marker.marker_type));
        MarkerShape::FilledEllipse
    });

    match shape {
        MarkerShape::Nothing => {}
        MarkerShape::FilledRect => list.push(DisplayCommand::FillRect {
            rect: marker.pos,
            color: marker.color,
        }),
        MarkerShape::FilledEllipse => list.push(DisplayCommand::FillEllipse {
            bounds: marker.pos,
            color: marker.color,
        }),
        MarkerShape::StrokedEllipse => list.push(DisplayCommand::StrokeEllipse {
            bounds: marker.pos,
            pen: Pen::solid(marker.color, 1.0),
        }),
    }

    issues
}

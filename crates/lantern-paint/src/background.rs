//! Background compositing.
//!
//! [CSS Backgrounds and Borders § 3 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/#backgrounds)
//!
//! A box may carry several background layers. The layout engine hands them
//! over topmost-first; they are painted bottom-up so the element's own
//! background ends up on top of anything beneath it.

use lantern_common::url::{DocumentBase, resolve_url};
use strum_macros::{Display, EnumString};

use crate::color::Color;
use crate::display_list::{DisplayCommand, DisplayList};
use crate::geometry::{CornerRadii, Rect, Size, corner_clip_region};
use crate::issue::PaintIssue;
use crate::pixmap::PixmapCache;

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum BackgroundRepeat {
    /// "The image is placed once and not repeated in this direction."
    NoRepeat,
    /// Repeated horizontally only.
    RepeatX,
    /// Repeated vertically only.
    RepeatY,
    /// "The image is repeated in this direction as often as needed to
    /// cover the background painting area."
    #[default]
    Repeat,
}

/// A background image reference as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSource {
    /// The reference as written (`url(...)` contents).
    pub src: String,
    /// Base URL of the stylesheet or document the reference came from.
    pub base_url: String,
}

impl ImageSource {
    /// Create an image reference.
    #[must_use]
    pub fn new(src: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            base_url: base_url.into(),
        }
    }

    /// Resolve to the pixmap cache key.
    #[must_use]
    pub fn resolve(&self, document: &DocumentBase) -> String {
        resolve_url(&self.src, &self.base_url, document)
    }
}

/// One background layer of a box.
///
/// [§ 3.1 Layering Multiple Background Images](https://www.w3.org/TR/css-backgrounds-3/#layering)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundLayer {
    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    pub color: Color,
    /// [§ 3.7 'background-clip'](https://www.w3.org/TR/css-backgrounds-3/#background-clip)
    ///
    /// Area this layer is visible in.
    pub clip_box: Rect,
    /// Outer edge of the element's border.
    ///
    /// Carried for the layout engine; painting clips to `clip_box` only.
    pub border_box: Rect,
    /// Corner rounding of the layer.
    pub radii: CornerRadii,
    /// [§ 3.3 'background-image'](https://www.w3.org/TR/css-backgrounds-3/#background-image)
    pub image: Option<ImageSource>,
    /// [§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#background-position)
    ///
    /// Horizontal placement of the image's top-left corner.
    pub position_x: f32,
    /// Vertical placement of the image's top-left corner.
    pub position_y: f32,
    /// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#background-size)
    pub image_size: Size,
    /// How the image repeats.
    pub repeat: BackgroundRepeat,
}

/// Paints a box's background layers onto a display list.
pub struct BackgroundCompositor<'a> {
    /// Decoded images, read-only while painting.
    images: &'a PixmapCache,
    /// Base for resolving image references with an empty base.
    document: &'a DocumentBase,
}

impl<'a> BackgroundCompositor<'a> {
    /// Create a compositor reading from `images`.
    #[must_use]
    pub const fn new(images: &'a PixmapCache, document: &'a DocumentBase) -> Self {
        Self { images, document }
    }

    /// Paint `layers` (index 0 topmost) and return the problems met.
    ///
    /// [§ 3.1 Layering](https://www.w3.org/TR/css-backgrounds-3/#layering)
    ///
    /// "The first image in the list is the layer closest to the user, the
    /// next one is painted behind the first, and so on."
    ///
    /// Each layer is painted inside its own save/restore, so its rounded
    /// clip intersects the clips already in effect without leaking into the
    /// next layer. The whole call is wrapped in one more save/restore.
    pub fn paint(&self, layers: &[BackgroundLayer], list: &mut DisplayList) -> Vec<PaintIssue> {
        let mut issues = Vec::new();
        if layers.is_empty() {
            return issues;
        }

        list.save();
        for layer in layers.iter().rev() {
            self.paint_layer(layer, list, &mut issues);
        }
        list.restore();

        issues
    }

    fn paint_layer(
        &self,
        layer: &BackgroundLayer,
        list: &mut DisplayList,
        issues: &mut Vec<PaintIssue>,
    ) {
        list.save();

        // STEP 1: Intersect the clip with the layer's rounded silhouette.
        //
        // [§ 5.3 Corner Clipping](https://www.w3.org/TR/css-backgrounds-3/#corner-clipping)
        list.clip(corner_clip_region(&layer.clip_box, &layer.radii));

        // STEP 2: Background color.
        //
        // "The background color is drawn behind any background images."
        if !layer.color.is_transparent() {
            list.push(DisplayCommand::FillRect {
                rect: layer.clip_box,
                color: layer.color,
            });
        }

        // STEP 3: Background image. An empty source is a layer without an
        // image, not an error.
        if let Some(image) = layer.image.as_ref().filter(|image| !image.src.is_empty())
            && let Err(issue) = self.paint_image(layer, image, list)
        {
            issues.push(issue);
        }

        list.restore();
    }

    fn paint_image(
        &self,
        layer: &BackgroundLayer,
        image: &ImageSource,
        list: &mut DisplayList,
    ) -> Result<(), PaintIssue> {
        if matches!(
            layer.repeat,
            BackgroundRepeat::RepeatY | BackgroundRepeat::Repeat
        ) {
            return Err(PaintIssue::UnsupportedRepeat(layer.repeat));
        }

        let url = image.resolve(self.document);
        if !self.images.contains(&url) {
            return Err(PaintIssue::MissingPixmap { url });
        }

        let size = layer.image_size;
        if layer.repeat == BackgroundRepeat::NoRepeat {
            list.push(DisplayCommand::DrawImage {
                dest: Rect::new(layer.position_x, layer.position_y, size.width, size.height),
                url,
            });
            return Ok(());
        }

        // repeat-x: tiles from the clip box's left edge until a tile would
        // start at or beyond its right edge.
        if size.width > 0.0 {
            for x in repeat_x_positions(&layer.clip_box, size.width) {
                list.push(DisplayCommand::DrawImage {
                    dest: Rect::new(x, layer.position_y, size.width, size.height),
                    url: url.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Left edges of the tiles covering `clip_box` with tiles `tile_width` wide.
///
/// The first tile starts at the clip box's left edge; a box `B` wide gets
/// exactly `ceil(B / W)` tiles. Each position is computed from its index so
/// the count holds even where `left + W` rounds back to `left`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn repeat_x_positions(clip_box: &Rect, tile_width: f32) -> impl Iterator<Item = f32> + use<> {
    let start = clip_box.left();
    let count = (clip_box.width / tile_width).ceil().max(0.0) as usize;
    (0..count).map(move |i| start + i as f32 * tile_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_x_positions_exact_fit() {
        let positions: Vec<f32> =
            repeat_x_positions(&Rect::new(5.0, 0.0, 100.0, 10.0), 25.0).collect();
        assert_eq!(positions, vec![5.0, 30.0, 55.0, 80.0]);
    }

    #[test]
    fn test_repeat_x_positions_partial_last_tile() {
        let positions: Vec<f32> =
            repeat_x_positions(&Rect::new(0.0, 0.0, 101.0, 10.0), 25.0).collect();
        assert_eq!(positions.len(), 5);
    }

    #[test]
    fn test_repeat_x_positions_far_from_origin() {
        // At 1e8 a 1px step is below f32 precision.
        let count = repeat_x_positions(&Rect::new(1.0e8, 0.0, 100.0, 10.0), 1.0)
            .take(1_000)
            .count();
        assert_eq!(count, 100);
    }

    #[test]
    fn test_repeat_parses_css_keywords() {
        assert_eq!(
            "repeat-x".parse::<BackgroundRepeat>(),
            Ok(BackgroundRepeat::RepeatX)
        );
        assert_eq!(BackgroundRepeat::NoRepeat.to_string(), "no-repeat");
    }
}

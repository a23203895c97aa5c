//! Software renderer for display lists.
//!
//! Executes a [`DisplayList`] into a `tiny-skia` pixmap. The renderer is
//! the reference paint surface: it knows nothing about boxes or styles and
//! simply runs the drawing commands in order.
//!
//! ```text
//! layout engine → DocumentContainer → DisplayList → Renderer → pixels
//! ```
//!
//! Clipping follows the display list's save/restore model: every
//! [`DisplayCommand::ClipRegion`] is rasterized into a mask (the union of
//! its pieces) and intersected with the mask already in effect.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use lantern_common::image::DecodedImage;
use lantern_paint::{
    Color, DisplayCommand, DisplayList, FontDescriptor, Pen, PenStyle, PixmapCache, Point, Rect,
    Region, RegionPiece,
};
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, LineCap, Mask, Paint, PathBuilder, Pattern, Pixmap,
    PixmapPaint, Shader, SpreadMode, Stroke, StrokeDash, Transform,
};

use crate::fonts::FontLibrary;

/// Executes display lists onto an RGBA pixel buffer.
pub struct Renderer<'a> {
    pixmap: Pixmap,
    images: &'a PixmapCache,
    fonts: FontLibrary,
    /// Images converted to premultiplied pixmaps, by URL.
    converted: HashMap<String, Pixmap>,
    /// Clip in effect; `None` means unclipped.
    clip: Option<Mask>,
    /// Clips saved by [`DisplayCommand::Save`].
    saved: Vec<Option<Mask>>,
}

impl<'a> Renderer<'a> {
    /// Create a white canvas of the given size.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the canvas is too
    /// large to allocate.
    pub fn new(width: u32, height: u32, images: &'a PixmapCache, fonts: FontLibrary) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height)
            .with_context(|| format!("cannot create a {width}x{height} canvas"))?;
        pixmap.fill(tiny_skia::Color::WHITE);
        Ok(Self {
            pixmap,
            images,
            fonts,
            converted: HashMap::new(),
            clip: None,
            saved: Vec::new(),
        })
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Execute every command of `display_list`, back to front.
    pub fn render(&mut self, display_list: &DisplayList) {
        for command in display_list.commands() {
            self.execute_command(command);
        }
    }

    fn execute_command(&mut self, command: &DisplayCommand) {
        match command {
            DisplayCommand::Save => self.saved.push(self.clip.clone()),
            DisplayCommand::Restore => {
                if let Some(clip) = self.saved.pop() {
                    self.clip = clip;
                }
            }
            DisplayCommand::ClipRegion(region) => self.clip_region(region),
            DisplayCommand::FillRect { rect, color } => self.fill_rect(rect, *color),
            DisplayCommand::FillEllipse { bounds, color } => {
                if let Some(path) = to_skia_rect(bounds).and_then(PathBuilder::from_oval) {
                    self.pixmap.fill_path(
                        &path,
                        &solid_paint(*color),
                        FillRule::Winding,
                        Transform::identity(),
                        self.clip.as_ref(),
                    );
                }
            }
            DisplayCommand::StrokeEllipse { bounds, pen } => {
                if let Some(path) = to_skia_rect(bounds).and_then(PathBuilder::from_oval) {
                    self.stroke(&path, pen);
                }
            }
            DisplayCommand::StrokeLine { from, to, pen } => {
                let mut builder = PathBuilder::new();
                builder.move_to(from.x, from.y);
                builder.line_to(to.x, to.y);
                if let Some(path) = builder.finish() {
                    self.stroke(&path, pen);
                }
            }
            DisplayCommand::StrokeArc {
                bounds,
                start_angle,
                sweep_angle,
                pen,
            } => {
                if let Some(path) = arc_path(bounds, *start_angle, *sweep_angle) {
                    self.stroke(&path, pen);
                }
            }
            DisplayCommand::DrawImage { dest, url } => self.draw_image(dest, url),
            DisplayCommand::DrawText {
                rect,
                text,
                font,
                color,
            } => self.draw_text(rect, text, font, *color),
        }
    }

    /// Intersect the current clip with `region`.
    fn clip_region(&mut self, region: &Region) {
        let Some(mut mask) = Mask::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };

        // Non-antialiased fills cover each pixel fully or not at all, so
        // overlapping pieces union cleanly.
        for piece in region.pieces() {
            let path = match piece {
                RegionPiece::Rect(rect) => to_skia_rect(rect).map(PathBuilder::from_rect),
                RegionPiece::Ellipse(bounds) => {
                    to_skia_rect(bounds).and_then(PathBuilder::from_oval)
                }
            };
            if let Some(path) = path {
                mask.fill_path(&path, FillRule::Winding, false, Transform::identity());
            }
        }

        if let Some(current) = &self.clip {
            for (value, outer) in mask.data_mut().iter_mut().zip(current.data()) {
                *value = (*value).min(*outer);
            }
        }
        self.clip = Some(mask);
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        if let Some(rect) = to_skia_rect(rect) {
            self.pixmap.fill_rect(
                rect,
                &solid_paint(color),
                Transform::identity(),
                self.clip.as_ref(),
            );
        }
    }

    fn stroke(&mut self, path: &tiny_skia::Path, pen: &Pen) {
        let width = if pen.width > 0.0 { pen.width } else { 1.0 };
        let dash = match pen.style {
            PenStyle::Solid => None,
            PenStyle::Dash => StrokeDash::new(vec![3.0 * width, width], 0.0),
            PenStyle::Dot => StrokeDash::new(vec![width, width], 0.0),
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            dash,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &solid_paint(pen.color),
            &stroke,
            Transform::identity(),
            self.clip.as_ref(),
        );
    }

    /// Draw a cached image scaled into `dest` with nearest-neighbour
    /// sampling.
    #[allow(clippy::cast_precision_loss)]
    fn draw_image(&mut self, dest: &Rect, url: &str) {
        let Some(image) = self.images.get(url) else {
            return;
        };
        if !self.converted.contains_key(url) {
            let Some(pixmap) = premultiplied_pixmap(image) else {
                return;
            };
            let _ = self.converted.insert(url.to_owned(), pixmap);
        }
        let (Some(source), Some(target)) = (self.converted.get(url), to_skia_rect(dest)) else {
            return;
        };

        let scale_x = dest.width / source.width() as f32;
        let scale_y = dest.height / source.height() as f32;
        let paint = Paint {
            shader: Pattern::new(
                source.as_ref(),
                SpreadMode::Pad,
                FilterQuality::Nearest,
                1.0,
                Transform::from_row(scale_x, 0.0, 0.0, scale_y, dest.x, dest.y),
            ),
            ..Paint::default()
        };
        self.pixmap
            .fill_rect(target, &paint, Transform::identity(), self.clip.as_ref());
    }

    /// Draw a single line of text with the rect's top-left as the top of
    /// the line box.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss
    )]
    fn draw_text(&mut self, rect: &Rect, text: &str, font: &FontDescriptor, color: Color) {
        let fonts = self.fonts.clone();
        let Some(face) = fonts.face_for(font) else {
            return;
        };
        let metrics = fonts.metrics(font);
        let baseline = rect.y + metrics.ascent;
        let mut pen_x = rect.x;

        for ch in text.chars().filter(|ch| !ch.is_control()) {
            let (glyph, coverage) = face.rasterize(ch, font.size);
            if let Some(glyph_pixmap) = glyph_pixmap(glyph.width, glyph.height, &coverage, color) {
                let x = (pen_x + glyph.xmin as f32).round() as i32;
                let y = (baseline - (glyph.height as f32 + glyph.ymin as f32)).round() as i32;
                self.pixmap.draw_pixmap(
                    x,
                    y,
                    glyph_pixmap.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    self.clip.as_ref(),
                );
            }
            pen_x += glyph.advance_width;
        }

        // [CSS Text Decoration § 2.1](https://www.w3.org/TR/css-text-decoration-3/#line-decoration)
        let thickness = (font.size / 16.0).max(1.0);
        let width = pen_x - rect.x;
        let decoration = font.decoration;
        if decoration.underline {
            self.fill_rect(&Rect::new(rect.x, baseline + 1.0, width, thickness), color);
        }
        if decoration.overline {
            self.fill_rect(&Rect::new(rect.x, rect.y, width, thickness), color);
        }
        if decoration.line_through {
            let y = baseline - metrics.x_height / 2.0;
            self.fill_rect(&Rect::new(rect.x, y, width, thickness), color);
        }
    }

    /// The straight RGBA color at a pixel, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(
            color.red(),
            color.green(),
            color.blue(),
            color.alpha(),
        ))
    }

    /// The canvas as straight RGBA.
    #[must_use]
    pub fn to_rgba_image(&self) -> RgbaImage {
        let data = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.pixmap.width(), self.pixmap.height(), data)
            .unwrap_or_else(|| RgbaImage::new(self.pixmap.width(), self.pixmap.height()))
    }

    /// Save the canvas as an image file (format from the extension).
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be saved to the given path.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_rgba_image()
            .save(path)
            .map_err(|e| anyhow::anyhow!("failed to save render to '{}': {e}", path.display()))?;
        Ok(())
    }
}

fn to_skia_rect(rect: &Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}

fn solid_paint(color: Color) -> Paint<'static> {
    Paint {
        shader: Shader::SolidColor(tiny_skia::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        )),
        anti_alias: true,
        ..Paint::default()
    }
}

/// Convert a straight-RGBA image to a premultiplied pixmap.
fn premultiplied_pixmap(image: &DecodedImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (pixel, rgba) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(image.rgba_data().chunks_exact(4))
    {
        *pixel = ColorU8::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3]).premultiply();
    }
    Some(pixmap)
}

/// A glyph bitmap tinted with `color`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn glyph_pixmap(width: usize, height: usize, coverage: &[u8], color: Color) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(u32::try_from(width).ok()?, u32::try_from(height).ok()?)?;
    for (pixel, &cov) in pixmap.pixels_mut().iter_mut().zip(coverage) {
        let alpha = (u16::from(cov) * u16::from(color.a) / 255) as u8;
        *pixel = ColorU8::from_rgba(color.r, color.g, color.b, alpha).premultiply();
    }
    Some(pixmap)
}

/// Build the path of an elliptical arc.
///
/// Angles are in degrees, counter-clockwise from the positive x-axis, on
/// the ellipse inscribed in `bounds`. The arc is split into segments of at
/// most 90°, each approximated by one cubic Bézier.
fn arc_path(bounds: &Rect, start_angle: f32, sweep_angle: f32) -> Option<tiny_skia::Path> {
    if bounds.is_empty() || sweep_angle == 0.0 {
        return None;
    }
    let rx = bounds.width / 2.0;
    let ry = bounds.height / 2.0;
    let center = Point::new(bounds.x + rx, bounds.y + ry);

    // Screen y grows downwards, so counter-clockwise means decreasing y.
    let point_at = |angle: f32| {
        Point::new(
            rx.mul_add(angle.cos(), center.x),
            (-ry).mul_add(angle.sin(), center.y),
        )
    };
    let tangent_at = |angle: f32| Point::new(-rx * angle.sin(), -ry * angle.cos());

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let segments = (sweep_angle.abs() / 90.0).ceil().max(1.0) as u32;
    #[allow(clippy::cast_precision_loss)]
    let step = (sweep_angle / segments as f32).to_radians();
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut builder = PathBuilder::new();
    let mut angle = start_angle.to_radians();
    let start = point_at(angle);
    builder.move_to(start.x, start.y);
    for _ in 0..segments {
        let next = angle + step;
        let p0 = point_at(angle);
        let p3 = point_at(next);
        let t0 = tangent_at(angle);
        let t3 = tangent_at(next);
        builder.cubic_to(
            k.mul_add(t0.x, p0.x),
            k.mul_add(t0.y, p0.y),
            (-k).mul_add(t3.x, p3.x),
            (-k).mul_add(t3.y, p3.y),
            p3.x,
            p3.y,
        );
        angle = next;
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_path_quarter_ends_on_axes() {
        let path = arc_path(&Rect::new(0.0, 0.0, 20.0, 20.0), 90.0, 90.0);
        let bounds = path.map(|path| path.bounds());
        let bounds = bounds.as_ref();
        assert!(bounds.is_some_and(|b| (b.left() - 0.0).abs() < 0.01));
        assert!(bounds.is_some_and(|b| (b.top() - 0.0).abs() < 0.01));
        assert!(bounds.is_some_and(|b| (b.right() - 10.0).abs() < 0.01));
        assert!(bounds.is_some_and(|b| (b.bottom() - 10.0).abs() < 0.01));
    }

    #[test]
    fn test_arc_path_rejects_empty_sweep() {
        assert!(arc_path(&Rect::new(0.0, 0.0, 20.0, 20.0), 0.0, 0.0).is_none());
        assert!(arc_path(&Rect::new(0.0, 0.0, 0.0, 20.0), 0.0, 90.0).is_none());
    }
}

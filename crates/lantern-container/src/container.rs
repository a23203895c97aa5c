//! The document container: the object a layout engine paints through.
//!
//! The layout engine calls the container once per paint primitive for each
//! visible box, in paint order. The container resolves URLs against the
//! current document base, looks images up in its pixmap cache, hands the
//! geometry to the painters in `lantern_paint`, and records the result on
//! the caller's [`DisplayList`]. Nothing a paint call runs into is
//! propagated: problems are reported once through the warning log and
//! painting continues.

use std::collections::HashMap;

use lantern_common::url::{DocumentBase, resolve_url, url_directory};
use lantern_common::warning::{clear_warnings, warn_once};
use lantern_paint::issue::report_all;
use lantern_paint::{
    BackgroundCompositor, BackgroundLayer, BorderSet, Color, CornerRadii, CursorShape,
    DisplayCommand, DisplayList, FontDescriptor, ListMarker, PixmapCache, Rect, Region, Size,
    TextDecoration, TextTransform, corner_clip_region, cursor_shape, paint_borders, paint_marker,
    parse_family_list, transform_text,
};

use crate::config::ContainerConfig;
use crate::error::ContainerError;
use crate::fonts::{FontHandle, FontLibrary, FontMetrics, next_container_id};
use crate::host::HostCallbacks;
use crate::image_loader::ImageLoaderPipeline;
use crate::media::{MediaFeatures, MediaType};

/// A font created for the layout engine, alive until deleted.
#[derive(Debug)]
struct LoadedFont {
    descriptor: FontDescriptor,
    metrics: FontMetrics,
}

/// The container between a layout engine and a host application.
///
/// Loading (`&mut self`) and painting (`&self`) are separate borrows, so
/// the pixmap cache cannot change while a paint call reads it.
pub struct DocumentContainer<H: HostCallbacks> {
    config: ContainerConfig,
    host: H,
    /// Identity stamped on every font handle this container issues.
    instance: u64,
    document: DocumentBase,
    images: PixmapCache,
    decoder: ImageLoaderPipeline,
    font_library: FontLibrary,
    fonts: HashMap<u64, LoadedFont>,
    /// Active clips, outermost first.
    clips: Vec<Region>,
    cursor: CursorShape,
}

impl<H: HostCallbacks> DocumentContainer<H> {
    /// Create a container using the system fonts.
    #[must_use]
    pub fn new(config: ContainerConfig, host: H) -> Self {
        Self::with_fonts(config, host, FontLibrary::system())
    }

    /// Create a container drawing text with `font_library`.
    #[must_use]
    pub fn with_fonts(config: ContainerConfig, host: H, font_library: FontLibrary) -> Self {
        Self {
            config,
            host,
            instance: next_container_id(),
            document: DocumentBase::default(),
            images: PixmapCache::new(),
            decoder: ImageLoaderPipeline::new(),
            font_library,
            fonts: HashMap::new(),
            clips: Vec::new(),
            cursor: CursorShape::Arrow,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// The host application.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Decoded images, keyed by resolved URL.
    #[must_use]
    pub const fn images(&self) -> &PixmapCache {
        &self.images
    }

    /// The faces text is drawn with; hand this to the renderer.
    #[must_use]
    pub const fn font_library(&self) -> &FontLibrary {
        &self.font_library
    }

    /// The current document base URL.
    #[must_use]
    pub const fn document_base(&self) -> &DocumentBase {
        &self.document
    }

    /// The pointer shape last reported to the host.
    #[must_use]
    pub const fn cursor(&self) -> CursorShape {
        self.cursor
    }

    // ---------------------------------------------------------------------
    // Document and URLs
    // ---------------------------------------------------------------------

    /// Start a new document at `base_url`.
    ///
    /// The previous base is replaced, not merged, and the warning log is
    /// reset so the new document reports its own problems.
    ///
    /// The warning log is process-wide: starting a document in any container
    /// re-arms the deduplicated warnings of every other container as well.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.document.set(base_url);
        clear_warnings();
    }

    /// Resolve a reference against `base`, or the document base when
    /// `base` is empty.
    #[must_use]
    pub fn resolve_url(&self, reference: &str, base: &str) -> String {
        resolve_url(reference, base, &self.document)
    }

    /// Fetch a stylesheet.
    ///
    /// Returns the stylesheet text (decoded as UTF-8, invalid sequences
    /// replaced) and the base its own relative URLs resolve against: the
    /// resolved URL up to its last `/`.
    pub fn import_css(&mut self, url: &str, base: &str) -> (String, String) {
        let resolved = self.resolve_url(url, base);
        let new_base = url_directory(&resolved).to_owned();
        let bytes = self.host.load_data(&resolved);
        (String::from_utf8_lossy(&bytes).into_owned(), new_base)
    }

    // ---------------------------------------------------------------------
    // Images
    // ---------------------------------------------------------------------

    /// Load an image into the pixmap cache.
    ///
    /// Already-cached URLs are not fetched again. A fetch or decode failure
    /// caches nothing; later paints of the image report a missing pixmap.
    pub fn load_image(&mut self, src: &str, base: &str) {
        if src.is_empty() {
            return;
        }
        let url = self.resolve_url(src, base);
        if self.images.contains(&url) {
            return;
        }

        let bytes = self.host.load_data(&url);
        match self.decoder.decode(&bytes, &url) {
            Ok(image) => self.images.insert(url, image),
            Err(e) => {
                let _ = warn_once("image", &format!("failed to load '{url}': {e}"));
            }
        }
    }

    /// Intrinsic size of a loaded image.
    ///
    /// An empty source yields zero silently; an image that is not loaded
    /// yields zero and a warning.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn image_size(&self, src: &str, base: &str) -> Size {
        if src.is_empty() {
            return Size::default();
        }
        let url = self.resolve_url(src, base);
        self.images.get(&url).map_or_else(
            || {
                let _ = warn_once("image", &format!("pixmap not loaded for '{url}'"));
                Size::default()
            },
            |image| Size::new(image.width() as f32, image.height() as f32),
        )
    }

    // ---------------------------------------------------------------------
    // Painting
    // ---------------------------------------------------------------------

    /// Paint a box's background layers (index 0 topmost).
    pub fn draw_background(&self, list: &mut DisplayList, layers: &[BackgroundLayer]) {
        self.clipped(list, |list| {
            let compositor = BackgroundCompositor::new(&self.images, &self.document);
            report_all(&compositor.paint(layers, list));
        });
    }

    /// Paint a box's borders.
    pub fn draw_borders(&self, list: &mut DisplayList, borders: &BorderSet, draw_pos: &Rect) {
        self.clipped(list, |list| {
            report_all(&paint_borders(borders, draw_pos, list));
        });
    }

    /// Paint a list item's marker.
    pub fn draw_list_marker(&self, list: &mut DisplayList, marker: &ListMarker) {
        self.clipped(list, |list| {
            report_all(&paint_marker(marker, &self.images, &self.document, list));
        });
    }

    /// Draw a run of text with its top-left corner at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::UnknownFont`] if `font` was not issued by
    /// this container or was already deleted.
    pub fn draw_text(
        &self,
        list: &mut DisplayList,
        text: &str,
        font: &FontHandle,
        color: Color,
        pos: &Rect,
    ) -> Result<(), ContainerError> {
        let loaded = self.loaded_font(font)?;
        self.clipped(list, |list| {
            list.push(DisplayCommand::DrawText {
                rect: *pos,
                text: text.to_owned(),
                font: loaded.descriptor.clone(),
                color,
            });
        });
        Ok(())
    }

    /// Intersect the clip of every later paint call with a rounded box.
    pub fn set_clip(&mut self, pos: &Rect, radii: &CornerRadii) {
        self.clips.push(corner_clip_region(pos, radii));
    }

    /// Remove the innermost clip set by [`Self::set_clip`].
    pub fn del_clip(&mut self) {
        let _ = self.clips.pop();
    }

    /// Run `paint` inside the intersection of the active clips.
    fn clipped(&self, list: &mut DisplayList, paint: impl FnOnce(&mut DisplayList)) {
        if self.clips.is_empty() {
            paint(list);
            return;
        }
        list.save();
        for region in &self.clips {
            list.clip(region.clone());
        }
        paint(list);
        list.restore();
    }

    // ---------------------------------------------------------------------
    // Fonts and text
    // ---------------------------------------------------------------------

    /// Create a font from a `font-family` list and report its metrics.
    ///
    /// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
    pub fn create_font(
        &mut self,
        face_names: &str,
        size: f32,
        weight: u16,
        italic: bool,
        decoration: TextDecoration,
    ) -> (FontHandle, FontMetrics) {
        let mut families = parse_family_list(face_names);
        if families.is_empty() {
            families.push(self.config.default_font_name.clone());
        }
        let descriptor = FontDescriptor {
            families,
            size,
            weight,
            italic,
            decoration,
        };
        let metrics = self.font_library.metrics(&descriptor);

        let handle = FontHandle::issue(self.instance);
        let _ = self.fonts.insert(
            handle.id(),
            LoadedFont {
                descriptor,
                metrics,
            },
        );
        (handle, metrics)
    }

    /// Release a font.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::UnknownFont`] if `font` was not issued by
    /// this container.
    pub fn delete_font(&mut self, font: FontHandle) -> Result<(), ContainerError> {
        if font.owner() != self.instance {
            return Err(ContainerError::UnknownFont { id: font.id() });
        }
        self.fonts
            .remove(&font.id())
            .map(|_| ())
            .ok_or(ContainerError::UnknownFont { id: font.id() })
    }

    /// Metrics of a live font.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::UnknownFont`] for a foreign handle.
    pub fn font_metrics(&self, font: &FontHandle) -> Result<FontMetrics, ContainerError> {
        Ok(self.loaded_font(font)?.metrics)
    }

    /// Advance width of `text` in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::UnknownFont`] for a foreign handle.
    pub fn text_width(&self, font: &FontHandle, text: &str) -> Result<f32, ContainerError> {
        let loaded = self.loaded_font(font)?;
        Ok(self.font_library.text_width(&loaded.descriptor, text))
    }

    fn loaded_font(&self, font: &FontHandle) -> Result<&LoadedFont, ContainerError> {
        if font.owner() != self.instance {
            return Err(ContainerError::UnknownFont { id: font.id() });
        }
        self.fonts
            .get(&font.id())
            .ok_or(ContainerError::UnknownFont { id: font.id() })
    }

    /// [§ 2.1 'text-transform'](https://www.w3.org/TR/css-text-3/#text-transform-property)
    #[must_use]
    pub fn transform_text(&self, text: &str, transform: TextTransform) -> String {
        transform_text(text, transform)
    }

    /// Convert points to pixels at the configured resolution.
    #[must_use]
    pub fn pt_to_px(&self, pt: f32) -> f32 {
        pt * self.config.dpi / 72.0
    }

    /// Pixel size of `medium`.
    #[must_use]
    pub const fn default_font_size(&self) -> f32 {
        self.config.default_font_size
    }

    /// Family used when a style names none.
    #[must_use]
    pub fn default_font_name(&self) -> &str {
        &self.config.default_font_name
    }

    // ---------------------------------------------------------------------
    // Shell
    // ---------------------------------------------------------------------

    /// Pass a new document title to the host.
    pub fn set_caption(&mut self, caption: &str) {
        self.host.set_caption(caption);
    }

    /// Resolve a clicked link against the document base and open it.
    pub fn on_anchor_click(&mut self, url: &str) {
        let resolved = self.resolve_url(url, "");
        self.host.open_link(&resolved);
    }

    /// Show the cursor named by a CSS `cursor` value.
    ///
    /// Unknown names show the arrow and are reported. The host is only
    /// notified when the shape actually changes.
    pub fn set_cursor(&mut self, name: &str) {
        let shape = cursor_shape(name).unwrap_or_else(|issue| {
            issue.report();
            CursorShape::Arrow
        });
        if shape != self.cursor {
            self.cursor = shape;
            self.host.set_cursor(shape);
        }
    }

    // ---------------------------------------------------------------------
    // Environment
    // ---------------------------------------------------------------------

    /// The client area, at the origin with the configured viewport size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn client_rect(&self) -> Rect {
        let viewport = self.config.viewport;
        Rect::new(0.0, 0.0, viewport.width as f32, viewport.height as f32)
    }

    /// [Media Queries § 4](https://www.w3.org/TR/mediaqueries-4/#mq-features)
    #[must_use]
    pub const fn media_features(&self) -> MediaFeatures {
        let viewport = self.config.viewport;
        MediaFeatures {
            media_type: MediaType::Screen,
            width: viewport.width,
            height: viewport.height,
            device_width: viewport.width,
            device_height: viewport.height,
            color: 8,
            color_index: 256,
            monochrome: 0,
            resolution: self.config.dpi,
        }
    }

    /// The configured language and culture.
    #[must_use]
    pub fn language(&self) -> (&str, &str) {
        (&self.config.language, &self.config.culture)
    }
}

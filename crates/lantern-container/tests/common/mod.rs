//! Shared fixtures for the container integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;

use lantern_container::{ContainerConfig, DocumentContainer, FontLibrary, HostCallbacks};
use lantern_paint::CursorShape;

/// A host serving resources from memory and recording every callback.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub resources: HashMap<String, Vec<u8>>,
    pub loads: Vec<String>,
    pub captions: Vec<String>,
    pub cursors: Vec<CursorShape>,
    pub links: Vec<String>,
}

impl RecordingHost {
    pub fn serve(mut self, url: &str, bytes: Vec<u8>) -> Self {
        let _ = self.resources.insert(url.to_string(), bytes);
        self
    }
}

impl HostCallbacks for RecordingHost {
    fn load_data(&mut self, url: &str) -> Vec<u8> {
        self.loads.push(url.to_string());
        self.resources.get(url).cloned().unwrap_or_default()
    }

    fn set_caption(&mut self, caption: &str) {
        self.captions.push(caption.to_string());
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursors.push(cursor);
    }

    fn open_link(&mut self, url: &str) {
        self.links.push(url.to_string());
    }
}

/// A container with estimated font metrics, based at `base_url`.
pub fn container_with(host: RecordingHost, base_url: &str) -> DocumentContainer<RecordingHost> {
    let mut container =
        DocumentContainer::with_fonts(ContainerConfig::default(), host, FontLibrary::empty());
    container.set_base_url(base_url);
    container
}

/// PNG bytes of a single-color image.
pub fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("encoding a PNG in memory cannot fail");
    bytes.into_inner()
}

/// A minimal SVG document of the given size filled with one color.
pub fn svg_bytes(width: u32, height: u32, fill: &str) -> Vec<u8> {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><rect width="{width}" height="{height}" fill="{fill}"/></svg>"#
    )
    .into_bytes()
}

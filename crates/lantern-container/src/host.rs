//! The application side of the container.
//!
//! The container never talks to the network or the window system itself.
//! It asks its host for resource bytes and tells it about caption, cursor,
//! and navigation changes.

use lantern_common::net::fetch_bytes;
use lantern_common::warning::warn_once;
use lantern_paint::CursorShape;

/// Callbacks the embedding application provides.
pub trait HostCallbacks {
    /// Fetch the resource at a resolved URL.
    ///
    /// An empty result means the resource is unavailable; for images that
    /// ends in a decode failure and a missing-pixmap warning.
    fn load_data(&mut self, url: &str) -> Vec<u8>;

    /// The document title changed.
    fn set_caption(&mut self, caption: &str);

    /// The pointer shape over the document changed.
    fn set_cursor(&mut self, cursor: CursorShape);

    /// The user activated a link to a resolved URL.
    fn open_link(&mut self, url: &str);
}

/// A host that fetches through [`fetch_bytes`] and records notifications.
///
/// `http(s)` URLs go through the network, `data:` URLs are decoded in
/// place, anything else is read from the filesystem.
#[derive(Debug, Clone, Default)]
pub struct DefaultHost {
    caption: Option<String>,
    cursor: Option<CursorShape>,
    opened_links: Vec<String>,
}

impl DefaultHost {
    /// Create a host with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last caption set, if any.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// The last cursor set, if any.
    #[must_use]
    pub const fn cursor(&self) -> Option<CursorShape> {
        self.cursor
    }

    /// Every link opened, oldest first.
    #[must_use]
    pub fn opened_links(&self) -> &[String] {
        &self.opened_links
    }
}

impl HostCallbacks for DefaultHost {
    fn load_data(&mut self, url: &str) -> Vec<u8> {
        match fetch_bytes(url) {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = warn_once("host", &e.to_string());
                Vec::new()
            }
        }
    }

    fn set_caption(&mut self, caption: &str) {
        self.caption = Some(caption.to_owned());
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = Some(cursor);
    }

    fn open_link(&mut self, url: &str) {
        self.opened_links.push(url.to_owned());
    }
}

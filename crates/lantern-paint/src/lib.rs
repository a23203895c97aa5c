//! Lantern Paint - rounded-box geometry and paint primitives
//!
//! This crate turns the paint requests of a layout engine (background
//! layers, borders, list markers) into a [`DisplayList`]:
//!
//! - [`geometry`]: boxes, corner radii and the rounded clip region
//! - [`background`]: layered background compositing
//! - [`border`]: per-edge border stroking
//! - [`marker`]: list bullets
//! - [`cursor`]: cursor name lookup
//!
//! [CSS Backgrounds and Borders Module Level 3](https://www.w3.org/TR/css-backgrounds-3/)

pub mod background;
pub mod border;
pub mod color;
pub mod cursor;
pub mod display_list;
pub mod geometry;
pub mod issue;
pub mod marker;
pub mod pixmap;
pub mod text;

pub use background::{BackgroundCompositor, BackgroundLayer, BackgroundRepeat, ImageSource};
pub use border::{BorderEdge, BorderSet, BorderStyle, paint_borders};
pub use color::Color;
pub use cursor::{CursorKeyword, CursorShape, cursor_shape};
pub use display_list::{DisplayCommand, DisplayList, Pen, PenStyle};
pub use geometry::{
    Corner, CornerRadii, CornerRadius, Point, Rect, Region, RegionPiece, Size, corner_clip_region,
};
pub use issue::PaintIssue;
pub use marker::{ListMarker, ListStyleType, MarkerShape, paint_marker};
pub use pixmap::PixmapCache;
pub use text::{FontDescriptor, TextDecoration, TextTransform, parse_family_list, transform_text};

//! Display List - a sequence of drawing commands
//!
//! The display list is the paint surface the container draws on. It is
//! borrowed mutably for the duration of one paint call and executed later
//! by a renderer, so the painters never see a concrete graphics API.

use crate::color::Color;
use crate::geometry::{Point, Rect, Region};
use crate::text::FontDescriptor;

/// Dash pattern of a stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PenStyle {
    /// A continuous line.
    #[default]
    Solid,
    /// Dashes three times as long as the line is wide.
    Dash,
    /// Dots as long as the line is wide, one line-width apart.
    Dot,
}

/// Stroke parameters for lines and arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels; zero strokes a one-pixel hairline.
    pub width: f32,
    /// Dash pattern.
    pub style: PenStyle,
}

impl Pen {
    /// A solid pen.
    #[must_use]
    pub const fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: PenStyle::Solid,
        }
    }
}

/// A single drawing command.
///
/// Commands are added to the display list in painting order (back to front).
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    /// Push the current clip onto the clip stack.
    Save,

    /// Pop the clip stack, restoring the clip in effect at the matching
    /// [`DisplayCommand::Save`].
    Restore,

    /// Intersect the current clip with a region.
    ///
    /// Clips compose by intersection: every clip pushed since the last
    /// restore stays in effect.
    ClipRegion(Region),

    /// Fill a rectangle with a solid color.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },

    /// Fill the ellipse inscribed in a rectangle.
    FillEllipse {
        /// Bounding box of the ellipse.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },

    /// Stroke the outline of the ellipse inscribed in a rectangle.
    StrokeEllipse {
        /// Bounding box of the ellipse.
        bounds: Rect,
        /// Stroke parameters.
        pen: Pen,
    },

    /// Stroke a straight line.
    StrokeLine {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke parameters.
        pen: Pen,
    },

    /// Stroke part of the ellipse inscribed in `bounds`.
    ///
    /// Angles are in degrees, counter-clockwise from the positive x-axis
    /// (screen y grows downwards, so 90° is the top of the ellipse).
    StrokeArc {
        /// Bounding box of the full ellipse.
        bounds: Rect,
        /// Where the arc starts.
        start_angle: f32,
        /// How far the arc sweeps counter-clockwise.
        sweep_angle: f32,
        /// Stroke parameters.
        pen: Pen,
    },

    /// Draw a cached image scaled into a rectangle.
    ///
    /// The `url` is the resolved address used as the pixmap cache key.
    DrawImage {
        /// Destination rectangle.
        dest: Rect,
        /// Resolved image URL.
        url: String,
    },

    /// Draw a run of text inside a rectangle.
    DrawText {
        /// Box the run occupies; text starts at its top-left.
        rect: Rect,
        /// The text content to draw.
        text: String,
        /// Face to draw with.
        font: FontDescriptor,
        /// Text color.
        color: Color,
    },
}

/// A list of drawing commands in painting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Push the current clip; pair with [`DisplayList::restore`].
    pub fn save(&mut self) {
        self.push(DisplayCommand::Save);
    }

    /// Pop the clip pushed by the matching [`DisplayList::save`].
    pub fn restore(&mut self) {
        self.push(DisplayCommand::Restore);
    }

    /// Intersect the current clip with `region`.
    pub fn clip(&mut self, region: Region) {
        self.push(DisplayCommand::ClipRegion(region));
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

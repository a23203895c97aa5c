//! Border painting.
//!
//! [CSS Backgrounds and Borders § 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
//!
//! Each edge is stroked on its own: a straight segment between the
//! adjacent corners, plus (for the top and bottom edges) the quarter arcs
//! of the corner ellipses. The arcs come from the same
//! [`Corner::ellipse_box`] the background clip uses.

use strum_macros::{Display, EnumString};

use crate::color::Color;
use crate::display_list::{DisplayCommand, DisplayList, Pen, PenStyle};
use crate::geometry::{Corner, CornerRadii, Point, Rect};
use crate::issue::PaintIssue;

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum BorderStyle {
    /// "No border."
    #[default]
    None,
    /// "Same as 'none', but has different behavior in the border conflict
    /// resolution for border-collapsed tables."
    Hidden,
    /// "A series of round dots."
    Dotted,
    /// "A series of square-ended dashes."
    Dashed,
    /// "A single line segment."
    Solid,
    /// "Two parallel solid lines with some space between them."
    Double,
    /// "Looks as if it were carved in the canvas."
    Groove,
    /// "Looks as if it were coming out of the canvas."
    Ridge,
    /// "Looks as if the content on the inside of the border is sunken into
    /// the canvas."
    Inset,
    /// "Looks as if the content on the inside of the border is coming out
    /// of the canvas."
    Outset,
}

impl BorderStyle {
    /// False for `none` and `hidden`, whose edges are not painted.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None | Self::Hidden)
    }

    /// The native pen pattern for this style, if there is one.
    #[must_use]
    pub const fn pen_style(self) -> Option<PenStyle> {
        match self {
            Self::Solid => Some(PenStyle::Solid),
            Self::Dashed => Some(PenStyle::Dash),
            Self::Dotted => Some(PenStyle::Dot),
            Self::None
            | Self::Hidden
            | Self::Double
            | Self::Groove
            | Self::Ridge
            | Self::Inset
            | Self::Outset => None,
        }
    }
}

/// One side of a box's border.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderEdge {
    /// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    pub style: BorderStyle,
    /// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub width: f32,
    /// [§ 4.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    pub color: Color,
}

impl BorderEdge {
    /// Create an edge.
    #[must_use]
    pub const fn new(style: BorderStyle, width: f32, color: Color) -> Self {
        Self {
            style,
            width,
            color,
        }
    }
}

/// The four borders of a box and their shared corner radii.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderSet {
    /// Top edge.
    pub top: BorderEdge,
    /// Right edge.
    pub right: BorderEdge,
    /// Bottom edge.
    pub bottom: BorderEdge,
    /// Left edge.
    pub left: BorderEdge,
    /// Corner rounding shared by all four edges.
    pub radii: CornerRadii,
}

impl BorderSet {
    /// Every edge the same, with square corners.
    #[must_use]
    pub const fn uniform(edge: BorderEdge) -> Self {
        Self {
            top: edge,
            right: edge,
            bottom: edge,
            left: edge,
            radii: CornerRadii::ZERO,
        }
    }
}

/// Paint the borders of the box at `draw_pos` and return the problems met.
///
/// Edges are independent: each gets its own pen and none is merged with
/// its neighbours. `none` and `hidden` edges draw nothing.
pub fn paint_borders(borders: &BorderSet, draw_pos: &Rect, list: &mut DisplayList) -> Vec<PaintIssue> {
    let mut issues = Vec::new();
    let radii = borders.radii.clamped_to(draw_pos);
    let tl = radii.top_left;
    let tr = radii.top_right;
    let br = radii.bottom_right;
    let bl = radii.bottom_left;

    if let Some(pen) = edge_pen(&borders.top, &mut issues) {
        let y = draw_pos.top();
        line(list, pen, (draw_pos.left() + tl.x, y), (draw_pos.right() - tr.x, y));
        corner_arc(list, pen, draw_pos, &radii, Corner::TopLeft);
        corner_arc(list, pen, draw_pos, &radii, Corner::TopRight);
    }

    if let Some(pen) = edge_pen(&borders.bottom, &mut issues) {
        let y = draw_pos.bottom();
        line(list, pen, (draw_pos.left() + bl.x, y), (draw_pos.right() - br.x, y));
        corner_arc(list, pen, draw_pos, &radii, Corner::BottomLeft);
        corner_arc(list, pen, draw_pos, &radii, Corner::BottomRight);
    }

    if let Some(pen) = edge_pen(&borders.left, &mut issues) {
        let x = draw_pos.left();
        line(list, pen, (x, draw_pos.top() + tl.y), (x, draw_pos.bottom() - bl.y));
    }

    if let Some(pen) = edge_pen(&borders.right, &mut issues) {
        let x = draw_pos.right();
        line(list, pen, (x, draw_pos.top() + tr.y), (x, draw_pos.bottom() - br.y));
    }

    issues
}

/// The pen for an edge, or `None` if the edge is not painted.
fn edge_pen(edge: &BorderEdge, issues: &mut Vec<PaintIssue>) -> Option<Pen> {
    if !edge.style.is_visible() {
        return None;
    }
    let style = edge.style.pen_style().unwrap_or_else(|| {
        issues.push(PaintIssue::UnsupportedBorderStyle(edge.style));
        PenStyle::Solid
    });
    Some(Pen {
        color: edge.color,
        width: edge.width,
        style,
    })
}

fn line(list: &mut DisplayList, pen: Pen, from: (f32, f32), to: (f32, f32)) {
    list.push(DisplayCommand::StrokeLine {
        from: Point::new(from.0, from.1),
        to: Point::new(to.0, to.1),
        pen,
    });
}

fn corner_arc(list: &mut DisplayList, pen: Pen, draw_pos: &Rect, radii: &CornerRadii, corner: Corner) {
    let radius = radii.get(corner);
    if radius.is_square() {
        return;
    }
    let (start_angle, sweep_angle) = corner.arc_angles();
    list.push(DisplayCommand::StrokeArc {
        bounds: corner.ellipse_box(draw_pos, radius),
        start_angle,
        sweep_angle,
        pen,
    });
}

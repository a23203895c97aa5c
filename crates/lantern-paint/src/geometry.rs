//! Rounded-box geometry shared by the background and border painters.
//!
//! [CSS Backgrounds and Borders § 5 Rounded Corners](https://www.w3.org/TR/css-backgrounds-3/#corners)
//!
//! Both painters need the same corner ellipses: the background compositor
//! clips to them, the border renderer strokes arcs along them. Keeping the
//! math in [`corner_clip_region`] and [`Corner::ellipse_box`] means the two
//! can never disagree about where a corner is.

/// A rectangle in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True if the point lies inside (left/top inclusive, right/bottom
    /// exclusive).
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// A point in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// "The two length or percentage values of the 'border-*-radius' properties
/// define the radii of a quarter ellipse that defines the shape of the
/// corner of the outer border edge."
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadius {
    /// Horizontal semi-axis.
    pub x: f32,
    /// Vertical semi-axis.
    pub y: f32,
}

impl CornerRadius {
    /// A circular corner.
    #[must_use]
    pub const fn circular(radius: f32) -> Self {
        Self {
            x: radius,
            y: radius,
        }
    }

    /// An elliptical corner.
    #[must_use]
    pub const fn elliptical(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// "If either length is zero, the corner is square, not rounded."
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.x <= 0.0 || self.y <= 0.0
    }

    fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    fn non_negative(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }
}

/// The four corner radii of a box, clockwise from the top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadii {
    /// Top-left corner.
    pub top_left: CornerRadius,
    /// Top-right corner.
    pub top_right: CornerRadius,
    /// Bottom-right corner.
    pub bottom_right: CornerRadius,
    /// Bottom-left corner.
    pub bottom_left: CornerRadius,
}

impl CornerRadii {
    /// Square corners everywhere.
    pub const ZERO: Self = Self::uniform(CornerRadius { x: 0.0, y: 0.0 });

    /// The same radius on every corner.
    #[must_use]
    pub const fn uniform(radius: CornerRadius) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// The radius of one corner.
    #[must_use]
    pub const fn get(&self, corner: Corner) -> CornerRadius {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// True when every corner is square.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        Corner::ALL.iter().all(|&corner| self.get(corner).is_square())
    }

    /// [§ 5.5 Overlapping Curves](https://www.w3.org/TR/css-backgrounds-3/#corner-overlap)
    ///
    /// "Corner curves must not overlap: When the sum of any two adjacent
    /// border radii exceeds the size of the border box, UAs must
    /// proportionally reduce the used values of all border radii until none
    /// of them overlap."
    ///
    /// "Let f = min(Li/Si), where i ∈ {top, right, bottom, left}, Si is the
    /// sum of the two corresponding radii of the corners on side i, and
    /// Ltop = Lbottom = the width of the box, and Lleft = Lright = the height
    /// of the box. If f < 1, then all corner radii are reduced by
    /// multiplying them by f."
    ///
    /// Negative radii are treated as zero.
    #[must_use]
    pub fn clamped_to(&self, rect: &Rect) -> Self {
        let radii = Self {
            top_left: self.top_left.non_negative(),
            top_right: self.top_right.non_negative(),
            bottom_right: self.bottom_right.non_negative(),
            bottom_left: self.bottom_left.non_negative(),
        };
        let width = rect.width.max(0.0);
        let height = rect.height.max(0.0);

        let sides = [
            (width, radii.top_left.x + radii.top_right.x),
            (height, radii.top_right.y + radii.bottom_right.y),
            (width, radii.bottom_left.x + radii.bottom_right.x),
            (height, radii.top_left.y + radii.bottom_left.y),
        ];
        let factor = sides
            .iter()
            .filter(|(_, sum)| *sum > 0.0)
            .map(|(length, sum)| length / sum)
            .fold(1.0_f32, f32::min);

        if factor < 1.0 {
            Self {
                top_left: radii.top_left.scaled(factor),
                top_right: radii.top_right.scaled(factor),
                bottom_right: radii.bottom_right.scaled(factor),
                bottom_left: radii.bottom_left.scaled(factor),
            }
        } else {
            radii
        }
    }
}

/// One corner of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left.
    TopLeft,
    /// Top-right.
    TopRight,
    /// Bottom-right.
    BottomRight,
    /// Bottom-left.
    BottomLeft,
}

impl Corner {
    /// All corners, clockwise from the top-left.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// The bounding box of this corner's ellipse: `2·rx` by `2·ry`, anchored
    /// at the corner of `border_box`.
    #[must_use]
    pub fn ellipse_box(self, border_box: &Rect, radius: CornerRadius) -> Rect {
        let width = 2.0 * radius.x;
        let height = 2.0 * radius.y;
        let x = match self {
            Self::TopLeft | Self::BottomLeft => border_box.left(),
            Self::TopRight | Self::BottomRight => border_box.right() - width,
        };
        let y = match self {
            Self::TopLeft | Self::TopRight => border_box.top(),
            Self::BottomLeft | Self::BottomRight => border_box.bottom() - height,
        };
        Rect::new(x, y, width, height)
    }

    /// Start angle and sweep, in degrees counter-clockwise from the positive
    /// x-axis, of the quarter arc this corner occupies on its ellipse.
    #[must_use]
    pub const fn arc_angles(self) -> (f32, f32) {
        match self {
            Self::TopRight => (0.0, 90.0),
            Self::TopLeft => (90.0, 90.0),
            Self::BottomLeft => (180.0, 90.0),
            Self::BottomRight => (270.0, 90.0),
        }
    }
}

/// One piece of a [`Region`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionPiece {
    /// The full rectangle.
    Rect(Rect),
    /// The ellipse inscribed in the rectangle.
    Ellipse(Rect),
}

impl RegionPiece {
    /// The rectangle bounding this piece.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Self::Rect(rect) | Self::Ellipse(rect) => *rect,
        }
    }

    /// True if the point lies inside this piece.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        match self {
            Self::Rect(rect) => rect.contains(x, y),
            Self::Ellipse(bounds) => {
                if bounds.is_empty() {
                    return false;
                }
                let rx = bounds.width / 2.0;
                let ry = bounds.height / 2.0;
                let dx = (x - (bounds.x + rx)) / rx;
                let dy = (y - (bounds.y + ry)) / ry;
                dx.mul_add(dx, dy * dy) <= 1.0
            }
        }
    }
}

/// A set of pixels: the union of rectangles and ellipses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    pieces: Vec<RegionPiece>,
}

impl Region {
    /// Add a piece to the union. Zero-area pieces are dropped.
    pub fn add(&mut self, piece: RegionPiece) {
        if !piece.bounds().is_empty() {
            self.pieces.push(piece);
        }
    }

    /// The pieces making up the union.
    #[must_use]
    pub fn pieces(&self) -> &[RegionPiece] {
        &self.pieces
    }

    /// True when the region covers nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// True if any piece contains the point.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.pieces.iter().any(|piece| piece.contains(x, y))
    }

    /// The smallest rectangle containing every piece.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.pieces
            .iter()
            .map(RegionPiece::bounds)
            .reduce(|acc, rect| acc.union(&rect))
    }

    /// If the region is a single rectangle, that rectangle.
    #[must_use]
    pub fn as_rect(&self) -> Option<Rect> {
        match self.pieces.as_slice() {
            [RegionPiece::Rect(rect)] => Some(*rect),
            _ => None,
        }
    }
}

/// Build the clip region of a rounded box.
///
/// [§ 5.3 Corner Clipping](https://www.w3.org/TR/css-backgrounds-3/#corner-clipping)
///
/// "A box's backgrounds, but not its border-image, are clipped to the
/// appropriate curve."
///
/// The silhouette is decomposed into seven pieces so that it can be used as
/// an exact clip without arc-path clipping:
///
/// ```text
///   ╭───┬───────────┬───╮
///   │ TL│     B     │TR │   B: top band, height tl.ry
///   ├───┴───────────┴───┤
///   │                   │
///   │         A         │   A: middle band, full width
///   │                   │
///   ├───┬───────────┬───┤
///   │ BL│     C     │BR │   C: bottom band, height bl.ry
///   ╰───┴───────────┴───╯
/// ```
///
/// plus one ellipse per corner inscribed in its `2·rx × 2·ry` box. Radii
/// are clamped to the box first. With all radii zero the result is exactly
/// `border_box`.
///
/// The union reproduces the rounded silhouette exactly when the two top
/// corners share a vertical radius and the two bottom corners do.
#[must_use]
pub fn corner_clip_region(border_box: &Rect, radii: &CornerRadii) -> Region {
    let radii = radii.clamped_to(border_box);
    let tl = radii.top_left;
    let tr = radii.top_right;
    let br = radii.bottom_right;
    let bl = radii.bottom_left;

    let mut region = Region::default();

    // A: vertical middle band
    region.add(RegionPiece::Rect(Rect::new(
        border_box.x,
        border_box.y + tl.y,
        border_box.width,
        border_box.height - tl.y - bl.y,
    )));

    // B: top band
    region.add(RegionPiece::Rect(Rect::new(
        border_box.x + tl.x,
        border_box.y,
        border_box.width - tl.x - tr.x,
        tl.y,
    )));

    // C: bottom band
    region.add(RegionPiece::Rect(Rect::new(
        border_box.x + bl.x,
        border_box.bottom() - bl.y,
        border_box.width - bl.x - br.x,
        bl.y,
    )));

    for corner in Corner::ALL {
        region.add(RegionPiece::Ellipse(
            corner.ellipse_box(border_box, radii.get(corner)),
        ));
    }

    region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_boxes_anchor_at_corners() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        let r = CornerRadius::elliptical(5.0, 8.0);
        assert_eq!(
            Corner::TopLeft.ellipse_box(&rect, r),
            Rect::new(10.0, 20.0, 10.0, 16.0)
        );
        assert_eq!(
            Corner::TopRight.ellipse_box(&rect, r),
            Rect::new(100.0, 20.0, 10.0, 16.0)
        );
        assert_eq!(
            Corner::BottomRight.ellipse_box(&rect, r),
            Rect::new(100.0, 54.0, 10.0, 16.0)
        );
        assert_eq!(
            Corner::BottomLeft.ellipse_box(&rect, r),
            Rect::new(10.0, 54.0, 10.0, 16.0)
        );
    }

    #[test]
    fn test_ellipse_piece_contains_center_not_corner() {
        let piece = RegionPiece::Ellipse(Rect::new(0.0, 0.0, 20.0, 10.0));
        assert!(piece.contains(10.0, 5.0));
        assert!(piece.contains(19.5, 5.0));
        assert!(!piece.contains(0.5, 0.5));
    }

    #[test]
    fn test_clamp_leaves_fitting_radii_alone() {
        let radii = CornerRadii::uniform(CornerRadius::circular(10.0));
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(radii.clamped_to(&rect), radii);
    }

    #[test]
    fn test_clamp_scales_all_radii_proportionally() {
        let radii = CornerRadii {
            top_left: CornerRadius::circular(60.0),
            top_right: CornerRadius::circular(60.0),
            bottom_right: CornerRadius::circular(10.0),
            bottom_left: CornerRadius::circular(10.0),
        };
        // Top edge: 100 / 120; right edge: 100 / 70.
        let clamped = radii.clamped_to(&Rect::new(0.0, 0.0, 100.0, 100.0));
        let f = 100.0 / 120.0;
        assert!((clamped.top_left.x - 60.0 * f).abs() < 1e-4);
        assert!((clamped.bottom_left.y - 10.0 * f).abs() < 1e-4);
        assert!((clamped.top_left.x + clamped.top_right.x - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_negative_radii_are_square() {
        let radii = CornerRadii::uniform(CornerRadius::circular(-4.0));
        let clamped = radii.clamped_to(&Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(clamped.is_zero());
    }
}

//! Cursor name lookup.
//!
//! [CSS Basic User Interface § 5.1 'cursor'](https://www.w3.org/TR/css-ui-4/#cursor)
//!
//! The layout engine reports the cursor of the hovered element by name.
//! Names are parsed into [`CursorKeyword`] and mapped through a static
//! table onto the shapes a desktop shell actually provides.

use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::issue::PaintIssue;

/// A CSS cursor keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum CursorKeyword {
    /// `alias`
    #[strum(serialize = "alias")]
    Alias,
    /// `all-scroll`
    #[strum(serialize = "all-scroll")]
    AllScroll,
    /// `auto`
    #[strum(serialize = "auto")]
    Auto,
    /// `cell`
    #[strum(serialize = "cell")]
    Cell,
    /// `context-menu`
    #[strum(serialize = "context-menu")]
    ContextMenu,
    /// `col-resize`
    #[strum(serialize = "col-resize")]
    ColResize,
    /// `copy`
    #[strum(serialize = "copy")]
    Copy,
    /// `crosshair`
    #[strum(serialize = "crosshair")]
    Crosshair,
    /// `default`
    #[strum(serialize = "default")]
    Default,
    /// `e-resize`
    #[strum(serialize = "e-resize")]
    EResize,
    /// `ew-resize`
    #[strum(serialize = "ew-resize")]
    EwResize,
    /// `grab`
    #[strum(serialize = "grab")]
    Grab,
    /// `grabbing`
    #[strum(serialize = "grabbing")]
    Grabbing,
    /// `help`
    #[strum(serialize = "help")]
    Help,
    /// `move`
    #[strum(serialize = "move")]
    Move,
    /// `n-resize`
    #[strum(serialize = "n-resize")]
    NResize,
    /// `ne-resize`
    #[strum(serialize = "ne-resize")]
    NeResize,
    /// `nesw-resize`
    #[strum(serialize = "nesw-resize")]
    NeswResize,
    /// `ns-resize`
    #[strum(serialize = "ns-resize")]
    NsResize,
    /// `nw-resize`
    #[strum(serialize = "nw-resize")]
    NwResize,
    /// `nwse-resize`
    #[strum(serialize = "nwse-resize")]
    NwseResize,
    /// `no-drop`
    #[strum(serialize = "no-drop")]
    NoDrop,
    /// `none`, and the empty name.
    #[strum(serialize = "none", serialize = "")]
    None,
    /// `not-allowed`
    #[strum(serialize = "not-allowed")]
    NotAllowed,
    /// `pointer`
    #[strum(serialize = "pointer")]
    Pointer,
    /// `progress`
    #[strum(serialize = "progress")]
    Progress,
    /// `row-resize`
    #[strum(serialize = "row-resize")]
    RowResize,
    /// `s-resize`
    #[strum(serialize = "s-resize")]
    SResize,
    /// `se-resize`
    #[strum(serialize = "se-resize")]
    SeResize,
    /// `sw-resize`
    #[strum(serialize = "sw-resize")]
    SwResize,
    /// `text`
    #[strum(serialize = "text")]
    Text,
    /// `url`
    #[strum(serialize = "url")]
    Url,
    /// `w-resize`
    #[strum(serialize = "w-resize")]
    WResize,
    /// `wait`
    #[strum(serialize = "wait")]
    Wait,
    /// `zoom-in`
    #[strum(serialize = "zoom-in")]
    ZoomIn,
}

/// A pointer shape provided by the host shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum CursorShape {
    /// The standard arrow.
    #[default]
    Arrow,
    /// An arrow pointing up.
    UpArrow,
    /// Crosshair.
    Cross,
    /// Busy indicator.
    Busy,
    /// Text insertion bar.
    IBeam,
    /// Vertical resize.
    SizeVer,
    /// Horizontal resize.
    SizeHor,
    /// Diagonal resize, bottom-left to top-right.
    SizeBDiag,
    /// Diagonal resize, top-left to bottom-right.
    SizeFDiag,
    /// Move in any direction.
    SizeAll,
    /// No cursor at all.
    Blank,
    /// Vertical splitter.
    SplitV,
    /// Horizontal splitter.
    SplitH,
    /// Pointing hand, used for links.
    PointingHand,
    /// Action not allowed.
    Forbidden,
    /// Context help.
    WhatsThis,
    /// Open hand.
    OpenHand,
    /// Closed hand.
    ClosedHand,
    /// Drag that copies.
    DragCopy,
}

impl CursorKeyword {
    /// The shell shape this keyword is shown as.
    ///
    /// Keywords the shell has no shape for (`context-menu`, `url`,
    /// `zoom-in`) fall back to the arrow.
    #[must_use]
    pub const fn shape(self) -> CursorShape {
        match self {
            Self::Alias | Self::Pointer => CursorShape::PointingHand,
            Self::AllScroll | Self::Move => CursorShape::SizeAll,
            Self::Auto | Self::ContextMenu | Self::Default | Self::Url | Self::ZoomIn => {
                CursorShape::Arrow
            }
            Self::Cell => CursorShape::UpArrow,
            Self::ColResize => CursorShape::SplitH,
            Self::RowResize => CursorShape::SplitV,
            Self::Copy => CursorShape::DragCopy,
            Self::Crosshair => CursorShape::Cross,
            Self::EResize | Self::EwResize | Self::WResize => CursorShape::SizeHor,
            Self::NResize | Self::NsResize | Self::SResize => CursorShape::SizeVer,
            Self::NeResize | Self::NeswResize | Self::SwResize => CursorShape::SizeBDiag,
            Self::NwResize | Self::NwseResize | Self::SeResize => CursorShape::SizeFDiag,
            Self::Grab => CursorShape::OpenHand,
            Self::Grabbing => CursorShape::ClosedHand,
            Self::Help => CursorShape::WhatsThis,
            Self::NoDrop | Self::NotAllowed => CursorShape::Forbidden,
            Self::None => CursorShape::Blank,
            Self::Progress | Self::Wait => CursorShape::Busy,
            Self::Text => CursorShape::IBeam,
        }
    }
}

/// Map a cursor name to a shell shape.
///
/// # Errors
///
/// Returns [`PaintIssue::UnknownCursor`] for names outside the table; the
/// caller shows [`CursorShape::Arrow`] instead.
pub fn cursor_shape(name: &str) -> Result<CursorShape, PaintIssue> {
    CursorKeyword::from_str(name)
        .map(CursorKeyword::shape)
        .map_err(|_| PaintIssue::UnknownCursor(name.to_owned()))
}

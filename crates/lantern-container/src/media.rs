//! Media feature values for media query evaluation.
//!
//! [Media Queries Level 4 § 4 Media Features](https://www.w3.org/TR/mediaqueries-4/#mq-features)

use strum_macros::{Display, EnumString};

/// [§ 2.3 Media Types](https://www.w3.org/TR/mediaqueries-4/#media-types)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    /// "Matches all devices."
    All,
    /// "Matches all devices that aren't matched by print."
    #[default]
    Screen,
    /// "Matches printers, and devices intended to reproduce a printed
    /// display."
    Print,
}

/// The values the layout engine tests media queries against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaFeatures {
    /// Media type of the output device.
    pub media_type: MediaType,
    /// [§ 4.1 'width'](https://www.w3.org/TR/mediaqueries-4/#width)
    pub width: u32,
    /// [§ 4.2 'height'](https://www.w3.org/TR/mediaqueries-4/#height)
    pub height: u32,
    /// Width of the whole output device.
    pub device_width: u32,
    /// Height of the whole output device.
    pub device_height: u32,
    /// [§ 6.1 'color'](https://www.w3.org/TR/mediaqueries-4/#color)
    ///
    /// Bits per color component; zero on monochrome devices.
    pub color: u32,
    /// [§ 6.2 'color-index'](https://www.w3.org/TR/mediaqueries-4/#color-index)
    pub color_index: u32,
    /// [§ 6.3 'monochrome'](https://www.w3.org/TR/mediaqueries-4/#monochrome)
    pub monochrome: u32,
    /// [§ 4.5 'resolution'](https://www.w3.org/TR/mediaqueries-4/#resolution)
    ///
    /// Dots per inch.
    pub resolution: f32,
}

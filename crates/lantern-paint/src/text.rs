//! Font descriptions and text transforms.
//!
//! Shaping and line breaking belong to the layout engine; the container
//! only needs to know which face a run uses and how to case-map it.

use strum_macros::{Display, EnumString};

/// [§ 3 'text-decoration-line'](https://www.w3.org/TR/css-text-decoration-3/#text-decoration-line-property)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct TextDecoration {
    /// "Each line of text is underlined."
    pub underline: bool,
    /// "Each line of text has a line over it."
    pub overline: bool,
    /// "Each line of text has a line through the middle."
    pub line_through: bool,
}

impl TextDecoration {
    /// No decoration.
    pub const NONE: Self = Self {
        underline: false,
        overline: false,
        line_through: false,
    };

    /// True when no line is drawn.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.underline && !self.overline && !self.line_through
    }
}

/// The face a text run is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Family names in preference order, generic families already mapped.
    pub families: Vec<String>,
    /// Pixel size.
    pub size: f32,
    /// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
    ///
    /// Numeric weight (400 = normal, 700 = bold).
    pub weight: u16,
    /// [§ 3.3 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
    pub italic: bool,
    /// Decoration lines drawn with the text.
    pub decoration: TextDecoration,
}

impl FontDescriptor {
    /// True for weights the renderer draws with a bold face.
    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.weight >= 600
    }
}

/// Split a `font-family` list and map generic families to concrete faces.
///
/// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
///
/// Whitespace and surrounding double quotes are trimmed from each entry;
/// empty entries are dropped.
#[must_use]
pub fn parse_family_list(face_names: &str) -> Vec<String> {
    face_names
        .split(',')
        .map(|name| {
            let name = name.trim();
            let name = name.strip_prefix('"').unwrap_or(name);
            name.strip_suffix('"').unwrap_or(name)
        })
        .filter(|name| !name.is_empty())
        .map(|name| match name.to_ascii_lowercase().as_str() {
            "serif" => "Times New Roman".to_string(),
            "sans-serif" => "Arial".to_string(),
            "monospace" => "Courier".to_string(),
            _ => name.to_string(),
        })
        .collect()
}

/// [§ 2.1 'text-transform'](https://www.w3.org/TR/css-text-3/#text-transform-property)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum TextTransform {
    /// "No effects."
    #[default]
    None,
    /// "Puts the first typographic letter unit of each word, if lowercase,
    /// in titlecase."
    Capitalize,
    /// "Puts all letters in uppercase."
    Uppercase,
    /// "Puts all letters in lowercase."
    Lowercase,
}

/// Apply a text transform.
#[must_use]
pub fn transform_text(text: &str, transform: TextTransform) -> String {
    match transform {
        TextTransform::None => text.to_string(),
        TextTransform::Uppercase => text.to_uppercase(),
        TextTransform::Lowercase => text.to_lowercase(),
        TextTransform::Capitalize => {
            let mut result = String::with_capacity(text.len());
            let mut at_word_start = true;
            for ch in text.chars() {
                if at_word_start && ch.is_alphabetic() {
                    result.extend(ch.to_uppercase());
                    at_word_start = false;
                } else {
                    result.push(ch);
                    if ch.is_whitespace() {
                        at_word_start = true;
                    } else if ch.is_alphanumeric() {
                        at_word_start = false;
                    }
                }
            }
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_family_list() {
        assert_eq!(
            parse_family_list(" \"Helvetica Neue\", sans-serif ,,monospace"),
            vec!["Helvetica Neue", "Arial", "Courier"]
        );
        assert_eq!(parse_family_list("Serif"), vec!["Times New Roman"]);
        assert!(parse_family_list("").is_empty());
    }

    #[test]
    fn test_transform_text() {
        assert_eq!(transform_text("Hello", TextTransform::Uppercase), "HELLO");
        assert_eq!(transform_text("Hello", TextTransform::Lowercase), "hello");
        assert_eq!(transform_text("Hello", TextTransform::None), "Hello");
        assert_eq!(
            transform_text("hello  wide world", TextTransform::Capitalize),
            "Hello  Wide World"
        );
        assert_eq!(
            transform_text("(quoted) 3rd", TextTransform::Capitalize),
            "(Quoted) 3rd"
        );
    }
}

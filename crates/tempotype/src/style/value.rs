//! Individual style property values.
//!
//! Every value formats (via [`Display`](std::fmt::Display)) exactly as a
//! browser reports the corresponding inline style property, so rendered
//! output can be compared against `element.style.*` readings verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseValueError;

/// Font weight used by the speed tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum FontWeight {
    /// `300`
    Light,
    /// `400`
    Regular,
    /// `600`
    SemiBold,
    /// `700`
    Bold,
}

impl FontWeight {
    /// Returns the numeric CSS weight.
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = ParseValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            300 => Ok(FontWeight::Light),
            400 => Ok(FontWeight::Regular),
            600 => Ok(FontWeight::SemiBold),
            700 => Ok(FontWeight::Bold),
            other => Err(ParseValueError::new("font-weight", other.to_string())),
        }
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.value()
    }
}

impl FromStr for FontWeight {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map_err(|_| ParseValueError::new("font-weight", s))
            .and_then(FontWeight::try_from)
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Returns the color as an `(r, g, b)` triple.
    pub fn triple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self(r, g, b)
    }
}

/// Accepts `rgb(r, g, b)` (whitespace optional) and `#rrggbb`.
impl FromStr for Rgb {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseValueError::new("color", s);
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let inner = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let channels = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match channels[..] {
            [r, g, b] => Ok(Rgb(r, g, b)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Font style: upright or italic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Extra tracking applied between glyphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterSpacing {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    /// `0.02em`
    #[serde(rename = "0.02em")]
    Relaxed,
    /// `0.05em`
    #[serde(rename = "0.05em")]
    Wide,
}

impl LetterSpacing {
    pub fn as_css(self) -> &'static str {
        match self {
            LetterSpacing::Normal => "normal",
            LetterSpacing::Relaxed => "0.02em",
            LetterSpacing::Wide => "0.05em",
        }
    }
}

impl FromStr for LetterSpacing {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(LetterSpacing::Normal),
            "0.02em" => Ok(LetterSpacing::Relaxed),
            "0.05em" => Ok(LetterSpacing::Wide),
            _ => Err(ParseValueError::new("letter-spacing", s)),
        }
    }
}

impl fmt::Display for LetterSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Glyph transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transform {
    #[default]
    #[serde(rename = "none")]
    None,
    /// `scale(1.05)`
    #[serde(rename = "scale(1.05)")]
    Enlarged,
}

impl Transform {
    pub fn as_css(self) -> &'static str {
        match self {
            Transform::None => "none",
            Transform::Enlarged => "scale(1.05)",
        }
    }
}

impl FromStr for Transform {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(Transform::None),
            "scale(1.05)" => Ok(Transform::Enlarged),
            _ => Err(ParseValueError::new("transform", s)),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

//! Tier styles and resolved per-character render specs.

use serde::Serialize;

use super::value::{FontStyle, FontWeight, LetterSpacing, Rgb, Transform};

/// The style bundle a speed tier assigns to the characters it covers.
///
/// # Example
///
/// ```rust
/// use tempotype::style::{FontWeight, LetterSpacing, Rgb, TierStyle};
///
/// let fast = TierStyle::new(FontWeight::SemiBold, Rgb(148, 163, 184))
///     .letter_spacing(LetterSpacing::Relaxed);
/// assert_eq!(fast.letter_spacing, LetterSpacing::Relaxed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierStyle {
    pub font_weight: FontWeight,
    pub color: Rgb,
    pub font_style: FontStyle,
    pub letter_spacing: LetterSpacing,
    pub transform: Transform,
}

impl TierStyle {
    /// Creates a tier style with neutral font style, spacing and transform.
    pub const fn new(font_weight: FontWeight, color: Rgb) -> Self {
        Self {
            font_weight,
            color,
            font_style: FontStyle::Normal,
            letter_spacing: LetterSpacing::Normal,
            transform: Transform::None,
        }
    }

    pub const fn italic(mut self) -> Self {
        self.font_style = FontStyle::Italic;
        self
    }

    pub const fn letter_spacing(mut self, spacing: LetterSpacing) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub const fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Returns this style with font style, spacing and transform reset.
    ///
    /// Weight and color are kept.
    pub const fn neutralized(self) -> Self {
        Self::new(self.font_weight, self.color)
    }

    /// Pairs this style with a character.
    pub const fn for_char(self, character: char) -> CharacterRenderSpec {
        CharacterRenderSpec {
            character,
            font_weight: self.font_weight,
            color: self.color,
            font_style: self.font_style,
            letter_spacing: self.letter_spacing,
            transform: self.transform,
        }
    }
}

/// The resolved visual style of one character.
///
/// Computed fresh on every input change and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRenderSpec {
    pub character: char,
    pub font_weight: FontWeight,
    pub color: Rgb,
    pub font_style: FontStyle,
    pub letter_spacing: LetterSpacing,
    pub transform: Transform,
}

impl CharacterRenderSpec {
    /// CSS property names in the order they are emitted.
    pub const PROPERTIES: [&'static str; 5] = [
        "font-weight",
        "color",
        "font-style",
        "letter-spacing",
        "transform",
    ];

    /// The text content of the rendered element.
    pub fn inner_text(&self) -> String {
        self.character.to_string()
    }

    /// Reads a single inline style property.
    ///
    /// Accepts both the CSS name (`letter-spacing`) and the DOM name
    /// (`letterSpacing`). Returns `None` for properties this spec doesn't set.
    pub fn style(&self, property: &str) -> Option<String> {
        let value = match property {
            "font-weight" | "fontWeight" => self.font_weight.to_string(),
            "color" => self.color.to_string(),
            "font-style" | "fontStyle" => self.font_style.to_string(),
            "letter-spacing" | "letterSpacing" => self.letter_spacing.to_string(),
            "transform" => self.transform.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Returns `(property, value)` pairs for every inline style property.
    pub fn declarations(&self) -> [(&'static str, String); 5] {
        [
            ("font-weight", self.font_weight.to_string()),
            ("color", self.color.to_string()),
            ("font-style", self.font_style.to_string()),
            ("letter-spacing", self.letter_spacing.to_string()),
            ("transform", self.transform.to_string()),
        ]
    }

    /// Serializes the inline style as a `style` attribute value.
    pub fn css_text(&self) -> String {
        self.declarations()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

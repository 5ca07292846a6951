//! Per-character style resolution.

use once_cell::sync::Lazy;
use tracing::trace;

use super::error::TierValidationError;
use super::table::{TierTable, BLAZING_TIER, DEFAULT_BOUNDS};
use crate::style::{CharacterRenderSpec, TierStyle};

static DEFAULT_RESOLVER: Lazy<StyleResolver> = Lazy::new(StyleResolver::default);

/// Returns `true` for characters that get neutral font style, spacing and
/// transform regardless of speed.
pub fn is_blank(character: char) -> bool {
    character.is_whitespace()
}

/// Maps `(character, speed)` to a render spec using a validated tier table.
///
/// Resolution is total: every speed (including negative values and NaN)
/// lands in exactly one tier, and every character is accepted.
///
/// # Example
///
/// ```rust
/// use tempotype::StyleResolver;
///
/// let resolver = StyleResolver::default();
/// let spec = resolver.resolve('c', 10.0);
/// assert_eq!(spec.style("letterSpacing").as_deref(), Some("0.02em"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleResolver {
    table: TierTable,
    bounded: Vec<(f64, TierStyle)>,
    open: TierStyle,
}

impl StyleResolver {
    /// Creates a resolver over `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table fails [`TierTable::validate`].
    pub fn new(table: TierTable) -> Result<Self, TierValidationError> {
        table.validate()?;

        let mut bounded = Vec::with_capacity(table.len());
        let mut open = None;
        for tier in table.tiers() {
            match tier.max_speed {
                Some(max) => bounded.push((max, tier.style)),
                None => open = Some(tier.style),
            }
        }
        let open = open.ok_or(TierValidationError::MissingOpenTier)?;

        Ok(Self {
            table,
            bounded,
            open,
        })
    }

    /// Returns the tier table this resolver was built from.
    pub fn table(&self) -> &TierTable {
        &self.table
    }

    /// Returns the tier style for `speed`, before any blank override.
    pub fn tier_style(&self, speed: f64) -> TierStyle {
        self.bounded
            .iter()
            .find(|(max, _)| speed <= *max)
            .map(|(_, style)| *style)
            .unwrap_or(self.open)
    }

    /// Resolves a single character.
    ///
    /// Blank characters keep the tier's weight and color but have font style,
    /// letter spacing and transform reset to their neutral values.
    pub fn resolve(&self, character: char, speed: f64) -> CharacterRenderSpec {
        let style = self.tier_style(speed);
        let style = if is_blank(character) {
            style.neutralized()
        } else {
            style
        };
        trace!(?character, speed, weight = %style.font_weight, "resolved character style");
        style.for_char(character)
    }

    /// Resolves every character of `text` in order.
    ///
    /// Empty text yields an empty sequence.
    pub fn resolve_text(&self, text: &str, speed: f64) -> Vec<CharacterRenderSpec> {
        let style = self.tier_style(speed);
        let neutral = style.neutralized();
        text.chars()
            .map(|c| {
                let style = if is_blank(c) { neutral } else { style };
                style.for_char(c)
            })
            .collect()
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self {
            table: TierTable::default(),
            bounded: DEFAULT_BOUNDS.to_vec(),
            open: BLAZING_TIER,
        }
    }
}

/// Resolves a character against the stock tier table.
///
/// # Example
///
/// ```rust
/// let spec = tempotype::resolve('d', 20.0);
/// assert_eq!(spec.style("fontStyle").as_deref(), Some("italic"));
/// assert_eq!(spec.style("transform").as_deref(), Some("scale(1.05)"));
///
/// let space = tempotype::resolve(' ', 20.0);
/// assert_eq!(space.style("transform").as_deref(), Some("none"));
/// ```
pub fn resolve(character: char, speed: f64) -> CharacterRenderSpec {
    DEFAULT_RESOLVER.resolve(character, speed)
}

/// Resolves every character of `text` against the stock tier table.
pub fn resolve_text(text: &str, speed: f64) -> Vec<CharacterRenderSpec> {
    DEFAULT_RESOLVER.resolve_text(text, speed)
}

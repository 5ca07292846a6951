//! Ordered speed tier tables.

use serde::Serialize;

use super::error::TierValidationError;
use crate::style::{FontWeight, LetterSpacing, Rgb, TierStyle, Transform};

/// Color of the slowest tier.
pub const SLOW_COLOR: Rgb = Rgb(203, 213, 225);
/// Color of the steady tier.
pub const STEADY_COLOR: Rgb = Rgb(226, 232, 240);
/// Color of the fast tier.
pub const FAST_COLOR: Rgb = Rgb(148, 163, 184);
/// Color of the open-ended top tier.
pub const BLAZING_COLOR: Rgb = Rgb(43, 140, 238);

/// Style for speeds up to 3.
pub const SLOW_TIER: TierStyle = TierStyle::new(FontWeight::Light, SLOW_COLOR);
/// Style for speeds above 3, up to 8.
pub const STEADY_TIER: TierStyle = TierStyle::new(FontWeight::Regular, STEADY_COLOR);
/// Style for speeds above 8, up to 15.
pub const FAST_TIER: TierStyle =
    TierStyle::new(FontWeight::SemiBold, FAST_COLOR).letter_spacing(LetterSpacing::Relaxed);
/// Style for speeds above 15.
pub const BLAZING_TIER: TierStyle = TierStyle::new(FontWeight::Bold, BLAZING_COLOR)
    .italic()
    .letter_spacing(LetterSpacing::Wide)
    .transform(Transform::Enlarged);

/// Inclusive upper bounds of the stock bounded tiers.
pub(crate) const DEFAULT_BOUNDS: [(f64, TierStyle); 3] =
    [(3.0, SLOW_TIER), (8.0, STEADY_TIER), (15.0, FAST_TIER)];

/// One contiguous range of typing speed mapped to a fixed style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tier {
    /// Inclusive upper bound; `None` for the final open-ended tier.
    pub max_speed: Option<f64>,
    pub style: TierStyle,
}

impl Tier {
    /// Returns `true` when `speed` falls at or below this tier's bound.
    ///
    /// NaN is never admitted by a bounded tier.
    pub fn admits(&self, speed: f64) -> bool {
        match self.max_speed {
            Some(max) => speed <= max,
            None => true,
        }
    }
}

/// Speed tiers evaluated in order, first match wins.
///
/// Built with a fluent API: bounded tiers with [`up_to`](Self::up_to),
/// then a single open-ended tier with [`above`](Self::above).
///
/// # Example
///
/// ```rust
/// use tempotype::style::{FontWeight, Rgb, TierStyle};
/// use tempotype::TierTable;
///
/// let table = TierTable::new()
///     .up_to(5.0, TierStyle::new(FontWeight::Light, Rgb(200, 200, 200)))
///     .above(TierStyle::new(FontWeight::Bold, Rgb(0, 0, 255)));
/// assert!(table.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Appends a bounded tier covering speeds up to and including `max_speed`.
    pub fn up_to(mut self, max_speed: f64, style: TierStyle) -> Self {
        self.tiers.push(Tier {
            max_speed: Some(max_speed),
            style,
        });
        self
    }

    /// Appends the open-ended tier covering every remaining speed.
    pub fn above(mut self, style: TierStyle) -> Self {
        self.tiers.push(Tier {
            max_speed: None,
            style,
        });
        self
    }

    pub(crate) fn from_tiers(tiers: Vec<Tier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Returns the index and tier that `speed` falls into.
    ///
    /// Returns `None` only for tables without an open-ended tier.
    pub fn tier_for(&self, speed: f64) -> Option<(usize, &Tier)> {
        self.tiers.iter().enumerate().find(|(_, tier)| tier.admits(speed))
    }

    /// Checks that the table is non-empty, its bounds are strictly ascending,
    /// and it ends with exactly one open-ended tier.
    pub fn validate(&self) -> Result<(), TierValidationError> {
        let (last, bounded) = self.tiers.split_last().ok_or(TierValidationError::Empty)?;

        let mut previous: Option<f64> = None;
        for (index, tier) in bounded.iter().enumerate() {
            let bound = tier
                .max_speed
                .ok_or(TierValidationError::OpenTierNotLast { index })?;
            if bound.is_nan() {
                return Err(TierValidationError::NanBound { index });
            }
            if let Some(prev) = previous {
                if bound <= prev {
                    return Err(TierValidationError::NotAscending {
                        index,
                        previous: prev,
                        bound,
                    });
                }
            }
            previous = Some(bound);
        }

        if last.max_speed.is_some() {
            return Err(TierValidationError::MissingOpenTier);
        }
        Ok(())
    }
}

/// The stock four-tier table.
///
/// | Speed | Weight | Color | Style | Spacing | Transform |
/// |---|---|---|---|---|---|
/// | `<= 3` | 300 | [`SLOW_COLOR`] | normal | normal | none |
/// | `<= 8` | 400 | [`STEADY_COLOR`] | normal | normal | none |
/// | `<= 15` | 600 | [`FAST_COLOR`] | normal | 0.02em | none |
/// | `> 15` | 700 | [`BLAZING_COLOR`] | italic | 0.05em | scale(1.05) |
impl Default for TierTable {
    fn default() -> Self {
        DEFAULT_BOUNDS
            .iter()
            .fold(TierTable::new(), |table, (max, style)| table.up_to(*max, *style))
            .above(BLAZING_TIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(weight: FontWeight) -> TierStyle {
        TierStyle::new(weight, Rgb(0, 0, 0))
    }

    #[test]
    fn test_default_table_is_valid() {
        let table = TierTable::default();
        assert_eq!(table.len(), 4);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_tier_for_upper_bound_is_inclusive() {
        let table = TierTable::default();
        assert_eq!(table.tier_for(3.0).map(|(i, _)| i), Some(0));
        assert_eq!(table.tier_for(3.0001).map(|(i, _)| i), Some(1));
        assert_eq!(table.tier_for(8.0).map(|(i, _)| i), Some(1));
        assert_eq!(table.tier_for(15.0).map(|(i, _)| i), Some(2));
        assert_eq!(table.tier_for(15.5).map(|(i, _)| i), Some(3));
    }

    #[test]
    fn test_tier_for_nan_lands_in_open_tier() {
        let table = TierTable::default();
        assert_eq!(table.tier_for(f64::NAN).map(|(i, _)| i), Some(3));
    }

    #[test]
    fn test_tier_for_without_open_tier() {
        let table = TierTable::new().up_to(1.0, plain(FontWeight::Light));
        assert!(table.tier_for(2.0).is_none());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(TierTable::new().validate(), Err(TierValidationError::Empty));
    }

    #[test]
    fn test_validate_missing_open_tier() {
        let table = TierTable::new().up_to(1.0, plain(FontWeight::Light));
        assert_eq!(table.validate(), Err(TierValidationError::MissingOpenTier));
    }

    #[test]
    fn test_validate_open_tier_not_last() {
        let table = TierTable::new()
            .above(plain(FontWeight::Light))
            .above(plain(FontWeight::Bold));
        assert_eq!(
            table.validate(),
            Err(TierValidationError::OpenTierNotLast { index: 0 })
        );
    }

    #[test]
    fn test_validate_not_ascending() {
        let table = TierTable::new()
            .up_to(5.0, plain(FontWeight::Light))
            .up_to(5.0, plain(FontWeight::Regular))
            .above(plain(FontWeight::Bold));
        assert_eq!(
            table.validate(),
            Err(TierValidationError::NotAscending {
                index: 1,
                previous: 5.0,
                bound: 5.0,
            })
        );
    }

    #[test]
    fn test_validate_nan_bound() {
        let table = TierTable::new()
            .up_to(f64::NAN, plain(FontWeight::Light))
            .above(plain(FontWeight::Bold));
        assert_eq!(
            table.validate(),
            Err(TierValidationError::NanBound { index: 0 })
        );
    }

    #[test]
    fn test_single_open_tier_is_valid() {
        let table = TierTable::new().above(plain(FontWeight::Regular));
        assert!(table.validate().is_ok());
        assert_eq!(table.tier_for(-100.0).map(|(i, _)| i), Some(0));
    }
}

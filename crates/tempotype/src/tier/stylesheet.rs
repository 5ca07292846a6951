//! YAML tier stylesheets.
//!
//! A stylesheet lists tiers in evaluation order. Every tier but the last
//! carries an inclusive `max_speed`; the last omits it and covers every
//! remaining speed.
//!
//! ```yaml
//! tiers:
//!   - max_speed: 4
//!     weight: 300
//!     color: "rgb(203, 213, 225)"
//!   - max_speed: 12
//!     weight: 600
//!     color: "#94a3b8"
//!     letter_spacing: 0.02em
//!   - weight: 700
//!     color: "#2b8cee"
//!     italic: true
//!     letter_spacing: 0.05em
//!     transform: scale(1.05)
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::error::StylesheetError;
use super::table::{Tier, TierTable};
use crate::style::{FontStyle, FontWeight, LetterSpacing, Rgb, TierStyle, Transform};

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Stylesheet {
    tiers: Vec<TierEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TierEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_speed: Option<f64>,
    weight: FontWeight,
    color: Rgb,
    #[serde(default, skip_serializing_if = "is_false")]
    italic: bool,
    #[serde(default, skip_serializing_if = "is_default")]
    letter_spacing: LetterSpacing,
    #[serde(default, skip_serializing_if = "is_default")]
    transform: Transform,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

impl TierEntry {
    fn into_tier(self) -> Tier {
        let mut style = TierStyle::new(self.weight, self.color)
            .letter_spacing(self.letter_spacing)
            .transform(self.transform);
        if self.italic {
            style = style.italic();
        }
        Tier {
            max_speed: self.max_speed,
            style,
        }
    }

    fn from_tier(tier: &Tier) -> Self {
        TierEntry {
            max_speed: tier.max_speed,
            weight: tier.style.font_weight,
            color: tier.style.color,
            italic: tier.style.font_style == FontStyle::Italic,
            letter_spacing: tier.style.letter_spacing,
            transform: tier.style.transform,
        }
    }
}

impl TierTable {
    /// Parses and validates a tier table from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a property value is not
    /// recognized, or the resulting table fails [`validate`](Self::validate).
    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        let sheet: Stylesheet = serde_yaml::from_str(source)?;
        let tiers = sheet.tiers.into_iter().map(TierEntry::into_tier).collect();
        let table = TierTable::from_tiers(tiers);
        table.validate()?;
        debug!(tiers = table.len(), "parsed tier stylesheet");
        Ok(table)
    }

    /// Reads a YAML stylesheet from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading tier stylesheet");
        let source = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Serializes the table in stylesheet form.
    pub fn to_yaml(&self) -> Result<String, StylesheetError> {
        let sheet = Stylesheet {
            tiers: self.tiers().iter().map(TierEntry::from_tier).collect(),
        };
        Ok(serde_yaml::to_string(&sheet)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::TierValidationError;
    use std::io::Write;

    const SHEET: &str = r##"
tiers:
  - max_speed: 4
    weight: 300
    color: "rgb(1, 2, 3)"
  - max_speed: 12.5
    weight: 600
    color: "#94a3b8"
    letter_spacing: 0.02em
  - weight: 700
    color: "#2b8cee"
    italic: true
    letter_spacing: 0.05em
    transform: scale(1.05)
"##;

    #[test]
    fn test_from_yaml() {
        let table = TierTable::from_yaml(SHEET).unwrap();
        assert_eq!(table.len(), 3);

        let tiers = table.tiers();
        assert_eq!(tiers[0].max_speed, Some(4.0));
        assert_eq!(tiers[0].style.color, Rgb(1, 2, 3));
        assert_eq!(tiers[1].max_speed, Some(12.5));
        assert_eq!(tiers[1].style.letter_spacing, LetterSpacing::Relaxed);
        assert_eq!(tiers[2].max_speed, None);
        assert_eq!(tiers[2].style.font_style, FontStyle::Italic);
        assert_eq!(tiers[2].style.transform, Transform::Enlarged);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_weight() {
        let yaml = "tiers:\n  - weight: 500\n    color: \"rgb(0, 0, 0)\"\n";
        let err = TierTable::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, StylesheetError::Parse(_)));
    }

    #[test]
    fn test_from_yaml_rejects_signed_hex_color() {
        let yaml = "tiers:\n  - weight: 700\n    color: \"#+1+2+3\"\n";
        assert!(matches!(
            TierTable::from_yaml(yaml),
            Err(StylesheetError::Parse(_))
        ));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_field() {
        let yaml = "tiers:\n  - weight: 400\n    color: \"rgb(0, 0, 0)\"\n    blink: true\n";
        assert!(matches!(
            TierTable::from_yaml(yaml),
            Err(StylesheetError::Parse(_))
        ));
    }

    #[test]
    fn test_from_yaml_validates_table() {
        let yaml = "tiers:\n  - max_speed: 3\n    weight: 300\n    color: \"rgb(0, 0, 0)\"\n";
        match TierTable::from_yaml(yaml) {
            Err(StylesheetError::Invalid(TierValidationError::MissingOpenTier)) => {}
            other => panic!("expected MissingOpenTier, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SHEET.as_bytes()).unwrap();

        let table = TierTable::from_file(file.path()).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        match TierTable::from_file(&missing) {
            Err(StylesheetError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_table_survives_yaml() {
        let yaml = TierTable::default().to_yaml().unwrap();
        assert!(yaml.contains("rgb(43, 140, 238)"));
        assert!(yaml.contains("scale(1.05)"));
        assert_eq!(TierTable::from_yaml(&yaml).unwrap(), TierTable::default());
    }
}

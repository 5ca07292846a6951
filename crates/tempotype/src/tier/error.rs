//! Tier table and stylesheet errors.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a tier table is not usable for resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TierValidationError {
    /// The table has no tiers at all.
    #[error("tier table has no tiers")]
    Empty,
    /// A bound is NaN and would never match.
    #[error("tier {index} has a NaN speed bound")]
    NanBound { index: usize },
    /// Bounds must strictly increase from one tier to the next.
    #[error("tier {index} bound {bound} does not exceed previous bound {previous}")]
    NotAscending {
        index: usize,
        previous: f64,
        bound: f64,
    },
    /// The last tier must be open-ended so every speed resolves.
    #[error("last tier must be open-ended (omit max_speed)")]
    MissingOpenTier,
    /// Only the last tier may be open-ended.
    #[error("tier {index} is open-ended but is not the last tier")]
    OpenTierNotLast { index: usize },
}

/// Error returned when loading a tier stylesheet.
#[derive(Debug, Error)]
pub enum StylesheetError {
    #[error("failed to read stylesheet '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed stylesheet: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid tier table: {0}")]
    Invalid(#[from] TierValidationError),
}

//! Speed tiers and style resolution.
//!
//! This module provides:
//!
//! - [`TierTable`]: an ordered list of speed tiers with a fluent builder API
//! - [`StyleResolver`]: resolves characters against a validated table
//! - [`resolve`] / [`resolve_text`]: shortcuts over the stock table
//! - YAML stylesheets for custom tables ([`TierTable::from_yaml`])
//!
//! Tiers are evaluated in order and the first whose inclusive upper bound
//! admits the speed wins. Blank characters keep the tier's weight and color
//! but lose italics, extra spacing and scaling.

mod error;
mod resolve;
mod stylesheet;
mod table;

pub use error::{StylesheetError, TierValidationError};
pub use resolve::{is_blank, resolve, resolve_text, StyleResolver};
pub use table::{
    Tier, TierTable, BLAZING_COLOR, BLAZING_TIER, FAST_COLOR, FAST_TIER, SLOW_COLOR, SLOW_TIER,
    STEADY_COLOR, STEADY_TIER,
};
